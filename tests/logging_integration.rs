use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use file_move::{MoveRequest, Mover, MoverOptions};
use tempfile::tempdir;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt as tsfmt, registry};

/// A simple writer that appends written bytes into an in-memory Vec<u8>.
#[derive(Clone)]
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let make_writer = {
        let buf = buf.clone();
        move || BufferWriter(buf.clone())
    };
    let layer = tsfmt::layer()
        .with_writer(make_writer)
        .with_ansi(false)
        .with_target(false)
        .compact();
    let subscriber = registry().with(EnvFilter::new("info")).with(layer);

    // Scoped dispatch: events from the calling thread only, no global subscriber.
    let dispatch = tracing::Dispatch::new(subscriber);
    tracing::dispatcher::with_default(&dispatch, f);

    let guard = buf.lock().unwrap();
    String::from_utf8_lossy(&guard[..]).to_string()
}

#[test]
fn missing_source_is_logged_with_kind() {
    let td = tempdir().unwrap();
    let req = MoveRequest::new(td.path().join("gone"), td.path().join("out"), None).unwrap();
    let mover = Mover::new(req, MoverOptions::default()).unwrap();

    let logs = capture(|| {
        let _ = mover.execute();
    });

    assert!(logs.contains("Starting move"), "logs={logs}");
    assert!(logs.contains("source_not_found"), "logs={logs}");
    assert!(logs.contains("Move finished with failures"), "logs={logs}");
}

#[test]
fn successful_file_move_logs_completion() {
    let td = tempdir().unwrap();
    let src = td.path().join("a.txt");
    std::fs::write(&src, "a").unwrap();
    let req = MoveRequest::new(&src, td.path().join("b.txt"), None).unwrap();
    let mover = Mover::new(req, MoverOptions::default()).unwrap();

    let logs = capture(|| {
        assert!(mover.execute().is_success());
    });

    assert!(logs.contains("Moved file"), "logs={logs}");
    assert!(logs.contains("Move completed"), "logs={logs}");
    assert!(logs.contains("moved=1"), "logs={logs}");
}
