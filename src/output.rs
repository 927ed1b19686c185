//! User-facing console lines (outside of tracing).
//! Colors are enabled only when the stream is a TTY.

use owo_colors::OwoColorize;

use crate::fs_ops::MoveReport;

fn stdout_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn stderr_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_info(msg: &str) {
    if stdout_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if stdout_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// One-line summary of a finished run, e.g. "moved 3 file(s), skipped 1, created 2 dir(s)".
pub fn summary_line(report: &MoveReport) -> String {
    let verb = if report.is_dry_run() { "would move" } else { "moved" };
    let mut line = format!(
        "{verb} {} file(s), skipped {}, created {} dir(s)",
        report.files_moved(),
        report.files_skipped(),
        report.dirs_created()
    );
    let failures = report.failures().len();
    if failures > 0 {
        line.push_str(&format!(", {failures} failure(s)"));
    }
    line
}

/// Print the summary: success on stdout, failures on stderr.
pub fn print_summary(report: &MoveReport) {
    let line = summary_line(report);
    if report.is_success() {
        print_success(&line);
    } else {
        print_error(&line);
    }
}
