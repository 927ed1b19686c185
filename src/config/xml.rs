//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a commented template on request (`--init-config`).
//!
//! Notes:
//! - Every element is optional and trimmed; CLI flags are applied afterwards.
//! - Unknown elements are rejected so typos surface instead of being ignored.

use anyhow::{anyhow, bail, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_config_path, path_has_symlink_ancestor, CONFIG_ENV};
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "config", deny_unknown_fields)]
struct XmlConfig {
    source_path: Option<String>,
    target_path: Option<String>,
    filter: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
    dry_run: Option<String>,
    max_concurrency: Option<String>,
    fail_on_error: Option<String>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_bool(field: &str, raw: Option<&str>) -> Result<Option<bool>> {
    match non_empty(raw) {
        None => Ok(None),
        Some(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(Some(true)),
            "false" | "no" | "0" => Ok(Some(false)),
            other => bail!("<{field}> expects true/false, got '{other}'"),
        },
    }
}

// Map XmlConfig -> Config, starting from defaults.
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = non_empty(parsed.source_path.as_deref()) {
        cfg.source_path = PathBuf::from(s);
    }
    if let Some(s) = non_empty(parsed.target_path.as_deref()) {
        cfg.target_path = PathBuf::from(s);
    }
    if let Some(s) = non_empty(parsed.filter.as_deref()) {
        cfg.filter = s.to_string();
    }
    if let Some(s) = non_empty(parsed.log_file.as_deref()) {
        cfg.log_file = Some(PathBuf::from(s));
    }
    if let Some(s) = non_empty(parsed.log_level.as_deref()) {
        cfg.log_level = s.parse::<LogLevel>().map_err(|e| anyhow!(e))?;
    }
    if let Some(s) = non_empty(parsed.max_concurrency.as_deref()) {
        let n: usize = s
            .parse()
            .with_context(|| format!("<max_concurrency> expects a positive integer, got '{s}'"))?;
        cfg.max_concurrency = Some(
            NonZeroUsize::new(n).ok_or_else(|| anyhow!("<max_concurrency> must be at least 1"))?,
        );
    }
    if let Some(b) = parse_bool("dry_run", parsed.dry_run.as_deref())? {
        cfg.dry_run = b;
    }
    if let Some(b) = parse_bool("fail_on_error", parsed.fail_on_error.as_deref())? {
        cfg.fail_on_error = b;
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in '{}'", path.display()))
}

/// Load the config for this invocation.
///
/// An explicit path (from `--config`) or `$FILE_MOVE_CONFIG` must exist. The
/// platform default location is optional: a missing file yields `Ok(None)`.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<Config>> {
    if let Some(p) = explicit {
        debug!(path = %p.display(), "loading config from --config");
        return load_config_from_xml_path(p).map(Some);
    }
    let env_set = env::var_os(CONFIG_ENV).is_some_and(|v| !v.is_empty());
    let path = default_config_path()?;
    if !env_set && !path.exists() {
        debug!(path = %path.display(), "no config file at default location");
        return Ok(None);
    }
    debug!(path = %path.display(), env_set, "loading config");
    load_config_from_xml_path(&path).map(Some)
}

/// Write a commented template config. Refuses to overwrite an existing file or
/// to write beneath a symlinked ancestor.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
    }

    let content = "<!--\n  file_move configuration (XML)\n\n    source_path      -> file or directory to move from (required)\n    target_path      -> destination file, or destination directory for a directory source (required)\n    filter           -> only move files with this extension, leading dot included (e.g. .js); empty = all\n    log_level        -> quiet | normal | info | debug\n    log_file         -> path to a log file (optional; stdout/stderr still used)\n    dry_run          -> true to only report what would move\n    max_concurrency  -> maximum parallel filesystem operations (default: CPU count)\n    fail_on_error    -> true to exit with status 1 when any move failed\n\n  CLI flags override values from this file.\n-->\n<config>\n  <source_path></source_path>\n  <target_path></target_path>\n  <filter></filter>\n  <log_level>normal</log_level>\n  <dry_run>false</dry_run>\n  <fail_on_error>false</fail_on_error>\n</config>\n";

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("create config file '{}'", path.display()))?;
    std::io::Write::write_all(&mut file, content.as_bytes())
        .with_context(|| format!("write config file '{}'", path.display()))?;

    info!("Created template config at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_parsing_accepts_common_spellings() {
        assert_eq!(parse_bool("x", Some(" TRUE ")).unwrap(), Some(true));
        assert_eq!(parse_bool("x", Some("no")).unwrap(), Some(false));
        assert_eq!(parse_bool("x", Some("")).unwrap(), None);
        assert!(parse_bool("x", Some("maybe")).is_err());
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let parsed = XmlConfig {
            max_concurrency: Some("0".into()),
            ..Default::default()
        };
        assert!(xml_to_config(parsed).is_err());
    }
}
