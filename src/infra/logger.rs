// src/infra/logger.rs — Structured logging with tracing

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Log to stderr. Used by the REPL and one-shot commands.
pub fn init_logging(level: &str) {
    fmt()
        .with_env_filter(filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Log for the full-screen chat view, which owns the terminal. A subscriber
/// is always installed: the log file when it opens, otherwise a sink. The
/// error is returned so the caller can report it before the screen switches.
pub fn init_file_logging(level: &str, path: &Path) -> anyhow::Result<()> {
    let (writer, failure) = file_or_sink(path);

    fmt()
        .with_env_filter(filter(level))
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .compact()
        .init();

    match failure {
        Some(e) => Err(e.context(format!("cannot open log file {}", path.display()))),
        None => Ok(()),
    }
}

/// Writer for the log file at `path`, or a discarding sink plus the reason
/// the file could not be opened.
pub fn file_or_sink(path: &Path) -> (BoxMakeWriter, Option<anyhow::Error>) {
    match open_log_file(path) {
        Ok(file) => (BoxMakeWriter::new(Mutex::new(file)), None),
        Err(e) => (BoxMakeWriter::new(std::io::sink), Some(e)),
    }
}

/// Open `path` for appending, creating its directory.
pub fn open_log_file(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_open_log_file_creates_dirs_and_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("haqooq.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_open_log_file_fails_under_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        assert!(open_log_file(&blocker.join("haqooq.log")).is_err());
    }

    #[test]
    fn test_unopenable_log_falls_back_to_sink() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        let (writer, failure) = file_or_sink(&blocker.join("haqooq.log"));
        assert!(failure.is_some());
        writer.make_writer().write_all(b"dropped").unwrap();
    }

    #[test]
    fn test_log_file_writer_reaches_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("haqooq.log");

        let (writer, failure) = file_or_sink(&path);
        assert!(failure.is_none());
        writer.make_writer().write_all(b"kept").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "kept");
    }
}
