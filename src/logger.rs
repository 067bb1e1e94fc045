use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Open the log file once. Later calls keep the first file.
pub fn init(path: &Path) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if logger.is_none() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        if let Ok(file) = OpenOptions::new().create(true).append(true).open(path) {
            *logger = Some(file);
        }
    }
}

pub fn log(message: &str) {
    write_line("INFO", message);
}

pub fn warn(message: &str) {
    write_line("WARN", message);
}

fn write_line(level: &str, message: &str) {
    if let Ok(mut guard) = LOGGER.lock()
        && let Some(logger) = guard.as_mut()
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(logger, "[{}] {} {}", timestamp, level, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_init() {
        let dir = tempfile::tempdir().unwrap();
        init(&dir.path().join("logs").join("test.log"));
    }

    #[test]
    fn test_logger_log() {
        let dir = tempfile::tempdir().unwrap();
        init(&dir.path().join("test.log"));
        log("Test log message");
        warn("Test warning");
    }
}
