use crate::db::get_data_dir;
use crate::quiz::DEFAULT_QUIZ_LENGTH;
use std::path::PathBuf;

pub const ENV_DATA_DIR: &str = "VOCAB_DATA_DIR";
pub const ENV_VOCABULARY_FILE: &str = "VOCAB_FILE";
pub const ENV_QUIZ_LENGTH: &str = "VOCAB_QUIZ_LENGTH";
pub const ENV_SPEECH_COMMAND: &str = "VOCAB_TTS";
pub const ENV_LOG_FILE: &str = "VOCAB_LOG";

const LOG_FILE: &str = "vocab-trainer.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub vocabulary_file: Option<PathBuf>,
    pub quiz_length: usize,
    /// Program followed by its arguments.
    pub speech_command: Option<Vec<String>>,
    pub log_file: PathBuf,
    /// Problems found while reading the environment, reported after the
    /// logger is up.
    pub warnings: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = non_empty(ENV_DATA_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(get_data_dir);

        let vocabulary_file = non_empty(ENV_VOCABULARY_FILE).map(PathBuf::from);

        let quiz_length = match non_empty(ENV_QUIZ_LENGTH) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    warnings.push(format!(
                        "Ignoring {}={:?}: expected a positive integer",
                        ENV_QUIZ_LENGTH, raw
                    ));
                    DEFAULT_QUIZ_LENGTH
                }
            },
            None => DEFAULT_QUIZ_LENGTH,
        };

        let speech_command = non_empty(ENV_SPEECH_COMMAND)
            .map(|raw| raw.split_whitespace().map(str::to_string).collect());

        let log_file = non_empty(ENV_LOG_FILE)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(LOG_FILE));

        Self {
            data_dir,
            vocabulary_file,
            quiz_length,
            speech_command,
            log_file,
            warnings,
        }
    }
}
