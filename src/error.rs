use thiserror::Error;

/// Errors raised while building a quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot build quiz: {available} word(s) available, at least {required} needed")]
    InsufficientVocabulary { available: usize, required: usize },

    /// Degraded mode: the question is still produced, with fewer options.
    #[error("only {available} distractor(s) available for \"{word}\"")]
    InsufficientDistractorPool { word: String, available: usize },
}

/// Errors surfaced by key-value storage backends.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while loading a vocabulary list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VocabularyError {
    #[error("failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid vocabulary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: {reason}")]
    Csv { line: usize, reason: String },

    #[error("unsupported vocabulary file extension: {0}")]
    UnsupportedFormat(String),

    #[error("duplicate word \"{0}\"")]
    DuplicateWord(String),

    #[error("vocabulary is empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SpeechError {
    #[error("text-to-speech is not available on this system")]
    Unavailable,

    #[error("text-to-speech failed: {0}")]
    Failed(String),
}
