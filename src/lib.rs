pub mod app;
pub mod config;
pub mod csv;
pub mod db;
pub mod error;
pub mod input;
pub mod learned;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod review;
pub mod speech;
pub mod ui;
pub mod utils;
pub mod vocabulary;

// Re-exports for convenience
pub use app::{App, QuizState};
pub use config::AppConfig;
pub use error::{QuizError, SpeechError, StorageError, VocabularyError};
pub use input::handle_key;
pub use learned::LearnedSet;
pub use models::{AppMode, CardFace, WordRecord};
pub use quiz::{AnswerOutcome, QuizPhase, QuizQuestion, QuizResult, QuizSession};
pub use review::ReviewSession;
pub use speech::{CommandSpeaker, Speaker, SpeechHandle};
pub use ui::draw;
