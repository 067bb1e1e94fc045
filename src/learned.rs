use crate::db::{self, KeyValueStore, MemoryStore, load_json, store_json};
use crate::error::StorageError;
use crate::logger;
use crate::models::WordRecord;
use std::collections::BTreeSet;
use std::path::Path;

pub const LEARNED_WORDS_KEY: &str = "learned_words";

/// Words the learner has starred, persisted as a full snapshot after each
/// change. Storage failures drop the set back to memory-only operation.
pub struct LearnedSet {
    words: BTreeSet<String>,
    store: Box<dyn KeyValueStore>,
    warning: Option<String>,
}

impl LearnedSet {
    /// Read the persisted snapshot. Missing or malformed data yields an
    /// empty set; a failing store is replaced with an in-memory one.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let mut set = Self {
            words: BTreeSet::new(),
            store,
            warning: None,
        };

        match load_json::<Vec<String>>(set.store.as_ref(), LEARNED_WORDS_KEY) {
            Ok(Some(words)) => {
                set.words = words.into_iter().collect();
                logger::log(&format!("Loaded {} learned words", set.words.len()));
            }
            Ok(None) => {}
            Err(StorageError::Serialization(e)) => {
                logger::warn(&format!("Ignoring malformed learned words: {}", e));
            }
            Err(e) => set.fall_back_to_memory(&e.to_string()),
        }

        set
    }

    /// Load from the SQLite store under `data_dir`. When the store cannot be
    /// opened the set lives in memory and a notice for the user is returned.
    pub fn open(data_dir: &Path) -> (Self, Option<String>) {
        match db::init_db(data_dir) {
            Ok(store) => (Self::load(Box::new(store)), None),
            Err(e) => {
                logger::warn(&format!(
                    "Failed to open database in {}: {}",
                    data_dir.display(),
                    e
                ));
                (
                    Self::in_memory(),
                    Some("Progress will not be saved this session".to_string()),
                )
            }
        }
    }

    pub fn in_memory() -> Self {
        Self {
            words: BTreeSet::new(),
            store: Box::new(MemoryStore::default()),
            warning: None,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words in `vocabulary` that are learned. Stored words from
    /// another word list are not counted.
    pub fn count_in(&self, vocabulary: &[WordRecord]) -> usize {
        vocabulary
            .iter()
            .filter(|record| self.words.contains(&record.word))
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn is_persistent(&self) -> bool {
        self.store.is_persistent()
    }

    /// Insert `word` if absent, remove it if present. Returns whether the
    /// word is learned afterwards.
    pub fn toggle(&mut self, word: &str) -> bool {
        let learned = if self.words.remove(word) {
            false
        } else {
            self.words.insert(word.to_string());
            true
        };
        self.persist();
        learned
    }

    /// Pending user-facing warning about persistence, if any.
    pub fn take_warning(&mut self) -> Option<String> {
        self.warning.take()
    }

    fn persist(&mut self) {
        let snapshot: Vec<&str> = self.words.iter().map(String::as_str).collect();
        if let Err(e) = store_json(self.store.as_mut(), LEARNED_WORDS_KEY, &snapshot) {
            self.fall_back_to_memory(&e.to_string());
        }
    }

    fn fall_back_to_memory(&mut self, reason: &str) {
        logger::warn(&format!("Learned words storage unavailable: {}", reason));
        self.store = Box::new(MemoryStore::default());
        self.warning = Some(format!(
            "Progress storage unavailable ({}); learned words will not be saved",
            reason
        ));
    }
}
