use serde::{Deserialize, Serialize};

/// A single vocabulary entry. `word` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default, alias = "type", alias = "partOfSpeech")]
    pub part_of_speech: String,
    pub meaning: String,
    #[serde(default)]
    pub example: String,
    #[serde(default, alias = "example_vn", alias = "exampleTranslation")]
    pub example_translation: String,
}

impl WordRecord {
    pub fn new(word: &str, meaning: &str) -> Self {
        Self {
            word: word.to_string(),
            pronunciation: String::new(),
            part_of_speech: String::new(),
            meaning: meaning.to_string(),
            example: String::new(),
            example_translation: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Learn,
    Quiz,
}

impl AppMode {
    pub fn toggled(self) -> Self {
        match self {
            AppMode::Learn => AppMode::Quiz,
            AppMode::Quiz => AppMode::Learn,
        }
    }

    pub fn tab_index(self) -> usize {
        match self {
            AppMode::Learn => 0,
            AppMode::Quiz => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

impl CardFace {
    pub fn flipped(self) -> Self {
        match self {
            CardFace::Front => CardFace::Back,
            CardFace::Back => CardFace::Front,
        }
    }
}
