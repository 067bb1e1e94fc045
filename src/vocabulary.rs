use crate::csv::parse_csv_line;
use crate::error::VocabularyError;
use crate::logger;
use crate::models::WordRecord;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_VOCABULARY: &str = include_str!("../data/vocabulary.json");

const CSV_COLUMNS: usize = 6;

/// The word list bundled with the binary.
pub fn builtin() -> Result<Vec<WordRecord>, VocabularyError> {
    parse_json(BUILTIN_VOCABULARY)
}

/// Load a vocabulary file, picking the parser from the extension.
pub fn load_file(path: &Path) -> Result<Vec<WordRecord>, VocabularyError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let content = fs::read_to_string(path)?;

    match extension.as_str() {
        "json" => parse_json(&content),
        "csv" => parse_csv(&content),
        other => Err(VocabularyError::UnsupportedFormat(other.to_string())),
    }
}

/// Words from `path` when given and readable, otherwise the bundled list.
/// Falling back produces a notice for the user. Only a broken bundled list
/// is an error.
pub fn load_or_builtin(
    path: Option<&Path>,
) -> Result<(Vec<WordRecord>, Option<String>), VocabularyError> {
    let mut notice = None;
    if let Some(path) = path {
        match load_file(path) {
            Ok(words) => {
                logger::log(&format!(
                    "Loaded {} words from {}",
                    words.len(),
                    path.display()
                ));
                return Ok((words, None));
            }
            Err(e) => {
                logger::warn(&format!("Failed to load {}: {}", path.display(), e));
                notice = Some(format!(
                    "Could not load {}, using built-in words",
                    path.display()
                ));
            }
        }
    }

    let words = builtin()?;
    logger::log(&format!("Using {} built-in words", words.len()));
    Ok((words, notice))
}

pub fn parse_json(content: &str) -> Result<Vec<WordRecord>, VocabularyError> {
    let words: Vec<WordRecord> = serde_json::from_str(content)?;
    validate(words)
}

/// Columns: word, pronunciation, part_of_speech, meaning, example,
/// example_translation. A leading header row is skipped.
pub fn parse_csv(content: &str) -> Result<Vec<WordRecord>, VocabularyError> {
    let mut words = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields = parse_csv_line(line);
        if words.is_empty()
            && fields
                .first()
                .is_some_and(|f| f.trim().eq_ignore_ascii_case("word"))
        {
            continue;
        }

        if fields.len() != CSV_COLUMNS {
            return Err(VocabularyError::Csv {
                line: line_number,
                reason: format!("expected {} fields, found {}", CSV_COLUMNS, fields.len()),
            });
        }

        let mut fields = fields.into_iter().map(|f| f.trim().to_string());
        let mut next = || fields.next().unwrap_or_default();
        let record = WordRecord {
            word: next(),
            pronunciation: next(),
            part_of_speech: next(),
            meaning: next(),
            example: next(),
            example_translation: next(),
        };

        if record.word.is_empty() || record.meaning.is_empty() {
            return Err(VocabularyError::Csv {
                line: line_number,
                reason: "word and meaning must not be empty".to_string(),
            });
        }

        words.push(record);
    }

    validate(words)
}

fn validate(words: Vec<WordRecord>) -> Result<Vec<WordRecord>, VocabularyError> {
    if words.is_empty() {
        return Err(VocabularyError::Empty);
    }

    let mut seen = HashSet::new();
    for record in &words {
        if !seen.insert(record.word.as_str()) {
            return Err(VocabularyError::DuplicateWord(record.word.clone()));
        }
    }

    Ok(words)
}
