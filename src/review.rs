use crate::learned::LearnedSet;
use crate::models::{CardFace, WordRecord};

/// Cursor over the vocabulary for flashcard review. The cursor is clamped to
/// `[0, len - 1]`; stepping past either end does nothing.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    current_index: usize,
    len: usize,
    face: CardFace,
}

impl ReviewSession {
    pub fn new(len: usize) -> Self {
        Self {
            current_index: 0,
            len,
            face: CardFace::Front,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn current<'a>(&self, vocabulary: &'a [WordRecord]) -> Option<&'a WordRecord> {
        vocabulary.get(self.current_index)
    }

    /// Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.current_index < self.len.saturating_sub(1) {
            self.current_index += 1;
            self.face = CardFace::Front;
            true
        } else {
            false
        }
    }

    /// Returns whether the cursor moved.
    pub fn prev(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.face = CardFace::Front;
            true
        } else {
            false
        }
    }

    pub fn flip(&mut self) {
        self.face = self.face.flipped();
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index >= self.len.saturating_sub(1)
    }

    /// Toggle the learned flag of the displayed word. Returns the new state,
    /// or `None` for an empty vocabulary.
    pub fn toggle_learned(
        &self,
        vocabulary: &[WordRecord],
        learned: &mut LearnedSet,
    ) -> Option<bool> {
        self.current(vocabulary)
            .map(|record| learned.toggle(&record.word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vec<WordRecord> {
        vec![
            WordRecord::new("abandon", "từ bỏ"),
            WordRecord::new("ability", "khả năng"),
            WordRecord::new("accept", "chấp nhận"),
        ]
    }

    #[test]
    fn test_cursor_never_below_zero() {
        let mut review = ReviewSession::new(3);
        for _ in 0..10 {
            assert!(!review.prev());
        }
        assert_eq!(review.current_index(), 0);
        assert!(review.is_first());
    }

    #[test]
    fn test_cursor_never_past_end() {
        let mut review = ReviewSession::new(3);
        assert!(review.next());
        assert!(review.next());
        for _ in 0..10 {
            assert!(!review.next());
        }
        assert_eq!(review.current_index(), 2);
        assert!(review.is_last());
    }

    #[test]
    fn test_empty_vocabulary_cursor_stays_put() {
        let mut review = ReviewSession::new(0);
        assert!(!review.next());
        assert!(!review.prev());
        assert_eq!(review.current_index(), 0);
        assert!(review.current(&[]).is_none());
    }

    #[test]
    fn test_flip_resets_on_navigation() {
        let mut review = ReviewSession::new(3);
        review.flip();
        assert_eq!(review.face(), CardFace::Back);

        review.next();
        assert_eq!(review.face(), CardFace::Front);

        review.flip();
        review.flip();
        assert_eq!(review.face(), CardFace::Front);

        review.flip();
        review.prev();
        assert_eq!(review.face(), CardFace::Front);
    }

    #[test]
    fn test_flip_kept_when_step_is_blocked() {
        let mut review = ReviewSession::new(3);
        review.flip();
        review.prev();
        assert_eq!(review.face(), CardFace::Back);
    }

    #[test]
    fn test_current_word_follows_cursor() {
        let words = vocabulary();
        let mut review = ReviewSession::new(words.len());
        assert_eq!(review.current(&words).unwrap().word, "abandon");
        review.next();
        assert_eq!(review.current(&words).unwrap().word, "ability");
    }

    #[test]
    fn test_toggle_learned_twice_restores_membership() {
        let words = vocabulary();
        let mut learned = LearnedSet::in_memory();
        let mut review = ReviewSession::new(words.len());
        review.next();

        assert_eq!(review.toggle_learned(&words, &mut learned), Some(true));
        assert!(learned.contains("ability"));
        assert_eq!(review.toggle_learned(&words, &mut learned), Some(false));
        assert!(!learned.contains("ability"));

        assert_eq!(ReviewSession::new(0).toggle_learned(&[], &mut learned), None);
    }
}
