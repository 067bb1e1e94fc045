use crate::error::QuizError;
use crate::logger;
use crate::models::WordRecord;
use rand::Rng;
use std::collections::HashSet;

pub const DEFAULT_QUIZ_LENGTH: usize = 10;
pub const OPTIONS_PER_QUESTION: usize = 4;
pub const MIN_VOCABULARY: usize = 4;

const DISTRACTORS_PER_QUESTION: usize = OPTIONS_PER_QUESTION - 1;

/// Fisher-Yates shuffle: every permutation is equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Uniform sample of `count` items without replacement (partial Fisher-Yates).
/// Returns every item, in random order, when fewer than `count` exist.
pub fn sample<T, R: Rng + ?Sized>(mut items: Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    let count = count.min(items.len());
    for i in 0..count {
        let j = rng.gen_range(i..items.len());
        items.swap(i, j);
    }
    items.truncate(count);
    items
}

/// Distinct meanings in the vocabulary other than `correct_answer`, in
/// first-occurrence order.
pub fn distractor_pool(correct_answer: &str, vocabulary: &[WordRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    vocabulary
        .iter()
        .map(|record| record.meaning.as_str())
        .filter(|meaning| *meaning != correct_answer && seen.insert(*meaning))
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: String,
    pub correct_answer: String,
    pub options: Vec<String>,
}

impl QuizQuestion {
    /// Build the question for `record`. A pool too small for a full set of
    /// distractors still yields a question, along with the degradation error.
    pub fn build<R: Rng + ?Sized>(
        record: &WordRecord,
        vocabulary: &[WordRecord],
        rng: &mut R,
    ) -> (Self, Option<QuizError>) {
        let pool = distractor_pool(&record.meaning, vocabulary);
        let degraded = (pool.len() < DISTRACTORS_PER_QUESTION).then(|| {
            QuizError::InsufficientDistractorPool {
                word: record.word.clone(),
                available: pool.len(),
            }
        });

        let mut options = Vec::with_capacity(OPTIONS_PER_QUESTION);
        options.push(record.meaning.clone());
        options.extend(sample(pool, DISTRACTORS_PER_QUESTION, rng));
        shuffle(&mut options, rng);

        let question = Self {
            prompt: record.word.clone(),
            correct_answer: record.meaning.clone(),
            options,
        };
        (question, degraded)
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }

    pub fn is_degraded(&self) -> bool {
        self.options.len() < OPTIONS_PER_QUESTION
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Answered,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub selected: String,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
}

impl QuizResult {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.score as f64 * 100.0 / self.total as f64
        }
    }
}

/// One pass through a randomly drawn set of questions.
///
/// `score <= answered <= len()` and `current_index() < len()` hold at all
/// times. Once finished, only [`QuizSession::restart`] leaves that state.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    selected: Option<String>,
    score: usize,
    answered: usize,
    finished: bool,
    quiz_length: usize,
    warnings: Vec<QuizError>,
}

impl QuizSession {
    pub fn generate<R: Rng + ?Sized>(
        vocabulary: &[WordRecord],
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        Self::generate_with_length(vocabulary, DEFAULT_QUIZ_LENGTH, rng)
    }

    pub fn generate_with_length<R: Rng + ?Sized>(
        vocabulary: &[WordRecord],
        quiz_length: usize,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        if vocabulary.len() < MIN_VOCABULARY {
            return Err(QuizError::InsufficientVocabulary {
                available: vocabulary.len(),
                required: MIN_VOCABULARY,
            });
        }

        let quiz_length = quiz_length.max(1);
        let mut order: Vec<&WordRecord> = vocabulary.iter().collect();
        shuffle(&mut order, rng);

        let mut questions = Vec::with_capacity(quiz_length.min(order.len()));
        let mut warnings = Vec::new();
        for record in order.into_iter().take(quiz_length) {
            let (question, degraded) = QuizQuestion::build(record, vocabulary, rng);
            if let Some(warning) = degraded {
                logger::warn(&format!("Degraded quiz question: {}", warning));
                warnings.push(warning);
            }
            questions.push(question);
        }

        logger::log(&format!(
            "Generated quiz with {} questions from {} words",
            questions.len(),
            vocabulary.len()
        ));

        Ok(Self {
            questions,
            current_index: 0,
            selected: None,
            score: 0,
            answered: 0,
            finished: false,
            quiz_length,
            warnings,
        })
    }

    /// Draw a brand new question set and reset all progress.
    pub fn restart<R: Rng + ?Sized>(
        &mut self,
        vocabulary: &[WordRecord],
        rng: &mut R,
    ) -> Result<(), QuizError> {
        *self = Self::generate_with_length(vocabulary, self.quiz_length, rng)?;
        Ok(())
    }

    /// Record `answer` for the current question. A question already answered
    /// keeps its first answer and the recorded outcome is returned instead.
    /// Returns `None` only when the session finished without an answer on
    /// the last question.
    pub fn submit(&mut self, answer: &str) -> Option<AnswerOutcome> {
        if self.finished || self.selected.is_some() {
            return self.recorded_outcome();
        }

        let correct = self.current_question().is_correct(answer);
        if correct {
            self.score += 1;
        }
        self.answered += 1;
        self.selected = Some(answer.to_string());

        logger::log(&format!(
            "Question {}/{}: \"{}\" answered {}",
            self.current_index + 1,
            self.questions.len(),
            self.current_question().prompt,
            if correct { "correctly" } else { "incorrectly" }
        ));

        self.recorded_outcome()
    }

    /// Move to the next question, or finish after the last one.
    pub fn advance(&mut self) -> QuizPhase {
        if self.finished {
            return QuizPhase::Finished;
        }

        if self.current_index < self.questions.len().saturating_sub(1) {
            self.current_index += 1;
            self.selected = None;
        } else {
            self.finished = true;
            logger::log(&format!(
                "Quiz finished with score {}/{}",
                self.score,
                self.questions.len()
            ));
        }
        self.phase()
    }

    pub fn phase(&self) -> QuizPhase {
        if self.finished {
            QuizPhase::Finished
        } else if self.selected.is_some() {
            QuizPhase::Answered
        } else {
            QuizPhase::InProgress
        }
    }

    pub fn result(&self) -> Option<QuizResult> {
        self.finished.then(|| QuizResult {
            score: self.score,
            total: self.questions.len(),
        })
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current_index]
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn warnings(&self) -> &[QuizError] {
        &self.warnings
    }

    fn recorded_outcome(&self) -> Option<AnswerOutcome> {
        self.selected.as_ref().map(|selected| AnswerOutcome {
            selected: selected.clone(),
            correct: self.current_question().is_correct(selected),
        })
    }
}
