use crate::error::QuizError;
use crate::learned::LearnedSet;
use crate::logger;
use crate::models::{AppMode, WordRecord};
use crate::quiz::{AnswerOutcome, DEFAULT_QUIZ_LENGTH, QuizPhase, QuizSession};
use crate::review::ReviewSession;
use crate::speech::{SpeechEvent, SpeechHandle};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug)]
pub enum QuizState {
    NotStarted,
    Ready(QuizSession),
    Unavailable(QuizError),
}

pub struct App {
    pub vocabulary: Vec<WordRecord>,
    pub mode: AppMode,
    pub review: ReviewSession,
    pub learned: LearnedSet,
    pub quiz: QuizState,
    /// Highlighted option in the quiz view.
    pub quiz_cursor: usize,
    pub quiz_length: usize,
    pub speech: SpeechHandle,
    pub notice: Option<String>,
    pub should_quit: bool,
    rng: StdRng,
}

impl App {
    pub fn new(vocabulary: Vec<WordRecord>, learned: LearnedSet, speech: SpeechHandle) -> Self {
        let review = ReviewSession::new(vocabulary.len());
        Self {
            vocabulary,
            mode: AppMode::Learn,
            review,
            learned,
            quiz: QuizState::NotStarted,
            quiz_cursor: 0,
            quiz_length: DEFAULT_QUIZ_LENGTH,
            speech,
            notice: None,
            should_quit: false,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_quiz_length(mut self, quiz_length: usize) -> Self {
        self.quiz_length = quiz_length;
        self
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn current_word(&self) -> Option<&WordRecord> {
        self.review.current(&self.vocabulary)
    }

    pub fn is_current_learned(&self) -> bool {
        self.current_word()
            .is_some_and(|record| self.learned.contains(&record.word))
    }

    /// Switching to the quiz tab always starts a fresh session.
    pub fn set_mode(&mut self, mode: AppMode) {
        if mode == AppMode::Quiz && self.mode != AppMode::Quiz {
            self.start_quiz();
        }
        self.mode = mode;
    }

    pub fn start_quiz(&mut self) {
        self.quiz_cursor = 0;
        self.quiz = match QuizSession::generate_with_length(
            &self.vocabulary,
            self.quiz_length,
            &mut self.rng,
        ) {
            Ok(session) => {
                if !session.warnings().is_empty() {
                    self.notice = Some(format!(
                        "{} question(s) have fewer than 4 options",
                        session.warnings().len()
                    ));
                }
                QuizState::Ready(session)
            }
            Err(e) => {
                logger::warn(&format!("Quiz unavailable: {}", e));
                QuizState::Unavailable(e)
            }
        };
    }

    pub fn restart_quiz(&mut self) {
        match &mut self.quiz {
            QuizState::Ready(session) => {
                if let Err(e) = session.restart(&self.vocabulary, &mut self.rng) {
                    self.quiz = QuizState::Unavailable(e);
                }
                self.quiz_cursor = 0;
            }
            _ => self.start_quiz(),
        }
    }

    pub fn quiz_session(&self) -> Option<&QuizSession> {
        match &self.quiz {
            QuizState::Ready(session) => Some(session),
            _ => None,
        }
    }

    /// Answer with the option at `index`; out-of-range indexes are ignored.
    pub fn answer_option(&mut self, index: usize) -> Option<AnswerOutcome> {
        let QuizState::Ready(session) = &mut self.quiz else {
            return None;
        };
        if session.is_finished() {
            return None;
        }
        let option = session.current_question().options.get(index)?.clone();
        self.quiz_cursor = index;
        session.submit(&option)
    }

    pub fn move_quiz_cursor(&mut self, delta: isize) {
        let Some(session) = self.quiz_session() else {
            return;
        };
        if session.phase() != QuizPhase::InProgress {
            return;
        }
        let last = session.current_question().options.len().saturating_sub(1);
        self.quiz_cursor = self.quiz_cursor.saturating_add_signed(delta).min(last);
    }

    pub fn advance_quiz(&mut self) -> Option<QuizPhase> {
        let QuizState::Ready(session) = &mut self.quiz else {
            return None;
        };
        let phase = session.advance();
        self.quiz_cursor = 0;
        Some(phase)
    }

    pub fn toggle_learned(&mut self) {
        if let Some(learned) = self.review.toggle_learned(&self.vocabulary, &mut self.learned) {
            logger::log(&format!(
                "Word {} {}",
                self.current_word().map(|w| w.word.as_str()).unwrap_or(""),
                if learned { "marked learned" } else { "unmarked" }
            ));
        }
        if let Some(warning) = self.learned.take_warning() {
            self.notice = Some(warning);
        }
    }

    pub fn speak(&mut self, text: &str) {
        if let Err(e) = self.speech.speak(text) {
            self.notice = Some(e.to_string());
        }
    }

    pub fn speak_current(&mut self) {
        let text = match self.mode {
            AppMode::Learn => self.current_word().map(|w| w.word.clone()),
            AppMode::Quiz => self
                .quiz_session()
                .map(|s| s.current_question().prompt.clone()),
        };
        if let Some(text) = text {
            self.speak(&text);
        }
    }

    /// Pick up notices produced outside the key handlers.
    pub fn poll_background(&mut self) {
        for event in self.speech.drain_events() {
            match event {
                SpeechEvent::Failed { text, error } => {
                    self.notice = Some(format!("Could not pronounce \"{}\": {}", text, error));
                }
            }
        }
        if let Some(warning) = self.learned.take_warning() {
            self.notice = Some(warning);
        }
    }
}
