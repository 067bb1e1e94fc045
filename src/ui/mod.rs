pub mod layout;
mod card;
mod header;
mod quiz;
mod summary;

pub use card::draw_card;
pub use header::{draw_header, draw_progress, APP_TITLE};
pub use layout::{calculate_card_chunks, calculate_main_chunks, calculate_quiz_chunks};
pub use quiz::{draw_quiz, draw_quiz_unavailable};
pub use summary::draw_summary;

use crate::app::{App, QuizState};
use crate::models::AppMode;
use crate::quiz::QuizPhase;
use crate::utils::truncate_string;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let layout = calculate_main_chunks(f.area());

    draw_header(f, app.mode, layout.header_area);
    draw_progress(
        f,
        app.learned.count_in(&app.vocabulary),
        app.vocabulary.len(),
        layout.progress_area,
    );

    match app.mode {
        AppMode::Learn => draw_card(f, app, layout.body_area),
        AppMode::Quiz => match &app.quiz {
            QuizState::Ready(session) => match session.result() {
                Some(result) => draw_summary(f, result, layout.body_area),
                None => draw_quiz(f, session, app.quiz_cursor, layout.body_area),
            },
            QuizState::Unavailable(error) => draw_quiz_unavailable(f, error, layout.body_area),
            QuizState::NotStarted => {}
        },
    }

    if let Some(notice) = &app.notice {
        let width = layout.notice_area.width as usize;
        let notice = Paragraph::new(truncate_string(notice, width))
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(notice, layout.notice_area);
    }

    let help = Paragraph::new(help_line(app))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn key(label: &str) -> Span<'_> {
    Span::styled(
        label,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn help_line(app: &App) -> Line<'static> {
    let mut spans = Vec::new();
    match app.mode {
        AppMode::Learn => {
            spans.extend([
                key("←/→"),
                Span::from(" Navigate  "),
                key("Space"),
                Span::from(" Flip  "),
                key("s"),
                Span::from(" Learned  "),
                key("p"),
                Span::from(" Speak  "),
            ]);
        }
        AppMode::Quiz => match app.quiz_session().map(|s| s.phase()) {
            Some(QuizPhase::InProgress) => spans.extend([
                key("1-4"),
                Span::from(" Answer  "),
                key("↑/↓"),
                Span::from(" Select  "),
                key("Enter"),
                Span::from(" Submit  "),
            ]),
            Some(QuizPhase::Answered) => spans.extend([
                key("Enter"),
                Span::from(" Next  "),
                key("p"),
                Span::from(" Speak  "),
            ]),
            Some(QuizPhase::Finished) => spans.extend([key("r"), Span::from(" Restart  ")]),
            None => {}
        },
    }

    spans.extend([key("Tab"), Span::from(" Switch  ")]);
    if app.mode == AppMode::Quiz {
        spans.extend([key("Esc"), Span::from(" Back  ")]);
    }
    spans.extend([key("q"), Span::from(" Quit")]);
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{KeyValueStore, MemoryStore};
    use crate::learned::{LEARNED_WORDS_KEY, LearnedSet};
    use crate::models::WordRecord;
    use crate::speech::SpeechHandle;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn test_app(count: usize) -> App {
        let words = (1..=count)
            .map(|i| WordRecord {
                word: format!("word{}", i),
                pronunciation: format!("/w{}/", i),
                part_of_speech: "noun".to_string(),
                meaning: format!("meaning {}", i),
                example: format!("Example {}.", i),
                example_translation: format!("Translation {}.", i),
            })
            .collect();
        App::new(words, LearnedSet::in_memory(), SpeechHandle::unavailable())
            .with_rng(StdRng::seed_from_u64(3))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_learn_front_shows_word() {
        let mut app = test_app(5);
        app.review.next();
        let screen = render(&app);
        assert!(screen.contains(APP_TITLE));
        assert!(screen.contains("word2"));
        assert!(screen.contains("/w2/"));
        assert!(screen.contains("2 / 5"));
        assert!(!screen.contains("meaning 2"));
        assert!(screen.contains("0 / 5 words"));
    }

    #[test]
    fn test_learn_back_shows_meaning() {
        let mut app = test_app(5);
        app.review.flip();
        app.toggle_learned();
        let screen = render(&app);
        assert!(screen.contains("meaning 1"));
        assert!(screen.contains("Example 1."));
        assert!(screen.contains("Translation 1."));
        assert!(screen.contains("learned"));
        assert!(screen.contains("1 / 5 words"));
    }

    #[test]
    fn test_progress_counts_only_loaded_words() {
        let mut store = MemoryStore::default();
        store
            .set(
                LEARNED_WORDS_KEY,
                r#"["x1","x2","x3","x4","x5","x6","x7","word2"]"#,
            )
            .unwrap();
        let mut app = test_app(5);
        app.learned = LearnedSet::load(Box::new(store));

        let screen = render(&app);
        assert!(screen.contains("1 / 5 words"));
        assert!(!screen.contains("8 / 5 words"));
    }

    #[test]
    fn test_quiz_screen_shows_question_and_options() {
        let mut app = test_app(6);
        app.set_mode(AppMode::Quiz);
        let screen = render(&app);
        let question = app.quiz_session().unwrap().current_question().clone();

        assert!(screen.contains("Question 1/6"));
        assert!(screen.contains("Score: 0"));
        assert!(screen.contains(&format!("What does {} mean?", question.prompt)));
        for option in &question.options {
            assert!(screen.contains(option.as_str()));
        }
    }

    #[test]
    fn test_quiz_feedback_after_wrong_answer() {
        let mut app = test_app(6);
        app.set_mode(AppMode::Quiz);
        let question = app.quiz_session().unwrap().current_question().clone();
        let wrong = question
            .options
            .iter()
            .position(|o| *o != question.correct_answer)
            .unwrap();
        app.answer_option(wrong);

        let screen = render(&app);
        assert!(screen.contains("Not quite."));
        assert!(screen.contains(&format!("Answer: {}", question.correct_answer)));
        assert!(screen.contains("Next"));
    }

    #[test]
    fn test_summary_screen() {
        let mut app = test_app(4);
        app.set_mode(AppMode::Quiz);
        for _ in 0..4 {
            app.advance_quiz();
        }
        let screen = render(&app);
        assert!(screen.contains("Finished!"));
        assert!(screen.contains("0 / 4"));
        assert!(screen.contains("Restart"));
    }

    #[test]
    fn test_unavailable_quiz_screen() {
        let mut app = test_app(2);
        app.set_mode(AppMode::Quiz);
        let screen = render(&app);
        assert!(screen.contains("Cannot build quiz"));
    }

    #[test]
    fn test_notice_is_rendered() {
        let mut app = test_app(3);
        app.speak_current();
        let screen = render(&app);
        assert!(screen.contains("text-to-speech is not available"));
    }
}
