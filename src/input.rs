use crate::app::{App, QuizState};
use crate::models::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.set_mode(app.mode.toggled());
            return;
        }
        _ => {}
    }

    match app.mode {
        AppMode::Learn => handle_learn_input(app, key),
        AppMode::Quiz => handle_quiz_input(app, key),
    }
}

fn handle_learn_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            app.review.prev();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.review.next();
        }
        KeyCode::Char(' ') | KeyCode::Enter => app.review.flip(),
        KeyCode::Char('s') => app.toggle_learned(),
        KeyCode::Char('p') => app.speak_current(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.set_mode(AppMode::Learn);
        return;
    }

    let (finished, answered) = match &app.quiz {
        QuizState::Ready(session) => (session.is_finished(), session.selected_answer().is_some()),
        QuizState::NotStarted | QuizState::Unavailable(_) => return,
    };

    if finished {
        if key.code == KeyCode::Char('r') {
            app.restart_quiz();
        }
        return;
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') if !answered => {
            let index = c as usize - '1' as usize;
            app.answer_option(index);
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_quiz_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_quiz_cursor(1),
        KeyCode::Enter => {
            if answered {
                app.advance_quiz();
            } else {
                let cursor = app.quiz_cursor;
                app.answer_option(cursor);
            }
        }
        KeyCode::Char('p') => app.speak_current(),
        _ => {}
    }
}
