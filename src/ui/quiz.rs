use crate::error::QuizError;
use crate::quiz::QuizSession;
use crate::ui::layout::calculate_quiz_chunks;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, session: &QuizSession, cursor: usize, area: Rect) {
    let layout = calculate_quiz_chunks(area);
    let question = session.current_question();

    let status = Line::from(vec![
        Span::styled(
            format!(
                "Question {}/{}",
                session.current_index() + 1,
                session.len()
            ),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from("    "),
        Span::styled(
            format!("Score: {}", session.score()),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    f.render_widget(Paragraph::new(status), layout.status_area);

    let prompt = Paragraph::new(Line::from(vec![
        Span::from("What does "),
        Span::styled(
            question.prompt.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" mean?"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(prompt, layout.prompt_area);

    let selected = session.selected_answer();
    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = match selected {
                None if i == cursor => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                None => Style::default(),
                Some(_) if *option == question.correct_answer => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                Some(answer) if answer == option.as_str() => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
                Some(_) => Style::default().fg(Color::DarkGray),
            };
            let marker = if selected.is_none() && i == cursor {
                "> "
            } else {
                "  "
            };
            ListItem::new(format!("{}{}. {}", marker, i + 1, option)).style(style)
        })
        .collect();

    let options = List::new(items).block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    let feedback = match selected {
        None => Line::from(""),
        Some(answer) if question.is_correct(answer) => Line::from(Span::styled(
            "Correct!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Some(_) => Line::from(vec![
            Span::styled(
                "Not quite. ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::from(format!("Answer: {}", question.correct_answer)),
        ]),
    };
    f.render_widget(
        Paragraph::new(feedback).alignment(Alignment::Center),
        layout.feedback_area,
    );
}

pub fn draw_quiz_unavailable(f: &mut Frame, error: &QuizError, area: Rect) {
    let message = Paragraph::new(vec![
        Line::from(Span::styled(
            "Cannot build quiz",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error.to_string()),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}
