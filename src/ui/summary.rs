use crate::quiz::QuizResult;
use crate::utils::centered_rect;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_summary(f: &mut Frame, result: QuizResult, area: Rect) {
    let percentage = result.percentage();
    let grade_color = if percentage >= 80.0 {
        Color::Green
    } else if percentage >= 50.0 {
        Color::Yellow
    } else {
        Color::Red
    };

    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        "Finished!",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(vec![
        Span::from("Your score: "),
        Span::styled(
            format!("{} / {}", result.score, result.total),
            Style::default()
                .fg(grade_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(format!("  ({:.0}%)", percentage)),
    ]));

    let summary = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Quiz Summary"));
    f.render_widget(summary, centered_rect(50, 7, area));
}
