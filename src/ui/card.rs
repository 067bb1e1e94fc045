use crate::app::App;
use crate::models::CardFace;
use crate::ui::layout::calculate_card_chunks;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_card(f: &mut Frame, app: &App, area: Rect) {
    let layout = calculate_card_chunks(area);

    let Some(record) = app.current_word() else {
        let empty = Paragraph::new("No words loaded")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, layout.card_area);
        return;
    };

    let star = if app.is_current_learned() {
        Span::styled(
            "★ learned",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("☆", Style::default().fg(Color::DarkGray))
    };

    let mut text = Text::default();
    match app.review.face() {
        CardFace::Front => {
            text.push_line(Line::from(vec![
                Span::styled(
                    format!("[{}]", record.part_of_speech),
                    Style::default().fg(Color::Magenta),
                ),
                Span::from("  "),
                star,
            ]));
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(
                record.word.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::from(Span::styled(
                record.pronunciation.as_str(),
                Style::default().fg(Color::Gray),
            )));
        }
        CardFace::Back => {
            text.push_line(Line::from(star));
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(
                record.meaning.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            if !record.example.is_empty() {
                text.push_line(Line::from(""));
                text.push_line(Line::from(vec![
                    Span::styled("Example: ", Style::default().add_modifier(Modifier::BOLD)),
                    Span::from(record.example.as_str()),
                ]));
            }
            if !record.example_translation.is_empty() {
                text.push_line(Line::from(Span::styled(
                    record.example_translation.as_str(),
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
        }
    }

    let title = match app.review.face() {
        CardFace::Front => "Word",
        CardFace::Back => "Meaning",
    };
    let card = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(card, layout.card_area);

    let prev = if app.review.is_first() { "   " } else { "◀  " };
    let next = if app.review.is_last() { "   " } else { "  ▶" };
    let nav = Paragraph::new(format!(
        "{}{} / {}{}",
        prev,
        app.review.current_index() + 1,
        app.review.len(),
        next
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Gray));
    f.render_widget(nav, layout.nav_area);
}
