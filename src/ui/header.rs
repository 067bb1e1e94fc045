use crate::models::AppMode;
use crate::utils::progress_ratio;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph, Tabs},
    Frame,
};

pub const APP_TITLE: &str = "Vocabulary Trainer";

pub fn draw_header(f: &mut Frame, mode: AppMode, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)])
        .split(area);

    let title = Paragraph::new(APP_TITLE)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let tabs = Tabs::new(vec![Line::from("Learn"), Line::from("Quiz")])
        .select(mode.tab_index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title("Tab"));
    f.render_widget(tabs, chunks[1]);
}

pub fn draw_progress(f: &mut Frame, learned: usize, total: usize, area: Rect) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Learned"))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(progress_ratio(learned, total))
        .label(format!("{} / {} words", learned, total));
    f.render_widget(gauge, area);
}
