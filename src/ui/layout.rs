use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub header_area: Rect,
    pub progress_area: Rect,
    pub body_area: Rect,
    pub notice_area: Rect,
    pub help_area: Rect,
}

pub struct CardLayout {
    pub card_area: Rect,
    pub nav_area: Rect,
}

pub struct QuizLayout {
    pub status_area: Rect,
    pub prompt_area: Rect,
    pub options_area: Rect,
    pub feedback_area: Rect,
}

pub fn calculate_main_chunks(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        progress_area: chunks[1],
        body_area: chunks[2],
        notice_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_card_chunks(area: Rect) -> CardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    CardLayout {
        card_area: chunks[0],
        nav_area: chunks[1],
    }
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

    QuizLayout {
        status_area: chunks[0],
        prompt_area: chunks[1],
        options_area: chunks[2],
        feedback_area: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_main_chunks(area);

        // Margin 1 leaves 38 rows: 3 + 3 + 1 + 3 fixed, 28 for the body.
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.progress_area.height, 3);
        assert_eq!(layout.notice_area.height, 1);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.body_area.height, 28);
        assert_eq!(layout.header_area.y, 1);
    }

    #[test]
    fn test_card_layout() {
        let layout = calculate_card_chunks(Rect::new(0, 0, 80, 20));
        assert_eq!(layout.card_area.height, 19);
        assert_eq!(layout.nav_area.height, 1);
        assert_eq!(layout.nav_area.y, 19);
    }

    #[test]
    fn test_quiz_layout() {
        let layout = calculate_quiz_chunks(Rect::new(0, 0, 80, 20));
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.prompt_area.height, 3);
        assert_eq!(layout.feedback_area.height, 1);
        assert_eq!(layout.options_area.height, 15);
    }
}
