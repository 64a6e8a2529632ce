use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Split an area into header, content and footer rows
pub fn create_standard_layout(
    area: Rect,
    header_height: u16,
    footer_height: u16,
) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Create a centered popup area sized as a percentage of `area`
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

/// Center a fixed-width column inside `area`, clamped to the available width
pub fn center_column(area: Rect, width: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    column
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_heights() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, content, footer) = create_standard_layout(area, 3, 2);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 2);
        assert_eq!(content.height, 19);
        assert_eq!(footer.y, 22);
    }

    #[test]
    fn test_center_popup_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = center_popup(area, 60, 50);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 25);
        assert_eq!(popup.x, 20);
        assert!(area.contains(popup.as_position()));
    }

    #[test]
    fn test_center_column_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(center_column(area, 100).width, 40);
        assert_eq!(center_column(area, 20).x, 10);
    }
}
