use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Common header component for all screens
pub struct Header;

impl Header {
    /// Render a header with a title, a description and a right-aligned status
    ///
    /// The status is used for the signed-in user and the active theme.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        description: &str,
        status: &str,
    ) {
        let t = theme();
        let header_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));

        let inner_area = header_block.inner(area);
        frame.render_widget(header_block, area);

        let status_width = (status.chars().count() as u16 + 2).min(inner_area.width / 2);
        let [desc_area, status_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)])
                .areas(inner_area);

        // Center the description vertically
        let desc_lines = description.lines().count() as u16;
        let [_, desc_area] = Layout::vertical([
            Constraint::Length(desc_area.height.saturating_sub(desc_lines) / 2),
            Constraint::Min(0),
        ])
        .areas(desc_area);

        frame.render_widget(
            Paragraph::new(description)
                .style(t.text_style())
                .wrap(Wrap { trim: true }),
            desc_area,
        );
        frame.render_widget(
            Paragraph::new(status)
                .style(t.muted_style())
                .alignment(Alignment::Right),
            status_area,
        );
    }
}
