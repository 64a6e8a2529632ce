use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer component
pub struct Footer;

impl Footer {
    /// Render a footer of `keys: label` hints separated by " | "
    pub fn render(frame: &mut Frame, area: Rect, text: &str) {
        frame.render_widget(Self::build(text), area);
    }

    fn build(text: &str) -> Paragraph<'_> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            match part.split_once(": ") {
                Some((keys, label)) => {
                    spans.push(Span::styled(
                        keys,
                        t.emphasis_style().add_modifier(Modifier::BOLD),
                    ));
                    spans.push(Span::styled(format!(": {}", label), t.text_style()));
                }
                None => spans.push(Span::styled(part, t.text_style())),
            }
        }

        let footer_block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .style(t.background_style());

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(footer_block)
    }
}
