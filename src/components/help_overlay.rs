//! Help overlay component
//!
//! Lists the active keybindings, grouped by category.

use crate::keymap::{Action, Keymap};
use crate::styles::theme;
use crate::utils::center_popup;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the help overlay in the center of the screen
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) {
        let t = theme();
        let popup_area = center_popup(area, 80, 85);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(
                " Keyboard Shortcuts - {} Preset ",
                keymap.preset.name()
            ))
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(t.primary))
            .style(t.background_style());
        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [bindings_area, footer_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(2)]).areas(inner_area);

        frame.render_widget(
            Paragraph::new(Self::binding_lines(keymap)).wrap(Wrap { trim: false }),
            bindings_area,
        );

        let footer_text = format!(
            "Edit keybindings in: {}\nPress any key to close",
            config_path
        );
        frame.render_widget(
            Paragraph::new(footer_text)
                .style(t.muted_style())
                .alignment(Alignment::Center),
            footer_area,
        );
    }

    fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let bindings = keymap.all_bindings();
        let mut lines = Vec::new();

        for category in Action::categories() {
            let in_category: Vec<_> = bindings
                .iter()
                .filter(|b| b.action.category() == category)
                .collect();
            if in_category.is_empty() {
                continue;
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", category),
                Style::default()
                    .fg(t.secondary)
                    .add_modifier(Modifier::BOLD),
            )));
            for binding in in_category {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {:14}", binding.display()), t.emphasis_style()),
                    Span::styled(binding.get_description().to_string(), t.text_style()),
                ]));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_lines_group_by_category() {
        let lines = HelpOverlay::binding_lines(&Keymap::default());
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

        let global = text.iter().position(|l| l.trim() == "Global").unwrap();
        let session = text.iter().position(|l| l.trim() == "Session").unwrap();
        assert!(global < session);
        assert!(text.iter().any(|l| l.contains("Ctrl+T")));
    }
}
