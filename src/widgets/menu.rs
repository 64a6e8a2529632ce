//! Card menu widget.
//!
//! Renders each entry as a 3-line card: a blank spacer, the badge and title,
//! and a muted detail line. The landing page uses it for the role picker.

use crate::styles::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

/// Height of one card in rows
pub const CARD_HEIGHT: u16 = 3;

/// A single menu card
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Short badge shown before the title
    pub badge: String,
    pub title: String,
    /// Accent color of the badge and title
    pub color: Color,
    /// Optional second line (e.g., a tagline)
    pub detail: Option<String>,
}

impl MenuItem {
    pub fn new(badge: impl Into<String>, title: impl Into<String>, color: Color) -> Self {
        Self {
            badge: badge.into(),
            title: title.into(),
            color,
            detail: None,
        }
    }

    /// Set the detail line
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// State for the Menu widget
#[derive(Debug, Default, Clone)]
pub struct MenuState {
    selected: Option<usize>,
}

impl MenuState {
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Move the selection down, wrapping to the top
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % len));
    }

    /// Move the selection up, wrapping to the bottom
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(len - 1, |i| (i + len - 1) % len));
    }
}

/// Menu widget that renders items as cards
#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Screen area of every card that fits, paired with its index
    pub fn clickable_areas(&self, area: Rect) -> Vec<(Rect, usize)> {
        (0..self.items.len())
            .map(|i| (area.y + i as u16 * CARD_HEIGHT, i))
            .take_while(|(y, _)| y + CARD_HEIGHT <= area.y + area.height)
            .map(|(y, i)| (Rect::new(area.x, y, area.width, CARD_HEIGHT), i))
            .collect()
    }

    /// Rows needed to show every card
    pub fn height(&self) -> u16 {
        self.items.len() as u16 * CARD_HEIGHT
    }
}

/// Pad a line with `style` out to `width` columns
fn fill_line(spans: Vec<Span<'_>>, width: u16, style: Style) -> Line<'_> {
    let mut line = Line::from(spans);
    let used = line.width();
    if used < width as usize {
        line.spans
            .push(Span::styled(" ".repeat(width as usize - used), style));
    }
    line
}

impl StatefulWidget for Menu {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let t = theme();

        for (rect, i) in self.clickable_areas(area) {
            let item = &self.items[i];
            let is_selected = state.selected == Some(i);
            let bg = if is_selected {
                t.highlight_bg
            } else {
                t.background
            };
            let base = Style::default().fg(t.text).bg(bg);
            let accent = Style::default()
                .fg(item.color)
                .bg(bg)
                .add_modifier(Modifier::BOLD);
            let edge = if is_selected {
                Span::styled("▌ ", Style::default().fg(t.border_focused).bg(bg))
            } else {
                Span::styled("  ", base)
            };

            fill_line(vec![edge.clone()], rect.width, base)
                .render(Rect::new(rect.x, rect.y, rect.width, 1), buf);

            let title_style = if is_selected {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            };
            fill_line(
                vec![
                    edge.clone(),
                    Span::styled(format!("{} ", item.badge), accent),
                    Span::styled(item.title.as_str(), title_style),
                ],
                rect.width,
                base,
            )
            .render(Rect::new(rect.x, rect.y + 1, rect.width, 1), buf);

            let detail = item.detail.as_deref().unwrap_or_default();
            fill_line(
                vec![
                    edge,
                    Span::styled(detail, Style::default().fg(t.text_muted).bg(bg)),
                ],
                rect.width,
                base,
            )
            .render(Rect::new(rect.x, rect.y + 2, rect.width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<MenuItem> {
        vec![
            MenuItem::new("$", "First", Color::Cyan),
            MenuItem::new("+", "Second", Color::Green).detail("more"),
        ]
    }

    #[test]
    fn test_menu_item_creation() {
        let item = MenuItem::new("$", "Test Item", Color::Cyan);
        assert_eq!(item.badge, "$");
        assert_eq!(item.title, "Test Item");
        assert!(item.detail.is_none());
    }

    #[test]
    fn test_menu_state_wraps() {
        let mut state = MenuState::new();
        assert_eq!(state.selected(), None);

        state.select_next(3);
        assert_eq!(state.selected(), Some(0));
        state.select_previous(3);
        assert_eq!(state.selected(), Some(2));
        state.select_next(3);
        assert_eq!(state.selected(), Some(0));

        state.select_next(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_clickable_areas() {
        let menu = Menu::new(items());
        let areas = menu.clickable_areas(Rect::new(0, 0, 50, 10));

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[1].1, 1);
        assert_eq!(areas[1].0.y, 3);
        assert_eq!(areas[0].0.height, CARD_HEIGHT);
    }

    #[test]
    fn test_clickable_areas_drop_cards_that_do_not_fit() {
        let menu = Menu::new(items());
        assert_eq!(menu.clickable_areas(Rect::new(0, 0, 50, 5)).len(), 1);
        assert_eq!(menu.height(), 6);
    }

    #[test]
    fn test_render_marks_selected_card() {
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        let mut state = MenuState::new();
        state.select(Some(1));
        Menu::new(items()).render(area, &mut buf, &mut state);

        assert_eq!(buf[(0, 4)].symbol(), "▌");
        assert_eq!(buf[(0, 1)].symbol(), " ");
        assert_eq!(buf[(2, 4)].symbol(), "+");
    }
}
