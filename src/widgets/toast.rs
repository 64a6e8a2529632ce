//! Toast notification widget.
//!
//! A short message drawn over the bottom-right corner of the screen. It
//! expires on its own and never takes input focus.

use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Error,
}

impl ToastVariant {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "\u{2714}", // ✔
            ToastVariant::Info => "\u{2139}",    // ℹ
            ToastVariant::Error => "\u{2718}",   // ✘
        }
    }

    /// Border color, read from the current theme
    pub fn color(&self) -> Color {
        let t = theme();
        match self {
            ToastVariant::Success => t.success,
            ToastVariant::Info => t.primary,
            ToastVariant::Error => t.error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant, duration: Duration) -> Self {
        Self {
            message: message.into(),
            variant,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Renders one toast in the bottom-right corner of the given area
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    fn calculate_area(&self, area: Rect) -> Rect {
        // Icon, padding and borders take 6 columns
        let wanted = self.toast.message.chars().count() as u16 + 6;
        let width = wanted.clamp(20, 50).min(area.width.saturating_sub(4));
        let height = 3u16.min(area.height);

        // Keep clear of the two-row footer
        let x = area.x + area.width.saturating_sub(width + 2);
        let y = area.y + area.height.saturating_sub(height + 3);
        Rect::new(x, y, width, height)
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = self.calculate_area(area);
        let t = theme();

        Widget::render(Clear, toast_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.toast.variant.color()))
            .style(Style::default().bg(t.background));

        Paragraph::new(format!(
            " {} {}",
            self.toast.variant.icon(),
            self.toast.message
        ))
        .block(block)
        .style(Style::default().fg(t.text).add_modifier(Modifier::BOLD))
        .render(toast_area, buf);
    }
}

/// Holds at most one toast; a new one replaces the old
#[derive(Debug)]
pub struct ToastManager {
    current: Option<Toast>,
    duration: Duration,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl ToastManager {
    /// Create a manager whose toasts last `duration`
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, variant: ToastVariant) {
        self.current = Some(Toast::new(message, variant, self.duration));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message, ToastVariant::Success);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message, ToastVariant::Info);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message, ToastVariant::Error);
    }

    /// Drop an expired toast and return whether one is still showing
    pub fn tick(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Toast::is_expired) {
            self.current = None;
        }
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        if let Some(toast) = self.current() {
            frame.render_widget(ToastWidget::new(toast), area);
        }
    }
}
