//! Ambient color scheme detection.
//!
//! Consulted only when no theme preference has been stored yet.

/// Read-only query for the platform's preferred color scheme.
pub trait ColorSchemeProbe {
    /// Whether the platform prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;
}

/// Probe that inspects the terminal's `COLORFGBG` hint.
///
/// Terminals such as rxvt, Konsole and iTerm export `COLORFGBG="fg;bg"`
/// (sometimes `fg;default;bg`). The last field is the background palette
/// index: 0-6 and 8 are dark, 7 and 9-15 are light.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalColorScheme;

impl TerminalColorScheme {
    pub const ENV_VAR: &'static str = "COLORFGBG";

    pub fn new() -> Self {
        Self
    }
}

impl ColorSchemeProbe for TerminalColorScheme {
    fn prefers_dark(&self) -> bool {
        std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|value| background_is_dark(&value))
            .unwrap_or(false)
    }
}

/// Parse a `COLORFGBG` value. Returns `None` when the value is unusable.
pub fn background_is_dark(value: &str) -> Option<bool> {
    let bg = value.rsplit(';').next()?.trim();
    let index: u8 = bg.parse().ok()?;
    match index {
        0..=6 | 8 => Some(true),
        7 | 9..=15 => Some(false),
        _ => None,
    }
}

/// Probe with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedColorScheme(pub bool);

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_is_dark() {
        assert_eq!(background_is_dark("15;0"), Some(true));
        assert_eq!(background_is_dark("0;15"), Some(false));
        assert_eq!(background_is_dark("12;default;8"), Some(true));
        assert_eq!(background_is_dark("0;7"), Some(false));
    }

    #[test]
    fn test_background_is_dark_malformed() {
        assert_eq!(background_is_dark(""), None);
        assert_eq!(background_is_dark("15;default"), None);
        assert_eq!(background_is_dark("15;200"), None);
    }

    #[test]
    fn test_fixed_probe() {
        assert!(FixedColorScheme(true).prefers_dark());
        assert!(!FixedColorScheme(false).prefers_dark());
    }
}
