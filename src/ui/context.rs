use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    /// Live progress lines redrawn in place
    pub animation: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(json, verbose, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        let animation = !json && caps.is_tty && !caps.is_ci;

        Self {
            json,
            verbose,
            caps,
            color,
            unicode: caps.supports_unicode,
            animation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps(is_ci: bool) -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci,
            width: 120,
        }
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let ui = UiContext::from_caps(false, 0, None, tty_caps(true));
        assert!(!ui.color);
        assert!(!ui.animation);
    }

    #[test]
    fn ci_allows_explicit_color_always_flag() {
        let ui = UiContext::from_caps(false, 0, Some(ColorWhen::Always), tty_caps(true));
        assert!(ui.color);
    }

    #[test]
    fn never_wins_on_a_color_terminal() {
        let ui = UiContext::from_caps(false, 0, Some(ColorWhen::Never), tty_caps(false));
        assert!(!ui.color);
        assert!(ui.animation);
    }

    #[test]
    fn json_disables_animation() {
        let ui = UiContext::from_caps(true, 0, None, tty_caps(false));
        assert!(!ui.animation);
    }
}
