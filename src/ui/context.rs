use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8) -> Self {
        Self::from_caps(json, verbose, detect_capabilities())
    }

    pub(crate) fn from_caps(json: bool, verbose: u8, caps: TerminalCapabilities) -> Self {
        Self {
            json,
            verbose,
            caps,
            color: !json && caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
        }
    }

    /// Show diffs and per-file detail
    pub fn detailed(&self) -> bool {
        self.verbose > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps() -> TerminalCapabilities {
        TerminalCapabilities {
            supports_color: true,
            supports_unicode: true,
            is_ci: false,
            is_github_actions: false,
        }
    }

    #[test]
    fn json_disables_color() {
        let ui = UiContext::from_caps(true, 0, caps());
        assert!(!ui.color);
    }

    #[test]
    fn ci_disables_color() {
        let mut c = caps();
        c.is_ci = true;
        assert!(!UiContext::from_caps(false, 0, c).color);
    }

    #[test]
    fn verbose_enables_detail() {
        assert!(!UiContext::from_caps(false, 0, caps()).detailed());
        assert!(UiContext::from_caps(false, 1, caps()).detailed());
    }
}
