use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One line per processed thing: `  ✓ index.html  14.2 KB -> 3.1 KB`.
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub icon: Icon,
    pub name: String,
    pub detail: Option<String>,
    pub notes: Vec<String>,
}

impl StatusLine {
    pub fn new(icon: Icon, name: impl Into<String>) -> Self {
        Self {
            icon,
            name: name.into(),
            detail: None,
            notes: Vec::new(),
        }
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "  {} {}",
            self.icon.colored(supports_color, supports_unicode),
            self.name
        );
        if let Some(detail) = &self.detail {
            out.push_str("  ");
            out.push_str(&ColoredText::dim(detail.as_str()).render(supports_color));
        }
        out.push('\n');

        for note in &self.notes {
            out.push_str(&format!(
                "    {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                note
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_detail_and_notes() {
        let line = StatusLine::new(Icon::Warning, "app.js")
            .detail("stale")
            .note("run `fwkit embed` to regenerate");

        let rendered = line.render(false, false);
        assert_eq!(
            rendered,
            "  [WARN] app.js  stale\n    [>] run `fwkit embed` to regenerate\n"
        );
    }
}
