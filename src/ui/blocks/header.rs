use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Title line plus `label: value` pairs printed before a command runs.
#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    items: Vec<(String, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.items.push((label.into(), value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            ColoredText::info(self.title.as_str())
                .bold()
                .render(supports_color)
        );
        let width = self.items.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        for (label, value) in &self.items {
            out.push_str(&format!(
                "  {} {}\n",
                ColoredText::dim(format!("{:<width$}", format!("{label}:"), width = width + 1))
                    .render(supports_color),
                value
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_ascii_icon_and_aligned_items() {
        let mut header = CommandHeader::new(Icon::Build, "OTA build");
        header.add("Env", "seeed_xiao_esp32s3");
        header.add("Version", "1.4.0");

        let rendered = header.render(false, false);
        assert_eq!(
            rendered,
            "[BUILD] OTA build\n  Env:     seeed_xiao_esp32s3\n  Version: 1.4.0\n"
        );
    }
}
