use fwkit::config::ConfigWarning;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::json::events::WarningEvent;
use crate::ui::primitives::{ColoredText, Icon};

/// Report unknown keys found while loading fwkit.toml.
pub fn print_config_warnings(ui: &UiContext, command: &str, warnings: &[ConfigWarning]) {
    for w in warnings {
        if ui.json {
            let _ = crate::ui::json::emit_event(&WarningEvent::new(command, render_warning(w)));
            continue;
        }
        if ui.caps.is_github_actions {
            println!(
                "{}",
                github_actions_annotation(
                    AnnotationLevel::Warning,
                    &render_warning(w),
                    Some(&w.file.to_string_lossy()),
                    w.line,
                    Some("fwkit"),
                )
            );
        }
        eprintln!(
            "{} {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            ColoredText::warning(render_warning(w)).render(ui.color)
        );
    }
}

fn render_warning(w: &ConfigWarning) -> String {
    let location = match w.line {
        Some(line) => format!("{}:{}", w.file.display(), line),
        None => w.file.display().to_string(),
    };
    match &w.suggestion {
        Some(suggestion) => format!(
            "unknown config key '{}' in {} (did you mean '{}'?)",
            w.key, location, suggestion
        ),
        None => format!("unknown config key '{}' in {}", w.key, location),
    }
}
