use fwkit::FwkitError;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::json::events::ErrorEvent;
use crate::ui::primitives::{ColoredText, Icon};

/// Process exit code for an error that ended the run.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FwkitError>()
        .map(FwkitError::exit_code)
        .unwrap_or(1)
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );

    // Context layers added with anyhow, innermost last.
    for cause in err.chain().skip(1) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.render(supports_unicode),
            ColoredText::dim(cause.to_string()).render(supports_color)
        ));
    }

    if let Some(hint) = err.downcast_ref::<FwkitError>().and_then(fix_hint) {
        out.push_str(&format!("\n  FIX: {}\n", hint));
    }

    out
}

fn fix_hint(err: &FwkitError) -> Option<String> {
    match err {
        FwkitError::MissingConfigKey { key, section, .. } => Some(format!(
            "add `{} = <value>` under [{}], or pass it on the command line",
            key, section
        )),
        FwkitError::UnsupportedAudio { .. } => Some(
            "re-export the clip as mono 16-bit PCM, e.g. `sox in.wav -c 1 -b 16 out.wav`"
                .to_string(),
        ),
        FwkitError::CommandSpawn { program, .. } => Some(format!(
            "make sure `{}` is installed and on PATH (or set build_tool in fwkit.toml)",
            program
        )),
        FwkitError::ArtifactNotFound { .. } => {
            Some("check the environment name and that the build wrote into .pio/build".to_string())
        }
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    let fwkit = err.downcast_ref::<FwkitError>();

    if json {
        let code = fwkit.map(FwkitError::code).unwrap_or("ERROR");
        let event = ErrorEvent::new(code, format!("{:#}", err), exit_code(err));
        let _ = crate::ui::json::emit_event(&event);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_github_actions {
        let file = fwkit
            .and_then(FwkitError::file)
            .map(|p| p.to_string_lossy().to_string());
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &format!("{:#}", err),
                file.as_deref(),
                None,
                Some("fwkit"),
            )
        );
    }

    eprint!("{}", format_error(err));
}
