//! wav2pcm command handler

use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;

use fwkit::application::convert_wav_to_pcm;

use crate::commands::Globals;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent, WarningEvent};
use crate::ui::views::audio::render_conversion;

const COMMAND: &str = "wav2pcm";

pub fn cmd_wav2pcm(
    globals: &Globals,
    input: PathBuf,
    output: PathBuf,
    expected_rate: Option<u32>,
) -> Result<()> {
    let config = globals.load_config(COMMAND)?;
    let ui = &globals.ui;

    let input = globals.resolve(&input);
    let output = globals.resolve(&output);
    let expected_rate = expected_rate.unwrap_or(config.audio.expected_sample_rate);

    if ui.json {
        let _ = emit_event(&StartEvent::new(COMMAND));
    }

    let conversion = convert_wav_to_pcm(&input, &output, expected_rate)?;

    if ui.json {
        if let Some(mismatch) = &conversion.rate_mismatch {
            let _ = emit_event(&WarningEvent::new(
                COMMAND,
                format!(
                    "sample rate is {} Hz, expected {} Hz",
                    mismatch.actual, mismatch.expected
                ),
            ));
        }
        let _ = emit_event(&CompleteEvent::success(
            COMMAND,
            json!({
                "output": conversion.output.display().to_string(),
                "bytes": conversion.bytes_written,
                "sample_rate": conversion.format.sample_rate,
            }),
        ));
    } else {
        print!("{}", render_conversion(&conversion, ui.color, ui.unicode));
    }

    Ok(())
}
