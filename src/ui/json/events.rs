//! Shared JSON event types for consistent CLI output.

use serde::Serialize;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// One unit of work: a header, an image, a patched file.
#[derive(Debug, Clone, Serialize)]
pub struct ItemEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> ItemEvent<'a, T> {
    pub fn new(command: &'a str, data: T) -> Self {
        Self {
            event: "item",
            command,
            data,
        }
    }
}

/// Non-fatal condition worth surfacing.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> WarningEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            command,
            message: message.into(),
        }
    }
}

/// Event emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(flatten)]
    pub summary: T,
}

impl<'a, T: Serialize> CompleteEvent<'a, T> {
    pub fn success(command: &'a str, summary: T) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            summary,
        }
    }

    pub fn failure(command: &'a str, summary: T) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
            summary,
        }
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub code: &'a str,
    pub message: String,
    pub exit_code: i32,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(code: &'a str, message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            event: "error",
            code,
            message: message.into(),
            exit_code,
        }
    }
}
