//! CommandRunner port - blocking invocation of external build tools

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::FwkitResult;

/// A program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Output of a command whose streams were captured
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Non-blank stderr lines, trimmed of trailing whitespace
    pub fn stderr_lines(&self) -> impl Iterator<Item = &str> {
        self.stderr
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.trim().is_empty())
    }
}

/// Runs external programs to completion
pub trait CommandRunner {
    /// Run with inherited stdio. A non-zero exit is `CommandFailed`.
    fn run(&self, spec: &CommandSpec) -> FwkitResult<()>;

    /// Run with captured stdio, killing the child after `timeout`.
    ///
    /// A non-zero exit is returned in `CapturedOutput`, not as an error;
    /// only spawn failures and timeouts are errors.
    fn run_captured(&self, spec: &CommandSpec, timeout: Duration) -> FwkitResult<CapturedOutput>;
}
