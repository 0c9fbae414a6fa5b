//! std::process implementation of the CommandRunner port

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::ports::{CapturedOutput, CommandRunner, CommandSpec};
use crate::error::{FwkitError, FwkitResult};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs commands on the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }

    fn spawn_error(spec: &CommandSpec, source: std::io::Error) -> FwkitError {
        FwkitError::CommandSpawn {
            program: spec.program.clone(),
            source,
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> FwkitResult<()> {
        log::info!("running: {}", spec);

        // Tool output goes to stderr; stdout carries fwkit's own results.
        let status = Self::command(spec)
            .stdin(Stdio::inherit())
            .stdout(Stdio::from(std::io::stderr()))
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Self::spawn_error(spec, e))?;

        if !status.success() {
            return Err(FwkitError::CommandFailed {
                program: spec.program.clone(),
                code: status.code(),
            });
        }
        Ok(())
    }

    fn run_captured(&self, spec: &CommandSpec, timeout: Duration) -> FwkitResult<CapturedOutput> {
        log::info!("running (timeout {}s): {}", timeout.as_secs(), spec);

        let mut child = Self::command(spec)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Self::spawn_error(spec, e))?;

        // Drain both pipes on their own threads so a chatty child cannot
        // block on a full pipe while we wait for it.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let code = match wait_with_deadline(&mut child, timeout)? {
            Some(code) => code,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(FwkitError::CommandTimeout {
                    program: spec.program.clone(),
                    secs: timeout.as_secs(),
                });
            }
        };

        Ok(CapturedOutput {
            code,
            stdout: stdout.join().unwrap_or_default(),
            stderr: stderr.join().unwrap_or_default(),
        })
    }
}

/// `Ok(Some(code))` when the child exits in time, `Ok(None)` on timeout.
fn wait_with_deadline(child: &mut Child, timeout: Duration) -> FwkitResult<Option<Option<i32>>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status.code()));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_spawn_error() {
        let spec = CommandSpec::new("fwkit-definitely-missing-tool");
        let err = SystemRunner::new().run(&spec).unwrap_err();
        assert!(matches!(err, FwkitError::CommandSpawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_command_failed() {
        let spec = CommandSpec::new("sh").args(["-c", "exit 4"]);
        let err = SystemRunner::new().run(&spec).unwrap_err();
        assert!(matches!(err, FwkitError::CommandFailed { code: Some(4), .. }));
    }

    #[cfg(unix)]
    #[test]
    fn captured_output_collects_streams() {
        let spec = CommandSpec::new("sh").args(["-c", "echo out; echo err >&2; exit 2"]);
        let out = SystemRunner::new()
            .run_captured(&spec, Duration::from_secs(10))
            .unwrap();
        assert_eq!(out.code, Some(2));
        assert_eq!(out.stdout.trim(), "out");
        assert_eq!(out.stderr.trim(), "err");
    }

    #[cfg(unix)]
    #[test]
    fn captured_run_times_out() {
        let spec = CommandSpec::new("sleep").args(["5"]);
        let err = SystemRunner::new()
            .run_captured(&spec, Duration::from_millis(200))
            .unwrap_err();
        assert!(matches!(err, FwkitError::CommandTimeout { .. }));
    }
}
