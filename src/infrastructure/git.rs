//! Git CLI implementation of the SourceControl port

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::SourceControl;

/// Queries `git` in a project directory. Any failure reads as "unknown".
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_dir: PathBuf,
    program: String,
}

impl GitCli {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            program: "git".to_string(),
        }
    }

    /// Use a different git executable (tests point this at a missing binary).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    fn run(&self, args: &[&str]) -> Option<String> {
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.repo_dir)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match output {
            Ok(out) if out.status.success() => {
                let text = String::from_utf8_lossy(&out.stdout).trim().to_string();
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
            Ok(out) => {
                log::debug!("git {} exited with {:?}", args.join(" "), out.status.code());
                None
            }
            Err(e) => {
                log::debug!("git {} could not run: {}", args.join(" "), e);
                None
            }
        }
    }
}

impl SourceControl for GitCli {
    fn latest_tag(&self) -> Option<String> {
        self.run(&["describe", "--tags", "--abbrev=0"])
    }

    fn short_hash(&self) -> Option<String> {
        self.run(&["rev-parse", "--short", "HEAD"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_git_binary_yields_none() {
        let dir = tempdir().unwrap();
        let git = GitCli::new(dir.path()).with_program("fwkit-no-such-git");
        assert_eq!(git.latest_tag(), None);
        assert_eq!(git.short_hash(), None);
    }

    #[test]
    fn queries_never_panic_in_plain_directory() {
        let dir = tempdir().unwrap();
        let git = GitCli::new(dir.path());
        let _ = git.latest_tag();
        let _ = git.short_hash();
    }
}
