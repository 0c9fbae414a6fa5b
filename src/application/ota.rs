//! OTA Use Case
//!
//! Builds firmware and LittleFS images with PlatformIO and exports them
//! under versioned names:
//! 1. Resolve the firmware version (before anything runs)
//! 2. Plan one step per requested image
//! 3. Build, copy to the output directory, record size and digest
//! 4. Write a JSON manifest next to the images

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::{ArtifactKind, OtaArtifact};
use crate::domain::ports::{BuildEvent, BuildEventSink, CommandRunner, CommandSpec};
use crate::error::{FwkitError, FwkitResult};
use crate::infrastructure::fs::{atomic_write, copy_atomic};
use crate::infrastructure::IniDocument;

/// `platformio.ini` key holding the release version
pub const VERSION_KEY: &str = "custom_fw_version";

/// Options for the OTA operation
#[derive(Debug, Clone)]
pub struct OtaOptions {
    /// PlatformIO project directory; build commands run here
    pub project_dir: PathBuf,
    pub platformio_ini: PathBuf,
    pub env: String,
    pub prefix: String,
    /// Explicit version; skips `platformio.ini`
    pub version: Option<String>,
    pub output_dir: PathBuf,
    pub build_tool: String,
    pub skip_firmware: bool,
    pub skip_fs: bool,
}

impl OtaOptions {
    pub fn new(project_dir: impl Into<PathBuf>, env: impl Into<String>) -> Self {
        let project_dir = project_dir.into();
        Self {
            platformio_ini: project_dir.join("platformio.ini"),
            output_dir: project_dir.join("dist/ota"),
            project_dir,
            env: env.into(),
            prefix: "XIAOS3Sense".to_string(),
            version: None,
            build_tool: "pio".to_string(),
            skip_firmware: false,
            skip_fs: false,
        }
    }

    pub fn requested_kinds(&self) -> Vec<ArtifactKind> {
        let mut kinds = Vec::new();
        if !self.skip_firmware {
            kinds.push(ArtifactKind::Firmware);
        }
        if !self.skip_fs {
            kinds.push(ArtifactKind::Littlefs);
        }
        kinds
    }
}

/// One image to build and export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtaStep {
    pub kind: ArtifactKind,
    pub command: CommandSpec,
    /// Where PlatformIO leaves the image
    pub source: PathBuf,
    /// Versioned copy in the output directory
    pub destination: PathBuf,
}

/// Everything needed to run the build, resolved up front
#[derive(Debug, Clone)]
pub struct OtaPlan {
    pub env: String,
    pub prefix: String,
    pub version: String,
    pub steps: Vec<OtaStep>,
    pub manifest: PathBuf,
}

/// Result of the OTA operation
#[derive(Debug, Clone, Default)]
pub struct OtaResult {
    pub artifacts: Vec<OtaArtifact>,
    /// Absent when no image was requested
    pub manifest: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    env: &'a str,
    prefix: &'a str,
    version: &'a str,
    artifacts: Vec<ManifestEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ManifestEntry<'a> {
    kind: ArtifactKind,
    file: String,
    size: u64,
    sha256: &'a str,
}

/// Version for the export names: the override, else `custom_fw_version`
/// from `[env:<env>]`.
pub fn resolve_version(override_version: Option<&str>, ini: &Path, env: &str) -> FwkitResult<String> {
    if let Some(v) = override_version.map(str::trim).filter(|v| !v.is_empty()) {
        return Ok(v.to_string());
    }

    let doc = IniDocument::load(ini)?;
    let version = doc.require_env_value(env, VERSION_KEY)?;
    if version.is_empty() {
        return Err(FwkitError::MissingConfigKey {
            key: VERSION_KEY.to_string(),
            section: format!("env:{}", env),
            file: ini.to_path_buf(),
        });
    }
    log::debug!("{} = {} ({})", VERSION_KEY, version, ini.display());
    Ok(version)
}

/// OTA Use Case
pub struct OtaUseCase<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> OtaUseCase<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Resolve the version and lay out the steps. Runs nothing.
    pub fn plan(&self, options: &OtaOptions) -> FwkitResult<OtaPlan> {
        let version = resolve_version(
            options.version.as_deref(),
            &options.platformio_ini,
            &options.env,
        )?;

        let build_dir = options
            .project_dir
            .join(".pio")
            .join("build")
            .join(&options.env);

        let steps = options
            .requested_kinds()
            .into_iter()
            .map(|kind| OtaStep {
                kind,
                command: CommandSpec::new(&options.build_tool)
                    .args(kind.build_args(&options.env))
                    .cwd(&options.project_dir),
                source: build_dir.join(kind.image_name()),
                destination: options
                    .output_dir
                    .join(kind.export_name(&options.prefix, &version)),
            })
            .collect();

        Ok(OtaPlan {
            env: options.env.clone(),
            prefix: options.prefix.clone(),
            manifest: options
                .output_dir
                .join(format!("{}-{}.json", options.prefix, version)),
            version,
            steps,
        })
    }

    /// Run every step in order, failing fast on the first build error.
    pub fn execute(&self, plan: &OtaPlan, events: &dyn BuildEventSink) -> FwkitResult<OtaResult> {
        let mut result = OtaResult::default();

        for step in &plan.steps {
            events.on_event(BuildEvent::StepStarted {
                kind: step.kind,
                env: plan.env.clone(),
                command: step.command.to_string(),
            });
            log::info!("running {}", step.command);
            self.runner.run(&step.command)?;

            if !step.source.is_file() {
                return Err(FwkitError::ArtifactNotFound {
                    path: step.source.clone(),
                });
            }
            let (size, sha256) = copy_atomic(&step.source, &step.destination)?;
            let artifact = OtaArtifact {
                kind: step.kind,
                source: step.source.clone(),
                exported: step.destination.clone(),
                size,
                sha256,
            };
            events.on_event(BuildEvent::Exported {
                artifact: artifact.clone(),
            });
            result.artifacts.push(artifact);
        }

        if !result.artifacts.is_empty() {
            write_manifest(plan, &result.artifacts)?;
            events.on_event(BuildEvent::ManifestWritten {
                path: plan.manifest.clone(),
            });
            result.manifest = Some(plan.manifest.clone());
        }

        Ok(result)
    }
}

fn write_manifest(plan: &OtaPlan, artifacts: &[OtaArtifact]) -> FwkitResult<()> {
    let manifest = Manifest {
        env: &plan.env,
        prefix: &plan.prefix,
        version: &plan.version,
        artifacts: artifacts
            .iter()
            .map(|a| ManifestEntry {
                kind: a.kind,
                file: a
                    .exported
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                size: a.size,
                sha256: a.sha256.as_str(),
            })
            .collect(),
    };
    let mut json = serde_json::to_vec_pretty(&manifest)?;
    json.push(b'\n');
    atomic_write(&plan.manifest, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{CapturedOutput, NoopEventSink};
    use std::cell::RefCell;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    const INI: &str = "[env:seeed_xiao_esp32s3]\ncustom_fw_version = 1.4.2\n";

    /// Pretends to be PlatformIO: records commands and drops an image into
    /// the build directory, or fails with a fixed exit code.
    struct FakeBuildTool {
        calls: RefCell<Vec<CommandSpec>>,
        fail_with: Option<i32>,
        produce_images: bool,
    }

    impl FakeBuildTool {
        fn ok() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_with: None,
                produce_images: true,
            }
        }
    }

    impl CommandRunner for FakeBuildTool {
        fn run(&self, spec: &CommandSpec) -> FwkitResult<()> {
            self.calls.borrow_mut().push(spec.clone());
            if let Some(code) = self.fail_with {
                return Err(FwkitError::CommandFailed {
                    program: spec.program.clone(),
                    code: Some(code),
                });
            }
            if self.produce_images {
                let env = spec.args.last().unwrap();
                let image = if spec.args.contains(&"buildfs".to_string()) {
                    "littlefs.bin"
                } else {
                    "firmware.bin"
                };
                let dir = spec.cwd.as_ref().unwrap().join(".pio/build").join(env);
                fs::create_dir_all(&dir).unwrap();
                fs::write(dir.join(image), image.as_bytes()).unwrap();
            }
            Ok(())
        }

        fn run_captured(&self, _spec: &CommandSpec, _timeout: Duration) -> FwkitResult<CapturedOutput> {
            unreachable!("ota never captures output")
        }
    }

    fn project() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("platformio.ini"), INI).unwrap();
        dir
    }

    #[test]
    fn resolve_version_prefers_override() {
        let dir = tempdir().unwrap();
        let ini = dir.path().join("platformio.ini");
        assert_eq!(resolve_version(Some(" 2.0.0 "), &ini, "x").unwrap(), "2.0.0");
    }

    #[test]
    fn resolve_version_reads_ini() {
        let dir = project();
        let ini = dir.path().join("platformio.ini");
        assert_eq!(
            resolve_version(None, &ini, "seeed_xiao_esp32s3").unwrap(),
            "1.4.2"
        );
    }

    #[test]
    fn resolve_version_missing_ini() {
        let dir = tempdir().unwrap();
        let err = resolve_version(None, &dir.path().join("platformio.ini"), "x").unwrap_err();
        assert!(matches!(err, FwkitError::FileNotFound { .. }));
    }

    #[test]
    fn resolve_version_missing_key_or_section() {
        let dir = project();
        let ini = dir.path().join("platformio.ini");
        let err = resolve_version(None, &ini, "esp32cam").unwrap_err();
        assert!(matches!(err, FwkitError::MissingConfigKey { .. }));

        fs::write(&ini, "[env:a]\ncustom_fw_version =\n").unwrap();
        let err = resolve_version(None, &ini, "a").unwrap_err();
        assert!(matches!(err, FwkitError::MissingConfigKey { .. }));
    }

    #[test]
    fn plan_lays_out_versioned_names() {
        let dir = project();
        let options = OtaOptions::new(dir.path(), "seeed_xiao_esp32s3");
        let plan = OtaUseCase::new(FakeBuildTool::ok()).plan(&options).unwrap();

        assert_eq!(plan.version, "1.4.2");
        assert_eq!(plan.steps.len(), 2);
        assert_eq!(
            plan.steps[0].destination,
            dir.path().join("dist/ota/XIAOS3Sense-1.4.2-firmware.bin")
        );
        assert_eq!(
            plan.steps[1].command.to_string(),
            "pio run -t buildfs -e seeed_xiao_esp32s3"
        );
        assert_eq!(plan.manifest, dir.path().join("dist/ota/XIAOS3Sense-1.4.2.json"));
    }

    #[test]
    fn missing_version_fails_before_any_build() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("platformio.ini"), "[env:seeed_xiao_esp32s3]\n").unwrap();
        let use_case = OtaUseCase::new(FakeBuildTool::ok());

        let err = use_case
            .plan(&OtaOptions::new(dir.path(), "seeed_xiao_esp32s3"))
            .unwrap_err();

        assert!(matches!(err, FwkitError::MissingConfigKey { .. }));
        assert!(use_case.runner.calls.borrow().is_empty());
    }

    #[test]
    fn execute_exports_images_and_manifest() {
        let dir = project();
        let use_case = OtaUseCase::new(FakeBuildTool::ok());
        let plan = use_case
            .plan(&OtaOptions::new(dir.path(), "seeed_xiao_esp32s3"))
            .unwrap();

        let result = use_case.execute(&plan, &NoopEventSink).unwrap();

        assert_eq!(result.artifacts.len(), 2);
        let firmware = dir.path().join("dist/ota/XIAOS3Sense-1.4.2-firmware.bin");
        assert_eq!(fs::read(&firmware).unwrap(), b"firmware.bin");
        assert_eq!(result.artifacts[0].size, 12);

        let manifest: serde_json::Value =
            serde_json::from_slice(&fs::read(result.manifest.unwrap()).unwrap()).unwrap();
        assert_eq!(manifest["version"], "1.4.2");
        assert_eq!(manifest["artifacts"][1]["kind"], "littlefs");
        assert_eq!(
            manifest["artifacts"][1]["file"],
            "XIAOS3Sense-1.4.2-littlefs.bin"
        );
        assert!(manifest["artifacts"][0]["sha256"]
            .as_str()
            .unwrap()
            .starts_with("sha256:"));
    }

    #[test]
    fn skip_flags_limit_steps() {
        let dir = project();
        let mut options = OtaOptions::new(dir.path(), "seeed_xiao_esp32s3");
        options.skip_firmware = true;
        let use_case = OtaUseCase::new(FakeBuildTool::ok());

        let plan = use_case.plan(&options).unwrap();
        assert_eq!(plan.steps.len(), 1);
        assert_eq!(plan.steps[0].kind, ArtifactKind::Littlefs);

        options.skip_fs = true;
        let plan = use_case.plan(&options).unwrap();
        let result = use_case.execute(&plan, &NoopEventSink).unwrap();
        assert!(result.artifacts.is_empty());
        assert!(result.manifest.is_none());
    }

    #[test]
    fn build_failure_stops_the_run() {
        let dir = project();
        let mut tool = FakeBuildTool::ok();
        tool.fail_with = Some(2);
        let use_case = OtaUseCase::new(tool);
        let plan = use_case
            .plan(&OtaOptions::new(dir.path(), "seeed_xiao_esp32s3"))
            .unwrap();

        let err = use_case.execute(&plan, &NoopEventSink).unwrap_err();

        assert!(matches!(err, FwkitError::CommandFailed { code: Some(2), .. }));
        assert_eq!(use_case.runner.calls.borrow().len(), 1);
        assert!(!dir.path().join("dist/ota").exists());
    }

    #[test]
    fn missing_image_after_build_is_reported() {
        let dir = project();
        let mut tool = FakeBuildTool::ok();
        tool.produce_images = false;
        let use_case = OtaUseCase::new(tool);
        let plan = use_case
            .plan(&OtaOptions::new(dir.path(), "seeed_xiao_esp32s3"))
            .unwrap();

        let err = use_case.execute(&plan, &NoopEventSink).unwrap_err();
        assert!(matches!(err, FwkitError::ArtifactNotFound { .. }));
    }
}
