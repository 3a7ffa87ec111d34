//! # Validate Subcommand
//!
//! Validates the bundled OpenClaw config set, or the set described by a
//! manifest, and prints one line per file.
//!
//! ```text
//! VALID: openclaw.a.json | JS object syntax (JSONC) — OpenClaw native, skipping strict parse
//! VALID: openclaw.g.json | primary=cliproxy/gemini-2.5-pro | providers=cliproxy
//! INVALID: openclaw.z.json — missing: channels.whatsapp
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};

use clawcheck_schema::{ConfigValidator, Manifest, ValidationReport};

/// Report format.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `VALID:`/`INVALID:` lines; invalid lines on stderr.
    #[default]
    Text,
    /// The whole report as pretty JSON on stdout.
    Json,
}

/// Arguments for `clawcheck validate`.
#[derive(Args, Debug, Clone, Default)]
pub struct ValidateArgs {
    /// Directory holding the bundled config set. Defaults to the nearest
    /// `configs/` at or above the current directory.
    #[arg(long, value_name = "DIR", conflicts_with = "manifest")]
    pub config_dir: Option<PathBuf>,

    /// YAML or JSON manifest listing the files to check.
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Fail files that contain strings shaped like real API keys.
    #[arg(long)]
    pub scan_credentials: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ValidateArgs {
    /// Fill options left unset here from `outer`, the options given before
    /// the subcommand name (`clawcheck --config-dir configs validate`).
    pub fn or(&self, outer: &ValidateArgs) -> ValidateArgs {
        ValidateArgs {
            config_dir: self.config_dir.clone().or_else(|| outer.config_dir.clone()),
            manifest: self.manifest.clone().or_else(|| outer.manifest.clone()),
            scan_credentials: self.scan_credentials || outer.scan_credentials,
            format: if self.format == OutputFormat::Text {
                outer.format
            } else {
                self.format
            },
        }
    }
}

/// Execute the validate subcommand against stdout/stderr.
///
/// Returns exit code: 0 when every file passed, 1 otherwise.
pub fn run_validate(args: &ValidateArgs, work_dir: &Path) -> Result<u8> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_validate_to(args, work_dir, &mut stdout.lock(), &mut stderr.lock())
}

/// Execute the validate subcommand, writing valid lines to `out` and
/// invalid lines to `err`.
pub fn run_validate_to(
    args: &ValidateArgs,
    work_dir: &Path,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<u8> {
    let manifest = load_manifest(args, work_dir)?;
    tracing::debug!(
        files = manifest.entries().len(),
        required_paths = manifest.required_paths().len(),
        scan_credentials = manifest.scan_credentials(),
        "loaded manifest"
    );

    let validator =
        ConfigValidator::new(manifest).context("failed to build credential scanner")?;
    let report = validator.validate_all();

    write_report(&report, args.format, out, err)?;

    Ok(if report.is_success() { 0 } else { 1 })
}

/// Build the manifest from `--manifest`, `--config-dir`, or the nearest
/// `configs/` directory.
fn load_manifest(args: &ValidateArgs, work_dir: &Path) -> Result<Manifest> {
    if args.manifest.is_some() && args.config_dir.is_some() {
        bail!("--config-dir cannot be used with --manifest");
    }

    let manifest = match &args.manifest {
        Some(path) => {
            let resolved = crate::resolve_path(path, work_dir);
            Manifest::load(&resolved)
                .with_context(|| format!("failed to load manifest {}", resolved.display()))?
        }
        None => {
            let config_dir = match &args.config_dir {
                Some(dir) => crate::resolve_path(dir, work_dir),
                None => crate::find_config_dir(work_dir).unwrap_or_else(|| {
                    tracing::warn!(
                        work_dir = %work_dir.display(),
                        "no configs/ directory found; using ./configs"
                    );
                    work_dir.join(crate::CONFIG_DIR_NAME)
                }),
            };
            tracing::debug!(config_dir = %config_dir.display(), "using bundled config set");
            Manifest::bundled(&config_dir)
        }
    };

    Ok(if args.scan_credentials {
        manifest.with_credential_scan(true)
    } else {
        manifest
    })
}

/// Render `report` in `format`.
pub fn write_report(
    report: &ValidationReport,
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for file in &report.files {
                if file.is_valid() {
                    writeln!(out, "{file}")?;
                } else {
                    writeln!(err, "{file}")?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)
                .context("failed to serialize report")?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    err.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = r#"{
  // gateway
  "gateway": {"port": 18789},
  "models": {"providers": {"cliproxy": {}}},
  "agents": {"defaults": {"model": {"primary": "cliproxy/gemini-2.5-pro"}}},
  "channels": {"whatsapp": {}}
}"#;

    fn capture(args: &ValidateArgs, work_dir: &Path) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_validate_to(args, work_dir, &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn missing_config_dir_reports_every_file_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let args = ValidateArgs {
            config_dir: Some(dir.path().join("nope")),
            ..Default::default()
        };
        let (code, out, err) = capture(&args, dir.path());
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err.lines().filter(|l| l.starts_with("INVALID: ")).count(), 5);
    }

    #[test]
    fn default_finds_configs_directory() {
        let dir = tempfile::tempdir().unwrap();
        let configs = dir.path().join("configs");
        std::fs::create_dir(&configs).unwrap();
        for (name, _) in clawcheck_schema::BUNDLED_CONFIGS {
            std::fs::write(configs.join(name), GOOD).unwrap();
        }
        let scripts = dir.path().join("scripts");
        std::fs::create_dir(&scripts).unwrap();

        let (code, out, err) = capture(&ValidateArgs::default(), &scripts);
        assert_eq!(code, 0, "stderr: {err}");
        assert!(err.is_empty());
        assert_eq!(out.lines().count(), 5);
    }

    #[test]
    fn relative_manifest_resolves_against_work_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("only.json"), GOOD).unwrap();
        std::fs::write(dir.path().join("clawcheck.yaml"), "files:\n  - path: only.json\n").unwrap();

        let args = ValidateArgs {
            manifest: Some(PathBuf::from("clawcheck.yaml")),
            ..Default::default()
        };
        let (code, out, _) = capture(&args, dir.path());
        assert_eq!(code, 0);
        assert_eq!(
            out.trim_end(),
            "VALID: only.json | primary=cliproxy/gemini-2.5-pro | providers=cliproxy"
        );
    }

    #[test]
    fn unreadable_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = ValidateArgs {
            manifest: Some(dir.path().join("missing.yaml")),
            ..Default::default()
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run_validate_to(&args, dir.path(), &mut out, &mut err);
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("failed to load manifest"), "{msg}");
    }

    #[test]
    fn json_format_goes_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("only.json"), "{}").unwrap();
        std::fs::write(dir.path().join("m.yaml"), "files:\n  - path: only.json\n").unwrap();

        let args = ValidateArgs {
            manifest: Some(dir.path().join("m.yaml")),
            format: OutputFormat::Json,
            ..Default::default()
        };
        let (code, out, err) = capture(&args, dir.path());
        assert_eq!(code, 1);
        assert!(err.is_empty());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["failed"], 1);
        assert_eq!(value["files"][0]["outcome"]["failure"]["kind"], "missing_paths");
    }

    #[test]
    fn subcommand_options_fill_from_outer_options() {
        let outer = ValidateArgs {
            config_dir: Some(PathBuf::from("configs")),
            format: OutputFormat::Json,
            ..Default::default()
        };
        let inner = ValidateArgs {
            scan_credentials: true,
            ..Default::default()
        };
        let merged = inner.or(&outer);
        assert_eq!(merged.config_dir, Some(PathBuf::from("configs")));
        assert!(merged.scan_credentials);
        assert_eq!(merged.format, OutputFormat::Json);

        let own = ValidateArgs {
            config_dir: Some(PathBuf::from("other")),
            ..Default::default()
        };
        assert_eq!(own.or(&outer).config_dir, Some(PathBuf::from("other")));
    }

    #[test]
    fn config_dir_and_manifest_together_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = ValidateArgs {
            config_dir: Some(PathBuf::from("configs")),
            ..Default::default()
        }
        .or(&ValidateArgs {
            manifest: Some(PathBuf::from("m.yaml")),
            ..Default::default()
        });
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run_validate_to(&args, dir.path(), &mut out, &mut err);
        assert!(format!("{:#}", result.unwrap_err()).contains("cannot be used with"));
    }

    #[test]
    fn scan_flag_enables_credential_check() {
        let dir = tempfile::tempdir().unwrap();
        let leaked = GOOD.replace(
            "\"cliproxy\": {}",
            "\"cliproxy\": {\"apiKey\": \"sk-abcdefghijklmnopqrstuvwxyz\"}",
        );
        std::fs::write(dir.path().join("only.json"), leaked).unwrap();
        std::fs::write(dir.path().join("m.yaml"), "files:\n  - path: only.json\n").unwrap();

        let mut args = ValidateArgs {
            manifest: Some(dir.path().join("m.yaml")),
            ..Default::default()
        };
        assert_eq!(capture(&args, dir.path()).0, 0);

        args.scan_credentials = true;
        let (code, _, err) = capture(&args, dir.path());
        assert_eq!(code, 1);
        assert!(err.contains("embedded credential: openai key on line"), "{err}");
    }
}
