use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};
use zip::result::ZipResult;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the email drafting workspace",
    long_about = "A unified CLI for running the batch evaluator, the demo client,\n\
                  CI checks, and Lambda packaging in the email drafting workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the batch quality evaluation against Bedrock
    Evaluate {
        /// Directory receiving the JSON report and CSV summary
        #[arg(long, default_value = "evaluation_reports")]
        report_dir: String,
    },
    /// Post the sample brief to a deployed endpoint (needs MAILGEN_API_URL and MAILGEN_API_KEY)
    Demo,
    /// Run CI checks (fmt, clippy, tests)
    Ci,
    /// Build and package the generate Lambda for deployment
    ServerlessPackage {
        /// Compilation target triple for Lambda binaries
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        /// Build profile used for binaries
        #[arg(value_enum, long, default_value_t = BuildProfile::Release)]
        profile: BuildProfile,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    fn as_cargo_flag(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Release => Some("--release"),
        }
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

const LAMBDA_BINARY: &str = "generate_lambda";
const LAMBDA_ENTRYPOINT: &str = "bootstrap";

fn package_generate_lambda(target: &str, profile: BuildProfile) -> Result<PathBuf, String> {
    check_target_installed(target)?;

    step("Build generate lambda binary");
    let mut cargo_args = vec![
        "build",
        "-p",
        "mailgen_lambda",
        "--target",
        target,
        "--bin",
        LAMBDA_BINARY,
    ];
    cargo_args.extend(profile.as_cargo_flag());
    run_cargo(&cargo_args);

    step("Package lambda zip artifact");
    let binary = Path::new("target")
        .join(target)
        .join(profile.dir_name())
        .join(lambda_binary_file(target));
    let dist_dir = Path::new("dist");
    fs::create_dir_all(dist_dir)
        .map_err(|error| format!("cannot create {}: {error}", dist_dir.display()))?;

    let archive = dist_dir.join(format!("{LAMBDA_BINARY}.zip"));
    zip_as_bootstrap(&binary, &archive)?;
    Ok(archive)
}

/// Lambda's custom runtime only runs Linux targets; a missing `rustup` skips the check.
fn check_target_installed(target: &str) -> Result<(), String> {
    let output = match Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
    {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            return Err(format!(
                "`rustup target list --installed` failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            ))
        }
        Err(error) => {
            eprintln!("warning: rustup unavailable ({error}); skipping target check");
            return Ok(());
        }
    };

    let installed = String::from_utf8_lossy(&output.stdout);
    if installed.lines().any(|line| line.trim() == target) {
        Ok(())
    } else {
        Err(format!("target `{target}` is missing; run `rustup target add {target}`"))
    }
}

fn lambda_binary_file(target: &str) -> String {
    if target.contains("windows") {
        format!("{LAMBDA_BINARY}.exe")
    } else {
        LAMBDA_BINARY.to_string()
    }
}

/// Writes `binary` into a fresh zip at `archive` as an executable `bootstrap` entry.
fn zip_as_bootstrap(binary: &Path, archive: &Path) -> Result<(), String> {
    let bytes = fs::read(binary)
        .map_err(|error| format!("cannot read lambda binary {}: {error}", binary.display()))?;
    let file = fs::File::create(archive)
        .map_err(|error| format!("cannot create {}: {error}", archive.display()))?;
    write_bootstrap_entry(file, &bytes)
        .map_err(|error| format!("cannot write {}: {error}", archive.display()))
}

fn write_bootstrap_entry(file: fs::File, bytes: &[u8]) -> ZipResult<()> {
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    zip.start_file(LAMBDA_ENTRYPOINT, options)?;
    zip.write_all(bytes)?;
    zip.finish()?;
    Ok(())
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    for package in ["mailgen_core", "mailgen_lambda", "mailgen_eval"] {
        step(&format!("Test {package}"));
        run_cargo(&["test", "-p", package]);
    }
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate { report_dir } => {
            run_cargo(&[
                "run",
                "-p",
                "mailgen_eval",
                "--bin",
                "evaluate",
                "--release",
                "--",
                "--report-dir",
                &report_dir,
            ]);
        }
        Commands::Demo => {
            run_cargo(&["run", "-p", "mailgen_lambda", "--bin", "demo_client"]);
        }
        Commands::Ci => {
            ci_check();
            eprintln!("\nCI job passed.");
        }
        Commands::ServerlessPackage { target, profile } => {
            match package_generate_lambda(&target, profile) {
                Ok(archive) => eprintln!("\nPackaged artifact:\n- {}", archive.display()),
                Err(error) => {
                    eprintln!("error: {error}");
                    exit(1);
                }
            }
        }
    }
}
