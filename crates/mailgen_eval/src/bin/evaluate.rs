use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use mailgen_core::payload::ModelFamily;
use mailgen_core::storage_keys::{REPORT_DIR, REPORT_TIMESTAMP_FORMAT};
use mailgen_eval::judge::DEFAULT_EVALUATION_MODEL_ID;
use mailgen_eval::{default_scenarios, run_evaluation, write_reports, ScenarioJudge};
use mailgen_lambda::adapters::aws::{load_sdk_config, BedrockRuntime};
use mailgen_lambda::adapters::model::BedrockTextModel;
use mailgen_lambda::config::DEFAULT_REGION;
use mailgen_lambda::telemetry::init_console_logging;

#[derive(Parser)]
#[command(
    name = "evaluate",
    about = "Generate, score and review emails for the built-in scenarios"
)]
struct Cli {
    /// Directory receiving the JSON report and CSV summary
    #[arg(long, default_value = REPORT_DIR)]
    report_dir: PathBuf,
    /// Bedrock model used for drafting and judging
    #[arg(long, env = "EVAL_MODEL_ID", default_value = DEFAULT_EVALUATION_MODEL_ID)]
    model_id: String,
    /// Payload family (`prompt` or `messages`); inferred from the model id when omitted
    #[arg(long)]
    family: Option<String>,
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    region: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_console_logging();
    let cli = Cli::parse();

    let family = match cli.family.as_deref() {
        Some(value) => match ModelFamily::parse(value) {
            Some(family) => family,
            None => {
                eprintln!("unknown model family `{value}`; expected `prompt` or `messages`");
                return ExitCode::FAILURE;
            }
        },
        None => ModelFamily::infer(&cli.model_id),
    };

    let sdk_config = load_sdk_config(&cli.region).await;
    let judge = ScenarioJudge::new(BedrockTextModel::new(
        BedrockRuntime::new(&sdk_config),
        cli.model_id.clone(),
        family,
    ));

    tracing::info!(
        component = "evaluate",
        event = "run_started",
        model_id = judge.model().model_id(),
        family = ?judge.model().family(),
        "Starting evaluation"
    );

    let timestamp = Local::now().format(REPORT_TIMESTAMP_FORMAT).to_string();
    let scenarios = default_scenarios();
    let progress = ProgressBar::new(scenarios.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("[{pos}/{len}] {bar:30} {msg}") {
        progress.set_style(style);
    }

    let records = run_evaluation(&scenarios, &judge, &progress);
    progress.finish_and_clear();

    match write_reports(&records, &cli.report_dir, &timestamp) {
        Ok(paths) => {
            println!(
                "\nDetailed evaluation report saved to {}",
                paths.json_report.display()
            );
            println!("Evaluation summary saved to {}", paths.csv_summary.display());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("failed to write evaluation reports: {error}");
            ExitCode::FAILURE
        }
    }
}
