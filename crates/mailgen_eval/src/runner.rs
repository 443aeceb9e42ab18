//! Sequential scenario execution.
//!
//! Scenarios are processed strictly one at a time. A scenario whose draft or
//! judge step fails is skipped with a console notice and never retried; a
//! failed bias analysis is recorded as absent.

use indicatif::ProgressBar;
use mailgen_core::evaluation::{EvaluationRecord, Scenario};
use mailgen_lambda::adapters::model::TextModel;

use crate::judge::{ScenarioJudge, StepError};
use crate::summary::{render_analysis_preview, render_score_table};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioOutcome {
    Completed(EvaluationRecord),
    GenerationFailed(StepError),
    EvaluationFailed(StepError),
}

pub fn evaluate_scenario<M: TextModel>(
    judge: &ScenarioJudge<M>,
    scenario: &Scenario,
) -> ScenarioOutcome {
    let email = match judge.generate_email(scenario) {
        Ok(value) => value,
        Err(error) => return ScenarioOutcome::GenerationFailed(error),
    };

    let evaluation = match judge.evaluate_email(&email, scenario) {
        Ok(value) => value,
        Err(error) => return ScenarioOutcome::EvaluationFailed(error),
    };

    let analysis = match judge.analyze_bias_and_ethics(&email) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(
                component = "evaluation_runner",
                event = "analysis_failed",
                scenario = %scenario.name,
                error = %error,
                "Bias analysis unavailable"
            );
            None
        }
    };

    ScenarioOutcome::Completed(EvaluationRecord {
        scenario: scenario.clone(),
        email,
        evaluation,
        analysis,
    })
}

/// Evaluates every scenario in order and returns the completed records.
///
/// Console notices go through `progress` so they interleave cleanly with the
/// bar; pass `ProgressBar::hidden()` for a quiet run.
pub fn run_evaluation<M: TextModel>(
    scenarios: &[Scenario],
    judge: &ScenarioJudge<M>,
    progress: &ProgressBar,
) -> Vec<EvaluationRecord> {
    let mut records = Vec::with_capacity(scenarios.len());

    for scenario in scenarios {
        progress.set_message(scenario.name.clone());
        progress.suspend(|| println!("\nEvaluating scenario: {}...", scenario.name));

        match evaluate_scenario(judge, scenario) {
            ScenarioOutcome::Completed(record) => {
                progress.suspend(|| print_record_summary(&record));
                records.push(record);
            }
            ScenarioOutcome::GenerationFailed(error) => {
                progress.suspend(|| {
                    println!("Failed to generate email ({error}). Skipping scenario.")
                });
            }
            ScenarioOutcome::EvaluationFailed(error) => {
                progress.suspend(|| {
                    println!("Failed to evaluate email ({error}). Skipping further analysis.")
                });
            }
        }

        progress.inc(1);
    }

    records
}

fn print_record_summary(record: &EvaluationRecord) {
    println!("\nScenario: {}", record.scenario.name);
    println!("\nEvaluation Scores:");
    println!("{}", render_score_table(&record.evaluation));

    if let Some(analysis) = &record.analysis {
        println!("\nEthical Analysis Summary:");
        println!("{}", render_analysis_preview(analysis));
    }
}

#[cfg(test)]
mod tests {
    use mailgen_core::payload::SamplingParams;

    use super::*;

    struct FixedModel {
        draft: Result<String, String>,
        judge: String,
        bias: String,
    }

    impl TextModel for FixedModel {
        fn complete(&self, prompt: &str, _sampling: SamplingParams) -> Result<String, String> {
            if prompt.starts_with("You are a professional email assistant") {
                self.draft.clone()
            } else if prompt.starts_with("Please evaluate") {
                Ok(self.judge.clone())
            } else {
                Ok(self.bias.clone())
            }
        }
    }

    const JUDGE: &str = r#"{"content_relevance": {"score": 4, "notes": "a"}, "professionalism": {"score": 4, "notes": "b"}, "tone_consistency": {"score": 4, "notes": "c"}, "completeness": {"score": 4, "notes": "d"}, "format_correctness": {"score": 4, "notes": "e"}, "overall": {"score": 4, "notes": "f"}}"#;

    fn scenario() -> Scenario {
        Scenario::new("Case", "Purpose", "Recipient", "Points", "warm")
    }

    #[test]
    fn completes_with_analysis() {
        let judge = ScenarioJudge::new(FixedModel {
            draft: Ok("Subject: Hi".to_string()),
            judge: JUDGE.to_string(),
            bias: r#"{"language_bias": "a", "inclusivity": "b", "ethical_concerns": "c", "recommendations": "d"}"#
                .to_string(),
        });

        let ScenarioOutcome::Completed(record) = evaluate_scenario(&judge, &scenario()) else {
            panic!("scenario should complete");
        };
        assert_eq!(record.email, "Subject: Hi");
        assert_eq!(record.evaluation.score_row(), [4; 6]);
        assert!(record.analysis.is_some());
    }

    #[test]
    fn failed_analysis_keeps_the_record() {
        let judge = ScenarioJudge::new(FixedModel {
            draft: Ok("Subject: Hi".to_string()),
            judge: JUDGE.to_string(),
            bias: "I cannot produce JSON".to_string(),
        });

        let ScenarioOutcome::Completed(record) = evaluate_scenario(&judge, &scenario()) else {
            panic!("scenario should complete");
        };
        assert!(record.analysis.is_none());
    }

    #[test]
    fn failed_draft_stops_before_judging() {
        let judge = ScenarioJudge::new(FixedModel {
            draft: Err("timeout".to_string()),
            judge: JUDGE.to_string(),
            bias: String::new(),
        });

        assert_eq!(
            evaluate_scenario(&judge, &scenario()),
            ScenarioOutcome::GenerationFailed(StepError::Invocation("timeout".to_string()))
        );
    }

    #[test]
    fn unparseable_judgement_skips_scenario() {
        let judge = ScenarioJudge::new(FixedModel {
            draft: Ok("Subject: Hi".to_string()),
            judge: "great email".to_string(),
            bias: String::new(),
        });

        let records = run_evaluation(&[scenario()], &judge, &ProgressBar::hidden());
        assert!(records.is_empty());
    }
}
