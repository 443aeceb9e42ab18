//! The three model calls made for every scenario.

use mailgen_core::evaluation::{BiasAnalysis, EvaluationScores, Scenario};
use mailgen_core::extract::extract_json;
use mailgen_core::payload::{SamplingParams, DEFAULT_MAX_TOKENS};
use mailgen_core::prompt::{bias_analysis_prompt, draft_email_prompt, evaluation_prompt};
use mailgen_lambda::adapters::model::TextModel;

pub const DEFAULT_EVALUATION_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";
pub const DRAFT_SAMPLING: SamplingParams = SamplingParams::new(DEFAULT_MAX_TOKENS, 0.7);
pub const JUDGE_SAMPLING: SamplingParams = SamplingParams::new(DEFAULT_MAX_TOKENS, 0.2);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("model call failed: {0}")]
    Invocation(String),
    #[error("model returned an empty email")]
    EmptyEmail,
    #[error("couldn't find JSON object in response")]
    NoJsonObject,
    #[error("response JSON did not have the expected fields")]
    UnexpectedShape,
}

#[derive(Debug, Clone)]
pub struct ScenarioJudge<M> {
    model: M,
}

impl<M: TextModel> ScenarioJudge<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn generate_email(&self, scenario: &Scenario) -> Result<String, StepError> {
        let email = self
            .model
            .complete(&draft_email_prompt(&scenario.brief()), DRAFT_SAMPLING)
            .map_err(StepError::Invocation)?;
        if email.trim().is_empty() {
            return Err(StepError::EmptyEmail);
        }
        Ok(email)
    }

    pub fn evaluate_email(
        &self,
        email: &str,
        scenario: &Scenario,
    ) -> Result<EvaluationScores, StepError> {
        let reply = self
            .model
            .complete(&evaluation_prompt(email, &scenario.brief()), JUDGE_SAMPLING)
            .map_err(StepError::Invocation)?;
        let object = extract_json(&reply).ok_or(StepError::NoJsonObject)?;
        EvaluationScores::from_json_object(object).ok_or(StepError::UnexpectedShape)
    }

    pub fn analyze_bias_and_ethics(&self, email: &str) -> Result<BiasAnalysis, StepError> {
        let reply = self
            .model
            .complete(&bias_analysis_prompt(email), JUDGE_SAMPLING)
            .map_err(StepError::Invocation)?;
        let object = extract_json(&reply).ok_or(StepError::NoJsonObject)?;
        BiasAnalysis::from_json_object(object).ok_or(StepError::UnexpectedShape)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct QueueModel {
        replies: Mutex<Vec<Result<String, String>>>,
        sampling: Mutex<Vec<SamplingParams>>,
    }

    impl QueueModel {
        fn new(replies: Vec<Result<&str, &str>>) -> Self {
            Self {
                replies: Mutex::new(
                    replies
                        .into_iter()
                        .rev()
                        .map(|reply| reply.map(str::to_string).map_err(str::to_string))
                        .collect(),
                ),
                sampling: Mutex::new(Vec::new()),
            }
        }
    }

    impl TextModel for QueueModel {
        fn complete(&self, _prompt: &str, sampling: SamplingParams) -> Result<String, String> {
            self.sampling.lock().expect("poisoned mutex").push(sampling);
            self.replies
                .lock()
                .expect("poisoned mutex")
                .pop()
                .unwrap_or_else(|| Err("no scripted reply".to_string()))
        }
    }

    fn scenario() -> Scenario {
        Scenario::new("Case", "Purpose", "Recipient", "Points", "warm")
    }

    const JUDGE_REPLY: &str = r#"Sure! Here is my evaluation:
{
  "content_relevance": {"score": 5, "notes": "on topic"},
  "professionalism": {"score": 4, "notes": "clean"},
  "tone_consistency": {"score": 4, "notes": "warm"},
  "completeness": {"score": 5, "notes": "all points"},
  "format_correctness": {"score": 5, "notes": "complete"},
  "overall": {"score": 5, "notes": "great"}
}
Let me know if you need more."#;

    #[test]
    fn draft_and_judge_use_their_own_temperatures() {
        let judge = ScenarioJudge::new(QueueModel::new(vec![Ok("Subject: Hi"), Ok(JUDGE_REPLY)]));

        let email = judge.generate_email(&scenario()).expect("email");
        let scores = judge.evaluate_email(&email, &scenario()).expect("scores");

        assert_eq!(scores.overall.score, 5);
        let sampling = judge.model.sampling.lock().expect("poisoned mutex");
        assert_eq!(*sampling, vec![DRAFT_SAMPLING, JUDGE_SAMPLING]);
    }

    #[test]
    fn blank_email_counts_as_failure() {
        let judge = ScenarioJudge::new(QueueModel::new(vec![Ok("   ")]));
        assert_eq!(judge.generate_email(&scenario()), Err(StepError::EmptyEmail));
    }

    #[test]
    fn prose_only_judge_reply_has_no_json() {
        let judge = ScenarioJudge::new(QueueModel::new(vec![Ok("Looks fine to me.")]));
        assert_eq!(
            judge.evaluate_email("Subject: Hi", &scenario()),
            Err(StepError::NoJsonObject)
        );
    }

    #[test]
    fn incomplete_judge_json_is_rejected() {
        let judge = ScenarioJudge::new(QueueModel::new(vec![Ok(r#"{"overall": {"score": 3}}"#)]));
        assert_eq!(
            judge.evaluate_email("Subject: Hi", &scenario()),
            Err(StepError::UnexpectedShape)
        );
    }

    #[test]
    fn bias_analysis_is_parsed_from_wrapped_json() {
        let judge = ScenarioJudge::new(QueueModel::new(vec![Ok(
            "Analysis: {\"language_bias\": \"none\", \"inclusivity\": \"good\", \"ethical_concerns\": \"none\", \"recommendations\": \"none\"}",
        )]));

        let analysis = judge.analyze_bias_and_ethics("Subject: Hi").expect("analysis");
        assert_eq!(analysis.inclusivity, "good");
    }

    #[test]
    fn invocation_errors_are_reported() {
        let judge = ScenarioJudge::new(QueueModel::new(vec![Err("throttled")]));
        assert_eq!(
            judge.analyze_bias_and_ethics("Subject: Hi"),
            Err(StepError::Invocation("throttled".to_string()))
        );
    }
}
