//! Records produced by the batch quality evaluation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::contract::EmailBrief;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// A fixed evaluation case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub purpose: String,
    pub recipient: String,
    pub key_points: String,
    pub tone: String,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        purpose: impl Into<String>,
        recipient: impl Into<String>,
        key_points: impl Into<String>,
        tone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            purpose: purpose.into(),
            recipient: recipient.into(),
            key_points: key_points.into(),
            tone: tone.into(),
        }
    }

    pub fn brief(&self) -> EmailBrief {
        EmailBrief {
            purpose: self.purpose.clone(),
            recipient: self.recipient.clone(),
            key_points: self.key_points.clone(),
            tone: self.tone.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CriterionScore {
    pub score: u8,
    #[serde(default)]
    pub notes: String,
}

/// Judge output: five rubric criteria plus an overall verdict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationScores {
    pub content_relevance: CriterionScore,
    pub professionalism: CriterionScore,
    pub tone_consistency: CriterionScore,
    pub completeness: CriterionScore,
    pub format_correctness: CriterionScore,
    pub overall: CriterionScore,
}

impl EvaluationScores {
    /// Converts an extracted judge object, rejecting missing criteria and
    /// scores outside the 1-5 range.
    pub fn from_json_object(object: Map<String, Value>) -> Option<Self> {
        let scores: Self = serde_json::from_value(Value::Object(object)).ok()?;
        let all_in_range = scores
            .criteria()
            .iter()
            .map(|(_, criterion)| criterion.score)
            .chain(std::iter::once(scores.overall.score))
            .all(|score| (MIN_SCORE..=MAX_SCORE).contains(&score));
        all_in_range.then_some(scores)
    }

    /// Rubric criteria in report order, excluding `overall`.
    pub fn criteria(&self) -> [(&'static str, &CriterionScore); 5] {
        [
            ("Content Relevance", &self.content_relevance),
            ("Professionalism", &self.professionalism),
            ("Tone Consistency", &self.tone_consistency),
            ("Completeness", &self.completeness),
            ("Format Correctness", &self.format_correctness),
        ]
    }

    /// The five criterion scores followed by the overall score.
    pub fn score_row(&self) -> [u8; 6] {
        [
            self.content_relevance.score,
            self.professionalism.score,
            self.tone_consistency.score,
            self.completeness.score,
            self.format_correctness.score,
            self.overall.score,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BiasAnalysis {
    pub language_bias: String,
    pub inclusivity: String,
    pub ethical_concerns: String,
    pub recommendations: String,
}

impl BiasAnalysis {
    pub fn from_json_object(object: Map<String, Value>) -> Option<Self> {
        serde_json::from_value(Value::Object(object)).ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationRecord {
    pub scenario: Scenario,
    pub email: String,
    pub evaluation: EvaluationScores,
    pub analysis: Option<BiasAnalysis>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn judge_object(overall: i64) -> Map<String, Value> {
        let value = json!({
            "content_relevance": {"score": 5, "notes": "on topic"},
            "professionalism": {"score": 4, "notes": "clean"},
            "tone_consistency": {"score": 4, "notes": "steady"},
            "completeness": {"score": 3, "notes": "misses one point"},
            "format_correctness": {"score": 5, "notes": "all parts present"},
            "overall": {"score": overall, "notes": "solid"}
        });
        match value {
            Value::Object(object) => object,
            _ => unreachable!(),
        }
    }

    #[test]
    fn parses_complete_judge_object() {
        let scores = EvaluationScores::from_json_object(judge_object(4))
            .expect("judge object should parse");

        assert_eq!(scores.score_row(), [5, 4, 4, 3, 5, 4]);
        assert_eq!(scores.criteria()[3].0, "Completeness");
        assert_eq!(scores.criteria()[3].1.notes, "misses one point");
    }

    #[test]
    fn rejects_out_of_range_scores() {
        assert!(EvaluationScores::from_json_object(judge_object(0)).is_none());
        assert!(EvaluationScores::from_json_object(judge_object(6)).is_none());
    }

    #[test]
    fn rejects_missing_criterion() {
        let mut object = judge_object(4);
        object.remove("completeness");
        assert!(EvaluationScores::from_json_object(object).is_none());
    }

    #[test]
    fn missing_notes_default_to_empty() {
        let mut object = judge_object(4);
        object.insert("overall".to_string(), json!({"score": 4}));

        let scores = EvaluationScores::from_json_object(object).expect("should parse");
        assert!(scores.overall.notes.is_empty());
    }

    #[test]
    fn bias_analysis_requires_all_fields() {
        let complete = json!({
            "language_bias": "none",
            "inclusivity": "good",
            "ethical_concerns": "none",
            "recommendations": "keep as is"
        });
        let partial = json!({"language_bias": "none"});

        let Value::Object(complete) = complete else { unreachable!() };
        let Value::Object(partial) = partial else { unreachable!() };

        assert!(BiasAnalysis::from_json_object(complete).is_some());
        assert!(BiasAnalysis::from_json_object(partial).is_none());
    }

    #[test]
    fn scenario_brief_copies_fields() {
        let scenario = Scenario::new("Name", "Purpose", "Recipient", "Points", "warm");
        let brief = scenario.brief();

        assert_eq!(brief.purpose, "Purpose");
        assert_eq!(brief.tone, "warm");
    }
}
