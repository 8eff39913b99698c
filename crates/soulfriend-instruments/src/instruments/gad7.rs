use crate::config::QuestionnaireConfig;
use crate::error::ConfigError;
use crate::scoring::{self, AnswerSet, AssessmentResult};

/// GAD-7: Generalized Anxiety Disorder scale, 7 items rated 0–3, single
/// Anxiety scale with the conventional 0–4/5–9/10–14/15–21 bands.
pub(crate) const DEFINITION: &str = include_str!("../../data/gad7_vi.json");

pub fn load() -> Result<QuestionnaireConfig, ConfigError> {
    QuestionnaireConfig::from_json(DEFINITION)
}

pub fn score_gad7(answers: &AnswerSet, config: &QuestionnaireConfig) -> AssessmentResult {
    scoring::score(answers, config)
}
