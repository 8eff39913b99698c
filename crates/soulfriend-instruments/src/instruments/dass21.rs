use crate::config::QuestionnaireConfig;
use crate::error::ConfigError;
use crate::scoring::{self, AnswerSet, AssessmentResult};

/// DASS-21: Depression Anxiety Stress Scales, 21-item short form.
/// Depression / Anxiety / Stress subscales, 7 items each, rated 0–3.
/// Raw subscale sums are doubled to map onto the published DASS-42 bands.
pub(crate) const DEFINITION: &str = include_str!("../../data/dass21_vi.json");

pub fn load() -> Result<QuestionnaireConfig, ConfigError> {
    QuestionnaireConfig::from_json(DEFINITION)
}

pub fn score_dass21(answers: &AnswerSet, config: &QuestionnaireConfig) -> AssessmentResult {
    scoring::score(answers, config)
}
