use crate::config::QuestionnaireConfig;
use crate::error::ConfigError;
use crate::scoring::{self, AnswerSet, AssessmentResult};

/// PHQ-9: Patient Health Questionnaire, 9 items rated 0–3, single
/// Depression scale. Item 9 is the suicidal ideation probe: any non-zero
/// answer escalates the result with emergency contacts.
pub(crate) const DEFINITION: &str = include_str!("../../data/phq9_vi.json");

pub fn load() -> Result<QuestionnaireConfig, ConfigError> {
    QuestionnaireConfig::from_json(DEFINITION)
}

pub fn score_phq9(answers: &AnswerSet, config: &QuestionnaireConfig) -> AssessmentResult {
    scoring::score(answers, config)
}
