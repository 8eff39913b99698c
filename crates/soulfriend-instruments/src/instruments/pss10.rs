use crate::config::QuestionnaireConfig;
use crate::error::ConfigError;
use crate::scoring::{self, AnswerSet, AssessmentResult};

/// PSS-10: Perceived Stress Scale, 10 items rated 0–4. Items 4, 5, 7 and 8
/// are positively phrased and reverse-scored (base 4). A total of 30 or
/// above escalates the result with emergency contacts.
pub(crate) const DEFINITION: &str = include_str!("../../data/pss10_vi.json");

pub fn load() -> Result<QuestionnaireConfig, ConfigError> {
    QuestionnaireConfig::from_json(DEFINITION)
}

pub fn score_pss10(answers: &AnswerSet, config: &QuestionnaireConfig) -> AssessmentResult {
    scoring::score(answers, config)
}
