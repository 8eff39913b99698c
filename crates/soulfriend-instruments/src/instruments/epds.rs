use crate::config::QuestionnaireConfig;
use crate::error::ConfigError;
use crate::scoring::{self, AnswerSet, AssessmentResult};

/// EPDS: Edinburgh Postnatal Depression Scale, 10 items rated 0–3.
/// Items 1–2 are phrased positively and reverse-scored (base 3). Item 10
/// is the self-harm probe: any non-zero answer escalates the result.
pub(crate) const DEFINITION: &str = include_str!("../../data/epds_vi.json");

pub fn load() -> Result<QuestionnaireConfig, ConfigError> {
    QuestionnaireConfig::from_json(DEFINITION)
}

pub fn score_epds(answers: &AnswerSet, config: &QuestionnaireConfig) -> AssessmentResult {
    scoring::score(answers, config)
}
