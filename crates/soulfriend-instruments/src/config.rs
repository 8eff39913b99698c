//! Typed questionnaire configuration.
//!
//! Every definition is deserialized into these structs and validated once,
//! at load time. Scoring operates on validated configs only and never
//! re-checks structure.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ConfigError;

/// A complete questionnaire definition for one standardized instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionnaireConfig {
    /// Scale identifier, e.g. "DASS-21".
    pub scale: String,
    pub version: String,
    pub items: Vec<Item>,
    pub options: Vec<ResponseOption>,
    pub scoring: ScoringConfig,
    /// Recommendation bundles keyed by severity band key.
    pub recommendations: BTreeMap<String, Recommendation>,
    #[serde(default)]
    pub emergency_contacts: Option<EmergencyContacts>,
    #[serde(default)]
    pub suicide_risk_assessment: Option<SuicideRiskAssessment>,
}

/// One questionnaire item (question).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: u32,
    /// Localized (Vietnamese) prompt.
    pub text: String,
    /// Aggregation group. May be omitted for single-subscale instruments,
    /// in which case the item contributes to the instrument's sole subscale.
    #[serde(default)]
    pub subscale: Option<String>,
    /// Reverse-scored items contribute `max_option - value` instead of
    /// `value`. The base is the instrument's option range, not a constant.
    #[serde(default)]
    pub reverse_scored: bool,
}

/// One allowed response value with its localized label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub value: u8,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringConfig {
    pub subscales: Vec<SubscaleConfig>,
    /// Total adjusted score at or above which emergency contacts are
    /// injected into the result (PSS-10 uses 30).
    #[serde(default)]
    pub emergency_threshold: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleConfig {
    pub name: String,
    /// Raw-to-adjusted multiplier; 2 for DASS-21's 21-item to 42-point
    /// convention, 1 everywhere else.
    #[serde(default = "default_multiplier")]
    pub multiplier: u32,
    /// Severity bands in ascending clinical order. Validated to tile
    /// `[0, max achievable adjusted score]` exactly.
    pub severity_levels: Vec<SeverityBand>,
}

fn default_multiplier() -> u32 {
    1
}

/// A named, inclusive range over the adjusted score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub key: String,
    /// Localized display label.
    pub label: String,
    pub min: u32,
    pub max: u32,
    pub color: String,
    pub description: String,
}

impl SeverityBand {
    pub fn contains(&self, adjusted: u32) -> bool {
        self.min <= adjusted && adjusted <= self.max
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub title: String,
    pub message: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmergencyContacts {
    pub hotline: String,
    pub emergency: String,
    #[serde(default)]
    pub counseling: Option<String>,
    pub urgent_note: String,
}

/// Maps a designated self-harm probe item's answer value to a risk
/// description (PHQ-9 item 9, EPDS item 10).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SuicideRiskAssessment {
    pub item_id: u32,
    pub levels: BTreeMap<u8, String>,
}

impl QuestionnaireConfig {
    /// Parse and fully validate a questionnaire definition. No partial
    /// success: either a structurally complete config is returned, or the
    /// first violation is reported.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Highest allowed response value. Also the reversal base for
    /// reverse-scored items.
    pub fn max_option_value(&self) -> u8 {
        self.options.last().map(|o| o.value).unwrap_or(0)
    }

    pub fn subscale(&self, name: &str) -> Option<&SubscaleConfig> {
        self.scoring.subscales.iter().find(|s| s.name == name)
    }

    /// The subscale an item contributes to. Items in single-subscale
    /// instruments may omit the name.
    pub fn item_subscale<'a>(&'a self, item: &'a Item) -> Option<&'a str> {
        match &item.subscale {
            Some(name) => Some(name.as_str()),
            None => match self.scoring.subscales.as_slice() {
                [only] => Some(only.name.as_str()),
                _ => None,
            },
        }
    }

    /// Structural validation, run once at load time.
    ///
    /// Severity bands are required to form a closed partition of the
    /// achievable adjusted-score range, so a malformed threshold table is a
    /// load-time error instead of a silent runtime misclassification.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scale = || self.scale.clone();

        if self.items.is_empty() {
            return Err(ConfigError::NoItems { scale: scale() });
        }

        if self.options.is_empty() {
            return Err(ConfigError::NonContiguousOptions { scale: scale() });
        }
        for (i, option) in self.options.iter().enumerate() {
            if usize::from(option.value) != i {
                return Err(ConfigError::NonContiguousOptions { scale: scale() });
            }
        }

        let mut seen = BTreeSet::new();
        for item in &self.items {
            if !seen.insert(item.id) {
                return Err(ConfigError::DuplicateItemId {
                    scale: scale(),
                    id: item.id,
                });
            }
            match &item.subscale {
                Some(name) if self.subscale(name).is_none() => {
                    return Err(ConfigError::UnknownSubscale {
                        scale: scale(),
                        id: item.id,
                        subscale: name.clone(),
                    });
                }
                None if self.scoring.subscales.len() != 1 => {
                    return Err(ConfigError::MissingItemSubscale {
                        scale: scale(),
                        id: item.id,
                    });
                }
                _ => {}
            }
        }

        let max_option = u32::from(self.max_option_value());
        for sub in &self.scoring.subscales {
            let item_count = self
                .items
                .iter()
                .filter(|item| self.item_subscale(item) == Some(sub.name.as_str()))
                .count() as u32;
            // Saturate so an absurd hand-built config reports BandCeiling
            // instead of overflowing.
            let max_adjusted = item_count
                .saturating_mul(max_option)
                .saturating_mul(sub.multiplier);

            if sub.severity_levels.is_empty() {
                return Err(ConfigError::EmptyBands {
                    scale: scale(),
                    subscale: sub.name.clone(),
                });
            }

            let mut expected_min = 0;
            for band in &sub.severity_levels {
                if band.min > band.max {
                    return Err(ConfigError::InvertedBand {
                        scale: scale(),
                        subscale: sub.name.clone(),
                        band: band.key.clone(),
                        min: band.min,
                        max: band.max,
                    });
                }
                if band.min != expected_min {
                    return Err(ConfigError::BandGap {
                        scale: scale(),
                        subscale: sub.name.clone(),
                        band: band.key.clone(),
                        found: band.min,
                        expected: expected_min,
                    });
                }
                expected_min = band.max.saturating_add(1);

                if !self.recommendations.contains_key(&band.key) {
                    return Err(ConfigError::MissingRecommendation {
                        scale: scale(),
                        key: band.key.clone(),
                    });
                }
            }

            let ceiling = expected_min - 1;
            if ceiling != max_adjusted {
                return Err(ConfigError::BandCeiling {
                    scale: scale(),
                    subscale: sub.name.clone(),
                    found: ceiling,
                    expected: max_adjusted,
                });
            }
        }

        if let Some(risk) = &self.suicide_risk_assessment {
            if !self.items.iter().any(|item| item.id == risk.item_id) {
                return Err(ConfigError::UnknownRiskItem {
                    scale: scale(),
                    item_id: risk.item_id,
                });
            }
        }

        if self.scoring.emergency_threshold.is_some() && self.emergency_contacts.is_none() {
            return Err(ConfigError::ThresholdWithoutContacts { scale: scale() });
        }

        Ok(())
    }
}
