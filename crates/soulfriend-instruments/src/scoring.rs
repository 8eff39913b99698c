//! Generic scoring engine.
//!
//! One pure function maps an answer set and a validated configuration to an
//! assessment result. All per-instrument variation (subscale layout,
//! reverse scoring, multipliers, severity thresholds, risk probes) lives in
//! the data files, not in code branches.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::config::{EmergencyContacts, QuestionnaireConfig, SeverityBand, SubscaleConfig};

/// Item id → selected response value. Supplied fresh per scoring call.
pub type AnswerSet = BTreeMap<u32, u8>;

/// Score of one named subscale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleScore {
    /// Sum of (possibly reverse-transformed) item answers.
    pub raw: u32,
    /// `raw` × the subscale multiplier.
    pub adjusted: u32,
    /// Key of the matched severity band.
    pub severity: String,
    pub color: String,
    /// The full matched band, for downstream display.
    pub level_info: SeverityBand,
}

/// Tiered recommendation bundle for the dominant severity, augmented with
/// emergency contact information when a risk condition is met.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationBundle {
    pub title: String,
    pub message: String,
    pub suggestions: Vec<String>,
    pub emergency_contacts: Option<EmergencyContacts>,
    pub urgent_note: Option<String>,
}

/// Complete outcome of scoring one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub scale: String,
    /// Sum of all subscales' adjusted scores.
    pub total_score: u32,
    /// Band key of the highest severity reached by any subscale.
    pub severity_level: String,
    pub interpretation: String,
    pub recommendations: RecommendationBundle,
    pub subscales: BTreeMap<String, SubscaleScore>,
    /// Risk description from the suicide risk probe, when it was answered
    /// non-zero and a description is configured for that value.
    pub risk_assessment: Option<String>,
}

/// An answer that does not fit the instrument it was submitted for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct AnswerValidationError {
    pub item_id: u32,
    pub value: u8,
    pub message: String,
}

/// Report answers that reference unknown items or carry out-of-range
/// values. The scoring engine itself stays permissive; callers that want
/// strict input (the HTTP API does) reject submissions with a non-empty
/// report before scoring.
pub fn validate_answers(
    config: &QuestionnaireConfig,
    answers: &AnswerSet,
) -> Vec<AnswerValidationError> {
    let max = config.max_option_value();

    let mut errors = Vec::new();
    for (&item_id, &value) in answers {
        if !config.items.iter().any(|item| item.id == item_id) {
            errors.push(AnswerValidationError {
                item_id,
                value,
                message: format!("{}: unknown item id {item_id}", config.scale),
            });
        } else if value > max {
            errors.push(AnswerValidationError {
                item_id,
                value,
                message: format!(
                    "{}: item {item_id} answer {value} is outside range [0, {max}]",
                    config.scale,
                ),
            });
        }
    }
    errors
}

/// Score an answer set against a loaded questionnaire configuration.
///
/// Pure and deterministic: identical inputs produce identical results.
/// Unanswered items contribute 0 to their subscale rather than failing the
/// whole computation, so partial submissions stay scoreable.
pub fn score(answers: &AnswerSet, config: &QuestionnaireConfig) -> AssessmentResult {
    let reversal_base = config.max_option_value();

    let mut subscales = BTreeMap::new();
    let mut total_score = 0;
    let mut dominant: Option<(usize, SeverityBand)> = None;

    for sub in &config.scoring.subscales {
        let raw: u32 = config
            .items
            .iter()
            .filter(|item| config.item_subscale(item) == Some(sub.name.as_str()))
            .map(|item| {
                // Unanswered items contribute 0, even reverse-scored ones:
                // the reversal transform applies to given answers only.
                let Some(&value) = answers.get(&item.id) else {
                    return 0;
                };
                let value = if item.reverse_scored {
                    reversal_base.saturating_sub(value)
                } else {
                    value
                };
                u32::from(value)
            })
            .sum();
        let adjusted = raw * sub.multiplier;
        total_score += adjusted;

        let Some((rank, band)) = classify(adjusted, sub, &config.scale) else {
            continue;
        };
        if dominant.as_ref().is_none_or(|(top, _)| rank > *top) {
            dominant = Some((rank, band.clone()));
        }

        subscales.insert(
            sub.name.clone(),
            SubscaleScore {
                raw,
                adjusted,
                severity: band.key.clone(),
                color: band.color.clone(),
                level_info: band.clone(),
            },
        );
    }

    let (severity_level, interpretation) = match &dominant {
        Some((_, band)) => (band.key.clone(), band.description.clone()),
        None => (String::new(), String::new()),
    };

    let recommendation = config
        .recommendations
        .get(&severity_level)
        .cloned()
        .unwrap_or_default();

    let (escalate, risk_assessment) = assess_risk(answers, config, total_score);
    let (emergency_contacts, urgent_note) = if escalate {
        match &config.emergency_contacts {
            Some(contacts) => (Some(contacts.clone()), Some(contacts.urgent_note.clone())),
            None => (None, None),
        }
    } else {
        (None, None)
    };

    AssessmentResult {
        scale: config.scale.clone(),
        total_score,
        severity_level,
        interpretation,
        recommendations: RecommendationBundle {
            title: recommendation.title,
            message: recommendation.message,
            suggestions: recommendation.suggestions,
            emergency_contacts,
            urgent_note,
        },
        subscales,
        risk_assessment,
    }
}

/// Inclusive-range, first-match severity lookup.
///
/// Validated configs tile the achievable range, so the fallback branch is
/// unreachable for in-range answers; it guards out-of-range sums from
/// permissive input and is logged rather than silently swallowed.
fn classify<'a>(
    adjusted: u32,
    sub: &'a SubscaleConfig,
    scale: &str,
) -> Option<(usize, &'a SeverityBand)> {
    if let Some(hit) = sub
        .severity_levels
        .iter()
        .enumerate()
        .find(|(_, band)| band.contains(adjusted))
    {
        return Some(hit);
    }

    let last = sub.severity_levels.last()?;
    tracing::warn!(
        scale,
        subscale = %sub.name,
        adjusted,
        "score matched no severity band, falling back to most severe"
    );
    Some((sub.severity_levels.len() - 1, last))
}

/// Evaluate the instrument's risk escalation conditions: a designated
/// self-harm probe answered non-zero, or the total crossing the emergency
/// threshold. Returns the escalation flag and the probe's risk description.
fn assess_risk(
    answers: &AnswerSet,
    config: &QuestionnaireConfig,
    total_score: u32,
) -> (bool, Option<String>) {
    let mut escalate = false;
    let mut risk_assessment = None;

    if let Some(probe) = &config.suicide_risk_assessment {
        if let Some(&value) = answers.get(&probe.item_id) {
            if value > 0 {
                escalate = true;
                risk_assessment = probe.levels.get(&value).cloned();
            }
        }
    }

    if let Some(threshold) = config.scoring.emergency_threshold {
        if total_score >= threshold {
            escalate = true;
        }
    }

    (escalate, risk_assessment)
}
