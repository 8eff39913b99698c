use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown questionnaire: {0}")]
    UnknownScale(String),

    #[error("failed to parse questionnaire definition: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{scale}: questionnaire has no items")]
    NoItems { scale: String },

    #[error("{scale}: response option values must be contiguous integers starting at 0")]
    NonContiguousOptions { scale: String },

    #[error("{scale}: duplicate item id {id}")]
    DuplicateItemId { scale: String, id: u32 },

    #[error("{scale}: item {id} references unknown subscale '{subscale}'")]
    UnknownSubscale {
        scale: String,
        id: u32,
        subscale: String,
    },

    #[error("{scale}: item {id} must name a subscale (instrument has more than one)")]
    MissingItemSubscale { scale: String, id: u32 },

    #[error("{scale}: subscale '{subscale}' has no severity bands")]
    EmptyBands { scale: String, subscale: String },

    #[error("{scale}: subscale '{subscale}' band '{band}' has min {min} greater than max {max}")]
    InvertedBand {
        scale: String,
        subscale: String,
        band: String,
        min: u32,
        max: u32,
    },

    #[error(
        "{scale}: subscale '{subscale}' band '{band}' starts at {found}, expected {expected} \
         (bands must tile the score range without gaps or overlaps)"
    )]
    BandGap {
        scale: String,
        subscale: String,
        band: String,
        found: u32,
        expected: u32,
    },

    #[error(
        "{scale}: subscale '{subscale}' bands end at {found} but the maximum \
         achievable adjusted score is {expected}"
    )]
    BandCeiling {
        scale: String,
        subscale: String,
        found: u32,
        expected: u32,
    },

    #[error("{scale}: no recommendation defined for severity '{key}'")]
    MissingRecommendation { scale: String, key: String },

    #[error("{scale}: suicide risk assessment references unknown item {item_id}")]
    UnknownRiskItem { scale: String, item_id: u32 },

    #[error("{scale}: emergency_threshold is set but no emergency_contacts are defined")]
    ThresholdWithoutContacts { scale: String },
}
