use std::collections::HashMap;
use std::sync::Arc;

use soulfriend_instruments::config::QuestionnaireConfig;
use soulfriend_instruments::error::ConfigError;

/// Shared, immutable application state. All questionnaire definitions are
/// loaded and validated once at startup; scoring calls only read them.
#[derive(Clone)]
pub struct AppState {
    configs: Arc<HashMap<String, QuestionnaireConfig>>,
}

impl AppState {
    pub fn load() -> Result<Self, ConfigError> {
        let mut configs = HashMap::new();
        for scale in soulfriend_instruments::available_scales() {
            configs.insert((*scale).to_string(), soulfriend_instruments::load(scale)?);
        }
        Ok(Self {
            configs: Arc::new(configs),
        })
    }

    pub fn config(&self, scale: &str) -> Option<&QuestionnaireConfig> {
        self.configs.get(scale)
    }

    pub fn configs(&self) -> impl Iterator<Item = &QuestionnaireConfig> {
        self.configs.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_loads_every_registered_instrument() {
        let state = AppState::load().unwrap();
        assert_eq!(
            state.configs().count(),
            soulfriend_instruments::available_scales().len()
        );
        assert!(state.config("DASS-21").is_some());
        assert!(state.config("MMPI-2").is_none());
    }
}
