//! Per-request context the translator reads its defaults from

use serde::{Deserialize, Serialize};

use crate::core::config::TranslatConfig;

/// Language and route of the request being handled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Current target language
    pub language: String,
    /// Identifier of the route handling the request, e.g. `site/index`
    pub route_id: String,
}

impl RequestContext {
    /// Create a context
    pub fn new(language: impl Into<String>, route_id: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            route_id: route_id.into(),
        }
    }

    /// Context built from the configured language and default route
    pub fn from_config(config: &TranslatConfig) -> Self {
        Self::new(config.language.clone(), config.default_route.clone())
    }

    /// Override the language when one is given
    pub fn with_language(mut self, language: Option<String>) -> Self {
        if let Some(language) = language {
            self.language = language;
        }
        self
    }

    /// Override the route when one is given
    pub fn with_route(mut self, route_id: Option<String>) -> Self {
        if let Some(route_id) = route_id {
            self.route_id = route_id;
        }
        self
    }
}
