//! Translator facade
//!
//! Normalizes a plain message or a structured request into the four values
//! the engine expects, filling the category from the configured default (or
//! the current route) and the language from the request context.
//!
//! Malformed input never fails loudly: it is traced under the `translat`
//! target and answered with the untranslatable sentinel, which is the
//! [`NOT_TRANSLATABLE`] marker in debug mode and `None` otherwise.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

use crate::core::config::TranslatConfig;
use crate::core::context::RequestContext;
use crate::core::engine::TranslationEngine;
use crate::core::models::{value_kind, Params, ResolvedRequest, TranslationInput};

/// Marker returned in debug mode for input that cannot be translated
pub const NOT_TRANSLATABLE: &str = "NOT_TRANSLATABLE";

/// Target of every diagnostic trace emitted by the translator
pub const TRACE_TARGET: &str = "translat";

/// Facade over a [`TranslationEngine`]
#[derive(Clone)]
pub struct Translator {
    engine: Arc<dyn TranslationEngine>,
    default_category: Option<String>,
    debug: bool,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("default_category", &self.default_category)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl Translator {
    /// Create a translator with no default category.
    ///
    /// Debug mode follows `debug_assertions`.
    pub fn new<E: TranslationEngine + 'static>(engine: E) -> Self {
        Self::from_shared(Arc::new(engine))
    }

    /// Create a translator around an engine that is already shared
    pub fn from_shared(engine: Arc<dyn TranslationEngine>) -> Self {
        Self {
            engine,
            default_category: None,
            debug: cfg!(debug_assertions),
        }
    }

    /// Create a translator with the configured default category and debug mode
    pub fn from_config<E: TranslationEngine + 'static>(engine: E, config: &TranslatConfig) -> Self {
        Self::new(engine)
            .with_default_category(config.default_category.as_deref())
            .with_debug(config.debug)
    }

    /// Set the default category
    pub fn with_default_category(mut self, category: Option<&str>) -> Self {
        self.set_default_category(category);
        self
    }

    /// Set debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Whether untranslatable input yields the visible marker
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Set the category used when a call omits one; `None` falls back to the route
    pub fn set_default_category(&mut self, category: Option<&str>) {
        self.default_category = category.map(str::to_string);
    }

    /// Set the default category from an untyped value.
    ///
    /// Strings set it and `null` clears it. Any other value is traced as a
    /// usage error and stored in its JSON rendering anyway.
    pub fn set_default_category_value(&mut self, value: &Value) {
        self.default_category = match value {
            Value::Null => None,
            Value::String(category) => Some(category.clone()),
            other => {
                trace!(
                    target: TRACE_TARGET,
                    "Unable to set i18n category outside of string or null, received: {}",
                    value_kind(other)
                );
                Some(other.to_string())
            }
        };
    }

    /// The explicitly configured default category, if any
    pub fn configured_default_category(&self) -> Option<&str> {
        self.default_category.as_deref()
    }

    /// Category applied when a call omits one
    pub fn default_category<'a>(&'a self, ctx: &'a RequestContext) -> &'a str {
        self.default_category.as_deref().unwrap_or(&ctx.route_id)
    }

    /// Fill in every default for `input`
    pub fn resolve(&self, input: TranslationInput, ctx: &RequestContext) -> ResolvedRequest {
        match input {
            TranslationInput::Plain(message) => ResolvedRequest {
                category: self.default_category(ctx).to_string(),
                message,
                params: Params::new(),
                language: ctx.language.clone(),
            },
            TranslationInput::Structured(request) => ResolvedRequest {
                category: request
                    .category
                    .unwrap_or_else(|| self.default_category(ctx).to_string()),
                message: request.message,
                params: request.params,
                language: request.language.unwrap_or_else(|| ctx.language.clone()),
            },
        }
    }

    /// Translate a message or structured request through the engine
    pub fn translate(
        &self,
        input: impl Into<TranslationInput>,
        ctx: &RequestContext,
    ) -> Option<String> {
        let resolved = self.resolve(input.into(), ctx);
        Some(self.engine.translate(
            &resolved.category,
            &resolved.message,
            &resolved.params,
            &resolved.language,
        ))
    }

    /// Same as [`Translator::translate`].
    ///
    /// Kept as a separate name for call sites that read better with it; it
    /// answers malformed input with the sentinel instead of failing.
    pub fn translate_or_fail(
        &self,
        input: impl Into<TranslationInput>,
        ctx: &RequestContext,
    ) -> Option<String> {
        self.translate(input, ctx)
    }

    /// Translate an untyped value, degrading to the sentinel when it is malformed
    pub fn translate_value(&self, value: Value, ctx: &RequestContext) -> Option<String> {
        match TranslationInput::from_value(value) {
            Ok(input) => self.translate(input, ctx),
            Err(err) => {
                trace!(target: TRACE_TARGET, "{}", err);
                self.untranslatable()
            }
        }
    }

    /// Translate a batch of inputs in order
    pub fn translate_all<I>(&self, inputs: I, ctx: &RequestContext) -> Vec<Option<String>>
    where
        I: IntoIterator,
        I::Item: Into<TranslationInput>,
    {
        inputs
            .into_iter()
            .map(|input| self.translate(input, ctx))
            .collect()
    }

    /// Sentinel for input that cannot be translated
    pub fn untranslatable(&self) -> Option<String> {
        self.debug.then(|| NOT_TRANSLATABLE.to_string())
    }
}
