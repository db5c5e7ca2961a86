//! Translation engine seam
//!
//! The translator never looks messages up itself. Catalog storage, locale
//! fallback, pluralization and placeholder interpolation all belong to the
//! engine it delegates to.

use crate::core::models::Params;

/// External engine that resolves a message within a category for a language
pub trait TranslationEngine: Send + Sync {
    /// Translate `message` from `category` into `language`, substituting `params`
    fn translate(&self, category: &str, message: &str, params: &Params, language: &str) -> String;
}

impl<F> TranslationEngine for F
where
    F: Fn(&str, &str, &Params, &str) -> String + Send + Sync,
{
    fn translate(&self, category: &str, message: &str, params: &Params, language: &str) -> String {
        self(category, message, params, language)
    }
}

/// Engine without catalogs: every message translates to itself
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughEngine;

impl TranslationEngine for PassthroughEngine {
    fn translate(
        &self,
        _category: &str,
        message: &str,
        _params: &Params,
        _language: &str,
    ) -> String {
        message.to_string()
    }
}
