//! Translat - translator facade over an i18n engine
//!
//! This library normalizes translation calls, given either as a plain message
//! or as a structured request, into a single call of a pluggable translation
//! engine, and exposes the facade over HTTP for untyped callers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    config::TranslatConfig,
    context::RequestContext,
    engine::{PassthroughEngine, TranslationEngine},
    errors::{InputError, TranslatError},
    models::{Params, ResolvedRequest, TranslationInput, TranslationRequest},
    translator::{Translator, NOT_TRANSLATABLE, TRACE_TARGET},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
