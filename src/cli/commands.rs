//! CLI command definitions and handlers

use clap::Subcommand;
use serde_json::Value;
use tracing::info;

use crate::core::config::TranslatConfig;
use crate::core::context::RequestContext;
use crate::core::engine::PassthroughEngine;
use crate::core::models::{TranslationInput, TranslationRequest};
use crate::core::translator::Translator;

/// Commands for translat
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a single message
    Translate {
        /// Message to translate
        message: String,

        /// Category (defaults to the configured category or the route)
        #[arg(short, long)]
        category: Option<String>,

        /// Target language (defaults to the configured language)
        #[arg(short, long)]
        language: Option<String>,

        /// Placeholder value as key=value, may be repeated
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// Current route identifier
        #[arg(long)]
        route: Option<String>,
    },

    /// Translate an arbitrary JSON value (string or request object)
    Json {
        /// JSON input, e.g. '{"message": "Hello", "category": "app"}'
        input: String,

        /// Current language
        #[arg(short, long)]
        language: Option<String>,

        /// Current route identifier
        #[arg(long)]
        route: Option<String>,
    },

    /// Start HTTP API server
    Server {
        /// Bind address (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },

    /// Print the effective configuration
    ShowConfig,
}

/// Parse a `key=value` placeholder argument
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

/// Build the translation input for the `translate` command.
///
/// With no overrides the message is sent as a plain string.
pub fn build_input(
    message: String,
    category: Option<String>,
    language: Option<String>,
    params: Vec<(String, String)>,
) -> TranslationInput {
    if category.is_none() && language.is_none() && params.is_empty() {
        return TranslationInput::Plain(message);
    }

    let mut request = TranslationRequest::new(message);
    request.category = category;
    request.language = language;
    for (key, value) in params {
        request = request.with_param(key, value);
    }
    TranslationInput::Structured(request)
}

fn print_translation(translation: Option<String>) {
    match translation {
        Some(text) => println!("{}", text),
        None => eprintln!("(untranslatable)"),
    }
}

/// Handle translate command
pub fn handle_translate(
    config: &TranslatConfig,
    input: TranslationInput,
    route: Option<String>,
) -> anyhow::Result<()> {
    let translator = Translator::from_config(PassthroughEngine, config);
    let ctx = RequestContext::from_config(config).with_route(route);

    info!("Translating for route {} in {}", ctx.route_id, ctx.language);
    print_translation(translator.translate(input, &ctx));

    Ok(())
}

/// Handle json command
pub fn handle_json(
    config: &TranslatConfig,
    input: &str,
    language: Option<String>,
    route: Option<String>,
) -> anyhow::Result<()> {
    let value: Value = serde_json::from_str(input)?;
    let translator = Translator::from_config(PassthroughEngine, config);
    let ctx = RequestContext::from_config(config)
        .with_language(language)
        .with_route(route);

    print_translation(translator.translate_value(value, &ctx));

    Ok(())
}

/// Handle server command
pub async fn handle_server(config: TranslatConfig, host: String, port: u16) -> anyhow::Result<()> {
    use crate::server::api::run_server;

    info!("Starting HTTP server on {}:{}", host, port);
    println!("🚀 Server starting on http://{}:{}", host, port);

    run_server(host, port, config).await?;

    Ok(())
}

/// Handle show-config command
pub fn handle_show_config(config: &TranslatConfig) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_param() {
        assert_eq!(parse_param("name=Ada"), Ok(("name".to_string(), "Ada".to_string())));
        assert_eq!(parse_param("eq=a=b"), Ok(("eq".to_string(), "a=b".to_string())));
        assert!(parse_param("name").is_err());
        assert!(parse_param("=Ada").is_err());
    }

    #[test]
    fn test_build_input_plain_without_overrides() {
        let input = build_input("Hello".to_string(), None, None, vec![]);
        assert_eq!(input, TranslationInput::Plain("Hello".to_string()));
    }

    #[test]
    fn test_build_input_structured() {
        let input = build_input(
            "Hi {name}".to_string(),
            Some("app".to_string()),
            None,
            vec![("name".to_string(), "Ada".to_string())],
        );

        match input {
            TranslationInput::Structured(request) => {
                assert_eq!(request.category.as_deref(), Some("app"));
                assert_eq!(request.language, None);
                assert_eq!(request.params.get("name"), Some(&json!("Ada")));
            }
            other => panic!("expected structured input, got {:?}", other),
        }
    }

    #[test]
    fn test_handle_json_rejects_invalid_json() {
        let config = TranslatConfig::default();
        assert!(handle_json(&config, "{not json", None, None).is_err());
        assert!(handle_json(&config, "42", None, None).is_ok());
    }
}
