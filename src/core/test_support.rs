//! Shared helpers for unit tests

use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

use crate::core::engine::TranslationEngine;
use crate::core::models::{Params, ResolvedRequest};

/// Engine that remembers every call and answers `[language] category: message`
#[derive(Debug, Clone, Default)]
pub struct RecordingEngine {
    calls: Arc<Mutex<Vec<ResolvedRequest>>>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ResolvedRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl TranslationEngine for RecordingEngine {
    fn translate(&self, category: &str, message: &str, params: &Params, language: &str) -> String {
        self.calls.lock().unwrap().push(ResolvedRequest {
            category: category.to_string(),
            message: message.to_string(),
            params: params.clone(),
            language: language.to_string(),
        });
        format!("[{}] {}: {}", language, category, message)
    }
}

/// In-memory sink for formatted log lines
#[derive(Debug, Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a TRACE-level subscriber and return what it logged
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}
