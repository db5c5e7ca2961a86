//! Core translation facade module

pub mod config;
pub mod context;
pub mod engine;
pub mod errors;
pub mod models;
pub mod translator;

#[cfg(test)]
pub(crate) mod test_support;
