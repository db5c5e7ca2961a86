//! CLI command definitions and handlers

pub mod commands;
