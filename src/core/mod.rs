// src/core/mod.rs

// The `core` module holds the simulated assessment engine. Nothing in here
// knows about the terminal UI.

/// Data structures shared across the engine: findings, results, progress and errors.
pub mod models;

/// The static catalog of findings and the per-system port profiles.
pub mod knowledge_base;

/// The phase-driven scan simulator and its random sampling helpers.
pub mod scanner;

/// Severity-weighted score, risk level and check counters.
pub mod scoring;

/// Plain-text report synthesis.
pub mod report;

/// History rows and the stores that keep them.
pub mod store;
