//! Shared test utilities for sortviz
//!
//! This module provides common helpers for integration tests:
//! - Seeded visualizer and app fixtures
//! - TUI terminal testing helpers

pub mod fixtures;
pub mod terminal;
