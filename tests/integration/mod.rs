//! Integration tests for sortviz
//!
//! These tests verify that multiple components work together correctly.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod playback_flow;
pub mod rendering;
