// ABOUTME: Configuration management module for application settings
// ABOUTME: Loads environment, logging, validation, and engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Vitalis
//!
//! - **Environment**: Application configuration from environment variables
//! - **Engine**: Scoring engine weights and coefficients, re-exported from
//!   `vitalis-intelligence`

/// Environment and application configuration
pub mod environment;

pub use environment::{AppConfig, Environment};
pub use vitalis_intelligence::config::{ConfigError, EngineConfig};
