// ABOUTME: Configuration module for vitalis-intelligence crate
// ABOUTME: Re-exports engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine configuration (body composition, nutrition, overall scoring)
pub mod intelligence;

pub use intelligence::{ConfigError, EngineConfig};
