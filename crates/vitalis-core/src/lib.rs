// ABOUTME: Core types and constants for the Vitalis health assessment engine
// ABOUTME: Foundation crate with error handling, answer models, and question identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitalis Core
//!
//! Foundation crate providing shared types for the Vitalis health self-assessment
//! engine. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and validation issues
//! - **constants**: Question identifiers and service names
//! - **models**: Questionnaire answer values and the categorical answer vocabulary

/// Unified error handling system with standard error codes
pub mod errors;

/// Question identifiers and service-wide constants
pub mod constants;

/// Answer records and categorical answer enums
pub mod models;
