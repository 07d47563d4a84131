// ABOUTME: Unified error handling re-exported from vitalis-core
// ABOUTME: Keeps crate::errors import paths stable for the application layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Error codes, `AppError`, and validation issues live in `vitalis-core` so
//! every workspace crate shares them.

pub use vitalis_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ValidationIssue, ValidationIssueKind,
    ValidationReport,
};
