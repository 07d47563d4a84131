// ABOUTME: Vitalis CLI - command-line front end for the health self-assessment engine
// ABOUTME: Lists questions, validates answer files, runs assessments, and looks up goal advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show the questionnaire
//! vitalis-cli questions
//!
//! # Show only the questions visible for a partial answer file
//! vitalis-cli questions --answers answers.json
//!
//! # Check an answer file against the questionnaire
//! vitalis-cli validate answers.json
//!
//! # Full assessment as JSON, with narrative feedback
//! vitalis-cli assess answers.json --format json --narrate
//!
//! # Advice for goals
//! vitalis-cli advice weight-loss better-sleep
//! ```

mod commands;
mod display;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use vitalis::config::AppConfig;
use vitalis_core::constants::service_names;

#[derive(Parser)]
#[command(
    name = "vitalis-cli",
    about = "Vitalis health self-assessment CLI",
    long_about = "Command-line front end for the Vitalis health metrics and scoring engine."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the questionnaire
    Questions {
        /// Only show questions visible for this answer file
        #[arg(long)]
        answers: Option<PathBuf>,
    },

    /// Validate an answer file against the questionnaire
    Validate {
        /// Answer file (JSON object keyed by question id)
        answers: PathBuf,
    },

    /// Run a full assessment
    Assess {
        /// Answer file (JSON object keyed by question id)
        answers: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,

        /// Append narrative feedback for every section
        #[arg(long)]
        narrate: bool,
    },

    /// Look up advice for goal ids
    Advice {
        /// Goal ids (e.g. weight-loss, better-sleep)
        #[arg(required = true)]
        goals: Vec<String>,
    },
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Machine readable JSON
    Json,
    /// Human readable text
    Pretty,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    let log_level = if cli.verbose { "debug" } else { "warn" };
    config.logging = config
        .logging
        .with_level(log_level)
        .with_service_name(service_names::VITALIS_CLI);
    config.logging.init()?;
    debug!("{}", config.summary());

    match cli.command {
        Command::Questions { answers } => commands::questions(answers.as_deref()).await,
        Command::Validate { answers } => commands::validate(&answers).await,
        Command::Assess {
            answers,
            format,
            narrate,
        } => commands::assess(config, &answers, format, narrate).await,
        Command::Advice { goals } => {
            commands::advice(&goals);
            Ok(())
        }
    }
}
