// ABOUTME: Command implementations for nutrily-cli
// ABOUTME: Target derivation and validation, plus log-file reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod report;
pub mod target;

use nutrily::errors::{AppError, AppResult};
use nutrily::formatters::{to_json, OutputFormat};
use serde::Serialize;

/// Print `data` as JSON, or as text through `render`
pub fn emit<T: Serialize>(
    data: &T,
    format: OutputFormat,
    render: impl FnOnce(&T) -> String,
) -> AppResult<()> {
    match format {
        OutputFormat::Json => {
            let json = to_json(data).map_err(|e| AppError::internal(e.to_string()).with_source(e))?;
            println!("{json}");
        }
        OutputFormat::Text => print!("{}", render(data)),
    }
    Ok(())
}
