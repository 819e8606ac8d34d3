// ABOUTME: Error types shared by the service layer, storage and the command-line tool
// ABOUTME: Re-exports the core AppError/ErrorCode so callers depend on a single path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling
//!
//! All fallible library operations return [`AppResult`]. The binary wraps
//! these in `anyhow` for reporting.

pub use nutrily_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails};
