// ABOUTME: Domain model re-exports for profiles, targets, meals and totals
// ABOUTME: Lets downstream code import everything from nutrily::models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrily_core::models::*;
