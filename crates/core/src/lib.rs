// Copyright 2025 LLM Contrast Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core types for LLM Contrast.
//!
//! This crate holds what every other crate in the workspace shares:
//!
//! - [`types`] - metric records, task categories and task inputs
//! - [`error`] - the workspace error type
//! - [`config`] - layered runtime configuration

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::{ContrastConfig, PacingMode};
pub use error::{Error, Result};
pub use types::{
    parse_item_count, ContentItem, Direction, MetricKind, MetricRecord, TaskCategory, TaskInput,
};
