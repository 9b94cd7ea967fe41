// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for request parameters and responses.
//!
//! This module provides:
//! - Coin identifiers and batch coin/timestamp sets
//! - Unix timestamps with call-time "now" defaults
//! - Enumerated query parameters (data type, fee kind, options volume)
//! - Typed response models with opaque passthrough of unknown fields

pub mod coins;
pub mod params;
pub mod responses;
pub mod timestamp;

// Note: Public types are re-exported from lib.rs, not here
