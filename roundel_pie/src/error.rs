// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! The engine is deliberately lenient: malformed radius specs clamp, an
//! exhausted palette wraps, out-of-range data contributes zero. The errors
//! that remain are the ones a caller can actually act on.

use thiserror::Error;

/// Errors surfaced by the live-update entry point.
#[derive(Debug, Error)]
pub enum Error {
    /// The dotted property path is not one of the recognized live-update
    /// paths.
    #[error("unrecognized property path `{0}`")]
    UnrecognizedProperty(String),
    /// The path is recognized but the supplied value has the wrong shape.
    #[error("property `{path}` expects a {expected} value")]
    PropertyType {
        /// The dotted property path.
        path: String,
        /// Human-readable description of the expected value shape.
        expected: &'static str,
    },
}
