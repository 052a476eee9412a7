// Copyright (c) 2026 - present gitinsight contributors
// SPDX-License-Identifier: MIT

//! Error types for gitinsight-i18n

use thiserror::Error;

/// Errors that can occur when selecting a locale
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The locale code is not one of the supported languages
    #[error("Unsupported locale: {code} (supported: en, zh)")]
    Unsupported {
        /// The code that was requested
        code: String,
    },
}
