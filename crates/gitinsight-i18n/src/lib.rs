// Copyright (c) 2026 - present gitinsight contributors
// SPDX-License-Identifier: MIT

//! gitinsight-i18n: UI text and navigation for gitinsight
//!
//! This library crate holds the English and Chinese dictionaries used to
//! label gitinsight views, and the navigation registry with locale-aware
//! routes.
//!
//! # Example
//!
//! ```
//! use gitinsight_i18n::{Locale, links, translate};
//!
//! let locale: Locale = "zh".parse().unwrap();
//! assert_eq!(translate(locale, "commitLogs"), "提交日志");
//!
//! for link in links() {
//!     println!("{} -> {}", link.label(locale), link.path(locale));
//! }
//! ```

pub mod error;
pub mod locale;
pub mod navigation;

pub use error::LocaleError;
pub use locale::{Locale, translate};
pub use navigation::{NavLink, links, localized_path};
