// Copyright (c) 2026 - present gitinsight contributors
// SPDX-License-Identifier: MIT

//! Navigation registry
//!
//! Routes follow a prefix-except-default strategy: the default locale is
//! served from the bare route and every other locale under `/<code>`.

use serde::Serialize;

use crate::locale::{Locale, translate};

/// A top-level navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Translation key of the label
    pub label_key: &'static str,
    /// Line Awesome icon classes
    pub icon: &'static str,
    /// Unprefixed route
    pub route: &'static str,
    /// Whether this is the site root
    pub root: bool,
}

impl NavLink {
    /// The label in `locale`
    #[must_use]
    pub fn label(&self, locale: Locale) -> &'static str {
        translate(locale, self.label_key)
    }

    /// The route as served for `locale`
    #[must_use]
    pub fn path(&self, locale: Locale) -> String {
        localized_path(self.route, locale)
    }
}

const LINKS: &[NavLink] = &[
    NavLink {
        label_key: "nav.home",
        icon: "la la-compass",
        route: "/",
        root: true,
    },
    NavLink {
        label_key: "nav.analyzer",
        icon: "la la-heartbeat",
        route: "/analyzer",
        root: false,
    },
    NavLink {
        label_key: "nav.contributors",
        icon: "la la-users",
        route: "/contributors",
        root: false,
    },
];

/// All navigation entries in display order
#[must_use]
pub fn links() -> &'static [NavLink] {
    LINKS
}

/// Find the entry for an unprefixed route
#[must_use]
pub fn find(route: &str) -> Option<&'static NavLink> {
    LINKS.iter().find(|link| link.route == route)
}

/// Prefix `route` with the locale code unless `locale` is the default
#[must_use]
pub fn localized_path(route: &str, locale: Locale) -> String {
    if locale == Locale::DEFAULT {
        return route.to_string();
    }
    let route = route.trim_start_matches('/');
    if route.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}/{route}", locale.code())
    }
}
