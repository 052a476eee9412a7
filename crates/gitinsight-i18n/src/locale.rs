// Copyright (c) 2026 - present gitinsight contributors
// SPDX-License-Identifier: MIT

//! Supported locales and their dictionaries
//!
//! Dictionaries are flat `key -> text` tables. Grouped keys use a dot, as in
//! `nav.home` or `dashboard.weekRanking`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LocaleError;

/// A supported UI language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the default locale
    #[default]
    En,
    /// Simplified Chinese
    Zh,
}

impl Locale {
    /// All supported locales, default first
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// The locale served without a path prefix
    pub const DEFAULT: Locale = Locale::En;

    /// Short code used in paths, e.g. `zh`
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Full language tag, e.g. `zh-CN`
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Zh => "zh-CN",
        }
    }

    /// Display name of the language in that language
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Zh => "中文",
        }
    }

    /// The locale's dictionary
    #[must_use]
    pub fn dictionary(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => EN_US,
            Locale::Zh => ZH_CN,
        }
    }

    /// Look up a key in this locale only
    #[must_use]
    pub fn get(self, key: &str) -> Option<&'static str> {
        self.dictionary()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Accepts the short code or the full tag, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Locale::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(wanted) || l.tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LocaleError::Unsupported {
                code: s.to_string(),
            })
    }
}

/// Translate `key`, falling back to the default locale and then to the key
#[must_use]
pub fn translate(locale: Locale, key: &str) -> &str {
    locale
        .get(key)
        .or_else(|| Locale::DEFAULT.get(key))
        .unwrap_or(key)
}

const EN_US: &[(&str, &str)] = &[
    ("nav.", "Home"),
    ("nav.home", "Home"),
    ("nav.analyzer", "Analyzer"),
    ("nav.contributors", "Contributors"),
    ("contributors", "Contributors"),
    ("nickname", "Nickname"),
    ("name", "Name"),
    ("email", "Email"),
    ("additions", "Additions"),
    ("deletions", "Deletions"),
    ("effectives", "Effectives"),
    ("commits", "Commits"),
    ("projects", "Projects"),
    ("since", "Since"),
    ("until", "Until"),
    ("now", "Now"),
    ("ranking", "Ranking"),
    ("timeRange", "Time Range"),
    ("repos", "Repos"),
    ("branches", "Branches"),
    ("authors", "Authors"),
    ("commitLogs", "Commit Logs"),
    ("conditionFilter", "Condition Filter"),
    ("analysisView", "Statistics Result"),
    ("commitPeriod", "Commit Statistics"),
    ("commitHeatmap", "Commit Heatmap"),
    ("fixHeatmap", "Fix Heatmap"),
    ("featHeatmap", "Feat Heatmap"),
    ("mergeHeatmap", "Merge Heatmap"),
    ("all", "All"),
    ("default", "Default"),
    ("today", "Today"),
    ("yesterday", "Yesterday"),
    ("weekThis", "This Week"),
    ("weekLast", "Last Week"),
    ("weekBeforeLast", "Before Last Week"),
    ("monthThis", "This Month"),
    ("monthLast", "Last Month"),
    ("monthBeforeLast", "Before Last Month"),
    ("autoRefresh", "Auto Refresh"),
    ("dashboard.todayProjects", "Today Projects"),
    ("dashboard.todayRanking", "Today Ranking"),
    ("dashboard.yesterdayProjects", "Yesterday Projects"),
    ("dashboard.yesterdayRanking", "Yesterday Ranking"),
    ("dashboard.weekProjects", "Week Projects"),
    ("dashboard.weekRanking", "Week Ranking"),
    ("dashboard.lastWeekProjects", "Last Week Projects"),
    ("dashboard.lastWeekRanking", "Last Week Ranking"),
    ("dashboard.monthProjects", "Month Projects"),
    ("dashboard.monthRanking", "Month Ranking"),
    ("dashboard.lastMonthProjects", "Last Month Projects"),
    ("dashboard.lastMonthRanking", "Last Month Ranking"),
];

// Not every key is translated; missing ones fall back to English.
const ZH_CN: &[(&str, &str)] = &[
    ("nav.", "首页"),
    ("nav.home", "首页"),
    ("nav.analyzer", "分析器"),
    ("nav.contributors", "贡献者"),
    ("contributors", "贡献者"),
    ("nickname", "昵称"),
    ("name", "姓名"),
    ("email", "邮箱"),
    ("additions", "添加"),
    ("deletions", "删除"),
    ("effectives", "有效"),
    ("commits", "提交"),
    ("projects", "项目"),
    ("since", "自"),
    ("until", "至"),
    ("now", "现在"),
    ("ranking", "排行"),
    ("timeRange", "时间范围"),
    ("repos", "项目"),
    ("branches", "分支"),
    ("authors", "作者"),
    ("commitLogs", "提交日志"),
    ("conditionFilter", "条件过滤"),
    ("analysisView", "统计结果"),
    ("fixHeatmap", "修复热度"),
    ("featHeatmap", "功能热度"),
    ("mergeHeatmap", "合并热度"),
    ("commitHeatmap", "提交热度"),
    ("all", "全部"),
    ("today", "今日"),
    ("yesterday", "昨日"),
    ("weekThis", "本周"),
    ("weekLast", "上周"),
    ("weekBeforeLast", "上上周"),
    ("monthThis", "本月"),
    ("monthLast", "上月"),
    ("monthBeforeLast", "上上月"),
    ("dashboard.todayProjects", "今日贡献项目"),
    ("dashboard.todayRanking", "今日贡献排行"),
    ("dashboard.yesterdayProjects", "昨日贡献项目"),
    ("dashboard.yesterdayRanking", "昨日贡献排行"),
    ("dashboard.weekProjects", "本周贡献项目"),
    ("dashboard.weekRanking", "本周贡献排行"),
    ("dashboard.lastWeekProjects", "上周贡献项目"),
    ("dashboard.lastWeekRanking", "上周贡献排行"),
    ("dashboard.monthProjects", "本月贡献项目"),
    ("dashboard.monthRanking", "本月贡献排行"),
    ("dashboard.lastMonthProjects", "上月贡献项目"),
    ("dashboard.lastMonthRanking", "上月贡献排行"),
];
