//! Read-only repository statistics consumed by the layout.
//!
//! These records are produced by the statistics collector and arrive as JSON.
//! Every field defaults to zero / empty so partial documents deserialize.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::palette::Rgb;

/// Time slice of a line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    LastMonth,
    #[serde(rename = "last_3_months")]
    Last3Months,
    #[serde(rename = "last_6_months")]
    Last6Months,
    LastYear,
    #[default]
    Total,
}

/// Line counts for one category, broken into time windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinesStat {
    pub last_month: u64,
    pub last_3_months: u64,
    pub last_6_months: u64,
    pub last_year: u64,
    pub total: u64,
}

impl LinesStat {
    pub fn get(&self, window: TimeWindow) -> u64 {
        match window {
            TimeWindow::LastMonth => self.last_month,
            TimeWindow::Last3Months => self.last_3_months,
            TimeWindow::Last6Months => self.last_6_months,
            TimeWindow::LastYear => self.last_year,
            TimeWindow::Total => self.total,
        }
    }

    /// Adds every window of `other` into `self`.
    pub fn append(&mut self, other: &LinesStat) {
        self.last_month += other.last_month;
        self.last_3_months += other.last_3_months;
        self.last_6_months += other.last_6_months;
        self.last_year += other.last_year;
        self.total += other.total;
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStat {
    pub email: String,
    pub username: String,
    pub code_lines: LinesStat,
    pub doc_lines: LinesStat,
    pub test_lines: LinesStat,
    pub resources: LinesStat,
    pub lines_per_ext: BTreeMap<String, LinesStat>,
    pub commit_id: String,
    pub commit_days: u32,
    /// Color picked for this contributor by an earlier render, if any.
    pub color: Option<Rgb>,
}

impl UserStat {
    /// Name used in logs: the username when known, the email otherwise.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoStat {
    pub code_lines: LinesStat,
    pub doc_lines: LinesStat,
    pub test_lines: LinesStat,
    pub resources: LinesStat,
    /// Contributors keyed by identity (usually the commit email).
    pub users: BTreeMap<String, UserStat>,
}

impl RepoStat {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Contributors ranked by code lines in `window`, largest first.
    ///
    /// Ties fall back to the map key so the order is stable between calls.
    pub fn ranked_users(&self, window: TimeWindow) -> Vec<&UserStat> {
        let mut users: Vec<(&String, &UserStat)> = self.users.iter().collect();
        users.sort_by(|(ka, a), (kb, b)| {
            b.code_lines
                .get(window)
                .cmp(&a.code_lines.get(window))
                .then_with(|| ka.cmp(kb))
        });
        users.into_iter().map(|(_, u)| u).collect()
    }

    /// Integer percentage of the repository code total owned by each of the
    /// top `limit` contributors. A repository without code lines reports 0%.
    pub fn contributor_shares(&self, window: TimeWindow, limit: usize) -> Vec<(&UserStat, u64)> {
        let total = self.code_lines.get(window);
        self.ranked_users(window)
            .into_iter()
            .take(limit)
            .map(|u| {
                let share = if total == 0 {
                    0
                } else {
                    100 * u.code_lines.get(window) / total
                };
                (u, share)
            })
            .collect()
    }
}

/// Repository identity, used for the image title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub host: Option<String>,
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Parses `owner/name`, `host/owner/name` or a clone URL of either form.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let trimmed = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .unwrap_or(trimmed);
        let trimmed = trimmed.trim_end_matches('/');
        let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return None;
        }
        match parts.as_slice() {
            [owner, name] => Some(Self {
                host: None,
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            [host, owner, name] => Some(Self {
                host: Some(host.to_string()),
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
