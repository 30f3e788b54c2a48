use serde::{Deserialize, Serialize};

use crate::stats::{LinesStat, RepoStat, TimeWindow, UserStat};

/// Statistic category with its own district on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Code,
    Docs,
    Tests,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Code, Zone::Docs, Zone::Tests];

    pub fn index(self) -> usize {
        match self {
            Zone::Code => 0,
            Zone::Docs => 1,
            Zone::Tests => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Zone::Code => "code",
            Zone::Docs => "docs",
            Zone::Tests => "tests",
        }
    }

    fn pick(self, code: &LinesStat, docs: &LinesStat, tests: &LinesStat) -> LinesStat {
        match self {
            Zone::Code => *code,
            Zone::Docs => *docs,
            Zone::Tests => *tests,
        }
    }

    /// Lines this contributor wrote in the zone's category.
    pub fn user_lines(self, user: &UserStat, window: TimeWindow) -> u64 {
        self.pick(&user.code_lines, &user.doc_lines, &user.test_lines)
            .get(window)
    }

    /// Repository-wide lines in the zone's category.
    pub fn repo_lines(self, repo: &RepoStat, window: TimeWindow) -> u64 {
        self.pick(&repo.code_lines, &repo.doc_lines, &repo.test_lines)
            .get(window)
    }
}
