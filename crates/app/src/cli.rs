use std::path::PathBuf;

use clap::Parser;

use layout::stats::RepoRef;

use crate::job::RenderJob;

#[derive(Parser, Debug)]
#[command(name = "repocity")]
#[command(version, about = "Draws a repository's contributors as an isometric SVG city")]
pub struct Cli {
    /// Repository statistics JSON
    pub stats: PathBuf,

    /// Output SVG file (stdout when omitted)
    pub out: Option<PathBuf>,

    /// Seed for a reproducible layout
    #[arg(long, env = "REPOCITY_SEED")]
    pub seed: Option<u64>,

    /// JSON file overriding the layout parameters
    #[arg(long, env = "REPOCITY_PARAMS")]
    pub params: Option<PathBuf>,

    /// Repository as a URL or host/owner/name; used for the title
    #[arg(long, env = "REPOCITY_REPO", value_parser = parse_repo)]
    pub repo: Option<RepoRef>,
}

fn parse_repo(s: &str) -> Result<RepoRef, String> {
    RepoRef::parse(s).ok_or_else(|| format!("expected owner/name or host/owner/name, got `{s}`"))
}

impl Cli {
    pub fn job(&self) -> RenderJob {
        RenderJob {
            stats_path: self.stats.clone(),
            output: self.out.clone(),
            params_path: self.params.clone(),
            repo: self.repo.clone(),
        }
    }
}
