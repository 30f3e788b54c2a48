//! One render: statistics file in, SVG document out.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bevy::log::info;
use bevy::prelude::Resource;
use rand::Rng;

use layout::stats::{RepoRef, RepoStat};
use layout::{build_city, LayoutParams};
use rendering::{build_scene, write_svg};

use crate::app_error::AppError;

/// What to render, read from the command line and environment at startup.
#[derive(Resource, Debug, Clone)]
pub struct RenderJob {
    pub stats_path: PathBuf,
    /// `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// JSON override for [`LayoutParams`].
    pub params_path: Option<PathBuf>,
    pub repo: Option<RepoRef>,
}

impl RenderJob {
    /// `owner/name` when the repository is known, the statistics file stem otherwise.
    pub fn title(&self) -> String {
        match &self.repo {
            Some(repo) => repo.to_string(),
            None => self
                .stats_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }
}

/// Summary of a finished render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub towers: usize,
    pub bytes: usize,
}

fn load_params(path: Option<&Path>, base: &LayoutParams) -> Result<LayoutParams, AppError> {
    match path {
        Some(path) => Ok(LayoutParams::from_json(&fs::read_to_string(path)?)?),
        None => Ok(base.clone()),
    }
}

/// Loads the statistics, lays out the city and writes the SVG.
pub fn run_job<R: Rng + ?Sized>(
    job: &RenderJob,
    base_params: &LayoutParams,
    rng: &mut R,
) -> Result<RenderSummary, AppError> {
    let params = load_params(job.params_path.as_deref(), base_params)?;
    let stats = RepoStat::from_json(&fs::read_to_string(&job.stats_path)?)?;
    info!(
        "rendering {} ({} contributors)",
        job.stats_path.display(),
        stats.users.len()
    );

    let city = build_city(&stats, &params, &mut *rng)?;
    let scene = build_scene(&job.title(), &city.towers, &mut *rng);

    let mut doc: Vec<u8> = Vec::new();
    write_svg(&scene, &mut doc)?;
    match &job.output {
        Some(path) => fs::write(path, &doc)?,
        None => {
            let mut out = io::stdout().lock();
            out.write_all(&doc)?;
            out.flush()?;
        }
    }
    Ok(RenderSummary {
        towers: city.towers.len(),
        bytes: doc.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;
    use tempfile::tempdir;

    fn job(dir: &Path) -> RenderJob {
        RenderJob {
            stats_path: dir.join("widgets.json"),
            output: Some(dir.join("city.svg")),
            params_path: None,
            repo: None,
        }
    }

    #[test]
    fn test_title_prefers_repo() {
        let mut j = job(Path::new("/tmp"));
        assert_eq!(j.title(), "widgets");
        j.repo = RepoRef::parse("github.com/acme/widgets");
        assert_eq!(j.title(), "acme/widgets");
    }

    #[test]
    fn test_run_job_writes_svg() {
        let tmp = tempdir().expect("temp dir");
        let dir = tmp.path();
        let stats = json!({
            "code_lines": { "total": 1000 },
            "users": {
                "a@x": { "email": "a@x", "code_lines": { "total": 800 } }
            }
        });
        fs::write(dir.join("widgets.json"), stats.to_string()).expect("write stats");

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let summary = run_job(&job(dir), &LayoutParams::default(), &mut rng).expect("render");
        let doc = fs::read_to_string(dir.join("city.svg")).expect("svg written");
        assert_eq!(doc.len(), summary.bytes);
        assert!(summary.towers >= 1);
        assert!(doc.contains("<title>widgets</title>"));
        assert!(doc.contains(r#"<g id="a@x">"#));
    }

    #[test]
    fn test_run_job_reports_bad_inputs() {
        let tmp = tempdir().expect("temp dir");
        let dir = tmp.path();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let missing = run_job(&job(dir), &LayoutParams::default(), &mut rng);
        assert!(matches!(missing, Err(AppError::Io(_))));

        fs::write(dir.join("widgets.json"), "{}").expect("write stats");
        fs::write(dir.join("params.json"), r#"{ "edge_footprint_cap": 0 }"#).expect("write params");
        let mut j = job(dir);
        j.params_path = Some(dir.join("params.json"));
        let err = run_job(&j, &LayoutParams::default(), &mut rng).unwrap_err();
        assert!(matches!(err, AppError::Layout(_)));
        assert!(err.to_string().contains("Invalid layout parameters"), "got: {err}");

        fs::write(dir.join("widgets.json"), "[1, 2").expect("write stats");
        let err = run_job(&job(dir), &LayoutParams::default(), &mut rng).unwrap_err();
        assert!(matches!(err, AppError::Stats(_)), "got: {err}");
    }
}
