use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;

use layout::{LayoutParams, LayoutPlugin, LayoutRng};

mod app_error;
mod cli;
mod job;

use cli::Cli;
use job::{run_job, RenderJob};

fn main() -> AppExit {
    let cli = Cli::parse();

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_once()),
        LogPlugin::default(),
        LayoutPlugin,
    ))
    .insert_resource(cli.job())
    .add_systems(Startup, render_city);

    // Pinned seed for reproducible images; entropy otherwise.
    if let Some(seed) = cli.seed {
        app.insert_resource(LayoutRng::from_seed_u64(seed));
    }

    app.run()
}

fn render_city(
    job: Res<RenderJob>,
    params: Res<LayoutParams>,
    mut rng: ResMut<LayoutRng>,
    mut exit: EventWriter<AppExit>,
) {
    match run_job(&job, &params, &mut rng.0) {
        Ok(summary) => info!(
            "wrote {} towers ({} bytes) to {}",
            summary.towers,
            summary.bytes,
            job.output
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "stdout".to_string())
        ),
        Err(e) => {
            error!("render failed: {e}");
            exit.send(AppExit::error());
        }
    }
}
