//! Procedural layout of a repository "city".
//!
//! Contributors become towers on a zoned grid: one district each for code,
//! docs and tests lines. [`city::build_city`] runs the whole layout for one
//! render; the renderer crate turns the result into polygons.

use bevy::prelude::{App, Plugin};

pub mod city;
pub mod config;
pub mod error;
pub mod grid;
pub mod packer;
pub mod palette;
pub mod params;
pub mod rng;
pub mod stats;
pub mod zone;

pub use city::{build_city, CityLayout};
pub use error::LayoutError;
pub use params::LayoutParams;
pub use rng::LayoutRng;

/// Registers the layout resources with their defaults. Inserting either
/// resource before adding the plugin keeps the inserted value.
pub struct LayoutPlugin;

impl Plugin for LayoutPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LayoutParams>()
            .init_resource::<LayoutRng>();
    }
}
