//! Isometric rendering of a city layout into an SVG document.
//!
//! [`scene::build_scene`] orders towers back to front and projects each into
//! three shaded faces; [`svg::write_svg`] streams the result.

pub mod isometric;
pub mod render_error;
pub mod scene;
pub mod svg;

pub use render_error::RenderError;
pub use scene::{build_scene, Scene};
pub use svg::{render_svg, write_svg};
