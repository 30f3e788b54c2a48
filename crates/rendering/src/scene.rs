//! Paint-ordered polygon list for one city.

use bevy::log::debug;
use rand::Rng;

use layout::config::{CANVAS_HEIGHT, CANVAS_WIDTH};
use layout::packer::Tower;
use layout::palette::random_ground;

use crate::isometric::{ground_polygon, tower_faces, CubeFaces, Polygon};

/// The three faces of one tower, tagged with its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TowerGroup {
    /// Owner email, empty for unattributed towers.
    pub id: String,
    pub z_index: i32,
    pub faces: CubeFaces,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub ground: Polygon,
    /// Back to front.
    pub groups: Vec<TowerGroup>,
}

impl Scene {
    /// Every polygon in drawing order: the ground, then each tower's faces.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        std::iter::once(&self.ground).chain(self.groups.iter().flat_map(|g| g.faces.polygons()))
    }
}

/// Towers sorted back to front by depth key. Equal keys keep their input order.
pub fn paint_order(towers: &[Tower]) -> Vec<&Tower> {
    let mut ordered: Vec<&Tower> = towers.iter().collect();
    ordered.sort_by_key(|t| t.z_index);
    ordered
}

/// Projects `towers` into a scene over a randomly tinted ground.
pub fn build_scene<R: Rng + ?Sized>(title: &str, towers: &[Tower], rng: &mut R) -> Scene {
    let ground = ground_polygon(random_ground(rng));
    let groups = paint_order(towers)
        .into_iter()
        .map(|t| {
            debug!(
                "draw tower z_index={} cell={} w={} z={} h={} color {}",
                t.z_index, t.cell, t.width, t.depth, t.height, t.color
            );
            TowerGroup {
                id: t.tag().to_string(),
                z_index: t.z_index,
                faces: tower_faces(t),
            }
        })
        .collect();
    Scene {
        title: title.to_string(),
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        ground,
        groups,
    }
}
