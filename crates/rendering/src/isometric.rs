//! Fixed axonometric projection of towers onto the canvas.
//!
//! The ground square is rotated 45 degrees and squashed so that one grid step
//! moves `√3/2` horizontally and `1/2` vertically. Tower boxes are drawn as
//! three quads: a lightened top, a darkened left side and a true-color right
//! side. All coordinates are integer pixels.

use bevy::math::IVec2;

use layout::config::{CANVAS_HEIGHT, CANVAS_WIDTH, CELLS_SIDE, CELL_PADDING, CELL_SIZE, SQRT_3};
use layout::packer::Tower;
use layout::palette::Rgb;

pub const TOP_LIGHTEN: f64 = 0.1;
pub const LEFT_DARKEN: f64 = 0.2;

/// Footprint pixels are divided by this before projection.
pub const FOOTPRINT_DIVISOR: i32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    pub points: Vec<IVec2>,
    pub fill: Rgb,
}

impl Polygon {
    fn quad(points: [(i32, i32); 4], fill: Rgb) -> Self {
        Self {
            points: points.into_iter().map(|(x, y)| IVec2::new(x, y)).collect(),
            fill,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeFaces {
    pub top: Polygon,
    pub left: Polygon,
    pub right: Polygon,
}

impl CubeFaces {
    /// Faces in drawing order.
    pub fn polygons(&self) -> [&Polygon; 3] {
        [&self.top, &self.left, &self.right]
    }
}

/// Horizontal offset of `n` units along a projected ground axis.
pub fn iso_step(n: i32) -> i32 {
    (2.0 * SQRT_3 * n as f64).round() as i32
}

/// Unprojected pixel origin of a cell, padding included.
pub fn cell_origin(cell: usize) -> IVec2 {
    let row = (cell / CELLS_SIDE) as i32;
    let col = (cell % CELLS_SIDE) as i32;
    IVec2::new(
        col * CELL_SIZE + CELL_PADDING * col,
        row * CELL_SIZE + CELL_PADDING * row,
    )
}

/// Screen position of the top corner of a box of pixel height `h` standing on
/// the unprojected point `origin`.
pub fn project(origin: IVec2, h: i32) -> IVec2 {
    let half_sqrt3 = SQRT_3 / 2.0;
    let mut x = CANVAS_WIDTH / 2;
    let mut y = CANVAS_HEIGHT - (CANVAS_WIDTH as f64 / SQRT_3) as i32 - h;

    x -= (half_sqrt3 * origin.x as f64) as i32;
    y += origin.x / 2;
    x += (half_sqrt3 * origin.y as f64) as i32;
    y += origin.y / 2;
    IVec2::new(x, y)
}

/// Faces of a box whose top corner is at `anchor`, with projected extents
/// `w` (along the row), `z` (along the column) and pixel height `h`.
pub fn cube_faces(anchor: IVec2, w: i32, z: i32, h: i32, color: Rgb) -> CubeFaces {
    let (x, y) = (anchor.x, anchor.y);
    let (pw, pz) = (iso_step(w), iso_step(z));

    let top = Polygon::quad(
        [
            (x, y),
            (x + pz, y + 2 * z),
            (x - pw + pz, y + 2 * (w + z)),
            (x - pw, y + 2 * w),
        ],
        color.lighten(TOP_LIGHTEN),
    );
    let left = Polygon::quad(
        [
            (x - pw, y + 2 * w),
            (x - pw + pz, y + 2 * (w + z)),
            (x - pw + pz, y + 2 * (w + z) + h),
            (x - pw, y + 2 * w + h),
        ],
        color.darken(LEFT_DARKEN),
    );
    let right = Polygon::quad(
        [
            (x + pz, y + 2 * z),
            (x + pz, y + 2 * z + h),
            (x - pw + pz, y + 2 * (w + z) + h),
            (x - pw + pz, y + 2 * (w + z)),
        ],
        color,
    );
    CubeFaces { top, left, right }
}

/// Projects a placed tower. Dimensions are in cells; one cell is
/// `CELL_SIZE` pixels.
pub fn tower_faces(tower: &Tower) -> CubeFaces {
    let h = tower.height as i32 * CELL_SIZE;
    let w = tower.width as i32 * CELL_SIZE / FOOTPRINT_DIVISOR;
    let z = tower.depth as i32 * CELL_SIZE / FOOTPRINT_DIVISOR;
    let anchor = project(cell_origin(tower.cell), h);
    cube_faces(anchor, w, z, h, tower.color)
}

/// The ground diamond under the whole grid.
pub fn ground_polygon(color: Rgb) -> Polygon {
    let t = 1.0 / SQRT_3;
    let x = CANVAS_WIDTH / 2;
    let y = CANVAS_HEIGHT - (CANVAS_WIDTH as f64 * t) as i32;
    let mid = y + (CANVAS_HEIGHT as f64 * t / 2.0) as i32;
    Polygon::quad(
        [(x, y), (CANVAS_WIDTH, mid), (x, CANVAS_HEIGHT), (0, mid)],
        color,
    )
}
