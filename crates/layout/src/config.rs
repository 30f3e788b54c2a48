pub const CANVAS_WIDTH: i32 = 1024;
pub const CANVAS_HEIGHT: i32 = 1024;

/// Cells per grid side. The grid is `CELLS_SIDE x CELLS_SIDE`, ids are row-major.
pub const CELLS_SIDE: usize = 10;
pub const GRID_CELLS: usize = CELLS_SIDE * CELLS_SIDE;

/// Gap in pixels between neighbouring cells on screen.
pub const CELL_PADDING: i32 = 5;

pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Ratio between the canvas width and the side of the (rotated) ground square.
pub const WIDTH_TO_SIDE: f64 = 1.0 / SQRT_3;

/// Side of the ground square in pixels before projection.
pub const FIELD_SIDE_SIZE: f64 = CANVAS_WIDTH as f64 * WIDTH_TO_SIDE;

/// Pixel size of one cell, padding excluded.
pub const CELL_SIZE: i32 = (FIELD_SIDE_SIZE / CELLS_SIDE as f64) as i32 - CELL_PADDING;

/// Tallest allowed tower, in floors.
pub const MAX_FLOORS: u32 = 16;
