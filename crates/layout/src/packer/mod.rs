mod placement;
pub mod types;
pub mod volume;

pub use placement::pack_zone;
pub use types::{Tower, ZoneReport};
pub use volume::{contributor_targets, residual_target};
