//! Data shaping: client-controlled field projection

pub mod entity;
pub mod shaper;

pub use entity::ShapedEntity;
pub use shaper::{check_fields, has_fields, shape_data, shape_single};
