pub mod group_segments;
pub mod side;
