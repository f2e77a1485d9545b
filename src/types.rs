pub mod diff_result;
pub mod diff_segment;
pub mod diff_stats;
