pub mod alignment;
pub mod backtrace;
