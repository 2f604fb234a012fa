//! Command implementations.

pub mod check;
pub mod match_path;
pub mod plan;
pub mod utils;

pub use check::execute as check_execute;
pub use match_path::execute as match_execute;
pub use plan::execute as plan_execute;
