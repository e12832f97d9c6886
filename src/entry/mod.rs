//! Process entry points for the two binaries.
mod fuzz;
mod replay;


pub use fuzz::{fuzz, run_fuzz};
pub use replay::{replay, run_replay};
