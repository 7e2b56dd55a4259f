pub mod engine;
pub mod outcome;

pub use engine::{calculate, match_substance};
pub use outcome::DosageResult;
