//! Domain types for toolfix
//!
//! - FileOutcome: Result of patching a single project file

pub mod outcome;

pub use outcome::FileOutcome;
