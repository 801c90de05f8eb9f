//! toolfix - retarget Visual Studio project files to a newer platform toolset
//!
//! Rewrites `<PlatformToolset>` markers in every `.vcxproj` under a project
//! tree, verifying the replacement count before anything is written.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod patcher;

pub use error::{PatchError, Result};
