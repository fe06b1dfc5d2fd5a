//! Domain-level constants, one file per concern.

mod jobs;
mod process;

pub use jobs::*;
pub use process::*;
