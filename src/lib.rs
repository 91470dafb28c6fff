pub mod collector;
pub mod error;
pub mod git;
pub mod manifest;
pub mod resolver;
pub mod ui;

pub use error::{CiVersionError, Result};
