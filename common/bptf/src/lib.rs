pub mod rest;

mod error;

pub use error::{BptfError, Result};
