mod client;
mod models;

pub use client::BptfRest;
pub use models::*;
