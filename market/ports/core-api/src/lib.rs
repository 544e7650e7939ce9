mod api;

pub use api::{MarketApi, MarketError};
