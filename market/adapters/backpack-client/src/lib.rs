mod client;

pub use client::BackpackClient;
