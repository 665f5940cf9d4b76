//! State account definitions

pub mod listing;
pub mod market_config;

pub use listing::*;
pub use market_config::*;
