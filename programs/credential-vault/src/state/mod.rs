//! State account definitions

pub mod asset;
pub mod operator_approval;
pub mod vault_config;

pub use asset::*;
pub use operator_approval::*;
pub use vault_config::*;
