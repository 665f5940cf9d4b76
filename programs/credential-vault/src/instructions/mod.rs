pub mod asset_approve;
pub mod asset_claim;
pub mod asset_mint;
pub mod asset_read;
pub mod asset_transfer;
pub mod asset_update_price;
pub mod marketplace_hooks;
pub mod vault_bind_marketplace;
pub mod vault_initialize;

pub use asset_approve::*;
pub use asset_claim::*;
pub use asset_mint::*;
pub use asset_read::*;
pub use asset_transfer::*;
pub use asset_update_price::*;
pub use marketplace_hooks::*;
pub use vault_bind_marketplace::*;
pub use vault_initialize::*;
