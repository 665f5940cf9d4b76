pub mod listing_buy;
pub mod listing_cancel;
pub mod listing_confirm;
pub mod listing_create;
pub mod listing_dispute;
pub mod listing_expire;
pub mod listing_read;
pub mod listing_resolve;
pub mod market_initialize;
pub mod settlement;

pub use listing_buy::*;
pub use listing_cancel::*;
pub use listing_confirm::*;
pub use listing_create::*;
pub use listing_dispute::*;
pub use listing_expire::*;
pub use listing_read::*;
pub use listing_resolve::*;
pub use market_initialize::*;
