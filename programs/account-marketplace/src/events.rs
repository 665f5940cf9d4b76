use anchor_lang::prelude::*;

use crate::state::DisputeRuling;

#[event]
pub struct MarketInitialized {
    pub market: Pubkey,
    pub authority: Pubkey,
    pub market_authority: Pubkey,
    pub confirmation_timeout_secs: i64,
}

#[event]
pub struct ListingCreated {
    pub listing: Pubkey,
    pub listing_id: u64,
    pub vault: Pubkey,
    pub asset_id: u64,
    pub seller: Pubkey,
    pub price: u64,
}

#[event]
pub struct SalePending {
    pub listing_id: u64,
    pub buyer: Pubkey,
    pub escrowed_amount: u64,
}

#[event]
pub struct SaleConfirmed {
    pub listing_id: u64,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub asset_id: u64,
    pub price: u64,
}

#[event]
pub struct ListingCancelled {
    pub listing_id: u64,
    pub seller: Pubkey,
}

#[event]
pub struct DisputeInitiated {
    pub listing_id: u64,
    pub buyer: Pubkey,
}

#[event]
pub struct PurchaseExpired {
    pub listing_id: u64,
    pub buyer: Pubkey,
    pub refunded: u64,
}

#[event]
pub struct DisputeResolved {
    pub listing_id: u64,
    pub arbiter: Pubkey,
    pub ruling: DisputeRuling,
    pub amount: u64,
}
