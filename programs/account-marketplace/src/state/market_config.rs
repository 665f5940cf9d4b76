use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::MarketplaceError;

#[account]
#[derive(InitSpace)]
pub struct MarketConfig {
    /// Market operator, also the arbiter for disputed sales
    pub authority: Pubkey,

    pub next_listing_id: u64,

    /// How long a buyer has to confirm before the seller may unwind the sale
    pub confirmation_timeout_secs: i64,

    pub created_at: i64,
    pub bump: u8,

    /// Bump of the `[MARKET_AUTHORITY_SEED, market]` signing PDA
    pub authority_bump: u8,
}

impl MarketConfig {
    pub fn resolve_timeout(requested: Option<i64>) -> Result<i64> {
        let timeout = requested.unwrap_or(DEFAULT_CONFIRMATION_TIMEOUT_SECONDS);
        let bounds = MIN_CONFIRMATION_TIMEOUT_SECONDS..=MAX_CONFIRMATION_TIMEOUT_SECONDS;
        require!(
            bounds.contains(&timeout),
            MarketplaceError::InvalidTimeout
        );
        Ok(timeout)
    }

    pub fn allocate_listing_id(&mut self) -> Result<u64> {
        let id = self.next_listing_id;
        self.next_listing_id = id.checked_add(1).ok_or(MarketplaceError::IdOverflow)?;
        Ok(id)
    }
}
