use anchor_lang::prelude::*;

use crate::constants::LISTING_SEED;
use crate::state::Listing;

#[derive(Accounts)]
pub struct GetListing<'info> {
    #[account(
        seeds = [LISTING_SEED, listing.market.as_ref(), &listing.id.to_le_bytes()],
        bump = listing.bump,
    )]
    pub listing: Account<'info, Listing>,
}

pub fn get_listing(ctx: Context<GetListing>) -> Result<Listing> {
    Ok((*ctx.accounts.listing).clone())
}
