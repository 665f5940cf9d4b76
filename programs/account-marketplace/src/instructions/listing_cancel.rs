use anchor_lang::prelude::*;

use crate::constants::LISTING_SEED;
use crate::events::ListingCancelled;
use crate::state::Listing;

#[derive(Accounts)]
pub struct CancelListing<'info> {
    /// Seller who is cancelling the listing
    pub seller: Signer<'info>,

    #[account(
        mut,
        seeds = [LISTING_SEED, listing.market.as_ref(), &listing.id.to_le_bytes()],
        bump = listing.bump,
    )]
    pub listing: Box<Account<'info, Listing>>,
}

/// Cancel a listing before anyone buys it. The listing stays readable as
/// Cancelled; no funds move.
pub fn cancel_listing(ctx: Context<CancelListing>) -> Result<()> {
    let seller = ctx.accounts.seller.key();
    let listing = &mut ctx.accounts.listing;

    listing.cancel(&seller)?;

    emit!(ListingCancelled {
        listing_id: listing.id,
        seller,
    });

    msg!("Listing {} cancelled by seller: {:?}", listing.id, seller);

    Ok(())
}
