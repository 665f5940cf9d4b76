use anchor_lang::prelude::*;

use crate::constants::LISTING_SEED;
use crate::events::DisputeInitiated;
use crate::state::Listing;

#[derive(Accounts)]
pub struct InitiateDispute<'info> {
    /// Buyer raising the dispute
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [LISTING_SEED, listing.market.as_ref(), &listing.id.to_le_bytes()],
        bump = listing.bump,
    )]
    pub listing: Box<Account<'info, Listing>>,
}

/// Flag a pending sale as disputed. Escrow and asset stay where they are
/// until the market arbiter rules with `resolve_dispute`.
pub fn initiate_dispute(ctx: Context<InitiateDispute>) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();
    let listing = &mut ctx.accounts.listing;

    listing.dispute(&buyer)?;

    emit!(DisputeInitiated {
        listing_id: listing.id,
        buyer,
    });

    msg!("Dispute initiated on listing {} by {:?}", listing.id, buyer);

    Ok(())
}
