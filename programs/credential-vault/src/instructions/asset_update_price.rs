use anchor_lang::prelude::*;

use crate::constants::ASSET_SEED;
use crate::events::ListingPriceUpdated;
use crate::state::Asset;

#[derive(Accounts)]
pub struct UpdateListingPrice<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [ASSET_SEED, asset.vault.as_ref(), &asset.id.to_le_bytes()],
        bump = asset.bump,
    )]
    pub asset: Box<Account<'info, Asset>>,
}

pub fn update_listing_price(ctx: Context<UpdateListingPrice>, new_price: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let asset = &mut ctx.accounts.asset;
    asset.set_listing_price(&owner, new_price)?;

    emit!(ListingPriceUpdated {
        asset_id: asset.id,
        owner,
        listing_price: new_price,
    });

    msg!("Asset {} listing price set to {}", asset.id, new_price);

    Ok(())
}
