use anchor_lang::prelude::*;
use credential_vault::program::CredentialVault;
use credential_vault::state::{Asset, VaultConfig};

use crate::constants::*;
use crate::errors::MarketplaceError;
use crate::events::PurchaseExpired;
use crate::instructions::settlement::{pay_out_escrow, VaultHooks};
use crate::state::{Listing, MarketConfig};

#[derive(Accounts)]
pub struct ExpirePurchase<'info> {
    /// Seller unwinding the stalled sale
    pub seller: Signer<'info>,

    /// Buyer receiving the refund
    #[account(mut)]
    pub buyer: SystemAccount<'info>,

    #[account(
        seeds = [MARKET_SEED, market.authority.as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, MarketConfig>,

    /// CHECK: Signing PDA of this market, validated by seeds
    #[account(
        seeds = [MARKET_AUTHORITY_SEED, market.key().as_ref()],
        bump = market.authority_bump,
    )]
    pub market_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [LISTING_SEED, market.key().as_ref(), &listing.id.to_le_bytes()],
        bump = listing.bump,
        has_one = market @ MarketplaceError::ListingNotFound,
        has_one = vault @ MarketplaceError::AssetNotInVault,
        has_one = asset @ MarketplaceError::AssetNotInVault,
        constraint = listing.is_buyer(&buyer.key()) @ MarketplaceError::Unauthorized,
    )]
    pub listing: Box<Account<'info, Listing>>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, listing.key().as_ref()],
        bump,
    )]
    pub escrow: SystemAccount<'info>,

    pub vault: Account<'info, VaultConfig>,

    #[account(mut)]
    pub asset: Box<Account<'info, Asset>>,

    pub vault_program: Program<'info, CredentialVault>,
    pub system_program: Program<'info, System>,
}

/// Unwind a purchase the buyer never confirmed.
///
/// # Operations
/// 1. Validate signer is the seller and the listing is PendingConfirmation
/// 2. Validate the confirmation timeout has elapsed since purchase
/// 3. Refund escrow to the buyer
/// 4. Unlock the asset and reset the listing to Active
pub fn expire_purchase(ctx: Context<ExpirePurchase>) -> Result<()> {
    let seller = ctx.accounts.seller.key();
    let listing_key = ctx.accounts.listing.key();
    let escrow_bump = ctx.bumps.escrow;
    let now = Clock::get()?.unix_timestamp;
    let timeout = ctx.accounts.market.confirmation_timeout_secs;

    let (buyer, refund) = ctx.accounts.listing.expire(&seller, now, timeout)?;

    pay_out_escrow(
        &ctx.accounts.system_program,
        &ctx.accounts.escrow,
        ctx.accounts.buyer.to_account_info(),
        &listing_key,
        escrow_bump,
        refund,
    )?;

    VaultHooks::new(
        &ctx.accounts.vault_program,
        &ctx.accounts.market_authority,
        &ctx.accounts.vault,
        &ctx.accounts.asset,
        ctx.accounts.market.key(),
        ctx.accounts.market.authority_bump,
    )
    .lock(false)?;

    let listing_id = ctx.accounts.listing.id;

    emit!(PurchaseExpired {
        listing_id,
        buyer,
        refunded: refund,
    });

    msg!("Purchase on listing {} expired, {} lamports refunded", listing_id, refund);

    Ok(())
}
