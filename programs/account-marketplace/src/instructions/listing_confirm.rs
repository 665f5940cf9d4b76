use anchor_lang::prelude::*;
use credential_vault::program::CredentialVault;
use credential_vault::state::{Asset, VaultConfig};

use crate::constants::*;
use crate::errors::MarketplaceError;
use crate::events::SaleConfirmed;
use crate::instructions::settlement::{pay_out_escrow, VaultHooks};
use crate::state::{Listing, MarketConfig};

#[derive(Accounts)]
pub struct ConfirmReceiptAndClaim<'info> {
    /// Buyer confirming receipt
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Seller receiving the escrowed payment
    #[account(mut)]
    pub seller: SystemAccount<'info>,

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
        has_one = seller @ MarketplaceError::Unauthorized,
        has_one = vault @ MarketplaceError::AssetNotInVault,
        has_one = asset @ MarketplaceError::AssetNotInVault,
    )]
    pub listing: Box<Account<'info, Listing>>,

    /// Escrow PDA holding the buyer's payment
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

/// Settle a purchase. Everything below happens in this one transaction; a
/// failure in any step leaves the listing, escrow and asset untouched.
///
/// # Operations
/// 1. Validate signer is the buyer and listing is PendingConfirmation
/// 2. Transfer asset ownership seller -> buyer through the vault hook
/// 3. Release escrow to the seller
/// 4. Claim the credentials for the buyer through the vault hook
/// 5. Set status to Sold
pub fn confirm_receipt_and_claim(ctx: Context<ConfirmReceiptAndClaim>) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();
    let listing_key = ctx.accounts.listing.key();
    let escrow_bump = ctx.bumps.escrow;

    let released = ctx.accounts.listing.confirm(&buyer)?;
    let seller = ctx.accounts.listing.seller;

    let hooks = VaultHooks::new(
        &ctx.accounts.vault_program,
        &ctx.accounts.market_authority,
        &ctx.accounts.vault,
        &ctx.accounts.asset,
        ctx.accounts.market.key(),
        ctx.accounts.market.authority_bump,
    );

    hooks.transfer(seller, buyer)?;

    pay_out_escrow(
        &ctx.accounts.system_program,
        &ctx.accounts.escrow,
        ctx.accounts.seller.to_account_info(),
        &listing_key,
        escrow_bump,
        released,
    )?;

    hooks.claim(buyer)?;

    let listing = &ctx.accounts.listing;

    emit!(SaleConfirmed {
        listing_id: listing.id,
        seller,
        buyer,
        asset_id: listing.asset_id,
        price: released,
    });

    msg!(
        "Sale {} confirmed: asset {} now owned and claimed by {:?}",
        listing.id,
        listing.asset_id,
        buyer
    );

    Ok(())
}
