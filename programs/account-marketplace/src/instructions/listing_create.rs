use anchor_lang::prelude::*;
use credential_vault::state::{Asset, OperatorApproval, VaultConfig};

use crate::constants::*;
use crate::errors::MarketplaceError;
use crate::events::ListingCreated;
use crate::state::{Listing, ListingStatus, MarketConfig};

#[derive(Accounts)]
pub struct ListAccount<'info> {
    /// Seller who owns the asset
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(
        mut,
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
        constraint = vault.is_marketplace(&market_authority.key())
            @ MarketplaceError::MarketplaceNotBound
    )]
    pub vault: Account<'info, VaultConfig>,

    #[account(
        constraint = asset.vault == vault.key() @ MarketplaceError::AssetNotInVault
    )]
    pub asset: Box<Account<'info, Asset>>,

    /// Seller's blanket approval of the market, when not approved per asset
    pub operator_approval: Option<Account<'info, OperatorApproval>>,

    #[account(
        init,
        payer = seller,
        space = 8 + Listing::INIT_SPACE,
        seeds = [LISTING_SEED, market.key().as_ref(), &market.next_listing_id.to_le_bytes()],
        bump
    )]
    pub listing: Box<Account<'info, Listing>>,

    pub system_program: Program<'info, System>,
}

/// Create a fixed-price listing for a vault asset.
///
/// # Operations
/// 1. Validate price and contact
/// 2. Verify the signer owns the asset and approved the market
/// 3. Reject claimed or sale-locked assets
/// 4. Create the listing as Active
pub fn list_account(ctx: Context<ListAccount>, price: u64, seller_contact: String) -> Result<u64> {
    Listing::validate_terms(price, &seller_contact)?;

    let seller = ctx.accounts.seller.key();
    let market_authority = ctx.accounts.market_authority.key();
    let vault = ctx.accounts.vault.key();
    let asset = &ctx.accounts.asset;

    let market_approved = asset.is_approved(&market_authority)
        || ctx
            .accounts
            .operator_approval
            .as_ref()
            .is_some_and(|approval| approval.grants(&vault, &seller, &market_authority));
    Listing::check_listable(asset, &seller, market_approved)?;

    let asset_key = asset.key();
    let asset_id = asset.id;
    let market_key = ctx.accounts.market.key();
    let listing_id = ctx.accounts.market.allocate_listing_id()?;

    let listing = &mut ctx.accounts.listing;
    listing.id = listing_id;
    listing.market = market_key;
    listing.vault = vault;
    listing.asset = asset_key;
    listing.asset_id = asset_id;
    listing.seller = seller;
    listing.price = price;
    listing.seller_contact = seller_contact;
    listing.status = ListingStatus::Active;
    listing.buyer = None;
    listing.escrowed_amount = 0;
    listing.created_at = Clock::get()?.unix_timestamp;
    listing.purchased_at = None;
    listing.bump = ctx.bumps.listing;

    emit!(ListingCreated {
        listing: listing.key(),
        listing_id,
        vault,
        asset_id,
        seller,
        price,
    });

    msg!(
        "Listing {} created: {} lamports for asset {}",
        listing_id,
        price,
        asset_id
    );

    Ok(listing_id)
}
