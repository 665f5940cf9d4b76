use anchor_lang::prelude::*;
use credential_vault::program::CredentialVault;
use credential_vault::state::{Asset, VaultConfig};

use crate::constants::*;
use crate::errors::MarketplaceError;
use crate::events::SalePending;
use crate::instructions::settlement::VaultHooks;
use crate::state::{Listing, MarketConfig};

#[derive(Accounts)]
pub struct BuyAccount<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

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
    )]
    pub listing: Box<Account<'info, Listing>>,

    /// Escrow PDA receiving the buyer's payment
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

/// Buy a listed asset at its exact price.
///
/// # Escrow
/// - Payment moves from the buyer into the listing escrow PDA
/// - The asset is sale-locked in the vault until settlement
///
/// # Operations
/// 1. Validate the seller still holds the asset unclaimed and unlocked
/// 2. Validate listing is Active and the payment equals the price
/// 3. Record buyer and purchase time, status PendingConfirmation
/// 4. Transfer payment into escrow
/// 5. Lock the asset through the vault hook
pub fn buy_account(ctx: Context<BuyAccount>, payment_amount: u64) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();
    let now = Clock::get()?.unix_timestamp;

    ctx.accounts.listing.check_purchasable(&ctx.accounts.asset)?;
    ctx.accounts
        .listing
        .record_purchase(buyer, payment_amount, now)?;

    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.escrow.to_account_info(),
            },
        ),
        payment_amount,
    )?;

    VaultHooks::new(
        &ctx.accounts.vault_program,
        &ctx.accounts.market_authority,
        &ctx.accounts.vault,
        &ctx.accounts.asset,
        ctx.accounts.market.key(),
        ctx.accounts.market.authority_bump,
    )
    .lock(true)?;

    let listing_id = ctx.accounts.listing.id;

    emit!(SalePending {
        listing_id,
        buyer,
        escrowed_amount: payment_amount,
    });

    msg!(
        "Listing {} purchased by {:?}, {} lamports escrowed",
        listing_id,
        buyer,
        payment_amount
    );

    Ok(())
}
