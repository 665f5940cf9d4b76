use anchor_lang::prelude::*;
use credential_vault::program::CredentialVault;
use credential_vault::state::{Asset, VaultConfig};

use crate::constants::*;
use crate::errors::MarketplaceError;
use crate::events::DisputeResolved;
use crate::instructions::settlement::{pay_out_escrow, VaultHooks};
use crate::state::{DisputeRuling, Listing, MarketConfig};

#[derive(Accounts)]
pub struct ResolveDispute<'info> {
    /// Market authority acting as arbiter
    pub arbiter: Signer<'info>,

    #[account(mut)]
    pub seller: SystemAccount<'info>,

    #[account(mut)]
    pub buyer: SystemAccount<'info>,

    #[account(
        seeds = [MARKET_SEED, market.authority.as_ref()],
        bump = market.bump,
        constraint = market.authority == arbiter.key() @ MarketplaceError::Unauthorized,
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

/// Arbiter ruling on a disputed sale.
///
/// - `ReleaseToSeller` settles exactly like a buyer confirmation: ownership
///   transfer, escrow to seller, claim for the buyer, Sold.
/// - `RefundBuyer` returns the escrow, unlocks the asset for the seller and
///   ends the listing as Cancelled.
pub fn resolve_dispute(ctx: Context<ResolveDispute>, ruling: DisputeRuling) -> Result<()> {
    let listing_key = ctx.accounts.listing.key();
    let escrow_bump = ctx.bumps.escrow;
    let seller = ctx.accounts.seller.key();
    let buyer = ctx.accounts.buyer.key();

    let amount = ctx.accounts.listing.resolve(ruling)?;

    let hooks = VaultHooks::new(
        &ctx.accounts.vault_program,
        &ctx.accounts.market_authority,
        &ctx.accounts.vault,
        &ctx.accounts.asset,
        ctx.accounts.market.key(),
        ctx.accounts.market.authority_bump,
    );

    match ruling {
        DisputeRuling::ReleaseToSeller => {
            hooks.transfer(seller, buyer)?;
            pay_out_escrow(
                &ctx.accounts.system_program,
                &ctx.accounts.escrow,
                ctx.accounts.seller.to_account_info(),
                &listing_key,
                escrow_bump,
                amount,
            )?;
            hooks.claim(buyer)?;
        }
        DisputeRuling::RefundBuyer => {
            pay_out_escrow(
                &ctx.accounts.system_program,
                &ctx.accounts.escrow,
                ctx.accounts.buyer.to_account_info(),
                &listing_key,
                escrow_bump,
                amount,
            )?;
            hooks.lock(false)?;
        }
    }

    let listing_id = ctx.accounts.listing.id;

    emit!(DisputeResolved {
        listing_id,
        arbiter: ctx.accounts.arbiter.key(),
        ruling,
        amount,
    });

    msg!("Dispute on listing {} resolved: {:?}", listing_id, ruling);

    Ok(())
}
