use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::MarketInitialized;
use crate::state::MarketConfig;

#[derive(Accounts)]
pub struct InitializeMarket<'info> {
    /// Market operator and dispute arbiter
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + MarketConfig::INIT_SPACE,
        seeds = [MARKET_SEED, authority.key().as_ref()],
        bump
    )]
    pub market: Account<'info, MarketConfig>,

    pub system_program: Program<'info, System>,
}

/// Create a market. The derived `market_authority` PDA is what a vault
/// binds with `set_marketplace_authority` and what sellers approve.
pub fn initialize_market(
    ctx: Context<InitializeMarket>,
    confirmation_timeout_secs: Option<i64>,
) -> Result<()> {
    let confirmation_timeout_secs = MarketConfig::resolve_timeout(confirmation_timeout_secs)?;

    let market_key = ctx.accounts.market.key();
    let (market_authority, authority_bump) =
        Pubkey::find_program_address(&[MARKET_AUTHORITY_SEED, market_key.as_ref()], ctx.program_id);

    let market = &mut ctx.accounts.market;
    market.authority = ctx.accounts.authority.key();
    market.next_listing_id = FIRST_LISTING_ID;
    market.confirmation_timeout_secs = confirmation_timeout_secs;
    market.created_at = Clock::get()?.unix_timestamp;
    market.bump = ctx.bumps.market;
    market.authority_bump = authority_bump;

    emit!(MarketInitialized {
        market: market_key,
        authority: market.authority,
        market_authority,
        confirmation_timeout_secs,
    });

    msg!("Market initialized, signing authority {:?}", market_authority);

    Ok(())
}
