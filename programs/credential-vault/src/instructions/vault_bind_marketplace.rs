use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::errors::VaultError;
use crate::events::MarketplaceAuthoritySet;
use crate::state::VaultConfig;

#[derive(Accounts)]
pub struct ConfigureMarketplace<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, authority.key().as_ref()],
        bump = vault.bump,
        has_one = authority @ VaultError::Unauthorized
    )]
    pub vault: Account<'info, VaultConfig>,
}

/// Grant the sale hooks to `marketplace_authority`. Fails if a marketplace
/// is already bound.
pub fn set_marketplace_authority(
    ctx: Context<ConfigureMarketplace>,
    marketplace_authority: Pubkey,
) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    vault.bind_marketplace(marketplace_authority)?;

    emit!(MarketplaceAuthoritySet {
        vault: vault.key(),
        previous: None,
        marketplace_authority,
    });

    msg!("Marketplace authority bound: {:?}", marketplace_authority);

    Ok(())
}

/// Explicit replacement of the bound marketplace.
pub fn rebind_marketplace_authority(
    ctx: Context<ConfigureMarketplace>,
    marketplace_authority: Pubkey,
) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    let previous = vault.rebind_marketplace(marketplace_authority);

    emit!(MarketplaceAuthoritySet {
        vault: vault.key(),
        previous,
        marketplace_authority,
    });

    msg!(
        "Marketplace authority rebound: {:?} -> {:?}",
        previous,
        marketplace_authority
    );

    Ok(())
}
