use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::errors::VaultError;
use crate::events::{AssetSaleLockChanged, AssetTransferred, CredentialsClaimed};
use crate::state::{Asset, VaultConfig};

/// Accounts for the hooks reserved to the bound marketplace.
#[derive(Accounts)]
pub struct MarketplaceHook<'info> {
    /// Marketplace signing PDA bound through `set_marketplace_authority`
    pub marketplace_authority: Signer<'info>,

    #[account(
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump,
        constraint = vault.is_marketplace(&marketplace_authority.key()) @ VaultError::Unauthorized
    )]
    pub vault: Account<'info, VaultConfig>,

    #[account(
        mut,
        has_one = vault @ VaultError::AssetNotFound
    )]
    pub asset: Box<Account<'info, Asset>>,
}

/// Lock or unlock the asset for a sale in progress.
pub fn marketplace_lock(ctx: Context<MarketplaceHook>, locked: bool) -> Result<()> {
    let asset = &mut ctx.accounts.asset;
    asset.set_sale_lock(locked)?;

    emit!(AssetSaleLockChanged {
        asset_id: asset.id,
        locked,
    });

    msg!("Asset {} sale lock: {}", asset.id, locked);

    Ok(())
}

/// Settlement transfer. Moves ownership only; the claim is a separate hook.
pub fn marketplace_transfer(
    ctx: Context<MarketplaceHook>,
    from: Pubkey,
    to: Pubkey,
) -> Result<()> {
    let asset = &mut ctx.accounts.asset;
    asset.transfer_for_sale(&from, to)?;

    emit!(AssetTransferred {
        asset_id: asset.id,
        from,
        to,
        via_marketplace: true,
    });

    msg!("Asset {} sold {:?} -> {:?}", asset.id, from, to);

    Ok(())
}

/// Claim on behalf of the new owner after a settled sale.
pub fn marketplace_claim(ctx: Context<MarketplaceHook>, claimer: Pubkey) -> Result<()> {
    let asset = &mut ctx.accounts.asset;
    asset.claim_by_owner(&claimer)?;

    emit!(CredentialsClaimed {
        asset_id: asset.id,
        claimer,
    });

    msg!("Asset {} claimed by {:?} at settlement", asset.id, claimer);

    Ok(())
}
