use anchor_lang::prelude::*;

use crate::constants::ASSET_SEED;
use crate::state::{Asset, AssetDetails};

#[derive(Accounts)]
pub struct GetAssetDetails<'info> {
    #[account(
        seeds = [ASSET_SEED, asset.vault.as_ref(), &asset.id.to_le_bytes()],
        bump = asset.bump,
    )]
    pub asset: Box<Account<'info, Asset>>,
}

pub fn get_asset_details(ctx: Context<GetAssetDetails>) -> Result<AssetDetails> {
    Ok(ctx.accounts.asset.details())
}

#[derive(Accounts)]
pub struct GetEncryptedPayload<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [ASSET_SEED, asset.vault.as_ref(), &asset.id.to_le_bytes()],
        bump = asset.bump,
    )]
    pub asset: Box<Account<'info, Asset>>,
}

/// Returns the envelope stored at mint. Only the owner or the recorded
/// claimer may read it.
pub fn get_encrypted_payload(ctx: Context<GetEncryptedPayload>) -> Result<Vec<u8>> {
    let payload = ctx.accounts.asset.payload_for(ctx.accounts.caller.key)?;
    Ok(payload.to_vec())
}
