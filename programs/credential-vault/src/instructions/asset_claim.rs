use anchor_lang::prelude::*;

use crate::constants::ASSET_SEED;
use crate::events::CredentialsClaimed;
use crate::state::Asset;

#[derive(Accounts)]
pub struct ClaimCredentials<'info> {
    /// Current owner taking credential access
    pub claimer: Signer<'info>,

    #[account(
        mut,
        seeds = [ASSET_SEED, asset.vault.as_ref(), &asset.id.to_le_bytes()],
        bump = asset.bump,
    )]
    pub asset: Box<Account<'info, Asset>>,
}

pub fn claim_credentials(ctx: Context<ClaimCredentials>) -> Result<()> {
    let claimer = ctx.accounts.claimer.key();
    let asset = &mut ctx.accounts.asset;
    asset.claim_by_owner(&claimer)?;

    emit!(CredentialsClaimed {
        asset_id: asset.id,
        claimer,
    });

    msg!("Asset {} claimed by {:?}", asset.id, claimer);

    Ok(())
}
