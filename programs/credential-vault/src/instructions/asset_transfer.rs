use anchor_lang::prelude::*;

use crate::constants::ASSET_SEED;
use crate::events::AssetTransferred;
use crate::state::{Asset, OperatorApproval};

#[derive(Accounts)]
pub struct TransferAsset<'info> {
    /// Owner, per-asset agent, or blanket operator
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [ASSET_SEED, asset.vault.as_ref(), &asset.id.to_le_bytes()],
        bump = asset.bump,
    )]
    pub asset: Box<Account<'info, Asset>>,

    /// Blanket approval held by `caller`, if any
    pub operator_approval: Option<Account<'info, OperatorApproval>>,
}

/// Transfer outside the marketplace. Claim state is untouched; the new
/// owner still has to claim explicitly.
pub fn transfer_asset(ctx: Context<TransferAsset>, new_owner: Pubkey) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let asset = &mut ctx.accounts.asset;

    let blanket = ctx
        .accounts
        .operator_approval
        .as_ref()
        .is_some_and(|approval| approval.grants(&asset.vault, &asset.owner, &caller));

    let from = asset.transfer_from_owner(&caller, blanket, new_owner)?;

    emit!(AssetTransferred {
        asset_id: asset.id,
        from,
        to: new_owner,
        via_marketplace: false,
    });

    msg!("Asset {} transferred {:?} -> {:?}", asset.id, from, new_owner);

    Ok(())
}
