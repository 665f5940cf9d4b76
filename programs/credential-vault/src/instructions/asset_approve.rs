use anchor_lang::prelude::*;

use crate::constants::{ASSET_SEED, OPERATOR_SEED, VAULT_SEED};
use crate::events::{AssetApproved, OperatorApprovalSet};
use crate::state::{Asset, OperatorApproval, VaultConfig};

#[derive(Accounts)]
pub struct ApproveAsset<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [ASSET_SEED, asset.vault.as_ref(), &asset.id.to_le_bytes()],
        bump = asset.bump,
    )]
    pub asset: Box<Account<'info, Asset>>,
}

/// Set or clear the per-asset transfer agent.
pub fn approve(ctx: Context<ApproveAsset>, operator: Option<Pubkey>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let asset = &mut ctx.accounts.asset;
    asset.approve(&owner, operator)?;

    emit!(AssetApproved {
        asset_id: asset.id,
        owner,
        operator,
    });

    msg!("Asset {} approval set to {:?}", asset.id, operator);

    Ok(())
}

#[derive(Accounts)]
#[instruction(operator: Pubkey)]
pub struct SetApprovalForAll<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, VaultConfig>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + OperatorApproval::INIT_SPACE,
        seeds = [OPERATOR_SEED, vault.key().as_ref(), owner.key().as_ref(), operator.as_ref()],
        bump
    )]
    pub operator_approval: Account<'info, OperatorApproval>,

    pub system_program: Program<'info, System>,
}

/// Grant or revoke `operator` as transfer agent for every asset the signer
/// owns in this vault.
pub fn set_approval_for_all(
    ctx: Context<SetApprovalForAll>,
    operator: Pubkey,
    approved: bool,
) -> Result<()> {
    let vault = ctx.accounts.vault.key();
    let owner = ctx.accounts.owner.key();

    let approval = &mut ctx.accounts.operator_approval;
    approval.vault = vault;
    approval.owner = owner;
    approval.operator = operator;
    approval.approved = approved;
    approval.bump = ctx.bumps.operator_approval;

    emit!(OperatorApprovalSet {
        vault,
        owner,
        operator,
        approved,
    });

    msg!("Operator {:?} approval for {:?}: {}", operator, owner, approved);

    Ok(())
}
