use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::AssetMinted;
use crate::state::{Asset, VaultConfig};

#[derive(Accounts)]
pub struct MintAsset<'info> {
    /// Seller minting the asset, becomes its owner
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, VaultConfig>,

    #[account(
        init,
        payer = owner,
        space = 8 + Asset::INIT_SPACE,
        seeds = [ASSET_SEED, vault.key().as_ref(), &vault.next_asset_id.to_le_bytes()],
        bump
    )]
    pub asset: Box<Account<'info, Asset>>,

    pub system_program: Program<'info, System>,
}

/// Mint a new asset holding an already-encrypted credential envelope.
///
/// # Operations
/// 1. Validate payload, game id and metadata sizes
/// 2. Allocate the next asset id
/// 3. Initialize the asset unclaimed and unlocked, owned by the signer
pub fn mint_asset(
    ctx: Context<MintAsset>,
    encrypted_payload: Vec<u8>,
    game_id: String,
    listing_price: u64,
    metadata_ref: String,
) -> Result<u64> {
    Asset::validate_mint_fields(&encrypted_payload, &game_id, &metadata_ref)?;

    let vault_key = ctx.accounts.vault.key();
    let asset_id = ctx.accounts.vault.allocate_asset_id()?;
    let owner = ctx.accounts.owner.key();

    let asset = &mut ctx.accounts.asset;
    asset.id = asset_id;
    asset.vault = vault_key;
    asset.owner = owner;
    asset.approved = None;
    asset.encrypted_payload = encrypted_payload;
    asset.game_id = game_id.clone();
    asset.listing_price = listing_price;
    asset.metadata_ref = metadata_ref;
    asset.is_claimed = false;
    asset.claimer = None;
    asset.sale_locked = false;
    asset.minted_at = Clock::get()?.unix_timestamp;
    asset.bump = ctx.bumps.asset;

    emit!(AssetMinted {
        vault: vault_key,
        asset: asset.key(),
        asset_id,
        owner,
        game_id,
        listing_price,
    });

    msg!("Asset {} minted for {:?}", asset_id, owner);

    Ok(asset_id)
}
