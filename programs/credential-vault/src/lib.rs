use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

pub use instructions::*;
pub use state::AssetDetails;

declare_id!("2F3ndWXhoaFbdnV8fmfPCzXsB7PpRvDpZsfQsZPo9RLM");

#[program]
pub mod credential_vault {
    use super::*;

    pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
        instructions::initialize_vault(ctx)
    }

    pub fn set_marketplace_authority(
        ctx: Context<ConfigureMarketplace>,
        marketplace_authority: Pubkey,
    ) -> Result<()> {
        instructions::set_marketplace_authority(ctx, marketplace_authority)
    }

    pub fn rebind_marketplace_authority(
        ctx: Context<ConfigureMarketplace>,
        marketplace_authority: Pubkey,
    ) -> Result<()> {
        instructions::rebind_marketplace_authority(ctx, marketplace_authority)
    }

    pub fn mint_asset(
        ctx: Context<MintAsset>,
        encrypted_payload: Vec<u8>,
        game_id: String,
        listing_price: u64,
        metadata_ref: String,
    ) -> Result<u64> {
        instructions::mint_asset(ctx, encrypted_payload, game_id, listing_price, metadata_ref)
    }

    pub fn get_asset_details(ctx: Context<GetAssetDetails>) -> Result<AssetDetails> {
        instructions::get_asset_details(ctx)
    }

    pub fn get_encrypted_payload(ctx: Context<GetEncryptedPayload>) -> Result<Vec<u8>> {
        instructions::get_encrypted_payload(ctx)
    }

    pub fn update_listing_price(ctx: Context<UpdateListingPrice>, new_price: u64) -> Result<()> {
        instructions::update_listing_price(ctx, new_price)
    }

    pub fn claim_credentials(ctx: Context<ClaimCredentials>) -> Result<()> {
        instructions::claim_credentials(ctx)
    }

    pub fn approve(ctx: Context<ApproveAsset>, operator: Option<Pubkey>) -> Result<()> {
        instructions::approve(ctx, operator)
    }

    pub fn set_approval_for_all(
        ctx: Context<SetApprovalForAll>,
        operator: Pubkey,
        approved: bool,
    ) -> Result<()> {
        instructions::set_approval_for_all(ctx, operator, approved)
    }

    pub fn transfer_asset(ctx: Context<TransferAsset>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_asset(ctx, new_owner)
    }

    pub fn marketplace_lock(ctx: Context<MarketplaceHook>, locked: bool) -> Result<()> {
        instructions::marketplace_lock(ctx, locked)
    }

    pub fn marketplace_transfer(
        ctx: Context<MarketplaceHook>,
        from: Pubkey,
        to: Pubkey,
    ) -> Result<()> {
        instructions::marketplace_transfer(ctx, from, to)
    }

    pub fn marketplace_claim(ctx: Context<MarketplaceHook>, claimer: Pubkey) -> Result<()> {
        instructions::marketplace_claim(ctx, claimer)
    }
}
