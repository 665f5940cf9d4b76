use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub authority: Pubkey,
}

#[event]
pub struct MarketplaceAuthoritySet {
    pub vault: Pubkey,
    pub previous: Option<Pubkey>,
    pub marketplace_authority: Pubkey,
}

#[event]
pub struct AssetMinted {
    pub vault: Pubkey,
    pub asset: Pubkey,
    pub asset_id: u64,
    pub owner: Pubkey,
    pub game_id: String,
    pub listing_price: u64,
}

#[event]
pub struct ListingPriceUpdated {
    pub asset_id: u64,
    pub owner: Pubkey,
    pub listing_price: u64,
}

#[event]
pub struct CredentialsClaimed {
    pub asset_id: u64,
    pub claimer: Pubkey,
}

#[event]
pub struct AssetApproved {
    pub asset_id: u64,
    pub owner: Pubkey,
    pub operator: Option<Pubkey>,
}

#[event]
pub struct OperatorApprovalSet {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub operator: Pubkey,
    pub approved: bool,
}

#[event]
pub struct AssetTransferred {
    pub asset_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
    pub via_marketplace: bool,
}

#[event]
pub struct AssetSaleLockChanged {
    pub asset_id: u64,
    pub locked: bool,
}
