use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Not authorized")]
    Unauthorized,

    #[msg("Asset does not belong to this vault")]
    AssetNotFound,

    #[msg("Already claimed")]
    AlreadyClaimed,

    #[msg("Asset is locked in an active sale")]
    AssetLocked,

    #[msg("Marketplace authority is already bound")]
    MarketplaceAlreadyBound,

    #[msg("Encrypted payload cannot be empty")]
    EmptyPayload,

    #[msg("Encrypted payload exceeds maximum length")]
    PayloadTooLarge,

    #[msg("Game id cannot be empty")]
    GameIdEmpty,

    #[msg("Game id exceeds maximum length")]
    GameIdTooLong,

    #[msg("Metadata reference exceeds maximum length")]
    MetadataTooLong,

    #[msg("Asset id space exhausted")]
    IdOverflow,
}
