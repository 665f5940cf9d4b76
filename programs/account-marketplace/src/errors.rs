use anchor_lang::prelude::*;

#[error_code]
pub enum MarketplaceError {
    #[msg("Not authorized")]
    Unauthorized,

    #[msg("Marketplace is not approved to transfer this asset")]
    MarketplaceNotApproved,

    #[msg("Vault has not bound this marketplace")]
    MarketplaceNotBound,

    #[msg("Asset does not belong to the given vault")]
    AssetNotInVault,

    #[msg("Listing does not belong to this market")]
    ListingNotFound,

    #[msg("Listing is not active")]
    ListingNotActive,

    #[msg("Listing is not awaiting confirmation")]
    ListingNotPending,

    #[msg("Listing is not disputed")]
    ListingNotDisputed,

    #[msg("Asset credentials are already claimed")]
    AssetAlreadyClaimed,

    #[msg("Asset is locked in an active sale")]
    AssetLocked,

    #[msg("Wrong price")]
    WrongAmount,

    #[msg("Price is below the minimum listing price")]
    PriceTooLow,

    #[msg("Seller contact exceeds maximum length")]
    ContactTooLong,

    #[msg("Confirmation timeout is out of range")]
    InvalidTimeout,

    #[msg("Confirmation window has not elapsed")]
    ConfirmationWindowOpen,

    #[msg("Listing id space exhausted")]
    IdOverflow,

    #[msg("Seller no longer owns the listed asset")]
    SellerNotOwner,
}
