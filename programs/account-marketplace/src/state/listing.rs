use anchor_lang::prelude::*;
use credential_vault::state::Asset;

use crate::constants::{MAX_SELLER_CONTACT_LEN, MIN_LISTING_PRICE_LAMPORTS};
use crate::errors::MarketplaceError;

/// Fixed-price offer for one vault asset.
///
/// The listing only references the asset by `(vault, asset_id)`; ownership
/// moves through the vault's marketplace hooks at settlement.
#[account]
#[derive(InitSpace)]
pub struct Listing {
    pub id: u64,

    pub market: Pubkey,

    /// Registry holding the asset
    pub vault: Pubkey,

    /// Asset account address and its id inside the vault
    pub asset: Pubkey,
    pub asset_id: u64,

    /// Seller who receives payment
    pub seller: Pubkey,

    /// Sale price in lamports, fixed at creation
    pub price: u64,

    #[max_len(64)]
    pub seller_contact: String,

    pub status: ListingStatus,

    pub buyer: Option<Pubkey>,

    /// Lamports held in the listing escrow
    pub escrowed_amount: u64,

    pub created_at: i64,

    /// Purchase timestamp, drives the confirmation timeout
    pub purchased_at: Option<i64>,

    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum ListingStatus {
    Active,              // For sale
    PendingConfirmation, // Paid, awaiting buyer confirmation
    Sold,
    Cancelled,
    Disputed,            // Buyer raised a dispute, arbiter decides
}

impl Default for ListingStatus {
    fn default() -> Self {
        ListingStatus::Active
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisputeRuling {
    /// Complete the sale as if the buyer had confirmed
    ReleaseToSeller,
    /// Return the escrow to the buyer and end the listing
    RefundBuyer,
}

impl Listing {
    pub fn validate_terms(price: u64, seller_contact: &str) -> Result<()> {
        require!(
            price >= MIN_LISTING_PRICE_LAMPORTS,
            MarketplaceError::PriceTooLow
        );
        require!(
            seller_contact.len() <= MAX_SELLER_CONTACT_LEN,
            MarketplaceError::ContactTooLong
        );
        Ok(())
    }

    /// `market_approved` is whether the market's signing PDA holds a
    /// per-asset or blanket approval from the seller.
    pub fn check_listable(asset: &Asset, seller: &Pubkey, market_approved: bool) -> Result<()> {
        require_keys_eq!(asset.owner, *seller, MarketplaceError::Unauthorized);
        require!(market_approved, MarketplaceError::MarketplaceNotApproved);
        require!(!asset.is_claimed, MarketplaceError::AssetAlreadyClaimed);
        require!(!asset.sale_locked, MarketplaceError::AssetLocked);
        Ok(())
    }

    /// The asset must still be in the state it was listed in: held by the
    /// seller, unclaimed and not under another sale.
    pub fn check_purchasable(&self, asset: &Asset) -> Result<()> {
        require_keys_eq!(asset.owner, self.seller, MarketplaceError::SellerNotOwner);
        require!(!asset.is_claimed, MarketplaceError::AssetAlreadyClaimed);
        require!(!asset.sale_locked, MarketplaceError::AssetLocked);
        Ok(())
    }

    pub fn is_buyer(&self, key: &Pubkey) -> bool {
        self.buyer.as_ref() == Some(key)
    }

    /// Active -> PendingConfirmation. The payment must match the price
    /// exactly.
    pub fn record_purchase(&mut self, buyer: Pubkey, payment_amount: u64, now: i64) -> Result<()> {
        require!(
            self.status == ListingStatus::Active,
            MarketplaceError::ListingNotActive
        );
        require!(payment_amount == self.price, MarketplaceError::WrongAmount);

        self.buyer = Some(buyer);
        self.escrowed_amount = payment_amount;
        self.purchased_at = Some(now);
        self.status = ListingStatus::PendingConfirmation;
        Ok(())
    }

    /// PendingConfirmation -> Sold. Returns the amount owed to the seller.
    pub fn confirm(&mut self, caller: &Pubkey) -> Result<u64> {
        require!(self.is_buyer(caller), MarketplaceError::Unauthorized);
        require!(
            self.status == ListingStatus::PendingConfirmation,
            MarketplaceError::ListingNotPending
        );
        Ok(self.release_to_seller())
    }

    /// Active -> Cancelled. Nothing is escrowed yet so no funds move.
    pub fn cancel(&mut self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.seller, *caller, MarketplaceError::Unauthorized);
        require!(
            self.status == ListingStatus::Active,
            MarketplaceError::ListingNotActive
        );
        self.status = ListingStatus::Cancelled;
        Ok(())
    }

    /// PendingConfirmation -> Disputed. Escrow and ownership stay put.
    pub fn dispute(&mut self, caller: &Pubkey) -> Result<()> {
        require!(self.is_buyer(caller), MarketplaceError::Unauthorized);
        require!(
            self.status == ListingStatus::PendingConfirmation,
            MarketplaceError::ListingNotPending
        );
        self.status = ListingStatus::Disputed;
        Ok(())
    }

    /// PendingConfirmation -> Active once the confirmation window has
    /// elapsed. Returns the buyer and the refund owed to them.
    pub fn expire(
        &mut self,
        caller: &Pubkey,
        now: i64,
        timeout_secs: i64,
    ) -> Result<(Pubkey, u64)> {
        require_keys_eq!(self.seller, *caller, MarketplaceError::Unauthorized);
        require!(
            self.status == ListingStatus::PendingConfirmation,
            MarketplaceError::ListingNotPending
        );
        let (Some(buyer), Some(purchased_at)) = (self.buyer, self.purchased_at) else {
            return err!(MarketplaceError::ListingNotPending);
        };
        require!(
            now >= purchased_at.saturating_add(timeout_secs),
            MarketplaceError::ConfirmationWindowOpen
        );

        let refund = self.take_escrow();
        self.buyer = None;
        self.purchased_at = None;
        self.status = ListingStatus::Active;
        Ok((buyer, refund))
    }

    /// Disputed -> Sold or Cancelled. Returns the escrow amount paid out.
    pub fn resolve(&mut self, ruling: DisputeRuling) -> Result<u64> {
        require!(
            self.status == ListingStatus::Disputed,
            MarketplaceError::ListingNotDisputed
        );
        match ruling {
            DisputeRuling::ReleaseToSeller => Ok(self.release_to_seller()),
            DisputeRuling::RefundBuyer => {
                self.status = ListingStatus::Cancelled;
                Ok(self.take_escrow())
            }
        }
    }

    /// Escrow is only ever held while a sale is pending or disputed.
    pub fn escrow_consistent(&self) -> bool {
        let holds_escrow = matches!(
            self.status,
            ListingStatus::PendingConfirmation | ListingStatus::Disputed
        );
        (self.escrowed_amount == 0 || holds_escrow)
            && (self.status != ListingStatus::Sold || self.escrowed_amount == 0)
    }

    fn release_to_seller(&mut self) -> u64 {
        self.status = ListingStatus::Sold;
        self.take_escrow()
    }

    fn take_escrow(&mut self) -> u64 {
        std::mem::take(&mut self.escrowed_amount)
    }
}
