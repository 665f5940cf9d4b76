use anchor_lang::prelude::*;

use crate::constants::{MAX_ENCRYPTED_PAYLOAD_LEN, MAX_GAME_ID_LEN, MAX_METADATA_REF_LEN};
use crate::errors::VaultError;

/// A game account packaged as a uniquely owned asset.
///
/// The payload is an opaque ciphertext envelope produced off-ledger; the
/// vault never sees a key. Ownership and credential access are separate:
/// a transfer moves `owner`, only a claim sets `claimer`.
#[account]
#[derive(InitSpace)]
pub struct Asset {
    pub id: u64,

    /// Registry this asset was minted through
    pub vault: Pubkey,

    pub owner: Pubkey,

    /// Per-asset transfer agent, cleared on every ownership change
    pub approved: Option<Pubkey>,

    /// Written once at mint
    #[max_len(1000)]
    pub encrypted_payload: Vec<u8>,

    #[max_len(64)]
    pub game_id: String,

    /// Asking price in lamports
    pub listing_price: u64,

    #[max_len(200)]
    pub metadata_ref: String,

    pub is_claimed: bool,
    pub claimer: Option<Pubkey>,

    /// Set by the marketplace between purchase and settlement
    pub sale_locked: bool,

    pub minted_at: i64,
    pub bump: u8,
}

/// Public view of an asset. Never carries the payload.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AssetDetails {
    pub id: u64,
    pub owner: Pubkey,
    pub game_id: String,
    pub listing_price: u64,
    pub is_claimed: bool,
    pub claimer: Option<Pubkey>,
}

impl Asset {
    pub fn validate_mint_fields(
        encrypted_payload: &[u8],
        game_id: &str,
        metadata_ref: &str,
    ) -> Result<()> {
        require!(!encrypted_payload.is_empty(), VaultError::EmptyPayload);
        require!(
            encrypted_payload.len() <= MAX_ENCRYPTED_PAYLOAD_LEN,
            VaultError::PayloadTooLarge
        );
        require!(!game_id.is_empty(), VaultError::GameIdEmpty);
        require!(game_id.len() <= MAX_GAME_ID_LEN, VaultError::GameIdTooLong);
        require!(
            metadata_ref.len() <= MAX_METADATA_REF_LEN,
            VaultError::MetadataTooLong
        );
        Ok(())
    }

    pub fn details(&self) -> AssetDetails {
        AssetDetails {
            id: self.id,
            owner: self.owner,
            game_id: self.game_id.clone(),
            listing_price: self.listing_price,
            is_claimed: self.is_claimed,
            claimer: self.claimer,
        }
    }

    pub fn can_read_payload(&self, caller: &Pubkey) -> bool {
        self.owner == *caller || self.claimer.as_ref() == Some(caller)
    }

    pub fn payload_for(&self, caller: &Pubkey) -> Result<&[u8]> {
        require!(self.can_read_payload(caller), VaultError::Unauthorized);
        Ok(&self.encrypted_payload)
    }

    pub fn set_listing_price(&mut self, caller: &Pubkey, listing_price: u64) -> Result<()> {
        require_keys_eq!(self.owner, *caller, VaultError::Unauthorized);
        require!(!self.sale_locked, VaultError::AssetLocked);
        self.listing_price = listing_price;
        Ok(())
    }

    /// Exactly once per asset, and only by the current owner. Refused while
    /// a sale is pending; settlement claims after the lock is released.
    pub fn claim_by_owner(&mut self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *caller, VaultError::Unauthorized);
        require!(!self.sale_locked, VaultError::AssetLocked);
        require!(!self.is_claimed, VaultError::AlreadyClaimed);
        self.is_claimed = true;
        self.claimer = Some(*caller);
        Ok(())
    }

    pub fn approve(&mut self, caller: &Pubkey, operator: Option<Pubkey>) -> Result<()> {
        require_keys_eq!(self.owner, *caller, VaultError::Unauthorized);
        self.approved = operator;
        Ok(())
    }

    pub fn is_approved(&self, operator: &Pubkey) -> bool {
        self.approved.as_ref() == Some(operator)
    }

    /// Direct transfer by the owner or an approved agent. `blanket` is
    /// whether `caller` holds an operator approval from the owner.
    pub fn transfer_from_owner(
        &mut self,
        caller: &Pubkey,
        blanket: bool,
        new_owner: Pubkey,
    ) -> Result<Pubkey> {
        require!(
            self.owner == *caller || self.is_approved(caller) || blanket,
            VaultError::Unauthorized
        );
        require!(!self.sale_locked, VaultError::AssetLocked);
        Ok(self.reassign(new_owner))
    }

    /// Sale settlement path. Clears the sale lock along with the approval.
    pub fn transfer_for_sale(&mut self, from: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        require_keys_eq!(self.owner, *from, VaultError::Unauthorized);
        self.sale_locked = false;
        Ok(self.reassign(new_owner))
    }

    pub fn set_sale_lock(&mut self, locked: bool) -> Result<()> {
        if locked {
            require!(!self.sale_locked, VaultError::AssetLocked);
        }
        self.sale_locked = locked;
        Ok(())
    }

    pub fn claim_state_consistent(&self) -> bool {
        self.is_claimed == self.claimer.is_some()
    }

    fn reassign(&mut self, new_owner: Pubkey) -> Pubkey {
        self.approved = None;
        std::mem::replace(&mut self.owner, new_owner)
    }
}
