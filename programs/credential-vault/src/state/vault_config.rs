use anchor_lang::prelude::*;

use crate::errors::VaultError;

/// Registry root. Every asset minted through this vault records its key.
#[account]
#[derive(InitSpace)]
pub struct VaultConfig {
    pub authority: Pubkey,

    /// Signing capability of the marketplace allowed to run the sale hooks.
    pub marketplace_authority: Option<Pubkey>,

    pub next_asset_id: u64,
    pub created_at: i64,
    pub bump: u8,
}

impl VaultConfig {
    pub fn is_marketplace(&self, key: &Pubkey) -> bool {
        self.marketplace_authority.as_ref() == Some(key)
    }

    /// One-time binding. Replacing an existing binding goes through
    /// [`VaultConfig::rebind_marketplace`].
    pub fn bind_marketplace(&mut self, marketplace_authority: Pubkey) -> Result<()> {
        require!(
            self.marketplace_authority.is_none(),
            VaultError::MarketplaceAlreadyBound
        );
        self.marketplace_authority = Some(marketplace_authority);
        Ok(())
    }

    pub fn rebind_marketplace(&mut self, marketplace_authority: Pubkey) -> Option<Pubkey> {
        self.marketplace_authority.replace(marketplace_authority)
    }

    pub fn allocate_asset_id(&mut self) -> Result<u64> {
        let id = self.next_asset_id;
        self.next_asset_id = id.checked_add(1).ok_or(VaultError::IdOverflow)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIRST_ASSET_ID;
    use crate::test_utils::error_code;

    fn vault() -> VaultConfig {
        VaultConfig {
            authority: Pubkey::new_unique(),
            marketplace_authority: None,
            next_asset_id: FIRST_ASSET_ID,
            created_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn asset_ids_are_monotonic_from_one() {
        let mut vault = vault();
        assert_eq!(vault.allocate_asset_id().unwrap(), 1);
        assert_eq!(vault.allocate_asset_id().unwrap(), 2);
        assert_eq!(vault.next_asset_id, 3);
    }

    #[test]
    fn asset_id_overflow_is_rejected() {
        let mut vault = vault();
        vault.next_asset_id = u64::MAX;
        let err = vault.allocate_asset_id().unwrap_err();
        assert_eq!(error_code(err), u32::from(VaultError::IdOverflow));
        assert_eq!(vault.next_asset_id, u64::MAX);
    }

    #[test]
    fn marketplace_binds_once() {
        let mut vault = vault();
        let first = Pubkey::new_unique();
        vault.bind_marketplace(first).unwrap();
        assert!(vault.is_marketplace(&first));

        let err = vault.bind_marketplace(Pubkey::new_unique()).unwrap_err();
        assert_eq!(error_code(err), u32::from(VaultError::MarketplaceAlreadyBound));
        assert!(vault.is_marketplace(&first));
    }

    #[test]
    fn explicit_rebind_replaces_binding() {
        let mut vault = vault();
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        assert_eq!(vault.rebind_marketplace(first), None);
        assert_eq!(vault.rebind_marketplace(second), Some(first));
        assert!(!vault.is_marketplace(&first));
        assert!(vault.is_marketplace(&second));
    }
}
