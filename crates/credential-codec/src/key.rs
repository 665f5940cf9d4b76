use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CodecError, Result};

pub const KEY_LEN: usize = 32;

/// 256-bit symmetric credential key.
///
/// Custody is the caller's problem: the key never goes to the vault.
/// Zeroized on drop; `Debug` is redacted.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CredentialKey([u8; KEY_LEN]);

impl CredentialKey {
    /// Draws a fresh key from the operating system CSPRNG.
    pub fn generate() -> Result<Self> {
        let mut bytes = [0u8; KEY_LEN];
        getrandom::getrandom(&mut bytes).map_err(CodecError::Random)?;
        Ok(Self(bytes))
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for CredentialKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
