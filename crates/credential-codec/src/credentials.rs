use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::cipher::{decrypt, encrypt, SealedPayload};
use crate::error::Result;
use crate::key::CredentialKey;

/// Login for the game account being sold.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct GameCredentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for GameCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// JSON-encodes and seals the credentials.
pub fn seal_credentials(
    credentials: &GameCredentials,
    key: &CredentialKey,
) -> Result<SealedPayload> {
    let plaintext = Zeroizing::new(serde_json::to_vec(credentials)?);
    encrypt(&plaintext, key)
}

pub fn open_credentials(sealed: &SealedPayload, key: &CredentialKey) -> Result<GameCredentials> {
    let plaintext = decrypt(sealed, key)?;
    Ok(serde_json::from_slice(&plaintext)?)
}
