//! Off-ledger sealing of game-account credentials.
//!
//! Sellers encrypt credentials with a key they hold, mint the resulting
//! envelope into the credential vault, and hand the key to the buyer off
//! the ledger. The vault only ever stores the opaque envelope.
//!
//! Payloads are sealed with AES-256-GCM under a fresh random IV per call,
//! so tampering or a wrong key fails closed with [`CodecError::Integrity`].

mod cipher;
mod credentials;
mod envelope;
mod error;
mod key;

pub use cipher::{decrypt, encrypt, SealedPayload, IV_LEN};
pub use credentials::{open_credentials, seal_credentials, GameCredentials};
pub use error::{CodecError, Result};
pub use key::{CredentialKey, KEY_LEN};
