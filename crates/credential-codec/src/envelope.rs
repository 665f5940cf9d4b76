use serde::{Deserialize, Serialize};

use crate::cipher::{SealedPayload, IV_LEN};
use crate::error::{CodecError, Result};

/// Wire form stored in the vault: `{"iv": "<hex>", "encrypted": "<hex>"}`.
#[derive(Serialize, Deserialize)]
struct Envelope {
    iv: String,
    encrypted: String,
}

impl SealedPayload {
    pub fn to_envelope_bytes(&self) -> Result<Vec<u8>> {
        let envelope = Envelope {
            iv: hex::encode(self.iv),
            encrypted: hex::encode(&self.ciphertext),
        };
        Ok(serde_json::to_vec(&envelope)?)
    }

    pub fn from_envelope_bytes(bytes: &[u8]) -> Result<Self> {
        let envelope: Envelope = serde_json::from_slice(bytes)?;

        let iv_bytes = hex::decode(&envelope.iv)?;
        let iv: [u8; IV_LEN] = iv_bytes
            .as_slice()
            .try_into()
            .map_err(|_| CodecError::IvLength {
                expected: IV_LEN,
                actual: iv_bytes.len(),
            })?;

        Ok(Self {
            iv,
            ciphertext: hex::decode(&envelope.encrypted)?,
        })
    }
}
