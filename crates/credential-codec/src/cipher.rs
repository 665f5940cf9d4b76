use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use zeroize::Zeroizing;

use crate::error::{CodecError, Result};
use crate::key::CredentialKey;

/// GCM's standard 96-bit nonce, stored as the envelope IV.
pub const IV_LEN: usize = 12;

/// Ciphertext plus the IV it was sealed under. The ciphertext carries the
/// 16-byte authentication tag at its end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SealedPayload {
    pub iv: [u8; IV_LEN],
    pub ciphertext: Vec<u8>,
}

fn cipher_for(key: &CredentialKey) -> Aes256Gcm {
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()))
}

/// Seals `plaintext` under a fresh random IV. Two calls on the same input
/// produce different ciphertexts.
pub fn encrypt(plaintext: &[u8], key: &CredentialKey) -> Result<SealedPayload> {
    let mut iv = [0u8; IV_LEN];
    getrandom::getrandom(&mut iv).map_err(CodecError::Random)?;

    let ciphertext = cipher_for(key)
        .encrypt(Nonce::from_slice(&iv), plaintext)
        .map_err(|_| CodecError::Encrypt)?;

    tracing::debug!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "sealed payload"
    );

    Ok(SealedPayload { iv, ciphertext })
}

/// Opens a sealed payload. Any key, IV or ciphertext mismatch yields
/// [`CodecError::Integrity`].
pub fn decrypt(sealed: &SealedPayload, key: &CredentialKey) -> Result<Zeroizing<Vec<u8>>> {
    let plaintext = cipher_for(key)
        .decrypt(Nonce::from_slice(&sealed.iv), sealed.ciphertext.as_slice())
        .map_err(|_| {
            tracing::debug!("payload failed integrity check");
            CodecError::Integrity
        })?;

    Ok(Zeroizing::new(plaintext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> CredentialKey {
        CredentialKey::generate().unwrap()
    }

    #[test]
    fn round_trip() {
        let key = key();
        let sealed = encrypt(b"player@game.com:secure123!", &key).unwrap();
        let opened = decrypt(&sealed, &key).unwrap();
        assert_eq!(opened.as_slice(), b"player@game.com:secure123!");
    }

    #[test]
    fn empty_plaintext_round_trips() {
        let key = key();
        let sealed = encrypt(b"", &key).unwrap();
        assert_eq!(sealed.ciphertext.len(), 16);
        assert!(decrypt(&sealed, &key).unwrap().is_empty());
    }

    #[test]
    fn encryption_is_not_deterministic() {
        let key = key();
        let a = encrypt(b"same input", &key).unwrap();
        let b = encrypt(b"same input", &key).unwrap();
        assert_ne!(a.iv, b.iv);
        assert_ne!(a.ciphertext, b.ciphertext);
    }

    #[test]
    fn wrong_key_fails_closed() {
        let sealed = encrypt(b"secret", &key()).unwrap();
        assert!(matches!(decrypt(&sealed, &key()), Err(CodecError::Integrity)));
    }

    #[test]
    fn tampered_ciphertext_fails_closed() {
        let key = key();
        let mut sealed = encrypt(b"secret", &key).unwrap();
        sealed.ciphertext[0] ^= 0x01;
        assert!(matches!(decrypt(&sealed, &key), Err(CodecError::Integrity)));
    }

    #[test]
    fn tampered_iv_fails_closed() {
        let key = key();
        let mut sealed = encrypt(b"secret", &key).unwrap();
        sealed.iv[IV_LEN - 1] ^= 0x80;
        assert!(matches!(decrypt(&sealed, &key), Err(CodecError::Integrity)));
    }

    #[test]
    fn truncated_ciphertext_fails_closed() {
        let key = key();
        let mut sealed = encrypt(b"secret", &key).unwrap();
        sealed.ciphertext.truncate(4);
        assert!(matches!(decrypt(&sealed, &key), Err(CodecError::Integrity)));
    }
}
