use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("system random source unavailable: {0}")]
    Random(getrandom::Error),

    #[error("encryption failed")]
    Encrypt,

    /// Wrong key, wrong iv, or a tampered ciphertext. Never accompanied by
    /// partial plaintext.
    #[error("ciphertext failed integrity check")]
    Integrity,

    #[error("malformed envelope: {0}")]
    Envelope(#[from] serde_json::Error),

    #[error("malformed hex field: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("iv must be {expected} bytes, got {actual}")]
    IvLength { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;
