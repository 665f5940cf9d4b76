pub const VAULT_SEED: &[u8] = b"vault";
pub const ASSET_SEED: &[u8] = b"asset";
pub const OPERATOR_SEED: &[u8] = b"operator";

pub const FIRST_ASSET_ID: u64 = 1;

// Return data is capped at 1024 bytes, the payload read must fit in it
// alongside the Vec length prefix.
pub const MAX_ENCRYPTED_PAYLOAD_LEN: usize = 1000;

pub const MAX_GAME_ID_LEN: usize = 64;
pub const MAX_METADATA_REF_LEN: usize = 200;
