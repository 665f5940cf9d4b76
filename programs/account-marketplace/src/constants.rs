pub const MARKET_SEED: &[u8] = b"market";
pub const MARKET_AUTHORITY_SEED: &[u8] = b"market_authority";
pub const LISTING_SEED: &[u8] = b"listing";
pub const ESCROW_SEED: &[u8] = b"escrow";

pub const FIRST_LISTING_ID: u64 = 1;

pub const DEFAULT_CONFIRMATION_TIMEOUT_SECONDS: i64 = 86400; // 24 hours
pub const MIN_CONFIRMATION_TIMEOUT_SECONDS: i64 = 3600;
pub const MAX_CONFIRMATION_TIMEOUT_SECONDS: i64 = 30 * 86400;

// Escrow is a data-less system account, the first deposit must cover its
// rent-exempt minimum.
pub const MIN_LISTING_PRICE_LAMPORTS: u64 = 1_000_000;

pub const MAX_SELLER_CONTACT_LEN: usize = 64;
