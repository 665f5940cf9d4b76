use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

pub use instructions::*;
pub use state::{DisputeRuling, Listing};

declare_id!("APVcSfGEoKCCFt3sqVxKyikvX9guUphSpreoMAmHYYpz");

#[program]
pub mod account_marketplace {
    use super::*;

    pub fn initialize_market(
        ctx: Context<InitializeMarket>,
        confirmation_timeout_secs: Option<i64>,
    ) -> Result<()> {
        instructions::initialize_market(ctx, confirmation_timeout_secs)
    }

    pub fn list_account(
        ctx: Context<ListAccount>,
        price: u64,
        seller_contact: String,
    ) -> Result<u64> {
        instructions::list_account(ctx, price, seller_contact)
    }

    pub fn buy_account(ctx: Context<BuyAccount>, payment_amount: u64) -> Result<()> {
        instructions::buy_account(ctx, payment_amount)
    }

    pub fn confirm_receipt_and_claim(ctx: Context<ConfirmReceiptAndClaim>) -> Result<()> {
        instructions::confirm_receipt_and_claim(ctx)
    }

    pub fn cancel_listing(ctx: Context<CancelListing>) -> Result<()> {
        instructions::cancel_listing(ctx)
    }

    pub fn initiate_dispute(ctx: Context<InitiateDispute>) -> Result<()> {
        instructions::initiate_dispute(ctx)
    }

    pub fn expire_purchase(ctx: Context<ExpirePurchase>) -> Result<()> {
        instructions::expire_purchase(ctx)
    }

    pub fn resolve_dispute(ctx: Context<ResolveDispute>, ruling: DisputeRuling) -> Result<()> {
        instructions::resolve_dispute(ctx, ruling)
    }

    pub fn get_listing(ctx: Context<GetListing>) -> Result<Listing> {
        instructions::get_listing(ctx)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use anchor_lang::error::Error;

    pub(crate) fn error_code(err: Error) -> u32 {
        match err {
            Error::AnchorError(err) => err.error_code_number,
            Error::ProgramError(err) => panic!("expected an anchor error, got {err:?}"),
        }
    }
}
