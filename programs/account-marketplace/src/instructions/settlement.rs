//! Shared settlement plumbing: vault hook CPIs signed by the market PDA and
//! escrow payouts signed by the listing's escrow PDA.

use anchor_lang::prelude::*;
use credential_vault::cpi::accounts::MarketplaceHook;
use credential_vault::program::CredentialVault;
use credential_vault::state::{Asset, VaultConfig};

use crate::constants::{ESCROW_SEED, MARKET_AUTHORITY_SEED};

pub(crate) struct VaultHooks<'info> {
    vault_program: AccountInfo<'info>,
    market_authority: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    asset: AccountInfo<'info>,
    market: Pubkey,
    authority_bump: u8,
}

impl<'info> VaultHooks<'info> {
    pub(crate) fn new(
        vault_program: &Program<'info, CredentialVault>,
        market_authority: &UncheckedAccount<'info>,
        vault: &Account<'info, VaultConfig>,
        asset: &Account<'info, Asset>,
        market: Pubkey,
        authority_bump: u8,
    ) -> Self {
        Self {
            vault_program: vault_program.to_account_info(),
            market_authority: market_authority.to_account_info(),
            vault: vault.to_account_info(),
            asset: asset.to_account_info(),
            market,
            authority_bump,
        }
    }

    fn accounts(&self) -> MarketplaceHook<'info> {
        MarketplaceHook {
            marketplace_authority: self.market_authority.clone(),
            vault: self.vault.clone(),
            asset: self.asset.clone(),
        }
    }

    pub(crate) fn lock(&self, locked: bool) -> Result<()> {
        let bump = [self.authority_bump];
        let seeds: &[&[u8]] = &[MARKET_AUTHORITY_SEED, self.market.as_ref(), &bump];
        credential_vault::cpi::marketplace_lock(
            CpiContext::new_with_signer(self.vault_program.clone(), self.accounts(), &[seeds]),
            locked,
        )
    }

    pub(crate) fn transfer(&self, from: Pubkey, to: Pubkey) -> Result<()> {
        let bump = [self.authority_bump];
        let seeds: &[&[u8]] = &[MARKET_AUTHORITY_SEED, self.market.as_ref(), &bump];
        credential_vault::cpi::marketplace_transfer(
            CpiContext::new_with_signer(self.vault_program.clone(), self.accounts(), &[seeds]),
            from,
            to,
        )
    }

    pub(crate) fn claim(&self, claimer: Pubkey) -> Result<()> {
        let bump = [self.authority_bump];
        let seeds: &[&[u8]] = &[MARKET_AUTHORITY_SEED, self.market.as_ref(), &bump];
        credential_vault::cpi::marketplace_claim(
            CpiContext::new_with_signer(self.vault_program.clone(), self.accounts(), &[seeds]),
            claimer,
        )
    }
}

/// Move `amount` lamports out of the listing escrow.
pub(crate) fn pay_out_escrow<'info>(
    system_program: &Program<'info, System>,
    escrow: &SystemAccount<'info>,
    to: AccountInfo<'info>,
    listing: &Pubkey,
    escrow_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let escrow_seeds: &[&[u8]] = &[ESCROW_SEED, listing.as_ref(), &[escrow_bump]];

    anchor_lang::system_program::transfer(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: escrow.to_account_info(),
                to,
            },
            &[escrow_seeds],
        ),
        amount,
    )?;

    msg!("Paid {} lamports out of escrow", amount);

    Ok(())
}
