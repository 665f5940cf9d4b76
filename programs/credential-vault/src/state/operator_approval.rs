use anchor_lang::prelude::*;

/// Blanket approval of `operator` over every asset `owner` holds in `vault`.
#[account]
#[derive(InitSpace)]
pub struct OperatorApproval {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub operator: Pubkey,
    pub approved: bool,
    pub bump: u8,
}

impl OperatorApproval {
    pub fn grants(&self, vault: &Pubkey, owner: &Pubkey, operator: &Pubkey) -> bool {
        self.approved && self.vault == *vault && self.owner == *owner && self.operator == *operator
    }
}
