use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::error::ErrorCode;
use crate::ledger::YieldVenue;

/// Venue adapter backed by the pool's own SPL token vault.
///
/// Deposits move tokens from the participant into the vault and are issued
/// 1:1. Redemptions move tokens from the vault back to the participant,
/// signed by the pool PDA.
pub struct TokenVaultVenue<'a, 'info> {
    pub token_program: &'a Interface<'info, TokenInterface>,
    pub mint: &'a InterfaceAccount<'info, Mint>,
    pub vault: &'a mut InterfaceAccount<'info, TokenAccount>,
    pub participant_token_account: &'a InterfaceAccount<'info, TokenAccount>,
    pub owner: &'a Signer<'info>,
    pub pool: AccountInfo<'info>,
    pub pool_signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> YieldVenue for TokenVaultVenue<'a, 'info> {
    fn deposit_to_yield_venue(&mut self, amount: u64) -> Result<u64> {
        let before = self.vault.amount;

        transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.participant_token_account.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: self.vault.to_account_info(),
                    authority: self.owner.to_account_info(),
                },
            ),
            amount,
            self.mint.decimals,
        )
        .map_err(|err| {
            msg!("Vault deposit failed: {:?}", err);
            error!(ErrorCode::VenueFailure)
        })?;

        // Mints with transfer fees deliver less than was sent.
        self.vault.reload()?;
        custody_increase(before, self.vault.amount, amount)
    }

    fn withdraw_from_yield_venue(&mut self, amount: u64) -> Result<u64> {
        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.vault.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: self.participant_token_account.to_account_info(),
                    authority: self.pool.clone(),
                },
                self.pool_signer_seeds,
            ),
            amount,
            self.mint.decimals,
        )
        .map_err(|err| {
            msg!("Vault redemption failed: {:?}", err);
            error!(ErrorCode::VenueFailure)
        })?;

        Ok(amount)
    }
}

/// Amount the vault gained across a deposit of `sent`.
///
/// The ledger credits deposits 1:1, so anything short of `sent` reaching the
/// vault is a venue failure.
pub fn custody_increase(before: u64, after: u64, sent: u64) -> Result<u64> {
    let received = after
        .checked_sub(before)
        .ok_or(ErrorCode::VenueFailure)?;
    if received != sent {
        msg!("Vault received {} of {} sent", received, sent);
        return Err(ErrorCode::VenueFailure.into());
    }
    Ok(received)
}
