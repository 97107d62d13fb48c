use anchor_lang::prelude::*;

use crate::constants::*;
use crate::ledger;
use crate::state::{Participant, RafflePool};

/// Accounts for the read-only weight query.
#[derive(Accounts)]
pub struct CalculateAccruedValue<'info> {
    #[account(
        seeds = [RAFFLE_POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, RafflePool>>,

    /// CHECK: Only used to derive the participant PDA.
    pub owner: UncheckedAccount<'info>,

    /// Omitted when the owner has never deposited.
    #[account(
        seeds = [PARTICIPANT_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump,
    )]
    pub participant: Option<Account<'info, Participant>>,
}

/// Returns the owner's weight as of the current block time. Addresses with no
/// record report zero.
pub fn process_calculate_accrued_value(ctx: Context<CalculateAccruedValue>) -> Result<u128> {
    let clock = Clock::get()?;

    let accrued = match ctx.accounts.participant.as_ref() {
        Some(participant) => ledger::calculate_accrued_value(participant, clock.unix_timestamp)?,
        None => 0,
    };

    msg!("Accrued value of {}: {}", ctx.accounts.owner.key(), accrued);

    Ok(accrued)
}
