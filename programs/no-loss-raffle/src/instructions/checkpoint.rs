use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::Checkpointed;
use crate::ledger;
use crate::state::{Participant, RafflePool};

/// Accounts required to settle one participant's weight up to now.
/// Anyone may crank this; it never changes a balance.
#[derive(Accounts)]
pub struct Checkpoint<'info> {
    #[account(
        seeds = [RAFFLE_POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, RafflePool>>,

    #[account(
        mut,
        seeds = [PARTICIPANT_SEED, pool.key().as_ref(), participant.owner.as_ref()],
        bump = participant.bump,
    )]
    pub participant: Box<Account<'info, Participant>>,
}

pub fn process_checkpoint(ctx: Context<Checkpoint>) -> Result<()> {
    let clock = Clock::get()?;
    let participant = &mut ctx.accounts.participant;

    let accrued_weight = ledger::settle(participant, clock.unix_timestamp)?;

    emit!(Checkpointed {
        participant: participant.owner,
        balance: participant.balance,
        accrued_weight,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
