use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::*;
use crate::draw;
use crate::error::ErrorCode;
use crate::events::RandomnessCommitted;
use crate::state::RafflePool;

/// Accounts required to commit a randomness account for the next draw.
///
/// Ensures:
/// 1. Only the authority of the pool can commit the randomness.
/// 2. The randomness account is valid and has not been revealed previously.
/// 3. No earlier commitment is still waiting for its reveal.
#[derive(Accounts)]
pub struct CommitRandomness<'info> {
    /// The account paying transaction fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The pool whose next draw is being committed.
    #[account(
        mut,
        seeds = [RAFFLE_POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, RafflePool>>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Commits the next Switchboard draw together with its `ceiling`.
pub fn process_commit_randomness(ctx: Context<CommitRandomness>, ceiling: u64) -> Result<()> {
    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;
    if ctx.accounts.payer.key() != pool.authority {
        return Err(ErrorCode::NotAuthorized.into());
    }

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| ErrorCode::IncorrectRandomnessAccount)?;

    if randomness_data.seed_slot != clock.slot.saturating_sub(1) {
        msg!("Seed slot: {}", randomness_data.seed_slot);
        msg!("Current slot: {}", clock.slot);
        return Err(ErrorCode::RandomnessAlreadyRevealed.into());
    }

    draw::commit(pool, ctx.accounts.randomness_account_data.key(), ceiling)?;

    msg!("Committed {} with ceiling {}", pool.randomness_account, ceiling);

    emit!(RandomnessCommitted {
        pool: pool_key,
        randomness_account: pool.randomness_account,
        ceiling,
        slot: clock.slot,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
