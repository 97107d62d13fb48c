use anchor_lang::prelude::*;

use crate::constants::*;
use crate::draw::{self, SlotEntropy};
use crate::error::ErrorCode;
use crate::events::RandomNumberDrawn;
use crate::state::RafflePool;

/// Accounts for a draw seeded from block data.
#[derive(Accounts)]
pub struct GenerateRandomNumber<'info> {
    pub payer: Signer<'info>,

    /// Written so every draw bumps `draw_count` and sees a fresh context.
    #[account(
        mut,
        seeds = [RAFFLE_POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, RafflePool>>,
}

/// Draws a value in `[0, ceiling)` from the current slot context.
///
/// The entropy is public chain state and can be biased by the slot leader;
/// use the commit/reveal pair for draws that decide a prize.
pub fn process_generate_random_number(
    ctx: Context<GenerateRandomNumber>,
    ceiling: u64,
) -> Result<u64> {
    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;

    let source = SlotEntropy::from_clock(&clock, pool_key, pool.draw_count);
    let value = draw::generate_random_number(&source, ceiling)?;

    pool.draw_count = pool.draw_count.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
    pool.last_draw = value;

    msg!("Random number below {}: {}", ceiling, value);

    emit!(RandomNumberDrawn {
        pool: pool_key,
        ceiling,
        value,
        draw_count: pool.draw_count,
        slot: clock.slot,
        timestamp: clock.unix_timestamp,
    });

    Ok(value)
}
