use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::*;
use crate::draw::{self, RevealedRandomness};
use crate::error::ErrorCode;
use crate::events::RandomNumberDrawn;
use crate::state::RafflePool;

/// Accounts required to reveal a committed Switchboard draw.
///
/// This ensures that:
/// 1. Only the pool authority can reveal.
/// 2. The randomness account provided matches the committed one.
/// 3. The draw uses the ceiling fixed at commit time.
#[derive(Accounts)]
pub struct RevealRandomNumber<'info> {
    /// Account paying for any transaction fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The pool holding the commitment.
    #[account(
        mut,
        seeds = [RAFFLE_POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, RafflePool>>,

    /// The randomness oracle account providing verifiable randomness.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_reveal_random_number(ctx: Context<RevealRandomNumber>) -> Result<u64> {
    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let randomness_key = ctx.accounts.randomness_account_data.key();
    let pool = &mut ctx.accounts.pool;

    let ceiling = draw::committed_ceiling(pool, &randomness_key)?;
    if ctx.accounts.payer.key() != pool.authority {
        return Err(ErrorCode::NotAuthorized.into());
    }

    let revealed_random_value = {
        let randomness_data =
            RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
                .map_err(|_| ErrorCode::IncorrectRandomnessAccount)?;
        let value = randomness_data
            .get_value(&clock)
            .map_err(|_| ErrorCode::RandomnessNotResolved)?;
        value
    };

    let value = draw::reveal_committed(
        pool,
        &randomness_key,
        &RevealedRandomness(revealed_random_value),
    )?;

    msg!("Revealed random number below {}: {}", ceiling, value);

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
