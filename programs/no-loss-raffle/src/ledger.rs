//! Balance and time-weighted accrual ledger.
//!
//! A participant's weight is the integral of their balance over time,
//! measured in balance-seconds. The stored `accrued_weight` covers everything
//! up to `last_checkpoint`; the interval since then is tallied on demand as
//! `balance * (now - last_checkpoint)`. Every balance change settles that
//! interval first, using the balance that was actually held during it.
//!
//! Nothing here reads the clock or touches accounts: `now` and the yield venue
//! are supplied by the caller, so the same code runs inside the program and
//! in host tests.

use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::events::{Deposited, Withdrawn};
use crate::state::{Participant, RafflePool};

/// External venue that custodies pooled value and issues a yield-bearing
/// representation for it.
///
/// Either call may fail; the enclosing ledger operation then fails without
/// having mutated any record.
pub trait YieldVenue {
    /// Places `amount` of underlying value with the venue and returns the
    /// yield-bearing amount obtained.
    fn deposit_to_yield_venue(&mut self, amount: u64) -> Result<u64>;

    /// Redeems `amount` of yield-bearing value and returns the underlying
    /// amount released to the participant.
    fn withdraw_from_yield_venue(&mut self, amount: u64) -> Result<u64>;
}

fn elapsed_since_checkpoint(participant: &Participant, now: i64) -> Result<u64> {
    require!(
        now >= participant.last_checkpoint,
        ErrorCode::ClockRegression
    );
    let elapsed = now
        .checked_sub(participant.last_checkpoint)
        .ok_or(ErrorCode::MathOverflow)?;
    u64::try_from(elapsed).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Weight the participant would hold if settled at `now`.
///
/// Read-only: repeated calls with the same `now` return the same value, and
/// an untouched (default) record yields zero.
pub fn calculate_accrued_value(participant: &Participant, now: i64) -> Result<u128> {
    if participant.is_fresh() {
        return Ok(0);
    }
    let elapsed = elapsed_since_checkpoint(participant, now)?;
    let pending = (participant.balance as u128)
        .checked_mul(elapsed as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    participant
        .accrued_weight
        .checked_add(pending)
        .ok_or(ErrorCode::MathOverflow.into())
}

/// Folds the interval since the last checkpoint into `accrued_weight` and
/// moves the checkpoint to `now`. Returns the settled weight.
pub fn settle(participant: &mut Participant, now: i64) -> Result<u128> {
    let weight = calculate_accrued_value(participant, now)?;

    #[cfg(feature = "verbose")]
    msg!(
        "settle: balance={}, from={}, to={}, weight={}",
        participant.balance,
        participant.last_checkpoint,
        now,
        weight
    );

    participant.accrued_weight = weight;
    participant.last_checkpoint = now;
    Ok(weight)
}

/// Credits `amount` to the participant after forwarding it to the venue.
///
/// All checks and the settled weight are computed before the venue is called,
/// and state is written only once the venue has accepted the funds.
pub fn deposit<V: YieldVenue>(
    pool: &mut RafflePool,
    participant: &mut Participant,
    venue: &mut V,
    amount: u64,
    now: i64,
) -> Result<Deposited> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let weight = calculate_accrued_value(participant, now)?;
    let balance = participant
        .balance
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    let total_deposits = pool
        .total_deposits
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;

    let issued = venue.deposit_to_yield_venue(amount)?;
    require!(issued > 0, ErrorCode::VenueFailure);
    let yield_bearing_balance = pool
        .yield_bearing_balance
        .checked_add(issued)
        .ok_or(ErrorCode::MathOverflow)?;

    participant.accrued_weight = weight;
    participant.last_checkpoint = now;
    participant.balance = balance;
    pool.total_deposits = total_deposits;
    pool.yield_bearing_balance = yield_bearing_balance;

    Ok(Deposited {
        participant: participant.owner,
        amount,
        timestamp: now,
    })
}

/// Pays out `min(requested, balance)` to the participant.
///
/// Requests above the outstanding balance are capped rather than rejected,
/// so a single oversized request always exits the position completely.
pub fn withdraw<V: YieldVenue>(
    pool: &mut RafflePool,
    participant: &mut Participant,
    venue: &mut V,
    requested: u64,
    now: i64,
) -> Result<Withdrawn> {
    require!(requested > 0, ErrorCode::InvalidAmount);
    require!(participant.balance > 0, ErrorCode::ZeroBalance);

    let amount = requested.min(participant.balance);
    let weight = calculate_accrued_value(participant, now)?;
    let balance = participant.balance - amount;
    let total_deposits = pool
        .total_deposits
        .checked_sub(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    let yield_bearing_balance = pool
        .yield_bearing_balance
        .checked_sub(amount)
        .ok_or(ErrorCode::VenueFailure)?;

    let released = venue.withdraw_from_yield_venue(amount)?;
    require!(released >= amount, ErrorCode::VenueFailure);

    participant.accrued_weight = weight;
    participant.last_checkpoint = now;
    participant.balance = balance;
    pool.total_deposits = total_deposits;
    pool.yield_bearing_balance = yield_bearing_balance;

    Ok(Withdrawn {
        participant: participant.owner,
        amount,
        timestamp: now,
    })
}
