//! Bounded pseudo-random draws.
//!
//! The engine hashes caller-supplied entropy with keccak and reduces the
//! digest into `[0, ceiling)`. It never retries and never reads chain state
//! itself; providers decide where the entropy comes from.
//!
//! `SlotEntropy` is built from public block data. Whoever controls
//! transaction ordering or the leader slot can observe and steer it, so it is
//! only suitable where that bias is acceptable. `RevealedRandomness` carries a
//! Switchboard on-demand value committed one slot ahead, which the caller
//! cannot predict when committing. The ceiling is fixed together with the
//! commitment and only one commitment may be pending, so neither can be
//! re-chosen once the value is readable.

use anchor_lang::prelude::*;
use solana_program::keccak;

use crate::constants::SLOT_ENTROPY_TAG;
use crate::error::ErrorCode;
use crate::state::RafflePool;

/// Source of bytes that are unpredictable before the triggering context is
/// fixed and reproducible once it is.
pub trait EntropySource {
    fn external_entropy(&self) -> Result<Vec<u8>>;
}

/// Block-level context of the current instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotEntropy {
    pub slot: u64,
    pub epoch: u64,
    pub unix_timestamp: i64,
    pub pool: Pubkey,
    pub draw_count: u64,
}

impl SlotEntropy {
    pub fn from_clock(clock: &Clock, pool: Pubkey, draw_count: u64) -> Self {
        Self {
            slot: clock.slot,
            epoch: clock.epoch,
            unix_timestamp: clock.unix_timestamp,
            pool,
            draw_count,
        }
    }
}

impl EntropySource for SlotEntropy {
    fn external_entropy(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(SLOT_ENTROPY_TAG.len() + 8 * 4 + 32);
        bytes.extend_from_slice(SLOT_ENTROPY_TAG);
        bytes.extend_from_slice(&self.slot.to_le_bytes());
        bytes.extend_from_slice(&self.epoch.to_le_bytes());
        bytes.extend_from_slice(&self.unix_timestamp.to_le_bytes());
        bytes.extend_from_slice(self.pool.as_ref());
        bytes.extend_from_slice(&self.draw_count.to_le_bytes());
        Ok(bytes)
    }
}

/// Value revealed by a Switchboard on-demand randomness account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealedRandomness(pub [u8; 32]);

impl EntropySource for RevealedRandomness {
    fn external_entropy(&self) -> Result<Vec<u8>> {
        Ok(self.0.to_vec())
    }
}

/// Returns a value in `[0, ceiling)` derived from `source`.
pub fn generate_random_number<E: EntropySource>(source: &E, ceiling: u64) -> Result<u64> {
    require!(ceiling > 0, ErrorCode::InvalidCeiling);

    let entropy = source.external_entropy()?;
    let digest = keccak::hashv(&[entropy.as_slice()]).to_bytes();

    // 128 bits reduced modulo a 64-bit ceiling keeps the bias below 2^-64.
    let mut wide = [0u8; 16];
    wide.copy_from_slice(&digest[..16]);
    let value = (u128::from_be_bytes(wide) % ceiling as u128) as u64;

    #[cfg(feature = "verbose")]
    msg!("draw: ceiling={}, value={}", ceiling, value);

    Ok(value)
}

/// Binds `randomness_account` and `ceiling` for the next revealed draw.
pub fn commit(pool: &mut RafflePool, randomness_account: Pubkey, ceiling: u64) -> Result<()> {
    require!(ceiling > 0, ErrorCode::InvalidCeiling);
    require!(
        pool.randomness_account == Pubkey::default(),
        ErrorCode::RandomnessAlreadyCommitted
    );
    require!(
        randomness_account != Pubkey::default(),
        ErrorCode::IncorrectRandomnessAccount
    );

    pool.randomness_account = randomness_account;
    pool.committed_ceiling = ceiling;
    Ok(())
}

/// Ceiling committed together with `randomness_account`.
pub fn committed_ceiling(pool: &RafflePool, randomness_account: &Pubkey) -> Result<u64> {
    require!(
        pool.randomness_account != Pubkey::default()
            && pool.randomness_account == *randomness_account,
        ErrorCode::IncorrectRandomnessAccount
    );
    Ok(pool.committed_ceiling)
}

/// Draws below the committed ceiling and releases the commitment.
pub fn reveal_committed<E: EntropySource>(
    pool: &mut RafflePool,
    randomness_account: &Pubkey,
    source: &E,
) -> Result<u64> {
    let ceiling = committed_ceiling(pool, randomness_account)?;
    let value = generate_random_number(source, ceiling)?;
    let draw_count = pool.draw_count.checked_add(1).ok_or(ErrorCode::MathOverflow)?;

    pool.draw_count = draw_count;
    pool.last_draw = value;
    pool.randomness_account = Pubkey::default();
    pool.committed_ceiling = 0;
    Ok(value)
}
