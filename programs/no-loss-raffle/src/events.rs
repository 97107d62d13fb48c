use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// POOL EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted once when a raffle pool and its vault are created
#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// LEDGER EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted after a deposit has been settled, forwarded to the venue and credited
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct Deposited {
    pub participant: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Emitted after a withdrawal; `amount` is the capped amount actually paid out
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct Withdrawn {
    pub participant: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Emitted when a participant's weight is settled without a balance change
#[event]
pub struct Checkpointed {
    pub participant: Pubkey,
    pub balance: u64,
    pub accrued_weight: u128,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// DRAW EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a Switchboard randomness account is bound to the pool
#[event]
pub struct RandomnessCommitted {
    pub pool: Pubkey,
    pub randomness_account: Pubkey,
    pub ceiling: u64,
    pub slot: u64,
    pub timestamp: i64,
}

/// Emitted for every bounded draw
#[event]
pub struct RandomNumberDrawn {
    pub pool: Pubkey,
    pub ceiling: u64,
    pub value: u64,
    pub draw_count: u64,
    pub slot: u64,
    pub timestamp: i64,
}
