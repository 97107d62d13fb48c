use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Default)]
pub struct RafflePool {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The bump seed of the token vault owned by this pool.
    pub vault_bump: u8,

    /// The account that created the pool and drives Switchboard draws.
    pub authority: Pubkey,

    /// The mint of the underlying value participants deposit.
    pub mint: Pubkey,

    /// The token account custodying deposited value on behalf of the pool.
    pub vault: Pubkey,

    /// Sum of every participant's `balance`.
    /// Must equal the value the pool can redeem from the venue.
    pub total_deposits: u64,

    /// Yield-bearing amount the venue has issued to the pool.
    pub yield_bearing_balance: u64,

    /// Number of participant records ever materialized.
    pub participant_count: u64,

    /// Switchboard randomness account committed for the next reveal.
    /// `Pubkey::default()` while nothing is committed.
    pub randomness_account: Pubkey,

    /// Upper bound fixed for the committed draw. Zero while nothing is
    /// committed.
    pub committed_ceiling: u64,

    /// Number of draws served so far; mixed into block-data entropy.
    pub draw_count: u64,

    /// Value returned by the most recent draw.
    pub last_draw: u64,
}

#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Participant {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The pool this record belongs to.
    pub pool: Pubkey,

    /// The depositor this record tracks.
    pub owner: Pubkey,

    /// Outstanding principal in the mint's smallest unit.
    pub balance: u64,

    /// UNIX timestamp at which `accrued_weight` was last settled.
    pub last_checkpoint: i64,

    /// Balance-seconds accumulated up to `last_checkpoint`.
    pub accrued_weight: u128,
}

impl Participant {
    /// True until the record has been bound to a pool and owner.
    pub fn is_fresh(&self) -> bool {
        self.owner == Pubkey::default()
    }

    /// Binds a freshly materialized record. Weight starts accruing at `now`.
    pub fn open(&mut self, pool: Pubkey, owner: Pubkey, bump: u8, now: i64) {
        self.bump = bump;
        self.pool = pool;
        self.owner = owner;
        self.balance = 0;
        self.last_checkpoint = now;
        self.accrued_weight = 0;
    }
}
