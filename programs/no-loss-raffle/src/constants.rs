use anchor_lang::prelude::*;

#[constant]
pub const RAFFLE_POOL_SEED: &[u8] = b"raffle_pool";

#[constant]
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";

#[constant]
pub const PARTICIPANT_SEED: &[u8] = b"participant";

/// Domain tag mixed into block-data entropy so draws never collide with
/// other keccak preimages built from the same slot.
pub const SLOT_ENTROPY_TAG: &[u8] = b"no_loss_raffle:slot_entropy";
