use anchor_lang::prelude::*;

pub mod constants;
pub mod draw;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod venue;


pub use instructions::*;

declare_id!("3XYbqiWCEN8KwxewPmEAAnNyCmDXRDAZ1F9WmPiTSHBN");

#[program]
pub mod no_loss_raffle {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
        process_initialize_pool(ctx)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        process_deposit(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        process_withdraw(ctx, amount)
    }

    pub fn checkpoint(ctx: Context<Checkpoint>) -> Result<()> {
        process_checkpoint(ctx)
    }

    pub fn calculate_accrued_value(ctx: Context<CalculateAccruedValue>) -> Result<u128> {
        process_calculate_accrued_value(ctx)
    }

    pub fn generate_random_number(
        ctx: Context<GenerateRandomNumber>,
        ceiling: u64,
    ) -> Result<u64> {
        process_generate_random_number(ctx, ceiling)
    }

    pub fn commit_randomness(ctx: Context<CommitRandomness>, ceiling: u64) -> Result<()> {
        process_commit_randomness(ctx, ceiling)
    }

    pub fn reveal_random_number(ctx: Context<RevealRandomNumber>) -> Result<u64> {
        process_reveal_random_number(ctx)
    }
}
