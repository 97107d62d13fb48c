use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::ErrorCode;
use crate::ledger;
use crate::state::{Participant, RafflePool};
use crate::venue::TokenVaultVenue;

/// Accounts required to withdraw principal from a raffle pool.
///
/// Ensures:
/// 1. Only the owner of a participant record can withdraw from it.
/// 2. Funds leave the vault signed by the pool PDA.
/// 3. An address without deposits fails with `ZeroBalance`.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The participant withdrawing their principal.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Pool state account; taken writable so withdrawals are serialized.
    #[account(
        mut,
        seeds = [RAFFLE_POOL_SEED, mint.key().as_ref()],
        bump = pool.bump,
        has_one = mint @ ErrorCode::MintMismatch,
        has_one = vault,
    )]
    pub pool: Box<Account<'info, RafflePool>>,

    /// The owner's ledger record. Materialized empty when missing so that a
    /// never-funded address reports `ZeroBalance`.
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Participant::INIT_SPACE,
        seeds = [PARTICIPANT_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump,
    )]
    pub participant: Box<Account<'info, Participant>>,

    /// Mint of the pooled value.
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Pool vault releasing the withdrawal.
    #[account(
        mut,
        seeds = [POOL_VAULT_SEED, pool.key().as_ref()],
        bump = pool.vault_bump,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Destination token account of the owner.
    #[account(
        mut,
        token::mint = mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program interface
    pub token_program: Interface<'info, TokenInterface>,

    /// System program interface
    pub system_program: Program<'info, System>,
}

/// Withdraws up to `amount` for the caller.
///
/// Steps:
/// 1. Reject an empty record with `ZeroBalance`.
/// 2. Cap the request to the outstanding balance.
/// 3. Settle accrued weight with the pre-withdrawal balance.
/// 4. Release the capped amount from the vault to the owner.
///
/// # Arguments
/// * `ctx` - Context containing `Withdraw` accounts
/// * `amount` - Requested amount; anything above the balance is capped
pub fn process_withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let participant_bump = ctx.bumps.participant;
    let accounts = ctx.accounts;
    let pool_info = accounts.pool.to_account_info();

    if accounts.participant.is_fresh() {
        accounts
            .participant
            .open(pool_info.key(), accounts.owner.key(), participant_bump, now);
    }

    let mint_key = accounts.mint.key();
    let pool_bump = [accounts.pool.bump];
    let seeds: &[&[u8]] = &[RAFFLE_POOL_SEED, mint_key.as_ref(), &pool_bump];
    let signer_seeds = &[seeds];

    let mut venue = TokenVaultVenue {
        token_program: &accounts.token_program,
        mint: &accounts.mint,
        vault: &mut accounts.vault,
        participant_token_account: &accounts.owner_token_account,
        owner: &accounts.owner,
        pool: pool_info,
        pool_signer_seeds: signer_seeds,
    };

    let withdrawn = ledger::withdraw(
        &mut accounts.pool,
        &mut accounts.participant,
        &mut venue,
        amount,
        now,
    )?;

    if withdrawn.amount < amount {
        msg!("Requested {}, capped to {}", amount, withdrawn.amount);
    }
    msg!(
        "Withdrawn {} for {}, balance {}",
        withdrawn.amount,
        withdrawn.participant,
        accounts.participant.balance
    );

    emit!(withdrawn);

    Ok(())
}
