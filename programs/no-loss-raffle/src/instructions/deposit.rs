use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::ErrorCode;
use crate::ledger;
use crate::state::{Participant, RafflePool};
use crate::venue::TokenVaultVenue;

/// Accounts required to deposit into a raffle pool.
/// Handles:
/// - Lazy creation of the depositor's participant record
/// - Settlement of accrued weight
/// - Transfer of the deposit into the pool vault
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The depositor; pays for the participant record on first deposit.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Pool state account; taken writable so deposits are serialized.
    #[account(
        mut,
        seeds = [RAFFLE_POOL_SEED, mint.key().as_ref()],
        bump = pool.bump,
        has_one = mint @ ErrorCode::MintMismatch,
        has_one = vault,
    )]
    pub pool: Box<Account<'info, RafflePool>>,

    /// The depositor's ledger record in this pool.
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Participant::INIT_SPACE,
        seeds = [PARTICIPANT_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump,
    )]
    pub participant: Box<Account<'info, Participant>>,

    /// Mint of the deposited value.
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Pool vault receiving the deposit.
    #[account(
        mut,
        seeds = [POOL_VAULT_SEED, pool.key().as_ref()],
        bump = pool.vault_bump,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Source token account of the depositor.
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

/// Deposits `amount` for the caller.
///
/// Steps performed:
/// 1. Materialize the participant record if this is the first deposit.
/// 2. Settle accrued weight with the pre-deposit balance.
/// 3. Move `amount` into the pool vault.
/// 4. Credit the participant and the pool totals.
///
/// # Arguments
/// * `ctx` - Context containing Deposit accounts
/// * `amount` - Amount in the mint's smallest unit
pub fn process_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let participant_bump = ctx.bumps.participant;
    let accounts = ctx.accounts;
    let pool_info = accounts.pool.to_account_info();

    if accounts.participant.is_fresh() {
        accounts
            .participant
            .open(pool_info.key(), accounts.owner.key(), participant_bump, now);
        accounts.pool.participant_count = accounts
            .pool
            .participant_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
    }

    let mut venue = TokenVaultVenue {
        token_program: &accounts.token_program,
        mint: &accounts.mint,
        vault: &mut accounts.vault,
        participant_token_account: &accounts.owner_token_account,
        owner: &accounts.owner,
        pool: pool_info,
        pool_signer_seeds: &[],
    };

    let deposited = ledger::deposit(
        &mut accounts.pool,
        &mut accounts.participant,
        &mut venue,
        amount,
        now,
    )?;

    msg!(
        "Deposited {} for {}, balance {}",
        amount,
        deposited.participant,
        accounts.participant.balance
    );

    emit!(deposited);

    Ok(())
}
