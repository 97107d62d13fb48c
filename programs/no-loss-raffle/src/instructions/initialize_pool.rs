use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::events::PoolInitialized;
use crate::state::RafflePool;

/// Accounts required to create a raffle pool for one mint.
/// This sets up the pool state account and the token vault it custodies.
#[derive(Accounts)]
pub struct InitializePool<'info> {
    /// The account paying for account creation; becomes the pool authority.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The RafflePool state account that stores pool totals and draw state.
    #[account(
        init,
        payer = payer,
        space = 8 + RafflePool::INIT_SPACE,
        seeds = [RAFFLE_POOL_SEED, mint.key().as_ref()],
        bump
    )]
    pub pool: Box<Account<'info, RafflePool>>,

    /// Mint of the value participants deposit.
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Token account holding pooled deposits, owned by the pool PDA.
    #[account(
        init,
        payer = payer,
        seeds = [POOL_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = pool,
        token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program interface.
    pub token_program: Interface<'info, TokenInterface>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Initializes the pool with zeroed totals and records the payer as authority.
///
/// # Arguments
/// * `ctx` - Context holding the InitializePool accounts
pub fn process_initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;

    pool.bump = ctx.bumps.pool;
    pool.vault_bump = ctx.bumps.vault;
    pool.authority = ctx.accounts.payer.key();
    pool.mint = ctx.accounts.mint.key();
    pool.vault = ctx.accounts.vault.key();
    pool.total_deposits = 0;
    pool.yield_bearing_balance = 0;
    pool.participant_count = 0;
    pool.randomness_account = Pubkey::default();
    pool.committed_ceiling = 0;
    pool.draw_count = 0;
    pool.last_draw = 0;

    msg!("Raffle pool created for mint {}", pool.mint);

    emit!(PoolInitialized {
        pool: pool_key,
        authority: pool.authority,
        mint: pool.mint,
        vault: pool.vault,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
