use anchor_lang::prelude::*;

use crate::{
    constants::{REGISTRY_SEED, VAULT_SEED},
    errors::RegistryError,
    state::{Registry, Vault},
};

/// Contextual accounts required to withdraw pooled admission fees.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The registry whose fees are withdrawn.
    #[account(
        seeds = [REGISTRY_SEED, registry.authority.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// The vault account holding the pooled fees.
    #[account(
        mut,
        seeds = [VAULT_SEED, registry.key().as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    /// The registry administrator receiving the funds.
    #[account(mut, address = registry.authority @ RegistryError::AuthorityMismatch)]
    pub authority: Signer<'info>,
}

/// Handles the logic for withdrawing the vault balance.
///
/// Everything above the vault's rent-exempt minimum is moved to the
/// authority. The vault account stays open for future admissions.
pub fn withdraw_handler(ctx: Context<Withdraw>) -> Result<()> {
    let vault_info = ctx.accounts.vault.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(vault_info.data_len());
    let available = vault_info.lamports().saturating_sub(rent_floor);

    require!(available > 0, RegistryError::NothingToWithdraw);

    **vault_info.try_borrow_mut_lamports()? -= available;

    **ctx
        .accounts
        .authority
        .to_account_info()
        .try_borrow_mut_lamports()? += available;

    msg!("Withdrew {} lamports", available);

    Ok(())
}
