use anchor_lang::prelude::*;

use crate::{
    constants::{DISCRIMINATOR_LENGTH, REGISTRY_SEED, VAULT_SEED},
    state::{Registry, Vault},
};

/// Contextual accounts required to initialize a registry.
#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    /// The registry root account, specific to the authority.
    #[account(
        init,
        payer = authority,
        space = DISCRIMINATOR_LENGTH + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED, authority.key().as_ref()],
        bump,
    )]
    pub registry: Account<'info, Registry>,

    /// The vault account that will pool admission fees.
    #[account(
        init,
        payer = authority,
        space = DISCRIMINATOR_LENGTH + Vault::INIT_SPACE,
        seeds = [VAULT_SEED, registry.key().as_ref()],
        bump,
    )]
    pub vault: Account<'info, Vault>,

    /// The administrator of the new registry. Must be a signer.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The system program, required for creating accounts.
    pub system_program: Program<'info, System>,
}

/// Handles the logic for initializing a registry and its fee vault.
///
/// The signer becomes the registry authority; every administrative
/// instruction afterwards checks against the stored key.
pub fn initialize_registry_handler(ctx: Context<InitializeRegistry>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.authority = ctx.accounts.authority.key();
    registry.bump = ctx.bumps.registry;

    ctx.accounts.vault.bump = ctx.bumps.vault;

    msg!("Registry initialized for {}", registry.authority);

    Ok(())
}
