use anchor_lang::prelude::*;

use crate::{
    constants::{EVENT_SEED, REGISTRY_SEED},
    errors::RegistryError,
    state::{Event, Registry},
};

/// Contextual accounts required to deactivate an event.
#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct DeactivateEvent<'info> {
    /// The registry the event belongs to.
    #[account(
        seeds = [REGISTRY_SEED, registry.authority.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// The event to deactivate.
    #[account(
        mut,
        seeds = [EVENT_SEED, registry.key().as_ref(), event_id.to_be_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    /// The registry administrator.
    #[account(address = registry.authority @ RegistryError::AuthorityMismatch)]
    pub authority: Signer<'info>,
}

/// Handles the logic for deactivating an event.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `_event_id` - The ID of the event, used for PDA validation.
pub fn deactivate_event_handler(ctx: Context<DeactivateEvent>, _event_id: u64) -> Result<()> {
    ctx.accounts.event.deactivate()?;

    msg!("Event {} deactivated", ctx.accounts.event.event_id);

    Ok(())
}
