use anchor_lang::prelude::*;

use crate::{
    constants::{EVENT_SEED, REGISTRY_SEED},
    errors::RegistryError,
    state::{Event, EventMetadata, Registry},
};

/// Contextual accounts required to look up an event record.
#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct GetEvent<'info> {
    /// The registry the event belongs to.
    #[account(
        seeds = [REGISTRY_SEED, registry.authority.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// The event being looked up.
    #[account(
        seeds = [EVENT_SEED, registry.key().as_ref(), event_id.to_be_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,
}

/// Handles the logic for reading an event record.
///
/// Only active events can be looked up; a deactivated event reports the
/// same error an inactive admission attempt would.
pub fn get_event_handler(ctx: Context<GetEvent>, _event_id: u64) -> Result<EventMetadata> {
    let event = &ctx.accounts.event;
    require!(event.active, RegistryError::EventInactive);

    Ok(event.snapshot())
}
