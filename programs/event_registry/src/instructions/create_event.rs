use anchor_lang::prelude::*;

use crate::{
    constants::{DISCRIMINATOR_LENGTH, EVENT_SEED, REGISTRY_SEED},
    errors::RegistryError,
    state::{Event, Registry},
};

/// Contextual accounts required to create (or re-create) an event.
#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct CreateEvent<'info> {
    /// The registry the event belongs to.
    #[account(
        seeds = [REGISTRY_SEED, registry.authority.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// The event account. The PDA is derived from the registry and the
    /// caller-chosen event identifier. The account is initialized if it
    /// does not exist, so a deactivated identifier can be reused.
    #[account(
        init_if_needed,
        payer = authority,
        space = DISCRIMINATOR_LENGTH + Event::INIT_SPACE,
        seeds = [EVENT_SEED, registry.key().as_ref(), event_id.to_be_bytes().as_ref()],
        bump,
    )]
    pub event: Account<'info, Event>,

    /// The registry administrator. Must be a signer and match the
    /// authority stored on the registry account.
    #[account(mut, address = registry.authority @ RegistryError::AuthorityMismatch)]
    pub authority: Signer<'info>,

    /// The system program, required for creating accounts.
    pub system_program: Program<'info, System>,
}

/// Handles the logic for creating a new event.
///
/// Re-creating an identifier whose event was deactivated replaces the
/// record and resets the admission count. Attendance flags from the
/// earlier incarnation keep blocking repeat admissions.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `event_id` - The identifier chosen for the event.
/// * `name` - The name of the event.
/// * `scheduled_at` - The Unix timestamp the event is scheduled for.
/// * `price` - The admission price in lamports. May be zero.
/// * `capacity` - The maximum number of admissions.
pub fn create_event_handler(
    ctx: Context<CreateEvent>,
    event_id: u64,
    name: String,
    scheduled_at: i64,
    price: u64,
    capacity: u32,
) -> Result<()> {
    ctx.accounts.event.define(
        event_id,
        name,
        scheduled_at,
        price,
        capacity,
        ctx.bumps.event,
    )?;

    msg!("Event {} created", event_id);

    Ok(())
}
