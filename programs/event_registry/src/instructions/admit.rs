use anchor_lang::prelude::*;
use anchor_lang::system_program;

use ticket_issuer::constants::TICKET_SEED;
use ticket_issuer::state::Ticket;

use crate::{
    constants::{ADMISSION_SEED, DISCRIMINATOR_LENGTH, EVENT_SEED, REGISTRY_SEED, VAULT_SEED},
    events::AttendeeAdmitted,
    state::{Admission, Event, Registry, Vault},
};

/// Contextual accounts required to admit a ticket holder to an event.
#[derive(Accounts)]
#[instruction(event_id: u64, token_id: u64)]
pub struct Admit<'info> {
    /// The registry the event belongs to.
    #[account(
        seeds = [REGISTRY_SEED, registry.authority.as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// The event being attended. Resolved before the ticket so a missing
    /// event fails first.
    #[account(
        mut,
        seeds = [EVENT_SEED, registry.key().as_ref(), event_id.to_be_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    /// The ticket presented for admission, verified against the issuer
    /// program under the collection the ticket itself records. Any
    /// collection is accepted; only the recorded owner is checked.
    #[account(
        seeds = [
            TICKET_SEED,
            ticket.collection.as_ref(),
            token_id.to_be_bytes().as_ref(),
        ],
        bump = ticket.bump,
        seeds::program = ticket_issuer::ID,
    )]
    pub ticket: Account<'info, Ticket>,

    /// The attendee requesting admission. Pays the admission fee.
    #[account(mut)]
    pub attendee: Signer<'info>,

    /// The attendance record for this event and attendee pair. Initialized
    /// on first use so the duplicate check is an ordinary guard rather than
    /// an account-creation failure.
    #[account(
        init_if_needed,
        payer = attendee,
        space = DISCRIMINATOR_LENGTH + Admission::INIT_SPACE,
        seeds = [ADMISSION_SEED, event.key().as_ref(), attendee.key().as_ref()],
        bump,
    )]
    pub admission: Account<'info, Admission>,

    /// The vault account pooling admission fees.
    #[account(
        mut,
        seeds = [VAULT_SEED, registry.key().as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    /// The system program, required for the fee transfer.
    pub system_program: Program<'info, System>,
}

/// Handles the logic for admitting an attendee.
///
/// The full `amount` is transferred to the vault, including any
/// overpayment beyond the event price.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `event_id` - The identifier of the event being attended.
/// * `_token_id` - The identifier of the presented ticket, used for PDA
///   validation in the account constraints.
/// * `amount` - The payment in lamports sent along with the admission.
pub fn admit_handler(
    ctx: Context<Admit>,
    event_id: u64,
    _token_id: u64,
    amount: u64,
) -> Result<()> {
    let attendee = ctx.accounts.attendee.key();

    ctx.accounts.event.check_admission(
        &ctx.accounts.ticket,
        attendee,
        amount,
        **ctx.accounts.attendee.to_account_info().lamports.borrow(),
        ctx.accounts.admission.attended,
    )?;

    // Fee transfer
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.attendee.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    // Record the attendance
    let admission = &mut ctx.accounts.admission;
    admission.event = ctx.accounts.event.key();
    admission.attendee = attendee;
    admission.attended = true;
    admission.bump = ctx.bumps.admission;

    // Update Event State
    let event = &mut ctx.accounts.event;
    event.register_admission()?;

    emit!(AttendeeAdmitted {
        attendee,
        event_id,
        name: event.name.clone(),
    });

    msg!("Attendee {} admitted to event {}", attendee, event_id);

    Ok(())
}
