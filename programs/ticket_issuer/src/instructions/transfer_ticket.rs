use anchor_lang::prelude::*;

use crate::{constants::TICKET_SEED, events::TicketTransferred, state::Ticket};

/// Contextual accounts required to transfer a ticket.
#[derive(Accounts)]
pub struct TransferTicket<'info> {
    /// The ticket being transferred.
    #[account(
        mut,
        seeds = [
            TICKET_SEED,
            ticket.collection.as_ref(),
            ticket.token_id.to_be_bytes().as_ref(),
        ],
        bump = ticket.bump,
    )]
    pub ticket: Account<'info, Ticket>,

    /// The current ticket owner.
    pub owner: Signer<'info>,
}

/// Handles the logic for transferring a ticket to a new owner.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `new_owner` - The identity the ticket is reassigned to.
pub fn transfer_ticket_handler(ctx: Context<TransferTicket>, new_owner: Pubkey) -> Result<()> {
    let ticket = &mut ctx.accounts.ticket;
    let previous_owner = ticket.transfer_to(ctx.accounts.owner.key(), new_owner)?;

    emit!(TicketTransferred {
        from: previous_owner,
        to: new_owner,
        token_id: ticket.token_id,
    });

    msg!(
        "Ticket {} transferred from {} to {}",
        ticket.token_id,
        previous_owner,
        new_owner
    );

    Ok(())
}
