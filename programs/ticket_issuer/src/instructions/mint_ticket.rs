use anchor_lang::prelude::*;

use crate::{
    constants::{COLLECTION_SEED, DISCRIMINATOR_LENGTH, TICKET_SEED},
    errors::TicketError,
    events::TicketMinted,
    state::{Collection, Ticket},
};

/// Contextual accounts required to mint a new ticket.
#[derive(Accounts)]
pub struct MintTicket<'info> {
    /// The collection the ticket is minted from.
    #[account(
        mut,
        seeds = [COLLECTION_SEED, collection.authority.as_ref()],
        bump = collection.bump,
    )]
    pub collection: Account<'info, Collection>,

    /// The new ticket account. The PDA is derived from the collection and
    /// the next unassigned token identifier.
    #[account(
        init,
        payer = authority,
        space = DISCRIMINATOR_LENGTH + Ticket::INIT_SPACE,
        seeds = [
            TICKET_SEED,
            collection.key().as_ref(),
            collection.next_token_id.to_be_bytes().as_ref(),
        ],
        bump,
    )]
    pub ticket: Account<'info, Ticket>,

    /// The collection administrator. Must be a signer and match the
    /// authority stored on the collection account.
    #[account(mut, address = collection.authority @ TicketError::AuthorityMismatch)]
    pub authority: Signer<'info>,

    /// The system program, required for creating accounts.
    pub system_program: Program<'info, System>,
}

/// Handles the logic for minting a ticket.
///
/// Token identifiers are handed out strictly in sequence starting at 1, and
/// minting fails once `max_supply` tickets exist.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `recipient` - The identity the new ticket is assigned to.
/// * `uri` - The per-ticket metadata reference, recorded once at mint time.
pub fn mint_ticket_handler(ctx: Context<MintTicket>, recipient: Pubkey, uri: String) -> Result<()> {
    let collection_key = ctx.accounts.collection.key();
    let token_id = ctx.accounts.collection.assign_next_id()?;

    ctx.accounts
        .ticket
        .issue(collection_key, token_id, recipient, uri, ctx.bumps.ticket)?;

    emit!(TicketMinted {
        recipient,
        token_id,
    });

    msg!("Ticket {} minted to {}", token_id, recipient);

    Ok(())
}
