use anchor_lang::prelude::*;

use crate::{
    constants::{COLLECTION_SEED, TICKET_SEED},
    state::{Collection, Ticket},
};

/// Contextual accounts required to resolve a ticket's metadata URI.
#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct TokenUri<'info> {
    /// The collection the ticket belongs to.
    #[account(
        seeds = [COLLECTION_SEED, collection.authority.as_ref()],
        bump = collection.bump,
    )]
    pub collection: Account<'info, Collection>,

    /// The ticket whose URI is being resolved.
    #[account(
        seeds = [
            TICKET_SEED,
            collection.key().as_ref(),
            token_id.to_be_bytes().as_ref(),
        ],
        bump = ticket.bump,
    )]
    pub ticket: Account<'info, Ticket>,
}

/// Handles the logic for resolving a ticket's full metadata URI.
///
/// The result is the current collection base URI concatenated with the
/// ticket's own reference, assembled at call time.
pub fn token_uri_handler(ctx: Context<TokenUri>, _token_id: u64) -> Result<String> {
    let uri = ctx
        .accounts
        .ticket
        .resolve_uri(&ctx.accounts.collection.base_uri);

    Ok(uri)
}
