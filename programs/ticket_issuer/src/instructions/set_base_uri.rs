use anchor_lang::prelude::*;

use crate::{constants::COLLECTION_SEED, errors::TicketError, state::Collection};

/// Contextual accounts required to update the collection base URI.
#[derive(Accounts)]
pub struct SetBaseUri<'info> {
    /// The collection being updated.
    #[account(
        mut,
        seeds = [COLLECTION_SEED, collection.authority.as_ref()],
        bump = collection.bump,
    )]
    pub collection: Account<'info, Collection>,

    /// The collection administrator. Must match the stored authority.
    #[account(address = collection.authority @ TicketError::AuthorityMismatch)]
    pub authority: Signer<'info>,
}

/// Handles the logic for replacing the collection-wide base URI.
///
/// The change takes effect for every ticket, including tickets minted
/// before the update, since full URIs are assembled at resolution time.
pub fn set_base_uri_handler(ctx: Context<SetBaseUri>, base_uri: String) -> Result<()> {
    ctx.accounts.collection.set_base_uri(base_uri)?;

    msg!("Collection base URI updated");

    Ok(())
}
