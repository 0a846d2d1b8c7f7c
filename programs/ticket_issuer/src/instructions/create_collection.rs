use anchor_lang::prelude::*;

use crate::{
    constants::{COLLECTION_SEED, DISCRIMINATOR_LENGTH},
    state::Collection,
};

/// Contextual accounts required to create a new ticket collection.
#[derive(Accounts)]
pub struct CreateCollection<'info> {
    /// The new collection account, one per authority.
    #[account(
        init,
        payer = authority,
        space = DISCRIMINATOR_LENGTH + Collection::INIT_SPACE,
        seeds = [COLLECTION_SEED, authority.key().as_ref()],
        bump,
    )]
    pub collection: Account<'info, Collection>,

    /// The administrator of the new collection. Must be a signer.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The system program, required for creating accounts.
    pub system_program: Program<'info, System>,
}

/// Handles the logic for creating a ticket collection.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `max_supply` - The maximum number of tickets that can ever be minted.
/// * `base_uri` - The base metadata URI prepended to every ticket's own
///   reference when resolving its full URI.
pub fn create_collection_handler(
    ctx: Context<CreateCollection>,
    max_supply: u64,
    base_uri: String,
) -> Result<()> {
    ctx.accounts.collection.initialize(
        ctx.accounts.authority.key(),
        max_supply,
        base_uri,
        ctx.bumps.collection,
    )?;

    msg!("Collection created with max supply {}", max_supply);

    Ok(())
}
