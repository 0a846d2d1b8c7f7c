use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("H6YDgTPCT2AByCKYpLFnAsYbH9X8rSbv6H9fZPJ3gaVJ");

#[program]
pub mod ticket_issuer {
    use super::*;

    /// Creates a new ticket collection with a fixed maximum supply.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `max_supply` - The total number of tickets that can ever be minted.
    /// * `base_uri` - The collection-wide metadata base reference.
    pub fn create_collection(
        ctx: Context<CreateCollection>,
        max_supply: u64,
        base_uri: String,
    ) -> Result<()> {
        create_collection_handler(ctx, max_supply, base_uri)
    }

    /// Mints the next sequential ticket and assigns it to `recipient`.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `recipient` - The identity the new ticket is assigned to.
    /// * `uri` - The per-ticket metadata reference.
    pub fn mint_ticket(ctx: Context<MintTicket>, recipient: Pubkey, uri: String) -> Result<()> {
        mint_ticket_handler(ctx, recipient, uri)
    }

    /// Replaces the collection-wide metadata base reference.
    pub fn set_base_uri(ctx: Context<SetBaseUri>, base_uri: String) -> Result<()> {
        set_base_uri_handler(ctx, base_uri)
    }

    /// Transfers a ticket to a new owner.
    pub fn transfer_ticket(ctx: Context<TransferTicket>, new_owner: Pubkey) -> Result<()> {
        transfer_ticket_handler(ctx, new_owner)
    }

    /// Resolves the full metadata URI for a minted ticket.
    pub fn token_uri(ctx: Context<TokenUri>, token_id: u64) -> Result<String> {
        token_uri_handler(ctx, token_id)
    }
}
