use anchor_lang::prelude::*;

use crate::constants::{MAX_BASE_URI_LEN, MAX_TICKET_URI_LEN};
use crate::errors::TicketError;

/// A ticket namespace: one authority, one supply bound, one id counter.
#[account]
#[derive(InitSpace)]
pub struct Collection {
    pub authority: Pubkey,
    pub max_supply: u64,
    /// The next unassigned identifier. Starts at 1 and only ever grows.
    pub next_token_id: u64,
    #[max_len(MAX_BASE_URI_LEN)]
    pub base_uri: String,
    pub bump: u8,
}

#[account]
#[derive(InitSpace, Debug)]
pub struct Ticket {
    pub collection: Pubkey,
    pub token_id: u64,
    pub owner: Pubkey,
    #[max_len(MAX_TICKET_URI_LEN)]
    pub uri: String,
    pub bump: u8,
}

impl Collection {
    /// Installs the collection definition and starts the id counter at 1.
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        max_supply: u64,
        base_uri: String,
        bump: u8,
    ) -> Result<()> {
        require!(max_supply > 0, TicketError::InvalidSupply);
        require!(
            base_uri.len() <= MAX_BASE_URI_LEN,
            TicketError::BaseUriTooLong
        );

        self.authority = authority;
        self.max_supply = max_supply;
        self.next_token_id = 1;
        self.base_uri = base_uri;
        self.bump = bump;

        Ok(())
    }

    /// Replaces the base URI. Already minted tickets pick the change up
    /// because full URIs are assembled at resolution time.
    pub fn set_base_uri(&mut self, base_uri: String) -> Result<()> {
        require!(
            base_uri.len() <= MAX_BASE_URI_LEN,
            TicketError::BaseUriTooLong
        );

        self.base_uri = base_uri;

        Ok(())
    }

    /// Number of tickets minted so far.
    pub fn minted(&self) -> u64 {
        self.next_token_id.saturating_sub(1)
    }

    /// Hands out the next sequential token identifier, or fails once the
    /// supply is exhausted. A failed assignment leaves the counter untouched.
    pub fn assign_next_id(&mut self) -> Result<u64> {
        require!(
            self.next_token_id <= self.max_supply,
            TicketError::SupplyExhausted
        );

        let token_id = self.next_token_id;
        self.next_token_id = token_id
            .checked_add(1)
            .ok_or(TicketError::NumericOverflow)?;

        Ok(token_id)
    }
}

impl Ticket {
    /// Records a freshly minted ticket: identifier, first owner and the
    /// per-ticket metadata reference, which is set once and never changes.
    pub fn issue(
        &mut self,
        collection: Pubkey,
        token_id: u64,
        recipient: Pubkey,
        uri: String,
        bump: u8,
    ) -> Result<()> {
        require!(uri.len() <= MAX_TICKET_URI_LEN, TicketError::UriTooLong);
        require!(
            recipient != Pubkey::default(),
            TicketError::InvalidRecipient
        );

        self.collection = collection;
        self.token_id = token_id;
        self.owner = recipient;
        self.uri = uri;
        self.bump = bump;

        Ok(())
    }

    /// Reassigns the ticket to a new owner. Only the current owner may
    /// transfer, and never to the default address. Returns the previous
    /// owner.
    pub fn transfer_to(&mut self, signer: Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        require_keys_eq!(self.owner, signer, TicketError::NotTicketOwner);
        require!(
            new_owner != Pubkey::default(),
            TicketError::InvalidRecipient
        );

        let previous_owner = self.owner;
        self.owner = new_owner;

        Ok(previous_owner)
    }

    /// Composes the collection base URI with this ticket's own metadata
    /// reference. The base is read at resolution time, so later
    /// `set_base_uri` calls are reflected in the result.
    pub fn resolve_uri(&self, base_uri: &str) -> String {
        format!("{}{}", base_uri, self.uri)
    }
}
