use anchor_lang::prelude::*;

/// The length of the discriminator for an Anchor account.
pub const DISCRIMINATOR_LENGTH: usize = 8;

/// Seed for the collection PDA.
#[constant]
pub const COLLECTION_SEED: &[u8] = b"collection";

/// Seed for the ticket PDA.
#[constant]
pub const TICKET_SEED: &[u8] = b"ticket";

/// Maximum length in bytes of the collection's base metadata URI.
pub const MAX_BASE_URI_LEN: usize = 200;

/// Maximum length in bytes of a ticket's own metadata reference.
pub const MAX_TICKET_URI_LEN: usize = 200;
