use anchor_lang::prelude::*;

/// The length of the discriminator for an Anchor account.
pub const DISCRIMINATOR_LENGTH: usize = 8;

/// Longest event name accepted by `create_event`.
pub const MAX_EVENT_NAME_LEN: usize = 100;

/// Seed for the registry root PDA.
#[constant]
pub const REGISTRY_SEED: &[u8] = b"registry";

/// Seed for the fee vault PDA.
#[constant]
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed for event PDAs.
#[constant]
pub const EVENT_SEED: &[u8] = b"registry_event";

#[constant]
pub const ADMISSION_SEED: &[u8] = b"admission";
