use anchor_lang::prelude::*;

/// Emitted exactly once per successfully minted ticket.
#[event]
pub struct TicketMinted {
    pub recipient: Pubkey,
    pub token_id: u64,
}

/// Emitted exactly once per successful ownership transfer.
#[event]
pub struct TicketTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub token_id: u64,
}
