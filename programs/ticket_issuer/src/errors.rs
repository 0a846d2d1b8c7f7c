use anchor_lang::prelude::*;

#[error_code]
pub enum TicketError {
    #[msg("Maximum supply must be greater than zero")]
    InvalidSupply,
    #[msg("Base URI is too long. Max length is 200 bytes")]
    BaseUriTooLong,
    #[msg("Ticket URI is too long. Max length is 200 bytes")]
    UriTooLong,

    #[msg("All tickets of this collection have been minted")]
    SupplyExhausted,
    #[msg("Recipient must not be the default address")]
    InvalidRecipient,

    #[msg("Signer does not own this ticket")]
    NotTicketOwner,
    #[msg("Signer is not the collection authority")]
    AuthorityMismatch,

    #[msg("Numeric overflow")]
    NumericOverflow,
}
