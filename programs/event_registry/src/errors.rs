use anchor_lang::prelude::*;
#[error_code]
pub enum RegistryError {
    #[msg("Event name must not be empty")]
    NameEmpty,
    #[msg("Event name is too long. Max length is 100 characters")]
    NameTooLong,
    #[msg("Event capacity must be greater than zero")]
    InvalidCapacity,
    #[msg("An active event with this identifier already exists")]
    DuplicateEvent,

    #[msg("Event is not active")]
    EventInactive,
    #[msg("Attendee does not own the presented ticket")]
    NotTokenOwner,
    #[msg("Payment does not cover the admission price")]
    InsufficientPayment,
    #[msg("Insufficient funds to pay the admission fee")]
    InsufficientFunds,
    #[msg("Event has reached its capacity")]
    EventFull,
    #[msg("Attendee was already admitted to this event")]
    AlreadyAdmitted,

    #[msg("Event is already inactive")]
    AlreadyInactive,
    #[msg("Vault holds no withdrawable funds")]
    NothingToWithdraw,
    #[msg("Signer does not match the registry authority")]
    AuthorityMismatch,
    #[msg("Numeric overflow")]
    NumericOverflow,
}
