pub mod create_collection;
pub mod mint_ticket;
pub mod set_base_uri;
pub mod token_uri;
pub mod transfer_ticket;

pub use create_collection::*;
pub use mint_ticket::*;
pub use set_base_uri::*;
pub use token_uri::*;
pub use transfer_ticket::*;
