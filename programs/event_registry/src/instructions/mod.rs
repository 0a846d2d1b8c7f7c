pub mod admit;
pub mod create_event;
pub mod deactivate_event;
pub mod get_event;
pub mod initialize_registry;
pub mod withdraw;

pub use admit::*;
pub use create_event::*;
pub use deactivate_event::*;
pub use get_event::*;
pub use initialize_registry::*;
pub use withdraw::*;
