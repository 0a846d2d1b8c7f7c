use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::EventMetadata;

declare_id!("C8GWmni61jTvtdon55LJ5zkVGzyJuv5Mkq41YVaeyhGQ");

#[program]
pub mod event_registry {
    use super::*;

    /// Initializes a registry and its fee vault for the signing authority.
    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        initialize_registry_handler(ctx)
    }

    /// Creates a new event under a caller-chosen identifier.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `event_id` - The identifier chosen for the event.
    /// * `name` - The name of the event.
    /// * `scheduled_at` - The Unix timestamp the event is scheduled for.
    /// * `price` - The admission price in lamports. May be zero.
    /// * `capacity` - The maximum number of admissions.
    pub fn create_event(
        ctx: Context<CreateEvent>,
        event_id: u64,
        name: String,
        scheduled_at: i64,
        price: u64,
        capacity: u32,
    ) -> Result<()> {
        create_event_handler(ctx, event_id, name, scheduled_at, price, capacity)
    }

    /// Admits a ticket holder to an event against payment.
    ///
    /// The guards run in a fixed order: event existence and activity,
    /// ticket ownership, payment, duplicate admission, capacity.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `event_id` - The identifier of the event being attended.
    /// * `token_id` - The identifier of the presented ticket.
    /// * `amount` - The payment in lamports sent along with the admission.
    pub fn admit(ctx: Context<Admit>, event_id: u64, token_id: u64, amount: u64) -> Result<()> {
        admit_handler(ctx, event_id, token_id, amount)
    }

    /// Deactivates an event, stopping any further admissions.
    pub fn deactivate_event(ctx: Context<DeactivateEvent>, event_id: u64) -> Result<()> {
        deactivate_event_handler(ctx, event_id)
    }

    /// Withdraws the pooled admission fees to the registry authority.
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        withdraw_handler(ctx)
    }

    /// Reads the record of an active event.
    pub fn get_event(ctx: Context<GetEvent>, event_id: u64) -> Result<EventMetadata> {
        get_event_handler(ctx, event_id)
    }
}
