use anchor_lang::prelude::*;

/// Emitted exactly once per successful admission.
#[event]
pub struct AttendeeAdmitted {
    pub attendee: Pubkey,
    pub event_id: u64,
    pub name: String,
}
