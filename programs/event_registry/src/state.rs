use anchor_lang::prelude::*;

use ticket_issuer::state::Ticket;

use crate::constants::MAX_EVENT_NAME_LEN;
use crate::errors::RegistryError;

/// Root account storing the registry administrator.
#[account]
#[derive(InitSpace)]
pub struct Registry {
    pub authority: Pubkey,
    pub bump: u8,
}

/// Program-owned account pooling admission fees for the whole registry.
#[account]
#[derive(InitSpace)]
pub struct Vault {
    pub bump: u8,
}

#[account]
#[derive(InitSpace)]
pub struct Event {
    pub event_id: u64,
    #[max_len(MAX_EVENT_NAME_LEN)]
    pub name: String,
    pub scheduled_at: i64,
    pub price: u64,
    pub capacity: u32,
    pub admitted: u32,
    pub active: bool,
    pub bump: u8,
}

/// Attendance record for one (event, attendee) pair. The `attended` flag
/// is set once and never cleared.
#[account]
#[derive(InitSpace)]
pub struct Admission {
    pub event: Pubkey,
    pub attendee: Pubkey,
    pub attended: bool,
    pub bump: u8,
}

/// Snapshot of an event record returned to off-chain callers.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct EventMetadata {
    pub event_id: u64,
    pub name: String,
    pub scheduled_at: i64,
    pub price: u64,
    pub capacity: u32,
    pub admitted: u32,
    pub active: bool,
}

impl Event {
    /// Installs a fresh event definition after validating the inputs.
    /// Fails while the current record is still active. Resets the admission
    /// count; attendance flags live in their own accounts and are untouched.
    pub fn define(
        &mut self,
        event_id: u64,
        name: String,
        scheduled_at: i64,
        price: u64,
        capacity: u32,
        bump: u8,
    ) -> Result<()> {
        require!(!name.is_empty(), RegistryError::NameEmpty);
        require!(name.len() <= MAX_EVENT_NAME_LEN, RegistryError::NameTooLong);
        require!(capacity > 0, RegistryError::InvalidCapacity);
        require!(!self.active, RegistryError::DuplicateEvent);

        self.event_id = event_id;
        self.name = name;
        self.scheduled_at = scheduled_at;
        self.price = price;
        self.capacity = capacity;
        self.admitted = 0;
        self.active = true;
        self.bump = bump;

        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.admitted >= self.capacity
    }

    /// Runs the admission guards in their fixed order: event active,
    /// ticket ownership, payment (price covered, then attendee balance),
    /// duplicate admission, capacity. The first failing guard determines
    /// the error, so a repeat admission reports `AlreadyAdmitted` even when
    /// the event is already full.
    ///
    /// The ticket may come from any collection; only the recorded owner
    /// matters here.
    pub fn check_admission(
        &self,
        ticket: &Ticket,
        attendee: Pubkey,
        amount: u64,
        balance: u64,
        already_admitted: bool,
    ) -> Result<()> {
        require!(self.active, RegistryError::EventInactive);
        require_keys_eq!(ticket.owner, attendee, RegistryError::NotTokenOwner);
        require!(amount >= self.price, RegistryError::InsufficientPayment);
        require!(balance >= amount, RegistryError::InsufficientFunds);
        require!(!already_admitted, RegistryError::AlreadyAdmitted);
        require!(!self.is_full(), RegistryError::EventFull);

        Ok(())
    }

    pub fn register_admission(&mut self) -> Result<()> {
        self.admitted = self
            .admitted
            .checked_add(1)
            .ok_or(RegistryError::NumericOverflow)?;

        Ok(())
    }

    /// Marks the event inactive. Deactivation is one-way; re-creating the
    /// event under the same identifier is the only way back.
    pub fn deactivate(&mut self) -> Result<()> {
        require!(self.active, RegistryError::AlreadyInactive);
        self.active = false;

        Ok(())
    }

    pub fn snapshot(&self) -> EventMetadata {
        EventMetadata {
            event_id: self.event_id,
            name: self.name.clone(),
            scheduled_at: self.scheduled_at,
            price: self.price,
            capacity: self.capacity,
            admitted: self.admitted,
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pubkey(seed: u8) -> Pubkey {
        Pubkey::new_from_array([seed; 32])
    }

    fn ticket_owned_by(owner: Pubkey) -> Ticket {
        Ticket {
            collection: test_pubkey(9),
            token_id: 1,
            owner,
            uri: "1.json".to_string(),
            bump: 255,
        }
    }

    fn open_event(price: u64, capacity: u32) -> Event {
        Event {
            event_id: 7,
            name: "Launch Party".to_string(),
            scheduled_at: 1_900_000_000,
            price,
            capacity,
            admitted: 0,
            active: true,
            bump: 255,
        }
    }

    // A freshly allocated account deserializes to all-zero fields.
    fn blank_event() -> Event {
        Event {
            event_id: 0,
            name: String::new(),
            scheduled_at: 0,
            price: 0,
            capacity: 0,
            admitted: 0,
            active: false,
            bump: 0,
        }
    }

    #[test]
    fn guards_fire_in_a_fixed_order() {
        let holder = test_pubkey(1);
        let stranger = test_pubkey(2);
        let ticket = ticket_owned_by(holder);

        // An inactive event wins over every later guard.
        let mut event = open_event(100, 1);
        event.active = false;
        event.admitted = 1;
        assert_eq!(
            event
                .check_admission(&ticket, stranger, 0, 0, true)
                .unwrap_err(),
            Error::from(RegistryError::EventInactive)
        );

        // Ownership is checked before payment, duplicates and capacity.
        let mut event = open_event(100, 1);
        event.admitted = 1;
        assert_eq!(
            event
                .check_admission(&ticket, stranger, 0, 0, true)
                .unwrap_err(),
            Error::from(RegistryError::NotTokenOwner)
        );

        // Payment is checked before the duplicate and capacity guards.
        assert_eq!(
            event
                .check_admission(&ticket, holder, 99, 99, true)
                .unwrap_err(),
            Error::from(RegistryError::InsufficientPayment)
        );

        // So is the attendee's balance, even for a repeat attendee.
        assert_eq!(
            event
                .check_admission(&ticket, holder, 100, 99, true)
                .unwrap_err(),
            Error::from(RegistryError::InsufficientFunds)
        );

        // A repeat admission is reported even when the event is full.
        assert_eq!(
            event
                .check_admission(&ticket, holder, 100, 100, true)
                .unwrap_err(),
            Error::from(RegistryError::AlreadyAdmitted)
        );

        // Capacity is the last guard.
        assert_eq!(
            event
                .check_admission(&ticket, holder, 100, 100, false)
                .unwrap_err(),
            Error::from(RegistryError::EventFull)
        );

        event.admitted = 0;
        assert!(event
            .check_admission(&ticket, holder, 100, 100, false)
            .is_ok());
    }

    #[test]
    fn definitions_with_bad_inputs_are_rejected() {
        let mut event = blank_event();

        assert_eq!(
            event
                .define(3, String::new(), 1_900_000_000, 50, 4, 251)
                .unwrap_err(),
            Error::from(RegistryError::NameEmpty)
        );
        assert_eq!(
            event
                .define(3, "x".repeat(MAX_EVENT_NAME_LEN + 1), 1_900_000_000, 50, 4, 251)
                .unwrap_err(),
            Error::from(RegistryError::NameTooLong)
        );
        assert_eq!(
            event
                .define(3, "Workshop".to_string(), 1_900_000_000, 50, 0, 251)
                .unwrap_err(),
            Error::from(RegistryError::InvalidCapacity)
        );

        // A rejected definition leaves the record blank and inactive.
        assert!(!event.active);
        assert_eq!(event.capacity, 0);
    }

    #[test]
    fn new_definitions_start_empty_and_active() {
        let mut event = blank_event();

        event
            .define(3, "Workshop".to_string(), 1_900_000_000, 50, 4, 251)
            .unwrap();

        assert_eq!(event.event_id, 3);
        assert_eq!(event.admitted, 0);
        assert!(event.active);
        assert_eq!(event.capacity, 4);
    }

    #[test]
    fn defining_over_an_active_event_is_rejected() {
        let mut event = open_event(100, 2);
        event.register_admission().unwrap();

        let err = event
            .define(7, "Takeover".to_string(), 0, 0, 1, 251)
            .unwrap_err();
        assert_eq!(err, Error::from(RegistryError::DuplicateEvent));

        // The active record is untouched.
        assert_eq!(event.name, "Launch Party");
        assert_eq!(event.admitted, 1);
    }

    #[test]
    fn deactivated_identifiers_accept_a_fresh_definition() {
        let mut event = open_event(500, 2);
        event.register_admission().unwrap();
        event.deactivate().unwrap();

        event
            .define(7, "Second Run".to_string(), 1_950_000_000, 80, 3, 251)
            .unwrap();

        assert_eq!(event.name, "Second Run");
        assert_eq!(event.admitted, 0);
        assert_eq!(event.capacity, 3);
        assert!(event.active);
    }

    #[test]
    fn overpayment_clears_the_payment_guard() {
        let holder = test_pubkey(3);
        let ticket = ticket_owned_by(holder);
        let event = open_event(100, 1);

        assert!(event
            .check_admission(&ticket, holder, 150, 150, false)
            .is_ok());
    }

    #[test]
    fn free_events_admit_without_payment() {
        let holder = test_pubkey(4);
        let ticket = ticket_owned_by(holder);
        let event = open_event(0, 1);

        assert!(event.check_admission(&ticket, holder, 0, 0, false).is_ok());
    }

    #[test]
    fn admitted_count_tracks_capacity() {
        let mut event = open_event(0, 2);

        assert!(!event.is_full());
        event.register_admission().unwrap();
        assert!(!event.is_full());
        event.register_admission().unwrap();
        assert!(event.is_full());
    }

    #[test]
    fn deactivation_is_one_way() {
        let mut event = open_event(0, 5);

        event.deactivate().unwrap();
        assert!(!event.active);

        assert_eq!(
            event.deactivate().unwrap_err(),
            Error::from(RegistryError::AlreadyInactive)
        );
        assert!(!event.active);
    }

    #[test]
    fn snapshot_mirrors_the_stored_record() {
        let mut event = open_event(250, 3);
        event.register_admission().unwrap();

        let metadata = event.snapshot();
        assert_eq!(metadata.event_id, 7);
        assert_eq!(metadata.name, "Launch Party");
        assert_eq!(metadata.price, 250);
        assert_eq!(metadata.capacity, 3);
        assert_eq!(metadata.admitted, 1);
        assert!(metadata.active);
    }
}
