use anchor_lang::prelude::*;

use ticket_issuer::errors::TicketError;
use ticket_issuer::state::{Collection, Ticket};

fn test_pubkey(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

fn test_collection(max_supply: u64, base_uri: &str) -> Collection {
    let mut collection = Collection {
        authority: Pubkey::default(),
        max_supply: 0,
        next_token_id: 0,
        base_uri: String::new(),
        bump: 255,
    };
    collection
        .initialize(test_pubkey(1), max_supply, base_uri.to_string(), 255)
        .unwrap();

    collection
}

// Mirrors the mint path: take the next identifier, then record the ticket.
fn mint(collection: &mut Collection, owner: Pubkey, uri: &str) -> Result<Ticket> {
    let token_id = collection.assign_next_id()?;

    let mut ticket = Ticket {
        collection: Pubkey::default(),
        token_id: 0,
        owner: Pubkey::default(),
        uri: String::new(),
        bump: 254,
    };
    ticket.issue(test_pubkey(1), token_id, owner, uri.to_string(), 254)?;

    Ok(ticket)
}

#[test]
fn sell_out_flow() {
    let mut collection = test_collection(3, "ipfs://launch/");
    let alice = test_pubkey(2);
    let bob = test_pubkey(3);

    assert_eq!(collection.minted(), 0);

    let first = mint(&mut collection, alice, "1.json").unwrap();
    let second = mint(&mut collection, alice, "2.json").unwrap();
    let third = mint(&mut collection, bob, "3.json").unwrap();

    assert_eq!(first.token_id, 1);
    assert_eq!(second.token_id, 2);
    assert_eq!(third.token_id, 3);
    assert_eq!(collection.minted(), 3);

    // A fourth mint fails and leaves the counter where it was.
    let err = mint(&mut collection, bob, "4.json").unwrap_err();
    assert_eq!(err, Error::from(TicketError::SupplyExhausted));
    assert_eq!(collection.next_token_id, 4);
    assert_eq!(collection.minted(), 3);
}

#[test]
fn metadata_follows_the_latest_base_uri() {
    let mut collection = test_collection(10, "ipfs://launch/");
    let ticket = mint(&mut collection, test_pubkey(4), "7.json").unwrap();

    assert_eq!(
        ticket.resolve_uri(&collection.base_uri),
        "ipfs://launch/7.json"
    );

    // Swapping the base retroactively changes every ticket's resolved URI.
    collection
        .set_base_uri("https://cdn.example.org/meta/".to_string())
        .unwrap();
    assert_eq!(
        ticket.resolve_uri(&collection.base_uri),
        "https://cdn.example.org/meta/7.json"
    );
}

#[test]
fn ownership_moves_with_transfer() {
    let mut collection = test_collection(10, "ipfs://launch/");
    let alice = test_pubkey(5);
    let bob = test_pubkey(6);

    let mut ticket = mint(&mut collection, alice, "1.json").unwrap();
    assert_eq!(ticket.owner, alice);

    // Bob cannot pull the ticket to himself; only the holder signs it away.
    let err = ticket.transfer_to(bob, bob).unwrap_err();
    assert_eq!(err, Error::from(TicketError::NotTicketOwner));
    assert_eq!(ticket.owner, alice);

    assert_eq!(ticket.transfer_to(alice, bob).unwrap(), alice);
    assert_eq!(ticket.owner, bob);

    // The identifier and metadata reference travel with the ticket.
    assert_eq!(ticket.token_id, 1);
    assert_eq!(
        ticket.resolve_uri(&collection.base_uri),
        "ipfs://launch/1.json"
    );
}
