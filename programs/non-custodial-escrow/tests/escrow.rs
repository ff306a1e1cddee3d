use anchor_lang::prelude::Pubkey;
use anchor_lang::InstructionData;

use non_custodial_escrow::errors::EscrowError;
use non_custodial_escrow::instruction::{Accept, Cancel, Initialize};
use non_custodial_escrow::ID;

/// Derive the escrow record address for a seller, as initialize does
fn escrow_address(seller: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"escrow", seller.as_ref()], &ID)
}

/// Derive the vault address for an escrow record, as initialize does
fn vault_address(escrow: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"vault", escrow.as_ref()], &ID)
}

#[test]
fn escrow_address_is_deterministic_per_seller() {
    let seller = Pubkey::new_unique();

    let (first, first_bump) = escrow_address(&seller);
    let (second, second_bump) = escrow_address(&seller);

    // Same seller always lands on the same record address, so a second
    // live escrow for that seller is impossible
    assert_eq!(first, second);
    assert_eq!(first_bump, second_bump);
}

#[test]
fn escrow_addresses_differ_between_sellers() {
    let (one, _) = escrow_address(&Pubkey::new_unique());
    let (other, _) = escrow_address(&Pubkey::new_unique());

    assert_ne!(one, other);
}

#[test]
fn escrow_address_has_no_private_key() {
    let seller = Pubkey::new_unique();
    let (escrow, _) = escrow_address(&seller);

    // find_program_address only returns addresses off the ed25519 curve,
    // so no keypair can ever sign as the vault authority
    assert!(!escrow.is_on_curve());
}

#[test]
fn vault_address_binds_to_its_record() {
    let (escrow_a, _) = escrow_address(&Pubkey::new_unique());
    let (escrow_b, _) = escrow_address(&Pubkey::new_unique());

    let (vault_a, _) = vault_address(&escrow_a);
    let (vault_b, _) = vault_address(&escrow_b);

    assert_ne!(vault_a, vault_b);
    assert!(!vault_a.is_on_curve());
}

#[test]
fn initialize_data_encodes_both_amounts() {
    let data = Initialize {
        x_amount: 40,
        y_amount: 25,
    }
    .data();

    // 8-byte discriminator followed by the two little-endian u64 args
    assert_eq!(data.len(), 8 + 8 + 8);
    assert_eq!(&data[8..16], &40u64.to_le_bytes());
    assert_eq!(&data[16..24], &25u64.to_le_bytes());
}

#[test]
fn instruction_discriminators_are_distinct() {
    let initialize = Initialize {
        x_amount: 1,
        y_amount: 1,
    }
    .data();
    let accept = Accept {}.data();
    let cancel = Cancel {}.data();

    assert_eq!(accept.len(), 8);
    assert_eq!(cancel.len(), 8);
    assert_ne!(initialize[..8], accept[..8]);
    assert_ne!(accept[..8], cancel[..8]);
    assert_ne!(initialize[..8], cancel[..8]);
}

#[test]
fn error_messages_name_the_violated_condition() {
    assert!(EscrowError::InvalidAmount
        .to_string()
        .contains("greater than zero"));
    assert!(EscrowError::AccountMismatch
        .to_string()
        .contains("does not match"));
    assert!(EscrowError::InsufficientFunds
        .to_string()
        .contains("balance"));
    assert!(EscrowError::Unauthorized.to_string().contains("seller"));
}
