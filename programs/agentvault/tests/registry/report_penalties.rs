//! Tests for the report_penalties instruction (penalty oracle)

use solana_sdk::{pubkey::Pubkey, signer::Signer};

use crate::common::{
    accounts::{
        create_funded_keypair, create_initialized_registry, create_registered_agent,
        fetch_profile, send_ix, FUNDING_LAMPORTS,
    },
    errors::{assert_registry_error, RegistryError},
    instructions::{build_report_penalties_ix, build_update_authority_ix},
    setup::setup_litesvm,
};

#[test]
fn test_report_penalties_lowers_reputation() {
    let mut svm = setup_litesvm();
    let oracle = create_initialized_registry(&mut svm);
    let a = create_registered_agent(&mut svm, "agent-a", &["trading"]);

    let ix = build_report_penalties_ix(&oracle.pubkey(), &a.pubkey(), 2, 3);
    let result = send_ix(&mut svm, ix, &oracle);
    assert!(result.is_ok(), "Report should succeed: {:?}", result.err());

    let profile = fetch_profile(&svm, &a.pubkey()).unwrap();
    assert_eq!(profile.slash_count, 2);
    assert_eq!(profile.reported_issue_count, 3);
    assert_eq!(profile.reputation, 45);

    println!("✅ test_report_penalties_lowers_reputation passed");
}

/// Counts are absolute: a later report replaces the earlier one
#[test]
fn test_report_penalties_replaces_counts() {
    let mut svm = setup_litesvm();
    let oracle = create_initialized_registry(&mut svm);
    let a = create_registered_agent(&mut svm, "agent-a", &["trading"]);

    let ix = build_report_penalties_ix(&oracle.pubkey(), &a.pubkey(), 10, 10);
    assert!(send_ix(&mut svm, ix, &oracle).is_ok());
    let ix = build_report_penalties_ix(&oracle.pubkey(), &a.pubkey(), 0, 0);
    assert!(send_ix(&mut svm, ix, &oracle).is_ok());

    assert_eq!(fetch_profile(&svm, &a.pubkey()).unwrap().reputation, 50);

    println!("✅ test_report_penalties_replaces_counts passed");
}

/// Score floors at zero for arbitrarily large penalty inputs
#[test]
fn test_report_penalties_clamps_at_zero() {
    let mut svm = setup_litesvm();
    let oracle = create_initialized_registry(&mut svm);
    let a = create_registered_agent(&mut svm, "agent-a", &["trading"]);

    let ix = build_report_penalties_ix(&oracle.pubkey(), &a.pubkey(), u32::MAX, u32::MAX);
    assert!(send_ix(&mut svm, ix, &oracle).is_ok());

    assert_eq!(fetch_profile(&svm, &a.pubkey()).unwrap().reputation, 0);

    println!("✅ test_report_penalties_clamps_at_zero passed");
}

#[test]
fn test_report_penalties_wrong_authority_fails() {
    let mut svm = setup_litesvm();
    create_initialized_registry(&mut svm);
    let a = create_registered_agent(&mut svm, "agent-a", &["trading"]);

    // Agents cannot clear or set their own penalties
    let ix = build_report_penalties_ix(&a.pubkey(), &a.pubkey(), 0, 0);
    assert_registry_error(send_ix(&mut svm, ix, &a), RegistryError::Unauthorized);

    println!("✅ test_report_penalties_wrong_authority_fails passed");
}

#[test]
fn test_report_penalties_unregistered_fails() {
    let mut svm = setup_litesvm();
    let oracle = create_initialized_registry(&mut svm);

    let ix = build_report_penalties_ix(&oracle.pubkey(), &Pubkey::new_unique(), 1, 0);
    assert_registry_error(send_ix(&mut svm, ix, &oracle), RegistryError::NotFound);

    println!("✅ test_report_penalties_unregistered_fails passed");
}

/// After the authority is renounced nobody can report penalties
#[test]
fn test_report_penalties_after_renounce_fails() {
    let mut svm = setup_litesvm();
    let oracle = create_initialized_registry(&mut svm);
    let a = create_registered_agent(&mut svm, "agent-a", &["trading"]);

    let ix = build_update_authority_ix(&oracle.pubkey(), None);
    assert!(send_ix(&mut svm, ix, &oracle).is_ok(), "Renounce should succeed");

    let ix = build_report_penalties_ix(&oracle.pubkey(), &a.pubkey(), 1, 0);
    assert_registry_error(send_ix(&mut svm, ix, &oracle), RegistryError::Unauthorized);

    let anyone = create_funded_keypair(&mut svm, FUNDING_LAMPORTS);
    let ix = build_report_penalties_ix(&anyone.pubkey(), &a.pubkey(), 1, 0);
    assert!(send_ix(&mut svm, ix, &anyone).is_err());

    println!("✅ test_report_penalties_after_renounce_fails passed");
}
