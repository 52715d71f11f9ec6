//! Tests for the update_profile instruction

use solana_sdk::signer::Signer;

use crate::common::{
    accounts::{
        create_funded_keypair, create_initialized_registry, create_registered_agent,
        fetch_profile, send_ix, FUNDING_LAMPORTS,
    },
    errors::{assert_registry_error, RegistryError},
    instructions::build_update_profile_ix,
    setup::{advance_clock, derive_agent_profile_pda, setup_litesvm},
};

#[test]
fn test_update_metadata_only() {
    let mut svm = setup_litesvm();
    create_initialized_registry(&mut svm);
    let owner = create_registered_agent(&mut svm, "alpha", &["trading"]);
    let (profile_pda, _) = derive_agent_profile_pda(&owner.pubkey());

    advance_clock(&mut svm, 60);
    let ix = build_update_profile_ix(
        &owner.pubkey(),
        &profile_pda,
        Some("https://agentvault.dev/agents/alpha-v2.json"),
        None,
    );
    let result = send_ix(&mut svm, ix, &owner);
    assert!(result.is_ok(), "Update should succeed: {:?}", result.err());

    let profile = fetch_profile(&svm, &owner.pubkey()).unwrap();
    assert_eq!(
        profile.metadata_uri,
        "https://agentvault.dev/agents/alpha-v2.json"
    );
    // Skills untouched by a partial update
    assert_eq!(profile.skills, vec!["trading"]);
    assert_eq!(profile.activity_count, 1);
    assert_eq!(profile.last_active, profile.registered_at + 60);

    println!("✅ test_update_metadata_only passed");
}

#[test]
fn test_update_skills_only() {
    let mut svm = setup_litesvm();
    create_initialized_registry(&mut svm);
    let owner = create_registered_agent(&mut svm, "alpha", &["trading"]);
    let before = fetch_profile(&svm, &owner.pubkey()).unwrap();
    let (profile_pda, _) = derive_agent_profile_pda(&owner.pubkey());

    let ix = build_update_profile_ix(
        &owner.pubkey(),
        &profile_pda,
        None,
        Some(&["coding", "research"]),
    );
    let result = send_ix(&mut svm, ix, &owner);
    assert!(result.is_ok(), "Update should succeed: {:?}", result.err());

    let profile = fetch_profile(&svm, &owner.pubkey()).unwrap();
    assert_eq!(profile.skills, vec!["coding", "research"]);
    assert_eq!(profile.metadata_uri, before.metadata_uri);
    assert_eq!(profile.name, before.name);

    println!("✅ test_update_skills_only passed");
}

#[test]
fn test_update_missing_profile_fails() {
    let mut svm = setup_litesvm();
    create_initialized_registry(&mut svm);
    let stranger = create_funded_keypair(&mut svm, FUNDING_LAMPORTS);
    let (profile_pda, _) = derive_agent_profile_pda(&stranger.pubkey());

    let ix = build_update_profile_ix(&stranger.pubkey(), &profile_pda, Some(""), None);
    assert_registry_error(send_ix(&mut svm, ix, &stranger), RegistryError::NotFound);

    println!("✅ test_update_missing_profile_fails passed");
}

/// Signing for someone else's profile is rejected
#[test]
fn test_update_foreign_profile_fails() {
    let mut svm = setup_litesvm();
    create_initialized_registry(&mut svm);
    let victim = create_registered_agent(&mut svm, "victim", &["trading"]);
    let attacker = create_registered_agent(&mut svm, "attacker", &["trading"]);
    let before = fetch_profile(&svm, &victim.pubkey()).unwrap();
    let (victim_pda, _) = derive_agent_profile_pda(&victim.pubkey());

    let ix = build_update_profile_ix(
        &attacker.pubkey(),
        &victim_pda,
        Some("https://evil.example/agent.json"),
        None,
    );
    assert_registry_error(
        send_ix(&mut svm, ix, &attacker),
        RegistryError::Unauthorized,
    );
    assert_eq!(fetch_profile(&svm, &victim.pubkey()).unwrap(), before);

    println!("✅ test_update_foreign_profile_fails passed");
}

#[test]
fn test_update_invalid_skill_count_leaves_profile_unchanged() {
    let mut svm = setup_litesvm();
    create_initialized_registry(&mut svm);
    let owner = create_registered_agent(&mut svm, "alpha", &["trading"]);
    let before = fetch_profile(&svm, &owner.pubkey()).unwrap();
    let (profile_pda, _) = derive_agent_profile_pda(&owner.pubkey());

    // Metadata is valid but the skills are not: nothing may be applied
    let ix = build_update_profile_ix(
        &owner.pubkey(),
        &profile_pda,
        Some("https://agentvault.dev/agents/alpha-v2.json"),
        Some(&[]),
    );
    assert_registry_error(
        send_ix(&mut svm, ix, &owner),
        RegistryError::InvalidSkillCount,
    );
    assert_eq!(fetch_profile(&svm, &owner.pubkey()).unwrap(), before);

    println!("✅ test_update_invalid_skill_count_leaves_profile_unchanged passed");
}
