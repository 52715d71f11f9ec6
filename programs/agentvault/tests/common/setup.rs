use litesvm::LiteSVM;
use solana_sdk::{clock::Clock, pubkey::Pubkey};
use std::path::PathBuf;

/// AgentVault program ID (matches declare_id! in lib.rs)
pub const AGENTVAULT_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("AgntVLT1111111111111111111111111111111111111");

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Find the AgentVault program .so file
fn find_program_file() -> PathBuf {
    let possible_paths = [
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/deploy/agentvault.so"),
        PathBuf::from("../../target/deploy/agentvault.so"),
        PathBuf::from("target/deploy/agentvault.so"),
    ];

    for path in &possible_paths {
        if path.exists() {
            return path.clone();
        }
    }

    // Default to standard path
    PathBuf::from("../../target/deploy/agentvault.so")
}

/// Initialize LiteSVM with the AgentVault program
pub fn setup_litesvm() -> LiteSVM {
    let mut svm = LiteSVM::new();

    let program_path = find_program_file();
    svm.add_program_from_file(AGENTVAULT_PROGRAM_ID, &program_path)
        .expect("Failed to load AgentVault program. Run 'anchor build' first.");

    svm
}

/// Move the cluster clock forward
pub fn advance_clock(svm: &mut LiteSVM, seconds: i64) {
    let mut clock = svm.get_sysvar::<Clock>();
    clock.unix_timestamp += seconds;
    clock.slot += 1;
    svm.set_sysvar::<Clock>(&clock);
    svm.expire_blockhash();
}

pub fn derive_registry_stats_pda() -> (Pubkey, u8) {
    agentvault::address::find_registry_stats_address()
}

pub fn derive_agent_profile_pda(wallet: &Pubkey) -> (Pubkey, u8) {
    agentvault::address::find_agent_profile_address(wallet)
}

pub fn derive_endorsement_pda(endorser: &Pubkey, target: &Pubkey, skill: &str) -> (Pubkey, u8) {
    agentvault::address::find_endorsement_address(endorser, target, skill)
}
