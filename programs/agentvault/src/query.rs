//! Read operations over raw account data.
//!
//! The registry's reads are plain account fetches: clients resolve a record by
//! its derived address (profiles, stats) or scan program accounts with a
//! memcmp filter (endorsements by target). These helpers decode what a client
//! fetched and are shared by off-chain callers and tests.

use anchor_lang::prelude::*;
use anchor_lang::Discriminator;

use crate::address::{find_agent_profile_address, find_registry_stats_address};
use crate::state::{AgentProfile, Endorsement, RegistryStats};

/// memcmp offset of `Endorsement::endorser` (after the discriminator)
pub const ENDORSEMENT_ENDORSER_OFFSET: usize = 8;

/// memcmp offset of `Endorsement::target`
pub const ENDORSEMENT_TARGET_OFFSET: usize = 8 + 32;

pub fn decode_profile(data: &[u8]) -> Result<AgentProfile> {
    AgentProfile::try_deserialize(&mut &data[..])
}

pub fn decode_endorsement(data: &[u8]) -> Result<Endorsement> {
    Endorsement::try_deserialize(&mut &data[..])
}

pub fn decode_stats(data: &[u8]) -> Result<RegistryStats> {
    RegistryStats::try_deserialize(&mut &data[..])
}

/// Fetch and decode the profile registered for `wallet`.
/// `fetch` returns the account data at an address, or None if it is empty.
pub fn get_profile<F>(wallet: &Pubkey, fetch: F) -> Result<Option<AgentProfile>>
where
    F: FnOnce(&Pubkey) -> Option<Vec<u8>>,
{
    let (address, _) = find_agent_profile_address(wallet);
    fetch(&address).map(|data| decode_profile(&data)).transpose()
}

pub fn get_stats<F>(fetch: F) -> Result<Option<RegistryStats>>
where
    F: FnOnce(&Pubkey) -> Option<Vec<u8>>,
{
    let (address, _) = find_registry_stats_address();
    fetch(&address).map(|data| decode_stats(&data)).transpose()
}

/// Live endorsements targeting `target` among scanned program accounts.
/// Accounts of other record types are skipped.
pub fn endorsements_for_target<'a, I>(accounts: I, target: &Pubkey) -> Vec<(Pubkey, Endorsement)>
where
    I: IntoIterator<Item = (Pubkey, &'a [u8])>,
{
    accounts
        .into_iter()
        .filter(|(_, data)| is_endorsement_for(data, target))
        .filter_map(|(address, data)| decode_endorsement(data).ok().map(|e| (address, e)))
        .collect()
}

fn is_endorsement_for(data: &[u8], target: &Pubkey) -> bool {
    data.len() >= ENDORSEMENT_TARGET_OFFSET + 32
        && data.starts_with(Endorsement::DISCRIMINATOR)
        && &data[ENDORSEMENT_TARGET_OFFSET..ENDORSEMENT_TARGET_OFFSET + 32] == target.as_ref()
}
