#![allow(ambiguous_glob_reexports)]

pub mod compute_reputation;
pub mod endorse_skill;
pub mod initialize;
pub mod register_agent;
pub mod report_penalties;
pub mod revoke_endorsement;
pub mod update_authority;
pub mod update_profile;

pub use compute_reputation::*;
pub use endorse_skill::*;
pub use initialize::*;
pub use register_agent::*;
pub use report_penalties::*;
pub use revoke_endorsement::*;
pub use update_authority::*;
pub use update_profile::*;
