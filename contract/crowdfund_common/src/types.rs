use soroban_sdk::{contracttype, Address, String};

/// Lifecycle of a campaign. `Open` and `Expired` are derived from the
/// ledger clock on every call; only `Settled` is ever written.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignState {
    Open,
    Expired,
    Settled,
}

impl CampaignState {
    pub fn at(now: u64, deadline: u64, withdrawn: bool) -> Self {
        if withdrawn {
            CampaignState::Settled
        } else if now < deadline {
            CampaignState::Open
        } else {
            CampaignState::Expired
        }
    }
}

/// Point-in-time view of a campaign, read in a single call.
///
/// Field order is part of the public interface.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignInfo {
    pub name: String,
    pub description: String,
    pub target_amount: i128,
    pub current_amount: i128,
    pub deadline: u64,
    pub max_participants: u32,
    pub participants_count: u32,
    pub owner: Address,
    pub is_active: bool,
}
