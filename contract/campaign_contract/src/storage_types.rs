use soroban_sdk::{contracttype, Address, String};

// Instance storage: everything every call needs
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    CurrentAmount,
    ParticipantCount,
    Withdrawn,
}

// Persistent storage: one entry per contributor, plus its funding position
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Contribution(Address),
    ParticipantAt(u32),
}

/// Fixed at construction, never rewritten.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignConfig {
    pub owner: Address,
    pub token: Address, // Settlement asset, smallest unit
    pub name: String,
    pub description: String,
    pub target_amount: i128,
    pub deadline: u64, // Unix seconds
    pub max_participants: u32,
}
