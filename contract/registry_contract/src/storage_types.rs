use soroban_sdk::{contracttype, Address, BytesN};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    CampaignCount,
}

// Storage keys for the append-only campaign indexes
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    CampaignAt(u32),                 // creation position -> campaign
    OwnerCampaignCount(Address),     // owner -> number of campaigns
    OwnerCampaignAt(Address, u32),   // (owner, owner-local position) -> campaign
}

/// What every campaign minted by this registry shares.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RegistryConfig {
    pub token: Address,
    pub campaign_wasm_hash: BytesN<32>,
}
