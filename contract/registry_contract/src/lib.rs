#![no_std]

mod events;
mod index;
mod storage_types;


use crowdfund_common::{
    compute_deadline, page_bounds, validate_campaign_params, CrowdfundError, INSTANCE_BUMP_AMOUNT,
    INSTANCE_LIFETIME_THRESHOLD,
};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, BytesN, Env, String, Vec};

pub use events::CampaignCreatedEvent;
pub use storage_types::RegistryConfig;
use storage_types::DataKey;

/// Mints campaign contracts and keeps them discoverable.
///
/// The registry never touches campaign funds; once created, a campaign is
/// used directly at its own address.
#[contract]
pub struct RegistryContract;

#[contractimpl]
impl RegistryContract {
    pub fn __constructor(e: Env, token: Address, campaign_wasm_hash: BytesN<32>) {
        let config = RegistryConfig {
            token,
            campaign_wasm_hash,
        };
        e.storage().instance().set(&DataKey::Config, &config);
        e.storage().instance().set(&DataKey::CampaignCount, &0u32);
        extend_instance(&e);
    }

    /// Deploy a new campaign owned by `owner` and index it.
    ///
    /// The deadline is `duration_days` whole days from the current ledger
    /// time. Fails with the validation code of the first bad argument
    /// without deploying anything.
    pub fn create_campaign(
        e: Env,
        owner: Address,
        name: String,
        description: String,
        target_amount: i128,
        duration_days: u64,
        max_participants: u32,
    ) -> Result<Address, CrowdfundError> {
        owner.require_auth();

        validate_campaign_params(
            &name,
            &description,
            target_amount,
            duration_days,
            max_participants,
        )?;
        compute_deadline(e.ledger().timestamp(), duration_days)?;

        let config = load_config(&e);
        let salt = deployment_salt(&e, index::count(&e));

        let campaign = e
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(
                config.campaign_wasm_hash,
                (
                    owner.clone(),
                    config.token,
                    name,
                    description,
                    target_amount,
                    duration_days,
                    max_participants,
                ),
            );

        record_campaign(&e, &owner, &campaign);

        Ok(campaign)
    }

    /// Every campaign in creation order.
    ///
    /// Reads one storage entry per campaign, so once the registry outgrows
    /// the per-transaction read limit this call fails. Callers that need to
    /// walk a large registry should use `get_projects_paginated`.
    pub fn get_all_projects(e: Env) -> Vec<Address> {
        index::range(&e, 0, index::count(&e))
    }

    /// Campaigns created by `owner`, oldest first. Empty for unknown owners.
    ///
    /// Reads one storage entry per campaign of that owner and shares the read
    /// limit of `get_all_projects`; use `get_projects_by_owner_paginated` for
    /// prolific owners.
    pub fn get_projects_by_owner(e: Env, owner: Address) -> Vec<Address> {
        index::by_owner(&e, &owner, 0, index::owner_count(&e, &owner))
    }

    /// Up to `limit` of `owner`'s campaigns starting at `offset` within that
    /// owner's own creation order.
    pub fn get_projects_by_owner_paginated(
        e: Env,
        owner: Address,
        offset: u32,
        limit: u32,
    ) -> Vec<Address> {
        match page_bounds(index::owner_count(&e, &owner), offset, limit) {
            Some((start, end)) => index::by_owner(&e, &owner, start, end),
            None => Vec::new(&e),
        }
    }

    /// Up to `limit` campaigns starting at creation position `offset`.
    /// An offset past the end yields an empty list, not an error.
    pub fn get_projects_paginated(e: Env, offset: u32, limit: u32) -> Vec<Address> {
        match page_bounds(index::count(&e), offset, limit) {
            Some((start, end)) => index::range(&e, start, end),
            None => Vec::new(&e),
        }
    }

    pub fn get_projects_count(e: Env) -> u32 {
        index::count(&e)
    }

    pub fn get_config(e: Env) -> RegistryConfig {
        load_config(&e)
    }
}

// Helper functions

// Index a freshly deployed campaign and announce it. Returns its position.
fn record_campaign(e: &Env, owner: &Address, campaign: &Address) -> u32 {
    let position = index::push(e, owner, campaign);
    extend_instance(e);

    log!(e, "campaign created", campaign.clone(), owner.clone(), position);
    events::emit_campaign_created(
        e,
        CampaignCreatedEvent {
            campaign: campaign.clone(),
            owner: owner.clone(),
        },
    );

    position
}

fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn load_config(e: &Env) -> RegistryConfig {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(e, CrowdfundError::NotInitialized))
}

// Big-endian position in the low bytes; unique per campaign.
fn deployment_salt(e: &Env, position: u32) -> BytesN<32> {
    let mut salt = [0u8; 32];
    salt[28..].copy_from_slice(&position.to_be_bytes());
    BytesN::from_array(e, &salt)
}
