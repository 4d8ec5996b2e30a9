#![no_std]

mod events;
mod payout;
mod storage_types;


use crowdfund_common::{
    compute_deadline, page_bounds, validate_campaign_params, CampaignInfo, CampaignState,
    CrowdfundError, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String, Vec};

pub use storage_types::CampaignConfig;
use storage_types::{DataKey, PersistentKey};

/// Escrow for one funding round.
///
/// Accepts at most one contribution per address while the deadline has not
/// passed, then lets the owner take the whole balance exactly once.
#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    pub fn __constructor(
        e: Env,
        owner: Address,
        token: Address,
        name: String,
        description: String,
        target_amount: i128,
        duration_days: u64,
        max_participants: u32,
    ) {
        if let Err(err) = validate_campaign_params(
            &name,
            &description,
            target_amount,
            duration_days,
            max_participants,
        ) {
            panic_with_error!(&e, err);
        }

        let deadline = compute_deadline(e.ledger().timestamp(), duration_days)
            .unwrap_or_else(|err| panic_with_error!(&e, err));

        let config = CampaignConfig {
            owner: owner.clone(),
            token,
            name,
            description,
            target_amount,
            deadline,
            max_participants,
        };

        e.storage().instance().set(&DataKey::Config, &config);
        e.storage().instance().set(&DataKey::CurrentAmount, &0i128);
        e.storage().instance().set(&DataKey::ParticipantCount, &0u32);
        e.storage().instance().set(&DataKey::Withdrawn, &false);
        extend_instance(&e);

        log!(&e, "campaign opened", owner, target_amount, deadline);
    }

    /// Contribute `amount` of the campaign token.
    ///
    /// Each address may fund once. A second attempt is rejected with
    /// `AlreadyFunded`; it is never merged into the first contribution.
    pub fn fund(e: Env, funder: Address, amount: i128) -> Result<(), CrowdfundError> {
        funder.require_auth();

        let now = e.ledger().timestamp();
        let config = load_config(&e);

        if current_state(&e, &config, now) != CampaignState::Open {
            return Err(CrowdfundError::CampaignClosed);
        }

        let contribution_key = PersistentKey::Contribution(funder.clone());
        if e.storage().persistent().has(&contribution_key) {
            return Err(CrowdfundError::AlreadyFunded);
        }

        if amount <= 0 {
            return Err(CrowdfundError::ZeroAmount);
        }

        let position = load_participant_count(&e);
        if position >= config.max_participants {
            return Err(CrowdfundError::ParticipantCapReached);
        }

        let current_amount = load_current_amount(&e)
            .checked_add(amount)
            .ok_or(CrowdfundError::AmountOverflow)?;

        let participant_key = PersistentKey::ParticipantAt(position);
        e.storage().persistent().set(&contribution_key, &amount);
        e.storage().persistent().set(&participant_key, &funder);
        e.storage().instance().set(&DataKey::ParticipantCount, &(position + 1));
        e.storage().instance().set(&DataKey::CurrentAmount, &current_amount);
        extend_persistent(&e, &contribution_key);
        extend_persistent(&e, &participant_key);
        extend_instance(&e);

        payout::collect(&e, &config.token, &funder, amount)?;

        log!(&e, "campaign funded", funder, amount, current_amount);
        events::emit_funded(&e, funder, amount);

        Ok(())
    }

    /// Pay the whole balance to the owner once the deadline has passed.
    ///
    /// The payout goes to the owner whether or not the target was reached.
    pub fn withdraw(e: Env, caller: Address) -> Result<(), CrowdfundError> {
        caller.require_auth();

        let now = e.ledger().timestamp();
        let config = load_config(&e);

        if now < config.deadline {
            return Err(CrowdfundError::NotYetExpired);
        }
        if caller != config.owner {
            return Err(CrowdfundError::Unauthorized);
        }
        if load_withdrawn(&e) {
            return Err(CrowdfundError::AlreadyWithdrawn);
        }

        let amount = settle(&e, |e, amount| {
            payout::release(e, &config.token, &config.owner, amount)
        })?;

        log!(&e, "campaign settled", config.owner, amount);
        events::emit_withdrawn(&e, config.owner, amount);

        Ok(())
    }

    pub fn is_active(e: Env) -> bool {
        let config = load_config(&e);
        current_state(&e, &config, e.ledger().timestamp()) == CampaignState::Open
    }

    pub fn get_state(e: Env) -> CampaignState {
        let config = load_config(&e);
        current_state(&e, &config, e.ledger().timestamp())
    }

    pub fn get_all_information(e: Env) -> CampaignInfo {
        let now = e.ledger().timestamp();
        let config = load_config(&e);
        let is_active = current_state(&e, &config, now) == CampaignState::Open;

        CampaignInfo {
            name: config.name,
            description: config.description,
            target_amount: config.target_amount,
            current_amount: load_current_amount(&e),
            deadline: config.deadline,
            max_participants: config.max_participants,
            participants_count: load_participant_count(&e),
            owner: config.owner,
            is_active,
        }
    }

    /// Contributors in the order they funded.
    ///
    /// Reads one storage entry per contributor, so a campaign with a large
    /// cap can outgrow the per-transaction read limit here. Use
    /// `get_participants_paginated` to walk it in pages.
    pub fn get_participants(e: Env) -> Vec<Address> {
        load_participants(&e, 0, load_participant_count(&e))
    }

    /// Up to `limit` contributors starting at funding position `offset`.
    pub fn get_participants_paginated(e: Env, offset: u32, limit: u32) -> Vec<Address> {
        match page_bounds(load_participant_count(&e), offset, limit) {
            Some((start, end)) => load_participants(&e, start, end),
            None => Vec::new(&e),
        }
    }

    /// Amount contributed by `participant`, 0 if it never funded.
    pub fn get_fund_amount(e: Env, participant: Address) -> i128 {
        e.storage()
            .persistent()
            .get(&PersistentKey::Contribution(participant))
            .unwrap_or(0)
    }

    pub fn get_current_amount(e: Env) -> i128 {
        load_current_amount(&e)
    }

    pub fn get_deadline(e: Env) -> u64 {
        load_config(&e).deadline
    }

    pub fn get_owner(e: Env) -> Address {
        load_config(&e).owner
    }

    pub fn get_token(e: Env) -> Address {
        load_config(&e).token
    }

    pub fn is_withdrawn(e: Env) -> bool {
        load_withdrawn(&e)
    }

    /// Informational only: reaching the target neither closes funding nor
    /// changes who can withdraw.
    pub fn is_goal_reached(e: Env) -> bool {
        load_current_amount(&e) >= load_config(&e).target_amount
    }
}

// Helper functions
fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn load_config(e: &Env) -> CampaignConfig {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(e, CrowdfundError::NotInitialized))
}

fn load_current_amount(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::CurrentAmount).unwrap_or(0)
}

fn load_participant_count(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::ParticipantCount).unwrap_or(0)
}

fn load_participants(e: &Env, start: u32, end: u32) -> Vec<Address> {
    let mut participants = Vec::new(e);
    for position in start..end {
        if let Some(participant) = e
            .storage()
            .persistent()
            .get(&PersistentKey::ParticipantAt(position))
        {
            participants.push_back(participant);
        }
    }
    participants
}

fn load_withdrawn(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Withdrawn).unwrap_or(false)
}

// Close the campaign, then hand its balance to `transfer`. The flag is written
// first so that anything `transfer` calls already sees a settled campaign.
fn settle<F>(e: &Env, transfer: F) -> Result<i128, CrowdfundError>
where
    F: FnOnce(&Env, i128) -> Result<(), CrowdfundError>,
{
    e.storage().instance().set(&DataKey::Withdrawn, &true);
    extend_instance(e);

    let amount = load_current_amount(e);
    transfer(e, amount)?;
    Ok(amount)
}

fn current_state(e: &Env, config: &CampaignConfig, now: u64) -> CampaignState {
    CampaignState::at(now, config.deadline, load_withdrawn(e))
}
