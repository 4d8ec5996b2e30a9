//! Append-only discovery indexes over minted campaigns.
//!
//! Each address is stored under its own key, one for the global creation
//! order and one for the owner's own order, so appending never rewrites a
//! growing list and a page read only touches the entries it returns.

use crowdfund_common::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use soroban_sdk::{Address, Env, Vec};

use crate::storage_types::{DataKey, PersistentKey};

pub fn count(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::CampaignCount).unwrap_or(0)
}

pub fn owner_count(e: &Env, owner: &Address) -> u32 {
    e.storage()
        .persistent()
        .get(&PersistentKey::OwnerCampaignCount(owner.clone()))
        .unwrap_or(0)
}

/// Record `campaign` as the newest entry globally and for `owner`.
/// Returns its global position.
pub fn push(e: &Env, owner: &Address, campaign: &Address) -> u32 {
    let position = count(e);
    let owner_position = owner_count(e, owner);

    let campaign_key = PersistentKey::CampaignAt(position);
    let owner_key = PersistentKey::OwnerCampaignAt(owner.clone(), owner_position);
    let owner_count_key = PersistentKey::OwnerCampaignCount(owner.clone());

    e.storage().persistent().set(&campaign_key, campaign);
    e.storage().persistent().set(&owner_key, campaign);
    e.storage().persistent().set(&owner_count_key, &(owner_position + 1));
    e.storage().instance().set(&DataKey::CampaignCount, &(position + 1));

    extend_persistent(e, &campaign_key);
    extend_persistent(e, &owner_key);
    extend_persistent(e, &owner_count_key);

    position
}

/// Campaigns in creation order, `start..end`.
pub fn range(e: &Env, start: u32, end: u32) -> Vec<Address> {
    let mut campaigns = Vec::new(e);
    for position in start..end {
        if let Some(campaign) = e.storage().persistent().get(&PersistentKey::CampaignAt(position)) {
            campaigns.push_back(campaign);
        }
    }
    campaigns
}

/// `owner`'s campaigns in their own creation order, `start..end`.
pub fn by_owner(e: &Env, owner: &Address, start: u32, end: u32) -> Vec<Address> {
    let mut campaigns = Vec::new(e);
    for position in start..end {
        let key = PersistentKey::OwnerCampaignAt(owner.clone(), position);
        if let Some(campaign) = e.storage().persistent().get(&key) {
            campaigns.push_back(campaign);
        }
    }
    campaigns
}

fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
