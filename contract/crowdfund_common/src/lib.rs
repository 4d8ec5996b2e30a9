#![no_std]

mod errors;
mod paging;
mod types;
mod validation;


pub use errors::CrowdfundError;
pub use paging::page_bounds;
pub use types::{CampaignInfo, CampaignState};
pub use validation::{compute_deadline, validate_campaign_params};

pub const SECONDS_PER_DAY: u64 = 86400;

// Ledgers close roughly every 5 seconds
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS; // 30 days
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS; // 90 days
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
