use soroban_sdk::contracterror;

/// Every way a registry or campaign call can be rejected.
///
/// Codes 2..=6 are creation-argument validation failures, one per field.
/// A call that returns any of these leaves storage exactly as it found it.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    NotInitialized = 1,

    // Creation arguments
    EmptyName = 2,
    EmptyDescription = 3,
    InvalidTargetAmount = 4,
    InvalidDuration = 5,
    InvalidMaxParticipants = 6,

    // Funding
    CampaignClosed = 10,
    AlreadyFunded = 11,
    ZeroAmount = 12,
    ParticipantCapReached = 13,
    AmountOverflow = 14,

    // Settlement
    NotYetExpired = 20,
    Unauthorized = 21,
    AlreadyWithdrawn = 22,
    TransferFailed = 23,
}
