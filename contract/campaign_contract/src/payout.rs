use crowdfund_common::CrowdfundError;
use soroban_sdk::{token, Address, Env};

/// Pull `amount` of `token` from `from` into this campaign.
pub fn collect(
    env: &Env,
    token: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), CrowdfundError> {
    let token_client = token::Client::new(env, token);
    match token_client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(CrowdfundError::TransferFailed),
    }
}

/// Send `amount` of `token` held by this campaign to `to`.
///
/// The caller must have committed every state change before calling this:
/// the token contract is arbitrary code and may call back in.
pub fn release(
    env: &Env,
    token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), CrowdfundError> {
    if amount == 0 {
        return Ok(());
    }

    let token_client = token::Client::new(env, token);
    match token_client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(CrowdfundError::TransferFailed),
    }
}
