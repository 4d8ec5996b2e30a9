use soroban_sdk::{symbol_short, Address, Env};

pub fn emit_funded(env: &Env, funder: Address, amount: i128) {
    env.events().publish((symbol_short!("funded"), funder), amount);
}

pub fn emit_withdrawn(env: &Env, owner: Address, amount: i128) {
    env.events().publish((symbol_short!("withdrawn"), owner), amount);
}
