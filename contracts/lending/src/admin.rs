use crate::storage_types::DataKey;
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub token: Address,
    pub operator: Address,
    pub escrow: Address,
    pub fee_bps: u32,
    pub main_pool: Address,
    pub main_pool_reward_account: Address,
    pub main_pool_reward_bps: u32,
    pub min_collateral: i128,
    pub lock_coefficient: i128,
}

pub fn has_administrator(e: &Env) -> bool {
    let key = DataKey::Admin;
    e.storage().instance().has(&key)
}

pub fn read_administrator(e: &Env) -> Address {
    let key = DataKey::Admin;
    e.storage().instance().get(&key).unwrap()
}

pub fn write_administrator(e: &Env, id: &Address) {
    let key = DataKey::Admin;
    e.storage().instance().set(&key, id);
}

pub fn write_config(e: &Env, config: &Config) {
    let key = DataKey::Config;
    e.storage().persistent().set(&key, config);
}

pub fn read_config(e: &Env) -> Config {
    let key = DataKey::Config;
    e.storage().persistent().get(&key).unwrap()
}

pub fn get_and_increase_pool_id(e: &Env) -> u64 {
    let prev = e
        .storage()
        .persistent()
        .get(&DataKey::PoolId)
        .unwrap_or(0u64);

    e.storage().persistent().set(&DataKey::PoolId, &(prev + 1));
    prev
}

pub fn get_and_increase_position_id(e: &Env) -> u64 {
    let prev = e
        .storage()
        .persistent()
        .get(&DataKey::PositionId)
        .unwrap_or(0u64);

    e.storage()
        .persistent()
        .set(&DataKey::PositionId, &(prev + 1));
    prev
}
