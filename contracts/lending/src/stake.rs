use crate::storage_types::{extend_persistent, CollateralStake, DataKey};
use soroban_sdk::{Address, Env};

pub fn write_stake(e: &Env, stake: &CollateralStake) {
    let key = DataKey::Stake(stake.collateral.clone());
    e.storage().persistent().set(&key, stake);
    extend_persistent(e, &key);
}

pub fn has_stake(e: &Env, collateral: &Address) -> bool {
    let key = DataKey::Stake(collateral.clone());
    e.storage().persistent().has(&key)
}

pub fn read_stake(e: &Env, collateral: &Address) -> Option<CollateralStake> {
    let key = DataKey::Stake(collateral.clone());
    e.storage().persistent().get(&key)
}

pub fn remove_stake(e: &Env, collateral: &Address) {
    let key = DataKey::Stake(collateral.clone());
    e.storage().persistent().remove(&key);
}
