use crate::storage_types::{extend_persistent, DataKey, Pool};
use soroban_sdk::{vec, Address, Env, Vec};

pub fn write_pool(e: &Env, pool: &Pool) {
    let key = DataKey::Pool(pool.id);
    e.storage().persistent().set(&key, pool);
    extend_persistent(e, &key);
}

pub fn read_pool(e: &Env, id: u64) -> Pool {
    let key = DataKey::Pool(id);
    extend_persistent(e, &key);
    e.storage().persistent().get(&key).unwrap()
}

pub fn try_read_pool(e: &Env, id: u64) -> Option<Pool> {
    let key = DataKey::Pool(id);
    e.storage().persistent().get(&key)
}

pub fn read_pool_ids(e: &Env) -> Vec<u64> {
    let key = DataKey::Pools;
    e.storage().persistent().get(&key).unwrap_or(vec![e])
}

/// Writes the pool row and appends its id to the insertion-order registry.
pub fn register_pool(e: &Env, pool: &Pool) {
    write_pool(e, pool);

    let key = DataKey::Pools;
    let mut ids = read_pool_ids(e);
    ids.push_back(pool.id);
    e.storage().persistent().set(&key, &ids);
    extend_persistent(e, &key);
}

pub fn find_pool_by_address(e: &Env, pool: &Address) -> Option<Pool> {
    for id in read_pool_ids(e).iter() {
        let row = read_pool(e, id);
        if row.pool == *pool {
            return Some(row);
        }
    }
    None
}

pub fn get_pool_by_address(e: &Env, pool: &Address) -> Pool {
    match find_pool_by_address(e, pool) {
        Some(row) => row,
        None => panic!("Pool not found."),
    }
}

pub fn pools_of_owner(e: &Env, owner: &Address) -> Vec<Pool> {
    let mut owned = vec![e];
    for id in read_pool_ids(e).iter() {
        let row = read_pool(e, id);
        if row.owner == *owner {
            owned.push_back(row);
        }
    }
    owned
}

/// Pool ids ordered by ascending reward rate; equal rates keep their
/// registry insertion order.
pub fn pools_by_ascending_reward(e: &Env) -> Vec<u64> {
    let mut ordered: Vec<u64> = vec![e];
    for id in read_pool_ids(e).iter() {
        let rate = read_pool(e, id).reward_bps;
        let mut at = ordered.len();
        for (i, other) in ordered.iter().enumerate() {
            if read_pool(e, other).reward_bps > rate {
                at = i as u32;
                break;
            }
        }
        ordered.insert(at, id);
    }
    ordered
}

/// Mirrors deposits and withdrawals into the pool's running totals.
pub fn adjust_pool_totals(e: &Env, id: u64, tokens: i128, increment: bool) {
    let mut pool = read_pool(e, id);
    if increment {
        pool.total_tokens += tokens;
        pool.available_tokens += tokens;
    } else {
        pool.total_tokens -= tokens;
        pool.available_tokens -= tokens;
    }
    write_pool(e, &pool);
}
