use crate::storage_types::{extend_persistent, DataKey, HolderPosition};
use soroban_sdk::{vec, Address, Env, Vec};

pub fn write_position(e: &Env, position: &HolderPosition) {
    let key = DataKey::Position(position.id);
    e.storage().persistent().set(&key, position);
    extend_persistent(e, &key);
}

pub fn read_position(e: &Env, id: u64) -> HolderPosition {
    let key = DataKey::Position(id);
    extend_persistent(e, &key);
    e.storage().persistent().get(&key).unwrap()
}

pub fn read_position_ids(e: &Env) -> Vec<u64> {
    let key = DataKey::Positions;
    e.storage().persistent().get(&key).unwrap_or(vec![e])
}

pub fn register_position(e: &Env, position: &HolderPosition) {
    write_position(e, position);

    let key = DataKey::Positions;
    let mut ids = read_position_ids(e);
    ids.push_back(position.id);
    e.storage().persistent().set(&key, &ids);
    extend_persistent(e, &key);
}

/// A holder has at most one position per pool; re-entry merges into it,
/// so the first match is the only match.
pub fn find_position(e: &Env, pool: &Address, holder: &Address) -> Option<HolderPosition> {
    for id in read_position_ids(e).iter() {
        let position = read_position(e, id);
        if position.pool == *pool && position.holder == *holder {
            return Some(position);
        }
    }
    None
}

pub fn positions_of_pool(e: &Env, pool: &Address) -> Vec<HolderPosition> {
    let mut positions = vec![e];
    for id in read_position_ids(e).iter() {
        let position = read_position(e, id);
        if position.pool == *pool {
            positions.push_back(position);
        }
    }
    positions
}

/// Position ids of one pool, least recently drawn first; equal timestamps
/// keep their registry insertion order.
pub fn positions_by_lru(e: &Env, pool: &Address) -> Vec<u64> {
    let mut ordered: Vec<u64> = vec![e];
    for id in read_position_ids(e).iter() {
        let position = read_position(e, id);
        if position.pool != *pool {
            continue;
        }
        let mut at = ordered.len();
        for (i, other) in ordered.iter().enumerate() {
            if read_position(e, other).last_used_at > position.last_used_at {
                at = i as u32;
                break;
            }
        }
        ordered.insert(at, id);
    }
    ordered
}
