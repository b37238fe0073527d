use crate::storage_types::{extend_persistent, DataKey, HolderDraw, PoolDraw, ServiceRequest};
use soroban_sdk::{vec, Env, Vec};

pub fn has_request(e: &Env, tid: u64) -> bool {
    let key = DataKey::Request(tid);
    e.storage().persistent().has(&key)
}

pub fn read_request(e: &Env, tid: u64) -> ServiceRequest {
    let key = DataKey::Request(tid);
    match e.storage().persistent().get(&key) {
        Some(request) => {
            extend_persistent(e, &key);
            request
        }
        None => panic!("Record does not exist for TID."),
    }
}

pub fn write_request(e: &Env, request: &ServiceRequest) {
    let key = DataKey::Request(request.tid);
    e.storage().persistent().set(&key, request);
    extend_persistent(e, &key);
}

pub fn read_request_tids(e: &Env) -> Vec<u64> {
    let key = DataKey::RequestTids;
    e.storage().persistent().get(&key).unwrap_or(vec![e])
}

pub fn register_request(e: &Env, request: &ServiceRequest) {
    write_request(e, request);

    let key = DataKey::RequestTids;
    let mut tids = read_request_tids(e);
    tids.push_back(request.tid);
    e.storage().persistent().set(&key, &tids);
    extend_persistent(e, &key);
}

pub fn read_pool_draws(e: &Env, tid: u64) -> Vec<PoolDraw> {
    let key = DataKey::PoolDraws(tid);
    e.storage().persistent().get(&key).unwrap_or(vec![e])
}

pub fn push_pool_draw(e: &Env, draw: &PoolDraw) {
    let key = DataKey::PoolDraws(draw.tid);
    let mut draws = read_pool_draws(e, draw.tid);
    draws.push_back(draw.clone());
    e.storage().persistent().set(&key, &draws);
    extend_persistent(e, &key);
}

pub fn read_holder_draws(e: &Env, tid: u64) -> Vec<HolderDraw> {
    let key = DataKey::HolderDraws(tid);
    e.storage().persistent().get(&key).unwrap_or(vec![e])
}

pub fn push_holder_draw(e: &Env, draw: &HolderDraw) {
    let key = DataKey::HolderDraws(draw.tid);
    let mut draws = read_holder_draws(e, draw.tid);
    draws.push_back(draw.clone());
    e.storage().persistent().set(&key, &draws);
    extend_persistent(e, &key);
}

/// Deletes a request's audit rows: collect the surviving tids first, then
/// rewrite the registry and drop the per-tid entries.
pub fn purge_request_records(e: &Env, tid: u64) {
    let mut remaining = vec![e];
    for other in read_request_tids(e).iter() {
        if other != tid {
            remaining.push_back(other);
        }
    }
    e.storage().persistent().set(&DataKey::RequestTids, &remaining);

    e.storage().persistent().remove(&DataKey::Request(tid));
    e.storage().persistent().remove(&DataKey::PoolDraws(tid));
    e.storage().persistent().remove(&DataKey::HolderDraws(tid));
}
