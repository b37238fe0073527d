use crate::event::emit_unlocked;
use crate::holder_info::{read_position, write_position};
use crate::pool_info::{read_pool, write_pool};
use crate::storage_types::{extend_persistent, DataKey, HolderLock, PoolLock, UnlockTask};
use soroban_sdk::{vec, Env, Vec};

pub fn read_pool_locks(e: &Env) -> Vec<PoolLock> {
    let key = DataKey::PoolLocks;
    e.storage().persistent().get(&key).unwrap_or(vec![e])
}

pub fn write_pool_locks(e: &Env, locks: &Vec<PoolLock>) {
    let key = DataKey::PoolLocks;
    e.storage().persistent().set(&key, locks);
    extend_persistent(e, &key);
}

pub fn push_pool_lock(e: &Env, lock: &PoolLock) {
    let mut locks = read_pool_locks(e);
    locks.push_back(lock.clone());
    write_pool_locks(e, &locks);
}

pub fn read_holder_locks(e: &Env) -> Vec<HolderLock> {
    let key = DataKey::HolderLocks;
    e.storage().persistent().get(&key).unwrap_or(vec![e])
}

pub fn write_holder_locks(e: &Env, locks: &Vec<HolderLock>) {
    let key = DataKey::HolderLocks;
    e.storage().persistent().set(&key, locks);
    extend_persistent(e, &key);
}

pub fn push_holder_lock(e: &Env, lock: &HolderLock) {
    let mut locks = read_holder_locks(e);
    locks.push_back(lock.clone());
    write_holder_locks(e, &locks);
}

pub fn read_unlock_queue(e: &Env) -> Vec<UnlockTask> {
    let key = DataKey::UnlockQueue;
    e.storage().persistent().get(&key).unwrap_or(vec![e])
}

pub fn write_unlock_queue(e: &Env, queue: &Vec<UnlockTask>) {
    let key = DataKey::UnlockQueue;
    e.storage().persistent().set(&key, queue);
    extend_persistent(e, &key);
}

/// Enqueues a sweep for one outstanding lock. A task with the same
/// (tid, pool) key is still in flight only while its lock is, so
/// re-scheduling replaces it.
pub fn schedule_unlock(e: &Env, tid: u64, pool_id: u64, due_at: u64) {
    let task = UnlockTask {
        tid,
        pool_id,
        due_at,
    };

    let mut queue = read_unlock_queue(e);
    if let Some(at) = queue
        .iter()
        .position(|queued| queued.tid == tid && queued.pool_id == pool_id)
    {
        queue.set(at.try_into().unwrap(), task);
    } else {
        queue.push_back(task);
    }
    write_unlock_queue(e, &queue);
}

/// Releases every expired lock back into its pool's available tokens or
/// its position's remaining tokens, and drops due sweep tasks. Unexpired
/// locks stay for a later sweep.
pub fn release_expired(e: &Env) {
    let now = e.ledger().timestamp();

    let mut pending = vec![e];
    for task in read_unlock_queue(e).iter() {
        if task.due_at > now {
            pending.push_back(task);
        }
    }
    write_unlock_queue(e, &pending);

    let mut kept_pool_locks = vec![e];
    for lock in read_pool_locks(e).iter() {
        if lock.locked_until <= now {
            let mut pool = read_pool(e, lock.pool_id);
            pool.available_tokens += lock.tokens;
            write_pool(e, &pool);
            emit_unlocked(e, lock.pool_id, lock.tokens);
        } else {
            kept_pool_locks.push_back(lock);
        }
    }
    write_pool_locks(e, &kept_pool_locks);

    let mut kept_holder_locks = vec![e];
    for lock in read_holder_locks(e).iter() {
        if lock.locked_until <= now {
            let mut position = read_position(e, lock.position_id);
            position.remaining_tokens += lock.tokens;
            write_position(e, &position);
        } else {
            kept_holder_locks.push_back(lock);
        }
    }
    write_holder_locks(e, &kept_holder_locks);
}
