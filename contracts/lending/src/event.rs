use soroban_sdk::{symbol_short, Address, Env};

/// Emits an event when a lending pool is registered.
pub fn emit_pool_created(e: &Env, pool_id: u64, pool: &Address, owner: &Address, collateral: i128) {
    e.events().publish(
        (symbol_short!("pool_new"), pool_id),
        (pool.clone(), owner.clone(), collateral),
    );
}

/// Emits an event when the main pool is seeded.
pub fn emit_main_pool_created(e: &Env, balance: i128) {
    e.events().publish((symbol_short!("mainpool"),), balance);
}

/// Emits an event when a pool's reward rate changes.
pub fn emit_fee_changed(e: &Env, pool: &Address, old_bps: u32, new_bps: u32) {
    e.events()
        .publish((symbol_short!("fee_chg"), pool.clone()), (old_bps, new_bps));
}

/// Emits an event when a pool is terminated and unwound.
pub fn emit_pool_terminated(e: &Env, pool: &Address) {
    e.events()
        .publish((symbol_short!("pool_term"), pool.clone()), ());
}

/// Emits an event when a holder deposits into a pool.
pub fn emit_joined(e: &Env, pool: &Address, holder: &Address, amount: i128) {
    e.events().publish(
        (symbol_short!("joined"), pool.clone(), holder.clone()),
        amount,
    );
}

/// Emits an event when a holder tops up an existing position.
pub fn emit_lent_more(e: &Env, pool: &Address, holder: &Address, amount: i128) {
    e.events().publish(
        (symbol_short!("lent_more"), pool.clone(), holder.clone()),
        amount,
    );
}

/// Emits an event when a holder leaves a pool.
pub fn emit_left(e: &Env, pool: &Address, holder: &Address, principal: i128, reward: i128) {
    e.events().publish(
        (symbol_short!("left"), pool.clone(), holder.clone()),
        (principal, reward),
    );
}

/// Emits an event when a service request is opened.
pub fn emit_request_opened(e: &Env, tid: u64, requester: &Address, total: i128, fee: i128) {
    e.events().publish(
        (symbol_short!("req_open"), tid),
        (requester.clone(), total, fee),
    );
}

/// Emits an event per pool-level draw.
pub fn emit_drawn(e: &Env, tid: u64, pool: &Address, amount: i128, reward: i128) {
    e.events()
        .publish((symbol_short!("drawn"), tid, pool.clone()), (amount, reward));
}

/// Emits an event per holder-level draw.
pub fn emit_holder_drawn(e: &Env, tid: u64, holder: &Address, amount: i128, reward: i128) {
    e.events().publish(
        (symbol_short!("hldr_drwn"), tid, holder.clone()),
        (amount, reward),
    );
}

/// Emits an event when drawn tokens are time-locked.
pub fn emit_locked(e: &Env, pool_id: u64, amount: i128, locked_until: u64) {
    e.events().publish(
        (symbol_short!("locked"), pool_id),
        (amount, locked_until),
    );
}

/// Emits an event when a lock expires and its tokens are released.
pub fn emit_unlocked(e: &Env, pool_id: u64, amount: i128) {
    e.events()
        .publish((symbol_short!("unlocked"), pool_id), amount);
}

/// Emits an event when the requester's fee and reward reach escrow.
pub fn emit_fee_collected(e: &Env, tid: u64, amount: i128) {
    e.events().publish((symbol_short!("fee_paid"), tid), amount);
}

/// Emits an event when the service-completion leg settles.
pub fn emit_service_done(e: &Env, tid: u64) {
    e.events().publish((symbol_short!("serv_done"), tid), ());
}

/// Emits an event when a holder withdraws accrued reward.
pub fn emit_holder_reward_withdrawn(e: &Env, pool: &Address, holder: &Address, amount: i128) {
    e.events().publish(
        (symbol_short!("rwd_hldr"), pool.clone(), holder.clone()),
        amount,
    );
}

/// Emits an event when a pool owner withdraws accrued reward.
pub fn emit_owner_reward_withdrawn(e: &Env, owner: &Address, amount: i128) {
    e.events()
        .publish((symbol_short!("rwd_ownr"), owner.clone()), amount);
}

/// Emits an event when a settled request's audit rows are purged.
pub fn emit_request_purged(e: &Env, tid: u64) {
    e.events().publish((symbol_short!("req_purge"), tid), ());
}
