use crate::actions::settlement;
use crate::admin::{read_administrator, read_config};
use crate::event::{
    emit_drawn, emit_holder_drawn, emit_locked, emit_request_opened, emit_request_purged,
};
use crate::holder_info::{positions_by_lru, read_position, write_position};
use crate::ledger;
use crate::locks;
use crate::pool_info::{pools_by_ascending_reward, read_pool, write_pool};
use crate::request_info::{
    has_request, purge_request_records, push_holder_draw, push_pool_draw, read_request,
    register_request,
};
use crate::storage_types::{
    HolderDraw, HolderLock, Pool, PoolDraw, PoolLock, ServiceRequest, BPS_DENOMINATOR,
    MAIN_POOL_ID,
};
use soroban_sdk::{vec, Address, Env, Vec};

/// Sources the requested amount from the cheapest eligible pools, locks the
/// drawn capital, and settles fees and rewards through escrow, all in one
/// invocation.
pub fn request_tokens(e: &Env, tid: u64, requester: Address, tokens: i128) {
    requester.require_auth();

    assert!(tokens > 0, "Amount must be positive.");
    assert!(!has_request(e, tid), "TID already exists.");

    // lazy sweep: anything already expired is spendable again before the walk
    locks::release_expired(e);

    let config = read_config(e);
    let now = e.ledger().timestamp();
    let fee_tokens = tokens * config.fee_bps as i128 / BPS_DENOMINATOR;

    let mut tokens_found: i128 = 0;
    let mut total_reward: i128 = 0;

    for id in pools_by_ascending_reward(e).iter() {
        if tokens_found >= tokens {
            break;
        }

        let mut pool = read_pool(e, id);

        // the main pool is reserved as the fallback
        if pool.id == MAIN_POOL_ID {
            continue;
        }
        if !pool.is_active {
            continue;
        }
        // collateral slipped below what was staked at registration
        if ledger::balance(e, &pool.collateral_account) < pool.collateral_amount {
            continue;
        }
        if pool.available_tokens <= 0 {
            continue;
        }
        let pool_balance = ledger::balance(e, &pool.pool);
        if pool_balance <= 0 {
            continue;
        }
        let mut restricted = false;
        for blocked in pool.restricted.iter() {
            if blocked == requester {
                restricted = true;
                break;
            }
        }
        if restricted {
            continue;
        }

        let outstanding = tokens - tokens_found;
        let drawn = if outstanding <= pool.available_tokens {
            outstanding
        } else {
            pool.available_tokens
        };

        assert!(pool_balance >= drawn, "Insufficient pool token balance.");
        ledger::transfer_as_agent(e, &pool.pool, &config.escrow, drawn);

        let reward_tokens = drawn * pool.reward_bps as i128 / BPS_DENOMINATOR;
        let owner_reward_tokens = reward_tokens * pool.owner_share_bps as i128 / BPS_DENOMINATOR;
        total_reward += reward_tokens;

        push_pool_draw(
            e,
            &PoolDraw {
                tid,
                requester: requester.clone(),
                pool_id: pool.id,
                pool: pool.pool.clone(),
                tokens: drawn,
                reward_bps: pool.reward_bps,
                reward_tokens,
                owner_reward_tokens,
                created_at: now,
            },
        );

        let locked_until = now + pool.lock_secs;
        draw_from_holders(e, tid, &requester, &pool, drawn, locked_until);

        pool.lock_until = locked_until;
        pool.available_tokens -= drawn;
        write_pool(e, &pool);

        locks::push_pool_lock(
            e,
            &PoolLock {
                pool_id: pool.id,
                tokens: drawn,
                locked_until,
                created_at: now,
            },
        );
        locks::schedule_unlock(e, tid, pool.id, locked_until);

        emit_drawn(e, tid, &pool.pool, drawn, reward_tokens);
        emit_locked(e, pool.id, drawn, locked_until);

        tokens_found += drawn;
    }

    // liquidity of last resort: the shortfall comes from the main pool with
    // no eligibility checks, no lock and no holder split
    if tokens_found < tokens {
        let main = read_pool(e, MAIN_POOL_ID);
        let drawn = tokens - tokens_found;

        ledger::transfer_as_agent(e, &main.pool, &config.escrow, drawn);

        let reward_tokens = drawn * main.reward_bps as i128 / BPS_DENOMINATOR;
        let owner_reward_tokens = reward_tokens * main.owner_share_bps as i128 / BPS_DENOMINATOR;
        total_reward += reward_tokens;

        push_pool_draw(
            e,
            &PoolDraw {
                tid,
                requester: requester.clone(),
                pool_id: main.id,
                pool: main.pool.clone(),
                tokens: drawn,
                reward_bps: main.reward_bps,
                reward_tokens,
                owner_reward_tokens,
                created_at: now,
            },
        );

        emit_drawn(e, tid, &main.pool, drawn, reward_tokens);
        tokens_found += drawn;
    }

    register_request(
        e,
        &ServiceRequest {
            tid,
            requester: requester.clone(),
            is_fee_paid: false,
            is_service_provided: false,
            total_tokens: tokens_found,
            fee_tokens,
            reward_tokens: total_reward,
            created_at: now,
        },
    );
    emit_request_opened(e, tid, &requester, tokens_found, fee_tokens);

    settlement::collect_fee(e, tid);
    settlement::complete_service(e, tid);
}

/// Splits one pool-level draw across that pool's holders, least recently
/// drawn first, so draw pressure rotates instead of always hitting the
/// same positions.
fn draw_from_holders(
    e: &Env,
    tid: u64,
    requester: &Address,
    pool: &Pool,
    amount: i128,
    locked_until: u64,
) {
    let now = e.ledger().timestamp();

    let mut found: i128 = 0;
    let mut batch: Vec<(u64, i128)> = vec![e];

    for id in positions_by_lru(e, &pool.pool).iter() {
        if found >= amount {
            break;
        }

        let position = read_position(e, id);
        if !position.is_active {
            continue;
        }
        if position.remaining_tokens <= 0 {
            continue;
        }

        let outstanding = amount - found;
        let drawn = if outstanding <= position.remaining_tokens {
            outstanding
        } else {
            position.remaining_tokens
        };
        found += drawn;

        let reward_tokens = drawn * pool.reward_bps as i128 / BPS_DENOMINATOR
            * pool.holder_share_bps as i128
            / BPS_DENOMINATOR;

        push_holder_draw(
            e,
            &HolderDraw {
                tid,
                requester: requester.clone(),
                pool: pool.pool.clone(),
                position_id: position.id,
                holder: position.holder.clone(),
                tokens: drawn,
                reward_tokens,
                created_at: now,
            },
        );
        locks::push_holder_lock(
            e,
            &HolderLock {
                pool_id: pool.id,
                position_id: position.id,
                tokens: drawn,
                locked_until,
                created_at: now,
            },
        );
        emit_holder_drawn(e, tid, &position.holder, drawn, reward_tokens);

        batch.push_back((position.id, drawn));
    }

    // the pool's available tokens promised this much; anything less means
    // pool and holder bookkeeping have drifted apart
    assert!(found == amount, "Holder balances out of sync with pool.");

    for (id, drawn) in batch.iter() {
        let mut position = read_position(e, id);
        position.remaining_tokens -= drawn;
        // fully drained positions go to the back of the rotation;
        // partially drawn ones keep their place at the front
        if position.remaining_tokens <= 0 {
            position.last_used_at = now;
        }
        write_position(e, &position);
    }
}

/// Admin-only audit-trail cleanup for a fully settled request.
pub fn purge_request(e: &Env, tid: u64) {
    let admin = read_administrator(e);
    admin.require_auth();

    let request = read_request(e, tid);
    assert!(
        request.is_fee_paid && request.is_service_provided,
        "Request not settled yet."
    );

    purge_request_records(e, tid);
    emit_request_purged(e, tid);
}
