use crate::admin::{get_and_increase_pool_id, get_and_increase_position_id, read_config};
use crate::event::{
    emit_fee_changed, emit_joined, emit_left, emit_lent_more, emit_main_pool_created,
    emit_pool_created, emit_pool_terminated,
};
use crate::holder_info::{find_position, positions_of_pool, register_position, write_position};
use crate::ledger;
use crate::math::lock_duration_secs;
use crate::pool_info::{
    adjust_pool_totals, find_pool_by_address, get_pool_by_address, read_pool, read_pool_ids,
    register_pool, try_read_pool, write_pool,
};
use crate::stake::{has_stake, remove_stake, write_stake};
use crate::storage_types::{CollateralStake, HolderPosition, Pool, MAIN_POOL_ID};
use soroban_sdk::{vec, Address, Env, Vec};

/// Registers the main pool under id 0 with the tokens already sitting on
/// the configured main-pool account. Owner keeps the whole reward: the
/// fallback has no outside holders.
pub fn create_main_pool(e: &Env) {
    let config = read_config(e);

    assert!(
        try_read_pool(e, MAIN_POOL_ID).is_none(),
        "Main pool already created."
    );

    let balance = ledger::balance(e, &config.main_pool);
    assert!(balance > 0, "Tokens not found.");

    let now = e.ledger().timestamp();
    let id = get_and_increase_pool_id(e);

    register_pool(
        e,
        &Pool {
            id,
            pool: config.main_pool.clone(),
            owner: config.main_pool.clone(),
            collateral_account: config.main_pool.clone(),
            reward_account: config.main_pool_reward_account.clone(),
            reward_bps: config.main_pool_reward_bps,
            is_private: false,
            owner_share_bps: 10_000,
            holder_share_bps: 0,
            total_tokens: balance,
            available_tokens: balance,
            collateral_amount: balance,
            owner_available_reward: 0,
            lock_until: now,
            lock_secs: 0,
            created_at: now,
            is_active: true,
            restricted: vec![e],
        },
    );

    emit_main_pool_created(e, balance);
}

pub fn create_pool(
    e: &Env,
    pool: Address,
    owner: Address,
    collateral_account: Address,
    reward_account: Address,
    reward_bps: u32,
    is_private: bool,
    owner_share_bps: u32,
    holder_share_bps: u32,
    collateral: i128,
    restricted: Vec<Address>,
) {
    owner.require_auth();

    let config = read_config(e);

    assert!(
        try_read_pool(e, MAIN_POOL_ID).is_some(),
        "Main pool is not created yet."
    );
    assert!(
        find_pool_by_address(e, &pool).is_none(),
        "Pool already exists."
    );
    for id in read_pool_ids(e).iter() {
        let row = read_pool(e, id);
        assert!(
            !row.is_active || row.collateral_account != collateral_account,
            "Collateral account already in use."
        );
    }
    assert!(!has_stake(e, &collateral_account), "Collateral already staked.");
    assert!(collateral >= config.min_collateral, "Invalid collateral amount.");
    assert!(
        ledger::balance(e, &collateral_account) >= collateral,
        "Balance less than collateral amount."
    );

    let lock_secs = lock_duration_secs(config.lock_coefficient, collateral);
    let now = e.ledger().timestamp();
    let id = get_and_increase_pool_id(e);

    register_pool(
        e,
        &Pool {
            id,
            pool: pool.clone(),
            owner: owner.clone(),
            collateral_account: collateral_account.clone(),
            reward_account,
            reward_bps,
            is_private,
            owner_share_bps,
            holder_share_bps,
            total_tokens: 0,
            available_tokens: 0,
            collateral_amount: collateral,
            owner_available_reward: 0,
            lock_until: now,
            lock_secs,
            created_at: now,
            is_active: true,
            restricted,
        },
    );

    write_stake(
        e,
        &CollateralStake {
            collateral: collateral_account,
            tokens: collateral,
            created_at: now,
        },
    );

    emit_pool_created(e, id, &pool, &owner, collateral);
}

pub fn join_pool(e: &Env, pool: Address, holder: Address, tokens: i128) {
    holder.require_auth();

    let pool_row = get_pool_by_address(e, &pool);
    assert!(pool_row.is_active, "Pool is terminated.");
    assert!(tokens > 0, "Amount must be positive.");
    assert!(
        ledger::balance(e, &holder) >= tokens,
        "Insufficient token balance."
    );

    ledger::transfer(e, &holder, &pool, tokens);

    let now = e.ledger().timestamp();
    match find_position(e, &pool, &holder) {
        Some(mut position) => {
            position.is_active = true;
            position.tokens += tokens;
            position.remaining_tokens += tokens;
            write_position(e, &position);
        }
        None => {
            let id = get_and_increase_position_id(e);
            register_position(
                e,
                &HolderPosition {
                    id,
                    pool: pool.clone(),
                    holder: holder.clone(),
                    tokens,
                    remaining_tokens: tokens,
                    available_reward: 0,
                    last_used_at: now,
                    created_at: now,
                    is_active: true,
                },
            );
        }
    }

    adjust_pool_totals(e, pool_row.id, tokens, true);
    emit_joined(e, &pool, &holder, tokens);
}

pub fn lend_more(e: &Env, pool: Address, holder: Address, tokens: i128) {
    holder.require_auth();

    let pool_row = get_pool_by_address(e, &pool);
    assert!(pool_row.is_active, "Pool is terminated.");

    let mut position = match find_position(e, &pool, &holder) {
        Some(position) => position,
        None => panic!("Holder not registered in this pool."),
    };
    assert!(position.is_active, "Holder not registered in this pool.");
    assert!(tokens > 0, "Amount must be positive.");
    assert!(
        ledger::balance(e, &holder) >= tokens,
        "Insufficient token balance."
    );

    ledger::transfer(e, &holder, &pool, tokens);

    position.tokens += tokens;
    position.remaining_tokens += tokens;
    write_position(e, &position);

    adjust_pool_totals(e, pool_row.id, tokens, true);
    emit_lent_more(e, &pool, &holder, tokens);
}

pub fn leave_pool(e: &Env, pool: Address, holder: Address) {
    holder.require_auth();

    let pool_row = get_pool_by_address(e, &pool);
    assert!(pool_row.is_active, "Pool is terminated.");

    let mut position = match find_position(e, &pool, &holder) {
        Some(position) => position,
        None => panic!("Holder not registered in this pool."),
    };
    assert!(position.is_active, "Holder already terminated.");
    assert!(
        position.remaining_tokens == position.tokens,
        "Tokens currently locked or in use."
    );

    let principal = position.tokens;
    let reward = position.available_reward;

    if principal > 0 {
        assert!(
            ledger::balance(e, &pool) >= principal,
            "Insufficient pool balance."
        );
        ledger::transfer_as_agent(e, &pool, &holder, principal);
    }
    if reward > 0 {
        assert!(
            ledger::balance(e, &pool_row.reward_account) >= reward,
            "Insufficient reward account balance."
        );
        ledger::transfer_as_agent(e, &pool_row.reward_account, &holder, reward);
    }

    position.is_active = false;
    position.tokens = 0;
    position.remaining_tokens = 0;
    position.available_reward = 0;
    write_position(e, &position);

    adjust_pool_totals(e, pool_row.id, principal, false);
    emit_left(e, &pool, &holder, principal, reward);
}

pub fn set_pool_fee(e: &Env, pool: Address, reward_bps: u32) {
    let mut pool_row = get_pool_by_address(e, &pool);
    assert!(pool_row.is_active, "Pool is terminated.");

    pool_row.owner.require_auth();

    let old_bps = pool_row.reward_bps;
    pool_row.reward_bps = reward_bps;
    write_pool(e, &pool_row);

    emit_fee_changed(e, &pool, old_bps, reward_bps);
}

/// Unwinds a pool: pays every active holder principal and reward, pays the
/// owner's accrued reward, deactivates the pool, and releases its
/// collateral stake. Fails while any holder has tokens out on loan.
pub fn terminate_pool(e: &Env, pool: Address) {
    let mut pool_row = get_pool_by_address(e, &pool);
    assert!(pool_row.is_active, "Pool already terminated.");

    pool_row.owner.require_auth();

    let pool_balance = ledger::balance(e, &pool);
    if pool_balance == 0 {
        pool_row.is_active = false;
        pool_row.owner_available_reward = 0;
        pool_row.total_tokens = 0;
        pool_row.available_tokens = 0;
        write_pool(e, &pool_row);
        remove_stake(e, &pool_row.collateral_account);
        emit_pool_terminated(e, &pool);
        return;
    }

    let positions = positions_of_pool(e, &pool);

    let mut holders_principal: i128 = 0;
    let mut holders_reward: i128 = 0;
    for position in positions.iter() {
        if !position.is_active {
            continue;
        }
        assert!(
            position.remaining_tokens == position.tokens,
            "Pool tokens locked or in use."
        );
        holders_principal += position.tokens;
        holders_reward += position.available_reward;
    }

    if holders_principal > 0 {
        assert!(pool_balance >= holders_principal, "Insufficient pool balance.");
    }
    if holders_reward + pool_row.owner_available_reward > 0 {
        assert!(
            ledger::balance(e, &pool_row.reward_account)
                >= holders_reward + pool_row.owner_available_reward,
            "Insufficient reward account balance."
        );
    }

    for mut position in positions.iter() {
        if !position.is_active {
            continue;
        }
        if position.tokens > 0 {
            ledger::transfer_as_agent(e, &pool, &position.holder, position.tokens);
        }
        if position.available_reward > 0 {
            ledger::transfer_as_agent(
                e,
                &pool_row.reward_account,
                &position.holder,
                position.available_reward,
            );
        }

        position.is_active = false;
        position.tokens = 0;
        position.remaining_tokens = 0;
        position.available_reward = 0;
        write_position(e, &position);
    }

    if pool_row.owner_available_reward > 0 {
        ledger::transfer_as_agent(
            e,
            &pool_row.reward_account,
            &pool_row.owner,
            pool_row.owner_available_reward,
        );
    }

    // whatever is left on the account after the payouts
    let final_balance = ledger::balance(e, &pool);

    pool_row.is_active = false;
    pool_row.owner_available_reward = 0;
    pool_row.total_tokens = final_balance;
    pool_row.available_tokens = 0;
    write_pool(e, &pool_row);

    remove_stake(e, &pool_row.collateral_account);
    emit_pool_terminated(e, &pool);
}
