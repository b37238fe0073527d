use crate::event::{emit_holder_reward_withdrawn, emit_owner_reward_withdrawn};
use crate::holder_info::{find_position, positions_of_pool, write_position};
use crate::ledger;
use crate::pool_info::{get_pool_by_address, pools_of_owner, write_pool};
use soroban_sdk::{Address, Env};

pub fn withdraw_holder_reward(e: &Env, pool: Address, holder: Address) {
    holder.require_auth();

    let pool_row = get_pool_by_address(e, &pool);
    let mut position = match find_position(e, &pool, &holder) {
        Some(position) => position,
        None => panic!("Holder not registered in this pool."),
    };
    assert!(position.available_reward > 0, "Reward balance equal to zero.");

    let amount = position.available_reward;
    ledger::transfer_as_agent(e, &pool_row.reward_account, &holder, amount);

    position.available_reward = 0;
    write_position(e, &position);

    emit_holder_reward_withdrawn(e, &pool, &holder, amount);
}

/// Sweeps the accrued owner reward of every pool this owner runs.
pub fn withdraw_owner_rewards(e: &Env, owner: Address) {
    owner.require_auth();

    let pools = pools_of_owner(e, &owner);
    assert!(!pools.is_empty(), "Pool does not exist.");

    for mut pool in pools.iter() {
        if pool.owner_available_reward <= 0 {
            continue;
        }

        let amount = pool.owner_available_reward;
        ledger::transfer_as_agent(e, &pool.reward_account, &pool.owner, amount);

        pool.owner_available_reward = 0;
        write_pool(e, &pool);

        emit_owner_reward_withdrawn(e, &owner, amount);
    }
}

/// Owner-driven payout of one pool: the owner's cut first, then every
/// active holder's accrued reward, each zeroed as it is paid.
pub fn pay_rewards(e: &Env, pool: Address, owner: Address) {
    owner.require_auth();

    let mut pool_row = get_pool_by_address(e, &pool);
    assert!(pool_row.owner == owner, "Invalid owner.");

    if pool_row.owner_available_reward > 0 {
        let amount = pool_row.owner_available_reward;
        ledger::transfer_as_agent(e, &pool_row.reward_account, &pool_row.owner, amount);
        pool_row.owner_available_reward = 0;
        write_pool(e, &pool_row);
        emit_owner_reward_withdrawn(e, &owner, amount);
    }

    for mut position in positions_of_pool(e, &pool).iter() {
        if !position.is_active {
            continue;
        }
        if position.available_reward <= 0 {
            continue;
        }

        let amount = position.available_reward;
        ledger::transfer_as_agent(e, &pool_row.reward_account, &position.holder, amount);

        position.available_reward = 0;
        write_position(e, &position);

        emit_holder_reward_withdrawn(e, &pool, &position.holder, amount);
    }
}
