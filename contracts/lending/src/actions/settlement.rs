use crate::admin::read_config;
use crate::event::{emit_fee_collected, emit_service_done};
use crate::holder_info::{read_position, write_position};
use crate::ledger;
use crate::pool_info::{read_pool, write_pool};
use crate::request_info::{read_holder_draws, read_pool_draws, read_request, write_request};
use soroban_sdk::Env;

/// Leg 1: the requester's fee and reward move into escrow, then the sourced
/// principal moves on from escrow to the operator.
pub fn collect_fee(e: &Env, tid: u64) {
    let config = read_config(e);
    let mut request = read_request(e, tid);
    assert!(!request.is_fee_paid, "Fee already collected.");

    let fee_and_reward = request.fee_tokens + request.reward_tokens;
    assert!(
        ledger::balance(e, &request.requester) >= fee_and_reward,
        "Insufficient token balance."
    );
    if fee_and_reward > 0 {
        ledger::transfer(e, &request.requester, &config.escrow, fee_and_reward);
    }

    request.is_fee_paid = true;
    write_request(e, &request);

    assert!(
        ledger::balance(e, &config.escrow) >= request.total_tokens,
        "Insufficient escrow token balance."
    );
    ledger::transfer_as_agent(e, &config.escrow, &config.operator, request.total_tokens);

    emit_fee_collected(e, tid, fee_and_reward);
}

/// Leg 2: principal comes back through escrow, the fee settles on the
/// operator, and every pool and holder that funded the request gets its
/// share — principal back to the pools, rewards onto the reward accounts,
/// owner and holder cuts accrued as payables.
pub fn complete_service(e: &Env, tid: u64) {
    let config = read_config(e);
    let mut request = read_request(e, tid);
    assert!(request.is_fee_paid, "Fee not collected yet.");
    assert!(!request.is_service_provided, "Service already provided.");

    assert!(
        ledger::balance(e, &config.operator) >= request.total_tokens,
        "Insufficient token balance."
    );
    ledger::transfer_as_agent(e, &config.operator, &config.escrow, request.total_tokens);

    request.is_service_provided = true;
    write_request(e, &request);

    assert!(
        ledger::balance(e, &config.escrow) >= request.fee_tokens,
        "Insufficient escrow token balance."
    );
    if request.fee_tokens > 0 {
        ledger::transfer_as_agent(e, &config.escrow, &config.operator, request.fee_tokens);
    }

    for draw in read_pool_draws(e, tid).iter() {
        let mut pool = read_pool(e, draw.pool_id);

        assert!(
            ledger::balance(e, &config.escrow) >= draw.reward_tokens + draw.tokens,
            "Insufficient escrow balance in reward distribution."
        );
        if draw.reward_tokens > 0 {
            ledger::transfer_as_agent(e, &config.escrow, &pool.reward_account, draw.reward_tokens);
        }
        ledger::transfer_as_agent(e, &config.escrow, &pool.pool, draw.tokens);

        pool.owner_available_reward += draw.owner_reward_tokens;
        write_pool(e, &pool);
    }

    // holder cuts accrue as payables; no tokens move until withdrawal
    for draw in read_holder_draws(e, tid).iter() {
        let mut position = read_position(e, draw.position_id);
        position.available_reward += draw.reward_tokens;
        write_position(e, &position);
    }

    emit_service_done(e, tid);
}
