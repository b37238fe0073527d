//! Multi-pool token lending: holders pool capital behind collateralized
//! pools, requesters draw liquidity against a fee, and rewards settle back
//! through a two-phase escrow hop.

use crate::actions::{lifecycle, request, rewards, settlement};
use crate::admin::{
    has_administrator, read_administrator, write_administrator, write_config, Config,
};
use crate::error::LendingError;
use crate::holder_info::find_position;
use crate::locks;
use crate::pool_info::{get_pool_by_address, read_pool, read_pool_ids};
use crate::request_info::{read_holder_draws, read_pool_draws, read_request};
use crate::stake::read_stake;
use crate::storage_types::{
    CollateralStake, HolderDraw, HolderPosition, Pool, PoolDraw, ServiceRequest,
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};

#[contract]
pub struct Lending;

#[contractimpl]
impl Lending {
    pub fn initialize(e: Env, admin: Address, config: Config) {
        if has_administrator(&e) {
            panic_with_error!(&e, LendingError::AlreadyInitialized);
        }
        write_administrator(&e, &admin);
        write_config(&e, &config);

        e.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    /// Seeds pool id 0, the guaranteed-liquidity fallback.
    pub fn create_main_pool(e: Env) {
        let admin = read_administrator(&e);
        admin.require_auth();

        lifecycle::create_main_pool(&e);
    }

    pub fn create_pool(
        e: Env,
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
        lifecycle::create_pool(
            &e,
            pool,
            owner,
            collateral_account,
            reward_account,
            reward_bps,
            is_private,
            owner_share_bps,
            holder_share_bps,
            collateral,
            restricted,
        )
    }

    pub fn join_pool(e: Env, pool: Address, holder: Address, tokens: i128) {
        lifecycle::join_pool(&e, pool, holder, tokens)
    }

    pub fn lend_more(e: Env, pool: Address, holder: Address, tokens: i128) {
        lifecycle::lend_more(&e, pool, holder, tokens)
    }

    pub fn leave_pool(e: Env, pool: Address, holder: Address) {
        lifecycle::leave_pool(&e, pool, holder)
    }

    pub fn set_pool_fee(e: Env, pool: Address, reward_bps: u32) {
        lifecycle::set_pool_fee(&e, pool, reward_bps)
    }

    pub fn terminate_pool(e: Env, pool: Address) {
        lifecycle::terminate_pool(&e, pool)
    }

    pub fn request_tokens(e: Env, tid: u64, requester: Address, tokens: i128) {
        request::request_tokens(&e, tid, requester, tokens)
    }

    pub fn collect_fee(e: Env, tid: u64) {
        settlement::collect_fee(&e, tid)
    }

    pub fn complete_service(e: Env, tid: u64) {
        settlement::complete_service(&e, tid)
    }

    pub fn withdraw_holder_reward(e: Env, pool: Address, holder: Address) {
        rewards::withdraw_holder_reward(&e, pool, holder)
    }

    pub fn withdraw_owner_rewards(e: Env, owner: Address) {
        rewards::withdraw_owner_rewards(&e, owner)
    }

    pub fn pay_rewards(e: Env, pool: Address, owner: Address) {
        rewards::pay_rewards(&e, pool, owner)
    }

    /// Keeper entrypoint: releases every lock whose expiry has passed.
    pub fn release_locks(e: Env) {
        locks::release_expired(&e)
    }

    pub fn purge_request(e: Env, tid: u64) {
        request::purge_request(&e, tid)
    }
}

// Read-only surface
#[contractimpl]
impl Lending {
    pub fn config(e: Env) -> Config {
        crate::admin::read_config(&e)
    }

    pub fn get_pool(e: Env, pool: Address) -> Pool {
        get_pool_by_address(&e, &pool)
    }

    pub fn get_pool_by_id(e: Env, id: u64) -> Pool {
        read_pool(&e, id)
    }

    pub fn pool_count(e: Env) -> u32 {
        read_pool_ids(&e).len()
    }

    pub fn get_position(e: Env, pool: Address, holder: Address) -> Option<HolderPosition> {
        find_position(&e, &pool, &holder)
    }

    pub fn get_stake(e: Env, collateral: Address) -> Option<CollateralStake> {
        read_stake(&e, &collateral)
    }

    pub fn get_request(e: Env, tid: u64) -> ServiceRequest {
        read_request(&e, tid)
    }

    pub fn get_pool_draws(e: Env, tid: u64) -> Vec<PoolDraw> {
        read_pool_draws(&e, tid)
    }

    pub fn get_holder_draws(e: Env, tid: u64) -> Vec<HolderDraw> {
        read_holder_draws(&e, tid)
    }
}
