use soroban_sdk::{contracttype, Address, Env, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Rates are basis points: 50 = 0.50%.
pub(crate) const BPS_DENOMINATOR: i128 = 10_000;

/// The main pool is registered first and acts as the lender of last resort.
pub(crate) const MAIN_POOL_ID: u64 = 0;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    pub id: u64,
    pub pool: Address,
    pub owner: Address,
    pub collateral_account: Address,
    pub reward_account: Address,
    pub reward_bps: u32,
    pub is_private: bool,
    pub owner_share_bps: u32,
    pub holder_share_bps: u32,
    pub total_tokens: i128,
    pub available_tokens: i128,
    pub collateral_amount: i128,
    pub owner_available_reward: i128,
    pub lock_until: u64,
    pub lock_secs: u64,
    pub created_at: u64,
    pub is_active: bool,
    pub restricted: Vec<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HolderPosition {
    pub id: u64,
    pub pool: Address,
    pub holder: Address,
    pub tokens: i128,
    pub remaining_tokens: i128,
    pub available_reward: i128,
    pub last_used_at: u64,
    pub created_at: u64,
    pub is_active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralStake {
    pub collateral: Address,
    pub tokens: i128,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceRequest {
    pub tid: u64,
    pub requester: Address,
    pub is_fee_paid: bool,
    pub is_service_provided: bool,
    pub total_tokens: i128,
    pub fee_tokens: i128,
    pub reward_tokens: i128,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolDraw {
    pub tid: u64,
    pub requester: Address,
    pub pool_id: u64,
    pub pool: Address,
    pub tokens: i128,
    pub reward_bps: u32,
    pub reward_tokens: i128,
    pub owner_reward_tokens: i128,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HolderDraw {
    pub tid: u64,
    pub requester: Address,
    pub pool: Address,
    pub position_id: u64,
    pub holder: Address,
    pub tokens: i128,
    pub reward_tokens: i128,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolLock {
    pub pool_id: u64,
    pub tokens: i128,
    pub locked_until: u64,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HolderLock {
    pub pool_id: u64,
    pub position_id: u64,
    pub tokens: i128,
    pub locked_until: u64,
    pub created_at: u64,
}

/// One scheduled unlock sweep per outstanding pool lock, keyed (tid, pool).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnlockTask {
    pub tid: u64,
    pub pool_id: u64,
    pub due_at: u64,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    PoolId,
    Pools,
    Pool(u64),
    PositionId,
    Positions,
    Position(u64),
    Stake(Address),
    Request(u64),
    RequestTids,
    PoolDraws(u64),
    HolderDraws(u64),
    PoolLocks,
    HolderLocks,
    UnlockQueue,
}

pub(crate) fn extend_persistent(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}
