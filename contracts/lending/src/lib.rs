#![no_std]

mod actions;
mod admin;
mod contract;
mod error;
mod event;
mod holder_info;
mod ledger;
mod locks;
mod math;
mod pool_info;
mod request_info;
mod stake;
mod storage_types;

pub use crate::contract::LendingClient;
