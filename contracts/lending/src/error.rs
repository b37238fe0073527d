use soroban_sdk::{self, contracterror};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LendingError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
}
