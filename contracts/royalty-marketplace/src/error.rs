use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 0,
    AdminNotSet = 1,
    Unauthorized = 2,
    InsufficientBalance = 3,
    AssetNotFound = 4,
    NoUriSet = 5,
}
