use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 0,
    AdminNotSet = 1,
    ConfigNotFound = 2,
    InvalidColorFormat = 3,
    InsufficientPayment = 4,
    GradientAlreadyExists = 5,
    SupplyExhausted = 6,
    UnknownToken = 7,
    Unauthorized = 8,
}
