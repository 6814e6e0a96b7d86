use soroban_sdk::{contracterror, contracttype, Address, BytesN};

/// Fee rates are expressed in tenths of a percent: `rate / 1000` of a payment.
pub const FEE_DENOMINATOR: u32 = 1000;

/// Default platform fee applied by the reference deployment (0.3%).
pub const DEFAULT_FEE_RATE: u32 = 3;

/// Storage keys for per-contract entries.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Fee rate override for one billing contract.
    FeeOverride(ProductRef),
    /// Membership marker for every billing contract ever registered.
    Known(ProductRef),
}

/// Identifies one billing contract: the contract hosting it plus its product id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductRef {
    pub host: Address,
    pub product_id: u32,
}

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    InvalidFeeRate = 400,
    AccessDenied = 401,
    NotInitialized = 404,
    AlreadyInitialized = 409,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct FeeOverrideSetEvent {
    pub product: ProductRef,
    /// `None` when the override was removed and the default applies again.
    pub fee_rate: Option<u32>,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct DefaultFeeRateSetEvent {
    pub previous: u32,
    pub fee_rate: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SignerSetEvent {
    pub signer: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ContractRegisteredEvent {
    pub product: ProductRef,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}
