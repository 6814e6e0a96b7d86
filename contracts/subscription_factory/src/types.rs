use soroban_sdk::{contracterror, contracttype, Address, String};

/// Minimum price accepted by the reference deployment (1 unit of a 6-decimal token).
pub const DEFAULT_MIN_COST: i128 = 1_000_000;

/// Billing interval given to factory-created contracts by the reference deployment.
pub const DEFAULT_INTERVAL_SECONDS: u64 = 24 * 60 * 60;

/// Maximum product id this contract will ever allocate.
///
/// When the counter reaches this value product creation returns
/// [`Error::ProductLimitReached`] instead of wrapping or panicking.
pub const MAX_PRODUCT_ID: u32 = u32::MAX;

/// Storage keys for per-product and per-subscriber entries.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Live billing contract record.
    Product(u32),
    /// Tombstone left behind by `delete_subscription_contract`.
    Destroyed(u32),
    /// Ledger entry of one subscriber of one product.
    Subscriber(u32, Address),
    /// Product ids created through `create_subscription`, in creation order.
    Created,
}

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    InvalidStatusTransition = 400,
    AccessDenied = 401,
    BelowMinimumCost = 402,
    Ownership = 403,
    NotFound = 404,
    AlreadyInitialized = 409,
    /// The billing contract was deleted by its owner.
    ContractDestroyed = 410,
    /// The contract has allocated [`MAX_PRODUCT_ID`] products.
    ProductLimitReached = 429,
    NotInitialized = 1000,
    InvalidSignature = 1001,
    InvalidName = 1002,
    InvalidAmount = 1003,
    InvalidInterval = 1004,
    Overflow = 1005,
    AlreadySubscribed = 1006,
    NotSubscribed = 1007,
    PaymentNotDue = 1008,
    Paused = 1009,
    /// First payment could not be pulled from the subscriber.
    TransferFailed = 1010,
}

impl Error {
    pub const fn to_code(self) -> u32 {
        self as u32
    }
}

/// Lifecycle of one billing contract.
///
/// `Active` and `Paused` only decide whether new subscriptions may start;
/// existing subscribers are billed in both. `Destroyed` is terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContractStatus {
    Active = 0,
    Paused = 1,
    Destroyed = 2,
}

/// One billable product. Everything except `paused` is fixed at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BillingContract {
    pub owner: Address,
    pub name: String,
    /// Token base units charged per billing cycle.
    pub price: i128,
    /// Seconds between allowed payments.
    pub interval_seconds: u64,
    pub paused: bool,
    /// Fee registry this contract was approved under.
    pub registry: Address,
}

impl BillingContract {
    pub fn status(&self) -> ContractStatus {
        if self.paused {
            ContractStatus::Paused
        } else {
            ContractStatus::Active
        }
    }
}

/// Ledger entry for one subscriber. `last_payment_date` is kept after
/// cancellation so the history survives.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubscriberState {
    pub is_subscribed: bool,
    pub last_payment_date: u64,
}

/// How one payment of `price` was divided. The three amounts always sum to the price.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeSplit {
    /// Sent to the product owner: `price - fee`.
    pub owner_amount: i128,
    /// Sent to the registry owner.
    pub registry_amount: i128,
    /// Kickback sent to whoever triggered a renewal.
    pub caller_amount: i128,
}

/// Result of a renewal attempt that passed its preconditions.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PaymentOutcome {
    /// The payment went through and was split as shown.
    Paid(FeeSplit),
    /// The subscriber could not pay and was unsubscribed.
    Lapsed,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchPaymentResult {
    pub subscriber: Address,
    pub success: bool,
    /// Set when the entry succeeded by demoting a subscriber that could not pay.
    pub lapsed: bool,
    pub error_code: u32,
}

/// When a subscriber can next be billed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NextPaymentInfo {
    /// `last_payment_date + interval_seconds`.
    pub next_payment_timestamp: u64,
    /// True when the subscriber is subscribed and the timestamp has been reached.
    pub is_payment_due: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ContractCreatedEvent {
    pub product_id: u32,
    pub owner: Address,
    pub name: String,
    pub price: i128,
    pub interval_seconds: u64,
    /// False for direct construction, true for `create_subscription`.
    pub via_factory: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SubscribedEvent {
    pub product_id: u32,
    pub subscriber: Address,
    pub split: FeeSplit,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PaymentProcessedEvent {
    pub product_id: u32,
    pub subscriber: Address,
    pub caller: Address,
    pub split: FeeSplit,
    pub last_payment_date: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SubscriptionLapsedEvent {
    pub product_id: u32,
    pub subscriber: Address,
    pub caller: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SubscriptionCancelledEvent {
    pub product_id: u32,
    pub subscriber: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ContractStatusEvent {
    pub product_id: u32,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct MinCostUpdatedEvent {
    pub previous: i128,
    pub min_cost: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ConfigContractUpdatedEvent {
    pub previous: Address,
    pub registry: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}
