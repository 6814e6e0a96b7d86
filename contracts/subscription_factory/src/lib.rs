#![no_std]

// ── Modules ──────────────────────────────────────────────────────────────────
mod admin;
mod charge_core;
mod factory;
pub mod fees;
mod queries;
pub mod registry;
pub mod signature;
mod state_machine;
mod subscription;
pub mod types;

// ── Re-exports (used by tests and external consumers) ────────────────────────
pub use state_machine::{get_allowed_transitions, validate_status_transition};
pub use types::*;

use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, String, Vec};

// ── Contract ─────────────────────────────────────────────────────────────────

/// Creates and hosts billing contracts, one per billable product.
///
/// Each product is identified by a `u32` id. Subscribers pay `price` once per
/// `interval_seconds`; every payment is split between the product owner, the
/// fee registry owner and, for renewals, whoever triggered the payment.
#[contract]
pub struct SubscriptionFactory;

#[contractimpl]
impl SubscriptionFactory {
    // ── Admin / Config ───────────────────────────────────────────────────

    /// Initialize the factory: owner, fee registry, minimum price and the
    /// interval given to every contract created through
    /// [`Self::create_subscription`].
    pub fn init(
        env: Env,
        owner: Address,
        registry: Address,
        min_cost: i128,
        default_interval: u64,
    ) -> Result<(), Error> {
        admin::do_init(&env, owner, registry, min_cost, default_interval)
    }

    /// Switch the registry used for future creations. Owner only.
    pub fn set_config_contract(env: Env, owner: Address, registry: Address) -> Result<(), Error> {
        admin::do_set_config_contract(&env, owner, registry)
    }

    /// Update the minimum price accepted by [`Self::create_subscription`]. Owner only.
    pub fn set_min_cost(env: Env, owner: Address, min_cost: i128) -> Result<(), Error> {
        admin::do_set_min_cost(&env, owner, min_cost)
    }

    /// Transfer factory ownership. Owner only.
    pub fn transfer_ownership(env: Env, owner: Address, new_owner: Address) -> Result<(), Error> {
        admin::do_transfer_ownership(&env, owner, new_owner)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        admin::get_owner(&env)
    }

    pub fn get_registry(env: Env) -> Result<Address, Error> {
        admin::get_registry(&env)
    }

    pub fn get_min_cost(env: Env) -> Result<i128, Error> {
        admin::get_min_cost(&env)
    }

    pub fn get_default_interval(env: Env) -> Result<u64, Error> {
        admin::get_default_interval(&env)
    }

    // ── Creation ─────────────────────────────────────────────────────────

    /// Create a billing contract owned by `caller`.
    ///
    /// `signature` must be the registry signer's Ed25519 signature over
    /// [`Self::signing_payload`] for `(caller, name)`.
    ///
    /// # Errors
    /// * [`Error::BelowMinimumCost`] if `cost` is under the configured minimum.
    /// * [`Error::InvalidSignature`] if the approval does not match.
    /// * [`Error::InvalidName`] for an empty or over-long name.
    pub fn create_subscription(
        env: Env,
        caller: Address,
        cost: i128,
        name: String,
        signature: BytesN<64>,
    ) -> Result<u32, Error> {
        factory::do_create_subscription(&env, caller, cost, name, signature)
    }

    /// Construct a billing contract directly, without the factory's minimum
    /// cost or default interval. The approval signature is still required and
    /// the contract is registered with `registry`.
    pub fn create_billing_contract(
        env: Env,
        registry: Address,
        owner: Address,
        price: i128,
        interval_seconds: u64,
        name: String,
        signature: BytesN<64>,
    ) -> Result<u32, Error> {
        factory::do_create_billing_contract(
            &env,
            registry,
            owner,
            price,
            interval_seconds,
            name,
            signature,
        )
    }

    /// Product ids created through [`Self::create_subscription`], oldest first.
    pub fn all_subscriptions(env: Env) -> Vec<u32> {
        queries::all_subscriptions(&env)
    }

    /// Bytes the off-chain signer must sign to approve `(owner, name)`.
    pub fn signing_payload(env: Env, owner: Address, name: String) -> Result<Bytes, Error> {
        signature::signing_payload(&env, &owner, &name)
    }

    // ── Subscriber lifecycle ─────────────────────────────────────────────

    /// Subscribe and pay the first interval.
    ///
    /// The subscriber must have approved this contract to spend at least
    /// `price`. If the transfer fails the call fails with
    /// [`Error::TransferFailed`] and nothing changes.
    pub fn subscribe(env: Env, product_id: u32, subscriber: Address) -> Result<(), Error> {
        subscription::do_subscribe(&env, product_id, subscriber)
    }

    /// Bill `subscriber` for the next interval. Anyone may call this.
    ///
    /// A caller other than the registry owner receives a quarter of the fee.
    /// If the subscriber can no longer pay they are unsubscribed and the call
    /// still succeeds, returning [`PaymentOutcome::Lapsed`].
    ///
    /// Works while the contract is paused.
    pub fn process_payment(
        env: Env,
        product_id: u32,
        caller: Address,
        subscriber: Address,
    ) -> Result<PaymentOutcome, Error> {
        subscription::do_process_payment(&env, product_id, caller, subscriber)
    }

    /// Run [`Self::process_payment`] for several subscribers in one transaction.
    pub fn batch_process_payment(
        env: Env,
        product_id: u32,
        caller: Address,
        subscribers: Vec<Address>,
    ) -> Result<Vec<BatchPaymentResult>, Error> {
        subscription::do_batch_process_payment(&env, product_id, caller, subscribers)
    }

    pub fn cancel_subscription(env: Env, product_id: u32, subscriber: Address) -> Result<(), Error> {
        subscription::do_cancel_subscription(&env, product_id, subscriber)
    }

    // ── Contract status ──────────────────────────────────────────────────

    /// Block new subscriptions. Product owner only.
    pub fn pause(env: Env, product_id: u32, owner: Address) -> Result<(), Error> {
        subscription::do_pause(&env, product_id, owner)
    }

    /// Allow new subscriptions again. Product owner only.
    pub fn unpause(env: Env, product_id: u32, owner: Address) -> Result<(), Error> {
        subscription::do_unpause(&env, product_id, owner)
    }

    /// Permanently delete the billing contract. Product owner only.
    ///
    /// There is no way back: every later call for `product_id` fails with
    /// [`Error::ContractDestroyed`].
    pub fn delete_subscription_contract(
        env: Env,
        product_id: u32,
        owner: Address,
    ) -> Result<(), Error> {
        subscription::do_delete_subscription_contract(&env, product_id, owner)
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub fn get_billing_contract(env: Env, product_id: u32) -> Result<BillingContract, Error> {
        queries::load_product(&env, product_id)
    }

    pub fn get_product_status(env: Env, product_id: u32) -> Result<ContractStatus, Error> {
        queries::get_product_status(&env, product_id)
    }

    pub fn get_subscriber(
        env: Env,
        product_id: u32,
        subscriber: Address,
    ) -> Result<Option<SubscriberState>, Error> {
        queries::get_subscriber(&env, product_id, &subscriber)
    }

    pub fn is_subscribed(env: Env, product_id: u32, subscriber: Address) -> Result<bool, Error> {
        queries::is_subscribed(&env, product_id, &subscriber)
    }

    pub fn last_payment_date(env: Env, product_id: u32, subscriber: Address) -> Result<u64, Error> {
        queries::last_payment_date(&env, product_id, &subscriber)
    }

    /// When `subscriber` can next be billed and whether that time has come.
    pub fn next_payment_info(
        env: Env,
        product_id: u32,
        subscriber: Address,
    ) -> Result<NextPaymentInfo, Error> {
        queries::next_payment_info(&env, product_id, &subscriber)
    }

    /// Total product ids allocated, including deleted contracts.
    pub fn get_product_count(env: Env) -> u32 {
        queries::get_product_count(&env)
    }
}
