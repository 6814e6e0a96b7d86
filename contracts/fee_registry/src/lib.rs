#![no_std]

// ── Modules ──────────────────────────────────────────────────────────────────
mod admin;
mod fees;
pub mod types;

pub use types::*;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

// ── Contract ─────────────────────────────────────────────────────────────────

/// Platform-wide billing configuration shared by every billing contract.
///
/// Holds the settlement token, the public key that approves new billing
/// contracts, the default fee rate and per-contract overrides. Fee rates are in
/// tenths of a percent, so a rate of `30` takes 3% of each payment.
#[contract]
pub struct FeeRegistry;

#[contractimpl]
impl FeeRegistry {
    // ── Admin / Config ───────────────────────────────────────────────────

    /// Initialize the registry: owner, settlement token, approval signer and default fee.
    ///
    /// # Errors
    /// * [`Error::AlreadyInitialized`] on a second call.
    /// * [`Error::InvalidFeeRate`] if `default_fee_rate > 1000`.
    pub fn init(
        env: Env,
        owner: Address,
        token: Address,
        signer: BytesN<32>,
        default_fee_rate: u32,
    ) -> Result<(), Error> {
        admin::do_init(&env, owner, token, signer, default_fee_rate)
    }

    /// Set the fee rate used by contracts without an override. Owner only.
    pub fn set_default_fee_rate(env: Env, owner: Address, fee_rate: u32) -> Result<(), Error> {
        admin::do_set_default_fee_rate(&env, owner, fee_rate)
    }

    /// Replace the Ed25519 public key that approves new billing contracts. Owner only.
    ///
    /// Existing contracts are unaffected; only future creations are checked
    /// against the new key.
    pub fn set_signer(env: Env, owner: Address, signer: BytesN<32>) -> Result<(), Error> {
        admin::do_set_signer(&env, owner, signer)
    }

    /// Transfer registry ownership. Owner only.
    ///
    /// The registry owner is also the recipient of the platform fee share, so
    /// this redirects fee income as well as configuration rights.
    pub fn transfer_ownership(env: Env, owner: Address, new_owner: Address) -> Result<(), Error> {
        admin::do_transfer_ownership(&env, owner, new_owner)
    }

    // ── Fee table ────────────────────────────────────────────────────────

    /// Override the fee rate for one billing contract. Owner only.
    pub fn set_fee_for_contract(
        env: Env,
        owner: Address,
        product: ProductRef,
        fee_rate: u32,
    ) -> Result<(), Error> {
        fees::do_set_fee_for_contract(&env, owner, product, fee_rate)
    }

    /// Drop an override so the contract falls back to the default rate. Owner only.
    pub fn remove_fee_override(env: Env, owner: Address, product: ProductRef) -> Result<(), Error> {
        fees::do_remove_fee_override(&env, owner, product)
    }

    /// Fee rate charged on payments to `product`: its override, else the default.
    pub fn effective_fee(env: Env, product: ProductRef) -> Result<u32, Error> {
        fees::effective_fee(&env, &product)
    }

    pub fn get_fee_override(env: Env, product: ProductRef) -> Option<u32> {
        fees::get_fee_override(&env, &product)
    }

    // ── Contract set ─────────────────────────────────────────────────────

    /// Record a billing contract hosted by `host`. Called by the host itself
    /// while constructing the contract; repeated calls are no-ops.
    pub fn register(env: Env, host: Address, product_id: u32) -> Result<(), Error> {
        fees::do_register(&env, host, product_id)
    }

    pub fn is_known_contract(env: Env, product: ProductRef) -> bool {
        fees::is_known_contract(&env, &product)
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        admin::get_owner(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        admin::get_token(&env)
    }

    pub fn get_signer(env: Env) -> Result<BytesN<32>, Error> {
        admin::get_signer(&env)
    }

    pub fn get_default_fee_rate(env: Env) -> Result<u32, Error> {
        admin::get_default_fee_rate(&env)
    }
}
