//! Billing contract construction, both through the factory and directly.
//!
//! Either way the `(owner, name)` pair must carry an approval from the
//! registry's signer, and the new contract is registered with that registry.

use crate::admin::{get_default_interval, get_min_cost, get_registry};
use crate::queries::all_subscriptions;
use crate::registry::FeeRegistryClient;
use crate::signature::verify_creation_signature;
use crate::types::{BillingContract, ContractCreatedEvent, DataKey, Error, MAX_PRODUCT_ID};
use soroban_sdk::{symbol_short, Address, BytesN, Env, String, Symbol};

/// Allocate the next product id. Ids start at `0` and are never reused.
fn next_product_id(env: &Env) -> Result<u32, Error> {
    let key = Symbol::new(env, "next_id");
    let current: u32 = env.storage().instance().get(&key).unwrap_or(0u32);
    if current == MAX_PRODUCT_ID {
        return Err(Error::ProductLimitReached);
    }
    env.storage().instance().set(&key, &(current + 1));
    Ok(current)
}

/// Signature-checked constructor shared by both creation paths.
#[allow(clippy::too_many_arguments)]
fn construct(
    env: &Env,
    registry: Address,
    owner: Address,
    price: i128,
    interval_seconds: u64,
    name: String,
    signature: BytesN<64>,
    via_factory: bool,
) -> Result<u32, Error> {
    if price <= 0 {
        return Err(Error::InvalidAmount);
    }
    if interval_seconds == 0 {
        return Err(Error::InvalidInterval);
    }

    let registry_client = FeeRegistryClient::new(env, &registry);
    let signer = registry_client.get_signer();
    verify_creation_signature(env, &signer, &owner, &name, &signature)?;

    let product_id = next_product_id(env)?;
    let product = BillingContract {
        owner: owner.clone(),
        name: name.clone(),
        price,
        interval_seconds,
        paused: false,
        registry,
    };
    env.storage()
        .persistent()
        .set(&DataKey::Product(product_id), &product);
    registry_client.register(&env.current_contract_address(), &product_id);

    env.events().publish(
        (symbol_short!("created"), product_id),
        ContractCreatedEvent {
            product_id,
            owner,
            name,
            price,
            interval_seconds,
            via_factory,
        },
    );
    Ok(product_id)
}

/// `createSubscription`: the caller becomes the product owner.
pub fn do_create_subscription(
    env: &Env,
    caller: Address,
    cost: i128,
    name: String,
    signature: BytesN<64>,
) -> Result<u32, Error> {
    caller.require_auth();

    if cost < get_min_cost(env)? {
        return Err(Error::BelowMinimumCost);
    }
    let registry = get_registry(env)?;
    let interval = get_default_interval(env)?;

    let product_id = construct(env, registry, caller, cost, interval, name, signature, true)?;

    let mut created = all_subscriptions(env);
    created.push_back(product_id);
    env.storage().persistent().set(&DataKey::Created, &created);
    Ok(product_id)
}

/// Direct construction: no minimum cost, caller-chosen registry and interval,
/// and the result is not listed in `all_subscriptions`.
pub fn do_create_billing_contract(
    env: &Env,
    registry: Address,
    owner: Address,
    price: i128,
    interval_seconds: u64,
    name: String,
    signature: BytesN<64>,
) -> Result<u32, Error> {
    construct(
        env,
        registry,
        owner,
        price,
        interval_seconds,
        name,
        signature,
        false,
    )
}
