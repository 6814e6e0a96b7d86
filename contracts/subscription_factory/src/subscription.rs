//! Billing contract lifecycle: subscribe, renew, cancel, pause, unpause, delete.
//!
//! **PRs that only change subscriber lifecycle or contract status should edit this file only.**

use crate::charge_core::{charge_one, pay_out, pull_payment};
use crate::fees::split_first_payment;
use crate::queries::load_product;
use crate::registry::{product_ref, FeeRegistryClient};
use crate::state_machine::validate_status_transition;
use crate::types::{
    BatchPaymentResult, ContractStatus, ContractStatusEvent, DataKey, Error, PaymentOutcome,
    SubscribedEvent, SubscriberState, SubscriptionCancelledEvent,
};
use soroban_sdk::{symbol_short, token, Address, Env, Vec};

/// First payment. Any failure, including the token transfer, aborts the call
/// and leaves the subscriber unsubscribed.
pub fn do_subscribe(env: &Env, product_id: u32, subscriber: Address) -> Result<(), Error> {
    subscriber.require_auth();

    let product = load_product(env, product_id)?;
    let key = DataKey::Subscriber(product_id, subscriber.clone());
    let existing: Option<SubscriberState> = env.storage().persistent().get(&key);
    if existing.is_some_and(|s| s.is_subscribed) {
        return Err(Error::AlreadySubscribed);
    }
    if product.paused {
        return Err(Error::Paused);
    }

    let registry = FeeRegistryClient::new(env, &product.registry);
    let fee_rate = registry.effective_fee(&product_ref(env, product_id));
    let registry_owner = registry.get_owner();
    let split = split_first_payment(product.price, fee_rate)?;

    let token = token::Client::new(env, &registry.get_token());
    if !pull_payment(env, &token, &subscriber, product.price) {
        return Err(Error::TransferFailed);
    }

    env.storage().persistent().set(
        &key,
        &SubscriberState {
            is_subscribed: true,
            last_payment_date: env.ledger().timestamp(),
        },
    );

    // No kickback on a first payment, so the caller slot is never paid.
    pay_out(env, &token, &split, &product.owner, &registry_owner, &subscriber);

    env.events().publish(
        (symbol_short!("subscrib"), product_id),
        SubscribedEvent {
            product_id,
            subscriber,
            split,
        },
    );
    Ok(())
}

/// Permissionless renewal; `caller` earns the kickback.
pub fn do_process_payment(
    env: &Env,
    product_id: u32,
    caller: Address,
    subscriber: Address,
) -> Result<PaymentOutcome, Error> {
    caller.require_auth();
    charge_one(env, product_id, &caller, &subscriber)
}

/// Renew several subscribers of one product, each independently.
///
/// # Guarantees
/// - `caller` authorizes once for the whole batch.
/// - A failed entry is reported with its error code and changes nothing.
/// - A subscriber that cannot pay counts as success with `lapsed = true`.
/// - Results come back in input order.
pub fn do_batch_process_payment(
    env: &Env,
    product_id: u32,
    caller: Address,
    subscribers: Vec<Address>,
) -> Result<Vec<BatchPaymentResult>, Error> {
    caller.require_auth();
    load_product(env, product_id)?;

    let mut results = Vec::new(env);
    for subscriber in subscribers.iter() {
        let res = match charge_one(env, product_id, &caller, &subscriber) {
            Ok(outcome) => BatchPaymentResult {
                subscriber,
                success: true,
                lapsed: outcome == PaymentOutcome::Lapsed,
                error_code: 0,
            },
            Err(e) => BatchPaymentResult {
                subscriber,
                success: false,
                lapsed: false,
                error_code: e.to_code(),
            },
        };
        results.push_back(res);
    }
    Ok(results)
}

/// Self-service cancellation. No funds move and the payment history is kept.
///
/// Addresses that are not currently subscribed get [`Error::NotSubscribed`].
pub fn do_cancel_subscription(env: &Env, product_id: u32, subscriber: Address) -> Result<(), Error> {
    subscriber.require_auth();

    load_product(env, product_id)?;
    let key = DataKey::Subscriber(product_id, subscriber.clone());
    let mut state: SubscriberState = env
        .storage()
        .persistent()
        .get(&key)
        .filter(|s: &SubscriberState| s.is_subscribed)
        .ok_or(Error::NotSubscribed)?;

    state.is_subscribed = false;
    env.storage().persistent().set(&key, &state);
    env.events().publish(
        (symbol_short!("cancel"), product_id),
        SubscriptionCancelledEvent {
            product_id,
            subscriber,
        },
    );
    Ok(())
}

fn set_paused(env: &Env, product_id: u32, owner: Address, paused: bool) -> Result<(), Error> {
    owner.require_auth();

    let mut product = load_product(env, product_id)?;
    if product.owner != owner {
        return Err(Error::AccessDenied);
    }
    let target = if paused {
        ContractStatus::Paused
    } else {
        ContractStatus::Active
    };
    validate_status_transition(&product.status(), &target)?;

    product.paused = paused;
    env.storage()
        .persistent()
        .set(&DataKey::Product(product_id), &product);

    let topic = if paused {
        symbol_short!("pause")
    } else {
        symbol_short!("unpause")
    };
    env.events().publish(
        (topic, product_id),
        ContractStatusEvent { product_id, owner },
    );
    Ok(())
}

/// Stop new subscriptions. Existing subscribers keep being billed.
pub fn do_pause(env: &Env, product_id: u32, owner: Address) -> Result<(), Error> {
    set_paused(env, product_id, owner, true)
}

pub fn do_unpause(env: &Env, product_id: u32, owner: Address) -> Result<(), Error> {
    set_paused(env, product_id, owner, false)
}

/// Irreversibly tear the contract down. The record is removed and a tombstone
/// makes every later call fail with [`Error::ContractDestroyed`].
pub fn do_delete_subscription_contract(
    env: &Env,
    product_id: u32,
    owner: Address,
) -> Result<(), Error> {
    owner.require_auth();

    let product = load_product(env, product_id)?;
    if product.owner != owner {
        return Err(Error::Ownership);
    }
    validate_status_transition(&product.status(), &ContractStatus::Destroyed)?;

    env.storage()
        .persistent()
        .remove(&DataKey::Product(product_id));
    env.storage()
        .persistent()
        .set(&DataKey::Destroyed(product_id), &true);
    env.events().publish(
        (symbol_short!("destroy"), product_id),
        ContractStatusEvent { product_id, owner },
    );
    Ok(())
}
