//! Token movement and single renewal logic (no auth). Used by subscribe,
//! process_payment and batch_process_payment.
//!
//! **PRs that only change how one payment is settled should edit this file only.**

use crate::fees::split_renewal;
use crate::queries::load_product;
use crate::registry::{product_ref, FeeRegistryClient};
use crate::types::{
    DataKey, Error, FeeSplit, PaymentOutcome, PaymentProcessedEvent, SubscriberState,
    SubscriptionLapsedEvent,
};
use soroban_sdk::{symbol_short, token, Address, Env};

/// Pulls `amount` from `from` into this contract using the allowance `from`
/// granted it. Returns false instead of trapping when the token refuses
/// (missing allowance or balance); the failed sub-call leaves no state behind.
pub fn pull_payment(env: &Env, token: &token::Client, from: &Address, amount: i128) -> bool {
    let this = env.current_contract_address();
    matches!(
        token.try_transfer_from(&this, from, &this, &amount),
        Ok(Ok(()))
    )
}

/// Sends a settled payment out to its recipients. Zero shares are skipped.
pub fn pay_out(
    env: &Env,
    token: &token::Client,
    split: &FeeSplit,
    product_owner: &Address,
    registry_owner: &Address,
    caller: &Address,
) {
    let this = env.current_contract_address();
    for (recipient, amount) in [
        (product_owner, split.owner_amount),
        (registry_owner, split.registry_amount),
        (caller, split.caller_amount),
    ] {
        if amount > 0 {
            token.transfer(&this, recipient, &amount);
        }
    }
}

/// Renew one subscriber if a full interval has elapsed.
///
/// # Errors
/// * [`Error::NotSubscribed`] / [`Error::PaymentNotDue`] leave state untouched.
///
/// A payment the subscriber cannot cover is not an error: the subscriber is
/// unsubscribed and [`PaymentOutcome::Lapsed`] is returned.
pub fn charge_one(
    env: &Env,
    product_id: u32,
    caller: &Address,
    subscriber: &Address,
) -> Result<PaymentOutcome, Error> {
    let product = load_product(env, product_id)?;

    let key = DataKey::Subscriber(product_id, subscriber.clone());
    let mut state: SubscriberState = env
        .storage()
        .persistent()
        .get(&key)
        .filter(|s: &SubscriberState| s.is_subscribed)
        .ok_or(Error::NotSubscribed)?;

    let now = env.ledger().timestamp();
    let due = state
        .last_payment_date
        .checked_add(product.interval_seconds)
        .ok_or(Error::Overflow)?;
    if now < due {
        return Err(Error::PaymentNotDue);
    }

    let registry = FeeRegistryClient::new(env, &product.registry);
    let fee_rate = registry.effective_fee(&product_ref(env, product_id));
    let registry_owner = registry.get_owner();
    // Computed before any funds move so an arithmetic error cannot strand a payment.
    let split = split_renewal(product.price, fee_rate, *caller == registry_owner)?;

    let token = token::Client::new(env, &registry.get_token());
    if !pull_payment(env, &token, subscriber, product.price) {
        state.is_subscribed = false;
        env.storage().persistent().set(&key, &state);
        env.events().publish(
            (symbol_short!("lapsed"), product_id),
            SubscriptionLapsedEvent {
                product_id,
                subscriber: subscriber.clone(),
                caller: caller.clone(),
            },
        );
        return Ok(PaymentOutcome::Lapsed);
    }

    // Advance by exactly one interval to keep the billing cadence fixed.
    state.last_payment_date = due;
    env.storage().persistent().set(&key, &state);

    pay_out(env, &token, &split, &product.owner, &registry_owner, caller);

    env.events().publish(
        (symbol_short!("payment"), product_id),
        PaymentProcessedEvent {
            product_id,
            subscriber: subscriber.clone(),
            caller: caller.clone(),
            split: split.clone(),
            last_payment_date: due,
        },
    );
    Ok(PaymentOutcome::Paid(split))
}
