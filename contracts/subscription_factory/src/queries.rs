//! Read-only lookups shared by every entrypoint.

use crate::types::{
    BillingContract, ContractStatus, DataKey, Error, NextPaymentInfo, SubscriberState,
};
use soroban_sdk::{Address, Env, Symbol, Vec};

/// Loads a live billing contract.
///
/// Fails with [`Error::ContractDestroyed`] once the owner has deleted it, and
/// with [`Error::NotFound`] for ids that were never allocated.
pub fn load_product(env: &Env, product_id: u32) -> Result<BillingContract, Error> {
    if env
        .storage()
        .persistent()
        .has(&DataKey::Destroyed(product_id))
    {
        return Err(Error::ContractDestroyed);
    }
    env.storage()
        .persistent()
        .get(&DataKey::Product(product_id))
        .ok_or(Error::NotFound)
}

pub fn get_product_status(env: &Env, product_id: u32) -> Result<ContractStatus, Error> {
    match load_product(env, product_id) {
        Ok(product) => Ok(product.status()),
        Err(Error::ContractDestroyed) => Ok(ContractStatus::Destroyed),
        Err(e) => Err(e),
    }
}

pub fn get_subscriber(
    env: &Env,
    product_id: u32,
    subscriber: &Address,
) -> Result<Option<SubscriberState>, Error> {
    load_product(env, product_id)?;
    Ok(env
        .storage()
        .persistent()
        .get(&DataKey::Subscriber(product_id, subscriber.clone())))
}

pub fn is_subscribed(env: &Env, product_id: u32, subscriber: &Address) -> Result<bool, Error> {
    Ok(get_subscriber(env, product_id, subscriber)?
        .is_some_and(|s| s.is_subscribed))
}

/// Zero for addresses that never paid.
pub fn last_payment_date(env: &Env, product_id: u32, subscriber: &Address) -> Result<u64, Error> {
    Ok(get_subscriber(env, product_id, subscriber)?
        .map(|s| s.last_payment_date)
        .unwrap_or(0))
}

pub fn next_payment_info(
    env: &Env,
    product_id: u32,
    subscriber: &Address,
) -> Result<NextPaymentInfo, Error> {
    let product = load_product(env, product_id)?;
    let state = get_subscriber(env, product_id, subscriber)?.ok_or(Error::NotSubscribed)?;
    let next_payment_timestamp = state
        .last_payment_date
        .checked_add(product.interval_seconds)
        .ok_or(Error::Overflow)?;
    Ok(NextPaymentInfo {
        next_payment_timestamp,
        is_payment_due: state.is_subscribed
            && env.ledger().timestamp() >= next_payment_timestamp,
    })
}

pub fn all_subscriptions(env: &Env) -> Vec<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::Created)
        .unwrap_or(Vec::new(env))
}

/// Number of product ids allocated so far, destroyed ones included.
pub fn get_product_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&Symbol::new(env, "next_id"))
        .unwrap_or(0u32)
}
