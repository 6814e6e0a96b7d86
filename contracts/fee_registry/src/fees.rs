//! Per-contract fee overrides and the set of registered billing contracts.

use crate::admin::{get_default_fee_rate, require_owner, validate_fee_rate};
use crate::types::{ContractRegisteredEvent, DataKey, Error, FeeOverrideSetEvent, ProductRef};
use soroban_sdk::{symbol_short, Address, Env};

pub fn do_set_fee_for_contract(
    env: &Env,
    owner: Address,
    product: ProductRef,
    fee_rate: u32,
) -> Result<(), Error> {
    require_owner(env, &owner)?;
    validate_fee_rate(fee_rate)?;
    env.storage()
        .persistent()
        .set(&DataKey::FeeOverride(product.clone()), &fee_rate);
    env.events().publish(
        (symbol_short!("fee_set"),),
        FeeOverrideSetEvent {
            product,
            fee_rate: Some(fee_rate),
        },
    );
    Ok(())
}

pub fn do_remove_fee_override(env: &Env, owner: Address, product: ProductRef) -> Result<(), Error> {
    require_owner(env, &owner)?;
    env.storage()
        .persistent()
        .remove(&DataKey::FeeOverride(product.clone()));
    env.events().publish(
        (symbol_short!("fee_set"),),
        FeeOverrideSetEvent {
            product,
            fee_rate: None,
        },
    );
    Ok(())
}

pub fn get_fee_override(env: &Env, product: &ProductRef) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::FeeOverride(product.clone()))
}

/// Override if one is set, otherwise the default rate.
pub fn effective_fee(env: &Env, product: &ProductRef) -> Result<u32, Error> {
    match get_fee_override(env, product) {
        Some(rate) => Ok(rate),
        None => get_default_fee_rate(env),
    }
}

/// Records a billing contract. Only the hosting contract may register its own
/// products; registering twice is a no-op.
pub fn do_register(env: &Env, host: Address, product_id: u32) -> Result<(), Error> {
    host.require_auth();
    let product = ProductRef { host, product_id };
    let key = DataKey::Known(product.clone());
    if env.storage().persistent().has(&key) {
        return Ok(());
    }
    env.storage().persistent().set(&key, &true);
    env.events().publish(
        (symbol_short!("register"),),
        ContractRegisteredEvent { product },
    );
    Ok(())
}

pub fn is_known_contract(env: &Env, product: &ProductRef) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Known(product.clone()))
}
