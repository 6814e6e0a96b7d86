//! Factory owner and config: init, registry, min_cost, ownership.
//!
//! **PRs that only change factory configuration should edit this file only.**

use crate::types::{ConfigContractUpdatedEvent, Error, MinCostUpdatedEvent, OwnershipTransferredEvent};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub fn do_init(
    env: &Env,
    owner: Address,
    registry: Address,
    min_cost: i128,
    default_interval: u64,
) -> Result<(), Error> {
    if env.storage().instance().has(&Symbol::new(env, "owner")) {
        return Err(Error::AlreadyInitialized);
    }
    owner.require_auth();
    if min_cost < 0 {
        return Err(Error::InvalidAmount);
    }
    if default_interval == 0 {
        return Err(Error::InvalidInterval);
    }

    env.storage()
        .instance()
        .set(&Symbol::new(env, "owner"), &owner);
    env.storage()
        .instance()
        .set(&Symbol::new(env, "registry"), &registry);
    env.storage()
        .instance()
        .set(&Symbol::new(env, "min_cost"), &min_cost);
    env.storage()
        .instance()
        .set(&Symbol::new(env, "interval"), &default_interval);
    env.events().publish((symbol_short!("init"),), owner);
    Ok(())
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, "owner"))
        .ok_or(Error::NotInitialized)
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let stored = get_owner(env)?;
    if *caller != stored {
        return Err(Error::AccessDenied);
    }
    Ok(())
}

pub fn get_registry(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, "registry"))
        .ok_or(Error::NotInitialized)
}

pub fn get_min_cost(env: &Env) -> Result<i128, Error> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, "min_cost"))
        .ok_or(Error::NotInitialized)
}

pub fn get_default_interval(env: &Env) -> Result<u64, Error> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, "interval"))
        .ok_or(Error::NotInitialized)
}

/// Point future creations at another registry. Contracts already created keep
/// the registry they were approved under.
pub fn do_set_config_contract(env: &Env, owner: Address, registry: Address) -> Result<(), Error> {
    require_owner(env, &owner)?;
    let previous = get_registry(env)?;
    env.storage()
        .instance()
        .set(&Symbol::new(env, "registry"), &registry);
    env.events().publish(
        (symbol_short!("config"),),
        ConfigContractUpdatedEvent { previous, registry },
    );
    Ok(())
}

pub fn do_set_min_cost(env: &Env, owner: Address, min_cost: i128) -> Result<(), Error> {
    require_owner(env, &owner)?;
    if min_cost < 0 {
        return Err(Error::InvalidAmount);
    }
    let previous = get_min_cost(env)?;
    env.storage()
        .instance()
        .set(&Symbol::new(env, "min_cost"), &min_cost);
    env.events().publish(
        (symbol_short!("min_cost"),),
        MinCostUpdatedEvent { previous, min_cost },
    );
    Ok(())
}

pub fn do_transfer_ownership(env: &Env, owner: Address, new_owner: Address) -> Result<(), Error> {
    require_owner(env, &owner)?;
    env.storage()
        .instance()
        .set(&Symbol::new(env, "owner"), &new_owner);
    env.events().publish(
        (symbol_short!("owner"),),
        OwnershipTransferredEvent {
            previous_owner: owner,
            new_owner,
        },
    );
    Ok(())
}
