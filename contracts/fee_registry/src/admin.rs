//! Owner and config: init, signer key, default fee rate, ownership.
//!
//! **PRs that only change who may configure the registry should edit this file only.**

use crate::types::{
    DefaultFeeRateSetEvent, Error, OwnershipTransferredEvent, SignerSetEvent, FEE_DENOMINATOR,
};
use soroban_sdk::{symbol_short, Address, BytesN, Env, Symbol};

pub fn do_init(
    env: &Env,
    owner: Address,
    token: Address,
    signer: BytesN<32>,
    default_fee_rate: u32,
) -> Result<(), Error> {
    if env.storage().instance().has(&Symbol::new(env, "owner")) {
        return Err(Error::AlreadyInitialized);
    }
    owner.require_auth();
    validate_fee_rate(default_fee_rate)?;

    env.storage()
        .instance()
        .set(&Symbol::new(env, "owner"), &owner);
    env.storage()
        .instance()
        .set(&Symbol::new(env, "token"), &token);
    env.storage()
        .instance()
        .set(&Symbol::new(env, "signer"), &signer);
    env.storage()
        .instance()
        .set(&Symbol::new(env, "fee"), &default_fee_rate);
    env.events().publish((symbol_short!("init"),), owner);
    Ok(())
}

/// Rejects rates outside `[0, FEE_DENOMINATOR]`.
pub fn validate_fee_rate(fee_rate: u32) -> Result<(), Error> {
    if fee_rate > FEE_DENOMINATOR {
        return Err(Error::InvalidFeeRate);
    }
    Ok(())
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, "owner"))
        .ok_or(Error::NotInitialized)
}

/// Authenticates `caller` and checks it is the stored owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let stored = get_owner(env)?;
    if *caller != stored {
        return Err(Error::AccessDenied);
    }
    Ok(())
}

pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, "token"))
        .ok_or(Error::NotInitialized)
}

pub fn get_signer(env: &Env) -> Result<BytesN<32>, Error> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, "signer"))
        .ok_or(Error::NotInitialized)
}

pub fn get_default_fee_rate(env: &Env) -> Result<u32, Error> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, "fee"))
        .ok_or(Error::NotInitialized)
}

pub fn do_set_default_fee_rate(env: &Env, owner: Address, fee_rate: u32) -> Result<(), Error> {
    require_owner(env, &owner)?;
    validate_fee_rate(fee_rate)?;
    let previous = get_default_fee_rate(env)?;
    env.storage()
        .instance()
        .set(&Symbol::new(env, "fee"), &fee_rate);
    env.events().publish(
        (symbol_short!("def_fee"),),
        DefaultFeeRateSetEvent { previous, fee_rate },
    );
    Ok(())
}

pub fn do_set_signer(env: &Env, owner: Address, signer: BytesN<32>) -> Result<(), Error> {
    require_owner(env, &owner)?;
    env.storage()
        .instance()
        .set(&Symbol::new(env, "signer"), &signer);
    env.events()
        .publish((symbol_short!("signer"),), SignerSetEvent { signer });
    Ok(())
}

/// Hands the registry to `new_owner`. The old owner loses access immediately
/// and stops receiving platform fees from the next payment on.
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
