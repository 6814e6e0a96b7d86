//! Creation approvals: the off-chain signer approves an `(owner, name)` pair
//! before a billing contract may be created for it.
//!
//! Payload v1 is `lowercase_hex(xdr(owner)) ++ utf8(name)`, signed with Ed25519.
//! Changing this layout invalidates every approval already issued.

use crate::types::Error;
use ed25519_dalek::{Signature, VerifyingKey};
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Bytes, BytesN, Env, String};

/// Longest product name accepted, in bytes.
pub const MAX_NAME_LEN: u32 = 64;

// Address XDR is at most 44 bytes today; leave room for larger encodings.
const MAX_ADDRESS_XDR_LEN: u32 = 64;
const MAX_PAYLOAD_LEN: usize = (2 * MAX_ADDRESS_XDR_LEN + MAX_NAME_LEN) as usize;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

pub fn validate_name(name: &String) -> Result<(), Error> {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return Err(Error::InvalidName);
    }
    Ok(())
}

/// Builds the v1 approval payload for `owner` and `name`.
pub fn signing_payload(env: &Env, owner: &Address, name: &String) -> Result<Bytes, Error> {
    validate_name(name)?;

    let encoded = owner.clone().to_xdr(env);
    if encoded.len() > MAX_ADDRESS_XDR_LEN {
        return Err(Error::InvalidSignature);
    }

    let mut payload = Bytes::new(env);
    for byte in encoded.iter() {
        payload.push_back(HEX_DIGITS[(byte >> 4) as usize]);
        payload.push_back(HEX_DIGITS[(byte & 0x0f) as usize]);
    }

    let mut name_buf = [0u8; MAX_NAME_LEN as usize];
    let name_len = name.len() as usize;
    name.copy_into_slice(&mut name_buf[..name_len]);
    payload.extend_from_slice(&name_buf[..name_len]);
    Ok(payload)
}

/// Checks that `signature` is `signer`'s signature over the payload for `(owner, name)`.
pub fn verify_creation_signature(
    env: &Env,
    signer: &BytesN<32>,
    owner: &Address,
    name: &String,
    signature: &BytesN<64>,
) -> Result<(), Error> {
    let payload = signing_payload(env, owner, name)?;
    let len = payload.len() as usize;
    let mut message = [0u8; MAX_PAYLOAD_LEN];
    payload.copy_into_slice(&mut message[..len]);

    let key = VerifyingKey::from_bytes(&signer.to_array()).map_err(|_| Error::InvalidSignature)?;
    let signature = Signature::from_bytes(&signature.to_array());
    key.verify_strict(&message[..len], &signature)
        .map_err(|_| Error::InvalidSignature)
}
