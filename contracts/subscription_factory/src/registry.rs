//! Interface of the fee registry this contract reads its configuration from.

use soroban_sdk::{contractclient, contracttype, Address, BytesN, Env};

/// Registry-side identity of a billing contract: hosting contract plus product id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductRef {
    pub host: Address,
    pub product_id: u32,
}

#[contractclient(name = "FeeRegistryClient")]
pub trait FeeRegistryInterface {
    fn get_owner(env: Env) -> Address;
    fn get_token(env: Env) -> Address;
    fn get_signer(env: Env) -> BytesN<32>;
    fn effective_fee(env: Env, product: ProductRef) -> u32;
    fn register(env: Env, host: Address, product_id: u32);
}

/// Identity of `product_id` hosted by the current contract.
pub fn product_ref(env: &Env, product_id: u32) -> ProductRef {
    ProductRef {
        host: env.current_contract_address(),
        product_id,
    }
}
