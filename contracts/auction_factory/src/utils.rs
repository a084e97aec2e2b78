use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

/// Salt of the `index`-th auction created by this factory.
pub fn auction_salt(env: &Env, index: u32, asset_contract: &Address, asset_id: u32) -> BytesN<32> {
    let mut salt = Bytes::new(env);
    salt.append(&index.to_xdr(env));
    salt.append(&asset_contract.clone().to_xdr(env));
    salt.append(&asset_id.to_xdr(env));
    env.crypto().sha256(&salt).to_bytes()
}

/// Address the instance will be deployed at, known before deployment so the
/// asset can be moved into custody first.
pub fn auction_address(env: &Env, salt: &BytesN<32>) -> Address {
    env.deployer()
        .with_current_contract(salt.clone())
        .deployed_address()
}

pub fn deploy_auction_contract(env: &Env, wasm_hash: BytesN<32>, salt: BytesN<32>) -> Address {
    env.deployer()
        .with_current_contract(salt)
        .deploy_v2(wasm_hash, ())
}
