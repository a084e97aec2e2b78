use soroban_sdk::{contractclient, Address, Env};

/// Capability the auctions need from a registry of unique, non-divisible
/// assets. Failures are raised by the registry itself and travel through
/// the calling contract unchanged.
#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistry {
    fn owner_of(env: Env, token_id: u32) -> Address;

    /// Lets `spender` move `token_id` on behalf of `owner`.
    fn approve(env: Env, owner: Address, spender: Address, token_id: u32);

    /// Moves `token_id` held by `from`, authorized by `from` itself.
    fn transfer(env: Env, from: Address, to: Address, token_id: u32);

    /// Moves `token_id` held by `from`, authorized by an approved `spender`.
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32);
}
