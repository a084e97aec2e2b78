use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env, Symbol,
};

use crate::interfaces::AssetRegistry;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    NonExistentToken = 300,
    IncorrectOwner = 301,
    InsufficientApproval = 302,
}

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Admin,
    NextTokenId,
    Owner(u32),
    Approval(u32),
}

/// Minimal unique-asset registry. Only the admin mints, ids are sequential
/// starting at zero.
#[contract]
pub struct MockAssetRegistry;

#[contractimpl]
impl MockAssetRegistry {
    pub fn __constructor(env: Env, admin: Address) {
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::NextTokenId, &0u32);
    }

    pub fn mint(env: Env, to: Address) -> u32 {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic!("admin not set"));
        admin.require_auth();

        let token_id: u32 = env
            .storage()
            .instance()
            .get(&DataKey::NextTokenId)
            .unwrap_or(0);
        env.storage().instance().set(&DataKey::Owner(token_id), &to);
        env.storage()
            .instance()
            .set(&DataKey::NextTokenId, &(token_id + 1));

        env.events()
            .publish((Symbol::new(&env, "mint"), to), token_id);

        token_id
    }

    pub fn get_approved(env: Env, token_id: u32) -> Option<Address> {
        env.storage().instance().get(&DataKey::Approval(token_id))
    }
}

#[contractimpl]
impl AssetRegistry for MockAssetRegistry {
    fn owner_of(env: Env, token_id: u32) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Owner(token_id))
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::NonExistentToken))
    }

    fn approve(env: Env, owner: Address, spender: Address, token_id: u32) {
        owner.require_auth();

        if Self::owner_of(env.clone(), token_id) != owner {
            panic_with_error!(&env, RegistryError::IncorrectOwner);
        }

        env.storage()
            .instance()
            .set(&DataKey::Approval(token_id), &spender);
    }

    fn transfer(env: Env, from: Address, to: Address, token_id: u32) {
        from.require_auth();
        move_token(&env, &from, &to, token_id);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32) {
        spender.require_auth();

        let approved = Self::get_approved(env.clone(), token_id);
        if spender != from && approved != Some(spender) {
            panic_with_error!(&env, RegistryError::InsufficientApproval);
        }

        move_token(&env, &from, &to, token_id);
    }
}

fn move_token(env: &Env, from: &Address, to: &Address, token_id: u32) {
    let owner = MockAssetRegistry::owner_of(env.clone(), token_id);
    if owner != *from {
        panic_with_error!(env, RegistryError::IncorrectOwner);
    }

    env.storage().instance().set(&DataKey::Owner(token_id), to);
    env.storage()
        .instance()
        .remove(&DataKey::Approval(token_id));
}
