use gavel::{
    constants::ONE_DAY,
    testutils::{MockAssetRegistry, MockAssetRegistryClient, MockPriceFeed, MockPriceFeedClient},
    types::FeeDestination,
};
use soroban_sdk::{testutils::Address as _, token, Address, BytesN, Env};

use crate::contract::{AuctionFactory, AuctionFactoryClient};

pub const FEE_BPS: u32 = 250;

pub struct FactoryTest<'a> {
    pub env: Env,
    pub factory: AuctionFactoryClient<'a>,
    pub registry: MockAssetRegistryClient<'a>,
    pub price_feed: MockPriceFeedClient<'a>,
    pub native: token::Client<'a>,
    pub ledger: token::Client<'a>,
    pub owner: Address,
    pub seller: Address,
    pub asset_id: u32,
}

impl<'a> FactoryTest<'a> {
    /// Initialized factory plus one asset minted to `seller` and approved
    /// for the factory.
    pub fn setup(auction_wasm_hash: impl FnOnce(&Env) -> BytesN<32>) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let seller = Address::generate(&env);
        let admin = Address::generate(&env);

        let native = deploy_token_contract(&env, &admin);
        let ledger = deploy_token_contract(&env, &admin);
        let registry =
            MockAssetRegistryClient::new(&env, &env.register(MockAssetRegistry, (admin,)));
        let price_feed = MockPriceFeedClient::new(
            &env,
            &env.register(MockPriceFeed, (8u32, 200_000_000_000i128)),
        );

        let wasm_hash = auction_wasm_hash(&env);
        let factory = deploy_factory_contract(&env, &owner, &wasm_hash, &native.address);

        let asset_id = registry.mint(&seller);
        registry.approve(&seller, &factory.address, &asset_id);

        FactoryTest {
            env,
            factory,
            registry,
            price_feed,
            native,
            ledger,
            owner,
            seller,
            asset_id,
        }
    }

    pub fn create_auction(&self) -> Address {
        self.factory.create_auction(
            &self.seller,
            &Some(self.registry.address.clone()),
            &self.asset_id,
            &ONE_DAY,
            &self.ledger.address,
            &Some(self.price_feed.address.clone()),
            &FEE_BPS,
        )
    }
}

/// Stand-in hash for tests that never reach deployment.
pub fn unused_wasm_hash(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[7; 32])
}

pub fn deploy_token_contract<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    token::Client::new(
        env,
        &env.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}

pub fn deploy_factory_contract<'a>(
    env: &Env,
    owner: &Address,
    auction_wasm_hash: &BytesN<32>,
    native_token: &Address,
) -> AuctionFactoryClient<'a> {
    let factory = AuctionFactoryClient::new(env, &env.register(AuctionFactory, ()));
    factory.initialize(
        owner,
        auction_wasm_hash,
        native_token,
        &FeeDestination::Retained,
    );
    factory
}
