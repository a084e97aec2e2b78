extern crate std;

use gavel::constants::ONE_DAY;
use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, vec, Address, BytesN, Env, IntoVal, Symbol, Val, Vec,
};

use super::setup::{FactoryTest, FEE_BPS};
use crate::errors::ContractError;

#[allow(clippy::too_many_arguments)]
mod auction_contract {
    soroban_sdk::contractimport!(
        file = "../../target/wasm32-unknown-unknown/release/gavel_auction.wasm"
    );
}

fn install_auction_wasm(env: &Env) -> BytesN<32> {
    env.cost_estimate().budget().reset_unlimited();
    env.deployer().upload_contract_wasm(auction_contract::WASM)
}

#[test]
fn create_auction_deploys_initialized_instance() {
    let test = FactoryTest::setup(install_auction_wasm);
    test.env.ledger().set_timestamp(1_000);

    let instance = test.create_auction();

    let (_, topics, data) = test
        .env
        .events()
        .all()
        .iter()
        .filter(|(emitter, _, _)| *emitter == test.factory.address)
        .last()
        .expect("auction_deployed event");
    let expected: Vec<Val> =
        (Symbol::new(&test.env, "auction_deployed"), instance.clone()).into_val(&test.env);
    assert_eq!(topics, expected);
    let (seller, asset_contract, asset_id): (Address, Address, u32) = data.into_val(&test.env);
    assert_eq!(seller, test.seller);
    assert_eq!(asset_contract, test.registry.address);
    assert_eq!(asset_id, test.asset_id);

    let auction = auction_contract::Client::new(&test.env, &instance);
    assert_eq!(
        auction.get_info(),
        auction_contract::AuctionInfo {
            asset_contract: test.registry.address.clone(),
            asset_id: test.asset_id,
            seller: test.seller.clone(),
            admin: test.factory.address.clone(),
            end_time: 1_000 + ONE_DAY,
            fee_bps: FEE_BPS,
            ledger_token: test.ledger.address.clone(),
            native_token: test.native.address.clone(),
            oracle: test.price_feed.address.clone(),
            fee_destination: auction_contract::FeeDestination::Retained,
        }
    );
    assert_eq!(test.registry.owner_of(&test.asset_id), instance);
    assert_eq!(test.factory.get_auctions(), vec![&test.env, instance]);
}

#[test]
fn deployed_instance_cannot_be_reinitialized() {
    let test = FactoryTest::setup(install_auction_wasm);
    let instance = test.create_auction();
    let auction = auction_contract::Client::new(&test.env, &instance);
    let intruder = Address::generate(&test.env);

    assert_eq!(
        auction.try_initialize(
            &Some(test.registry.address.clone()),
            &test.asset_id,
            &intruder,
            &intruder,
            &ONE_DAY,
            &test.ledger.address,
            &test.native.address,
            &Some(test.price_feed.address.clone()),
            &0,
            &auction_contract::FeeDestination::Retained,
        ),
        Err(Ok(auction_contract::ContractError::AlreadyInitialized))
    );
    assert_eq!(auction.get_info().seller, test.seller);
}

#[test]
fn each_creation_appends_exactly_one_auction() {
    let test = FactoryTest::setup(install_auction_wasm);
    assert_eq!(test.factory.auction_count(), 0);

    let first = test.create_auction();
    assert_eq!(test.factory.auction_count(), 1);

    let mut created = vec![&test.env, first];
    for _ in 0..2 {
        let asset_id = test.registry.mint(&test.seller);
        test.registry
            .approve(&test.seller, &test.factory.address, &asset_id);
        let before = test.factory.get_auctions().len();

        let instance = test.factory.create_auction(
            &test.seller,
            &Some(test.registry.address.clone()),
            &asset_id,
            &ONE_DAY,
            &test.ledger.address,
            &Some(test.price_feed.address.clone()),
            &FEE_BPS,
        );
        created.push_back(instance.clone());

        let auctions = test.factory.get_auctions();
        assert_eq!(auctions.len(), before + 1);
        assert_eq!(auctions.last(), Some(instance));
    }

    assert_eq!(test.factory.get_auctions(), created);
}

#[test]
fn every_auction_gets_its_own_instance() {
    let test = FactoryTest::setup(install_auction_wasm);
    let first = test.create_auction();

    let second_asset = test.registry.mint(&test.seller);
    test.registry
        .approve(&test.seller, &test.factory.address, &second_asset);
    let second = test.factory.create_auction(
        &test.seller,
        &Some(test.registry.address.clone()),
        &second_asset,
        &(2 * ONE_DAY),
        &test.ledger.address,
        &Some(test.price_feed.address.clone()),
        &0,
    );

    assert_ne!(first, second);
    assert_eq!(test.factory.get_auctions(), vec![&test.env, first, second.clone()]);
    assert_eq!(test.factory.get_auctions_page(&1, &1), vec![&test.env, second.clone()]);
    assert_eq!(test.registry.owner_of(&second_asset), second);
}

#[test]
fn created_auction_runs_to_settlement() {
    let test = FactoryTest::setup(install_auction_wasm);
    let bidder = Address::generate(&test.env);
    token::StellarAssetClient::new(&test.env, &test.native.address).mint(&bidder, &1_000_000);

    let instance = test.create_auction();
    let auction = auction_contract::Client::new(&test.env, &instance);

    auction.bid_native(&bidder, &100_000);
    assert_eq!(auction.get_bid_usd_value(&10_000_000, &false), 2_000);

    test.env.ledger().set_timestamp(ONE_DAY);
    auction.end_auction();

    assert_eq!(test.registry.owner_of(&test.asset_id), bidder);
    // 2.5% fee retained by the instance
    assert_eq!(test.native.balance(&test.seller), 97_500);
    assert_eq!(test.native.balance(&instance), 2_500);
}

#[test]
fn migration_only_affects_new_auctions() {
    let test = FactoryTest::setup(install_auction_wasm);
    let treasury = Address::generate(&test.env);
    let before = test.create_auction();

    test.factory.migrate(
        &test.owner,
        &None,
        &Some(gavel::types::FeeDestination::Treasury(treasury.clone())),
    );

    let asset_id = test.registry.mint(&test.seller);
    test.registry
        .approve(&test.seller, &test.factory.address, &asset_id);
    let after = test.factory.create_auction(
        &test.seller,
        &Some(test.registry.address.clone()),
        &asset_id,
        &ONE_DAY,
        &test.ledger.address,
        &Some(test.price_feed.address.clone()),
        &FEE_BPS,
    );

    assert_eq!(
        auction_contract::Client::new(&test.env, &before)
            .get_info()
            .fee_destination,
        auction_contract::FeeDestination::Retained
    );
    assert_eq!(
        auction_contract::Client::new(&test.env, &after)
            .get_info()
            .fee_destination,
        auction_contract::FeeDestination::Treasury(treasury)
    );
}

#[test]
fn owner_withdraws_retained_fees() {
    let test = FactoryTest::setup(install_auction_wasm);
    let bidder = Address::generate(&test.env);
    token::StellarAssetClient::new(&test.env, &test.native.address).mint(&bidder, &1_000_000);

    let instance = test.create_auction();
    let auction = auction_contract::Client::new(&test.env, &instance);
    auction.bid_native(&bidder, &100_000);
    test.env.ledger().set_timestamp(ONE_DAY);
    auction.end_auction();

    test.factory.withdraw_fees(&test.owner, &instance);

    assert_eq!(test.native.balance(&test.owner), 2_500);
    assert_eq!(test.native.balance(&instance), 0);
}

#[test]
fn fee_withdrawal_is_owner_only() {
    let test = FactoryTest::setup(install_auction_wasm);
    let instance = test.create_auction();
    test.env.ledger().set_timestamp(ONE_DAY);
    auction_contract::Client::new(&test.env, &instance).end_auction();

    assert_eq!(
        test.factory
            .try_withdraw_fees(&test.seller, &instance),
        Err(Ok(ContractError::NotAuthorized))
    );
    assert_eq!(
        test.factory
            .try_withdraw_fees(&test.owner, &Address::generate(&test.env)),
        Err(Ok(ContractError::UnknownAuction))
    );
}

#[test]
fn fees_are_only_reachable_through_the_factory() {
    let test = FactoryTest::setup(install_auction_wasm);
    let instance = test.create_auction();
    test.env.ledger().set_timestamp(ONE_DAY);
    let auction = auction_contract::Client::new(&test.env, &instance);
    auction.end_auction();

    test.env.set_auths(&[]);
    assert!(auction.try_withdraw_fees(&test.seller).is_err());
}
