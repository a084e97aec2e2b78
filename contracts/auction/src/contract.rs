use gavel::{
    constants::{BPS_DENOMINATOR, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    interfaces::{AssetRegistryClient, PriceFeedClient},
    math::{
        auction::{calculate_payout, fungible_usd_value, native_usd_value},
        safe_math::SafeMath,
    },
    types::{FeeDestination, HighestBid},
};
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env};

use crate::{
    auction::AuctionTrait,
    errors::ContractError,
    events::AuctionEvents,
    storage::{
        get_highest_bid, get_info, is_ended, is_initialized, save_highest_bid, save_info,
        set_ended, AuctionInfo,
    },
};

contractmeta!(
    key = "Description",
    val = "English auction of a single unique asset held in custody"
);

#[contract]
pub struct Auction;

#[contractimpl]
impl AuctionTrait for Auction {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        asset_contract: Option<Address>,
        asset_id: u32,
        seller: Address,
        admin: Address,
        duration: u64,
        ledger_token: Address,
        native_token: Address,
        oracle: Option<Address>,
        fee_bps: u32,
        fee_destination: FeeDestination,
    ) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(
                &env,
                "Auction: Initialize: initializing contract twice is not allowed"
            );
            return Err(ContractError::AlreadyInitialized);
        }
        seller.require_auth();

        let asset_contract = asset_contract.ok_or_else(|| {
            log!(&env, "Auction: Initialize: asset contract is not set");
            ContractError::InvalidAssetContract
        })?;

        if duration == 0 {
            log!(&env, "Auction: Initialize: duration must be positive");
            return Err(ContractError::InvalidDuration);
        }

        if fee_bps >= BPS_DENOMINATOR {
            log!(
                &env,
                "Auction: Initialize: fee must be below {} bps",
                BPS_DENOMINATOR
            );
            return Err(ContractError::InvalidFee);
        }

        let oracle = oracle.ok_or_else(|| {
            log!(&env, "Auction: Initialize: price feed is not set");
            ContractError::InvalidOracle
        })?;

        let custodian = env.current_contract_address();
        if AssetRegistryClient::new(&env, &asset_contract).owner_of(&asset_id) != custodian {
            log!(
                &env,
                "Auction: Initialize: asset {} is not held by the auction",
                asset_id
            );
            return Err(ContractError::AssetNotInCustody);
        }

        let end_time = env.ledger().timestamp().safe_add(duration, &env)?;

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        save_info(
            &env,
            &AuctionInfo {
                asset_contract: asset_contract.clone(),
                asset_id,
                seller: seller.clone(),
                admin,
                end_time,
                fee_bps,
                ledger_token,
                native_token,
                oracle,
                fee_destination,
            },
        );
        save_highest_bid(&env, &HighestBid::empty());

        AuctionEvents::initialize(&env, seller, asset_contract, asset_id, end_time);

        Ok(())
    }

    fn bid_native(env: Env, bidder: Address, amount: i128) -> Result<(), ContractError> {
        place_bid(&env, bidder, amount, false)
    }

    fn bid_fungible(env: Env, bidder: Address, amount: i128) -> Result<(), ContractError> {
        place_bid(&env, bidder, amount, true)
    }

    fn end_auction(env: Env) -> Result<(), ContractError> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let info = get_info(&env)?;

        if env.ledger().timestamp() < info.end_time {
            log!(&env, "Auction: End auction: auction not yet ended");
            return Err(ContractError::AuctionNotYetEnded);
        }

        if is_ended(&env) {
            log!(&env, "Auction: End auction: auction already settled");
            return Err(ContractError::AuctionAlreadyEnded);
        }

        let highest_bid = get_highest_bid(&env);
        let payout = calculate_payout(&env, highest_bid.amount, info.fee_bps)?;

        set_ended(&env);

        let registry = AssetRegistryClient::new(&env, &info.asset_contract);
        let custodian = env.current_contract_address();

        match highest_bid.bidder {
            None => {
                registry.transfer(&custodian, &info.seller, &info.asset_id);
                AuctionEvents::auction_ended(&env, None, 0);
            }
            Some(winner) => {
                pay(
                    &env,
                    &info,
                    highest_bid.is_fungible,
                    &info.seller,
                    payout.seller_amount,
                );
                if let FeeDestination::Treasury(treasury) = &info.fee_destination {
                    if payout.fee > 0 {
                        pay(&env, &info, highest_bid.is_fungible, treasury, payout.fee);
                    }
                }

                registry.transfer(&custodian, &winner, &info.asset_id);
                AuctionEvents::auction_ended(&env, Some(winner), highest_bid.amount);
            }
        }

        Ok(())
    }

    fn withdraw_fees(env: Env, to: Address) -> Result<(), ContractError> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let info = get_info(&env)?;
        info.admin.require_auth();

        if !is_ended(&env) {
            log!(&env, "Auction: Withdraw fees: auction not settled yet");
            return Err(ContractError::AuctionNotYetEnded);
        }

        let native_amount = sweep(&env, &info.native_token, &to);
        let fungible_amount = sweep(&env, &info.ledger_token, &to);

        AuctionEvents::withdraw_fees(&env, to, native_amount, fungible_amount);

        Ok(())
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn get_bid_usd_value(env: Env, amount: i128, is_fungible: bool) -> Result<i128, ContractError> {
        let info = get_info(&env)?;
        let price_feed = PriceFeedClient::new(&env, &info.oracle);

        let price = price_feed.latest_round_data().answer;
        if price <= 0 {
            log!(&env, "Auction: Get bid USD value: invalid price data {}", price);
            return Err(ContractError::InvalidPriceData);
        }
        let price_decimals = price_feed.decimals();

        let value = if is_fungible {
            fungible_usd_value(&env, amount, price, price_decimals)?
        } else {
            let native_decimals = token::Client::new(&env, &info.native_token).decimals();
            native_usd_value(&env, amount, price, price_decimals, native_decimals)?
        };

        Ok(value)
    }

    fn get_info(env: Env) -> Result<AuctionInfo, ContractError> {
        get_info(&env)
    }

    fn get_highest_bid(env: Env) -> HighestBid {
        get_highest_bid(&env)
    }

    fn is_ended(env: Env) -> bool {
        is_ended(&env)
    }

    fn time_left(env: Env) -> Result<u64, ContractError> {
        let info = get_info(&env)?;
        Ok(info.end_time.saturating_sub(env.ledger().timestamp()))
    }
}

/// Shared bidding path. The new leader is stored before any funds move, so
/// a callback triggered by the refund already sees the displaced bid gone.
fn place_bid(env: &Env, bidder: Address, amount: i128, is_fungible: bool) -> Result<(), ContractError> {
    bidder.require_auth();
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    let info = get_info(env)?;

    if bidder == info.seller {
        log!(env, "Auction: Bid: seller cannot bid");
        return Err(ContractError::SellerCannotBid);
    }

    if amount <= 0 {
        log!(env, "Auction: Bid: amount must be positive");
        return Err(ContractError::InvalidBidAmount);
    }

    if is_ended(env) {
        log!(env, "Auction: Bid: auction already settled");
        return Err(ContractError::AuctionAlreadyEnded);
    }

    if env.ledger().timestamp() >= info.end_time {
        log!(env, "Auction: Bid: bidding closed at {}", info.end_time);
        return Err(ContractError::BiddingClosed);
    }

    let previous_bid = get_highest_bid(env);
    if amount <= previous_bid.amount {
        log!(
            env,
            "Auction: Bid: bid must exceed current highest {}",
            previous_bid.amount
        );
        return Err(ContractError::BidTooLow);
    }

    save_highest_bid(
        env,
        &HighestBid {
            bidder: Some(bidder.clone()),
            amount,
            is_fungible,
        },
    );

    let custodian = env.current_contract_address();
    if is_fungible {
        token::Client::new(env, &info.ledger_token).transfer_from(
            &custodian,
            &bidder,
            &custodian,
            &amount,
        );
    } else {
        token::Client::new(env, &info.native_token).transfer(&bidder, &custodian, &amount);
    }

    AuctionEvents::new_bid(env, bidder, amount, is_fungible);

    // refund goes out in the currency the displaced bid was made in
    if let Some(previous_bidder) = previous_bid.bidder {
        pay(
            env,
            &info,
            previous_bid.is_fungible,
            &previous_bidder,
            previous_bid.amount,
        );
    }

    Ok(())
}

fn pay(env: &Env, info: &AuctionInfo, is_fungible: bool, to: &Address, amount: i128) {
    let currency = if is_fungible {
        &info.ledger_token
    } else {
        &info.native_token
    };

    token::Client::new(env, currency).transfer(&env.current_contract_address(), to, &amount);
}

/// Moves the whole balance of `currency` held by the instance to `to`.
fn sweep(env: &Env, currency: &Address, to: &Address) -> i128 {
    let token = token::Client::new(env, currency);
    let custodian = env.current_contract_address();

    let amount = token.balance(&custodian);
    if amount > 0 {
        token.transfer(&custodian, to, &amount);
    }
    amount
}
