use soroban_sdk::{testutils::Address as _, Address, Bytes, Env};

use crate::{
    contract::{RoyaltyMarketplace, RoyaltyMarketplaceClient},
    error::ContractError,
    storage::URIValue,
};

use super::setup::{initialize_marketplace_contract, METADATA_URI};
use test_case::test_case;

#[test]
fn proper_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);

    let client = initialize_marketplace_contract(&env, Some(&admin), None);

    let actual_admin_addr = client.show_admin();
    assert_eq!(admin, actual_admin_addr);

    assert_eq!(
        client.uri(&1),
        URIValue {
            uri: Bytes::from_slice(&env, METADATA_URI)
        }
    );
}

#[test]
fn initialization_should_fail_when_done_twice() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let base_uri = Bytes::from_slice(&env, METADATA_URI);

    let client =
        RoyaltyMarketplaceClient::new(&env, &env.register_contract(None, RoyaltyMarketplace {}));

    client.initialize(&admin, &base_uri);

    assert_eq!(
        client.try_initialize(&admin, &base_uri),
        Err(Ok(ContractError::AlreadyInitialized))
    );
}

#[test]
fn uri_should_be_the_same_for_every_asset_id() {
    let env = Env::default();
    env.mock_all_auths();

    let base_uri = Bytes::from_slice(&env, b"ipfs://fighter-assets/");

    let client = initialize_marketplace_contract(&env, None, Some(&base_uri));

    let expected = URIValue { uri: base_uri };
    assert_eq!(client.uri(&0), expected);
    assert_eq!(client.uri(&1), expected);
    assert_eq!(client.uri(&42), expected);
}

#[test]
fn mint_asset_should_store_creator_and_royalty() {
    let env = Env::default();
    env.mock_all_auths();

    let creator = Address::generate(&env);

    let client = initialize_marketplace_contract(&env, None, None);

    let id = client.mint_asset(&creator, &100, &10);
    assert_eq!(id, 0);

    let asset = client.asset_info(&0);
    assert_eq!(asset.id, 0);
    assert_eq!(asset.creator, creator);
    assert_eq!(asset.royalty_percentage, 10);

    // the whole initial supply lands on the creator
    assert_eq!(client.balance_of(&creator, &0), 100);
}

#[test]
fn mint_asset_should_assign_sequential_ids() {
    let env = Env::default();
    env.mock_all_auths();

    let creator_a = Address::generate(&env);
    let creator_b = Address::generate(&env);

    let client = initialize_marketplace_contract(&env, None, None);

    assert_eq!(client.mint_asset(&creator_a, &50, &15), 0);
    assert_eq!(client.mint_asset(&creator_b, &25, &5), 1);

    assert_eq!(client.asset_info(&0).creator, creator_a);
    assert_eq!(client.asset_info(&1).creator, creator_b);
    assert_eq!(client.balance_of(&creator_a, &1), 0);
}

#[test]
fn mint_asset_should_accept_percentage_above_hundred() {
    let env = Env::default();
    env.mock_all_auths();

    let creator = Address::generate(&env);

    let client = initialize_marketplace_contract(&env, None, None);

    // the percentage is not range checked at mint time
    client.mint_asset(&creator, &100, &150);

    assert_eq!(client.asset_info(&0).royalty_percentage, 150);
}

#[test]
fn transfer_should_pay_royalty_to_creator() {
    let env = Env::default();
    env.mock_all_auths();

    let creator = Address::generate(&env);
    let buyer = Address::generate(&env);

    let client = initialize_marketplace_contract(&env, None, None);

    client.mint_asset(&creator, &100, &10);

    client.safe_transfer_with_royalty(&creator, &buyer, &0, &100, &Bytes::new(&env));

    // 10 units flow back to the creator, the buyer receives the rest
    assert_eq!(client.balance_of(&buyer, &0), 90);
    assert_eq!(client.balance_of(&creator, &0), 10);
}

#[test]
fn transfer_should_split_between_seller_creator_and_recipient() {
    let env = Env::default();
    env.mock_all_auths();

    let creator = Address::generate(&env);
    let seller = Address::generate(&env);
    let buyer = Address::generate(&env);

    let client = initialize_marketplace_contract(&env, None, None);

    client.mint_asset(&creator, &100, &10);

    client.safe_transfer_with_royalty(&creator, &seller, &0, &100, &Bytes::new(&env));

    assert_eq!(client.balance_of(&creator, &0), 10);
    assert_eq!(client.balance_of(&seller, &0), 90);

    client.safe_transfer_with_royalty(&seller, &buyer, &0, &50, &Bytes::new(&env));

    assert_eq!(client.balance_of(&creator, &0), 15);
    assert_eq!(client.balance_of(&seller, &0), 40);
    assert_eq!(client.balance_of(&buyer, &0), 45);

    // the total supply of the asset never changes
    let total = client.balance_of(&creator, &0)
        + client.balance_of(&seller, &0)
        + client.balance_of(&buyer, &0);
    assert_eq!(total, 100);
}

#[test_case(100, 10, 10; "ten percent splits evenly")]
#[test_case(99, 10, 9; "royalty rounds down")]
#[test_case(1, 50, 0; "tiny amounts round to zero")]
#[test_case(33, 7, 2; "odd percentage rounds down")]
#[test_case(100, 0, 0; "zero royalty sends everything")]
#[test_case(100, 100, 100; "full royalty returns everything")]
fn transfer_royalty_should_floor_divide(amount: u64, percentage: u64, expected_royalty: u64) {
    let env = Env::default();
    env.mock_all_auths();

    let creator = Address::generate(&env);
    let buyer = Address::generate(&env);

    let client = initialize_marketplace_contract(&env, None, None);

    client.mint_asset(&creator, &amount, &percentage);

    client.safe_transfer_with_royalty(&creator, &buyer, &0, &amount, &Bytes::new(&env));

    assert_eq!(client.balance_of(&buyer, &0), amount - expected_royalty);
    assert_eq!(client.balance_of(&creator, &0), expected_royalty);
}

#[test]
fn transfer_should_fail_when_balance_not_enough() {
    let env = Env::default();
    env.mock_all_auths();

    let creator = Address::generate(&env);
    let buyer = Address::generate(&env);

    let client = initialize_marketplace_contract(&env, None, None);

    client.mint_asset(&creator, &1, &10);

    assert_eq!(
        client.try_safe_transfer_with_royalty(&creator, &buyer, &0, &10, &Bytes::new(&env)),
        Err(Ok(ContractError::InsufficientBalance))
    );
}

#[test]
fn transfer_should_fail_when_asset_unknown() {
    let env = Env::default();
    env.mock_all_auths();

    let user_a = Address::generate(&env);
    let user_b = Address::generate(&env);

    let client = initialize_marketplace_contract(&env, None, None);

    assert_eq!(
        client.try_safe_transfer_with_royalty(&user_a, &user_b, &0, &10, &Bytes::new(&env)),
        Err(Ok(ContractError::AssetNotFound))
    );
}

#[test]
fn asset_info_should_fail_when_asset_unknown() {
    let env = Env::default();
    env.mock_all_auths();

    let client = initialize_marketplace_contract(&env, None, None);

    assert_eq!(
        client.try_asset_info(&7),
        Err(Ok(ContractError::AssetNotFound))
    );
}

#[test]
fn mint_utility_token_should_increase_balance() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);

    let client = initialize_marketplace_contract(&env, Some(&admin), None);

    client.mint_utility_token(&admin, &user, &200);
    assert_eq!(client.utility_balance(&user), 200);

    client.mint_utility_token(&admin, &user, &50);
    assert_eq!(client.utility_balance(&user), 250);
}

#[test]
fn mint_utility_token_should_fail_when_unauthorized() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);

    let client = initialize_marketplace_contract(&env, Some(&admin), None);

    assert_eq!(
        client.try_mint_utility_token(&user, &user, &200),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(client.utility_balance(&user), 0);
}

#[test]
fn utility_tokens_should_not_touch_asset_balances() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let creator = Address::generate(&env);

    let client = initialize_marketplace_contract(&env, Some(&admin), None);

    client.mint_asset(&creator, &100, &10);
    client.mint_utility_token(&admin, &creator, &200);

    assert_eq!(client.balance_of(&creator, &0), 100);
    assert_eq!(client.utility_balance(&creator), 200);
    assert_eq!(client.utility_balance(&admin), 0);
}
