use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Bytes, BytesN, Env};

use crate::{
    error::ContractError,
    storage::{
        utils::{
            generate_asset_id, get_admin, get_asset, get_balance_of, get_base_uri,
            get_utility_balance_of, is_initialized, save_admin, save_asset, save_base_uri,
            set_initialized, update_balance_of, update_utility_balance_of,
        },
        Asset, URIValue,
    },
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Multi token marketplace with creator royalties"
);

#[contract]
pub struct RoyaltyMarketplace;

#[contractimpl]
impl RoyaltyMarketplace {
    // takes an address used as the owner of the marketplace and the metadata
    // base uri shared by all assets
    #[allow(dead_code)]
    pub fn initialize(env: Env, admin: Address, base_uri: Bytes) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(&env, "Royalty Marketplace: Initialize: Already initialized");
            return Err(ContractError::AlreadyInitialized);
        }

        save_admin(&env, &admin);
        save_base_uri(
            &env,
            &URIValue {
                uri: base_uri.clone(),
            },
        );
        set_initialized(&env);

        env.events().publish(("initialize", "admin: "), admin);
        env.events().publish(("initialize", "base uri: "), base_uri);

        Ok(())
    }

    // Creates a new asset class with `sender` as its creator and credits the
    // whole initial supply to them. The royalty percentage is fixed forever.
    // No range check is done on it; an oversized percentage makes every
    // transfer of the asset fail
    #[allow(dead_code)]
    pub fn mint_asset(
        env: Env,
        sender: Address,
        amount: u64,
        royalty_percentage: u64,
    ) -> Result<u64, ContractError> {
        sender.require_auth();

        let id = generate_asset_id(&env);

        let asset = Asset {
            id,
            creator: sender.clone(),
            royalty_percentage,
        };
        save_asset(&env, &asset);

        let current_balance = get_balance_of(&env, &sender, id);
        update_balance_of(&env, &sender, id, current_balance + amount);

        env.events().publish(("mint asset", "creator: "), sender);
        env.events().publish(("mint asset", "id: "), id);
        env.events().publish(("mint asset", "amount: "), amount);
        env.events()
            .publish(("mint asset", "royalty percentage: "), royalty_percentage);

        Ok(id)
    }

    // Moves `amount` of asset `id` out of `from`; the creator's royalty cut
    // goes to the creator and the remainder to `to`
    #[allow(dead_code)]
    pub fn safe_transfer_with_royalty(
        env: Env,
        from: Address,
        to: Address,
        id: u64,
        amount: u64,
        _data: Bytes,
    ) -> Result<(), ContractError> {
        from.require_auth();

        let asset = get_asset(&env, id)?;

        let from_balance = get_balance_of(&env, &from, id);
        if from_balance < amount {
            log!(
                &env,
                "Royalty Marketplace: Safe transfer with royalty: Insufficient Balance",
                "Available balance: ",
                from_balance,
                "Amount to send: ",
                amount
            );
            return Err(ContractError::InsufficientBalance);
        }

        let royalty = amount * asset.royalty_percentage / 100;

        // first we reduce `from` balance
        update_balance_of(&env, &from, id, from_balance - amount);

        // balances are re-read between the updates; `from`, `to` and the
        // creator may be the same account
        let creator_balance = get_balance_of(&env, &asset.creator, id);
        update_balance_of(&env, &asset.creator, id, creator_balance + royalty);

        let rcpt_balance = get_balance_of(&env, &to, id);
        update_balance_of(&env, &to, id, rcpt_balance + (amount - royalty));

        env.events()
            .publish(("transfer with royalty", "from: "), from);
        env.events().publish(("transfer with royalty", "to: "), to);
        env.events().publish(("transfer with royalty", "id: "), id);
        env.events()
            .publish(("transfer with royalty", "amount: "), amount);
        env.events()
            .publish(("transfer with royalty", "royalty paid: "), royalty);

        Ok(())
    }

    // Increases the utility token balance of `to`. Only the marketplace
    // owner may do this; utility tokens have no transfer surface
    #[allow(dead_code)]
    pub fn mint_utility_token(
        env: Env,
        sender: Address,
        to: Address,
        amount: u64,
    ) -> Result<(), ContractError> {
        let admin = get_admin(&env)?;
        if sender != admin {
            log!(
                &env,
                "Royalty Marketplace: Mint utility token: Unauthorized. Sender: ",
                sender
            );
            return Err(ContractError::Unauthorized);
        }

        sender.require_auth();

        let current_balance = get_utility_balance_of(&env, &to);
        update_utility_balance_of(&env, &to, current_balance + amount);

        env.events().publish(("mint utility token", "to: "), to);
        env.events()
            .publish(("mint utility token", "amount: "), amount);

        Ok(())
    }

    // Returns the balance of the `account` for the asset `id`
    #[allow(dead_code)]
    pub fn balance_of(env: Env, account: Address, id: u64) -> u64 {
        get_balance_of(&env, &account, id)
    }

    #[allow(dead_code)]
    pub fn utility_balance(env: Env, account: Address) -> u64 {
        get_utility_balance_of(&env, &account)
    }

    #[allow(dead_code)]
    pub fn asset_info(env: Env, id: u64) -> Result<Asset, ContractError> {
        get_asset(&env, id)
    }

    // The metadata uri is shared by every asset id
    #[allow(dead_code)]
    pub fn uri(env: Env, _id: u64) -> Result<URIValue, ContractError> {
        get_base_uri(&env)
    }

    pub fn show_admin(env: &Env) -> Result<Address, ContractError> {
        get_admin(env)
    }

    #[allow(dead_code)]
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        let admin: Address = get_admin(&env)?;
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }
}
