use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, BytesN, Env, String};

use crate::{
    error::ContractError,
    storage::{
        utils::{
            generate_fighter_id, get_admin, get_current_season, get_fighter, get_owner,
            is_initialized, save_admin, save_current_season, save_fighter, save_owner,
            set_initialized,
        },
        Fighter, STARTING_SEASON,
    },
};

// Metadata that is added on to the WASM custom section
contractmeta!(key = "Description", val = "Seasonal fighter card collection");

#[contract]
pub struct FighterCard;

#[contractimpl]
impl FighterCard {
    // takes an address and uses it as an administrator of the collection
    #[allow(dead_code)]
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(&env, "Fighter Card: Initialize: Already initialized");
            return Err(ContractError::AlreadyInitialized);
        }

        save_admin(&env, &admin);
        save_current_season(&env, STARTING_SEASON);
        set_initialized(&env);

        env.events().publish(("initialize", "admin: "), admin);
        env.events()
            .publish(("initialize", "starting season: "), STARTING_SEASON);

        Ok(())
    }

    // Mints a new card for `sender`, stamped with the season that is
    // currently running
    #[allow(dead_code)]
    pub fn mint_fighter_card(
        env: Env,
        sender: Address,
        fighter_name: String,
    ) -> Result<u64, ContractError> {
        sender.require_auth();

        let id = generate_fighter_id(&env);
        let season = get_current_season(&env)?;

        let fighter = Fighter {
            id,
            fighter_name: fighter_name.clone(),
            season,
        };

        save_fighter(&env, &fighter);
        save_owner(&env, id, &sender);

        env.events()
            .publish(("mint fighter card", "owner: "), sender);
        env.events().publish(("mint fighter card", "id: "), id);
        env.events()
            .publish(("mint fighter card", "fighter name: "), fighter_name);
        env.events()
            .publish(("mint fighter card", "season: "), season);

        Ok(id)
    }

    // Advances the season counter by one. Cards minted earlier keep the
    // season they were stamped with
    #[allow(dead_code)]
    pub fn start_new_season(env: Env) -> Result<u64, ContractError> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        let new_season = get_current_season(&env)? + 1u64;
        save_current_season(&env, new_season);

        env.events()
            .publish(("start new season", "season: "), new_season);

        Ok(new_season)
    }

    #[allow(dead_code)]
    pub fn get_fighter_details(env: Env, id: u64) -> Result<Fighter, ContractError> {
        get_fighter(&env, id)
    }

    #[allow(dead_code)]
    pub fn current_season(env: Env) -> Result<u64, ContractError> {
        get_current_season(&env)
    }

    // Returns the address the card was minted to
    #[allow(dead_code)]
    pub fn owner_of(env: Env, id: u64) -> Result<Address, ContractError> {
        get_owner(&env, id)
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
