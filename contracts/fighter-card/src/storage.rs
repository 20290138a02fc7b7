use soroban_sdk::{contracttype, String};

type FighterId = u64;
type Season = u64;

// Every card collection opens in season 1
pub const STARTING_SEASON: Season = 1;

/// A minted fighter card.
///
/// * `id` - Sequential token id, assigned at mint.
/// * `fighter_name` - Display name of the fighter.
/// * `season` - The season counter value at the moment of minting. Never
/// changes afterwards.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Fighter {
    pub id: FighterId,
    pub fighter_name: String,
    pub season: Season,
}

// Enum to represent different data keys in storage
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    IsInitialized,
    CurrentSeason,
    FighterId,
    Fighter(FighterId),
    Owner(FighterId),
}

pub mod utils {

    use soroban_sdk::{log, Address, Env};

    use crate::{
        error::ContractError,
        ttl::{BUMP_AMOUNT, LIFETIME_THRESHOLD},
    };

    use super::{DataKey, Fighter, Season};

    // Ids start at 0 and are dense
    pub fn generate_fighter_id(env: &Env) -> u64 {
        let id = env
            .storage()
            .instance()
            .get::<_, u64>(&DataKey::FighterId)
            .unwrap_or_default();
        env.storage().instance().set(&DataKey::FighterId, &(id + 1u64));
        env.storage()
            .instance()
            .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);

        id
    }

    pub fn save_fighter(env: &Env, fighter: &Fighter) {
        env.storage()
            .persistent()
            .set(&DataKey::Fighter(fighter.id), fighter);
        env.storage().persistent().extend_ttl(
            &DataKey::Fighter(fighter.id),
            LIFETIME_THRESHOLD,
            BUMP_AMOUNT,
        );
    }

    pub fn get_fighter(env: &Env, id: u64) -> Result<Fighter, ContractError> {
        let fighter = env
            .storage()
            .persistent()
            .get(&DataKey::Fighter(id))
            .ok_or_else(|| {
                log!(env, "Fighter Card: Get fighter: Fighter not present");
                ContractError::FighterNotFound
            })?;
        env.storage().persistent().extend_ttl(
            &DataKey::Fighter(id),
            LIFETIME_THRESHOLD,
            BUMP_AMOUNT,
        );

        Ok(fighter)
    }

    pub fn save_owner(env: &Env, id: u64, owner: &Address) {
        env.storage().persistent().set(&DataKey::Owner(id), owner);
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::Owner(id), LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_owner(env: &Env, id: u64) -> Result<Address, ContractError> {
        let owner = env
            .storage()
            .persistent()
            .get(&DataKey::Owner(id))
            .ok_or_else(|| {
                log!(env, "Fighter Card: Get owner: Fighter not present");
                ContractError::FighterNotFound
            })?;
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::Owner(id), LIFETIME_THRESHOLD, BUMP_AMOUNT);

        Ok(owner)
    }

    pub fn save_current_season(env: &Env, season: Season) {
        env.storage()
            .instance()
            .set(&DataKey::CurrentSeason, &season);
        env.storage()
            .instance()
            .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_current_season(env: &Env) -> Result<Season, ContractError> {
        let season = env
            .storage()
            .instance()
            .get(&DataKey::CurrentSeason)
            .ok_or_else(|| {
                log!(env, "Fighter Card: Get current season: Season not set");
                ContractError::SeasonNotSet
            })?;
        env.storage()
            .instance()
            .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);

        Ok(season)
    }

    pub fn save_admin(env: &Env, admin: &Address) {
        env.storage().persistent().set(&DataKey::Admin, admin);
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::Admin, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
        let admin = env
            .storage()
            .persistent()
            .get(&DataKey::Admin)
            .ok_or_else(|| {
                log!(env, "Fighter Card: Get admin: Admin not found");
                ContractError::AdminNotSet
            })?;
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::Admin, LIFETIME_THRESHOLD, BUMP_AMOUNT);

        Ok(admin)
    }

    pub fn is_initialized(env: &Env) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::IsInitialized)
            .unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage()
            .persistent()
            .set(&DataKey::IsInitialized, &true);
    }
}
