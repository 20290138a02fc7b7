use soroban_sdk::{contracttype, Address, Bytes};

type AssetId = u64;
type Balance = u64;

/// A mintable asset class with a creator royalty attached.
///
/// * `id` - Sequential asset id, assigned at mint.
/// * `creator` - The `Address` that minted the asset. Receives the royalty
/// cut of every transfer.
/// * `royalty_percentage` - Whole percentage of each transferred quantity
/// redirected to the creator. Fixed at mint.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Asset {
    pub id: AssetId,
    pub creator: Address,
    pub royalty_percentage: u64,
}

// Struct to represent the metadata URI
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct URIValue {
    pub uri: Bytes,
}

// Enum to represent different data keys in storage
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    IsInitialized,
    AssetId,
    Asset(AssetId),
    Balance(Address),
    UtilityBalance(Address),
    BaseUri,
}

pub mod utils {

    use soroban_sdk::{log, Address, Env, Map};

    use crate::{
        error::ContractError,
        ttl::{BUMP_AMOUNT, LIFETIME_THRESHOLD},
    };

    use super::{Asset, AssetId, Balance, DataKey, URIValue};

    // Ids start at 0 and are dense
    pub fn generate_asset_id(env: &Env) -> u64 {
        let id = env
            .storage()
            .instance()
            .get::<_, u64>(&DataKey::AssetId)
            .unwrap_or_default();
        env.storage().instance().set(&DataKey::AssetId, &(id + 1u64));
        env.storage()
            .instance()
            .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);

        id
    }

    pub fn save_asset(env: &Env, asset: &Asset) {
        env.storage()
            .persistent()
            .set(&DataKey::Asset(asset.id), asset);
        env.storage().persistent().extend_ttl(
            &DataKey::Asset(asset.id),
            LIFETIME_THRESHOLD,
            BUMP_AMOUNT,
        );
    }

    pub fn get_asset(env: &Env, id: u64) -> Result<Asset, ContractError> {
        let asset = env
            .storage()
            .persistent()
            .get(&DataKey::Asset(id))
            .ok_or_else(|| {
                log!(env, "Royalty Marketplace: Get asset: Asset not present");
                ContractError::AssetNotFound
            })?;
        env.storage().persistent().extend_ttl(
            &DataKey::Asset(id),
            LIFETIME_THRESHOLD,
            BUMP_AMOUNT,
        );

        Ok(asset)
    }

    pub fn get_balance_of(env: &Env, owner: &Address, id: u64) -> u64 {
        let balance_map: Map<AssetId, Balance> = env
            .storage()
            .persistent()
            .get(&DataKey::Balance(owner.clone()))
            .unwrap_or(Map::new(env));

        balance_map.get(id).unwrap_or(0u64)
    }

    pub fn update_balance_of(env: &Env, owner: &Address, id: u64, new_amount: u64) {
        let mut balance_map: Map<AssetId, Balance> = env
            .storage()
            .persistent()
            .get(&DataKey::Balance(owner.clone()))
            .unwrap_or(Map::new(env));

        balance_map.set(id, new_amount);

        env.storage()
            .persistent()
            .set(&DataKey::Balance(owner.clone()), &balance_map);
        env.storage().persistent().extend_ttl(
            &DataKey::Balance(owner.clone()),
            LIFETIME_THRESHOLD,
            BUMP_AMOUNT,
        );
    }

    pub fn get_utility_balance_of(env: &Env, owner: &Address) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::UtilityBalance(owner.clone()))
            .unwrap_or(0u64)
    }

    pub fn update_utility_balance_of(env: &Env, owner: &Address, new_amount: u64) {
        env.storage()
            .persistent()
            .set(&DataKey::UtilityBalance(owner.clone()), &new_amount);
        env.storage().persistent().extend_ttl(
            &DataKey::UtilityBalance(owner.clone()),
            LIFETIME_THRESHOLD,
            BUMP_AMOUNT,
        );
    }

    pub fn save_base_uri(env: &Env, uri: &URIValue) {
        env.storage().persistent().set(&DataKey::BaseUri, uri);
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::BaseUri, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_base_uri(env: &Env) -> Result<URIValue, ContractError> {
        let uri = env
            .storage()
            .persistent()
            .get(&DataKey::BaseUri)
            .ok_or_else(|| {
                log!(env, "Royalty Marketplace: Get base uri: No base uri set");
                ContractError::NoUriSet
            })?;
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::BaseUri, LIFETIME_THRESHOLD, BUMP_AMOUNT);

        Ok(uri)
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
                log!(env, "Royalty Marketplace: Get admin: Admin not found");
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
