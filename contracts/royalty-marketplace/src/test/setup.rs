use soroban_sdk::{testutils::Address as _, Address, Bytes, Env};

use crate::contract::{RoyaltyMarketplace, RoyaltyMarketplaceClient};

pub const METADATA_URI: &[u8] = b"https://api.royalty.com/metadata/";

pub fn initialize_marketplace_contract<'a>(
    env: &Env,
    admin: Option<&Address>,
    base_uri: Option<&Bytes>,
) -> RoyaltyMarketplaceClient<'a> {
    let marketplace =
        RoyaltyMarketplaceClient::new(env, &env.register_contract(None, RoyaltyMarketplace {}));

    let alt_admin = &Address::generate(env);
    let alt_base_uri = &Bytes::from_slice(env, METADATA_URI);

    let admin = admin.unwrap_or(alt_admin);
    let base_uri = base_uri.unwrap_or(alt_base_uri);

    marketplace.initialize(admin, base_uri);

    marketplace
}
