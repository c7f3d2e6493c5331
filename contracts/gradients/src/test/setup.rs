use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

use crate::contract::{CryptoGradients, CryptoGradientsClient};

pub fn deploy_gradients_contract<'a>(
    env: &Env,
    admin: Option<&Address>,
) -> (
    CryptoGradientsClient<'a>,
    token::Client<'a>,
    token::StellarAssetClient<'a>,
) {
    let alt_admin = &Address::generate(env);
    let admin = admin.unwrap_or(alt_admin);

    let payment_token = env.register_stellar_asset_contract(admin.clone());

    let gradients =
        CryptoGradientsClient::new(env, &env.register_contract(None, CryptoGradients {}));

    gradients.initialize(
        admin,
        &String::from_str(env, "CryptoGradients"),
        &String::from_str(env, "GRAD"),
        &payment_token,
    );

    (
        gradients,
        token::Client::new(env, &payment_token),
        token::StellarAssetClient::new(env, &payment_token),
    )
}
