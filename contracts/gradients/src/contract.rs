use soroban_sdk::{contract, contractimpl, log, token, Address, Bytes, Env, String};

use crate::{
    color,
    error::ContractError,
    gradient, metadata,
    storage::{utils, Config, GradientToken},
};

/// Price of a single mint in stroops (0.01 of the native asset).
pub const MINT_PRICE: i128 = 100_000;

/// Hard cap on the number of gradients that can ever be minted.
pub const MAX_SUPPLY: u64 = 10_000;

#[contract]
pub struct CryptoGradients;

#[contractimpl]
impl CryptoGradients {
    // takes an address and uses it as an administrator of the collection;
    // `payment_token` is the asset mint fees are paid in
    #[allow(dead_code)]
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        payment_token: Address,
    ) -> Result<(), ContractError> {
        if utils::is_initialized(&env) {
            log!(&env, "Gradients: Initialize: Already initialized");
            return Err(ContractError::AlreadyInitialized);
        }

        let config = Config {
            name: name.clone(),
            symbol: symbol.clone(),
            payment_token,
        };

        utils::save_config(&env, config);
        utils::save_admin(&env, &admin);
        utils::set_initialized(&env);

        env.events()
            .publish(("initialize", "collection name: "), name);
        env.events()
            .publish(("initialize", "collection symbol: "), symbol);

        Ok(())
    }

    // Mints a new gradient token for `sender` from an ordered pair of
    // 6-character uppercase hex colors
    #[allow(dead_code)]
    pub fn mint_gradient(
        env: Env,
        sender: Address,
        color_a: String,
        color_b: String,
        payment: i128,
    ) -> Result<u64, ContractError> {
        sender.require_auth();

        if !color::is_valid(&color_a) || !color::is_valid(&color_b) {
            log!(&env, "Gradients: Mint gradient: Invalid color format");
            return Err(ContractError::InvalidColorFormat);
        }
        let decoded_a = color::decode(&color_a)?;
        let decoded_b = color::decode(&color_b)?;

        if payment < MINT_PRICE {
            log!(
                &env,
                "Gradients: Mint gradient: Payment below the mint price: ",
                payment
            );
            return Err(ContractError::InsufficientPayment);
        }

        let fingerprint = gradient::fingerprint(decoded_a, decoded_b);
        if utils::get_token_id_by_fingerprint(&env, fingerprint).is_some() {
            log!(&env, "Gradients: Mint gradient: This gradient already exists");
            return Err(ContractError::GradientAlreadyExists);
        }

        let token_id = utils::get_token_counter(&env);
        if token_id >= MAX_SUPPLY {
            log!(&env, "Gradients: Mint gradient: Supply exhausted");
            return Err(ContractError::SupplyExhausted);
        }

        let config = utils::get_config(&env)?;
        token::Client::new(&env, &config.payment_token).transfer(
            &sender,
            &env.current_contract_address(),
            &payment,
        );

        let token = GradientToken {
            token_id,
            color_a: decoded_a,
            color_b: decoded_b,
            owner: sender.clone(),
        };

        utils::save_token(&env, &token);
        utils::save_fingerprint_index(&env, fingerprint, token_id);
        utils::set_token_counter(&env, token_id + 1);

        env.events().publish(("mint gradient", "minter: "), sender);
        env.events()
            .publish(("mint gradient", "token id: "), token_id);

        Ok(token_id)
    }

    // Returns true iff `color` is a well-formed 6-character uppercase hex
    // color string
    #[allow(dead_code)]
    pub fn is_valid_color(color: String) -> bool {
        color::is_valid(&color)
    }

    // Returns the deduplication fingerprint of a color pair, rendered as a
    // 6-character hex string
    #[allow(dead_code)]
    pub fn generate_gradient_hash(
        env: Env,
        color_a: String,
        color_b: String,
    ) -> Result<String, ContractError> {
        let decoded_a = color::decode(&color_a)?;
        let decoded_b = color::decode(&color_b)?;

        Ok(color::encode(
            &env,
            gradient::fingerprint(decoded_a, decoded_b),
        ))
    }

    // Looks an already minted token up by its gradient hash; `None` when no
    // token with that fingerprint has been minted yet
    #[allow(dead_code)]
    pub fn get_token_for_gradient_hash(
        env: Env,
        hash: String,
    ) -> Result<Option<GradientToken>, ContractError> {
        let fingerprint = color::decode(&hash)?;

        match utils::get_token_id_by_fingerprint(&env, fingerprint) {
            Some(token_id) => Ok(Some(utils::get_token(&env, token_id)?)),
            None => Ok(None),
        }
    }

    #[allow(dead_code)]
    pub fn get_token(env: Env, token_id: u64) -> Result<GradientToken, ContractError> {
        utils::get_token(&env, token_id)
    }

    // Returns the stored color pair of a token, re-encoded as uppercase hex
    #[allow(dead_code)]
    pub fn get_gradient(env: Env, token_id: u64) -> Result<(String, String), ContractError> {
        let token = utils::get_token(&env, token_id)?;

        Ok((
            color::encode(&env, token.color_a),
            color::encode(&env, token.color_b),
        ))
    }

    // Returns the full metadata document of a token as a self-contained
    // data URI
    #[allow(dead_code)]
    pub fn token_uri(env: Env, token_id: u64) -> Result<Bytes, ContractError> {
        let token = utils::get_token(&env, token_id).map_err(|err| {
            log!(&env, "Gradients: Token uri: Unknown token id: ", token_id);
            err
        })?;

        Ok(metadata::render_metadata(
            &env,
            token.token_id,
            token.color_a,
            token.color_b,
        ))
    }

    // Renders the gradient SVG for a color pair without minting it
    #[allow(dead_code)]
    pub fn render_svg(
        env: Env,
        color_a: String,
        color_b: String,
    ) -> Result<Bytes, ContractError> {
        let decoded_a = color::decode(&color_a)?;
        let decoded_b = color::decode(&color_b)?;

        Ok(metadata::render_svg(&env, decoded_a, decoded_b))
    }

    #[allow(dead_code)]
    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, ContractError> {
        let token = utils::get_token(&env, token_id)?;

        Ok(token.owner)
    }

    // Transfers a token to `to`; only the current owner can transfer
    #[allow(dead_code)]
    pub fn transfer(
        env: Env,
        sender: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), ContractError> {
        sender.require_auth();

        let mut token = utils::get_token(&env, token_id)?;

        if token.owner != sender {
            log!(
                &env,
                "Gradients: Transfer: Unauthorized. Sender: ",
                sender
            );
            return Err(ContractError::Unauthorized);
        }

        token.owner = to.clone();
        utils::save_token(&env, &token);

        env.events().publish(("transfer", "from: "), sender);
        env.events().publish(("transfer", "to: "), to);
        env.events().publish(("transfer", "token id: "), token_id);

        Ok(())
    }

    // Number of tokens minted so far
    #[allow(dead_code)]
    pub fn total_supply(env: Env) -> u64 {
        utils::get_token_counter(&env)
    }

    #[allow(dead_code)]
    pub fn show_admin(env: &Env) -> Result<Address, ContractError> {
        utils::get_admin(env)
    }

    #[allow(dead_code)]
    pub fn show_config(env: &Env) -> Result<Config, ContractError> {
        utils::get_config(env)
    }
}
