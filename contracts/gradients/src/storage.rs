use soroban_sdk::{contracttype, Address, String};

use crate::color::Color;

pub type TokenId = u64;
pub type Fingerprint = u32;

/// A minted gradient. Records are append-only; only `owner` changes after
/// the mint, through `transfer`.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct GradientToken {
    pub token_id: TokenId,
    pub color_a: Color,
    pub color_b: Color,
    pub owner: Address,
}

// Enum to represent different data keys in storage
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    IsInitialized,
    TokenCounter,
    Token(TokenId),
    GradientHash(Fingerprint),
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Config {
    pub name: String,
    pub symbol: String,
    pub payment_token: Address,
}

pub mod utils {

    use soroban_sdk::{Address, Env};

    use crate::{
        error::ContractError,
        ttl::{BUMP_AMOUNT, LIFETIME_THRESHOLD},
    };

    use super::{Config, DataKey, Fingerprint, GradientToken, TokenId};

    pub fn save_token(env: &Env, token: &GradientToken) {
        let key = DataKey::Token(token.token_id);
        env.storage().persistent().set(&key, token);
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_token(env: &Env, token_id: TokenId) -> Result<GradientToken, ContractError> {
        let key = DataKey::Token(token_id);
        let token = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(ContractError::UnknownToken)?;

        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);

        Ok(token)
    }

    pub fn save_fingerprint_index(env: &Env, fingerprint: Fingerprint, token_id: TokenId) {
        let key = DataKey::GradientHash(fingerprint);
        env.storage().persistent().set(&key, &token_id);
        env.storage()
            .persistent()
            .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }

    pub fn get_token_id_by_fingerprint(env: &Env, fingerprint: Fingerprint) -> Option<TokenId> {
        let key = DataKey::GradientHash(fingerprint);
        let token_id = env.storage().persistent().get(&key);

        env.storage().persistent().has(&key).then(|| {
            env.storage()
                .persistent()
                .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT)
        });

        token_id
    }

    /// The id the next mint will be assigned; doubles as the number of
    /// tokens minted so far. Counting starts at 0 and never goes back.
    pub fn get_token_counter(env: &Env) -> TokenId {
        env.storage()
            .persistent()
            .get(&DataKey::TokenCounter)
            .unwrap_or(0u64)
    }

    pub fn set_token_counter(env: &Env, next: TokenId) {
        env.storage().persistent().set(&DataKey::TokenCounter, &next);
        env.storage().persistent().extend_ttl(
            &DataKey::TokenCounter,
            LIFETIME_THRESHOLD,
            BUMP_AMOUNT,
        );
    }

    pub fn save_config(env: &Env, config: Config) {
        env.storage().persistent().set(&DataKey::Config, &config);
    }

    pub fn get_config(env: &Env) -> Result<Config, ContractError> {
        let config = env
            .storage()
            .persistent()
            .get(&DataKey::Config)
            .ok_or(ContractError::ConfigNotFound)?;

        Ok(config)
    }

    pub fn save_admin(env: &Env, admin: &Address) {
        env.storage().persistent().set(&DataKey::Admin, &admin);
    }

    pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
        let admin = env
            .storage()
            .persistent()
            .get(&DataKey::Admin)
            .ok_or(ContractError::AdminNotSet)?;

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
