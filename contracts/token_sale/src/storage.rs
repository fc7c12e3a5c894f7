use crate::errors::SaleError;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_minimum_purchase(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::MinimumPurchase)
        .unwrap_or(0)
}

pub fn set_minimum_purchase(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::MinimumPurchase, &amount);
}

pub fn get_current_cap_tokens(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::CurrentCapTokens)
        .unwrap_or(0)
}

pub fn set_current_cap_tokens(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::CurrentCapTokens, &amount);
}

pub fn get_current_cap_payment(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::CurrentCapPayment)
        .unwrap_or(0)
}

pub fn set_current_cap_payment(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::CurrentCapPayment, &amount);
}

pub fn get_sent_tokens(env: &Env, participant: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::SentTokens(participant.clone()))
        .unwrap_or(0)
}

pub fn set_sent_tokens(env: &Env, participant: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::SentTokens(participant.clone()), &amount);
}

pub fn get_paid_amount(env: &Env, payer: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::PaidAmount(payer.clone()))
        .unwrap_or(0)
}

pub fn set_paid_amount(env: &Env, payer: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::PaidAmount(payer.clone()), &amount);
}

pub fn get_pre_sale_tokens(env: &Env, participant: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::PreSaleTokens(participant.clone()))
        .unwrap_or(0)
}

pub fn set_pre_sale_tokens(env: &Env, participant: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::PreSaleTokens(participant.clone()), &amount);
}
