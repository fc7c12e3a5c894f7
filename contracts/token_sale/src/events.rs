use crate::types::SaleConfig;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

const INIT: Symbol = symbol_short!("init");
const PURCHASE: Symbol = symbol_short!("purchase");
const PRE_SALE: Symbol = symbol_short!("presale");
const MIN_CHANGED: Symbol = symbol_short!("min_chg");

pub fn sale_initialized(env: &Env, config: &SaleConfig, minimum_purchase_amount: i128) {
    env.events().publish(
        (INIT, config.admin.clone()),
        (
            config.token.clone(),
            config.beneficiary.clone(),
            config.sale_tokens_cents,
            config.hard_cap_tokens,
            minimum_purchase_amount,
        ),
    );
}

pub fn purchased(
    env: &Env,
    payer: &Address,
    recipient: &Address,
    amount: i128,
    tokens: i128,
    bonus: bool,
) {
    env.events().publish(
        (PURCHASE, payer.clone(), recipient.clone()),
        (amount, tokens, bonus),
    );
}

pub fn pre_sale_added(env: &Env, participant: &Address, tokens: i128) {
    env.events()
        .publish((PRE_SALE, participant.clone()), tokens);
}

pub fn minimum_changed(env: &Env, old_amount: i128, new_amount: i128) {
    env.events()
        .publish((MIN_CHANGED,), (old_amount, new_amount));
}
