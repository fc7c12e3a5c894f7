use soroban_sdk::{contracttype, Address, Env};

/// Phase boundaries as ledger timestamps, `start_date <= bonus_end_date <= end_date`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleSchedule {
    pub start_date: u64,
    pub bonus_end_date: u64,
    pub end_date: u64,
}

/// Everything `initialize` needs besides the admin.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleParams {
    pub token: Address,
    pub payment_token: Address,
    pub beneficiary: Address,
    pub token_cents: i128, // token units per whole token
    pub token_price: i128, // payment units per whole token
    pub sale_tokens_cents: i128,
    pub schedule: SaleSchedule,
    pub hard_cap_tokens: i128,
    pub minimum_purchase_amount: i128,
    pub bonus_percent: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub admin: Address, // also the holder the allotment is drawn from
    pub token: Address,
    pub payment_token: Address,
    pub beneficiary: Address,
    pub token_cents: i128,
    pub token_price: i128,
    pub sale_tokens_cents: i128,
    pub schedule: SaleSchedule,
    pub hard_cap_tokens: i128,
    pub bonus_percent: u32,
}

#[contracttype]
pub enum DataKey {
    Config,
    MinimumPurchase,
    CurrentCapTokens,
    CurrentCapPayment,
    SentTokens(Address),
    PaidAmount(Address),
    PreSaleTokens(Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
