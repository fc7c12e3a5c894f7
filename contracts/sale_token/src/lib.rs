#![no_std]

mod events;

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, Address, Env, String,
};

contractmeta!(
    key = "Description",
    val = "Fixed-supply token with owner-only burn"
);

/// Token units carry 18 decimal places.
pub const DECIMALS: u32 = 18;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InsufficientBalance = 5,
    InsufficientAllowance = 6,
}

#[derive(Clone)]
#[contracttype]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[derive(Clone)]
#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
pub enum DataKey {
    Metadata,
    Owner,
    TotalSupply,
    Balance(Address),
    Allowance(Address, Address),
}

fn read_owner(env: &Env) -> Result<Address, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(TokenError::NotInitialized)
}

fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(id.clone()), &amount);
}

fn read_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    let value: Option<AllowanceValue> = env
        .storage()
        .persistent()
        .get(&DataKey::Allowance(from.clone(), spender.clone()));
    match value {
        Some(v) if v.expiration_ledger >= env.ledger().sequence() => v.amount,
        _ => 0,
    }
}

fn write_allowance(env: &Env, from: &Address, spender: &Address, value: &AllowanceValue) {
    env.storage()
        .persistent()
        .set(&DataKey::Allowance(from.clone(), spender.clone()), value);
}

fn check_amount(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    let from_balance = read_balance(env, from);
    if from_balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    write_balance(env, from, from_balance - amount);
    let to_balance = read_balance(env, to);
    write_balance(env, to, to_balance + amount);
    Ok(())
}

#[contract]
pub struct SaleToken;

#[contractimpl]
impl SaleToken {
    /// Mints the whole fixed supply to `owner`. Callable once.
    pub fn initialize(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        total_supply: i128,
    ) -> Result<(), TokenError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(TokenError::AlreadyInitialized);
        }
        owner.require_auth();
        if total_supply <= 0 {
            return Err(TokenError::InvalidAmount);
        }

        let metadata = TokenMetadata {
            decimal: DECIMALS,
            name,
            symbol,
        };
        env.storage().instance().set(&DataKey::Metadata, &metadata);
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &total_supply);
        write_balance(&env, &owner, total_supply);

        events::minted(&env, &owner, total_supply);
        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, TokenError> {
        read_owner(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Ok(Self::metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Ok(Self::metadata(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Ok(Self::metadata(&env)?.decimal)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        from.require_auth();
        check_amount(amount)?;
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            return Err(TokenError::InvalidAmount);
        }

        let value = AllowanceValue {
            amount,
            expiration_ledger,
        };
        write_allowance(&env, &from, &spender, &value);
        events::approved(&env, &from, &spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        check_amount(amount)?;
        move_balance(&env, &from, &to, amount)?;
        events::transferred(&env, &from, &to, amount);
        Ok(())
    }

    /// Moves `amount` out of `from` on behalf of `spender`, consuming allowance.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        check_amount(amount)?;

        let allowance = read_allowance(&env, &from, &spender);
        if allowance < amount {
            return Err(TokenError::InsufficientAllowance);
        }
        move_balance(&env, &from, &to, amount)?;

        // expiration is carried over unchanged
        let key = DataKey::Allowance(from.clone(), spender.clone());
        let stored: Option<AllowanceValue> = env.storage().persistent().get(&key);
        if let Some(mut value) = stored {
            value.amount = allowance - amount;
            write_allowance(&env, &from, &spender, &value);
        }

        events::transferred(&env, &from, &to, amount);
        Ok(())
    }

    /// Owner-only burn: reduces the owner balance and the total supply by the same amount.
    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        let owner = read_owner(&env)?;
        if from != owner {
            return Err(TokenError::Unauthorized);
        }
        check_amount(amount)?;

        let balance = read_balance(&env, &owner);
        if balance < amount {
            return Err(TokenError::InsufficientBalance);
        }
        write_balance(&env, &owner, balance - amount);
        let supply = Self::total_supply(env.clone());
        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &(supply - amount));

        events::burned(&env, &owner, amount);
        Ok(())
    }

    fn metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
        env.storage()
            .instance()
            .get(&DataKey::Metadata)
            .ok_or(TokenError::NotInitialized)
    }
}
