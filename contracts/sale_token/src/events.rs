use soroban_sdk::{symbol_short, Address, Env, Symbol};

const MINT: Symbol = symbol_short!("mint");
const TRANSFER: Symbol = symbol_short!("transfer");
const APPROVE: Symbol = symbol_short!("approve");
const BURN: Symbol = symbol_short!("burn");

pub fn minted(env: &Env, to: &Address, amount: i128) {
    env.events().publish((MINT, to.clone()), amount);
}

pub fn transferred(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events()
        .publish((TRANSFER, from.clone(), to.clone()), amount);
}

pub fn approved(env: &Env, from: &Address, spender: &Address, amount: i128, expiration_ledger: u32) {
    env.events().publish(
        (APPROVE, from.clone(), spender.clone()),
        (amount, expiration_ledger),
    );
}

pub fn burned(env: &Env, from: &Address, amount: i128) {
    env.events().publish((BURN, from.clone()), amount);
}
