use crate::errors::SaleError;
use crate::events;
use crate::phase::{self, Phase};
use crate::pricing;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Time-boxed token sale with bonus window and pre-sale crediting"
);

#[contract]
pub struct TokenSaleContract;

fn current_phase(env: &Env, config: &SaleConfig) -> Phase {
    Phase::evaluate(
        get_ledger_timestamp(env),
        &config.schedule,
        get_current_cap_tokens(env),
        config.hard_cap_tokens,
    )
}

fn require_admin(config: &SaleConfig, caller: &Address) -> Result<(), SaleError> {
    caller.require_auth();
    if *caller != config.admin {
        return Err(SaleError::Unauthorized);
    }
    Ok(())
}

fn validate_params(params: &SaleParams) -> Result<(), SaleError> {
    let schedule = &params.schedule;
    if params.token_cents <= 0
        || params.token_price <= 0
        || params.sale_tokens_cents <= 0
        || params.hard_cap_tokens <= 0
        || params.minimum_purchase_amount < 0
        || schedule.start_date > schedule.bonus_end_date
        || schedule.bonus_end_date > schedule.end_date
    {
        return Err(SaleError::InvalidConfig);
    }
    Ok(())
}

/// New `current_cap_tokens` after crediting `tokens`, bounded by the allotment.
fn reserve_allotment(config: &SaleConfig, current: i128, tokens: i128) -> Result<i128, SaleError> {
    let next = current
        .checked_add(tokens)
        .ok_or(SaleError::ArithmeticOverflow)?;
    if next > config.sale_tokens_cents {
        return Err(SaleError::LedgerTransferFailed);
    }
    Ok(next)
}

fn deliver_tokens(
    env: &Env,
    config: &SaleConfig,
    recipient: &Address,
    tokens: i128,
) -> Result<(), SaleError> {
    let token_client = token::Client::new(env, &config.token);
    match token_client.try_transfer_from(
        &env.current_contract_address(),
        &config.admin,
        recipient,
        &tokens,
    ) {
        Ok(Ok(())) => Ok(()),
        _ => Err(SaleError::LedgerTransferFailed),
    }
}

fn collect_payment(
    env: &Env,
    config: &SaleConfig,
    payer: &Address,
    amount: i128,
) -> Result<(), SaleError> {
    let payment_client = token::Client::new(env, &config.payment_token);
    match payment_client.try_transfer(payer, &config.beneficiary, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(SaleError::PaymentFailed),
    }
}

fn credit_tokens(env: &Env, participant: &Address, tokens: i128) -> Result<(), SaleError> {
    let sent = get_sent_tokens(env, participant)
        .checked_add(tokens)
        .ok_or(SaleError::ArithmeticOverflow)?;
    set_sent_tokens(env, participant, sent);
    Ok(())
}

/// Time window and minimum checks shared by every payment path, yielding the units to credit.
/// The hard cap is not checked here; the allotment bound in `reserve_allotment` is the ceiling.
fn price_purchase(
    env: &Env,
    config: &SaleConfig,
    amount: i128,
) -> Result<(i128, Phase), SaleError> {
    let phase = Phase::window(get_ledger_timestamp(env), &config.schedule);
    if !phase.is_open() {
        return Err(SaleError::SaleNotActive);
    }
    // the minimum is never negative, so this also rejects negative amounts
    if amount < get_minimum_purchase(env) {
        return Err(SaleError::BelowMinimumPurchase);
    }
    let tokens = pricing::tokens_for_payment(amount, config, phase)
        .ok_or(SaleError::ArithmeticOverflow)?;
    Ok((tokens, phase))
}

fn buy(env: &Env, payer: Address, recipient: Address, amount: i128) -> Result<i128, SaleError> {
    payer.require_auth();
    let config = get_config(env)?;

    let (tokens, phase) = price_purchase(env, &config, amount)?;
    let cap_tokens = reserve_allotment(&config, get_current_cap_tokens(env), tokens)?;
    let cap_payment = get_current_cap_payment(env)
        .checked_add(amount)
        .ok_or(SaleError::ArithmeticOverflow)?;
    let paid = get_paid_amount(env, &payer)
        .checked_add(amount)
        .ok_or(SaleError::ArithmeticOverflow)?;

    collect_payment(env, &config, &payer, amount)?;
    deliver_tokens(env, &config, &recipient, tokens)?;

    credit_tokens(env, &recipient, tokens)?;
    set_paid_amount(env, &payer, paid);
    set_current_cap_tokens(env, cap_tokens);
    set_current_cap_payment(env, cap_payment);

    events::purchased(env, &payer, &recipient, amount, tokens, phase.has_bonus());
    Ok(tokens)
}

#[contractimpl]
impl TokenSaleContract {
    /// Initialize the token sale. The admin must separately approve this
    /// contract on the token for at least `sale_tokens_cents`.
    pub fn initialize(env: Env, admin: Address, params: SaleParams) -> Result<(), SaleError> {
        if has_config(&env) {
            return Err(SaleError::AlreadyInitialized);
        }
        admin.require_auth();
        validate_params(&params)?;

        let config = SaleConfig {
            admin,
            token: params.token,
            payment_token: params.payment_token,
            beneficiary: params.beneficiary,
            token_cents: params.token_cents,
            token_price: params.token_price,
            sale_tokens_cents: params.sale_tokens_cents,
            schedule: params.schedule,
            hard_cap_tokens: params.hard_cap_tokens,
            bonus_percent: params.bonus_percent,
        };

        set_config(&env, &config);
        set_minimum_purchase(&env, params.minimum_purchase_amount);
        set_current_cap_tokens(&env, 0);
        set_current_cap_payment(&env, 0);

        events::sale_initialized(&env, &config, params.minimum_purchase_amount);
        Ok(())
    }

    /// Buy tokens for the payer. Returns the token units credited.
    pub fn purchase(env: Env, payer: Address, amount: i128) -> Result<i128, SaleError> {
        buy(&env, payer.clone(), payer, amount)
    }

    /// Buy tokens on behalf of `recipient`; the payment is recorded against `payer`.
    pub fn purchase_for(
        env: Env,
        payer: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<i128, SaleError> {
        buy(&env, payer, recipient, amount)
    }

    /// Default payment path, same as `purchase`.
    pub fn receive(env: Env, payer: Address, amount: i128) -> Result<i128, SaleError> {
        buy(&env, payer.clone(), payer, amount)
    }

    /// Record tokens bought outside the contract. Admin only, allowed at any time.
    pub fn add_pre_sale_purchase_tokens(
        env: Env,
        caller: Address,
        participant: Address,
        tokens: i128,
    ) -> Result<(), SaleError> {
        let config = get_config(&env)?;
        require_admin(&config, &caller)?;
        if tokens <= 0 {
            return Err(SaleError::InvalidAmount);
        }

        let cap_tokens = reserve_allotment(&config, get_current_cap_tokens(&env), tokens)?;
        let pre_sale = get_pre_sale_tokens(&env, &participant)
            .checked_add(tokens)
            .ok_or(SaleError::ArithmeticOverflow)?;

        deliver_tokens(&env, &config, &participant, tokens)?;

        credit_tokens(&env, &participant, tokens)?;
        set_pre_sale_tokens(&env, &participant, pre_sale);
        set_current_cap_tokens(&env, cap_tokens);

        events::pre_sale_added(&env, &participant, tokens);
        Ok(())
    }

    /// Set the smallest accepted payment. Admin only.
    pub fn change_minimum_purchase_amount(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), SaleError> {
        let config = get_config(&env)?;
        require_admin(&config, &caller)?;
        if amount < 0 {
            return Err(SaleError::InvalidAmount);
        }

        let old_amount = get_minimum_purchase(&env);
        set_minimum_purchase(&env, amount);
        events::minimum_changed(&env, old_amount, amount);
        Ok(())
    }

    // View functions
    /// Full immutable sale configuration.
    pub fn get_config(env: Env) -> Result<SaleConfig, SaleError> {
        get_config(&env)
    }

    /// Administrator, also the holder the allotment is drawn from.
    pub fn admin(env: Env) -> Result<Address, SaleError> {
        Ok(get_config(&env)?.admin)
    }

    /// Token being sold.
    pub fn token(env: Env) -> Result<Address, SaleError> {
        Ok(get_config(&env)?.token)
    }

    /// Address receiving collected payments.
    pub fn beneficiary(env: Env) -> Result<Address, SaleError> {
        Ok(get_config(&env)?.beneficiary)
    }

    /// Price of one whole token in payment units.
    pub fn token_price(env: Env) -> Result<i128, SaleError> {
        Ok(get_config(&env)?.token_price)
    }

    /// Token units per whole token.
    pub fn token_cents(env: Env) -> Result<i128, SaleError> {
        Ok(get_config(&env)?.token_cents)
    }

    /// Token units the sale may distribute in total.
    pub fn sale_tokens_cents(env: Env) -> Result<i128, SaleError> {
        Ok(get_config(&env)?.sale_tokens_cents)
    }

    /// Token units after which the sale reports itself finished.
    pub fn hard_cap_tokens(env: Env) -> Result<i128, SaleError> {
        Ok(get_config(&env)?.hard_cap_tokens)
    }

    /// Bonus applied during the bonus window.
    pub fn bonus_percent(env: Env) -> Result<u32, SaleError> {
        Ok(get_config(&env)?.bonus_percent)
    }

    /// First timestamp accepting purchases.
    pub fn start_date(env: Env) -> Result<u64, SaleError> {
        Ok(get_config(&env)?.schedule.start_date)
    }

    /// First timestamp without the bonus.
    pub fn bonus_end_date(env: Env) -> Result<u64, SaleError> {
        Ok(get_config(&env)?.schedule.bonus_end_date)
    }

    /// First timestamp no longer accepting purchases.
    pub fn end_date(env: Env) -> Result<u64, SaleError> {
        Ok(get_config(&env)?.schedule.end_date)
    }

    /// Current minimum payment per purchase.
    pub fn minimum_purchase_amount(env: Env) -> i128 {
        get_minimum_purchase(&env)
    }

    /// Token units credited to `participant`, pre-sale included.
    pub fn sent_tokens(env: Env, participant: Address) -> i128 {
        get_sent_tokens(&env, &participant)
    }

    /// Payment received from `payer`.
    pub fn paid_amount(env: Env, payer: Address) -> i128 {
        get_paid_amount(&env, &payer)
    }

    /// Token units credited to `participant` by pre-sale entries.
    pub fn pre_sale_participant_tokens(env: Env, participant: Address) -> i128 {
        get_pre_sale_tokens(&env, &participant)
    }

    /// Token units credited so far across all participants.
    pub fn current_cap_tokens(env: Env) -> i128 {
        get_current_cap_tokens(&env)
    }

    /// Payment collected so far across all payers.
    pub fn current_cap_payment(env: Env) -> i128 {
        get_current_cap_payment(&env)
    }

    /// Current phase, hard cap included.
    pub fn phase(env: Env) -> Result<Phase, SaleError> {
        let config = get_config(&env)?;
        Ok(current_phase(&env, &config))
    }

    /// Whether the end date has passed.
    pub fn is_finish_date_reached(env: Env) -> Result<bool, SaleError> {
        let config = get_config(&env)?;
        Ok(phase::is_finish_date_reached(
            get_ledger_timestamp(&env),
            &config.schedule,
        ))
    }

    /// Whether credited units reached the hard cap.
    pub fn is_hard_cap_tokens_reached(env: Env) -> Result<bool, SaleError> {
        let config = get_config(&env)?;
        Ok(phase::is_hard_cap_reached(
            get_current_cap_tokens(&env),
            config.hard_cap_tokens,
        ))
    }

    /// Whether the end date passed or the hard cap was reached.
    pub fn is_sale_finished(env: Env) -> Result<bool, SaleError> {
        Ok(Self::phase(env)? == Phase::Finished)
    }

    /// Token units a purchase of `amount` would credit right now.
    pub fn quote(env: Env, amount: i128) -> Result<i128, SaleError> {
        let config = get_config(&env)?;
        let (tokens, _) = price_purchase(&env, &config, amount)?;
        Ok(tokens)
    }
}
