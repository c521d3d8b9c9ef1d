//! Governance-token movements between the owner and this account.
//!
//! Allowance and balance failures are raised by the token contract itself and
//! abort the calling operation unchanged.

use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

/// Pull `amount` from `owner` into this contract. Requires a prior `approve`.
pub fn transfer_into_contract(e: &Env, token: &Address, owner: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let contract = e.current_contract_address();
    TokenClient::new(e, token).transfer_from(&contract, owner, &contract, &amount);
}

pub fn transfer_from_contract(e: &Env, token: &Address, recipient: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let contract = e.current_contract_address();
    TokenClient::new(e, token).transfer(&contract, recipient, &amount);
}
