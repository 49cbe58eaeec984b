//! Execution engine: authorization checks and call forwarding.
//!
//! The engine owns no state. The caller persists the `Executed` status
//! before [`forward`] runs; a failure in the forwarded call fails the whole
//! invocation, so the host discards that write together with everything
//! else the attempt did.

use soroban_sdk::{
    panic_with_error, token, Address, Env, Error, IntoVal, Symbol, Val, Vec,
};

use crate::errors::MultisigError;
use crate::storage;
use crate::types::{Proposal, PAY_SELECTOR};

/// AND of all required roles: every one must be confirmed on `id`.
pub fn quorum_met(env: &Env, id: u64, required: &Vec<Symbol>) -> bool {
    required
        .iter()
        .all(|role| storage::is_confirmed(env, id, &role))
}

pub fn require_executor(
    env: &Env,
    caller: &Address,
    executor_role: &Option<Symbol>,
) -> Result<(), MultisigError> {
    let allowed = match executor_role {
        Some(role) => storage::has_role(env, role, caller),
        None => storage::is_party(env, caller),
    };
    if !allowed {
        return Err(MultisigError::NotExecutor);
    }
    Ok(())
}

/// Whether `target` resolves to deployed contract code that can be invoked.
/// Accounts and addresses with nothing deployed behind them cannot.
pub fn is_invocable(target: &Address) -> bool {
    if is_account(target) {
        return false;
    }
    target.executable().is_some()
}

fn is_account(address: &Address) -> bool {
    let strkey = address.to_string();
    let mut buf = [0u8; 56];
    if strkey.len() as usize != buf.len() {
        return false;
    }
    strkey.copy_into_slice(&mut buf);
    buf[0] == b'G'
}

/// A `pay` call to something that cannot be invoked only moves value.
pub fn is_value_transfer(function: &Symbol, target: &Address) -> bool {
    *function == PAY_SELECTOR && !is_invocable(target)
}

/// Moves the attached value in `native_asset` and invokes the target.
///
/// Errors raised by the callee (or by the host while dispatching to it) are
/// re-raised unchanged.
pub fn forward(env: &Env, native_asset: &Address, proposal: &Proposal) -> Val {
    if proposal.value > 0 {
        token::Client::new(env, native_asset).transfer(
            &env.current_contract_address(),
            &proposal.target,
            &proposal.value,
        );
    }

    if is_value_transfer(&proposal.function, &proposal.target) {
        if !proposal.args.is_empty() {
            panic_with_error!(env, MultisigError::InvalidData);
        }
        return ().into_val(env);
    }

    match env.try_invoke_contract::<Val, Error>(
        &proposal.target,
        &proposal.function,
        proposal.args.clone(),
    ) {
        Ok(Ok(result)) => result,
        Ok(Err(err)) => panic_with_error!(env, Error::from(err)),
        Err(Ok(err)) => panic_with_error!(env, err),
        Err(Err(err)) => panic_with_error!(env, Error::from(err)),
    }
}
