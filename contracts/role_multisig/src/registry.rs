//! Party/role registry: validated once at initialization, read-only afterwards.

use soroban_sdk::{Address, Env, String, Symbol, Vec};

use crate::errors::MultisigError;
use crate::storage;
use crate::types::{Party, ADMIN_ROLE};

/// Strkeys of the all-zero account and contract addresses.
const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    let zero_account = Address::from_string(&String::from_str(env, ZERO_ACCOUNT));
    let zero_contract = Address::from_string(&String::from_str(env, ZERO_CONTRACT));
    *address == zero_account || *address == zero_contract
}

/// Checks the party list and returns the distinct functional roles in
/// first-seen order. Nothing is written.
pub fn validate_parties(
    env: &Env,
    admin: &Address,
    parties: &Vec<Party>,
) -> Result<Vec<Symbol>, MultisigError> {
    if parties.is_empty() {
        return Err(MultisigError::EmptyPartyList);
    }

    if is_zero_address(env, admin) {
        return Err(MultisigError::InvalidPartyAddress);
    }

    let mut roles: Vec<Symbol> = Vec::new(env);
    for i in 0..parties.len() {
        let party = parties.get_unchecked(i);

        if is_zero_address(env, &party.address) {
            return Err(MultisigError::InvalidPartyAddress);
        }

        for j in (i + 1)..parties.len() {
            if parties.get_unchecked(j).address == party.address {
                return Err(MultisigError::PartyNotUnique);
            }
        }

        if party.role == ADMIN_ROLE {
            return Err(MultisigError::InvalidRole);
        }

        if !roles.contains(&party.role) {
            roles.push_back(party.role);
        }
    }

    Ok(roles)
}

/// Writes the registry. `parties` must have passed [`validate_parties`].
pub fn record(env: &Env, admin: &Address, parties: &Vec<Party>, roles: &Vec<Symbol>) {
    let mut addresses: Vec<Address> = Vec::new(env);
    for party in parties.iter() {
        storage::set_party(env, &party.address);
        storage::grant_role(env, &party.role, &party.address);
        addresses.push_back(party.address);
    }

    storage::grant_role(env, &ADMIN_ROLE, admin);
    storage::set_admin(env, admin);
    storage::set_parties(env, &addresses);
    storage::set_roles(env, roles);
}

pub fn require_party(env: &Env, caller: &Address) -> Result<(), MultisigError> {
    if !storage::is_party(env, caller) {
        return Err(MultisigError::NotParty);
    }
    Ok(())
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), MultisigError> {
    if !storage::has_role(env, &ADMIN_ROLE, caller) {
        return Err(MultisigError::NotAdmin);
    }
    Ok(())
}

/// True for roles held by at least one party. `ADMIN` is never included.
pub fn is_known_role(env: &Env, role: &Symbol) -> bool {
    storage::get_roles(env).contains(role)
}
