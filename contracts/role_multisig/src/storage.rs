use soroban_sdk::{Address, Env, Symbol, Vec};

use crate::errors::MultisigError;
use crate::types::{Action, DataKey, Proposal, QuorumPolicy};

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const PERSISTENT_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn get_persistent<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        extend_persistent(env, key);
    }
    value
}

fn set_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    extend_persistent(env, key);
}

// Instance configuration

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn require_initialized(env: &Env) -> Result<(), MultisigError> {
    if !is_initialized(env) {
        return Err(MultisigError::NotInitialized);
    }
    extend_instance(env);
    Ok(())
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(MultisigError::NotInitialized)
}

pub fn set_native_asset(env: &Env, asset: &Address) {
    env.storage().instance().set(&DataKey::NativeAsset, asset);
}

pub fn get_native_asset(env: &Env) -> Result<Address, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::NativeAsset)
        .ok_or(MultisigError::NotInitialized)
}

pub fn set_policy(env: &Env, policy: QuorumPolicy) {
    env.storage().instance().set(&DataKey::Policy, &policy);
}

pub fn get_policy(env: &Env) -> Result<QuorumPolicy, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::Policy)
        .ok_or(MultisigError::NotInitialized)
}

pub fn set_parties(env: &Env, parties: &Vec<Address>) {
    env.storage().instance().set(&DataKey::Parties, parties);
}

pub fn get_parties(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Parties)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_roles(env: &Env, roles: &Vec<Symbol>) {
    env.storage().instance().set(&DataKey::Roles, roles);
}

pub fn get_roles(env: &Env) -> Vec<Symbol> {
    env.storage()
        .instance()
        .get(&DataKey::Roles)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u64)
}

/// Bumps the counter and returns the new id; the first proposal gets 1.
pub fn next_proposal_id(env: &Env) -> u64 {
    let id = get_proposal_count(env) + 1;
    env.storage().instance().set(&DataKey::ProposalCount, &id);
    id
}

// Registry

pub fn set_party(env: &Env, address: &Address) {
    set_persistent(env, &DataKey::Party(address.clone()), &true);
}

pub fn is_party(env: &Env, address: &Address) -> bool {
    get_persistent(env, &DataKey::Party(address.clone())).unwrap_or(false)
}

pub fn grant_role(env: &Env, role: &Symbol, address: &Address) {
    set_persistent(
        env,
        &DataKey::RoleMember(role.clone(), address.clone()),
        &true,
    );
}

pub fn has_role(env: &Env, role: &Symbol, address: &Address) -> bool {
    get_persistent(env, &DataKey::RoleMember(role.clone(), address.clone())).unwrap_or(false)
}

// Rule tables

pub fn set_approval_rule(env: &Env, action: &Action, roles: &Vec<Symbol>) {
    set_persistent(env, &DataKey::ApprovalRule(action.clone()), roles);
}

pub fn get_approval_rule(env: &Env, action: &Action) -> Option<Vec<Symbol>> {
    get_persistent(env, &DataKey::ApprovalRule(action.clone()))
}

pub fn set_executor_rule(env: &Env, action: &Action, role: &Symbol) {
    set_persistent(env, &DataKey::ExecutorRule(action.clone()), role);
}

pub fn get_executor_rule(env: &Env, action: &Action) -> Option<Symbol> {
    get_persistent(env, &DataKey::ExecutorRule(action.clone()))
}

// Proposals

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    set_persistent(env, &DataKey::Proposal(proposal.id), proposal);
}

pub fn get_proposal(env: &Env, id: u64) -> Option<Proposal> {
    get_persistent(env, &DataKey::Proposal(id))
}

pub fn set_confirmation(env: &Env, id: u64, role: &Symbol) {
    set_persistent(env, &DataKey::Confirmation(id, role.clone()), &true);
}

pub fn clear_confirmation(env: &Env, id: u64, role: &Symbol) {
    env.storage()
        .persistent()
        .remove(&DataKey::Confirmation(id, role.clone()));
}

pub fn is_confirmed(env: &Env, id: u64, role: &Symbol) -> bool {
    get_persistent(env, &DataKey::Confirmation(id, role.clone())).unwrap_or(false)
}
