//! Approval and executor rule tables.
//!
//! Both tables are keyed by [`Action`]. Reconfiguring a key overwrites the
//! previous rule, and lookups happen on every confirm, revoke and execute, so
//! a change applies to proposals that are still pending.

use soroban_sdk::{Env, Symbol, Vec};

use crate::errors::MultisigError;
use crate::registry;
use crate::storage;
use crate::types::{Action, QuorumPolicy};

/// Decides who has to confirm an action and who may execute it.
pub trait RequirementResolver {
    /// Roles that must all confirm before the action can execute.
    fn required_roles(&self, env: &Env, action: &Action) -> Result<Vec<Symbol>, MultisigError>;

    /// The only role allowed to execute the action. `None` means any party.
    fn executor_role(&self, env: &Env, action: &Action) -> Result<Option<Symbol>, MultisigError>;
}

/// Resolver backed by the stored rule tables, with the configured fallback
/// for actions that have no rule.
pub struct RuleTable {
    policy: QuorumPolicy,
}

impl RuleTable {
    pub fn new(policy: QuorumPolicy) -> Self {
        Self { policy }
    }

    pub fn load(env: &Env) -> Result<Self, MultisigError> {
        Ok(Self::new(storage::get_policy(env)?))
    }
}

impl RequirementResolver for RuleTable {
    fn required_roles(&self, env: &Env, action: &Action) -> Result<Vec<Symbol>, MultisigError> {
        if let Some(roles) = storage::get_approval_rule(env, action) {
            return Ok(roles);
        }
        match self.policy {
            QuorumPolicy::AllRoles => Ok(storage::get_roles(env)),
            QuorumPolicy::RuleTable => Err(MultisigError::RuleNotFound),
        }
    }

    fn executor_role(&self, env: &Env, action: &Action) -> Result<Option<Symbol>, MultisigError> {
        if let Some(role) = storage::get_executor_rule(env, action) {
            return Ok(Some(role));
        }
        match self.policy {
            QuorumPolicy::AllRoles => Ok(None),
            QuorumPolicy::RuleTable => Err(MultisigError::NotExecutor),
        }
    }
}

/// Validates and stores an approval rule. Duplicate roles are collapsed.
pub fn add_rule(env: &Env, action: &Action, roles: &Vec<Symbol>) -> Result<Vec<Symbol>, MultisigError> {
    if roles.is_empty() {
        return Err(MultisigError::EmptyRoleSet);
    }

    let mut required: Vec<Symbol> = Vec::new(env);
    for role in roles.iter() {
        if !registry::is_known_role(env, &role) {
            return Err(MultisigError::InvalidRole);
        }
        if !required.contains(&role) {
            required.push_back(role);
        }
    }

    storage::set_approval_rule(env, action, &required);
    Ok(required)
}

pub fn add_executor(env: &Env, action: &Action, role: &Symbol) -> Result<(), MultisigError> {
    if !registry::is_known_role(env, role) {
        return Err(MultisigError::InvalidRole);
    }
    storage::set_executor_rule(env, action, role);
    Ok(())
}
