#![no_std]

//! Role-based multi-party authorization contract.
//!
//! Parties hold roles. A proposal forwards one call (target, function,
//! arguments, value) and executes only once every role its approval rule
//! names has confirmed, and only when triggered by the action's executor
//! role.

mod engine;
mod errors;
mod events;
mod multisig;
mod registry;
mod rules;
mod storage;
pub mod types;

pub use crate::errors::MultisigError;
pub use crate::multisig::{RoleMultisig, RoleMultisigClient};
pub use crate::rules::{RequirementResolver, RuleTable};
