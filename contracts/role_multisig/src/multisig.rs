use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Symbol, Val, Vec};

use crate::engine;
use crate::errors::MultisigError;
use crate::events::{
    ConfirmationRevoked, ExecutorAdded, Funded, PartiesConfigured, ProposalConfirmed,
    ProposalExecuted, ProposalSubmitted, RuleAdded,
};
use crate::registry;
use crate::rules::{self, RequirementResolver, RuleTable};
use crate::storage;
use crate::types::{Action, Party, Proposal, ProposalStatus, QuorumPolicy};

#[contract]
pub struct RoleMultisig;

#[contractimpl]
impl RoleMultisig {
    /// Sets up the fixed party set.
    ///
    /// `admin` receives the reserved `ADMIN` role and is the only address
    /// allowed to configure rules. `native_asset` is the token contract whose
    /// balance a proposal's `value` draws from.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If called a second time
    /// * `EmptyPartyList` - If `parties` is empty
    /// * `InvalidPartyAddress` - If the admin or any party is a zero address
    /// * `PartyNotUnique` - If two parties share an address
    /// * `InvalidRole` - If a party is listed with the `ADMIN` role
    pub fn initialize(
        env: Env,
        admin: Address,
        parties: Vec<Party>,
        native_asset: Address,
        policy: QuorumPolicy,
    ) -> Result<(), MultisigError> {
        if storage::is_initialized(&env) {
            return Err(MultisigError::AlreadyInitialized);
        }
        admin.require_auth();

        let roles = registry::validate_parties(&env, &admin, &parties)?;
        registry::record(&env, &admin, &parties, &roles);

        storage::set_native_asset(&env, &native_asset);
        storage::set_policy(&env, policy);
        storage::set_initialized(&env);
        storage::extend_instance(&env);

        log!(&env, "multisig initialized: parties={}", parties.len());
        PartiesConfigured {
            admin,
            parties: storage::get_parties(&env),
            roles,
        }
        .publish(&env);

        Ok(())
    }

    /// Sets the roles that must all confirm calls to `selector` on `target`.
    /// Replaces any earlier rule for the same pair, including for proposals
    /// that are still pending.
    pub fn add_rule(
        env: Env,
        caller: Address,
        target: Address,
        selector: Symbol,
        roles: Vec<Symbol>,
    ) -> Result<(), MultisigError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        registry::require_admin(&env, &caller)?;

        let action = Action { target, selector };
        let roles = rules::add_rule(&env, &action, &roles)?;

        RuleAdded {
            target: action.target,
            selector: action.selector,
            roles,
        }
        .publish(&env);
        Ok(())
    }

    /// Sets the single role allowed to execute calls to `selector` on `target`.
    pub fn add_executor(
        env: Env,
        caller: Address,
        target: Address,
        selector: Symbol,
        role: Symbol,
    ) -> Result<(), MultisigError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        registry::require_admin(&env, &caller)?;

        let action = Action { target, selector };
        rules::add_executor(&env, &action, &role)?;

        ExecutorAdded {
            target: action.target,
            selector: action.selector,
            role,
        }
        .publish(&env);
        Ok(())
    }

    /// Records a call to forward once approved and returns its id.
    ///
    /// # Errors
    /// * `NotParty` - If `caller` is not a registered party
    /// * `InvalidData` - If `function` is empty, or a bare value transfer
    ///   carries arguments
    /// * `InvalidValue` - If `value` is negative
    /// * `RuleNotFound` - If the policy demands an approval rule and none is set
    pub fn submit_proposal(
        env: Env,
        caller: Address,
        target: Address,
        function: Symbol,
        args: Vec<Val>,
        value: i128,
    ) -> Result<u64, MultisigError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        registry::require_party(&env, &caller)?;

        if function == Symbol::new(&env, "") {
            return Err(MultisigError::InvalidData);
        }
        if value < 0 {
            return Err(MultisigError::InvalidValue);
        }
        if engine::is_value_transfer(&function, &target) && !args.is_empty() {
            return Err(MultisigError::InvalidData);
        }

        let action = Action {
            target: target.clone(),
            selector: function.clone(),
        };
        RuleTable::load(&env)?.required_roles(&env, &action)?;

        let id = storage::next_proposal_id(&env);
        let proposal = Proposal {
            id,
            target,
            function,
            args,
            value,
            submitter: caller,
            status: ProposalStatus::Pending,
            submitted_at: env.ledger().timestamp(),
            executed_at: None,
        };
        storage::set_proposal(&env, &proposal);

        log!(&env, "proposal submitted: id={}", id);
        ProposalSubmitted {
            id,
            submitter: proposal.submitter,
            target: proposal.target,
            function: proposal.function,
            value,
        }
        .publish(&env);

        Ok(id)
    }

    /// Confirms `proposal_id` on behalf of `role`, which `caller` must hold.
    ///
    /// # Errors
    /// * `NotParty` - If `caller` is not a registered party
    /// * `ProposalDoesNotExist` / `ProposalAlreadyExecuted`
    /// * `InvalidRole` - If `role` is not required for this proposal's action
    /// * `MissingRole` - If `caller` does not hold `role`
    /// * `TransactionAlreadyConfirmed` - If `role` already confirmed
    pub fn confirm_proposal(
        env: Env,
        caller: Address,
        proposal_id: u64,
        role: Symbol,
    ) -> Result<(), MultisigError> {
        Self::check_confirmer(&env, &caller, proposal_id, &role)?;

        if storage::is_confirmed(&env, proposal_id, &role) {
            return Err(MultisigError::TransactionAlreadyConfirmed);
        }
        storage::set_confirmation(&env, proposal_id, &role);

        log!(&env, "proposal confirmed: id={} role={}", proposal_id, role);
        ProposalConfirmed {
            id: proposal_id,
            role,
            party: caller,
        }
        .publish(&env);
        Ok(())
    }

    /// Withdraws the confirmation `role` gave to `proposal_id`.
    pub fn revoke_confirmation(
        env: Env,
        caller: Address,
        proposal_id: u64,
        role: Symbol,
    ) -> Result<(), MultisigError> {
        Self::check_confirmer(&env, &caller, proposal_id, &role)?;

        if !storage::is_confirmed(&env, proposal_id, &role) {
            return Err(MultisigError::TransactionNotConfirmed);
        }
        storage::clear_confirmation(&env, proposal_id, &role);

        log!(&env, "confirmation revoked: id={} role={}", proposal_id, role);
        ConfirmationRevoked {
            id: proposal_id,
            role,
            party: caller,
        }
        .publish(&env);
        Ok(())
    }

    /// Forwards an approved proposal and returns the callee's result.
    ///
    /// The proposal is stored as `Executed` before the call goes out. If the
    /// call fails, its error is raised unchanged and the proposal stays
    /// `Pending`.
    ///
    /// # Errors
    /// * `ProposalDoesNotExist` / `ProposalAlreadyExecuted`
    /// * `NotExecutor` - If `caller` lacks the executor role for the action
    /// * `NotEnoughConfirmations` - If any required role has not confirmed
    pub fn execute_proposal(
        env: Env,
        caller: Address,
        proposal_id: u64,
    ) -> Result<Val, MultisigError> {
        storage::require_initialized(&env)?;
        caller.require_auth();

        let mut proposal = Self::load_pending(&env, proposal_id)?;
        let action = proposal.action();
        let resolver = RuleTable::load(&env)?;

        let executor_role = resolver.executor_role(&env, &action)?;
        engine::require_executor(&env, &caller, &executor_role)?;

        let required = resolver.required_roles(&env, &action)?;
        if !engine::quorum_met(&env, proposal_id, &required) {
            return Err(MultisigError::NotEnoughConfirmations);
        }

        let native_asset = storage::get_native_asset(&env)?;

        proposal.status = ProposalStatus::Executed;
        proposal.executed_at = Some(env.ledger().timestamp());
        storage::set_proposal(&env, &proposal);

        let result = engine::forward(&env, &native_asset, &proposal);

        log!(&env, "proposal executed: id={}", proposal_id);
        ProposalExecuted {
            id: proposal_id,
            executor: caller,
        }
        .publish(&env);

        Ok(result)
    }

    /// Pulls `amount` of the native asset from `from` into the contract.
    /// Plain token transfers to the contract address work as well.
    pub fn fund(env: Env, from: Address, amount: i128) -> Result<(), MultisigError> {
        storage::require_initialized(&env)?;
        from.require_auth();

        if amount <= 0 {
            return Err(MultisigError::InvalidValue);
        }

        let native_asset = storage::get_native_asset(&env)?;
        token::Client::new(&env, &native_asset).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );

        Funded { from, amount }.publish(&env);
        Ok(())
    }

    pub fn is_party(env: Env, address: Address) -> Result<bool, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(storage::is_party(&env, &address))
    }

    pub fn has_role(env: Env, role: Symbol, address: Address) -> Result<bool, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(storage::has_role(&env, &role, &address))
    }

    pub fn parties(env: Env) -> Result<Vec<Address>, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(storage::get_parties(&env))
    }

    pub fn roles(env: Env) -> Result<Vec<Symbol>, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(storage::get_roles(&env))
    }

    pub fn admin(env: Env) -> Result<Address, MultisigError> {
        storage::require_initialized(&env)?;
        storage::get_admin(&env)
    }

    pub fn policy(env: Env) -> Result<QuorumPolicy, MultisigError> {
        storage::require_initialized(&env)?;
        storage::get_policy(&env)
    }

    pub fn native_asset(env: Env) -> Result<Address, MultisigError> {
        storage::require_initialized(&env)?;
        storage::get_native_asset(&env)
    }

    /// Native asset held by the contract.
    pub fn balance(env: Env) -> Result<i128, MultisigError> {
        storage::require_initialized(&env)?;
        let native_asset = storage::get_native_asset(&env)?;
        Ok(token::Client::new(&env, &native_asset).balance(&env.current_contract_address()))
    }

    pub fn required_roles(
        env: Env,
        target: Address,
        selector: Symbol,
    ) -> Result<Vec<Symbol>, MultisigError> {
        storage::require_initialized(&env)?;
        RuleTable::load(&env)?.required_roles(&env, &Action { target, selector })
    }

    /// The configured executor role, if any.
    pub fn executor_role(
        env: Env,
        target: Address,
        selector: Symbol,
    ) -> Result<Option<Symbol>, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(storage::get_executor_rule(&env, &Action { target, selector }))
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, MultisigError> {
        storage::require_initialized(&env)?;
        storage::get_proposal(&env, proposal_id).ok_or(MultisigError::ProposalDoesNotExist)
    }

    pub fn proposal_count(env: Env) -> Result<u64, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(storage::get_proposal_count(&env))
    }

    /// Whether `role` currently confirms `proposal_id`.
    pub fn confirmations(env: Env, proposal_id: u64, role: Symbol) -> Result<bool, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(storage::is_confirmed(&env, proposal_id, &role))
    }

    /// Whether every role currently required for the proposal has confirmed.
    pub fn is_confirmed(env: Env, proposal_id: u64) -> Result<bool, MultisigError> {
        storage::require_initialized(&env)?;
        let proposal =
            storage::get_proposal(&env, proposal_id).ok_or(MultisigError::ProposalDoesNotExist)?;
        let required = RuleTable::load(&env)?.required_roles(&env, &proposal.action())?;
        Ok(engine::quorum_met(&env, proposal_id, &required))
    }

    fn load_pending(env: &Env, proposal_id: u64) -> Result<Proposal, MultisigError> {
        let proposal =
            storage::get_proposal(env, proposal_id).ok_or(MultisigError::ProposalDoesNotExist)?;
        if proposal.status == ProposalStatus::Executed {
            return Err(MultisigError::ProposalAlreadyExecuted);
        }
        Ok(proposal)
    }

    /// Guards shared by confirm and revoke.
    fn check_confirmer(
        env: &Env,
        caller: &Address,
        proposal_id: u64,
        role: &Symbol,
    ) -> Result<(), MultisigError> {
        storage::require_initialized(env)?;
        caller.require_auth();
        registry::require_party(env, caller)?;

        let proposal = Self::load_pending(env, proposal_id)?;
        let required = RuleTable::load(env)?.required_roles(env, &proposal.action())?;
        if !required.contains(role) {
            return Err(MultisigError::InvalidRole);
        }
        if !storage::has_role(env, role, caller) {
            return Err(MultisigError::MissingRole);
        }
        Ok(())
    }
}
