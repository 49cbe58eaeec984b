use soroban_sdk::{contracttype, symbol_short, Address, Symbol, Val, Vec};

/// Reserved for rule configuration. Never a confirming or executor role.
pub const ADMIN_ROLE: Symbol = symbol_short!("ADMIN");

pub const OWNER_ROLE: Symbol = symbol_short!("OWNER");
pub const MANAGER_ROLE: Symbol = symbol_short!("MANAGER");
pub const HOT_APPROVER_ROLE: Symbol = symbol_short!("HOT_APPR");
pub const COLD_APPROVER_ROLE: Symbol = symbol_short!("COLD_APPR");

/// Selector for a bare value transfer: the value moves, nothing is invoked.
pub const PAY_SELECTOR: Symbol = symbol_short!("pay");

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Admin,
    NativeAsset,
    Policy,
    Parties,
    Roles,
    ProposalCount,
    Party(Address),
    RoleMember(Symbol, Address),
    ApprovalRule(Action),
    ExecutorRule(Action),
    Proposal(u64),
    Confirmation(u64, Symbol),
}

/// How rule lookups behave when no explicit rule is configured for an action.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuorumPolicy {
    /// Every action needs an explicit approval rule and executor rule.
    RuleTable,
    /// Unset approval rules require every configured role; unset executor
    /// rules let any party execute.
    AllRoles,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Party {
    pub address: Address,
    pub role: Symbol,
}

/// Rule table key: the called contract and the function name.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Action {
    pub target: Address,
    pub selector: Symbol,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Pending,
    Executed,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub target: Address,
    pub function: Symbol,
    pub args: Vec<Val>,
    pub value: i128,
    pub submitter: Address,
    pub status: ProposalStatus,
    pub submitted_at: u64,
    pub executed_at: Option<u64>,
}

impl Proposal {
    pub fn action(&self) -> Action {
        Action {
            target: self.target.clone(),
            selector: self.function.clone(),
        }
    }
}
