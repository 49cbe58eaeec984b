use soroban_sdk::{contractevent, Address, Symbol, Vec};

#[contractevent]
#[derive(Clone)]
pub struct PartiesConfigured {
    pub admin: Address,
    pub parties: Vec<Address>,
    pub roles: Vec<Symbol>,
}

#[contractevent]
#[derive(Clone)]
pub struct RuleAdded {
    #[topic]
    pub target: Address,
    #[topic]
    pub selector: Symbol,
    pub roles: Vec<Symbol>,
}

#[contractevent]
#[derive(Clone)]
pub struct ExecutorAdded {
    #[topic]
    pub target: Address,
    #[topic]
    pub selector: Symbol,
    pub role: Symbol,
}

#[contractevent]
#[derive(Clone)]
pub struct ProposalSubmitted {
    #[topic]
    pub id: u64,
    pub submitter: Address,
    pub target: Address,
    pub function: Symbol,
    pub value: i128,
}

#[contractevent]
#[derive(Clone)]
pub struct ProposalConfirmed {
    #[topic]
    pub id: u64,
    pub role: Symbol,
    pub party: Address,
}

#[contractevent]
#[derive(Clone)]
pub struct ConfirmationRevoked {
    #[topic]
    pub id: u64,
    pub role: Symbol,
    pub party: Address,
}

#[contractevent]
#[derive(Clone)]
pub struct ProposalExecuted {
    #[topic]
    pub id: u64,
    pub executor: Address,
}

#[contractevent]
#[derive(Clone)]
pub struct Funded {
    #[topic]
    pub from: Address,
    pub amount: i128,
}
