use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MultisigError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    EmptyPartyList = 3,
    InvalidPartyAddress = 4,
    PartyNotUnique = 5,
    InvalidData = 6,
    InvalidValue = 7,
    EmptyRoleSet = 8,
    NotParty = 9,
    NotAdmin = 10,
    NotExecutor = 11,
    InvalidRole = 12,
    MissingRole = 13,
    RuleNotFound = 14,
    ProposalDoesNotExist = 15,
    ProposalAlreadyExecuted = 16,
    TransactionAlreadyConfirmed = 17,
    TransactionNotConfirmed = 18,
    NotEnoughConfirmations = 19,
}
