// Messages surfaced to callers. Tests and off-chain clients match on these
// strings, so they are part of the public interface.

pub const ERR_INVALID_MIN_BALANCE_SYMBOL: &str =
    "invalid minimum_balance_to_create_proposals symbol";
pub const ERR_INVALID_PROPOSAL_COST_SYMBOL: &str = "invalid proposal_cost symbol";
pub const ERR_INVALID_AMOUNT_SYMBOL: &str = "invalid amount symbol";
pub const ERR_INVALID_AMOUNT: &str = "amount must be positive";
pub const ERR_INVALID_QUANTITY_SYMBOL: &str = "invalid quantity symbol";
pub const ERR_INVALID_VOTING_DAYS: &str = "voting_days must be between 1 and 255";
pub const ERR_PARAMS_NOT_INITIALIZED: &str = "params not initialized";

pub const ERR_NOT_ENOUGH_BALANCE: &str = "not enough balance";
pub const ERR_NAME_IN_USE: &str = "name already in use";
pub const ERR_INVALID_PROPOSAL_NAME: &str = "invalid proposal name";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "proposal not found";
pub const ERR_INVALID_PROPOSAL_STATUS: &str = "invalid proposal status";

pub const ERR_INVALID_MEMO: &str = "invalid memo";
pub const ERR_INVALID_QUANTITY_AMOUNT: &str = "invalid quantity amount";

pub const ERR_VOTING_PERIOD_NOT_OVER: &str = "the voting period is not yet over";
pub const ERR_VOTING_PERIOD_OVER: &str = "the voting period is over";
pub const ERR_ALREADY_VOTED: &str = "already voted";

pub const ERR_MISSING_AUTHORITY: &str = "missing required authority";
pub const ERR_INSUFFICIENT_TREASURY: &str = "insufficient treasury balance";
pub const ERR_INVALID_TOKEN: &str = "invalid token";
