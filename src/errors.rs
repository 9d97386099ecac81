// Stage violations
pub const ERR_PERIOD_STILL_ACTIVE: &str = "Distribution period still active";
pub const ERR_SCREENING_PERIOD_ENDED: &str = "Screening period ended";
pub const ERR_DISTRIBUTION_NOT_FOUND: &str = "Distribution period not found";

// Vote validity
pub const ERR_INVALID_VOTE: &str = "Invalid vote";
pub const ERR_INSUFFICIENT_VOTING_POWER: &str = "Insufficient voting power";
pub const ERR_FUNDING_VOTE_WRONG_DIRECTION: &str = "Funding vote wrong direction";

// Proposal validity
pub const ERR_INVALID_PROPOSAL: &str = "Invalid proposal";
pub const ERR_PROPOSAL_ALREADY_EXISTS: &str = "Proposal already exists";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal not found";
pub const ERR_EXECUTE_PROPOSAL_INVALID: &str = "Proposal cannot be executed";

// Slate validity
pub const ERR_INVALID_PROPOSAL_SLATE: &str = "Invalid proposal slate";

// Payments
pub const ERR_INVALID_TOKEN_ID: &str = "Invalid token identifier";
pub const ERR_WRONG_PAYMENT_TOKEN: &str = "Wrong payment token";
pub const ERR_ZERO_AMOUNT: &str = "Amount must be positive";
pub const ERR_INSUFFICIENT_LOCKED_TOKENS: &str = "Insufficient locked voting tokens";
