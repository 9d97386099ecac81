multiversx_sc::imports!();

use crate::errors::ERR_INVALID_TOKEN_ID;

// ============================================================
// Constants
// ============================================================

/// Screening + Funding stages, in blocks
pub const DISTRIBUTION_PERIOD_LENGTH: u64 = 648_000;

/// Funding stage: the last 72_000 blocks of a distribution period
pub const FUNDING_STAGE_LENGTH: u64 = 72_000;

/// Challenge stage: 50_400 blocks after the distribution period ends
pub const CHALLENGE_STAGE_LENGTH: u64 = 50_400;

/// Voting power is the minimum balance over a 33 block window
pub const VOTING_POWER_SNAPSHOT_DELAY: u64 = 33;

/// Fixed-point scale of every amount (18 decimals)
pub const WAD: u64 = 1_000_000_000_000_000_000;

/// 3% of the treasury is earmarked per distribution period (WAD scaled)
pub const GLOBAL_BUDGET_CONSTRAINT: u64 = 30_000_000_000_000_000;

/// Only the ten most screened proposals reach the funding stage
pub const MAX_TOP_PROPOSALS: usize = 10;

/// Endpoint name every proposal calldata must invoke
pub const TRANSFER_FUNCTION: &[u8] = b"transfer";

// ============================================================
// Token configuration
// ============================================================

#[multiversx_sc::module]
pub trait ConfigModule {
    fn set_tokens(&self, fund_token: TokenIdentifier, vote_token: TokenIdentifier) {
        require!(fund_token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN_ID);
        require!(vote_token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN_ID);

        self.fund_token().set(&fund_token);
        self.vote_token().set(&vote_token);
    }

    #[view(getFundToken)]
    #[storage_mapper("fundToken")]
    fn fund_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getVoteToken)]
    #[storage_mapper("voteToken")]
    fn vote_token(&self) -> SingleValueMapper<TokenIdentifier>;
}
