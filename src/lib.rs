#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod distribution;
pub mod errors;
pub mod events;
pub mod execution;
pub mod funding;
pub mod math;
pub mod proposals;
pub mod slate;
pub mod state;
pub mod treasury;
pub mod types;
pub mod voting_power;

// ============================================================
// Contract
// ============================================================

/// Grant fund: allocates a share of the treasury every distribution period
/// through screening votes, quadratic funding votes and a challenge stage
/// in which slates of winning proposals compete.
#[multiversx_sc::contract]
pub trait GrantFund:
    config::ConfigModule
    + events::EventsModule
    + state::StateModule
    + voting_power::VotingPowerModule
    + treasury::TreasuryModule
    + proposals::ProposalsModule
    + distribution::DistributionModule
    + funding::FundingModule
    + slate::SlateModule
    + execution::ExecutionModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, fund_token: TokenIdentifier, vote_token: TokenIdentifier) {
        self.set_tokens(fund_token, vote_token);
        self.current_distribution_id().set_if_empty(0u64);
        self.next_surplus_check().set_if_empty(1u64);
        self.treasury().set_if_empty(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}
}
