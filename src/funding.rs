multiversx_sc::imports!();

use crate::{
    errors::{ERR_FUNDING_VOTE_WRONG_DIRECTION, ERR_INSUFFICIENT_VOTING_POWER, ERR_INVALID_VOTE},
    math,
    types::{FundingVote, ProposalId, QuadraticVoter, Stage, VoteContext},
};

/// Quadratic vote budget tracker for the funding stage.
///
/// A voter's budget is the square of their snapshot balance, fixed on the
/// first funding vote of the period. Each proposal the voter touches costs
/// the square of the voter's running total on it, so the sum of those
/// squares never exceeds the budget.
#[multiversx_sc::module]
pub trait FundingModule:
    crate::config::ConfigModule
    + crate::state::StateModule
    + crate::events::EventsModule
    + crate::voting_power::VotingPowerModule
{
    // ========================================================
    // ENDPOINT: fundingVote
    // Signed votes on top ten proposals. Returns the remaining budget.
    // ========================================================

    #[endpoint(fundingVote)]
    fn funding_vote(
        &self,
        votes: MultiValueEncoded<MultiValue2<ProposalId<Self::Api>, BigInt>>,
    ) -> BigUint {
        let caller = self.blockchain().get_caller();
        let distribution_id = self.current_distribution_id().get();
        require!(distribution_id > 0, ERR_INVALID_VOTE);

        let period = self.distribution_periods(distribution_id).get();
        let height = self.blockchain().get_block_nonce();
        require!(period.stage_at(height) == Stage::Funding, ERR_INVALID_VOTE);

        let voter_mapper = self.quadratic_voters(distribution_id, &caller);
        let mut voter = if voter_mapper.is_empty() {
            let voting_power = self.voting_power_for(&period, &caller, VoteContext::Funding);
            QuadraticVoter {
                remaining_voting_power: voting_power.clone(),
                voting_power,
            }
        } else {
            voter_mapper.get()
        };

        let top_ten = self.top_ten_proposals(distribution_id).get();

        for vote in votes.into_iter() {
            let (proposal_id, votes_used) = vote.into_tuple();
            require!(!math::is_zero(&votes_used), ERR_INVALID_VOTE);
            require!(
                top_ten.iter().any(|id| id.clone_value() == proposal_id),
                ERR_INVALID_VOTE
            );

            self.accumulate_voter_total(distribution_id, &caller, &proposal_id, &votes_used);

            let mut proposal = self.proposals(&proposal_id).get();
            proposal.funding_votes_received += &votes_used;
            self.proposals(&proposal_id).set(&proposal);

            self.funding_vote_event(distribution_id, &caller, &proposal_id, &votes_used);
        }

        let mut spent = BigUint::zero();
        for cast in self.funding_votes_cast(distribution_id, &caller).iter() {
            spent += math::quadratic_cost(&cast.votes_used);
        }
        require!(
            spent <= voter.voting_power,
            ERR_INSUFFICIENT_VOTING_POWER
        );

        voter.remaining_voting_power = &voter.voting_power - &spent;
        voter_mapper.set(&voter);

        voter.remaining_voting_power
    }

    /// Adds `votes_used` to the voter's running total on the proposal.
    /// A voter keeps one direction per proposal for the whole period.
    fn accumulate_voter_total(
        &self,
        distribution_id: u64,
        voter: &ManagedAddress,
        proposal_id: &ProposalId<Self::Api>,
        votes_used: &BigInt,
    ) {
        let mut votes_cast = self.funding_votes_cast(distribution_id, voter);
        for index in 1..=votes_cast.len() {
            let mut cast = votes_cast.get(index);
            if cast.proposal_id != *proposal_id {
                continue;
            }

            require!(
                math::same_direction(&cast.votes_used, votes_used),
                ERR_FUNDING_VOTE_WRONG_DIRECTION
            );
            cast.votes_used += votes_used;
            votes_cast.set(index, &cast);
            return;
        }

        votes_cast.push(&FundingVote {
            proposal_id: proposal_id.clone(),
            votes_used: votes_used.clone(),
        });
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Remaining budget once the voter has voted this period, otherwise
    /// the budget a first vote would receive.
    #[view(getVotesFunding)]
    fn get_votes_funding(&self, distribution_id: u64, account: ManagedAddress) -> BigUint {
        let period = self.require_distribution_period(distribution_id);
        let voter_mapper = self.quadratic_voters(distribution_id, &account);
        if voter_mapper.is_empty() {
            self.voting_power_for(&period, &account, VoteContext::Funding)
        } else {
            voter_mapper.get().remaining_voting_power
        }
    }

    #[view(getVoterInfo)]
    fn get_voter_info(
        &self,
        distribution_id: u64,
        account: ManagedAddress,
    ) -> OptionalValue<QuadraticVoter<Self::Api>> {
        let voter_mapper = self.quadratic_voters(distribution_id, &account);
        if voter_mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(voter_mapper.get())
        }
    }

    #[view(getFundingVotesCast)]
    fn get_funding_votes_cast(
        &self,
        distribution_id: u64,
        account: ManagedAddress,
    ) -> MultiValueEncoded<FundingVote<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for cast in self.funding_votes_cast(distribution_id, &account).iter() {
            result.push(cast);
        }
        result
    }
}
