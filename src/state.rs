multiversx_sc::imports!();

use crate::{
    errors::{ERR_DISTRIBUTION_NOT_FOUND, ERR_PROPOSAL_NOT_FOUND},
    types::{
        DistributionPeriod, FundingVote, Proposal, ProposalId, QuadraticVoter, SlateHash,
    },
};

/// Engine state shared by the distribution, voting, slate and execution
/// modules. Only the contract's own endpoints write to it.
#[multiversx_sc::module]
pub trait StateModule {
    fn require_distribution_period(&self, distribution_id: u64) -> DistributionPeriod<Self::Api> {
        let mapper = self.distribution_periods(distribution_id);
        require!(!mapper.is_empty(), ERR_DISTRIBUTION_NOT_FOUND);
        mapper.get()
    }

    fn require_proposal(&self, proposal_id: &ProposalId<Self::Api>) -> Proposal<Self::Api> {
        let mapper = self.proposals(proposal_id);
        require!(!mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        mapper.get()
    }

    // ── Distribution periods ──

    #[view(getDistributionId)]
    #[storage_mapper("currentDistributionId")]
    fn current_distribution_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("distributionPeriods")]
    fn distribution_periods(&self, distribution_id: u64) -> SingleValueMapper<DistributionPeriod<Self::Api>>;

    /// Oldest period whose unspent funds have not returned to the treasury
    #[storage_mapper("nextSurplusCheck")]
    fn next_surplus_check(&self) -> SingleValueMapper<u64>;

    // ── Treasury ──

    /// Funds under the contract's control that no period has earmarked
    #[view(getTreasury)]
    #[storage_mapper("treasury")]
    fn treasury(&self) -> SingleValueMapper<BigUint>;

    // ── Proposals ──

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: &ProposalId<Self::Api>) -> SingleValueMapper<Proposal<Self::Api>>;

    #[view(getTopTenProposals)]
    #[storage_mapper("topTenProposals")]
    fn top_ten_proposals(&self, distribution_id: u64) -> SingleValueMapper<ManagedVec<ProposalId<Self::Api>>>;

    #[storage_mapper("fundedSlates")]
    fn funded_slates(&self, slate_hash: &SlateHash<Self::Api>) -> SingleValueMapper<ManagedVec<ProposalId<Self::Api>>>;

    // ── Voters ──

    #[view(getScreeningVotesCast)]
    #[storage_mapper("screeningVotesCast")]
    fn screening_votes_cast(&self, distribution_id: u64, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("quadraticVoters")]
    fn quadratic_voters(&self, distribution_id: u64, account: &ManagedAddress) -> SingleValueMapper<QuadraticVoter<Self::Api>>;

    #[storage_mapper("fundingVotesCast")]
    fn funding_votes_cast(&self, distribution_id: u64, account: &ManagedAddress) -> VecMapper<FundingVote<Self::Api>>;
}
