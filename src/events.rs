multiversx_sc::imports!();

use crate::types::{ProposalId, SlateHash};

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("distributionPeriodStarted")]
    fn distribution_period_started_event(
        &self,
        #[indexed] distribution_id: u64,
        #[indexed] start_height: u64,
        #[indexed] end_height: u64,
        funds_available: &BigUint,
    );

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] distribution_id: u64,
        #[indexed] proposer: &ManagedAddress,
        tokens_requested: &BigUint,
    );

    #[event("screeningVote")]
    fn screening_vote_event(
        &self,
        #[indexed] distribution_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        votes: &BigUint,
    );

    #[event("fundingVote")]
    fn funding_vote_event(
        &self,
        #[indexed] distribution_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        votes: &BigInt,
    );

    #[event("fundedSlateUpdated")]
    fn funded_slate_updated_event(
        &self,
        #[indexed] distribution_id: u64,
        #[indexed] slate_hash: &SlateHash<Self::Api>,
        funding_votes: &BigInt,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] distribution_id: u64,
        tokens_requested: &BigUint,
    );

    #[event("treasuryFunded")]
    fn treasury_funded_event(&self, #[indexed] funder: &ManagedAddress, amount: &BigUint);

    #[event("surplusReconciled")]
    fn surplus_reconciled_event(&self, #[indexed] distribution_id: u64, surplus: &BigUint);

    #[event("votingTokensLocked")]
    fn voting_tokens_locked_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] height: u64,
        locked_balance: &BigUint,
    );

    #[event("votingTokensUnlocked")]
    fn voting_tokens_unlocked_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] height: u64,
        locked_balance: &BigUint,
    );
}
