multiversx_sc::imports!();

use crate::{
    config::{DISTRIBUTION_PERIOD_LENGTH, MAX_TOP_PROPOSALS},
    errors::{ERR_INSUFFICIENT_VOTING_POWER, ERR_INVALID_VOTE, ERR_PERIOD_STILL_ACTIVE},
    types::{DistributionPeriod, ProposalId, Stage, VoteContext},
};

/// Distribution period state machine. A period is screening, funding,
/// challenge or finalized purely as a function of the block height; only
/// its start and end heights are stored.
#[multiversx_sc::module]
pub trait DistributionModule:
    crate::config::ConfigModule
    + crate::state::StateModule
    + crate::events::EventsModule
    + crate::treasury::TreasuryModule
    + crate::voting_power::VotingPowerModule
{
    // ========================================================
    // ENDPOINT: startNewDistributionPeriod
    // Anyone can call once the previous screening and funding
    // stages are over.
    // ========================================================

    #[endpoint(startNewDistributionPeriod)]
    fn start_new_distribution_period(&self) -> u64 {
        let height = self.blockchain().get_block_nonce();
        let current_id = self.current_distribution_id().get();
        if current_id > 0 {
            let current = self.distribution_periods(current_id).get();
            require!(height > current.end_height, ERR_PERIOD_STILL_ACTIVE);
        }

        self.reconcile_surplus(height);
        let (treasury_at_start, funds_available) = self.earmark_period_funds();

        let distribution_id = current_id + 1;
        let period = DistributionPeriod {
            id: distribution_id,
            start_height: height,
            end_height: height + DISTRIBUTION_PERIOD_LENGTH,
            funds_available,
            treasury_at_start,
            top_slate_hash: None,
            executed_amount: BigUint::zero(),
            surplus_reconciled: false,
        };
        self.distribution_periods(distribution_id).set(&period);
        self.current_distribution_id().set(distribution_id);

        self.distribution_period_started_event(
            distribution_id,
            period.start_height,
            period.end_height,
            &period.funds_available,
        );

        distribution_id
    }

    // ========================================================
    // ENDPOINT: screeningVote
    // One token one vote, bounded by the screening snapshot.
    // ========================================================

    #[endpoint(screeningVote)]
    fn screening_vote(&self, votes: MultiValueEncoded<MultiValue2<ProposalId<Self::Api>, BigUint>>) {
        let caller = self.blockchain().get_caller();
        let distribution_id = self.current_distribution_id().get();
        require!(distribution_id > 0, ERR_INVALID_VOTE);

        let period = self.distribution_periods(distribution_id).get();
        let height = self.blockchain().get_block_nonce();
        require!(
            period.stage_at(height) == Stage::Screening,
            ERR_INVALID_VOTE
        );

        let voting_power = self.voting_power_for(&period, &caller, VoteContext::Screening);
        let mut votes_cast = self.screening_votes_cast(distribution_id, &caller).get();
        let mut top_ten = self.top_ten_proposals(distribution_id).get();

        for vote in votes.into_iter() {
            let (proposal_id, amount) = vote.into_tuple();
            require!(amount > 0u64, ERR_INVALID_VOTE);

            let proposal_mapper = self.proposals(&proposal_id);
            require!(!proposal_mapper.is_empty(), ERR_INVALID_VOTE);
            let mut proposal = proposal_mapper.get();
            require!(proposal.distribution_id == distribution_id, ERR_INVALID_VOTE);

            votes_cast += &amount;
            require!(votes_cast <= voting_power, ERR_INSUFFICIENT_VOTING_POWER);

            proposal.screening_votes_received += &amount;
            proposal_mapper.set(&proposal);
            top_ten = self.rank_top_ten(&top_ten, &proposal_id, &proposal.screening_votes_received);

            self.screening_vote_event(distribution_id, &caller, &proposal_id, &amount);
        }

        self.screening_votes_cast(distribution_id, &caller).set(&votes_cast);
        self.top_ten_proposals(distribution_id).set(&top_ten);
    }

    /// Re-inserts `proposal_id` after its screening votes grew. A proposal
    /// only moves ahead of another with strictly more votes, so earlier
    /// entries win ties, including the tie for the tenth place.
    fn rank_top_ten(
        &self,
        top_ten: &ManagedVec<ProposalId<Self::Api>>,
        proposal_id: &ProposalId<Self::Api>,
        votes: &BigUint,
    ) -> ManagedVec<ProposalId<Self::Api>> {
        let mut ranked = ManagedVec::new();
        let mut placed = false;

        for entry in top_ten.iter() {
            let entry = entry.clone_value();
            if entry == *proposal_id {
                continue;
            }
            if ranked.len() == MAX_TOP_PROPOSALS {
                break;
            }
            if !placed && *votes > self.proposals(&entry).get().screening_votes_received {
                ranked.push(proposal_id.clone());
                placed = true;
                if ranked.len() == MAX_TOP_PROPOSALS {
                    break;
                }
            }
            ranked.push(entry);
        }

        if !placed && ranked.len() < MAX_TOP_PROPOSALS {
            ranked.push(proposal_id.clone());
        }

        ranked
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getDistributionPeriodInfo)]
    fn get_distribution_period_info(&self, distribution_id: u64) -> DistributionPeriod<Self::Api> {
        self.require_distribution_period(distribution_id)
    }

    #[view(getStage)]
    fn get_stage(&self, distribution_id: u64) -> Stage {
        let period = self.require_distribution_period(distribution_id);
        period.stage_at(self.blockchain().get_block_nonce())
    }

    /// Screening power: the smaller of the locked balances at `start - 34`
    /// and `start - 1`.
    #[view(getVotesScreening)]
    fn get_votes_screening(&self, distribution_id: u64, account: ManagedAddress) -> BigUint {
        let period = self.require_distribution_period(distribution_id);
        self.voting_power_for(&period, &account, VoteContext::Screening)
    }
}
