multiversx_sc::imports!();

use crate::{
    errors::ERR_INVALID_PROPOSAL_SLATE,
    math,
    types::{DistributionPeriod, ProposalId, SlateHash, Stage},
};

/// Slate selector for the challenge stage.
#[multiversx_sc::module]
pub trait SlateModule: crate::state::StateModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: updateSlate
    // A valid challenger replaces the top slate only with strictly
    // more net funding votes. Returns whether it did.
    // ========================================================

    #[endpoint(updateSlate)]
    fn update_slate(
        &self,
        distribution_id: u64,
        proposal_ids: MultiValueEncoded<ProposalId<Self::Api>>,
    ) -> bool {
        let mapper = self.distribution_periods(distribution_id);
        require!(!mapper.is_empty(), ERR_INVALID_PROPOSAL_SLATE);
        let mut period = mapper.get();

        let height = self.blockchain().get_block_nonce();
        require!(
            period.stage_at(height) == Stage::Challenge,
            ERR_INVALID_PROPOSAL_SLATE
        );

        let slate = proposal_ids.to_vec();
        let funding_votes = self.validate_slate(&period, &slate);

        let replaces_top = match &period.top_slate_hash {
            None => true,
            Some(top_hash) => {
                let top_slate = self.funded_slates(top_hash).get();
                funding_votes > self.sum_funding_votes(&top_slate)
            },
        };
        if !replaces_top {
            return false;
        }

        let slate_hash = self.hash_slate(&slate);
        self.funded_slates(&slate_hash).set(&slate);
        period.top_slate_hash = Some(slate_hash.clone());
        mapper.set(&period);

        self.funded_slate_updated_event(distribution_id, &slate_hash, &funding_votes);

        true
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Checks membership, uniqueness, positive net votes and the budget.
    /// Returns the slate's summed net funding votes.
    fn validate_slate(
        &self,
        period: &DistributionPeriod<Self::Api>,
        slate: &ManagedVec<ProposalId<Self::Api>>,
    ) -> BigInt {
        require!(!slate.is_empty(), ERR_INVALID_PROPOSAL_SLATE);

        let top_ten = self.top_ten_proposals(period.id).get();
        let mut funding_votes = BigInt::zero();
        let mut tokens_requested = BigUint::zero();

        for index in 0..slate.len() {
            let proposal_id = slate.get(index).clone_value();
            for later in (index + 1)..slate.len() {
                require!(
                    slate.get(later).clone_value() != proposal_id,
                    ERR_INVALID_PROPOSAL_SLATE
                );
            }
            require!(
                top_ten.iter().any(|id| id.clone_value() == proposal_id),
                ERR_INVALID_PROPOSAL_SLATE
            );

            let proposal = self.proposals(&proposal_id).get();
            require!(
                math::is_positive(&proposal.funding_votes_received),
                ERR_INVALID_PROPOSAL_SLATE
            );

            funding_votes += &proposal.funding_votes_received;
            tokens_requested += &proposal.tokens_requested;
        }

        require!(
            tokens_requested <= period.funds_available,
            ERR_INVALID_PROPOSAL_SLATE
        );

        funding_votes
    }

    fn sum_funding_votes(&self, slate: &ManagedVec<ProposalId<Self::Api>>) -> BigInt {
        let mut funding_votes = BigInt::zero();
        for proposal_id in slate.iter() {
            funding_votes += &self.proposals(&proposal_id).get().funding_votes_received;
        }
        funding_votes
    }

    fn hash_slate(&self, slate: &ManagedVec<ProposalId<Self::Api>>) -> SlateHash<Self::Api> {
        let mut encoded = ManagedBuffer::new();
        for proposal_id in slate.iter() {
            encoded.append(&proposal_id);
        }
        self.crypto().keccak256(&encoded).as_managed_buffer().clone()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getFundedProposalSlate)]
    fn get_funded_proposal_slate(
        &self,
        slate_hash: SlateHash<Self::Api>,
    ) -> MultiValueEncoded<ProposalId<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for proposal_id in self.funded_slates(&slate_hash).get().iter() {
            result.push(proposal_id.clone_value());
        }
        result
    }
}
