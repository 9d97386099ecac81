multiversx_sc::imports!();

use crate::{
    config::TRANSFER_FUNCTION,
    errors::{ERR_INVALID_PROPOSAL, ERR_PROPOSAL_ALREADY_EXISTS, ERR_SCREENING_PERIOD_ENDED},
    types::{Proposal, ProposalAction, ProposalId, ProposalTransfer, Stage, TransferCall},
};

/// Proposal registry: standard funding proposals are lists of fund token
/// transfers, identified by the hash of their content.
#[multiversx_sc::module]
pub trait ProposalsModule:
    crate::config::ConfigModule + crate::state::StateModule + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: proposeStandard
    // Only while the current period is screening.
    // ========================================================

    #[endpoint(proposeStandard)]
    fn propose_standard(
        &self,
        description: ManagedBuffer,
        actions: MultiValueEncoded<ProposalAction<Self::Api>>,
    ) -> ProposalId<Self::Api> {
        let distribution_id = self.current_distribution_id().get();
        require!(distribution_id > 0, ERR_SCREENING_PERIOD_ENDED);

        let period = self.distribution_periods(distribution_id).get();
        let height = self.blockchain().get_block_nonce();
        require!(
            period.stage_at(height) == Stage::Screening,
            ERR_SCREENING_PERIOD_ENDED
        );

        let actions = actions.to_vec();
        let (tokens_requested, transfers) = self.decode_transfers(&actions);
        require!(
            tokens_requested <= period.funds_available,
            ERR_INVALID_PROPOSAL
        );

        let proposal_id = self.hash_actions(&description, &actions);
        require!(
            self.proposals(&proposal_id).is_empty(),
            ERR_PROPOSAL_ALREADY_EXISTS
        );

        let proposal = Proposal {
            id: proposal_id.clone(),
            distribution_id,
            tokens_requested,
            screening_votes_received: BigUint::zero(),
            funding_votes_received: BigInt::zero(),
            executed: false,
            transfers,
        };
        self.proposals(&proposal_id).set(&proposal);

        let caller = self.blockchain().get_caller();
        self.proposal_created_event(
            &proposal_id,
            distribution_id,
            &caller,
            &proposal.tokens_requested,
        );

        proposal_id
    }

    // ========================================================
    // INTERNAL: validation and hashing
    // ========================================================

    /// Every action must be a zero-value `transfer` call on the fund token.
    /// Returns the total requested and the decoded payouts.
    fn decode_transfers(
        &self,
        actions: &ManagedVec<ProposalAction<Self::Api>>,
    ) -> (BigUint, ManagedVec<ProposalTransfer<Self::Api>>) {
        require!(!actions.is_empty(), ERR_INVALID_PROPOSAL);

        let fund_token = self.fund_token().get();
        let transfer_function = ManagedBuffer::new_from_bytes(TRANSFER_FUNCTION);
        let mut tokens_requested = BigUint::zero();
        let mut transfers = ManagedVec::new();

        for action in actions.iter() {
            require!(action.target == fund_token, ERR_INVALID_PROPOSAL);
            require!(action.value == 0u64, ERR_INVALID_PROPOSAL);

            let call = match TransferCall::<Self::Api>::top_decode(action.calldata.clone()) {
                Ok(call) => call,
                Err(_) => sc_panic!(ERR_INVALID_PROPOSAL),
            };
            require!(call.function == transfer_function, ERR_INVALID_PROPOSAL);
            require!(!call.recipient.is_zero(), ERR_INVALID_PROPOSAL);
            require!(call.amount > 0u64, ERR_INVALID_PROPOSAL);

            tokens_requested += &call.amount;
            transfers.push(ProposalTransfer {
                recipient: call.recipient,
                amount: call.amount,
            });
        }

        (tokens_requested, transfers)
    }

    /// `keccak256(encoded actions ++ keccak256(description))`
    fn hash_actions(
        &self,
        description: &ManagedBuffer,
        actions: &ManagedVec<ProposalAction<Self::Api>>,
    ) -> ProposalId<Self::Api> {
        let mut encoded = ManagedBuffer::new();
        for action in actions.iter() {
            if action.dep_encode(&mut encoded).is_err() {
                sc_panic!(ERR_INVALID_PROPOSAL);
            }
        }

        let description_hash = self.crypto().keccak256(description);
        encoded.append(description_hash.as_managed_buffer());

        self.crypto().keccak256(&encoded).as_managed_buffer().clone()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(hashProposal)]
    fn hash_proposal(
        &self,
        description: ManagedBuffer,
        actions: MultiValueEncoded<ProposalAction<Self::Api>>,
    ) -> ProposalId<Self::Api> {
        self.hash_actions(&description, &actions.to_vec())
    }

    #[view(getProposalInfo)]
    fn get_proposal_info(&self, proposal_id: ProposalId<Self::Api>) -> Proposal<Self::Api> {
        self.require_proposal(&proposal_id)
    }
}
