multiversx_sc::imports!();

use crate::{
    errors::ERR_EXECUTE_PROPOSAL_INVALID,
    types::{ProposalId, Stage},
};

#[multiversx_sc::module]
pub trait ExecutionModule:
    crate::config::ConfigModule + crate::state::StateModule + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: executeProposal
    // Pays out one member of a finalized top slate. Anyone can
    // trigger it, at most once per proposal, until the period's
    // surplus is reconciled.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: ProposalId<Self::Api>) {
        let mut proposal = self.require_proposal(&proposal_id);
        require!(!proposal.executed, ERR_EXECUTE_PROPOSAL_INVALID);

        let distribution_id = proposal.distribution_id;
        let mut period = self.distribution_periods(distribution_id).get();
        let height = self.blockchain().get_block_nonce();
        require!(
            period.stage_at(height) == Stage::Finalized,
            ERR_EXECUTE_PROPOSAL_INVALID
        );
        require!(!period.surplus_reconciled, ERR_EXECUTE_PROPOSAL_INVALID);

        let in_top_slate = match &period.top_slate_hash {
            Some(top_hash) => self
                .funded_slates(top_hash)
                .get()
                .iter()
                .any(|id| id.clone_value() == proposal_id),
            None => false,
        };
        require!(in_top_slate, ERR_EXECUTE_PROPOSAL_INVALID);

        period.executed_amount += &proposal.tokens_requested;
        require!(
            period.executed_amount <= period.funds_available,
            ERR_EXECUTE_PROPOSAL_INVALID
        );

        proposal.executed = true;
        self.proposals(&proposal_id).set(&proposal);
        self.distribution_periods(distribution_id).set(&period);

        let fund_token = self.fund_token().get();
        for transfer in proposal.transfers.iter() {
            self.send()
                .direct_esdt(&transfer.recipient, &fund_token, 0, &transfer.amount);
        }

        self.proposal_executed_event(&proposal_id, distribution_id, &proposal.tokens_requested);
    }
}
