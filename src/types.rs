multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::config::{CHALLENGE_STAGE_LENGTH, FUNDING_STAGE_LENGTH};

/// keccak-256 digest identifying a proposal
pub type ProposalId<M> = ManagedBuffer<M>;

/// keccak-256 digest identifying a slate of proposals
pub type SlateHash<M> = ManagedBuffer<M>;

// ============================================================
// Stage: derived from the block height, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Stage {
    /// Proposals are submitted and screened one token one vote.
    Screening,
    /// The top ten proposals receive quadratic funding votes.
    Funding,
    /// Slates compete for the period's funds.
    Challenge,
    /// The top slate is final and can be executed.
    Finalized,
}

/// Which snapshot rule applies when voting power is read.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum VoteContext {
    Screening,
    Funding,
}

// ============================================================
// Distribution Period
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct DistributionPeriod<M: ManagedTypeApi> {
    pub id: u64,
    pub start_height: u64,
    pub end_height: u64,
    /// 3% of the treasury at start, earmarked for this period
    pub funds_available: BigUint<M>,
    /// Unallocated treasury after surplus reconciliation, before the earmark
    pub treasury_at_start: BigUint<M>,
    pub top_slate_hash: Option<SlateHash<M>>,
    /// Sum of `tokens_requested` over executed slate members
    pub executed_amount: BigUint<M>,
    /// Set once the unspent earmark went back to the treasury
    pub surplus_reconciled: bool,
}

impl<M: ManagedTypeApi> DistributionPeriod<M> {
    pub fn screening_stage_end(&self) -> u64 {
        self.end_height - FUNDING_STAGE_LENGTH
    }

    pub fn challenge_stage_end(&self) -> u64 {
        self.end_height + CHALLENGE_STAGE_LENGTH
    }

    pub fn stage_at(&self, height: u64) -> Stage {
        if height <= self.screening_stage_end() {
            Stage::Screening
        } else if height <= self.end_height {
            Stage::Funding
        } else if height <= self.challenge_stage_end() {
            Stage::Challenge
        } else {
            Stage::Finalized
        }
    }
}

// ============================================================
// Proposal
// ============================================================

/// One call of a proposal as submitted: `target` must be the fund token,
/// `value` zero and `calldata` a top-encoded `TransferCall`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Debug)]
pub struct ProposalAction<M: ManagedTypeApi> {
    pub target: TokenIdentifier<M>,
    pub value: BigUint<M>,
    pub calldata: ManagedBuffer<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct TransferCall<M: ManagedTypeApi> {
    pub function: ManagedBuffer<M>,
    pub recipient: ManagedAddress<M>,
    pub amount: BigUint<M>,
}

/// Decoded payout, kept on the proposal until execution.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug,
)]
pub struct ProposalTransfer<M: ManagedTypeApi> {
    pub recipient: ManagedAddress<M>,
    pub amount: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: ProposalId<M>,
    pub distribution_id: u64,
    pub tokens_requested: BigUint<M>,
    pub screening_votes_received: BigUint<M>,
    /// Net quadratic votes; only top ten proposals can move it off zero
    pub funding_votes_received: BigInt<M>,
    pub executed: bool,
    pub transfers: ManagedVec<M, ProposalTransfer<M>>,
}

// ============================================================
// Funding stage voter records
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct QuadraticVoter<M: ManagedTypeApi> {
    /// Fixed on the voter's first funding vote of the period
    pub voting_power: BigUint<M>,
    pub remaining_voting_power: BigUint<M>,
}

/// Running signed total of one voter on one proposal.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct FundingVote<M: ManagedTypeApi> {
    pub proposal_id: ProposalId<M>,
    pub votes_used: BigInt<M>,
}

// ============================================================
// Voting power checkpoints
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Checkpoint<M: ManagedTypeApi> {
    pub height: u64,
    pub amount: BigUint<M>,
}
