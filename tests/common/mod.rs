#![allow(dead_code, deprecated)]

use grant_fund::{
    config::{
        CHALLENGE_STAGE_LENGTH, DISTRIBUTION_PERIOD_LENGTH, FUNDING_STAGE_LENGTH,
        TRANSFER_FUNCTION, WAD,
    },
    distribution::DistributionModule,
    execution::ExecutionModule,
    funding::FundingModule,
    proposals::ProposalsModule,
    slate::SlateModule,
    state::StateModule,
    treasury::TreasuryModule,
    types::{ProposalAction, TransferCall},
    voting_power::VotingPowerModule,
    GrantFund,
};
use multiversx_sc::{
    codec::NestedEncode,
    types::{
        Address, BigInt, BigUint, ManagedAddress, ManagedBuffer, MultiValueEncoded,
        TokenIdentifier,
    },
};
use multiversx_sc_scenario::{api::DebugApi, num_bigint, rust_biguint, whitebox_legacy::*};

pub const FUND_TOKEN: &[u8] = b"GRANT-a1b2c3";
pub const VOTE_TOKEN: &[u8] = b"VOTE-d4e5f6";
pub const OTHER_TOKEN: &[u8] = b"OTHER-778899";
pub const WASM_PATH: &str = "output/grant-fund.wasm";

/// Height at which tests start their first distribution period.
pub const START_HEIGHT: u64 = 100;

/// Height at which tests lock voting tokens, well before any snapshot.
pub const LOCK_HEIGHT: u64 = 10;

pub type ProposalKey = Vec<u8>;

// ============================================================
// Heights relative to a period starting at `start`
// ============================================================

pub fn end_height(start: u64) -> u64 {
    start + DISTRIBUTION_PERIOD_LENGTH
}

pub fn screening_end(start: u64) -> u64 {
    end_height(start) - FUNDING_STAGE_LENGTH
}

pub fn funding_height(start: u64) -> u64 {
    screening_end(start) + 1
}

pub fn challenge_height(start: u64) -> u64 {
    end_height(start) + 1
}

pub fn finalized_height(start: u64) -> u64 {
    end_height(start) + CHALLENGE_STAGE_LENGTH + 1
}

// ============================================================
// Amounts
// ============================================================

pub fn wad(tokens: u64) -> BigUint<DebugApi> {
    BigUint::from(tokens) * BigUint::from(WAD)
}

/// Thousandths of a token, WAD scaled.
pub fn milli_wad(thousandths: u64) -> BigUint<DebugApi> {
    BigUint::from(thousandths) * BigUint::from(WAD / 1_000)
}

pub fn signed_wad(tokens: i64) -> BigInt<DebugApi> {
    let magnitude = BigInt::from(wad(tokens.unsigned_abs()));
    if tokens < 0 {
        BigInt::zero() - magnitude
    } else {
        magnitude
    }
}

pub fn rust_wad(tokens: u64) -> num_bigint::BigUint {
    num_bigint::BigUint::from(tokens) * num_bigint::BigUint::from(WAD)
}

pub fn transfer_calldata(recipient: &Address, tokens: u64) -> ManagedBuffer<DebugApi> {
    let call = TransferCall {
        function: ManagedBuffer::from(TRANSFER_FUNCTION),
        recipient: ManagedAddress::from_address(recipient),
        amount: wad(tokens),
    };
    let mut calldata = ManagedBuffer::new();
    call.dep_encode(&mut calldata).unwrap();
    calldata
}

pub fn transfer_action(recipient: &Address, tokens: u64) -> ProposalAction<DebugApi> {
    ProposalAction {
        target: TokenIdentifier::from_esdt_bytes(FUND_TOKEN),
        value: BigUint::zero(),
        calldata: transfer_calldata(recipient, tokens),
    }
}

// ============================================================
// Setup
// ============================================================

pub struct GrantFundSetup<GrantFundObjBuilder>
where
    GrantFundObjBuilder: 'static + Copy + Fn() -> grant_fund::ContractObj<DebugApi>,
{
    pub b_mock: BlockchainStateWrapper,
    pub owner: Address,
    pub contract: ContractObjWrapper<grant_fund::ContractObj<DebugApi>, GrantFundObjBuilder>,
}

impl<GrantFundObjBuilder> GrantFundSetup<GrantFundObjBuilder>
where
    GrantFundObjBuilder: 'static + Copy + Fn() -> grant_fund::ContractObj<DebugApi>,
{
    pub fn new(builder: GrantFundObjBuilder) -> Self {
        let rust_zero = rust_biguint!(0);
        let mut b_mock = BlockchainStateWrapper::new();
        let owner = b_mock.create_user_account(&rust_zero);
        let contract = b_mock.create_sc_account(&rust_zero, Some(&owner), builder, WASM_PATH);

        b_mock
            .execute_tx(&owner, &contract, &rust_zero, |sc| {
                sc.init(
                    TokenIdentifier::from_esdt_bytes(FUND_TOKEN),
                    TokenIdentifier::from_esdt_bytes(VOTE_TOKEN),
                );
            })
            .assert_ok();

        Self {
            b_mock,
            owner,
            contract,
        }
    }

    pub fn set_height(&mut self, height: u64) {
        self.b_mock.set_block_nonce(height);
    }

    pub fn new_account(&mut self) -> Address {
        self.b_mock.create_user_account(&rust_biguint!(0))
    }

    pub fn fund_treasury(&mut self, tokens: u64) {
        let funder = self.new_account();
        self.b_mock
            .set_esdt_balance(&funder, FUND_TOKEN, &rust_wad(tokens));
        self.b_mock
            .execute_esdt_transfer(
                &funder,
                &self.contract,
                FUND_TOKEN,
                0,
                &rust_wad(tokens),
                |sc| sc.fund_treasury(),
            )
            .assert_ok();
    }

    /// New account holding `tokens` vote tokens, all locked at the
    /// current height.
    pub fn new_voter(&mut self, tokens: u64) -> Address {
        let voter = self.new_account();
        if tokens > 0 {
            self.b_mock
                .set_esdt_balance(&voter, VOTE_TOKEN, &rust_wad(tokens));
            self.lock(&voter, tokens).assert_ok();
        }
        voter
    }

    pub fn lock(&mut self, voter: &Address, tokens: u64) -> TxResult {
        self.b_mock.execute_esdt_transfer(
            voter,
            &self.contract,
            VOTE_TOKEN,
            0,
            &rust_wad(tokens),
            |sc| sc.lock_voting_tokens(),
        )
    }

    pub fn unlock(&mut self, voter: &Address, tokens: u64) -> TxResult {
        self.b_mock
            .execute_tx(voter, &self.contract, &rust_biguint!(0), |sc| {
                sc.unlock_voting_tokens(wad(tokens));
            })
    }

    pub fn start_period(&mut self) -> TxResult {
        self.b_mock
            .execute_tx(&self.owner, &self.contract, &rust_biguint!(0), |sc| {
                sc.start_new_distribution_period();
            })
    }

    /// Proposes one transfer per `(recipient, tokens)` pair.
    pub fn propose(
        &mut self,
        description: &str,
        transfers: &[(&Address, u64)],
    ) -> (TxResult, ProposalKey) {
        self.propose_with(description, || {
            transfers
                .iter()
                .map(|(recipient, tokens)| transfer_action(recipient, *tokens))
                .collect()
        })
    }

    pub fn propose_with<F>(&mut self, description: &str, actions: F) -> (TxResult, ProposalKey)
    where
        F: FnOnce() -> Vec<ProposalAction<DebugApi>>,
    {
        let mut proposal_id = ProposalKey::new();
        let result =
            self.b_mock
                .execute_tx(&self.owner, &self.contract, &rust_biguint!(0), |sc| {
                    let mut args = MultiValueEncoded::new();
                    for action in actions() {
                        args.push(action);
                    }
                    let id = sc.propose_standard(ManagedBuffer::from(description), args);
                    proposal_id = id.to_boxed_bytes().into_vec();
                });
        (result, proposal_id)
    }

    pub fn screening_vote(&mut self, voter: &Address, votes: &[(&ProposalKey, u64)]) -> TxResult {
        self.b_mock
            .execute_tx(voter, &self.contract, &rust_biguint!(0), |sc| {
                let mut args = MultiValueEncoded::new();
                for (proposal_id, tokens) in votes {
                    args.push((ManagedBuffer::from(proposal_id.as_slice()), wad(*tokens)).into());
                }
                sc.screening_vote(args);
            })
    }

    pub fn funding_vote(&mut self, voter: &Address, votes: &[(&ProposalKey, i64)]) -> TxResult {
        self.b_mock
            .execute_tx(voter, &self.contract, &rust_biguint!(0), |sc| {
                let mut args = MultiValueEncoded::new();
                for (proposal_id, tokens) in votes {
                    args.push(
                        (ManagedBuffer::from(proposal_id.as_slice()), signed_wad(*tokens)).into(),
                    );
                }
                sc.funding_vote(args);
            })
    }

    /// Votes in raw units rather than whole tokens.
    pub fn funding_vote_units(
        &mut self,
        voter: &Address,
        votes: &[(&ProposalKey, i64)],
    ) -> TxResult {
        self.b_mock
            .execute_tx(voter, &self.contract, &rust_biguint!(0), |sc| {
                let mut args = MultiValueEncoded::new();
                for (proposal_id, units) in votes {
                    args.push(
                        (ManagedBuffer::from(proposal_id.as_slice()), BigInt::from(*units)).into(),
                    );
                }
                sc.funding_vote(args);
            })
    }

    /// Returns whether the slate became the new top slate.
    pub fn update_slate(
        &mut self,
        distribution_id: u64,
        proposal_ids: &[&ProposalKey],
    ) -> (TxResult, bool) {
        let caller = self.new_account();
        let mut replaced = false;
        let result = self
            .b_mock
            .execute_tx(&caller, &self.contract, &rust_biguint!(0), |sc| {
                let mut args = MultiValueEncoded::new();
                for proposal_id in proposal_ids {
                    args.push(ManagedBuffer::from(proposal_id.as_slice()));
                }
                replaced = sc.update_slate(distribution_id, args);
            });
        (result, replaced)
    }

    pub fn execute(&mut self, proposal_id: &ProposalKey) -> TxResult {
        let caller = self.new_account();
        self.b_mock
            .execute_tx(&caller, &self.contract, &rust_biguint!(0), |sc| {
                sc.execute_proposal(ManagedBuffer::from(proposal_id.as_slice()));
            })
    }

    // ── Queries returning plain data ──

    pub fn top_ten(&mut self, distribution_id: u64) -> Vec<ProposalKey> {
        let mut ids = Vec::new();
        self.b_mock
            .execute_query(&self.contract, |sc| {
                for id in sc.top_ten_proposals(distribution_id).get().iter() {
                    ids.push(id.to_boxed_bytes().into_vec());
                }
            })
            .assert_ok();
        ids
    }

    pub fn top_slate(&mut self, distribution_id: u64) -> Vec<ProposalKey> {
        let mut ids = Vec::new();
        self.b_mock
            .execute_query(&self.contract, |sc| {
                let period = sc.get_distribution_period_info(distribution_id);
                if let Some(slate_hash) = period.top_slate_hash {
                    for id in sc.get_funded_proposal_slate(slate_hash).into_iter() {
                        ids.push(id.to_boxed_bytes().into_vec());
                    }
                }
            })
            .assert_ok();
        ids
    }

    pub fn check_treasury_milli(&mut self, thousandths: u64) {
        self.b_mock
            .execute_query(&self.contract, |sc| {
                assert_eq!(sc.treasury().get(), milli_wad(thousandths));
            })
            .assert_ok();
    }

    pub fn check_funding_votes(&mut self, proposal_id: &ProposalKey, expected: i64) {
        self.b_mock
            .execute_query(&self.contract, |sc| {
                let proposal = sc.get_proposal_info(ManagedBuffer::from(proposal_id.as_slice()));
                assert_eq!(proposal.funding_votes_received, signed_wad(expected));
            })
            .assert_ok();
    }

    pub fn check_remaining_funding_power(
        &mut self,
        distribution_id: u64,
        voter: &Address,
        expected_tokens: u64,
    ) {
        self.b_mock
            .execute_query(&self.contract, |sc| {
                let remaining =
                    sc.get_votes_funding(distribution_id, ManagedAddress::from_address(voter));
                assert_eq!(remaining, wad(expected_tokens));
            })
            .assert_ok();
    }
}

/// Starts a period at `START_HEIGHT` over a 1000 token treasury (30 tokens
/// available) and screens `count` proposals requesting `tokens_each`.
/// Proposal `i` gets `count - i` screening votes, so the returned ids are
/// ordered by rank.
pub fn screened_period<GrantFundObjBuilder>(
    setup: &mut GrantFundSetup<GrantFundObjBuilder>,
    count: u64,
    tokens_each: u64,
) -> Vec<ProposalKey>
where
    GrantFundObjBuilder: 'static + Copy + Fn() -> grant_fund::ContractObj<DebugApi>,
{
    setup.set_height(LOCK_HEIGHT);
    let screener = setup.new_voter(1_000);
    let recipient = setup.new_account();

    setup.fund_treasury(1_000);
    setup.set_height(START_HEIGHT);
    setup.start_period().assert_ok();

    let mut ids = Vec::new();
    for i in 0..count {
        let (result, id) = setup.propose(&format!("proposal {i}"), &[(&recipient, tokens_each)]);
        result.assert_ok();
        setup
            .screening_vote(&screener, &[(&id, count - i)])
            .assert_ok();
        ids.push(id);
    }
    ids
}
