multiversx_sc::imports!();

use crate::{
    config::VOTING_POWER_SNAPSHOT_DELAY,
    errors::{ERR_INSUFFICIENT_LOCKED_TOKENS, ERR_WRONG_PAYMENT_TOKEN, ERR_ZERO_AMOUNT},
    math,
    types::{Checkpoint, DistributionPeriod, VoteContext},
};

/// Voting power oracle. Balances come from vote tokens locked in the
/// contract; every change writes a checkpoint so that past balances can be
/// read at any height.
#[multiversx_sc::module]
pub trait VotingPowerModule: crate::config::ConfigModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: lockVotingTokens
    // ========================================================

    #[endpoint(lockVotingTokens)]
    #[payable("*")]
    fn lock_voting_tokens(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.vote_token().get(),
            ERR_WRONG_PAYMENT_TOKEN
        );
        require!(payment.amount > 0u64, ERR_ZERO_AMOUNT);

        let locked = self.locked_voting_tokens(&caller).update(|balance| {
            *balance += &payment.amount;
            balance.clone()
        });
        let height = self.write_checkpoint(&caller, &locked);

        self.voting_tokens_locked_event(&caller, height, &locked);
    }

    // ========================================================
    // ENDPOINT: unlockVotingTokens
    // ========================================================

    #[endpoint(unlockVotingTokens)]
    fn unlock_voting_tokens(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let current = self.locked_voting_tokens(&caller).get();
        require!(amount <= current, ERR_INSUFFICIENT_LOCKED_TOKENS);

        let locked = current - &amount;
        self.locked_voting_tokens(&caller).set(&locked);
        let height = self.write_checkpoint(&caller, &locked);

        let vote_token = self.vote_token().get();
        self.send().direct_esdt(&caller, &vote_token, 0, &amount);
        self.voting_tokens_unlocked_event(&caller, height, &locked);
    }

    // ========================================================
    // INTERNAL: snapshots
    // ========================================================

    /// Voting power of `account` for the given stage of `period`.
    /// Both contexts take the minimum balance over a snapshot window so
    /// that tokens locked just before the snapshot carry no weight.
    fn voting_power_for(
        &self,
        period: &DistributionPeriod<Self::Api>,
        account: &ManagedAddress,
        context: VoteContext,
    ) -> BigUint {
        match context {
            VoteContext::Screening => {
                let snapshot = period.start_height.saturating_sub(1);
                self.min_voting_power_in_window(account, snapshot)
            },
            VoteContext::Funding => {
                let snapshot = period.screening_stage_end();
                let votes = self.min_voting_power_in_window(account, snapshot);
                math::wmul(&votes, &votes)
            },
        }
    }

    fn min_voting_power_in_window(&self, account: &ManagedAddress, snapshot: u64) -> BigUint {
        let window_start = snapshot.saturating_sub(VOTING_POWER_SNAPSHOT_DELAY);
        math::min(
            self.past_voting_power(account, window_start),
            self.past_voting_power(account, snapshot),
        )
    }

    /// Locked balance at the end of block `height`.
    #[view(getPastVotingPower)]
    fn get_past_voting_power(&self, account: ManagedAddress, height: u64) -> BigUint {
        self.past_voting_power(&account, height)
    }

    fn past_voting_power(&self, account: &ManagedAddress, height: u64) -> BigUint {
        let checkpoints = self.voting_checkpoints(account);

        // first checkpoint written after `height`
        let mut low = 1usize;
        let mut high = checkpoints.len() + 1;
        while low < high {
            let mid = (low + high) / 2;
            if checkpoints.get(mid).height > height {
                high = mid;
            } else {
                low = mid + 1;
            }
        }

        if low == 1 {
            BigUint::zero()
        } else {
            checkpoints.get(low - 1).amount
        }
    }

    fn write_checkpoint(&self, account: &ManagedAddress, locked: &BigUint) -> u64 {
        let height = self.blockchain().get_block_nonce();
        let checkpoint = Checkpoint {
            height,
            amount: locked.clone(),
        };

        let mut checkpoints = self.voting_checkpoints(account);
        let len = checkpoints.len();
        if len > 0 && checkpoints.get(len).height == height {
            checkpoints.set(len, &checkpoint);
        } else {
            checkpoints.push(&checkpoint);
        }

        height
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getLockedVotingTokens)]
    #[storage_mapper("lockedVotingTokens")]
    fn locked_voting_tokens(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("votingCheckpoints")]
    fn voting_checkpoints(&self, account: &ManagedAddress) -> VecMapper<Checkpoint<Self::Api>>;
}
