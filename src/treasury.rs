multiversx_sc::imports!();

use crate::{
    config::GLOBAL_BUDGET_CONSTRAINT,
    errors::{ERR_WRONG_PAYMENT_TOKEN, ERR_ZERO_AMOUNT},
    math,
};

/// Treasury ledger. `treasury` holds unallocated funds; each period's
/// earmark lives on its `DistributionPeriod` until it is either paid out
/// by execution or reconciled back.
#[multiversx_sc::module]
pub trait TreasuryModule:
    crate::config::ConfigModule + crate::state::StateModule + crate::events::EventsModule
{
    #[endpoint(fundTreasury)]
    #[payable("*")]
    fn fund_treasury(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.fund_token().get(),
            ERR_WRONG_PAYMENT_TOKEN
        );
        require!(payment.amount > 0u64, ERR_ZERO_AMOUNT);

        self.treasury().update(|treasury| *treasury += &payment.amount);
        self.treasury_funded_event(&caller, &payment.amount);
    }

    /// Moves the period budget out of the unallocated treasury.
    /// Returns `(treasury_at_start, funds_available)`.
    fn earmark_period_funds(&self) -> (BigUint, BigUint) {
        let treasury = self.treasury().get();
        let funds_available = math::wmul(&treasury, &BigUint::from(GLOBAL_BUDGET_CONSTRAINT));
        self.treasury().set(&treasury - &funds_available);

        (treasury, funds_available)
    }

    /// Returns unspent earmarks to the treasury, oldest period first.
    /// The period being closed is never reconciled here: its slate stays
    /// executable until the period after the next one starts. The walk also
    /// stops at the first period whose challenge stage is still open.
    fn reconcile_surplus(&self, height: u64) {
        let current_id = self.current_distribution_id().get();
        let mut distribution_id = core::cmp::max(self.next_surplus_check().get(), 1);

        while distribution_id < current_id {
            let mut period = self.distribution_periods(distribution_id).get();
            if height <= period.challenge_stage_end() {
                break;
            }

            let surplus = &period.funds_available - &period.executed_amount;
            self.treasury().update(|treasury| *treasury += &surplus);
            period.surplus_reconciled = true;
            self.distribution_periods(distribution_id).set(&period);

            self.surplus_reconciled_event(distribution_id, &surplus);
            distribution_id += 1;
        }

        self.next_surplus_check().set(distribution_id);
    }
}
