multiversx_sc::imports!();

use crate::access_control;
use crate::destinations::{self, TOTAL_SHARES};
use crate::errors::{ERR_INSUFFICIENT_BALANCE, ERR_INVALID_TOKEN, ERR_NO_DESTINATIONS};

/// Proportional payout of accumulated balances across the destination list.
///
/// Each destination receives `floor(amount * share / 100)`. The truncation
/// remainder (less than one unit per destination) stays in the contract.
/// Recipients are trusted: a failed transfer aborts the whole distribution.
#[multiversx_sc::module]
pub trait DistributionModule:
    access_control::AccessControlModule + destinations::DestinationsModule
{
    #[endpoint(distributeNative)]
    fn distribute_native(&self, amount: BigUint) {
        self.require_manager();
        self.distribute(EgldOrEsdtTokenIdentifier::egld(), amount);
    }

    #[endpoint(distributeToken)]
    fn distribute_token(&self, token: TokenIdentifier, amount: BigUint) {
        self.require_manager();
        require!(token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        self.distribute(EgldOrEsdtTokenIdentifier::esdt(token), amount);
    }

    /// Payouts are settled and logged before the first transfer leaves.
    /// Callers have already passed the manager check.
    fn distribute(&self, token: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        require!(!self.destinations().is_empty(), ERR_NO_DESTINATIONS);

        let balance = self.blockchain().get_sc_balance(&token, 0);
        require!(amount <= balance, ERR_INSUFFICIENT_BALANCE);

        let mut recipients = ManagedVec::<Self::Api, ManagedAddress>::new();
        let mut payouts = ManagedVec::<Self::Api, BigUint>::new();
        for destination in self.destinations().iter() {
            let payout = &amount * destination.share / TOTAL_SHARES;
            recipients.push(destination.recipient);
            payouts.push(payout);
        }

        self.distributed_event(&token, &amount, &payouts);

        for (recipient, payout) in recipients.iter().zip(payouts.iter()) {
            self.send().direct_non_zero(&recipient, &token, 0, &payout);
        }
    }

    #[event("distributed")]
    fn distributed_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        payouts: &ManagedVec<BigUint>,
    );
}
