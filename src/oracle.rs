multiversx_sc::imports!();

use crate::errors::ERR_MISSING_AUTHORITY;

/// Reads the host ledger: token balances of other accounts and the block
/// clock. All time-dependent decisions read `now()` so tests can drive them
/// with a simulated block timestamp.
#[multiversx_sc::module]
pub trait LedgerOracleModule {
    fn spendable_balance(
        &self,
        account: &ManagedAddress,
        token_id: &TokenIdentifier,
    ) -> BigUint {
        self.blockchain().get_esdt_balance(account, token_id, 0)
    }

    fn treasury_balance(&self, token_id: &TokenIdentifier) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token_id.clone()), 0)
    }

    fn now(&self) -> u64 {
        self.blockchain().get_block_timestamp()
    }

    /// Operations that name an acting account must be called by that account.
    fn require_caller_is(&self, account: &ManagedAddress) {
        require!(
            &self.blockchain().get_caller() == account,
            ERR_MISSING_AUTHORITY
        );
    }
}
