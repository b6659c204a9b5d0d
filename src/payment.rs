multiversx_sc::imports!();

use crate::errors::*;
use crate::memo::{decode_memo, TransferRoute, MAX_MEMO_LEN};
use crate::params::ConfiguredParams;
use crate::types::{ProposalStatus, RefundPolicy};
use crate::{events, oracle, params, registry};

#[multiversx_sc::module]
pub trait PaymentRouterModule:
    params::ParamsModule
    + oracle::LedgerOracleModule
    + registry::ProposalRegistryModule
    + events::EventsModule
{
    // ========================================================
    // ENDPOINT: onTransfer
    // Every token transfer to the contract comes through here.
    // The memo decides what the payment is for; a routing
    // failure reverts the transfer.
    // ========================================================

    #[payable("*")]
    #[endpoint(onTransfer)]
    fn on_transfer(&self, memo: ManagedBuffer) {
        let params = self.configured_params();
        let from = self.blockchain().get_caller();
        let payment = self.call_value().egld_or_single_esdt();

        require!(
            payment.token_identifier
                == EgldOrEsdtTokenIdentifier::esdt(params.supported_token().clone()),
            ERR_INVALID_QUANTITY_SYMBOL
        );

        let mut memo_bytes = [0u8; MAX_MEMO_LEN];
        let route = if memo.len() > MAX_MEMO_LEN {
            TransferRoute::Malformed
        } else {
            decode_memo(memo.load_to_byte_array(&mut memo_bytes))
        };

        match route {
            TransferRoute::Activation(name) => {
                let name = ManagedBuffer::new_from_bytes(name);
                self.route_activation(&params, &from, &name, &payment.amount);
            }
            TransferRoute::Unrelated(_) => {
                self.deposit_received_event(&from, &payment.token_identifier, &payment.amount);
            }
            TransferRoute::Malformed => sc_panic!(ERR_INVALID_MEMO),
        }
    }

    // ========================================================
    // INTERNAL: activation — the only write path into ACTIVE
    // ========================================================

    fn route_activation(
        &self,
        params: &ConfiguredParams<Self::Api>,
        from: &ManagedAddress,
        name: &ManagedBuffer,
        amount: &BigUint,
    ) {
        let mut proposal = self.require_proposal(name);

        if proposal.status != ProposalStatus::Draft {
            match self.current_policies().refunding {
                RefundPolicy::Reject => sc_panic!(ERR_INVALID_PROPOSAL_STATUS),
                RefundPolicy::AcceptAsDeposit => {
                    self.deposit_received_event(
                        from,
                        &EgldOrEsdtTokenIdentifier::esdt(params.supported_token().clone()),
                        amount,
                    );
                    return;
                }
            }
        }

        require!(
            amount == &params.proposal_cost().amount,
            ERR_INVALID_QUANTITY_AMOUNT
        );

        let activated_at = self.now();
        let voting_ends_at = activated_at + params.voting_period_seconds();

        self.advance_status(&mut proposal, ProposalStatus::Active);
        proposal.activated_at = Some(activated_at);
        proposal.voting_ends_at = Some(voting_ends_at);
        self.proposals(name).set(&proposal);

        self.proposal_activated_event(name, from, activated_at, voting_ends_at);
    }
}
