multiversx_sc::imports!();

use crate::types::{Policies, ProposalStatus};

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("paramsUpdated")]
    fn params_updated_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] vote_threshold: u64,
        #[indexed] voting_days: u64,
        approver: &ManagedAddress,
    );

    #[event("policiesUpdated")]
    fn policies_updated_event(&self, #[indexed] caller: &ManagedAddress, policies: &Policies);

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] creator: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        created_at: u64,
    );

    #[event("proposalActivated")]
    fn proposal_activated_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] payer: &ManagedAddress,
        #[indexed] activated_at: u64,
        voting_ends_at: u64,
    );

    #[event("depositReceived")]
    fn deposit_received_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] token_id: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] voter: &ManagedAddress,
        #[indexed] is_for: bool,
        cast_at: u64,
    );

    #[event("proposalResolved")]
    fn proposal_resolved_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] status: ProposalStatus,
        #[indexed] votes_for: u64,
        votes_against: u64,
    );

    #[event("proposalCompleted")]
    fn proposal_completed_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] funding_account: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("proposalCanceled")]
    fn proposal_canceled_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] previous_status: ProposalStatus,
    );
}
