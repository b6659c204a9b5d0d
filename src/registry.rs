multiversx_sc::imports!();

use crate::errors::*;
use crate::memo::{is_valid_proposal_name, MAX_PROPOSAL_NAME_LEN};
use crate::types::{Asset, Proposal, ProposalStatus};
use crate::{events, oracle, params};

#[multiversx_sc::module]
pub trait ProposalRegistryModule:
    params::ParamsModule + oracle::LedgerOracleModule + events::EventsModule
{
    // ========================================================
    // ENDPOINT: create
    // Registers a DRAFT proposal. Balance is checked, not debited.
    // ========================================================

    #[endpoint(create)]
    fn create(
        &self,
        creator: ManagedAddress,
        receiver: ManagedAddress,
        name: ManagedBuffer,
        title: ManagedBuffer,
        detail: ManagedBuffer,
        amount: Asset<Self::Api>,
        url: ManagedBuffer,
    ) {
        self.require_caller_is(&creator);
        let params = self.configured_params();

        require!(self.is_valid_name(&name), ERR_INVALID_PROPOSAL_NAME);
        require!(
            amount.is_denominated_in(params.supported_token()),
            ERR_INVALID_AMOUNT_SYMBOL
        );
        require!(amount.amount > 0u64, ERR_INVALID_AMOUNT);
        require!(self.proposals(&name).is_empty(), ERR_NAME_IN_USE);

        let balance = self.spendable_balance(&creator, params.supported_token());
        require!(
            balance >= params.minimum_balance_to_create_proposals().amount,
            ERR_NOT_ENOUGH_BALANCE
        );

        let created_at = self.now();
        let proposal = Proposal {
            name: name.clone(),
            creator: creator.clone(),
            receiver: receiver.clone(),
            title,
            detail,
            amount,
            url,
            status: ProposalStatus::Draft,
            created_at,
            activated_at: None,
            voting_ends_at: None,
            votes_for: 0,
            votes_against: 0,
        };

        self.proposals(&name).set(&proposal);
        self.proposal_names().push(&name);

        self.proposal_created_event(&name, &creator, &receiver, created_at);
    }

    // ========================================================
    // ENDPOINT: approve
    // Pays out a SUCCEEDED proposal from the treasury.
    // ========================================================

    #[endpoint(approve)]
    fn approve(&self, name: ManagedBuffer) {
        let params = self.configured_params();
        self.require_caller_is(params.approver());

        let mut proposal = self.require_proposal(&name);
        self.require_status(&proposal, ProposalStatus::Succeeded);

        let treasury = self.treasury_balance(params.supported_token());
        require!(
            treasury >= proposal.amount.amount,
            ERR_INSUFFICIENT_TREASURY
        );

        self.advance_status(&mut proposal, ProposalStatus::Completed);
        self.proposals(&name).set(&proposal);

        self.send().direct_esdt(
            &proposal.receiver,
            &proposal.amount.token_id,
            0,
            &proposal.amount.amount,
        );
        self.proposal_completed_event(
            &name,
            &proposal.receiver,
            params.funding_account(),
            &proposal.amount.amount,
        );
    }

    // ========================================================
    // ENDPOINT: reject
    // Approver veto on an ACTIVE or SUCCEEDED proposal.
    // ========================================================

    #[endpoint(reject)]
    fn reject(&self, name: ManagedBuffer) {
        let params = self.configured_params();
        self.require_caller_is(params.approver());

        let mut proposal = self.require_proposal(&name);
        let previous_status = proposal.status;
        self.advance_status(&mut proposal, ProposalStatus::Canceled);
        self.proposals(&name).set(&proposal);

        self.proposal_canceled_event(&name, previous_status);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_proposal(&self, name: &ManagedBuffer) -> Proposal<Self::Api> {
        let mapper = self.proposals(name);
        require!(!mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        mapper.get()
    }

    fn require_status(&self, proposal: &Proposal<Self::Api>, expected: ProposalStatus) {
        require!(proposal.status == expected, ERR_INVALID_PROPOSAL_STATUS);
    }

    /// Every status write goes through here.
    fn advance_status(&self, proposal: &mut Proposal<Self::Api>, next: ProposalStatus) {
        require!(
            proposal.status.can_transition_to(next),
            ERR_INVALID_PROPOSAL_STATUS
        );
        proposal.status = next;
    }

    fn is_valid_name(&self, name: &ManagedBuffer) -> bool {
        if name.len() > MAX_PROPOSAL_NAME_LEN {
            return false;
        }
        let mut bytes = [0u8; MAX_PROPOSAL_NAME_LEN];
        is_valid_proposal_name(name.load_to_byte_array(&mut bytes))
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, name: ManagedBuffer) -> Proposal<Self::Api> {
        self.require_proposal(&name)
    }

    /// Proposals in creation order. `from` is 1-based; 0 is treated as 1.
    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_names().len() as u64;
        if count == 0 || total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for i in start..=end {
            let name = self.proposal_names().get(i as usize);
            result.push(self.proposals(&name).get());
        }
        result
    }

    #[view(getProposalsByPrefix)]
    fn get_proposals_by_prefix(
        &self,
        prefix: ManagedBuffer,
    ) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let prefix_len = prefix.len();

        for name in self.proposal_names().iter() {
            let matches = match name.copy_slice(0, prefix_len) {
                Some(head) => head == prefix,
                None => false,
            };
            if matches {
                result.push(self.proposals(&name).get());
            }
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposals")]
    fn proposals(&self, name: &ManagedBuffer) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("proposalNames")]
    fn proposal_names(&self) -> VecMapper<ManagedBuffer>;
}
