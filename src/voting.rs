multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{ProposalStatus, RevotePolicy, Vote};
use crate::{events, oracle, params, registry};

#[multiversx_sc::module]
pub trait VotingLedgerModule:
    params::ParamsModule
    + oracle::LedgerOracleModule
    + registry::ProposalRegistryModule
    + events::EventsModule
{
    #[endpoint(voteFor)]
    fn vote_for(&self, voter: ManagedAddress, name: ManagedBuffer) {
        self.require_caller_is(&voter);
        self.save_vote(voter, name, true);
    }

    #[endpoint(voteAgainst)]
    fn vote_against(&self, voter: ManagedAddress, name: ManagedBuffer) {
        self.require_caller_is(&voter);
        self.save_vote(voter, name, false);
    }

    // ========================================================
    // INTERNAL: one row per (proposal, voter)
    // Balance gates eligibility only; every vote weighs 1.
    // ========================================================

    fn save_vote(&self, voter: ManagedAddress, name: ManagedBuffer, is_for: bool) {
        let params = self.configured_params();

        let proposal = self.require_proposal(&name);
        self.require_status(&proposal, ProposalStatus::Active);

        let balance = self.spendable_balance(&voter, params.supported_token());
        require!(balance > 0u64, ERR_NOT_ENOUGH_BALANCE);

        let now = self.now();
        let voting_ends_at = proposal.voting_ends_at.unwrap_or_default();
        require!(now < voting_ends_at, ERR_VOTING_PERIOD_OVER);

        let mut votes = self.votes(&name);
        if votes.contains_key(&voter) {
            require!(
                self.current_policies().revote == RevotePolicy::Overwrite,
                ERR_ALREADY_VOTED
            );
        }
        votes.insert(voter.clone(), Vote { is_for, cast_at: now });

        self.vote_cast_event(&name, &voter, is_for, now);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getVote)]
    fn get_vote(&self, name: ManagedBuffer, voter: ManagedAddress) -> OptionalValue<Vote> {
        self.votes(&name).get(&voter).into()
    }

    #[view(getVotes)]
    fn get_votes(&self, name: ManagedBuffer) -> MultiValueEncoded<MultiValue2<ManagedAddress, Vote>> {
        let mut result = MultiValueEncoded::new();
        for (voter, vote) in self.votes(&name).iter() {
            result.push((voter, vote).into());
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("votes")]
    fn votes(&self, name: &ManagedBuffer) -> MapMapper<ManagedAddress, Vote>;
}
