multiversx_sc::imports!();

use crate::errors::*;
use crate::tally::{Outcome, Tally};
use crate::types::ProposalStatus;
use crate::{events, oracle, params, registry, voting};

#[multiversx_sc::module]
pub trait TallyResolverModule:
    params::ParamsModule
    + oracle::LedgerOracleModule
    + registry::ProposalRegistryModule
    + voting::VotingLedgerModule
    + events::EventsModule
{
    // ========================================================
    // ENDPOINT: countVotes
    // Anyone may call once the voting window has closed.
    // ========================================================

    #[endpoint(countVotes)]
    fn count_votes(&self, name: ManagedBuffer) {
        let params = self.configured_params();

        let mut proposal = self.require_proposal(&name);
        self.require_status(&proposal, ProposalStatus::Active);

        let voting_ends_at = proposal.voting_ends_at.unwrap_or_default();
        require!(self.now() >= voting_ends_at, ERR_VOTING_PERIOD_NOT_OVER);

        let tally = self.tally_of(&name);
        let rule = self.current_policies().resolution;
        let next = match rule.resolve(&tally, params.vote_threshold()) {
            Outcome::Succeeded => ProposalStatus::Succeeded,
            Outcome::Defeated => ProposalStatus::Defeated,
        };

        self.advance_status(&mut proposal, next);
        proposal.votes_for = tally.votes_for;
        proposal.votes_against = tally.votes_against;
        self.proposals(&name).set(&proposal);

        self.proposal_resolved_event(&name, next, tally.votes_for, tally.votes_against);
    }

    fn tally_of(&self, name: &ManagedBuffer) -> Tally {
        self.votes(name).values().map(|vote| vote.is_for).collect()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Current counts of an ACTIVE proposal. Nothing is written.
    #[view(checkVotes)]
    fn check_votes(&self, name: ManagedBuffer) -> MultiValue2<u64, u64> {
        let proposal = self.require_proposal(&name);
        self.require_status(&proposal, ProposalStatus::Active);

        let tally = self.tally_of(&name);
        (tally.votes_for, tally.votes_against).into()
    }
}
