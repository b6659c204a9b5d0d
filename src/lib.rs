#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod memo;
pub mod oracle;
pub mod params;
pub mod payment;
pub mod registry;
pub mod resolver;
pub mod tally;
pub mod types;
pub mod voting;

use errors::ERR_INVALID_TOKEN;

// ============================================================
// Contract
//
// Lifecycle: DRAFT → ACTIVE → {SUCCEEDED | DEFEATED}
//            SUCCEEDED → COMPLETED, {ACTIVE | SUCCEEDED} → CANCELED
//
// setParams configures, create registers a draft, a transfer
// memoed `payment:<name>` activates it, voteFor/voteAgainst
// record votes, and countVotes resolves it after the window.
// ============================================================

#[multiversx_sc::contract]
pub trait CommunityGovernance:
    params::ParamsModule
    + oracle::LedgerOracleModule
    + registry::ProposalRegistryModule
    + payment::PaymentRouterModule
    + voting::VotingLedgerModule
    + resolver::TallyResolverModule
    + events::EventsModule
{
    #[init]
    fn init(&self, supported_token: TokenIdentifier) {
        require!(
            supported_token.is_valid_esdt_identifier(),
            ERR_INVALID_TOKEN
        );
        self.supported_token().set(&supported_token);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[view(getTreasuryBalance)]
    fn get_treasury_balance(&self) -> BigUint {
        let token_id = self.supported_token().get();
        self.treasury_balance(&token_id)
    }
}
