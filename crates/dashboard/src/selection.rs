//! Stale-fetch guard for the contract selector.
//!
//! Fetches are cheap to discard, so there is no cancellation: each fetch is
//! stamped with a ticket at issue time, and a response is applied only if
//! its ticket still matches the current selection. This guards against
//! out-of-order resolution when the user switches contracts quickly.

use rentroll_core::ContractId;

/// The invoices view's current contract filter (`None` = all contracts).
#[derive(Debug, Default)]
pub struct ContractSelection {
    active: Option<ContractId>,
    generation: u64,
}

/// Stamp identifying which selection a fetch was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    contract: Option<ContractId>,
    generation: u64,
}

impl ContractSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ContractId> {
        self.active
    }

    /// Switch the selection and obtain the ticket for its fetch.
    ///
    /// Every switch bumps the generation, so re-selecting the same contract
    /// still invalidates responses from the earlier fetch.
    pub fn select(&mut self, contract: Option<ContractId>) -> FetchTicket {
        self.generation += 1;
        self.active = contract;
        self.ticket()
    }

    /// Ticket for the current selection.
    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            contract: self.active,
            generation: self.generation,
        }
    }

    /// Whether a response stamped with `ticket` may still be applied.
    pub fn admits(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation && ticket.contract == self.active
    }
}
