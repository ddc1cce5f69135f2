//! Quote session: one wizard traversal from branch selection to
//! submission or reset
//!
//! The session owns the selection store, the sequencer position, and
//! the last computed estimate. Every mutation routes through it so
//! the estimate is recomputed synchronously after each change, and
//! submission happens exactly once — on the final confirm from the
//! contact form, never implicitly at the summary step.

use crate::catalog::{self, Branch, PriceCatalog};
use crate::gateway::{GatewayClient, QuoteSubmission};
use crate::pricing::{self, PriceEstimate, PriceQuote};
use crate::selections::{Contact, SelectionStore};
use crate::sequencer::{Step, StepSequencer};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// How the estimate is presented to the caller and serialized into
/// the submission payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presentation {
    /// A single number
    SingleTotal,
    /// A ±10% range
    #[default]
    Range,
}

/// One quote session. Exclusively owned by its wizard instance; no
/// state is shared across sessions.
#[derive(Debug, Clone)]
pub struct QuoteSession {
    id: Uuid,
    catalog: Arc<PriceCatalog>,
    store: SelectionStore,
    sequencer: StepSequencer,
    estimate: PriceEstimate,
    presentation: Presentation,
}

impl QuoteSession {
    /// New session with an empty store at step 1
    pub fn new(catalog: Arc<PriceCatalog>) -> Self {
        Self {
            id: Uuid::new_v4(),
            catalog,
            store: SelectionStore::new(),
            sequencer: StepSequencer::new(),
            estimate: PriceEstimate::zero(),
            presentation: Presentation::default(),
        }
    }

    /// New session using the shared standard catalog
    pub fn standard() -> Self {
        Self::new(Arc::clone(&catalog::STANDARD_CATALOG))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    /// The last computed estimate
    pub fn estimate(&self) -> PriceEstimate {
        self.estimate
    }

    /// The estimate in the session's presentation mode
    pub fn quote(&self) -> PriceQuote {
        match self.presentation {
            Presentation::SingleTotal => PriceQuote::Total(self.estimate.total()),
            Presentation::Range => PriceQuote::Range(self.estimate.range()),
        }
    }

    /// Choose single-value or range presentation
    pub fn set_presentation(&mut self, presentation: Presentation) {
        self.presentation = presentation;
    }

    pub fn current_step(&self) -> Step {
        self.sequencer.current_step(&self.store)
    }

    pub fn step_number(&self) -> usize {
        self.sequencer.step_number()
    }

    pub fn total_steps(&self) -> usize {
        self.sequencer.total_steps(&self.store)
    }

    pub fn can_advance(&self) -> bool {
        self.sequencer.can_advance(&self.store, &self.catalog)
    }

    /// Move forward if the current step's gate permits it
    pub fn advance(&mut self) {
        self.sequencer.advance(&self.store, &self.catalog);
    }

    /// Move back one step; entered data is preserved
    pub fn retreat(&mut self) {
        self.sequencer.retreat();
    }

    /// Discard all state: empty store, step 1, zero estimate.
    /// Idempotent. An in-flight submission is not cancelled.
    pub fn reset(&mut self) {
        self.store = SelectionStore::new();
        self.sequencer.reset();
        self.estimate = PriceEstimate::zero();
    }

    // Selection operations. Each applies the immutable-update op to
    // the store and reprices.

    pub fn select_branch(&mut self, branch: Branch) {
        self.apply(|store, _| store.with_branch(branch));
    }

    pub fn toggle_goal(&mut self, goal: &str) {
        self.apply(|store, catalog| store.with_goal_toggled(catalog, goal));
    }

    pub fn set_event_days(&mut self, days: u32) {
        self.apply(|store, _| store.with_event_days(days));
    }

    pub fn set_event_city(&mut self, city: &str) {
        self.apply(|store, _| store.with_event_city(city));
    }

    pub fn set_freeform_details(&mut self, details: &str) {
        self.apply(|store, _| store.with_freeform_details(details));
    }

    pub fn toggle_event_deliverable(&mut self, label: &str) {
        self.apply(|store, catalog| store.with_event_deliverable_toggled(catalog, label));
    }

    pub fn add_line_item(&mut self) {
        self.apply(|store, _| store.with_line_item_added());
    }

    pub fn set_line_item_kind(&mut self, index: usize, kind: &str) {
        self.apply(|store, catalog| store.with_line_item_kind(catalog, index, kind));
    }

    pub fn set_line_item_duration(&mut self, index: usize, duration: &str) {
        self.apply(|store, catalog| store.with_line_item_duration(catalog, index, duration));
    }

    pub fn toggle_add_on(&mut self, label: &str) {
        self.apply(|store, catalog| store.with_add_on_toggled(catalog, label));
    }

    pub fn toggle_pre_production(&mut self, label: &str) {
        self.apply(|store, catalog| store.with_pre_production_toggled(catalog, label));
    }

    pub fn toggle_select_all_pre_production(&mut self) {
        self.apply(|store, catalog| store.with_select_all_pre_production_toggled(catalog));
    }

    pub fn set_crew(&mut self, production_type: &str, hours: &str) {
        self.apply(|store, _| store.with_crew(production_type, hours));
    }

    pub fn set_contact(&mut self, contact: Contact) {
        self.apply(|store, _| store.with_contact(contact));
    }

    /// Snapshot for the submission gateway: the full store plus the
    /// estimate in the current presentation mode
    pub fn submission(&self) -> QuoteSubmission {
        QuoteSubmission {
            selections: self.store.clone(),
            price_estimate: self.quote(),
            session_id: self.id,
            submitted_at: Utc::now(),
        }
    }

    /// Final confirm from the contact form: hand the snapshot to the
    /// gateway (fire-and-forget) and move to the thank-you step.
    /// Returns false without submitting when not on the contact form
    /// or the contact gate is closed. The submission outcome never
    /// blocks or reverses the transition.
    pub fn confirm(&mut self, gateway: &GatewayClient) -> bool {
        if self.current_step() != Step::ContactForm || !self.can_advance() {
            return false;
        }
        gateway.send_detached(self.submission());
        self.advance();
        true
    }

    fn apply<F>(&mut self, op: F)
    where
        F: FnOnce(&SelectionStore, &PriceCatalog) -> SelectionStore,
    {
        self.store = op(&self.store, &self.catalog);
        self.estimate = pricing::estimate(&self.store, &self.catalog);
    }
}
