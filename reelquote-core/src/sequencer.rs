//! Step sequencer: the wizard state machine
//!
//! One table-driven machine covers both branch variants. A static
//! flow table maps the branch to its ordered step list (8 steps for
//! event projects, 9 otherwise — events skip pre-production), and a
//! per-step gate predicate decides whether the forward transition is
//! currently permitted. An incomplete step is not an error: the gate
//! returns false and `advance()` is a silent no-op.

use crate::catalog::{Branch, PriceCatalog};
use crate::selections::SelectionStore;
use serde::Serialize;

/// The wizard steps, in schema order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    SelectBranch,
    SelectGoals,
    EnterDetails,
    SelectDeliverables,
    SelectAddOns,
    SelectPreProduction,
    Summary,
    ContactForm,
    ThankYou,
}

/// Event projects go straight from add-ons to the summary
const EVENT_FLOW: &[Step] = &[
    Step::SelectBranch,
    Step::SelectGoals,
    Step::EnterDetails,
    Step::SelectDeliverables,
    Step::SelectAddOns,
    Step::Summary,
    Step::ContactForm,
    Step::ThankYou,
];

const STANDARD_FLOW: &[Step] = &[
    Step::SelectBranch,
    Step::SelectGoals,
    Step::EnterDetails,
    Step::SelectDeliverables,
    Step::SelectAddOns,
    Step::SelectPreProduction,
    Step::Summary,
    Step::ContactForm,
    Step::ThankYou,
];

/// The ordered step list for a branch. Before the branch is chosen
/// both flows agree on the first step, so the standard flow stands in.
pub fn flow_for(branch: Option<Branch>) -> &'static [Step] {
    match branch {
        Some(branch) if branch.is_event() => EVENT_FLOW,
        _ => STANDARD_FLOW,
    }
}

/// Position within the active flow.
///
/// The sequencer holds only the position; the store supplies the
/// branch (and therefore the flow) plus everything the gate
/// predicates inspect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepSequencer {
    position: usize,
}

impl StepSequencer {
    /// New sequencer at step 1
    pub fn new() -> Self {
        Self::default()
    }

    /// The step at the present position
    pub fn current_step(&self, store: &SelectionStore) -> Step {
        flow_for(store.branch)[self.position]
    }

    /// 1-based step number for display
    pub fn step_number(&self) -> usize {
        self.position + 1
    }

    /// Total steps in the active flow: 8 for event, 9 otherwise
    pub fn total_steps(&self, store: &SelectionStore) -> usize {
        flow_for(store.branch).len()
    }

    /// Whether the forward transition is permitted from the current
    /// step given the selections entered so far
    pub fn can_advance(&self, store: &SelectionStore, catalog: &PriceCatalog) -> bool {
        gate(self.current_step(store), store, catalog)
    }

    /// Move forward one step. Silently does nothing when the gate is
    /// closed or the flow is already at its final step.
    pub fn advance(&mut self, store: &SelectionStore, catalog: &PriceCatalog) {
        if self.can_advance(store, catalog) && self.position + 1 < flow_for(store.branch).len() {
            self.position += 1;
        }
    }

    /// Move back one step; a no-op on the first step. Entered data is
    /// preserved — retreating never clears the store.
    pub fn retreat(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Return to step 1
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

/// Per-step gate predicate, pure over the store
fn gate(step: Step, store: &SelectionStore, catalog: &PriceCatalog) -> bool {
    match step {
        Step::SelectBranch => store.branch.is_some(),
        Step::SelectGoals => !store.goals.is_empty(),
        Step::EnterDetails => match store.branch {
            Some(branch) if branch.is_event() => {
                store.event_days >= 1 && !store.event_city.trim().is_empty()
            }
            _ => true,
        },
        Step::SelectDeliverables => match store.branch {
            Some(branch) if branch.is_event() => !store.event_deliverables.is_empty(),
            _ => store.line_items_ready(),
        },
        Step::ContactForm => {
            let contact = &store.contact;
            let phone_ok = match store.branch {
                Some(branch) => {
                    !catalog.phone_required(branch) || !contact.phone.trim().is_empty()
                }
                None => true,
            };
            !contact.name.trim().is_empty() && !contact.email.trim().is_empty() && phone_ok
        }
        // Add-ons, pre-production, summary, thank-you: never blocked
        Step::SelectAddOns | Step::SelectPreProduction | Step::Summary | Step::ThankYou => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PriceCatalog;
    use crate::selections::Contact;

    fn catalog() -> PriceCatalog {
        PriceCatalog::standard()
    }

    #[test]
    fn test_step_count_per_branch() {
        let seq = StepSequencer::new();
        let event = SelectionStore::new().with_branch(Branch::Event);
        let other = SelectionStore::new().with_branch(Branch::Product);
        assert_eq!(seq.total_steps(&event), 8);
        assert_eq!(seq.total_steps(&other), 9);
    }

    #[test]
    fn test_event_flow_skips_pre_production() {
        assert!(!EVENT_FLOW.contains(&Step::SelectPreProduction));
        assert!(STANDARD_FLOW.contains(&Step::SelectPreProduction));
    }

    #[test]
    fn test_advance_blocked_until_branch_chosen() {
        let catalog = catalog();
        let mut seq = StepSequencer::new();
        let store = SelectionStore::new();

        assert!(!seq.can_advance(&store, &catalog));
        seq.advance(&store, &catalog);
        assert_eq!(seq.step_number(), 1);

        let store = store.with_branch(Branch::Event);
        assert!(seq.can_advance(&store, &catalog));
        seq.advance(&store, &catalog);
        assert_eq!(seq.step_number(), 2);
    }

    #[test]
    fn test_details_gate_requires_city_on_event_branch() {
        let catalog = catalog();
        let mut seq = StepSequencer::new();
        let store = SelectionStore::new()
            .with_branch(Branch::Event)
            .with_goal_toggled(&catalog, "Showcase Highlights")
            .with_event_days(2);

        seq.advance(&store, &catalog);
        seq.advance(&store, &catalog);
        assert_eq!(seq.current_step(&store), Step::EnterDetails);
        assert!(!seq.can_advance(&store, &catalog));

        let store = store.with_event_city("Dallas");
        assert!(seq.can_advance(&store, &catalog));
    }

    #[test]
    fn test_details_gate_open_on_other_branches() {
        let catalog = catalog();
        let mut seq = StepSequencer::new();
        let store = SelectionStore::new()
            .with_branch(Branch::Commercial)
            .with_goal_toggled(&catalog, "Drive Sales");

        seq.advance(&store, &catalog);
        seq.advance(&store, &catalog);
        assert_eq!(seq.current_step(&store), Step::EnterDetails);
        // Freeform details are optional
        assert!(seq.can_advance(&store, &catalog));
    }

    #[test]
    fn test_deliverables_gate_per_branch() {
        let catalog = catalog();
        let seq = StepSequencer { position: 3 };

        let event = SelectionStore::new().with_branch(Branch::Event);
        assert!(!seq.can_advance(&event, &catalog));
        let event = event.with_event_deliverable_toggled(&catalog, "Event Stream");
        assert!(seq.can_advance(&event, &catalog));

        let other = SelectionStore::new().with_branch(Branch::Product);
        assert!(!seq.can_advance(&other, &catalog));
        let other = other
            .with_line_item_kind(&catalog, 0, "Product Demo")
            .with_line_item_duration(&catalog, 0, "2 minutes");
        assert!(seq.can_advance(&other, &catalog));
    }

    #[test]
    fn test_contact_gate_phone_requirement() {
        let catalog = catalog();
        let contact = Contact {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Contact::default()
        };

        // Contact form is step 7 in the event flow, step 8 otherwise
        let event_seq = StepSequencer { position: 6 };
        let event = SelectionStore::new()
            .with_branch(Branch::Event)
            .with_contact(contact.clone());
        assert_eq!(event_seq.current_step(&event), Step::ContactForm);
        assert!(event_seq.can_advance(&event, &catalog));

        let other_seq = StepSequencer { position: 7 };
        let other = SelectionStore::new()
            .with_branch(Branch::Training)
            .with_contact(contact.clone());
        assert_eq!(other_seq.current_step(&other), Step::ContactForm);
        assert!(!other_seq.can_advance(&other, &catalog));

        let other = other.with_contact(Contact {
            phone: "555-0100".to_string(),
            ..contact
        });
        assert!(other_seq.can_advance(&other, &catalog));
    }

    #[test]
    fn test_retreat_stops_at_first_step() {
        let mut seq = StepSequencer::new();
        seq.retreat();
        assert_eq!(seq.step_number(), 1);
    }

    #[test]
    fn test_advance_stops_at_final_step() {
        let catalog = catalog();
        let mut seq = StepSequencer {
            position: EVENT_FLOW.len() - 1,
        };
        let store = SelectionStore::new().with_branch(Branch::Event);
        assert_eq!(seq.current_step(&store), Step::ThankYou);
        seq.advance(&store, &catalog);
        assert_eq!(seq.step_number(), EVENT_FLOW.len());
    }

    #[test]
    fn test_reset_returns_to_step_one() {
        let mut seq = StepSequencer { position: 4 };
        seq.reset();
        assert_eq!(seq.step_number(), 1);
        seq.reset();
        assert_eq!(seq.step_number(), 1);
    }
}
