//! Selection store: everything the user has chosen so far
//!
//! `SelectionStore` is pure data. Every mutation operation follows an
//! immutable-update discipline: it takes `&self`, validates against
//! the catalog vocabulary where one applies, and returns a new store.
//! Operations that would violate an invariant (unknown label, branch
//! already fixed, out-of-range index) return the store unchanged.

use crate::catalog::{Branch, PriceCatalog, ADD_ON_NONE};
use serde::Serialize;
use std::collections::BTreeSet;

/// One deliverable line item on the non-event branches. Both fields
/// start unset; a line item only contributes to price and validation
/// once both are chosen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineItem {
    /// Deliverable kind (e.g. "Commercial", "Explainer Video")
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Duration label keying the price table (e.g. "60 seconds")
    pub duration: Option<String>,
}

impl LineItem {
    /// Both kind and duration chosen
    pub fn is_complete(&self) -> bool {
        self.kind.is_some() && self.duration.is_some()
    }
}

/// Crew specification for catalogs that price from an hourly matrix
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewSpec {
    pub production_type: String,
    pub hours: String,
}

/// Contact details collected on the terminal form step
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    #[serde(rename = "additionalInfo")]
    pub notes: String,
}

/// The full record of user selections for one quote session.
///
/// Field wire names match the submission payload contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionStore {
    /// Project branch; unset only before step 1 completes
    #[serde(rename = "projectType")]
    pub branch: Option<Branch>,
    #[serde(rename = "selectedGoals")]
    pub goals: BTreeSet<String>,
    /// Freeform details, used on the non-event branches
    #[serde(rename = "projectDetails")]
    pub freeform_details: String,
    /// Days filmed; only meaningful on the event branch
    pub event_days: u32,
    pub event_city: String,
    pub event_deliverables: BTreeSet<String>,
    #[serde(rename = "otherDeliverables")]
    pub line_items: Vec<LineItem>,
    pub add_ons: BTreeSet<String>,
    #[serde(rename = "preProductionServices")]
    pub pre_production: BTreeSet<String>,
    pub select_all_pre_production: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew: Option<CrewSpec>,
    #[serde(rename = "quoteRequest")]
    pub contact: Contact,
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self {
            branch: None,
            goals: BTreeSet::new(),
            freeform_details: String::new(),
            event_days: 1,
            event_city: String::new(),
            event_deliverables: BTreeSet::new(),
            // One blank row so the deliverables step starts with an
            // editable entry
            line_items: vec![LineItem::default()],
            add_ons: BTreeSet::new(),
            pre_production: BTreeSet::new(),
            select_all_pre_production: false,
            crew: None,
            contact: Contact::default(),
        }
    }
}

impl SelectionStore {
    /// Empty store for a fresh session
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the branch. The branch is immutable once chosen: a second
    /// call with a different branch is a no-op.
    #[must_use]
    pub fn with_branch(&self, branch: Branch) -> Self {
        match self.branch {
            Some(existing) if existing != branch => self.clone(),
            _ => Self {
                branch: Some(branch),
                ..self.clone()
            },
        }
    }

    /// Toggle a goal. Goals outside the active branch vocabulary are
    /// ignored, as is any goal before the branch is set.
    #[must_use]
    pub fn with_goal_toggled(&self, catalog: &PriceCatalog, goal: &str) -> Self {
        let Some(branch) = self.branch else {
            return self.clone();
        };
        if !catalog.has_goal(branch, goal) {
            return self.clone();
        }
        let mut next = self.clone();
        if !next.goals.remove(goal) {
            next.goals.insert(goal.to_string());
        }
        next
    }

    /// Set the number of event days (floored at 1)
    #[must_use]
    pub fn with_event_days(&self, days: u32) -> Self {
        Self {
            event_days: days.max(1),
            ..self.clone()
        }
    }

    /// Set the event city
    #[must_use]
    pub fn with_event_city(&self, city: impl Into<String>) -> Self {
        Self {
            event_city: city.into(),
            ..self.clone()
        }
    }

    /// Set the freeform project details
    #[must_use]
    pub fn with_freeform_details(&self, details: impl Into<String>) -> Self {
        Self {
            freeform_details: details.into(),
            ..self.clone()
        }
    }

    /// Toggle an event deliverable; unknown labels are ignored
    #[must_use]
    pub fn with_event_deliverable_toggled(&self, catalog: &PriceCatalog, label: &str) -> Self {
        let Some(branch) = self.branch else {
            return self.clone();
        };
        if catalog.deliverable_price(branch, label).is_none() {
            return self.clone();
        }
        let mut next = self.clone();
        if !next.event_deliverables.remove(label) {
            next.event_deliverables.insert(label.to_string());
        }
        next
    }

    /// Append a blank deliverable line item
    #[must_use]
    pub fn with_line_item_added(&self) -> Self {
        let mut next = self.clone();
        next.line_items.push(LineItem::default());
        next
    }

    /// Set the kind of a line item. Out-of-range indexes and kinds
    /// outside the vocabulary are ignored.
    #[must_use]
    pub fn with_line_item_kind(&self, catalog: &PriceCatalog, index: usize, kind: &str) -> Self {
        if index >= self.line_items.len() || !catalog.has_deliverable_kind(kind) {
            return self.clone();
        }
        let mut next = self.clone();
        next.line_items[index].kind = Some(kind.to_string());
        next
    }

    /// Set the duration of a line item. Out-of-range indexes and
    /// durations absent from the branch price table are ignored.
    #[must_use]
    pub fn with_line_item_duration(
        &self,
        catalog: &PriceCatalog,
        index: usize,
        duration: &str,
    ) -> Self {
        let Some(branch) = self.branch else {
            return self.clone();
        };
        if index >= self.line_items.len()
            || catalog.deliverable_price(branch, duration).is_none()
        {
            return self.clone();
        }
        let mut next = self.clone();
        next.line_items[index].duration = Some(duration.to_string());
        next
    }

    /// Toggle an add-on. The "None" sentinel clears the whole set;
    /// labels outside the branch table are ignored.
    #[must_use]
    pub fn with_add_on_toggled(&self, catalog: &PriceCatalog, label: &str) -> Self {
        let Some(branch) = self.branch else {
            return self.clone();
        };
        if label == ADD_ON_NONE {
            let mut next = self.clone();
            next.add_ons.clear();
            return next;
        }
        if !catalog.has_add_on(branch, label) {
            return self.clone();
        }
        let mut next = self.clone();
        if !next.add_ons.remove(label) {
            next.add_ons.insert(label.to_string());
        }
        next
    }

    /// Toggle one pre-production service. Toggling an individual
    /// service while "select all" is on first clears the flag, so the
    /// resulting set contains everything except the toggled service.
    #[must_use]
    pub fn with_pre_production_toggled(&self, catalog: &PriceCatalog, label: &str) -> Self {
        if !catalog.has_pre_production(label) {
            return self.clone();
        }
        let mut next = self.clone();
        next.select_all_pre_production = false;
        if !next.pre_production.remove(label) {
            next.pre_production.insert(label.to_string());
        }
        next
    }

    /// Toggle the "select all" pre-production flag. Turning it on
    /// fills the service set; turning it off empties it.
    #[must_use]
    pub fn with_select_all_pre_production_toggled(&self, catalog: &PriceCatalog) -> Self {
        let mut next = self.clone();
        next.select_all_pre_production = !self.select_all_pre_production;
        next.pre_production = if next.select_all_pre_production {
            catalog
                .pre_production_labels()
                .into_iter()
                .map(str::to_string)
                .collect()
        } else {
            BTreeSet::new()
        };
        next
    }

    /// Set the crew specification used by hourly-matrix catalogs
    #[must_use]
    pub fn with_crew(&self, production_type: impl Into<String>, hours: impl Into<String>) -> Self {
        Self {
            crew: Some(CrewSpec {
                production_type: production_type.into(),
                hours: hours.into(),
            }),
            ..self.clone()
        }
    }

    /// Replace the contact record
    #[must_use]
    pub fn with_contact(&self, contact: Contact) -> Self {
        Self {
            contact,
            ..self.clone()
        }
    }

    /// At least one line item exists and every line item is fully
    /// specified (an incomplete trailing row blocks progress)
    pub fn line_items_ready(&self) -> bool {
        !self.line_items.is_empty() && self.line_items.iter().all(LineItem::is_complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PriceCatalog;

    fn catalog() -> PriceCatalog {
        PriceCatalog::standard()
    }

    #[test]
    fn test_branch_is_immutable_once_set() {
        let store = SelectionStore::new().with_branch(Branch::Event);
        let unchanged = store.with_branch(Branch::Commercial);
        assert_eq!(unchanged.branch, Some(Branch::Event));

        // Re-setting the same branch is fine
        let same = store.with_branch(Branch::Event);
        assert_eq!(same.branch, Some(Branch::Event));
    }

    #[test]
    fn test_goal_toggle_respects_vocabulary() {
        let catalog = catalog();
        let store = SelectionStore::new().with_branch(Branch::Event);

        let store = store.with_goal_toggled(&catalog, "Document an Event");
        assert!(store.goals.contains("Document an Event"));

        // Commercial-branch goal is not in the event vocabulary
        let store = store.with_goal_toggled(&catalog, "Drive Sales");
        assert!(!store.goals.contains("Drive Sales"));

        // Toggling again removes
        let store = store.with_goal_toggled(&catalog, "Document an Event");
        assert!(store.goals.is_empty());
    }

    #[test]
    fn test_goal_toggle_before_branch_is_noop() {
        let catalog = catalog();
        let store = SelectionStore::new().with_goal_toggled(&catalog, "Drive Sales");
        assert!(store.goals.is_empty());
    }

    #[test]
    fn test_event_days_floored_at_one() {
        let store = SelectionStore::new().with_event_days(0);
        assert_eq!(store.event_days, 1);
    }

    #[test]
    fn test_add_on_none_sentinel_clears() {
        let catalog = catalog();
        let store = SelectionStore::new()
            .with_branch(Branch::Commercial)
            .with_add_on_toggled(&catalog, "Set Design")
            .with_add_on_toggled(&catalog, "Teleprompter");
        assert_eq!(store.add_ons.len(), 2);

        let store = store.with_add_on_toggled(&catalog, ADD_ON_NONE);
        assert!(store.add_ons.is_empty());
        // The sentinel itself is never stored
        assert!(!store.add_ons.contains(ADD_ON_NONE));
    }

    #[test]
    fn test_select_all_fills_and_clears_services() {
        let catalog = catalog();
        let store = SelectionStore::new()
            .with_branch(Branch::Product)
            .with_select_all_pre_production_toggled(&catalog);
        assert!(store.select_all_pre_production);
        assert_eq!(store.pre_production.len(), catalog.pre_production_labels().len());

        let store = store.with_select_all_pre_production_toggled(&catalog);
        assert!(!store.select_all_pre_production);
        assert!(store.pre_production.is_empty());
    }

    #[test]
    fn test_individual_toggle_clears_select_all() {
        let catalog = catalog();
        let store = SelectionStore::new()
            .with_branch(Branch::Product)
            .with_select_all_pre_production_toggled(&catalog)
            .with_pre_production_toggled(&catalog, "Scriptwriting");
        assert!(!store.select_all_pre_production);
        assert!(!store.pre_production.contains("Scriptwriting"));
        assert!(store.pre_production.contains("Storyboarding"));
    }

    #[test]
    fn test_line_items_ready_requires_every_row_complete() {
        let catalog = catalog();
        let store = SelectionStore::new().with_branch(Branch::Commercial);
        assert!(!store.line_items_ready());

        let store = store
            .with_line_item_kind(&catalog, 0, "Commercial")
            .with_line_item_duration(&catalog, 0, "60 seconds");
        assert!(store.line_items_ready());

        // A blank second row blocks again
        let store = store.with_line_item_added();
        assert!(!store.line_items_ready());
    }

    #[test]
    fn test_line_item_index_out_of_range_is_noop() {
        let catalog = catalog();
        let store = SelectionStore::new().with_branch(Branch::Commercial);
        let unchanged = store.with_line_item_kind(&catalog, 5, "Commercial");
        assert_eq!(store, unchanged);
    }

    #[test]
    fn test_payload_field_names() {
        let store = SelectionStore::new().with_branch(Branch::Event);
        let value = serde_json::to_value(&store).unwrap();
        assert_eq!(value["projectType"], "event-video");
        assert!(value["selectedGoals"].is_array());
        assert!(value["otherDeliverables"].is_array());
        assert!(value["quoteRequest"].is_object());
        assert_eq!(value["selectAllPreProduction"], false);
    }
}
