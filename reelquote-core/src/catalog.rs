//! Price catalog: option vocabularies and their price contributions
//!
//! The catalog is immutable configuration keyed by branch (event vs.
//! non-event project types) and category (deliverable, add-on,
//! pre-production service, base rate). All prices are integer USD.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Add-on sentinel: selecting it clears the add-on set instead of
/// adding a literal member.
pub const ADD_ON_NONE: &str = "None";

/// Top-level project category. Chosen on step 1, immutable for the
/// rest of the session (except via reset), and the key that selects
/// the step flow and every option vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Branch {
    #[serde(rename = "event-video")]
    Event,
    Commercial,
    CorporateInterview,
    Product,
    Training,
    Advertising,
}

impl Branch {
    /// All branches, in the order they are offered
    pub const ALL: [Branch; 6] = [
        Branch::Event,
        Branch::Commercial,
        Branch::CorporateInterview,
        Branch::Product,
        Branch::Training,
        Branch::Advertising,
    ];

    /// Event projects price by day and use the shorter step flow
    pub fn is_event(self) -> bool {
        matches!(self, Branch::Event)
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Branch::Event => "Event Video",
            Branch::Commercial => "Commercial",
            Branch::CorporateInterview => "Corporate Interview",
            Branch::Product => "Product",
            Branch::Training => "Training",
            Branch::Advertising => "Advertising",
        }
    }

    /// Short description shown alongside the label
    pub fn description(self) -> &'static str {
        match self {
            Branch::Event => "Capture and showcase live events",
            Branch::Commercial => "Promote products or services",
            Branch::CorporateInterview => "Highlight company leadership and insights",
            Branch::Product => "Showcase product features and benefits",
            Branch::Training => "Create educational content for employees or clients",
            Branch::Advertising => "Create engaging ads for various platforms",
        }
    }
}

/// How the base price for a branch is computed
#[derive(Debug, Clone)]
pub enum BaseRate {
    /// Flat per-day rate multiplied by the number of event days
    PerDay(i64),
    /// Fixed flat fee regardless of selections
    Flat(i64),
    /// Rate matrix keyed by (production type, hours tier); multiplied
    /// by event days on the event branch only
    HourlyMatrix(HashMap<(String, String), i64>),
}

/// Per-branch configuration: vocabularies, price tables, base rate,
/// and contact-field requirements.
#[derive(Debug, Clone)]
pub struct BranchCatalog {
    /// Goal vocabulary offered on the goals step
    pub goals: Vec<String>,
    /// Base price computation for this branch
    pub base_rate: BaseRate,
    /// Deliverable price table. Event branch: keyed by deliverable
    /// name. Other branches: keyed by duration label.
    pub deliverables: HashMap<String, i64>,
    /// Add-on price table
    pub add_ons: HashMap<String, i64>,
    /// Whether the contact form requires a phone number
    pub phone_required: bool,
}

/// Immutable price catalog for every branch plus the shared
/// pre-production service table.
#[derive(Debug, Clone)]
pub struct PriceCatalog {
    branches: HashMap<Branch, BranchCatalog>,
    /// Pre-production services, priced individually
    pre_production: HashMap<String, i64>,
    /// Flat override billed when "select all" pre-production is on
    pre_production_all: i64,
    /// Vocabulary for the `kind` field of deliverable line items
    deliverable_kinds: Vec<String>,
}

impl PriceCatalog {
    /// Build a catalog from per-branch tables
    pub fn new(
        branches: HashMap<Branch, BranchCatalog>,
        pre_production: HashMap<String, i64>,
        pre_production_all: i64,
        deliverable_kinds: Vec<String>,
    ) -> Self {
        Self {
            branches,
            pre_production,
            pre_production_all,
            deliverable_kinds,
        }
    }

    /// The production catalog with the standard vocabularies and rates
    pub fn standard() -> Self {
        let mut branches = HashMap::new();

        branches.insert(
            Branch::Event,
            BranchCatalog {
                goals: strings(&[
                    "Document an Event",
                    "Increase Brand Awareness",
                    "Entertain Viewers",
                    "Showcase Highlights",
                    "Engage Attendees Post-Event",
                    "Create Social Media Recap",
                    "Capture Testimonials",
                ]),
                base_rate: BaseRate::PerDay(3000),
                deliverables: table(&[
                    ("Event Stream", 1500),
                    ("Event Recording", 1250),
                    ("Event Recap Video", 1000),
                    ("Attendee Testimonials", 750),
                    ("Speaker Interviews", 900),
                    ("Social Media Promo", 600),
                ]),
                add_ons: table(&[
                    ("50 HQ Photography Shots", 500),
                    ("100 HQ Photography Shots", 750),
                ]),
                phone_required: false,
            },
        );

        // The five non-event branches share price tables and differ
        // only in goal vocabulary.
        let standard_deliverables = table(&[
            ("30 seconds", 1500),
            ("60 seconds", 2250),
            ("90 seconds", 3000),
            ("2 minutes", 3500),
            ("5 minutes", 5000),
        ]);
        let standard_add_ons = table(&[
            ("On-Screen Talent", 750),
            ("Set Design", 1000),
            ("Teleprompter", 350),
            ("Additional Crew Member", 400),
            ("50 HQ Photography Shots", 500),
            ("100 HQ Photography Shots", 750),
        ]);

        let standard_goals: [(Branch, &[&str]); 5] = [
            (
                Branch::Commercial,
                &[
                    "Increase Brand Awareness",
                    "Drive Sales",
                    "Showcase Product/Service",
                    "Create Social Media Engagement",
                    "Educate About Brand",
                    "Enhance Market Position",
                    "Attract New Customers",
                ],
            ),
            (
                Branch::CorporateInterview,
                &[
                    "Educate About Company",
                    "Showcase Leadership",
                    "Internal Communication",
                    "Share Industry Insights",
                    "Build Trust",
                    "Provide Updates",
                    "Create Web/Social Content",
                ],
            ),
            (
                Branch::Product,
                &[
                    "Showcase Features/Benefits",
                    "Drive Sales",
                    "Educate on Usage",
                    "Create Website Content",
                    "Highlight Reviews",
                    "Build Product Launch Anticipation",
                    "Increase Brand Awareness",
                ],
            ),
            (
                Branch::Training,
                &[
                    "Educate Employees/Clients",
                    "Ensure Compliance",
                    "Enhance Skills",
                    "Provide Onboarding",
                    "Create Training Resources",
                    "Improve Employee Retention",
                    "Track Progress",
                ],
            ),
            (
                Branch::Advertising,
                &[
                    "Increase Brand Awareness",
                    "Drive Sales",
                    "Engage on Social Media",
                    "Promote Offers",
                    "Entertain Viewers",
                    "Highlight USP",
                    "Build Customer Loyalty",
                ],
            ),
        ];

        for (branch, goals) in standard_goals {
            branches.insert(
                branch,
                BranchCatalog {
                    goals: strings(goals),
                    base_rate: BaseRate::Flat(3500),
                    deliverables: standard_deliverables.clone(),
                    add_ons: standard_add_ons.clone(),
                    phone_required: true,
                },
            );
        }

        Self::new(
            branches,
            table(&[
                ("Scriptwriting", 200),
                ("Storyboarding", 200),
                ("Location Scouting", 200),
                ("Talent Casting", 200),
                ("Props and Wardrobe", 200),
            ]),
            750,
            strings(&[
                "Commercial",
                "YouTube Video",
                "Social Media Ad",
                "Corporate Video",
                "Product Demo",
                "Training Video",
                "Testimonial",
                "Explainer Video",
                "Brand Video",
            ]),
        )
    }

    /// Goal vocabulary for a branch (empty slice if unconfigured)
    pub fn goals(&self, branch: Branch) -> &[String] {
        self.branches
            .get(&branch)
            .map(|b| b.goals.as_slice())
            .unwrap_or(&[])
    }

    /// Whether a goal label belongs to the branch vocabulary
    pub fn has_goal(&self, branch: Branch, goal: &str) -> bool {
        self.goals(branch).iter().any(|g| g == goal)
    }

    /// Base rate for a branch
    pub fn base_rate(&self, branch: Branch) -> Option<&BaseRate> {
        self.branches.get(&branch).map(|b| &b.base_rate)
    }

    /// Deliverable labels offered for a branch
    pub fn deliverable_labels(&self, branch: Branch) -> Vec<&str> {
        self.branches
            .get(&branch)
            .map(|b| b.deliverables.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Price of a deliverable (or duration) label; None when absent
    pub fn deliverable_price(&self, branch: Branch, label: &str) -> Option<i64> {
        self.branches
            .get(&branch)
            .and_then(|b| b.deliverables.get(label).copied())
    }

    /// Whether an add-on label belongs to the branch table
    pub fn has_add_on(&self, branch: Branch, label: &str) -> bool {
        self.branches
            .get(&branch)
            .map(|b| b.add_ons.contains_key(label))
            .unwrap_or(false)
    }

    /// Price of an add-on; None when absent
    pub fn add_on_price(&self, branch: Branch, label: &str) -> Option<i64> {
        self.branches
            .get(&branch)
            .and_then(|b| b.add_ons.get(label).copied())
    }

    /// All pre-production service labels
    pub fn pre_production_labels(&self) -> Vec<&str> {
        self.pre_production.keys().map(String::as_str).collect()
    }

    /// Whether a pre-production service exists in the table
    pub fn has_pre_production(&self, label: &str) -> bool {
        self.pre_production.contains_key(label)
    }

    /// Price of one pre-production service; None when absent
    pub fn pre_production_price(&self, label: &str) -> Option<i64> {
        self.pre_production.get(label).copied()
    }

    /// Flat price billed when all pre-production services are selected
    pub fn pre_production_all_price(&self) -> i64 {
        self.pre_production_all
    }

    /// Vocabulary for the `kind` field of deliverable line items
    pub fn deliverable_kinds(&self) -> &[String] {
        &self.deliverable_kinds
    }

    /// Whether a line-item kind belongs to the vocabulary
    pub fn has_deliverable_kind(&self, kind: &str) -> bool {
        self.deliverable_kinds.iter().any(|k| k == kind)
    }

    /// Whether the branch's contact form requires a phone number
    pub fn phone_required(&self, branch: Branch) -> bool {
        self.branches
            .get(&branch)
            .map(|b| b.phone_required)
            .unwrap_or(false)
    }
}

/// The standard production catalog, built once per process and
/// shared by every session created through `QuoteSession::standard()`
pub static STANDARD_CATALOG: Lazy<Arc<PriceCatalog>> =
    Lazy::new(|| Arc::new(PriceCatalog::standard()));

fn table(pairs: &[(&str, i64)]) -> HashMap<String, i64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
