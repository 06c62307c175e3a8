//! Event catalog.
//!
//! The catalog is the single source of fees and display order. Everything
//! derived from a selection (payload, total, summary, confirmation) is walked
//! in catalog order, never in selection order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Stable slug identifying an event (e.g. `paper-pres`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Create an event id from a slug.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// The slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Event category. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Technical events
    Technical,
    /// Non-technical events
    NonTechnical,
    /// Workshops
    Workshop,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::Technical, Self::NonTechnical, Self::Workshop];

    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::NonTechnical => "non-technical",
            Self::Workshop => "workshop",
        }
    }

    /// Group heading.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Technical => "Technical Events",
            Self::NonTechnical => "Non-Technical Events",
            Self::Workshop => "Workshops",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Category filter of the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every category
    #[default]
    All,
    /// A single category
    Only(Category),
}

impl CategoryFilter {
    /// Whether events of `category` pass the filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    /// Parses `all` or a category wire name.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// A selectable fest event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestEvent {
    /// Slug
    pub id: EventId,
    /// Display name (upper case by convention)
    pub name: String,
    /// Category
    pub category: Category,
    /// Fee in whole rupees
    pub fee: u32,
    /// Fee as displayed on the card
    pub fee_label: String,
}

impl FestEvent {
    /// Create an event whose label is just the fee.
    #[must_use]
    pub fn new(id: &str, name: &str, category: Category, fee: u32) -> Self {
        Self {
            id: EventId::new(id),
            name: name.to_string(),
            category,
            fee,
            fee_label: format!("₹{fee}"),
        }
    }

    /// Override the displayed fee label.
    #[must_use]
    pub fn with_fee_label(mut self, label: impl Into<String>) -> Self {
        self.fee_label = label.into();
        self
    }

    /// Case-insensitive substring match on the name.
    ///
    /// `query` must already be lowercase.
    fn matches_query(&self, query: &str) -> bool {
        query.is_empty() || self.name.to_lowercase().contains(query)
    }
}

/// One rendered card of the catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCard {
    /// Event slug
    pub id: EventId,
    /// Display name
    pub name: String,
    /// Displayed fee
    pub fee_label: String,
    /// Whether the card shows the selected check mark
    pub selected: bool,
}

/// A visible category group. Groups without visible cards are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    /// Category
    pub category: Category,
    /// Group heading
    pub heading: &'static str,
    /// Visible cards in catalog order
    pub cards: Vec<EventCard>,
}

/// The list of events on offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    events: Vec<FestEvent>,
}

impl Catalog {
    /// Build a catalog. Order of `events` is display order within a category.
    #[must_use]
    pub const fn new(events: Vec<FestEvent>) -> Self {
        Self { events }
    }

    /// The fest's event line-up.
    #[must_use]
    pub fn fest_2026() -> Self {
        use Category::{NonTechnical, Technical, Workshop};

        Self::new(vec![
            FestEvent::new("paper-pres", "PAPER PRESENTATION", Technical, 300)
                .with_fee_label("SOLO: ₹300 | TEAM: ₹300"),
            FestEvent::new("project-expo", "PROJECT EXPO", Technical, 300)
                .with_fee_label("₹300 (Early Bird)"),
            FestEvent::new("ipl-auction", "IPL AUCTION", NonTechnical, 200),
            FestEvent::new("treasure-hunt", "TREASURE HUNT", NonTechnical, 200),
            FestEvent::new("snakes-ladder", "SNAKES & LADDER", NonTechnical, 200),
            FestEvent::new("carrom", "CARROM", NonTechnical, 150),
            FestEvent::new("free-fire", "FREE FIRE", NonTechnical, 200),
            FestEvent::new("chess", "CHESS", NonTechnical, 100),
            FestEvent::new("workshop-ai", "AI & ML WORKSHOP", Workshop, 250),
            FestEvent::new("workshop-cyber", "CYBERSECURITY BASICS", Workshop, 200),
        ])
    }

    /// All events in catalog order.
    #[must_use]
    pub fn events(&self) -> &[FestEvent] {
        &self.events
    }

    /// Look up an event by id.
    #[must_use]
    pub fn get(&self, id: &EventId) -> Option<&FestEvent> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Whether the catalog offers `id`.
    #[must_use]
    pub fn contains(&self, id: &EventId) -> bool {
        self.get(id).is_some()
    }

    /// Look up an event by its display name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&FestEvent> {
        self.events.iter().find(|e| e.name == name)
    }

    /// Selected events in catalog order. Ids not in the catalog are skipped.
    pub fn selected<'a>(
        &'a self,
        selection: &'a BTreeSet<EventId>,
    ) -> impl Iterator<Item = &'a FestEvent> + 'a {
        self.events.iter().filter(move |e| selection.contains(&e.id))
    }

    /// Sum of the fees of the selected events.
    #[must_use]
    pub fn total(&self, selection: &BTreeSet<EventId>) -> u32 {
        self.selected(selection).map(|e| e.fee).sum()
    }

    /// Sum of the fees of events given by display name.
    ///
    /// Unknown names count as zero. Used by the endpoint to cross-check the
    /// total a client submitted.
    pub fn price_of<'n>(&self, names: impl IntoIterator<Item = &'n str>) -> u32 {
        names
            .into_iter()
            .filter_map(|name| self.find_by_name(name))
            .map(|e| e.fee)
            .sum()
    }

    /// Visible groups for the given filter and search text.
    #[must_use]
    pub fn view(
        &self,
        filter: CategoryFilter,
        search: &str,
        selection: &BTreeSet<EventId>,
    ) -> Vec<CategoryGroup> {
        let query = search.to_lowercase();

        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let cards: Vec<EventCard> = self
                    .events
                    .iter()
                    .filter(|e| e.category == category && filter.matches(category))
                    .filter(|e| e.matches_query(&query))
                    .map(|e| EventCard {
                        id: e.id.clone(),
                        name: e.name.clone(),
                        fee_label: e.fee_label.clone(),
                        selected: selection.contains(&e.id),
                    })
                    .collect();

                (!cards.is_empty()).then(|| CategoryGroup {
                    category,
                    heading: category.heading(),
                    cards,
                })
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::fest_2026()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(slugs: &[&str]) -> BTreeSet<EventId> {
        slugs.iter().map(|s| EventId::new(*s)).collect()
    }

    #[test]
    fn test_default_catalog_shape() {
        let catalog = Catalog::default();
        assert_eq!(catalog.events().len(), 10);
        assert_eq!(
            catalog.get(&EventId::new("project-expo")).unwrap().fee_label,
            "₹300 (Early Bird)"
        );
        assert_eq!(catalog.get(&EventId::new("carrom")).unwrap().fee_label, "₹150");
    }

    #[test]
    fn test_selected_follows_catalog_order() {
        let catalog = Catalog::default();
        let selection = ids(&["workshop-ai", "chess", "paper-pres"]);

        let names: Vec<&str> = catalog.selected(&selection).map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["PAPER PRESENTATION", "CHESS", "AI & ML WORKSHOP"]);
        assert_eq!(catalog.total(&selection), 650);
    }

    #[test]
    fn test_unknown_ids_do_not_count() {
        let catalog = Catalog::default();
        assert_eq!(catalog.total(&ids(&["chess", "kabaddi"])), 100);
    }

    #[test]
    fn test_view_search_is_case_insensitive_and_hides_empty_groups() {
        let catalog = Catalog::default();
        let view = catalog.view(CategoryFilter::All, "ShOp", &BTreeSet::new());

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].category, Category::Workshop);
        assert_eq!(view[0].cards.len(), 1);
        assert_eq!(view[0].cards[0].name, "AI & ML WORKSHOP");
    }

    #[test]
    fn test_view_category_filter_and_selected_flag() {
        let catalog = Catalog::default();
        let view = catalog.view(
            CategoryFilter::Only(Category::Technical),
            "",
            &ids(&["project-expo"]),
        );

        assert_eq!(view.len(), 1);
        let flags: Vec<bool> = view[0].cards.iter().map(|c| c.selected).collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn test_view_with_no_matches_is_empty() {
        let catalog = Catalog::default();
        assert!(catalog.view(CategoryFilter::All, "quidditch", &BTreeSet::new()).is_empty());
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "non-technical".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::NonTechnical))
        );
        assert!("sports".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_price_of_by_name() {
        let catalog = Catalog::default();
        assert_eq!(catalog.price_of(["CHESS", "CARROM"]), 250);
        assert_eq!(catalog.price_of(["CHESS", "NOT AN EVENT"]), 100);
    }

    proptest! {
        #[test]
        fn prop_total_is_sum_of_selected_fees(
            mask in proptest::collection::vec(any::<bool>(), 10),
        ) {
            let catalog = Catalog::default();
            let selection: BTreeSet<EventId> = catalog
                .events()
                .iter()
                .zip(&mask)
                .filter(|(_, picked)| **picked)
                .map(|(e, _)| e.id.clone())
                .collect();

            let expected: u32 = catalog
                .events()
                .iter()
                .zip(&mask)
                .filter(|(_, picked)| **picked)
                .map(|(e, _)| e.fee)
                .sum();

            prop_assert_eq!(catalog.total(&selection), expected);
        }
    }
}
