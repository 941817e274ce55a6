//! Translation of optional search criteria into a store predicate.
//!
//! [`SearchCriteria::to_predicate`] is a pure function: every present
//! criterion contributes exactly one clause, absent criteria contribute
//! nothing, and the clauses combine as a conjunction. The free-text criterion
//! expands into a disjunction across the searchable text fields.

use bson::{Bson, Document};
use serde::Deserialize;

/// Field names shared by the builder and the store backends.
pub mod fields {
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const PRICE: &str = "price";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const BEDROOMS: &str = "bedrooms";
    pub const BATHROOMS: &str = "bathrooms";
    pub const PROPERTY_TYPE: &str = "property_type";
    pub const FEATURED: &str = "featured";
}

/// Fields probed by the free-text criterion.
const TEXT_SEARCH_FIELDS: [&str; 4] = [
    fields::TITLE,
    fields::DESCRIPTION,
    fields::CITY,
    fields::STATE,
];

/// Optional, independently specifiable search criteria.
///
/// Blank strings behave like absent criteria so empty query parameters do
/// not constrain the search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCriteria {
    pub city: Option<String>,
    pub property_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f64>,
    pub q: Option<String>,
    pub featured: Option<bool>,
}

impl SearchCriteria {
    /// Criteria selecting featured listings only.
    pub fn featured_only() -> Self {
        Self {
            featured: Some(true),
            ..Self::default()
        }
    }

    /// Build the conjunction of all present criteria.
    ///
    /// Criteria with every field absent produce an empty predicate, which
    /// matches every document.
    pub fn to_predicate(&self) -> Predicate {
        let mut clauses = Vec::new();

        if let Some(city) = present(&self.city) {
            clauses.push(Clause::field(
                fields::CITY,
                Constraint::Contains(city.to_string()),
            ));
        }
        if let Some(kind) = present(&self.property_type) {
            clauses.push(Clause::field(
                fields::PROPERTY_TYPE,
                Constraint::Equals(kind.to_string()),
            ));
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            clauses.push(Clause::field(
                fields::PRICE,
                Constraint::Between {
                    min: self.min_price,
                    max: self.max_price,
                },
            ));
        }
        if let Some(bedrooms) = self.bedrooms {
            clauses.push(Clause::field(
                fields::BEDROOMS,
                Constraint::AtLeast(f64::from(bedrooms)),
            ));
        }
        if let Some(bathrooms) = self.bathrooms {
            clauses.push(Clause::field(
                fields::BATHROOMS,
                Constraint::AtLeast(bathrooms),
            ));
        }
        if let Some(query) = present(&self.q) {
            clauses.push(Clause::Any(
                TEXT_SEARCH_FIELDS
                    .iter()
                    .map(|field| (*field, Constraint::Contains(query.to_string())))
                    .collect(),
            ));
        }
        if let Some(featured) = self.featured {
            clauses.push(Clause::field(fields::FEATURED, Constraint::Flag(featured)));
        }

        Predicate { clauses }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}

/// A single field constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Case-insensitive substring match on a text field.
    Contains(String),
    /// Case-insensitive match against the whole field value.
    Equals(String),
    /// Inclusive numeric range; either bound may be open.
    Between { min: Option<f64>, max: Option<f64> },
    /// Inclusive numeric lower bound.
    AtLeast(f64),
    /// Boolean equality.
    Flag(bool),
}

impl Constraint {
    fn matches(&self, value: Option<&Bson>) -> bool {
        match self {
            Constraint::Contains(needle) => text(value)
                .is_some_and(|hay| hay.to_lowercase().contains(&needle.to_lowercase())),
            Constraint::Equals(expected) => {
                text(value).is_some_and(|hay| hay.to_lowercase() == expected.to_lowercase())
            }
            Constraint::Between { min, max } => numeric(value).is_some_and(|actual| {
                min.map_or(true, |bound| actual >= bound)
                    && max.map_or(true, |bound| actual <= bound)
            }),
            Constraint::AtLeast(bound) => numeric(value).is_some_and(|actual| actual >= *bound),
            Constraint::Flag(expected) => {
                matches!(value, Some(Bson::Boolean(actual)) if actual == expected)
            }
        }
    }
}

/// One conjunct of a [`Predicate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Constraint on a single field.
    Field {
        field: &'static str,
        constraint: Constraint,
    },
    /// Disjunction of per-field constraints; satisfied when any branch is.
    Any(Vec<(&'static str, Constraint)>),
}

impl Clause {
    fn field(field: &'static str, constraint: Constraint) -> Self {
        Self::Field { field, constraint }
    }

    fn matches(&self, document: &Document) -> bool {
        match self {
            Clause::Field { field, constraint } => constraint.matches(document.get(field)),
            Clause::Any(branches) => branches
                .iter()
                .any(|(field, constraint)| constraint.matches(document.get(field))),
        }
    }
}

/// Conjunction of clauses selecting documents from a collection.
///
/// An empty predicate matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Evaluate against a raw document.
    pub fn matches(&self, document: &Document) -> bool {
        self.clauses.iter().all(|clause| clause.matches(document))
    }
}

fn text(value: Option<&Bson>) -> Option<&str> {
    match value {
        Some(Bson::String(value)) => Some(value),
        _ => None,
    }
}

fn numeric(value: Option<&Bson>) -> Option<f64> {
    match value {
        Some(Bson::Double(value)) => Some(*value),
        Some(Bson::Int32(value)) => Some(f64::from(*value)),
        Some(Bson::Int64(value)) => Some(*value as f64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    fn fixture() -> Vec<Document> {
        vec![
            doc! {
                "title": "Modern Family House",
                "description": "Spacious 4-bedroom home with open floor plan.",
                "price": 549_000.0,
                "city": "Springfield",
                "state": "IL",
                "bedrooms": 4,
                "bathrooms": 2.5,
                "property_type": "House",
                "featured": true,
            },
            doc! {
                "title": "Downtown City Apartment",
                "description": "Stylish 2-bed apartment close to transit.",
                "price": 329_000.0,
                "city": "Metro City",
                "state": "NY",
                "bedrooms": 2,
                "bathrooms": 1.0,
                "property_type": "Apartment",
                "featured": true,
            },
            doc! {
                "title": "Cozy Suburban Condo",
                "description": "Bright 1-bedroom condo with community Pool.",
                "price": 189_000.0,
                "city": "Lakeside",
                "state": "CA",
                "bedrooms": 1,
                "bathrooms": 1.0,
                "property_type": "Condo",
                "featured": false,
            },
        ]
    }

    fn matching_titles(criteria: &SearchCriteria) -> Vec<String> {
        let predicate = criteria.to_predicate();
        fixture()
            .iter()
            .filter(|document| predicate.matches(document))
            .map(|document| document.get_str("title").expect("title").to_string())
            .collect()
    }

    #[test]
    fn empty_criteria_match_every_document() {
        let predicate = SearchCriteria::default().to_predicate();
        assert!(predicate.is_empty());
        assert!(fixture().iter().all(|document| predicate.matches(document)));
    }

    #[test]
    fn blank_strings_are_treated_as_absent() {
        let criteria = SearchCriteria {
            city: Some("  ".to_string()),
            q: Some(String::new()),
            ..SearchCriteria::default()
        };
        assert!(criteria.to_predicate().is_empty());
    }

    #[test]
    fn city_match_is_a_case_insensitive_substring() {
        let criteria = SearchCriteria {
            city: Some("metro".to_string()),
            ..SearchCriteria::default()
        };
        assert_eq!(matching_titles(&criteria), vec!["Downtown City Apartment"]);
    }

    #[test]
    fn property_type_requires_the_whole_value() {
        let criteria = SearchCriteria {
            property_type: Some("condo".to_string()),
            ..SearchCriteria::default()
        };
        assert_eq!(matching_titles(&criteria), vec!["Cozy Suburban Condo"]);

        let partial = SearchCriteria {
            property_type: Some("Cond".to_string()),
            ..SearchCriteria::default()
        };
        assert!(matching_titles(&partial).is_empty());
    }

    #[test]
    fn price_range_is_inclusive_at_both_bounds() {
        let criteria = SearchCriteria {
            min_price: Some(189_000.0),
            max_price: Some(329_000.0),
            ..SearchCriteria::default()
        };
        assert_eq!(
            matching_titles(&criteria),
            vec!["Downtown City Apartment", "Cozy Suburban Condo"]
        );

        let narrow = SearchCriteria {
            min_price: Some(200_000.0),
            max_price: Some(400_000.0),
            ..SearchCriteria::default()
        };
        assert_eq!(matching_titles(&narrow), vec!["Downtown City Apartment"]);
    }

    #[test]
    fn bedroom_and_bathroom_minimums_are_inclusive() {
        let criteria = SearchCriteria {
            bedrooms: Some(2),
            bathrooms: Some(1.0),
            ..SearchCriteria::default()
        };
        assert_eq!(
            matching_titles(&criteria),
            vec!["Modern Family House", "Downtown City Apartment"]
        );
    }

    #[test]
    fn free_text_matches_any_search_field_case_insensitively() {
        let criteria = SearchCriteria {
            q: Some("pool".to_string()),
            ..SearchCriteria::default()
        };
        assert_eq!(matching_titles(&criteria), vec!["Cozy Suburban Condo"]);

        let state = SearchCriteria {
            q: Some("ny".to_string()),
            ..SearchCriteria::default()
        };
        assert_eq!(matching_titles(&state), vec!["Downtown City Apartment"]);

        let miss = SearchCriteria {
            q: Some("penthouse".to_string()),
            ..SearchCriteria::default()
        };
        assert!(matching_titles(&miss).is_empty());
    }

    #[test]
    fn featured_flag_is_an_exact_equality() {
        let criteria = SearchCriteria::featured_only();
        assert_eq!(
            matching_titles(&criteria),
            vec!["Modern Family House", "Downtown City Apartment"]
        );

        let unfeatured = SearchCriteria {
            featured: Some(false),
            ..SearchCriteria::default()
        };
        assert_eq!(matching_titles(&unfeatured), vec!["Cozy Suburban Condo"]);
    }

    #[test]
    fn present_criteria_combine_as_a_conjunction() {
        let criteria = SearchCriteria {
            city: Some("city".to_string()),
            min_price: Some(400_000.0),
            ..SearchCriteria::default()
        };
        assert!(matching_titles(&criteria).is_empty());
    }
}
