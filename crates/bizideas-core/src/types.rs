//! # Domain Types
//!
//! Core domain types used throughout the BizIdeas storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │    Category     │   │ CategoryFilter  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ItemId)    │   │  HoReCa         │   │  All            │       │
//! │  │  title          │   │  Образование    │   │  Only(Category) │       │
//! │  │  price (Money)  │   │  Технологии     │   └─────────────────┘       │
//! │  │  rating         │   │  Производство   │                             │
//! │  │  category       │   │  SaaS           │   ┌─────────────────┐       │
//! │  │  ...            │   │  Услуги         │   │     Rating      │       │
//! │  └─────────────────┘   └─────────────────┘   │  tenths (u8)    │       │
//! │                                              │  48 = 4.8 ★     │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Labels are the exact strings the storefront shows and the catalog JSON
//! uses. Parsing them is case-sensitive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, ValidationError};
use crate::money::Money;

// =============================================================================
// Item Id
// =============================================================================

/// Unique identifier of a catalog item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ItemId(#[ts(type = "number")] u32);

impl ItemId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ItemId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        ItemId(id)
    }
}

// =============================================================================
// Rating
// =============================================================================

/// Highest rating an item can have, in tenths (5.0 stars).
pub const MAX_RATING_TENTHS: u8 = 50;

/// Customer rating from 0.0 to 5.0, stored in tenths of a star.
///
/// ## Why Tenths?
/// The storefront shows one decimal place ("4.8"). Storing 48 keeps
/// equality and ordering exact; JSON still carries the familiar `4.8`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(u8);

impl Rating {
    /// Const constructor for built-in data. A value above 5.0 fails
    /// constant evaluation.
    pub const fn new(tenths: u8) -> Self {
        assert!(tenths <= MAX_RATING_TENTHS, "rating above 5.0");
        Rating(tenths)
    }

    /// Creates a rating from tenths of a star, rejecting values above 5.0.
    pub fn from_tenths(tenths: u8) -> Result<Self, ValidationError> {
        if tenths > MAX_RATING_TENTHS {
            return Err(rating_out_of_range());
        }
        Ok(Rating(tenths))
    }

    /// Creates a rating from a decimal such as `4.8`.
    ///
    /// The value is rounded to one decimal place.
    pub fn from_decimal(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=5.0).contains(&value) {
            return Err(rating_out_of_range());
        }
        Ok(Rating((value * 10.0).round() as u8))
    }

    #[inline]
    pub const fn tenths(&self) -> u8 {
        self.0
    }

    /// Returns the rating as a decimal (for display only).
    #[inline]
    pub fn value(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

fn rating_out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "rating".to_string(),
        min: 0,
        max: 5,
    }
}

impl TryFrom<f64> for Rating {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Rating::from_decimal(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

// =============================================================================
// Category
// =============================================================================

/// The fixed set of business-idea categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    #[serde(rename = "HoReCa")]
    HoReCa,
    #[serde(rename = "Образование")]
    Education,
    #[serde(rename = "Технологии")]
    Technology,
    #[serde(rename = "Производство")]
    Manufacturing,
    #[serde(rename = "SaaS")]
    SaaS,
    #[serde(rename = "Услуги")]
    Services,
}

impl Category {
    /// Every category, in the order the filter dropdown lists them.
    pub const ALL: [Category; 6] = [
        Category::HoReCa,
        Category::Education,
        Category::Technology,
        Category::Manufacturing,
        Category::SaaS,
        Category::Services,
    ];

    /// The exact label shown on badges and used in catalog data.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::HoReCa => "HoReCa",
            Category::Education => "Образование",
            Category::Technology => "Технологии",
            Category::Manufacturing => "Производство",
            Category::SaaS => "SaaS",
            Category::Services => "Услуги",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// Wire label of the "no category restriction" filter.
pub const ALL_CATEGORIES_LABEL: &str = "all";

/// The category dropdown: everything, or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if an item of `category` passes this filter.
    #[inline]
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    /// The value sent by the dropdown: `all` or a category label.
    pub const fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// The text shown for this option in the dropdown.
    pub const fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Все категории",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// All dropdown options: `All` first, then each category.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORIES_LABEL {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.label().to_string()
    }
}

// =============================================================================
// Item
// =============================================================================

/// One purchasable business-idea bundle.
///
/// Items are immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Item {
    /// Unique identifier within the catalog.
    pub id: ItemId,

    /// Card and detail title.
    pub title: String,

    /// One or two sentence pitch; searched together with the title.
    pub description: String,

    /// Bundle price in whole roubles.
    pub price: Money,

    /// Average customer rating, 0.0 to 5.0.
    #[ts(type = "number")]
    pub rating: Rating,

    /// Number of reviews behind the rating.
    pub reviews: u32,

    pub category: Category,

    /// Image URI for the card and the detail header.
    pub image: String,

    /// Expected start-up investment, free text ("2-5 млн ₽").
    pub investment: String,

    /// Expected payback period, free text ("12-18 мес").
    pub payback: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_from_decimal() {
        let rating = Rating::from_decimal(4.8).unwrap();
        assert_eq!(rating.tenths(), 48);
        assert!((rating.value() - 4.8).abs() < 0.001);
        assert_eq!(rating.to_string(), "4.8");

        assert!(Rating::from_decimal(5.0).is_ok());
        assert!(Rating::from_decimal(0.0).is_ok());
        assert!(Rating::from_decimal(5.1).is_err());
        assert!(Rating::from_decimal(-0.1).is_err());
        assert!(Rating::from_decimal(f64::NAN).is_err());
    }

    #[test]
    fn test_rating_from_tenths() {
        assert_eq!(Rating::from_tenths(50).unwrap().to_string(), "5.0");
        assert!(Rating::from_tenths(51).is_err());
    }

    #[test]
    fn test_rating_const_constructor() {
        const TOP: Rating = Rating::new(MAX_RATING_TENTHS);
        assert_eq!(TOP.to_string(), "5.0");
        assert_eq!(Rating::new(46), Rating::from_tenths(46).unwrap());
    }

    #[test]
    #[should_panic(expected = "rating above 5.0")]
    fn test_rating_const_constructor_rejects_out_of_range() {
        let _ = Rating::new(MAX_RATING_TENTHS + 1);
    }

    #[test]
    fn test_item_id_json_is_plain_number() {
        assert_eq!(serde_json::to_string(&ItemId::new(7)).unwrap(), "7");
        let id: ItemId = serde_json::from_str("42").unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_rating_json_is_decimal() {
        let rating: Rating = serde_json::from_str("4.9").unwrap();
        assert_eq!(rating.tenths(), 49);
        assert_eq!(serde_json::to_string(&rating).unwrap(), "4.9");
        assert!(serde_json::from_str::<Rating>("7.5").is_err());
    }

    #[test]
    fn test_category_parse_is_exact() {
        assert_eq!("SaaS".parse::<Category>().unwrap(), Category::SaaS);
        assert_eq!(
            "Образование".parse::<Category>().unwrap(),
            Category::Education
        );
        assert!("saas".parse::<Category>().is_err());
        assert!(" SaaS".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_uses_labels() {
        let json = serde_json::to_string(&Category::Services).unwrap();
        assert_eq!(json, "\"Услуги\"");
        let back: Category = serde_json::from_str("\"HoReCa\"").unwrap();
        assert_eq!(back, Category::HoReCa);
    }

    #[test]
    fn test_category_filter_default_is_all() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.label(), "all");
        assert_eq!(CategoryFilter::All.display_name(), "Все категории");
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "SaaS".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::SaaS)
        );
        assert!(matches!(
            "All".parse::<CategoryFilter>(),
            Err(CoreError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_category_filter_admits() {
        assert!(CategoryFilter::All.admits(Category::HoReCa));
        assert!(CategoryFilter::Only(Category::SaaS).admits(Category::SaaS));
        assert!(!CategoryFilter::Only(Category::SaaS).admits(Category::Services));
    }

    #[test]
    fn test_category_filter_options() {
        let options = CategoryFilter::options();
        assert_eq!(options.len(), 7);
        assert_eq!(options[0], CategoryFilter::All);
        let labels: Vec<&str> = options.iter().map(|o| o.label()).collect();
        assert_eq!(
            labels,
            vec![
                "all",
                "HoReCa",
                "Образование",
                "Технологии",
                "Производство",
                "SaaS",
                "Услуги"
            ]
        );
    }

    #[test]
    fn test_category_filter_serde_roundtrip_label() {
        let json = serde_json::to_string(&CategoryFilter::Only(Category::Technology)).unwrap();
        assert_eq!(json, "\"Технологии\"");
        let all: CategoryFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(all, CategoryFilter::All);
    }
}
