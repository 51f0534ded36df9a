use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

use crate::domain::errors::AppError;

/// Value Object - product category
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Category {
    #[strum(serialize = "Electronics")]
    #[serde(rename = "Electronics")]
    Electronics,

    #[strum(serialize = "Clothing")]
    #[serde(rename = "Clothing")]
    Clothing,

    #[strum(serialize = "Home & Garden")]
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,

    #[strum(serialize = "Sports")]
    #[serde(rename = "Sports")]
    Sports,

    #[strum(serialize = "Beauty")]
    #[serde(rename = "Beauty")]
    Beauty,
}

impl Category {
    pub fn all() -> Vec<Category> {
        Category::iter().collect()
    }

    pub fn price_range(&self) -> PriceRange {
        match self {
            Self::Electronics => PriceRange::new(200.0, 1000.0),
            Self::Clothing => PriceRange::new(30.0, 100.0),
            Self::HomeAndGarden => PriceRange::new(50.0, 250.0),
            Self::Sports => PriceRange::new(40.0, 200.0),
            Self::Beauty => PriceRange::new(20.0, 100.0),
        }
    }
}

/// Value Object - sales region
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Department {
    #[strum(serialize = "North America")]
    #[serde(rename = "North America")]
    NorthAmerica,

    #[strum(serialize = "Europe")]
    #[serde(rename = "Europe")]
    Europe,

    #[strum(serialize = "Asia Pacific")]
    #[serde(rename = "Asia Pacific")]
    AsiaPacific,

    #[strum(serialize = "Latin America")]
    #[serde(rename = "Latin America")]
    LatinAmerica,
}

impl Department {
    pub fn all() -> Vec<Department> {
        Department::iter().collect()
    }
}

/// Inclusive unit price bounds for one category
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Range used for names outside the known category list
    pub const DEFAULT: PriceRange = PriceRange { min: 50.0, max: 200.0 };

    pub fn for_category_name(name: &str) -> Self {
        name.parse::<Category>().map(|category| category.price_range()).unwrap_or(Self::DEFAULT)
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    /// Map a unit-interval sample onto the range
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + t * (self.max - self.min)
    }
}

/// Value Object - revenue in currency units, kept at cent precision
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Default, From, Into, Deref, Display, Serialize, Deserialize,
)]
pub struct Revenue(f64);

impl Revenue {
    /// Rounds to two decimal places
    pub fn from_amount(amount: f64) -> Self {
        Self((amount * 100.0).round() / 100.0)
    }

    pub fn from_sale(quantity: Quantity, unit_price: f64) -> Self {
        Self::from_amount(quantity.value() as f64 * unit_price)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - units sold, between [`Quantity::MIN`] and [`Quantity::MAX`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Into, Deref, Display, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;

    pub fn new(units: u32) -> Result<Self, AppError> {
        if (Self::MIN..=Self::MAX).contains(&units) {
            Ok(Self(units))
        } else {
            Err(AppError::InvalidInput(format!(
                "quantity must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                units
            )))
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Quantity {
    type Error = AppError;

    fn try_from(units: u32) -> Result<Self, Self::Error> {
        Self::new(units)
    }
}
