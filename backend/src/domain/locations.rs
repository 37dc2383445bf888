//! Headquarters and the branches reporting to them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;
use crate::domain::validation::{
    FieldName, Validate, optional_email, optional_non_negative_count, optional_text, reference_id,
    require_text,
};

/// Head office owning one or more branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Headquarters {
    #[schema(example = 1)]
    pub headquarters_id: i64,
    #[schema(example = "OctoCAT HQ")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "1 Market Street")]
    pub address: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub floor_count: Option<i64>,
    pub capacity: Option<i64>,
}

/// Request body used to create or replace [`Headquarters`].
///
/// Both `name` and `address` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeadquartersDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub address: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub floor_count: Option<i64>,
    #[serde(default)]
    pub capacity: Option<i64>,
}

impl Validate for HeadquartersDraft {
    fn validate(&self) -> Result<(), Error> {
        require_text(FieldName::new("name"), &self.name)?;
        require_text(FieldName::new("address"), &self.address)?;
        optional_email(FieldName::new("email"), self.email.as_deref())?;
        optional_non_negative_count(FieldName::new("floorCount"), self.floor_count)?;
        optional_non_negative_count(FieldName::new("capacity"), self.capacity)
    }
}

/// Derived figures reported by the headquarters metrics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HeadquartersMetrics {
    /// `id + floorCount + capacity`.
    pub score: i64,
    /// `(id + floorCount) / 2`.
    pub average: f64,
    /// `HQ-{id}{floorCount}`.
    pub display: String,
}

impl HeadquartersMetrics {
    /// Compute metrics, treating missing counts as zero.
    ///
    /// Sums saturate rather than wrap.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::HeadquartersMetrics;
    ///
    /// let metrics = HeadquartersMetrics::compute(7, Some(3), Some(120));
    /// assert_eq!(metrics.score, 130);
    /// assert_eq!(metrics.average, 5.0);
    /// assert_eq!(metrics.display, "HQ-73");
    /// ```
    #[must_use]
    pub fn compute(id: i64, floor_count: Option<i64>, capacity: Option<i64>) -> Self {
        let floors = floor_count.unwrap_or(0);
        let capacity = capacity.unwrap_or(0);
        let id_and_floors = id.saturating_add(floors);
        Self {
            score: id_and_floors.saturating_add(capacity),
            average: id_and_floors as f64 / 2.0,
            display: format!("HQ-{id}{floors}"),
        }
    }
}

impl From<&Headquarters> for HeadquartersMetrics {
    fn from(value: &Headquarters) -> Self {
        Self::compute(value.headquarters_id, value.floor_count, value.capacity)
    }
}

/// Human-readable location label for a headquarters.
///
/// # Examples
/// ```
/// use storefront::domain::location_label;
///
/// assert_eq!(
///     location_label("OctoCAT HQ", Some("Lisbon"), None),
///     "Location: OctoCAT HQ, City: Lisbon, Country: "
/// );
/// ```
#[must_use]
pub fn location_label(name: &str, city: Option<&str>, country: Option<&str>) -> String {
    format!(
        "Location: {name}, City: {}, Country: {}",
        city.unwrap_or_default(),
        country.unwrap_or_default()
    )
}

/// Regional branch placing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[schema(example = 1)]
    pub branch_id: i64,
    #[schema(example = 1)]
    pub headquarters_id: i64,
    #[schema(example = "Porto Branch")]
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Request body used to create or replace a [`Branch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchDraft {
    pub headquarters_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Validate for BranchDraft {
    fn validate(&self) -> Result<(), Error> {
        reference_id(FieldName::new("headquartersId"), self.headquarters_id)?;
        require_text(FieldName::new("name"), &self.name)?;
        optional_text(FieldName::new("address"), self.address.as_deref())?;
        optional_email(FieldName::new("email"), self.email.as_deref())
    }
}
