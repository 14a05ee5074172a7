//! Activity catalog.
//!
//! An [`Activity`] pairs a display name and icon with its metabolic
//! equivalent (METs). The built-in catalog is fixed at start; a custom one
//! can be supplied through configuration and is validated by
//! [`Catalog::new`].

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
    /// Energy expenditure rate relative to rest.
    pub mets: f64,
}

impl Activity {
    pub fn new(key: &str, label: &str, icon: &str, mets: f64) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            mets,
        }
    }

    /// "METs: 7.0" line shown under each card.
    pub fn intensity_label(&self) -> String {
        format!("METs: {:.1}", self.mets)
    }
}

/// Ordered, validated set of activities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    activities: Vec<Activity>,
}

impl Catalog {
    /// Build a catalog, rejecting blank or duplicate keys and non-positive
    /// intensities.
    pub fn new(activities: Vec<Activity>) -> Result<Self, CatalogError> {
        for (i, activity) in activities.iter().enumerate() {
            if activity.key.trim().is_empty() {
                return Err(CatalogError::EmptyKey);
            }
            if !activity.mets.is_finite() || activity.mets <= 0.0 {
                return Err(CatalogError::InvalidIntensity {
                    key: activity.key.clone(),
                    mets: activity.mets,
                });
            }
            if activities[..i].iter().any(|a| a.key == activity.key) {
                return Err(CatalogError::DuplicateKey(activity.key.clone()));
            }
        }
        Ok(Self { activities })
    }

    /// The four activities the calculator ships with.
    pub fn builtin() -> Self {
        Self {
            activities: vec![
                Activity::new("walk", "Walking (moderate)", "🚶", 3.3),
                Activity::new("run", "Running (easy pace)", "🏃", 7.0),
                Activity::new("bike", "Cycling (casual)", "🚲", 4.0),
                Activity::new("stairs", "Climbing stairs", "🪜", 8.0),
            ],
        }
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.key == key)
    }

    /// Like [`Catalog::get`] but with an error naming the missing key.
    pub fn require(&self, key: &str) -> Result<&Activity, CatalogError> {
        self.get(key)
            .ok_or_else(|| CatalogError::UnknownActivity(key.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
