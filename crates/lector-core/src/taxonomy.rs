//! The closed bias/fallacy taxonomy and the label validator.
//!
//! Every label that reaches a caller passes through [`sanitize_labels`] (or
//! is produced directly as a [`CanonicalLabel`] by the heuristic detector).
//! Matching is case-insensitive and exact: no trimming, no fuzzy matching.
//! Unknown labels are dropped silently.

use std::collections::BTreeSet;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One entry of the fixed bias/fallacy vocabulary.
///
/// Declaration order is the taxonomy order; `Ord` follows it, so a
/// `BTreeSet<CanonicalLabel>` iterates in the same order the labels are
/// presented to the model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum CanonicalLabel {
    #[serde(rename = "Ad hominem")]
    AdHominem,
    #[serde(rename = "Generalización apresurada")]
    HastyGeneralization,
    #[serde(rename = "Falacia de autoridad")]
    AppealToAuthority,
    #[serde(rename = "Apelación a la emoción")]
    AppealToEmotion,
    #[serde(rename = "Falsa dicotomía")]
    FalseDichotomy,
    #[serde(rename = "Hombre de paja")]
    StrawMan,
    #[serde(rename = "Pendiente resbaladiza")]
    SlipperySlope,
    #[serde(rename = "Confirmación")]
    Confirmation,
    #[serde(rename = "Sesgo de disponibilidad")]
    AvailabilityBias,
    #[serde(rename = "Sesgo de selección")]
    SelectionBias,
    #[serde(rename = "Circularidad (petición de principio)")]
    CircularReasoning,
}

impl CanonicalLabel {
    /// All labels in taxonomy order.
    pub const ALL: [Self; 11] = [
        Self::AdHominem,
        Self::HastyGeneralization,
        Self::AppealToAuthority,
        Self::AppealToEmotion,
        Self::FalseDichotomy,
        Self::StrawMan,
        Self::SlipperySlope,
        Self::Confirmation,
        Self::AvailabilityBias,
        Self::SelectionBias,
        Self::CircularReasoning,
    ];

    /// Canonical spelling, as shown to the model and to callers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AdHominem => "Ad hominem",
            Self::HastyGeneralization => "Generalización apresurada",
            Self::AppealToAuthority => "Falacia de autoridad",
            Self::AppealToEmotion => "Apelación a la emoción",
            Self::FalseDichotomy => "Falsa dicotomía",
            Self::StrawMan => "Hombre de paja",
            Self::SlipperySlope => "Pendiente resbaladiza",
            Self::Confirmation => "Confirmación",
            Self::AvailabilityBias => "Sesgo de disponibilidad",
            Self::SelectionBias => "Sesgo de selección",
            Self::CircularReasoning => "Circularidad (petición de principio)",
        }
    }

    /// Resolve a label by case-insensitive exact name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().to_lowercase() == wanted)
    }
}

impl fmt::Display for CanonicalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map arbitrary JSON values onto the canonical vocabulary.
///
/// Non-string values are skipped; strings that are not a case-insensitive
/// exact match for a canonical name are dropped.
pub fn sanitize_labels<'a, I>(values: I) -> BTreeSet<CanonicalLabel>
where
    I: IntoIterator<Item = &'a serde_json::Value>,
{
    values
        .into_iter()
        .filter_map(serde_json::Value::as_str)
        .filter_map(CanonicalLabel::from_name)
        .collect()
}

/// String-only variant of [`sanitize_labels`].
pub fn sanitize_label_strs<I, S>(values: I) -> BTreeSet<CanonicalLabel>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .filter_map(|value| CanonicalLabel::from_name(value.as_ref()))
        .collect()
}
