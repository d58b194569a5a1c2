//! Recipe payloads as delivered by the assistant.
//!
//! The session controller never looks inside these; it only carries them from
//! the transport to the transcript. Decoding is lenient so that a sparse
//! recipe still reaches the UI instead of failing the whole turn.

use serde::{Deserialize, Deserializer, Serialize};

const SIMILAR_RECIPE_BASE: &str = "https://spoonacular.com/recipes";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub similar: Vec<SimilarRecipe>,
}

impl Recipe {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Up to four display-ready nutrition facts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default, deserialize_with = "display_string")]
    pub calories: Option<String>,
    #[serde(default, deserialize_with = "display_string")]
    pub protein: Option<String>,
    #[serde(default, deserialize_with = "display_string")]
    pub carbs: Option<String>,
    #[serde(default, deserialize_with = "display_string")]
    pub fat: Option<String>,
}

impl Nutrition {
    /// Labelled facts that are present, in display order.
    pub fn facts(&self) -> Vec<(&'static str, &str)> {
        [
            ("Calories", &self.calories),
            ("Protein", &self.protein),
            ("Carbs", &self.carbs),
            ("Fat", &self.fat),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.facts().is_empty()
    }
}

/// Lightweight reference to a related recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarRecipe {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub title: String,
}

impl SimilarRecipe {
    /// Public page for this recipe, e.g. `.../recipes/garlic-chicken-42`.
    /// `None` when the reference has no id.
    pub fn url(&self) -> Option<String> {
        self.id
            .map(|id| format!("{}/{}-{}", SIMILAR_RECIPE_BASE, slugify(&self.title), id))
    }
}

/// Lower-case the title and collapse whitespace runs into `-`.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

// ─── Lenient decoding helpers ────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum DisplayValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn display_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DisplayValue>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        DisplayValue::Text(s) => s,
        DisplayValue::Integer(n) => n.to_string(),
        DisplayValue::Float(f) => f.to_string(),
    }).filter(|s| !s.is_empty()))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
