/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the API layer, the favorites store and the UI layer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of positional ingredient/measure slots in an upstream record
pub const INGREDIENT_SLOTS: usize = 15;

/// One drink exactly as TheCocktailDB returns it
///
/// The upstream schema is a flat object with numbered fields
/// (`strIngredient1` .. `strIngredient15`), many of them `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawDrink(Map<String, Value>);

impl RawDrink {
    /// Get a string field, treating null, non-string and blank values as absent
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    fn text(&self, name: &str) -> String {
        self.field(name).unwrap_or_default().to_string()
    }
}

#[cfg(test)]
impl From<Map<String, Value>> for RawDrink {
    fn from(map: Map<String, Value>) -> Self {
        RawDrink(map)
    }
}

/// One ingredient line of a cocktail
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub ingredient: String,
    pub measure: Option<String>,
}

impl Ingredient {
    /// Format as "<measure> <ingredient>", or just the ingredient when unmeasured
    pub fn line(&self) -> String {
        match &self.measure {
            Some(measure) => format!("{} {}", measure, self.ingredient),
            None => self.ingredient.clone(),
        }
    }
}

/// A normalized cocktail
///
/// Used both for live API results and for the persisted favorites blob,
/// so the field names double as the on-disk JSON schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Cocktail {
    /// TheCocktailDB's stable identifier (e.g. "11007")
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub glass: String,
    #[serde(default)]
    pub instructions: String,
    /// Full-size image URL
    #[serde(default)]
    pub thumbnail: String,
    /// Ingredients in upstream slot order
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Cocktail {
    /// Map a raw upstream record into the normalized shape
    ///
    /// Absent fields become empty strings, absent tags an empty list,
    /// and slots without an ingredient name are skipped.
    pub fn from_raw(raw: &RawDrink) -> Self {
        let tags: Vec<String> = raw
            .field("strTags")
            .map(|tags| tags.split(',').map(str::to_string).collect())
            .unwrap_or_default();

        let ingredients: Vec<Ingredient> = (1..=INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let ingredient = raw.field(&format!("strIngredient{}", slot))?;
                let measure = raw
                    .field(&format!("strMeasure{}", slot))
                    .map(|m| m.trim().to_string());

                Some(Ingredient {
                    ingredient: ingredient.trim().to_string(),
                    measure,
                })
            })
            .collect();

        Cocktail {
            id: raw.text("idDrink"),
            name: raw.text("strDrink"),
            tags,
            category: raw.text("strCategory"),
            glass: raw.text("strGlass"),
            instructions: raw.text("strInstructions"),
            thumbnail: raw.text("strDrinkThumb"),
            ingredients,
        }
    }

    /// Tags joined for display, or "N/A" when there are none
    pub fn tags_label(&self) -> String {
        if self.tags.is_empty() {
            "N/A".to_string()
        } else {
            self.tags.join(", ")
        }
    }
}
