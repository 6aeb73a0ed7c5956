use serde::Deserialize;

use crate::model::{NutrientKey, NutrientValue};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdaSearchResponse {
    #[serde(default)]
    pub foods: Vec<UsdaSearchFood>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdaSearchFood {
    #[serde(default)]
    pub fdc_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdaFoodDetail {
    #[serde(default)]
    pub food_nutrients: Vec<UsdaFoodNutrient>,
}

/// One entry of a detail record's `foodNutrients` list. USDA spreads
/// the same information over differently named fields depending on the
/// data type of the food, so everything here is optional and the
/// accessors below define the precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdaFoodNutrient {
    #[serde(default)]
    pub nutrient: Option<UsdaNutrientMeta>,
    #[serde(default)]
    pub nutrient_number: Option<UsdaNutrientNumber>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdaNutrientMeta {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub number: Option<UsdaNutrientNumber>,
    #[serde(default)]
    pub unit_name: Option<String>,
}

/// USDA serializes nutrient numbers as bare integers in some payloads
/// and as strings in others.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UsdaNutrientNumber {
    Number(u32),
    Text(String),
}

impl UsdaNutrientNumber {
    fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl UsdaFoodNutrient {
    /// Nested `nutrient.id` wins over nested `nutrient.number`, which
    /// wins over the top-level `nutrientNumber`.
    fn fdc_number(&self) -> Option<u32> {
        let meta = self.nutrient.as_ref();
        meta.and_then(|meta| meta.id)
            .or_else(|| {
                meta.and_then(|meta| meta.number.as_ref())
                    .and_then(UsdaNutrientNumber::as_u32)
            })
            .or_else(|| self.nutrient_number.as_ref().and_then(UsdaNutrientNumber::as_u32))
    }

    fn amount_per_100g(&self) -> f64 {
        self.amount.or(self.value).unwrap_or_default()
    }

    fn unit(&self) -> String {
        self.nutrient
            .as_ref()
            .and_then(|meta| meta.unit_name.as_deref())
            .or(self.unit_name.as_deref())
            .unwrap_or_default()
            .to_lowercase()
    }

    /// The boundary adapter: normalizes this entry into the system's
    /// own terms, or `None` for nutrients this system does not track.
    pub fn classify(&self) -> Option<(NutrientKey, NutrientValue)> {
        let key = NutrientKey::from_fdc_number(self.fdc_number()?)?;
        let value = NutrientValue {
            amount: self.amount_per_100g(),
            unit: self.unit(),
        };
        Some((key, value))
    }
}
