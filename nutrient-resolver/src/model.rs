use std::collections::BTreeMap;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Canonical nutrient names, independent of the provider's numbering.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NutrientKey {
    #[display("calories")]
    Calories,
    #[display("protein")]
    Protein,
    #[display("fat")]
    Fat,
    #[display("carbohydrates")]
    Carbohydrates,
    #[display("fiber")]
    Fiber,
    #[display("calcium")]
    Calcium,
    #[display("iron")]
    Iron,
    #[display("magnesium")]
    Magnesium,
    #[display("zinc")]
    Zinc,
    #[display("vitamin_a")]
    VitaminA,
    #[display("vitamin_d")]
    VitaminD,
    #[display("vitamin_e")]
    VitaminE,
    #[display("vitamin_c")]
    VitaminC,
}

/// The one table mapping FoodData Central nutrient numbers to keys.
/// Both of USDA's numbering schemes (the integer `nutrient.id` and the
/// stringly `number`/`nutrientNumber`) resolve through these values.
const FDC_NUMBERS: [(u32, NutrientKey); 13] = [
    (1008, NutrientKey::Calories),
    (1003, NutrientKey::Protein),
    (1004, NutrientKey::Fat),
    (1005, NutrientKey::Carbohydrates),
    (1079, NutrientKey::Fiber),
    (1087, NutrientKey::Calcium),
    (1089, NutrientKey::Iron),
    (1090, NutrientKey::Magnesium),
    (1095, NutrientKey::Zinc),
    (1106, NutrientKey::VitaminA),
    (1110, NutrientKey::VitaminD),
    (1109, NutrientKey::VitaminE),
    (1162, NutrientKey::VitaminC),
];

impl NutrientKey {
    pub const ALL: [NutrientKey; 13] = [
        NutrientKey::Calories,
        NutrientKey::Protein,
        NutrientKey::Fat,
        NutrientKey::Carbohydrates,
        NutrientKey::Fiber,
        NutrientKey::Calcium,
        NutrientKey::Iron,
        NutrientKey::Magnesium,
        NutrientKey::Zinc,
        NutrientKey::VitaminA,
        NutrientKey::VitaminD,
        NutrientKey::VitaminE,
        NutrientKey::VitaminC,
    ];

    pub fn from_fdc_number(number: u32) -> Option<NutrientKey> {
        FDC_NUMBERS
            .iter()
            .find(|(fdc_number, _)| *fdc_number == number)
            .map(|(_, key)| *key)
    }
}

/// A single nutrient amount as reported per 100 g of food.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientValue {
    pub amount: f64,
    pub unit: String,
}

/// A total mapping over [`NutrientKey`]: every key is always present,
/// defaulting to `{0.0, ""}` when the provider had nothing for it. A
/// provider amount of zero and an absent nutrient are indistinguishable
/// in the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NutrientVector(BTreeMap<NutrientKey, NutrientValue>);

impl NutrientVector {
    /// Builds a complete vector from whatever entries were extracted.
    /// Later entries for the same key overwrite earlier ones; keys with
    /// no entry get the default value.
    pub fn from_entries(entries: impl IntoIterator<Item = (NutrientKey, NutrientValue)>) -> Self {
        let mut vector = Self::default();
        for (key, value) in entries {
            vector.0.insert(key, value);
        }
        vector
    }

    pub fn get(&self, key: NutrientKey) -> &NutrientValue {
        self.0.get(&key).expect("nutrient vector holds every key")
    }

    pub fn iter(&self) -> impl Iterator<Item = (NutrientKey, &NutrientValue)> {
        self.0.iter().map(|(key, value)| (*key, value))
    }
}

impl Default for NutrientVector {
    fn default() -> Self {
        Self(
            NutrientKey::ALL
                .iter()
                .map(|key| (*key, NutrientValue::default()))
                .collect(),
        )
    }
}

/// A provider search hit: its own identifier plus the canonical
/// description, which may differ from the query that found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodCandidate {
    pub provider_id: String,
    pub description: String,
}

/// The resolver's output. Built fresh per resolution, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodRecord {
    pub food_name: String,
    pub provider_id: String,
    pub requested_quantity_g: f64,
    pub nutrients: NutrientVector,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vector_holds_all_thirteen_keys() {
        let vector = NutrientVector::default();
        assert_eq!(vector.iter().count(), 13);
        for (_, value) in vector.iter() {
            assert_eq!(value, &NutrientValue::default());
        }
    }

    #[test]
    fn from_entries_completes_missing_keys() {
        let vector = NutrientVector::from_entries([(
            NutrientKey::Calories,
            NutrientValue { amount: 52.0, unit: "kcal".into() },
        )]);

        assert_eq!(vector.iter().count(), 13);
        assert_eq!(vector.get(NutrientKey::Calories).amount, 52.0);
        assert_eq!(vector.get(NutrientKey::Protein).amount, 0.0);
        assert_eq!(vector.get(NutrientKey::Protein).unit, "");
    }

    #[test]
    fn fdc_numbers_map_to_keys() {
        assert_eq!(NutrientKey::from_fdc_number(1008), Some(NutrientKey::Calories));
        assert_eq!(NutrientKey::from_fdc_number(1079), Some(NutrientKey::Fiber));
        assert_eq!(NutrientKey::from_fdc_number(1162), Some(NutrientKey::VitaminC));
        assert_eq!(NutrientKey::from_fdc_number(9999), None);
    }

    #[test]
    fn every_key_has_exactly_one_fdc_number() {
        for key in NutrientKey::ALL {
            let count = FDC_NUMBERS.iter().filter(|(_, k)| *k == key).count();
            assert_eq!(count, 1, "{key} must appear once in the table");
        }
    }

    #[test]
    fn keys_serialize_snake_case() {
        let json = serde_json::to_value(NutrientKey::VitaminA).unwrap();
        assert_eq!(json, serde_json::json!("vitamin_a"));
        assert_eq!(NutrientKey::VitaminA.to_string(), "vitamin_a");
    }

    #[test]
    fn vector_serializes_with_key_names() {
        let vector = NutrientVector::default();
        let json = serde_json::to_value(&vector).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 13);
        assert!(object.contains_key("calories"));
        assert!(object.contains_key("vitamin_c"));
    }
}
