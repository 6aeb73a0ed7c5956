use crate::error::ResolveError;
use crate::model::{FoodRecord, NutrientValue, NutrientVector};
use crate::FoodDataProvider;

/// Resolves a free-text food name into a complete, scaled nutrient
/// vector by trusting the provider's top-ranked search hit.
///
/// Stateless: every call re-queries the provider, and concurrent calls
/// are independent.
pub struct NutrientResolver<P> {
    provider: P,
}

impl<P: FoodDataProvider> NutrientResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Resolves `food_name` to a [`FoodRecord`] scaled to `quantity_g`
    /// grams. Provider amounts are per 100 g, so the scale factor is
    /// `quantity_g / 100`, with amounts rounded to 2 decimal places
    /// after scaling. Missing nutrients are completed with `{0.0, ""}`.
    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, food_name: &str, quantity_g: f64) -> Result<FoodRecord, ResolveError> {
        let food_name = food_name.trim();
        if food_name.is_empty() {
            return Err(ResolveError::InvalidInput {
                reason: "food name must not be empty".into(),
            });
        }
        if !quantity_g.is_finite() || quantity_g <= 0.0 {
            return Err(ResolveError::InvalidInput {
                reason: format!("quantity must be a positive number of grams, got {quantity_g}"),
            });
        }

        // Take the provider's single best match; no disambiguation.
        let candidates = self.provider.search(food_name, 1).await?;
        let Some(candidate) = candidates.into_iter().next() else {
            return Err(ResolveError::NotFound {
                food_name: food_name.to_string(),
            });
        };
        tracing::debug!(
            provider_id = %candidate.provider_id,
            description = %candidate.description,
            "matched food"
        );

        let per_100g = self.provider.nutrient_detail(&candidate.provider_id).await?;

        let scale = quantity_g / 100.0;
        let nutrients = NutrientVector::from_entries(per_100g.into_iter().map(|(key, value)| {
            let scaled = NutrientValue {
                amount: round2(value.amount * scale),
                unit: value.unit,
            };
            (key, scaled)
        }));

        Ok(FoodRecord {
            food_name: candidate.description,
            provider_id: candidate.provider_id,
            requested_quantity_g: quantity_g,
            nutrients,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
