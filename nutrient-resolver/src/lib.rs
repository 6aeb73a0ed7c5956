mod error;
mod model;
mod resolver;
mod usda;

pub use error::{ProviderError, ResolveError};
pub use model::{FoodCandidate, FoodRecord, NutrientKey, NutrientValue, NutrientVector};
pub use resolver::NutrientResolver;
pub use usda::UsdaClient;

/// A food-composition database the resolver can read from.
///
/// Two sequential lookups per resolution: a free-text search ranked by
/// the provider's own relevance, then a nutrient detail fetch for the
/// chosen candidate. Amounts returned by `nutrient_detail` are per
/// 100 g of the food, already normalized into [`NutrientKey`] terms.
pub trait FoodDataProvider: Send + Sync {
    /// Look up candidate foods for a free-text query, best match first.
    /// Returns at most `page_size` candidates.
    fn search(
        &self,
        query: &str,
        page_size: usize,
    ) -> impl Future<Output = Result<Vec<FoodCandidate>, ProviderError>> + Send;

    /// Fetch the per-100g nutrient amounts recorded for a candidate.
    /// Nutrients the provider tracks but this system does not are
    /// already filtered out.
    fn nutrient_detail(
        &self,
        provider_id: &str,
    ) -> impl Future<Output = Result<Vec<(NutrientKey, NutrientValue)>, ProviderError>> + Send;
}
