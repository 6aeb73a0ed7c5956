use reqwest::Client;

use super::usda_types::{UsdaFoodDetail, UsdaFoodNutrient, UsdaSearchResponse};
use crate::error::ProviderError;
use crate::model::{FoodCandidate, NutrientKey, NutrientValue};
use crate::FoodDataProvider;

/// FoodData Central client. One reqwest client is reused across calls;
/// there is no caching and no retrying here, a failed call surfaces to
/// the resolver as-is.
pub struct UsdaClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl UsdaClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_env() -> Self {
        let api_key = dotenvy::var("USDA_API_KEY").expect("USDA_API_KEY env var must be set");
        let api_url = dotenvy::var("USDA_API_URL").expect("USDA_API_URL env var must be set");

        Self::new(api_url, api_key)
    }
}

impl FoodDataProvider for UsdaClient {
    fn search(
        &self,
        query: &str,
        page_size: usize,
    ) -> impl Future<Output = Result<Vec<FoodCandidate>, ProviderError>> + Send {
        async move {
            let url = format!("{}/foods/search", self.api_url);
            let page_size = page_size.to_string();

            let response = self
                .http
                .get(&url)
                .query(&[
                    ("api_key", self.api_key.as_str()),
                    ("query", query),
                    ("pageSize", page_size.as_str()),
                ])
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(ProviderError::Status(response.status()));
            }

            let body = response.json::<UsdaSearchResponse>().await?;
            body.foods
                .into_iter()
                .map(|food| {
                    let fdc_id = food.fdc_id.ok_or(ProviderError::MissingField("fdcId"))?;
                    let description = food
                        .description
                        .ok_or(ProviderError::MissingField("description"))?;

                    Ok(FoodCandidate {
                        provider_id: fdc_id.to_string(),
                        description,
                    })
                })
                .collect()
        }
    }

    fn nutrient_detail(
        &self,
        provider_id: &str,
    ) -> impl Future<Output = Result<Vec<(NutrientKey, NutrientValue)>, ProviderError>> + Send
    {
        async move {
            let url = format!("{}/food/{provider_id}", self.api_url);

            let response = self
                .http
                .get(&url)
                .query(&[("api_key", self.api_key.as_str())])
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(ProviderError::Status(response.status()));
            }

            let detail = response.json::<UsdaFoodDetail>().await?;
            Ok(detail
                .food_nutrients
                .iter()
                .filter_map(UsdaFoodNutrient::classify)
                .collect())
        }
    }
}
