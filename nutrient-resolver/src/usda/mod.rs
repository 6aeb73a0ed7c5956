mod usda_client;
mod usda_types;

pub use usda_client::UsdaClient;
