use mockito::Matcher;
use nutrient_resolver::{NutrientKey, NutrientResolver, ResolveError, UsdaClient};

fn resolver_for(server: &mockito::Server) -> NutrientResolver<UsdaClient> {
    NutrientResolver::new(UsdaClient::new(server.url(), "test-key"))
}

#[tokio::test]
async fn resolves_and_scales_a_food_end_to_end() {
    let mut server = mockito::Server::new_async().await;

    let search = server
        .mock("GET", "/foods/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_key".into(), "test-key".into()),
            Matcher::UrlEncoded("query".into(), "apple raw".into()),
            Matcher::UrlEncoded("pageSize".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"foods": [{"fdcId": 123456, "description": "Apple, raw"}]}"#)
        .create_async()
        .await;

    let detail = server
        .mock("GET", "/food/123456")
        .match_query(Matcher::UrlEncoded("api_key".into(), "test-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "fdcId": 123456,
                "description": "Apple, raw",
                "foodNutrients": [
                    { "nutrient": { "id": 1008, "unitName": "KCAL" }, "amount": 52.0 },
                    { "nutrient": { "id": 1003, "unitName": "G" }, "amount": 0.26 },
                    { "nutrient": { "id": 2000, "unitName": "G" }, "amount": 10.3 }
                ]
            }"#,
        )
        .create_async()
        .await;

    let record = resolver_for(&server)
        .resolve("apple raw", 150.0)
        .await
        .unwrap();

    search.assert_async().await;
    detail.assert_async().await;

    assert_eq!(record.food_name, "Apple, raw");
    assert_eq!(record.provider_id, "123456");
    assert_eq!(record.requested_quantity_g, 150.0);
    assert_eq!(record.nutrients.iter().count(), 13);
    assert_eq!(record.nutrients.get(NutrientKey::Calories).amount, 78.0);
    assert_eq!(record.nutrients.get(NutrientKey::Calories).unit, "kcal");
    assert_eq!(record.nutrients.get(NutrientKey::Protein).amount, 0.39);
    // The unmapped id 2000 is ignored, everything else zeroes out.
    assert_eq!(record.nutrients.get(NutrientKey::Fiber).amount, 0.0);
    assert_eq!(record.nutrients.get(NutrientKey::Fiber).unit, "");
}

#[tokio::test]
async fn detail_with_no_tracked_nutrients_yields_all_defaults() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/foods/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"foods": [{"fdcId": 42, "description": "Water, tap"}]}"#)
        .create_async()
        .await;

    server
        .mock("GET", "/food/42")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"foodNutrients": []}"#)
        .create_async()
        .await;

    let record = resolver_for(&server).resolve("water", 100.0).await.unwrap();

    assert_eq!(record.nutrients.iter().count(), 13);
    for (key, value) in record.nutrients.iter() {
        assert_eq!(value.amount, 0.0, "{key}");
        assert_eq!(value.unit, "", "{key}");
    }
}

#[tokio::test]
async fn zero_search_results_is_not_found() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/foods/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"foods": []}"#)
        .create_async()
        .await;

    let err = resolver_for(&server)
        .resolve("qwxyzfood", 100.0)
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::NotFound { .. }));
    assert!(err.to_string().contains("qwxyzfood"));
}

#[tokio::test]
async fn detail_http_500_is_upstream_not_not_found() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/foods/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"foods": [{"fdcId": 7, "description": "Bread, white"}]}"#)
        .create_async()
        .await;

    server
        .mock("GET", "/food/7")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let err = resolver_for(&server)
        .resolve("bread", 100.0)
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::Upstream(_)));
}

#[tokio::test]
async fn search_http_error_is_upstream() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/foods/search")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let err = resolver_for(&server)
        .resolve("apple raw", 100.0)
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::Upstream(_)));
}

#[tokio::test]
async fn malformed_search_body_is_upstream() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/foods/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let err = resolver_for(&server)
        .resolve("apple raw", 100.0)
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::Upstream(_)));
}

#[tokio::test]
async fn candidate_without_fdc_id_is_upstream() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/foods/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"foods": [{"description": "Apple, raw"}]}"#)
        .create_async()
        .await;

    let err = resolver_for(&server)
        .resolve("apple raw", 100.0)
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::Upstream(_)));
    assert!(err.to_string().contains("fdcId"));
}
