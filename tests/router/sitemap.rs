use super::*;

/// Expect the sitemap to list every documented route and the docs page
#[tokio::test]
async fn lists_all_routes() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = test
        .app()
        .oneshot(empty_request(Method::GET, "/"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let routes: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|route| route.as_str())
        .collect();

    for expected in [
        "/",
        "/users",
        "/users/{id}",
        "/people",
        "/people/{id}",
        "/vehicles",
        "/vehicles/{id}",
        "/planets",
        "/planets/{id}",
        "/user/{id}/favorites",
        "/user/{id}/favorites/people",
        "/user/{id}/favorites/vehicles/{favorite_id}",
        "/admin/favorites/planets",
        "/api/docs",
    ] {
        assert!(routes.contains(&expected), "missing {expected}");
    }

    Ok(())
}

/// Expect the OpenAPI document to be served next to the Swagger UI
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = test
        .app()
        .oneshot(empty_request(Method::GET, "/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["info"]["title"], "Holocron");
    assert!(body["paths"]["/people/{id}"].is_object());

    Ok(())
}
