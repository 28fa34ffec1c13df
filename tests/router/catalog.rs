use super::*;

/// Expect a partial update to leave omitted fields untouched and clear explicit nulls
#[tokio::test]
async fn partial_update_touches_present_keys_only() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = test.app();

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/people",
            json!({"first_name": "Luke", "last_name": "Skywalker", "specie": "Human", "height": 172}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = body_json(resp).await["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/people/{id}"),
            json!({"height": 173, "last_name": null}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(empty_request(Method::GET, &format!("/people/{id}")))
        .await
        .unwrap();
    assert_eq!(
        body_json(resp).await,
        json!({"id": id, "first_name": "Luke", "last_name": null, "specie": "Human", "height": 173})
    );

    Ok(())
}

/// Expect deleting a planet to remove every link to it
#[tokio::test]
async fn deleting_planet_removes_links() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let luke = test.user().insert_user("luke@rebellion.org").await?;
    let leia = test.user().insert_user("leia@alderaan.gov").await?;
    let alderaan = test.catalog().insert_planet("Alderaan").await?;
    let hoth = test.catalog().insert_planet("Hoth").await?;
    test.favorite()
        .insert_favorite_planet(luke.id, alderaan.id)
        .await?;
    test.favorite()
        .insert_favorite_planet(leia.id, alderaan.id)
        .await?;
    let kept = test.favorite().insert_favorite_planet(leia.id, hoth.id).await?;
    let app = test.app();

    let resp = app
        .clone()
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/planets/{}", alderaan.id),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"msg": "Planet deleted"}));

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, "/admin/favorites/planets"))
        .await
        .unwrap();
    assert_eq!(
        body_json(resp).await,
        json!({"data": [{"id": kept.id, "user_id": leia.id, "target_id": hoth.id}]})
    );

    let resp = app
        .oneshot(empty_request(
            Method::GET,
            &format!("/user/{}/favorites", luke.id),
        ))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await["favorite_planets"], json!([]));

    Ok(())
}

/// Expect deleting a character to release the vehicle it drove
#[tokio::test]
async fn deleting_character_clears_driver() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let han = test.catalog().insert_character("Han").await?;
    let falcon = test
        .catalog()
        .insert_vehicle("Millennium Falcon", Some(han.id))
        .await?;
    let app = test.app();

    let resp = app
        .clone()
        .oneshot(empty_request(Method::DELETE, &format!("/people/{}", han.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(empty_request(
            Method::GET,
            &format!("/vehicles/{}", falcon.id),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["driver_id"], json!(null));

    Ok(())
}

/// Expect 400 for a vehicle that does not exist
#[tokio::test]
async fn unknown_vehicle_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = test
        .app()
        .oneshot(empty_request(Method::GET, "/vehicles/999"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect every catalog update to report an unknown ID before a missing body
#[tokio::test]
async fn update_of_unknown_entity_without_body_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = test.app();

    for (uri, msg) in [
        ("/people/42", "Character with ID 42 does not exist"),
        ("/vehicles/42", "Vehicle with ID 42 does not exist"),
        ("/planets/42", "Planet with ID 42 does not exist"),
    ] {
        let resp = app
            .clone()
            .oneshot(empty_request(Method::PUT, uri))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body_json(resp).await, json!({ "msg": msg }));
    }

    Ok(())
}
