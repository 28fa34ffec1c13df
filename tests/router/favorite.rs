use super::*;

/// Expect adding the same favorite twice to create two distinct links
#[tokio::test]
async fn duplicate_favorites_create_separate_links() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let user = test.user().insert_user("luke@rebellion.org").await?;
    let r2 = test.catalog().insert_character("R2-D2").await?;
    let app = test.app();
    let uri = format!("/user/{}/favorites/people", user.id);

    let mut favorite_ids = Vec::new();
    for _ in 0..2 {
        let resp = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                &uri,
                json!({"character_id": r2.id}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = body_json(resp).await;
        assert_eq!(body["msg"], "Character R2-D2 added to favorites");
        favorite_ids.push(body["favorite_id"].as_i64().unwrap());
    }
    assert_ne!(favorite_ids[0], favorite_ids[1]);

    let resp = app
        .oneshot(empty_request(
            Method::GET,
            &format!("/user/{}/favorites", user.id),
        ))
        .await
        .unwrap();
    let favorites = body_json(resp).await;
    assert_eq!(favorites["favorite_characters"].as_array().unwrap().len(), 2);

    Ok(())
}

/// Expect the full add, list and remove flow across all three kinds
#[tokio::test]
async fn add_list_and_remove_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let user = test.user().insert_user("luke@rebellion.org").await?;
    let leia = test.catalog().insert_character("Leia").await?;
    let speeder = test.catalog().insert_vehicle("Speeder", None).await?;
    let endor = test.catalog().insert_planet("Endor").await?;
    let app = test.app();

    let mut links = Vec::new();
    for (kind, body) in [
        ("people", json!({"character_id": leia.id})),
        ("vehicles", json!({"vehicle_id": speeder.id})),
        ("planets", json!({"planet_id": endor.id})),
    ] {
        let resp = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                &format!("/user/{}/favorites/{kind}", user.id),
                body,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        links.push((kind, body_json(resp).await["favorite_id"].as_i64().unwrap()));
    }

    let resp = app
        .clone()
        .oneshot(empty_request(
            Method::GET,
            &format!("/user/{}/favorites", user.id),
        ))
        .await
        .unwrap();
    assert_eq!(
        body_json(resp).await,
        json!({
            "favorite_characters": [
                {"id": leia.id, "first_name": "Leia", "last_name": null, "specie": "Human", "height": null}
            ],
            "favorite_vehicles": [
                {"name": "Speeder", "max_speed": null, "driver_id": null}
            ],
            "favorite_planets": [
                {"id": endor.id, "name": "Endor", "population": null, "climate": null}
            ]
        })
    );

    for (kind, favorite_id) in links {
        let resp = app
            .clone()
            .oneshot(empty_request(
                Method::DELETE,
                &format!("/user/{}/favorites/{kind}/{favorite_id}", user.id),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = app
        .oneshot(empty_request(
            Method::GET,
            &format!("/user/{}/favorites", user.id),
        ))
        .await
        .unwrap();
    assert_eq!(
        body_json(resp).await,
        json!({"favorite_characters": [], "favorite_vehicles": [], "favorite_planets": []})
    );

    Ok(())
}

/// Expect 404 when the favorite link does not exist at all
#[tokio::test]
async fn removing_unknown_link_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("luke@rebellion.org")
        .build()
        .await?;

    let resp = test
        .app()
        .oneshot(empty_request(Method::DELETE, "/user/1/favorites/vehicles/5"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "You don't have a favorite vehicle with ID 5"})
    );

    Ok(())
}

/// Expect an unknown user to be reported before a missing body
#[tokio::test]
async fn adding_for_unknown_user_without_body_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = test.app();

    for kind in ["people", "vehicles", "planets"] {
        let resp = app
            .clone()
            .oneshot(empty_request(
                Method::POST,
                &format!("/user/999/favorites/{kind}"),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(resp).await,
            json!({"msg": "User with ID 999 does not exist"})
        );
    }

    Ok(())
}

/// Expect a missing body to be rejected once the user is known to exist
#[tokio::test]
async fn adding_for_existing_user_without_body_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("luke@rebellion.org")
        .build()
        .await?;

    let resp = test
        .app()
        .oneshot(empty_request(Method::POST, "/user/1/favorites/planets"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
