use crate::modules::seized_items::core::status::SeizedItemStatus;
use crate::modules::seized_items::use_cases::list_seized_items::filter::SeizedItemFilter;
use crate::modules::seized_items::use_cases::update_seized_item::command::UpdateSeizedItem;
use crate::shell::actor::PERSON_ID_HEADER;
use crate::shell::http::router;
use crate::tests::fixtures::commands::register_seized_item::RegisterSeizedItemBuilder;
use crate::tests::fixtures::context::{fixed_today, make_context};
use crate::tests::fixtures::rows::FIXED_DEPOSITORY_ID;
use crate::tests::fixtures::state::seeded_state;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

fn status_patch(status: SeizedItemStatus) -> UpdateSeizedItem {
    UpdateSeizedItem {
        status: Some(status),
        ..UpdateSeizedItem::default()
    }
}

#[tokio::test]
async fn returned_fields_follow_the_status_through_the_lifecycle() {
    let state = seeded_state().await;
    let command = RegisterSeizedItemBuilder::new().build();
    let id = state
        .register_handler
        .handle(command, &make_context("person-A"))
        .await
        .unwrap();

    let deposited = state.queries.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(deposited.status, SeizedItemStatus::Deposited);
    assert_eq!((deposited.returned_on, deposited.returned_by), (None, None));

    let returned = state
        .update_handler
        .handle(
            &id,
            status_patch(SeizedItemStatus::Returned),
            &make_context("person-B"),
        )
        .await
        .unwrap();
    assert_eq!(returned.returned_on, Some(fixed_today()));
    assert_eq!(returned.returned_by.as_deref(), Some("person-B"));

    // Saving again as someone else keeps the original attribution.
    let resaved = state
        .update_handler
        .handle(
            &id,
            UpdateSeizedItem {
                comments: Some("owner signed the receipt".into()),
                ..UpdateSeizedItem::default()
            },
            &make_context("person-C"),
        )
        .await
        .unwrap();
    assert_eq!(resaved.returned_by.as_deref(), Some("person-B"));
    assert_eq!(resaved.updated_by, "person-C");

    let disposed = state
        .update_handler
        .handle(
            &id,
            status_patch(SeizedItemStatus::Disposed),
            &make_context("person-C"),
        )
        .await
        .unwrap();
    assert_eq!(disposed.status, SeizedItemStatus::Disposed);
    assert_eq!((disposed.returned_on, disposed.returned_by), (None, None));

    let held = state
        .queries
        .list(&SeizedItemFilter::default(), 0, 10)
        .await
        .unwrap();
    assert!(held.is_empty());
}

#[tokio::test]
async fn deleting_a_depository_detaches_its_items_and_hides_deleted_items() {
    let state = seeded_state().await;
    let context = make_context("person-A");
    for id in ["si-0001", "si-0002"] {
        state
            .register_handler
            .handle(
                RegisterSeizedItemBuilder::new().seized_item_id(id).build(),
                &context,
            )
            .await
            .unwrap();
    }

    state
        .depositories
        .delete_handler
        .handle(FIXED_DEPOSITORY_ID, &context)
        .await
        .unwrap();
    state
        .delete_handler
        .handle("si-0002", &context)
        .await
        .unwrap();

    let remaining = state
        .queries
        .list(&SeizedItemFilter::any_status(), 0, 10)
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].seized_item_id, "si-0001");
    assert_eq!(remaining[0].depository_id, None);

    // A deleted depository can no longer be referenced.
    let rejected = state
        .update_handler
        .handle(
            "si-0001",
            UpdateSeizedItem {
                depository_id: Some(FIXED_DEPOSITORY_ID.into()),
                ..UpdateSeizedItem::default()
            },
            &context,
        )
        .await;
    assert!(rejected.is_err());
}

#[tokio::test]
async fn the_router_registers_returns_and_lists_items() {
    let app = router(seeded_state().await);
    let body = r#"{"person_id":"owner-1","item_type_id":"it-fixed-0001","number":3,"status":"RET"}"#;

    let created = app
        .clone()
        .oneshot(
            Request::post("/seized-items")
                .header("content-type", "application/json")
                .header(PERSON_ID_HEADER, "person-A")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let bytes = created.into_body().collect().await.unwrap().to_bytes();
    let created: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let id = created["seized_item_id"].as_str().unwrap().to_string();

    let fetched = app
        .clone()
        .oneshot(
            Request::get(format!("/seized-items/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    let bytes = fetched.into_body().collect().await.unwrap().to_bytes();
    let fetched: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(fetched["returned_by"], "person-A");
    assert!(fetched["returned_on"].is_string());

    let listed = app
        .oneshot(
            Request::get("/seized-items?status=RET,DIS")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = listed.into_body().collect().await.unwrap().to_bytes();
    let listed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(listed[0]["seized_item_id"], id.as_str());
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn write(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header(PERSON_ID_HEADER, "person-A")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn remove(uri: &str) -> Request<Body> {
    Request::delete(uri)
        .header(PERSON_ID_HEADER, "person-A")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn zone_types_stay_while_zones_point_at_them() {
    let app = router(seeded_state().await);

    let (status, zone_type) = send(
        &app,
        write("POST", "/zone-types", json!({ "name": "Perimeter" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let zone_type_id = zone_type["id"].as_str().unwrap().to_string();

    let (status, zone) = send(
        &app,
        write(
            "POST",
            "/zones",
            json!({ "name": "North gate", "zone_type_id": zone_type_id }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let zone_id = zone["id"].as_str().unwrap().to_string();

    let (status, error) = send(&app, remove(&format!("/zone-types/{zone_type_id}"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["error"], "zone type is still used by 1 zones");

    let (status, _) = send(
        &app,
        write(
            "PATCH",
            &format!("/zones/{zone_id}"),
            json!({ "zone_type_id": "" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, remove(&format!("/zone-types/{zone_type_id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, error) = send(
        &app,
        write(
            "PATCH",
            &format!("/zones/{zone_id}"),
            json!({ "zone_type_id": zone_type_id }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["error"], format!("unknown zone type: {zone_type_id}"));
}

#[tokio::test]
async fn checkpoints_are_created_active_and_can_be_closed() {
    let app = router(seeded_state().await);

    let (status, created) = send(
        &app,
        write("POST", "/checkpoints", json!({ "name": "Gate A" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let list = Request::get("/checkpoints").body(Body::empty()).unwrap();
    let (_, listed) = send(&app, list).await;
    assert_eq!(listed[0]["active"], true);

    let (status, closed) = send(
        &app,
        write(
            "PATCH",
            &format!("/checkpoints/{id}"),
            json!({ "active": false }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(closed["active"], false);
}
