use crate::ApiError;

use ident_core::{CoreError, ErrorKind};
use ident_db::DbError;
use ident_service::IdentityError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_unauthorized_when_rendered_then_401_with_code() {
    let (status, json) = body_json(ApiError::Unauthorized {
        message: "invalid username or password".into(),
        location: here(),
    })
    .await;

    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "invalid username or password");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    let (status, json) = body_json(ApiError::Validation {
        message: "username too short".into(),
        field: Some("username".into()),
        location: here(),
    })
    .await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "username");
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_500_with_kind_code() {
    let (status, json) = body_json(ApiError::Internal {
        kind: ErrorKind::NoRowsAffected,
        message: "The request could not be completed".into(),
        location: here(),
    })
    .await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(json["error"]["code"], "NO_ROWS_AFFECTED");
}

#[test]
fn given_identity_not_found_and_conflict_when_converted_then_keep_kind() {
    let not_found = ApiError::from(IdentityError::NotFound {
        message: "user 'x' not found".into(),
        location: here(),
    });
    let conflict = ApiError::from(IdentityError::Conflict {
        message: "username 'x' is taken".into(),
        location: here(),
    });

    assert!(matches!(not_found, ApiError::NotFound { .. }));
    assert!(matches!(conflict, ApiError::Conflict { .. }));
}

#[test]
fn given_core_validation_error_when_converted_then_field_is_kept() {
    let error = ApiError::from(IdentityError::Core(CoreError::Validation {
        message: "password too short".into(),
        field: Some("password".into()),
        location: here(),
    }));

    match error {
        ApiError::Validation { message, field, .. } => {
            assert_that!(message, eq("password too short"));
            assert_that!(field, some(eq("password")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_forbidden_when_converted_then_internal_with_forbidden_code() {
    let error = ApiError::from(IdentityError::Forbidden {
        message: "user 'x' is disabled".into(),
        location: here(),
    });

    match error {
        ApiError::Internal { kind, message, .. } => {
            assert_that!(kind, eq(ErrorKind::Forbidden));
            assert_that!(message.as_str(), not(contains_substring("disabled")));
        }
        other => panic!("expected internal error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_store_error_when_converted_then_sql_detail_is_not_exposed() {
    let error = ApiError::from(IdentityError::Store(DbError::CorruptRow {
        message: "corrupt row in id_users".into(),
        location: here(),
    }));

    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(!json.to_string().contains("id_users"));
}
