#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use http_body_util::BodyExt; // for .collect()
    use serde_json::Value;

    use crate::error::{validation, AppError, OptionExt};

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn conflict_errors_map_to_409() {
        for (err, code) in [
            (AppError::DuplicateEmail, "DUPLICATE_EMAIL"),
            (AppError::DuplicateBook("dup".into()), "DUPLICATE_BOOK"),
            (AppError::AlreadyReviewed, "ALREADY_REVIEWED"),
        ] {
            let (status, body) = render(err).await;
            assert_eq!(status, StatusCode::CONFLICT);
            assert_eq!(body["error"]["code"], code);
        }
    }

    #[tokio::test]
    async fn auth_errors_map_to_401_and_403() {
        let (status, body) = render(AppError::InvalidCredentials).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["message"], "invalid email or password");

        let (status, _) = render(AppError::Unauthorized("no token".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = render(AppError::AccessDenied("access denied".into())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "ACCESS_DENIED");
    }

    #[tokio::test]
    async fn progress_invariant_errors_map_to_422() {
        let (status, body) = render(AppError::InvalidPage("only 300 pages".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INVALID_PAGE");

        let (status, body) = render(AppError::IncompletePages("reach page 300".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INCOMPLETE_PAGES");
    }

    #[tokio::test]
    async fn validation_error_carries_field_details() {
        let (status, body) = render(AppError::ValidationError {
            field: "rating".into(),
            message: "out of range".into(),
        })
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["details"]["field"], "rating");
    }

    #[tokio::test]
    async fn internal_errors_hide_the_cause_behind_an_error_id() {
        let (status, body) = render(AppError::Internal(anyhow::anyhow!("secret detail"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "An internal server error occurred");
        assert!(body["error"]["details"]["error_id"].is_string());
        assert!(!body.to_string().contains("secret detail"));
    }

    #[tokio::test]
    async fn database_errors_map_to_500() {
        let (status, body) = render(AppError::Database("disk is sad".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");
    }

    #[test]
    fn sqlx_row_not_found_becomes_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn option_ext_names_the_missing_entity() {
        let missing: Option<i64> = None;
        let err = missing.ok_or_not_found("book").unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "book not found"));
        assert_eq!(Some(1).ok_or_not_found("book").unwrap(), 1);
    }

    #[test]
    fn validation_helpers() {
        assert!(validation::validate_non_empty("x", "f").is_ok());
        assert!(validation::validate_non_empty("  ", "f").is_err());
        assert!(validation::validate_range(3, 1, 5, "f").is_ok());
        assert!(validation::validate_range(0, 1, 5, "f").is_err());
        assert!(validation::validate_non_negative(0, "f").is_ok());
        assert!(validation::validate_non_negative(-1, "f").is_err());
    }
}
