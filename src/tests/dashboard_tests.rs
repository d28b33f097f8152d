#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::Datelike;
    use serde_json::json;

    use crate::tests::support::{
        backdate_progress, create_book, register_and_login, send_json, set_progress, setup_app,
    };

    #[tokio::test]
    async fn empty_library_yields_all_zeroes() {
        let (app, _state, _db) = setup_app().await;
        let token = register_and_login(&app, "Ada", "ada@example.com").await;

        let (status, body) = send_json(&app, "GET", "/api/dashboard", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_books"], 0);
        assert_eq!(body["currently_reading"], 0);
        assert_eq!(body["books_finished_year"], 0);
        assert_eq!(body["books_finished_month"], 0);
        assert_eq!(body["yearly_target"], 0);
        assert_eq!(body["monthly_target"], 0);
        assert_eq!(body["goals_set_count"], 0);
    }

    // The dashboard always refers to the current calendar year/month, so the
    // seeds are placed relative to now.
    #[tokio::test]
    async fn dashboard_aggregates_seeded_library() {
        let (app, state, _db) = setup_app().await;
        let token = register_and_login(&app, "Ada", "ada@example.com").await;
        let now = chrono::Utc::now();
        let year = now.year();
        let month = now.month();

        let reading = create_book(&app, &token, "Dune", "Frank Herbert", "", 412).await;
        let done_now = create_book(&app, &token, "Emma", "Jane Austen", "", 200).await;
        let done_earlier = create_book(&app, &token, "Hyperion", "Dan Simmons", "", 482).await;
        create_book(&app, &token, "Solaris", "Stanislaw Lem", "", 204).await;

        let (status, _) = set_progress(&app, &token, reading, 100, "Currently Reading").await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = set_progress(&app, &token, done_now, 200, "Currently Reading").await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = set_progress(&app, &token, done_earlier, 482, "Currently Reading").await;
        assert_eq!(status, StatusCode::OK);

        // One finished this month, one finished earlier in the year. In
        // January both land in the current month.
        let earlier_month = if month == 1 { 1 } else { month - 1 };
        backdate_progress(
            &state,
            done_earlier,
            &format!("{:04}-{:02}-02T10:00:00Z", year, earlier_month),
        )
        .await;

        let other_month = if month == 12 { 1 } else { month + 1 };
        for (m, target) in [(month as i64, 2i64), (other_month as i64, 1i64)] {
            let (status, _) = send_json(
                &app,
                "POST",
                "/api/goals",
                Some(&token),
                Some(json!({ "year": year, "month": m, "target_books": target })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = send_json(&app, "GET", "/api/dashboard", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_books"], 4);
        assert_eq!(body["currently_reading"], 1);
        assert_eq!(body["books_finished_year"], 2);
        let finished_month = if month == 1 { 2 } else { 1 };
        assert_eq!(body["books_finished_month"], finished_month);
        assert_eq!(body["yearly_target"], 3);
        assert_eq!(body["monthly_target"], 2);
        assert_eq!(body["goals_set_count"], 2);
    }

    #[tokio::test]
    async fn dashboard_is_scoped_to_owner() {
        let (app, _state, _db) = setup_app().await;
        let ada = register_and_login(&app, "Ada", "ada@example.com").await;
        let ben = register_and_login(&app, "Ben", "ben@example.com").await;
        create_book(&app, &ben, "Emma", "Jane Austen", "", 200).await;

        let (status, body) = send_json(&app, "GET", "/api/dashboard", Some(&ada), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_books"], 0);
    }
}
