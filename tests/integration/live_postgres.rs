use actix_web::http::StatusCode;
use actix_web::{test, App};
use chrono::DateTime;
use serde_json::Value;

use heartbeat::api;
use heartbeat::config::DatabaseConfig;
use heartbeat::core::{Database, QueryExecutor};
use crate::common::executor_data;

#[actix_rt::test]
#[ignore] // Needs Postgres via PG* env vars. Run with: cargo test --test lib live_postgres -- --ignored
async fn test_db_time_is_non_decreasing() {
    let database = Database::connect_lazy(&DatabaseConfig::default());
    let app = test::init_service(
        App::new()
            .app_data(executor_data(database.clone()))
            .configure(api::configure_routes),
    )
    .await;

    let mut previous = None;
    for _ in 0..3 {
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let db_time = body["db_time"].as_str().expect("db_time is a string");
        let parsed = DateTime::parse_from_rfc3339(db_time).expect("db_time is RFC 3339");
        if let Some(prev) = previous {
            assert!(parsed >= prev, "{} went backwards", db_time);
        }
        previous = Some(parsed);
    }

    database.close().await;
}

#[actix_rt::test]
#[ignore] // Needs Postgres via PG* env vars.
async fn test_execute_decodes_columns() {
    let database = Database::connect_lazy(&DatabaseConfig::default());

    let rows = database
        .execute("SELECT 1::int4 AS one, 'x'::text AS letter, true AS flag, NULL::int8 AS nothing")
        .await
        .expect("query should succeed");

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["one"], 1);
    assert_eq!(row["letter"], "x");
    assert_eq!(row["flag"], true);
    assert_eq!(row["nothing"], Value::Null);
    let columns: Vec<&str> = row.keys().map(String::as_str).collect();
    assert_eq!(columns, ["one", "letter", "flag", "nothing"]);

    database.close().await;
}
