use std::sync::Arc;

use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::{redis, Pool};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    #[schema(example = "ok")]
    status: &'static str,
    #[schema(example = "ok")]
    database: &'static str,
    #[schema(example = "ok")]
    redis: &'static str,
}

/// Liveness probe, no I/O
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

async fn database_status(db: &DatabaseConnection) -> &'static str {
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1");
    match db.execute(ping).await {
        Ok(_) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness: database check failed");
            "unhealthy"
        }
    }
}

async fn redis_status(pool: &Pool) -> &'static str {
    let mut conn = match pool.get().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!(error = %e, "Readiness: no Redis connection");
            return "unhealthy";
        }
    };

    match redis::cmd("PING").query_async::<String>(&mut conn).await {
        Ok(_) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness: Redis PING failed");
            "unhealthy"
        }
    }
}

/// Readiness probe: database and Redis must both answer
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Dependencies reachable", body = ReadinessResponse),
        (status = 503, description = "A dependency is down", body = ReadinessResponse),
    )
)]
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis: web::Data<Arc<Pool>>,
) -> impl Responder {
    let (database, redis) = futures::join!(database_status(&db), redis_status(&redis));

    if database == "ok" && redis == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database,
            redis,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database,
            redis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use deadpool_redis::{Config, Runtime};
    use sea_orm::Database;

    #[actix_web::test]
    async fn test_health_is_ok() {
        let app = test::init_service(App::new().service(health)).await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

        assert_eq!(resp.status(), 200);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["status"], "ok");
    }

    #[actix_web::test]
    async fn test_ready_reports_unreachable_redis() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        // nothing listens on port 1
        let pool = Config::from_url("redis://127.0.0.1:1")
            .create_pool(Some(Runtime::Tokio1))
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(db)))
                .app_data(web::Data::new(Arc::new(pool)))
                .service(readiness),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/ready").to_request()).await;

        assert_eq!(resp.status(), 503);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["database"], "ok");
        assert_eq!(json["redis"], "unhealthy");
    }
}
