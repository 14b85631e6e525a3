use crate::model::user::User;
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::error;

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [User], example = json!([
            { "id": 1, "username": "admin" },
            { "id": 2, "username": "john.doe" }
        ])),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn list_users(pool: web::Data<SqlitePool>) -> impl Responder {
    let result = sqlx::query_as::<_, User>("SELECT id, username FROM users")
        .fetch_all(pool.get_ref())
        .await;

    match result {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => {
            error!(error = %e, "Failed to list users");
            HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            }))
        }
    }
}
