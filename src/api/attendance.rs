use crate::{config::Config, model::attendance::Attendance, model::user::User, zone};
use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::error;
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = 1)]
    pub user_id: Option<i64>,
    #[schema(example = 34.052300)]
    pub latitude: Option<f64>,
    #[schema(example = -118.243700)]
    pub longitude: Option<f64>,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceRecord {
    pub id: i64,
    #[schema(example = "2025-01-01T09:00:00", format = "date-time", value_type = String)]
    pub timestamp: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    pub is_within_zone: bool,
}

#[derive(Serialize, ToSchema)]
pub struct UserAttendanceResponse {
    #[schema(example = "john.doe")]
    pub user: String,
    pub attendance_records: Vec<AttendanceRecord>,
}

async fn find_user(pool: &SqlitePool, user_id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Mark attendance from submitted GPS coordinates
#[utoipa::path(
    post,
    path = "/api/mark_attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance marked inside the zone", body = Object, example = json!({
            "message": "Attendance marked successfully. You are within the designated attendance zone. Distance: 7.31 meters.",
            "status": "in_zone",
            "distance_from_office_meters": 7.31
        })),
        (status = 200, description = "Attendance marked outside the zone", body = Object, example = json!({
            "message": "Attendance marked successfully. You are outside the designated attendance zone. Distance: 1041.83 meters.",
            "status": "out_of_zone",
            "distance_from_office_meters": 1041.83
        })),
        (status = 400, description = "Missing field", body = Object, example = json!({
            "message": "Missing user_id, latitude, or longitude"
        })),
        (status = 404, description = "Unknown user", body = Object, example = json!({
            "message": "User with ID 9999 not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    payload: web::Json<MarkAttendance>,
) -> impl Responder {
    let (Some(user_id), Some(latitude), Some(longitude)) =
        (payload.user_id, payload.latitude, payload.longitude)
    else {
        return HttpResponse::BadRequest().json(json!({
            "message": "Missing user_id, latitude, or longitude"
        }));
    };

    let user = match find_user(pool.get_ref(), user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({
                "message": format!("User with ID {user_id} not found")
            }));
        }
        Err(e) => {
            error!(error = %e, user_id, "User lookup failed");
            return HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            }));
        }
    };

    let distance = zone::distance_meters(
        config.office_latitude,
        config.office_longitude,
        latitude,
        longitude,
    );
    let is_within_zone = distance <= config.radius_threshold_meters;

    let result = sqlx::query(
        r#"
        INSERT INTO attendance (user_id, latitude, longitude, is_within_zone)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(user.id)
    .bind(latitude)
    .bind(longitude)
    .bind(is_within_zone)
    .execute(pool.get_ref())
    .await;

    if let Err(e) = result {
        error!(error = %e, user_id, "Failed to insert attendance record");
        return HttpResponse::InternalServerError().json(json!({
            "message": "Internal Server Error"
        }));
    }

    let rounded = zone::round_meters(distance);
    if is_within_zone {
        // 201 for in-zone vs 200 for out-of-zone mirrors the original service.
        HttpResponse::Created().json(json!({
            "message": format!(
                "Attendance marked successfully. You are within the designated attendance zone. Distance: {distance:.2} meters."
            ),
            "status": "in_zone",
            "distance_from_office_meters": rounded
        }))
    } else {
        HttpResponse::Ok().json(json!({
            "message": format!(
                "Attendance marked successfully. You are outside the designated attendance zone. Distance: {distance:.2} meters."
            ),
            "status": "out_of_zone",
            "distance_from_office_meters": rounded
        }))
    }
}

/// Attendance history for one user, most recent first
#[utoipa::path(
    get,
    path = "/api/user_attendance/{user_id}",
    params(
        ("user_id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Attendance history", body = UserAttendanceResponse),
        (status = 404, description = "Unknown user", body = Object, example = json!({
            "message": "User with ID 9999 not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn user_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> impl Responder {
    let user_id = path.into_inner();

    let user = match find_user(pool.get_ref(), user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({
                "message": format!("User with ID {user_id} not found")
            }));
        }
        Err(e) => {
            error!(error = %e, user_id, "User lookup failed");
            return HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            }));
        }
    };

    // Secondary id ordering keeps same-second inserts deterministic.
    let rows = sqlx::query_as::<_, Attendance>(
        r#"
        SELECT id, user_id, timestamp, latitude, longitude, is_within_zone
        FROM attendance
        WHERE user_id = ?
        ORDER BY timestamp DESC, id DESC
        "#,
    )
    .bind(user.id)
    .fetch_all(pool.get_ref())
    .await;

    match rows {
        Ok(rows) => {
            let attendance_records = rows
                .into_iter()
                .map(|att| AttendanceRecord {
                    id: att.id,
                    timestamp: att.timestamp,
                    latitude: att.latitude,
                    longitude: att.longitude,
                    is_within_zone: att.is_within_zone,
                })
                .collect();

            HttpResponse::Ok().json(UserAttendanceResponse {
                user: user.username,
                attendance_records,
            })
        }
        Err(e) => {
            error!(error = %e, user_id, "Failed to fetch attendance records");
            HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            }))
        }
    }
}
