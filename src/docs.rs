use crate::api::attendance::{AttendanceRecord, MarkAttendance, UserAttendanceResponse};
use crate::model::user::User;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Geolocation Attendance API",
        version = "1.0.0",
        description = r#"
## Geolocation Attendance Backend

Marks attendance from submitted GPS coordinates: the server computes the
geodesic distance to the office and records whether the submission falls
inside the attendance zone.

### Endpoints
- **Mark Attendance** — submit coordinates, get the zone verdict and distance
- **User Attendance** — per-user history, most recent first
- **Users** — list known users

Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::mark_attendance,
        crate::api::attendance::user_attendance,
        crate::api::users::list_users,
    ),
    components(
        schemas(
            MarkAttendance,
            AttendanceRecord,
            UserAttendanceResponse,
            User,
        )
    ),
    tags(
        (name = "Attendance", description = "Attendance marking and history APIs"),
        (name = "Users", description = "User listing APIs"),
    )
)]
pub struct ApiDoc;
