use crate::api::attendance::{
    AttendanceDeleted, AttendanceList, AttendanceRecorded, AttendanceUpdated,
};
use crate::api::event::{EventCreated, EventDeleted, EventList, EventUpdated};
use crate::api::user::{CreatedUser, StudentList};
use crate::error::ErrorBody;
use crate::model::attendance::{AttendanceEntry, NewAttendance, StatusUpdate};
use crate::model::event::{Event, EventFields};
use crate::model::user::{Credentials, StudentName, User, UserFields, UserSummary};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Yamix Attendance API",
        version = "0.1.0",
        description = r#"
## Event attendance tracking

- **Users**: students (`estudiante`) and teachers (`profesor`), login by email and password
- **Events**: name, type, location and time window
- **Attendance**: one entry per user interaction, with a free-form status such as `presente` or `ausente`

Teacher-only resources expect the caller's credentials in the
`X-User-Email` and `X-User-Password` headers.

Failures share one body: `{"status": <code>, "success": false, "message": "..."}`.
"#,
    ),
    paths(
        crate::api::user::login,
        crate::api::user::create_user,
        crate::api::user::check_email,
        crate::api::user::list_users,
        crate::api::user::list_students,
        crate::api::user::get_user,
        crate::api::user::update_user,
        crate::api::user::delete_user,

        crate::api::teacher::resource,

        crate::api::event::create_event,
        crate::api::event::list_events,
        crate::api::event::update_event,
        crate::api::event::delete_event,

        crate::api::attendance::record_attendance,
        crate::api::attendance::list_attendance,
        crate::api::attendance::update_attendance,
        crate::api::attendance::delete_attendance
    ),
    components(
        schemas(
            ErrorBody,
            User,
            UserSummary,
            UserFields,
            Credentials,
            StudentName,
            StudentList,
            CreatedUser,
            Event,
            EventFields,
            EventCreated,
            EventList,
            EventUpdated,
            EventDeleted,
            AttendanceEntry,
            NewAttendance,
            StatusUpdate,
            AttendanceRecorded,
            AttendanceList,
            AttendanceUpdated,
            AttendanceDeleted
        )
    ),
    tags(
        (name = "User", description = "User directory"),
        (name = "Teacher", description = "Resources gated on the profesor role"),
        (name = "Event", description = "Event catalog"),
        (name = "Attendance", description = "Attendance ledger"),
    )
)]
pub struct ApiDoc;
