use crate::args::{Args, ServeArgs};
use crate::config::roster_config::RosterConfig;
use crate::database;
use crate::database::Database;
use crate::error::ApiError;
use chrono::Local;
use log::{info, warn};
use models::attendance::AttendanceRecord;
use models::qr::QrPayload;
use models::requests::scan_attendance::{ScanAttendanceRequest, ScanAttendanceResponse};
use models::student::Student;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::Arc;
use warp::Filter;

// Every outcome is a 200 with a message; the scanner side forwards decoded
// text without validating it, so validity is decided here.
pub fn mark_attendance(db: &Database, qr_data: &str, date: &str) -> String {
    let payload = match qr_data.parse::<QrPayload>() {
        Ok(payload) => payload,
        Err(e) => {
            warn!("rejected scan payload: {}", e);
            return "Invalid QR code".to_string();
        }
    };

    let student = match db.fetch::<Student>(payload.roll_number.clone()) {
        Some(student) => student,
        None => return "No student found for this QR code".to_string(),
    };

    let key = AttendanceRecord::key_for(&student.roll_number, date);
    if db.fetch::<AttendanceRecord>(key).is_some() {
        format!("Attendance already marked for {}", student.name)
    } else {
        db.insert(AttendanceRecord::present(
            student.roll_number.clone(),
            date.to_string(),
        ));
        info!("attendance marked for roll {} on {}", student.roll_number, date);
        format!("Attendance marked for {}", student.name)
    }
}

fn scan_attendance_filter(
    db: Arc<Database>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::post()
        .and(warp::path("scan_attendance"))
        .and(warp::body::content_length_limit(1024 * 16))
        .and(warp::body::json())
        .and(warp::any().map(move || db.clone()))
        .map(|req: ScanAttendanceRequest, db: Arc<Database>| {
            let today = Local::now().format("%Y-%m-%d").to_string();
            let message = mark_attendance(&db, &req.qr_data, &today);
            warp::reply::json(&ScanAttendanceResponse { message })
        })
}

pub async fn attendance_server(args: &Args, serve_args: &ServeArgs) -> Result<(), ApiError> {
    let db = database::Database::new(&serve_args.database_path);

    if let Some(roster_path) = &serve_args.roster_path {
        let roster = RosterConfig::new(roster_path)?;

        for student in roster.students {
            if student.roll_number.is_empty() {
                warn!("skipping roster entry with an empty roll number ({})", student.name);
            } else {
                db.insert::<Student>(student);
            }
        }
    } else {
        info!("Starting attendance server...");

        warp::serve(scan_attendance_filter(db))
            .run((Ipv4Addr::from_str(&args.address).unwrap(), args.port))
            .await;
    }

    Ok(())
}
