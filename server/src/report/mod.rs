use crate::args::ReportArgs;
use crate::database::Database;
use crate::error::ApiError;
use log::info;
use models::attendance::AttendanceRecord;
use models::student::Student;
use std::collections::HashMap;

// Left join of the roster against attendance: students who never scanned
// still appear once, with empty date and status columns.
pub fn export_report(report_args: &ReportArgs) -> Result<(), ApiError> {
    let db = Database::new(&report_args.database_path);

    let students = db.all::<Student>();
    let mut records = db.all::<AttendanceRecord>();
    records.sort_by(|a, b| a.date.cmp(&b.date).then(a.roll_number.cmp(&b.roll_number)));

    let names: HashMap<&str, &str> = students
        .iter()
        .map(|s| (s.roll_number.as_str(), s.name.as_str()))
        .collect();

    let mut writer = csv::Writer::from_path(&report_args.output_path)?;
    writer.write_record(&["roll_number", "name", "date", "status"])?;

    for record in &records {
        let name = names.get(record.roll_number.as_str()).copied().unwrap_or("");
        writer.write_record(&[
            record.roll_number.as_str(),
            name,
            record.date.as_str(),
            record.status.as_str(),
        ])?;
    }

    for student in &students {
        if !records.iter().any(|r| r.roll_number == student.roll_number) {
            writer.write_record(&[student.roll_number.as_str(), student.name.as_str(), "", ""])?;
        }
    }

    writer.flush()?;
    info!("report written to {}", report_args.output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::args::ReportArgs;
    use crate::database::Database;
    use crate::report::export_report;
    use models::attendance::AttendanceRecord;
    use models::student::Student;

    #[test]
    fn test_report_joins_students_and_attendance() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("db");

        {
            let db = Database::new(&db_path);
            db.insert(Student::new("41".to_string(), "Alice".to_string()));
            db.insert(Student::new("42".to_string(), "Bob".to_string()));
            db.insert(AttendanceRecord::present(
                "41".to_string(),
                "2026-03-02".to_string(),
            ));
        }

        let report_args = ReportArgs {
            database_path: db_path,
            output_path: dir.path().join("report.csv"),
        };
        export_report(&report_args).unwrap();

        let report = std::fs::read_to_string(&report_args.output_path).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "roll_number,name,date,status");
        assert_eq!(lines[1], "41,Alice,2026-03-02,Present");
        assert_eq!(lines[2], "42,Bob,,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_report_orders_records_by_date() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("db");

        {
            let db = Database::new(&db_path);
            db.insert(Student::new("41".to_string(), "Alice".to_string()));
            db.insert(Student::new("42".to_string(), "Bob".to_string()));
            db.insert(AttendanceRecord::present(
                "42".to_string(),
                "2026-03-03".to_string(),
            ));
            db.insert(AttendanceRecord::present(
                "41".to_string(),
                "2026-03-02".to_string(),
            ));
        }

        let report_args = ReportArgs {
            database_path: db_path,
            output_path: dir.path().join("report.csv"),
        };
        export_report(&report_args).unwrap();

        let report = std::fs::read_to_string(&report_args.output_path).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[1], "41,Alice,2026-03-02,Present");
        assert_eq!(lines[2], "42,Bob,2026-03-03,Present");
    }
}
