//! End-to-end tests for the transform + load pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tempfile::TempDir;

use pnc_cli::cli::{AddAnalystArgs, DateSwapPolicyArg, LoadArgs, RunArgs, StoreArgs, TransformArgs};
use pnc_cli::commands::{run_add_analyst, run_load, run_pipeline, run_transform};

const EXPORT: &str = "\
Name,Gender,Date_of_Birth,Mother_Blood_Type,Hospital_Name,User_Registration_Date,User_Registration_Time,Last_Checkup_Date,Last_Checkup_Time,Reminder_Date,No_of_Checkups,No_of_Missed_Checkups,Blood_Pressure,Delivery_Date,Baby_Gender,Delivery_Type,Weight,Gestational_Age,Fetal_Heart_Rate,Anomaly,Maternal_Mental_Health
Amina Diallo,Female,1992-04-11,A+,General Hospital,2023-05-10,09:15:00,2023-04-01,14:30:00,2023-06-01,10,3,118/76,2023-11-20,Female,Natural,68.4,38,142,None,Stable
Leila Haddad,Female,1988-09-30,O-,General Hospital,2023-01-12,10:00:00,2023-03-22,11:45:00,2023-04-15,8,1,142/91,2023-09-02,Male,C-Section,71.2,37,150,None,Anxious
Sofia Marino,Female,1995-02-17,B+,Riverside Clinic,2023-02-05,08:20:00,2023-06-18,09:10:00,2023-07-10,12,2,127/79,2023-10-30,Female,Natural,64.9,36,138,Detected,Stable
";

fn write_export(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("export.csv");
    fs::write(&path, EXPORT).expect("write export");
    path
}

fn store_args(database: &Path) -> StoreArgs {
    StoreArgs {
        database: Some(database.to_path_buf()),
        settings: None,
    }
}

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
    .expect("count rows")
}

#[test]
fn transform_writes_derived_export() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_export(&dir);
    let output = dir.path().join("derived.csv");

    let report = run_transform(&TransformArgs {
        input,
        output: output.clone(),
        date_swap_policy: DateSwapPolicyArg::Always,
    })
    .expect("transform");

    assert_eq!(report.rows, 3);
    assert_eq!(report.swapped_date_pairs, 1);

    let contents = fs::read_to_string(&output).expect("read derived");
    let header = contents.lines().next().expect("header line");
    assert_eq!(
        header,
        "Name,Date_of_Birth,Mother_Blood_Type,Hospital_Name,User_Registration_Date,\
         User_Registration_Time,Last_Checkup_Date,Last_Checkup_Time,Blood_Pressure,\
         Delivery_Date,Baby_Gender,Delivery_Type,Weight,Gestational_Age,Fetal_Heart_Rate,\
         Anomaly,Maternal_Mental_Health,Checkup,BP_Category"
    );
    // The reversed first row now registers before its checkup.
    let first = contents.lines().nth(1).expect("first row");
    assert!(first.contains("2023-04-01,14:30:00,2023-05-10,09:15:00"));
    assert!(first.ends_with("7,Normal"));
}

#[test]
fn pipeline_loads_transformed_export_into_registry() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_export(&dir);
    let output = dir.path().join("derived.csv");
    let database = dir.path().join("registry.db");

    let outcome = run_pipeline(&RunArgs {
        input,
        output,
        store: store_args(&database),
        date_swap_policy: DateSwapPolicyArg::Always,
    })
    .expect("pipeline");

    let summary = outcome.load.summary.expect("load summary");
    assert_eq!(summary.records, 3);
    assert_eq!(summary.hospitals, 2);

    let conn = Connection::open(&database).expect("open registry");
    assert_eq!(count(&conn, "Hospital"), 2);
    assert_eq!(count(&conn, "Woman"), 3);
    assert_eq!(count(&conn, "Pregnancy"), 3);
    assert_eq!(count(&conn, "Checkup"), 3);

    // Two women share General Hospital through the same identifier.
    let shared: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM Woman w
             JOIN Hospital h ON h.id = w.hospital_id
             WHERE h.name = 'General Hospital'",
            [],
            |row| row.get(0),
        )
        .expect("join count");
    assert_eq!(shared, 2);

    // The swapped pair landed in the registry corrected, and the count
    // columns (dropped by the transform) loaded as NULL.
    let (registration, checkups): (Option<String>, Option<i64>) = conn
        .query_row(
            "SELECT p.first_registration_date, p.number_of_checkups
             FROM Pregnancy p JOIN Woman w ON w.id = p.woman_id
             WHERE w.name = 'Amina Diallo'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("pregnancy row");
    assert_eq!(registration.as_deref(), Some("2023-04-01"));
    assert_eq!(checkups, None);

    let category: Option<String> = conn
        .query_row(
            "SELECT c.bp_category FROM Checkup c
             JOIN Pregnancy p ON p.id = c.pregnancy_id
             JOIN Woman w ON w.id = p.woman_id
             WHERE w.name = 'Leila Haddad'",
            [],
            |row| row.get(0),
        )
        .expect("checkup row");
    assert_eq!(category.as_deref(), Some("Hypertension Stage 2"));
}

#[test]
fn raw_exports_load_without_transformation() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_export(&dir);
    let database = dir.path().join("registry.db");

    let outcome = run_load(&LoadArgs {
        input,
        store: store_args(&database),
        schema_only: false,
    })
    .expect("load");
    let summary = outcome.summary.expect("load summary");
    assert_eq!(summary.records, 3);

    let conn = Connection::open(&database).expect("open registry");
    let checkups: Option<i64> = conn
        .query_row(
            "SELECT number_of_checkups FROM Pregnancy LIMIT 1",
            [],
            |row| row.get(0),
        )
        .expect("pregnancy row");
    assert_eq!(checkups, Some(10));
}

#[test]
fn schema_only_creates_tables_without_rows() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_export(&dir);
    let database = dir.path().join("registry.db");

    let outcome = run_load(&LoadArgs {
        input,
        store: store_args(&database),
        schema_only: true,
    })
    .expect("load");
    assert!(outcome.summary.is_none());

    let conn = Connection::open(&database).expect("open registry");
    assert_eq!(count(&conn, "Woman"), 0);
}

#[test]
fn settings_file_supplies_database_path() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_export(&dir);
    let database = dir.path().join("registry.db");
    let settings = dir.path().join("settings.json");
    fs::write(
        &settings,
        format!(r#"{{ "database": {:?} }}"#, database.display().to_string()),
    )
    .expect("write settings");

    run_load(&LoadArgs {
        input,
        store: StoreArgs {
            database: None,
            settings: Some(settings),
        },
        schema_only: false,
    })
    .expect("load via settings");
    assert!(database.exists());
}

#[test]
fn add_analyst_registers_account() {
    let dir = TempDir::new().expect("temp dir");
    let database = dir.path().join("registry.db");

    let id = run_add_analyst(&AddAnalystArgs {
        username: "asma".to_string(),
        password: "secret".to_string(),
        store: store_args(&database),
    })
    .expect("add analyst");
    assert_eq!(id.as_i64(), 1);

    let conn = Connection::open(&database).expect("open registry");
    assert_eq!(count(&conn, "Analyst"), 1);
}

#[test]
fn missing_database_configuration_is_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_export(&dir);
    let error = run_load(&LoadArgs {
        input,
        store: StoreArgs {
            database: None,
            settings: None,
        },
        schema_only: true,
    })
    .unwrap_err();
    assert!(error.to_string().contains("no registry database configured"));
}
