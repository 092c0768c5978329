//! The default job collection written when no persisted file exists.

use super::model::JobRecord;

struct SeedRow {
    name: &'static str,
    job_type: &'static str,
    status: &'static str,
    priority: i64,
    owner: &'static str,
    command: &'static str,
    machine: &'static str,
    start: &'static str,
    end: Option<&'static str>,
    days: &'static [&'static str],
    deps: Option<&'static [&'static str]>,
    description: &'static str,
}

const EVERY_DAY: &[&str] = &["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

const SEED: [SeedRow; 6] = [
    SeedRow {
        name: "DAILY_BACKUP",
        job_type: "CMD",
        status: "SUCCESS",
        priority: 1,
        owner: "admin",
        command: "/scripts/backup.sh",
        machine: "server001",
        start: "23:00",
        end: Some("23:30"),
        days: &["MON", "TUE", "WED", "THU", "FRI"],
        deps: Some(&["SYSTEM_CHECK"]),
        description: "Daily backup of system files",
    },
    SeedRow {
        name: "DATA_PROCESSING",
        job_type: "CMD",
        status: "RUNNING",
        priority: 2,
        owner: "datauser",
        command: "/scripts/process_data.sh",
        machine: "server002",
        start: "01:00",
        end: Some("02:30"),
        days: &["MON", "WED", "FRI"],
        deps: Some(&["DAILY_BACKUP"]),
        description: "Process daily data uploads",
    },
    SeedRow {
        name: "REPORT_GENERATION",
        job_type: "BOX",
        status: "INACTIVE",
        priority: 3,
        owner: "reporter",
        command: "/scripts/generate_reports.sh",
        machine: "server003",
        start: "06:00",
        end: None,
        days: &["MON"],
        deps: Some(&["DATA_PROCESSING"]),
        description: "Generate weekly reports",
    },
    SeedRow {
        name: "SYSTEM_CHECK",
        job_type: "CMD",
        status: "FAILURE",
        priority: 1,
        owner: "admin",
        command: "/scripts/check_system.sh",
        machine: "server001",
        start: "22:00",
        end: Some("22:15"),
        days: EVERY_DAY,
        deps: None,
        description: "Daily system health check",
    },
    SeedRow {
        name: "DATABASE_CLEANUP",
        job_type: "CMD",
        status: "SUCCESS",
        priority: 2,
        owner: "dbadmin",
        command: "/scripts/cleanup_db.sh",
        machine: "dbserver001",
        start: "04:00",
        end: Some("04:45"),
        days: &["SUN"],
        deps: Some(&["DAILY_BACKUP"]),
        description: "Weekly database cleanup and optimization",
    },
    SeedRow {
        name: "LOG_ROTATION",
        job_type: "CMD",
        status: "SUCCESS",
        priority: 2,
        owner: "admin",
        command: "/scripts/rotate_logs.sh",
        machine: "server001",
        start: "00:00",
        end: Some("00:15"),
        days: EVERY_DAY,
        deps: None,
        description: "Rotate system logs daily",
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Builds the six-record seed collection.
pub fn seed_jobs() -> Vec<JobRecord> {
    SEED.iter()
        .map(|row| JobRecord {
            job_name: row.name.to_string(),
            job_type: row.job_type.to_string(),
            status: row.status.to_string(),
            priority: row.priority,
            owner: row.owner.to_string(),
            command: row.command.to_string(),
            machine: row.machine.to_string(),
            start_time: Some(row.start.to_string()),
            end_time: row.end.map(str::to_string),
            run_days: Some(owned(row.days)),
            dependencies: row.deps.map(owned),
            description: Some(row.description.to_string()),
        })
        .collect()
}
