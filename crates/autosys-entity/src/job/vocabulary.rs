//! Known values for the open-text job fields.
//!
//! These lists drive synthetic data generation. Records read from disk are
//! never checked against them.

/// Job statuses.
pub const STATUSES: [&str; 7] = [
    "SUCCESS",
    "FAILURE",
    "RUNNING",
    "INACTIVE",
    "TERMINATED",
    "WAITING",
    "ON_HOLD",
];

/// Job types.
pub const JOB_TYPES: [&str; 7] = ["CMD", "BOX", "FW", "FT", "SQL", "WSDOC", "JMX"];

/// Job owners.
pub const OWNERS: [&str; 8] = [
    "admin",
    "datauser",
    "reporter",
    "dbadmin",
    "sysadmin",
    "etluser",
    "scheduler",
    "batchuser",
];

/// Execution machines.
pub const MACHINES: [&str; 10] = [
    "server001",
    "server002",
    "server003",
    "server004",
    "server005",
    "dbserver001",
    "dbserver002",
    "appserver001",
    "appserver002",
    "webserver001",
];

/// Weekday tokens, Monday first.
pub const WEEKDAYS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];
