//! Synthetic job record generation.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use autosys_entity::JobRecord;
use autosys_entity::job::format_minute_of_day;
use autosys_entity::job::vocabulary::{JOB_TYPES, MACHINES, OWNERS, STATUSES, WEEKDAYS};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Hands out `JOB_nnnnn` names that do not collide with any taken name.
///
/// The numeric suffix only ever advances, so each call costs at most one
/// extra check per name already taken.
#[derive(Debug)]
struct NameAllocator {
    taken: HashSet<String>,
    next: u64,
}

impl NameAllocator {
    fn new<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            taken: existing.into_iter().map(str::to_string).collect(),
            next: 0,
        }
    }

    fn allocate(&mut self) -> (u64, String) {
        loop {
            let suffix = self.next;
            self.next += 1;
            let name = format!("JOB_{suffix:05}");
            if self.taken.insert(name.clone()) {
                return (suffix, name);
            }
        }
    }
}

/// Generates `count` records whose names are unique against `existing` and
/// against each other. A non-positive `count` yields nothing.
///
/// Dependencies are drawn from every name that exists before the record is
/// produced, including records generated earlier in the same batch.
pub fn generate_jobs<R: Rng + ?Sized>(
    existing: &[JobRecord],
    count: i64,
    rng: &mut R,
) -> Vec<JobRecord> {
    let count = usize::try_from(count).unwrap_or(0);
    let mut names = NameAllocator::new(existing.iter().map(|j| j.job_name.as_str()));
    let mut pool: Vec<String> = existing.iter().map(|j| j.job_name.clone()).collect();
    let mut generated = Vec::new();

    for _ in 0..count {
        let (suffix, job_name) = names.allocate();
        let (start_time, end_time) = random_window(rng);
        let dependencies = random_dependencies(&pool, rng);

        let record = JobRecord {
            job_name: job_name.clone(),
            job_type: pick(&JOB_TYPES, rng),
            status: pick(&STATUSES, rng),
            priority: rng.gen_range(1..=5),
            owner: pick(&OWNERS, rng),
            command: format!("/scripts/job_{suffix}.sh"),
            machine: pick(&MACHINES, rng),
            start_time: Some(start_time),
            end_time: Some(end_time),
            run_days: Some(random_run_days(rng)),
            dependencies,
            description: Some(format!("Auto-generated job #{suffix} for testing")),
        };

        generated.push(record);
        pool.push(job_name);
    }

    generated
}

fn pick<R: Rng + ?Sized>(values: &[&str], rng: &mut R) -> String {
    values.choose(rng).copied().unwrap_or_default().to_string()
}

/// Start and end as `HH:MM`. The end is 15 to 90 minutes after the start
/// and wraps past midnight.
fn random_window<R: Rng + ?Sized>(rng: &mut R) -> (String, String) {
    let start = rng.gen_range(0..24) * 60 + rng.gen_range(0..60);
    let end = (start + rng.gen_range(15..=90)) % MINUTES_PER_DAY;
    (format_minute_of_day(start), format_minute_of_day(end))
}

/// Draws 1..=7 weekdays with replacement and keeps the distinct ones.
fn random_run_days<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let draws = rng.gen_range(1..=7);
    let mut chosen = [false; WEEKDAYS.len()];
    for _ in 0..draws {
        chosen[rng.gen_range(0..WEEKDAYS.len())] = true;
    }

    WEEKDAYS
        .iter()
        .zip(chosen)
        .filter(|(_, hit)| *hit)
        .map(|(day, _)| day.to_string())
        .collect()
}

/// Draws 0..=3 names from `pool` with replacement. `None` when nothing is
/// drawn or the pool is empty.
fn random_dependencies<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> Option<Vec<String>> {
    let draws = rng.gen_range(0..=3);
    if draws == 0 || pool.is_empty() {
        return None;
    }

    Some((0..draws).filter_map(|_| pool.choose(rng).cloned()).collect())
}
