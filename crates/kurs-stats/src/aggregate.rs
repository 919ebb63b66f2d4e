//! Derived statistics over a snapshot of the five collections
//!
//! Every function here is pure and leaves its inputs untouched. Dates are
//! compared as local wall-clock time; a course date that is missing or cannot
//! be parsed never satisfies a date condition.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use kurs_core::utils::truncate_chars;
use kurs_core::{Course, Enrollment, extract_record_id};
use serde::Serialize;

/// Maximum number of upcoming courses listed
pub const UPCOMING_LIMIT: usize = 5;

/// Maximum number of courses in the enrollment ranking
pub const TOP_COURSES_LIMIT: usize = 6;

/// Maximum label length, in characters, of a ranked course
pub const LABEL_MAX_CHARS: usize = 16;

/// Label used for a course without title
pub const UNKNOWN_TITLE: &str = "Unbekannt";

/// Enrollment totals split by payment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PaymentCounts {
    /// Paid enrollments
    pub paid: usize,
    /// Unpaid enrollments
    pub unpaid: usize,
    /// All enrollments
    pub total: usize,
}

/// Number of enrollments of one course, labelled for the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseEnrollmentCount {
    /// Course title, defaulted and truncated
    pub name: String,
    /// Enrollments referencing the course
    pub count: usize,
}

/// Courses running at `now`: both dates present and `start <= now <= end`
pub fn active_courses(courses: &[Course], now: NaiveDateTime) -> Vec<&Course> {
    courses
        .iter()
        .filter(|course| {
            match (course.fields.starts_at(), course.fields.ends_at()) {
                (Some(start), Some(end)) => start <= now && end >= now,
                _ => false,
            }
        })
        .collect()
}

/// The next courses to start after `now`, earliest first
///
/// Courses sharing a start date keep their collection order.
pub fn upcoming_courses(courses: &[Course], now: NaiveDateTime) -> Vec<&Course> {
    let mut upcoming: Vec<(NaiveDateTime, &Course)> = courses
        .iter()
        .filter_map(|course| {
            course
                .fields
                .starts_at()
                .filter(|start| *start > now)
                .map(|start| (start, course))
        })
        .collect();

    upcoming.sort_by_key(|(start, _)| *start);
    upcoming
        .into_iter()
        .take(UPCOMING_LIMIT)
        .map(|(_, course)| course)
        .collect()
}

/// Split enrollments into paid and unpaid
pub fn payment_counts(enrollments: &[Enrollment]) -> PaymentCounts {
    let paid = enrollments
        .iter()
        .filter(|enrollment| enrollment.fields.is_paid())
        .count();

    PaymentCounts {
        paid,
        unpaid: enrollments.len() - paid,
        total: enrollments.len(),
    }
}

/// Sum of course prices over paid enrollments whose course resolves
///
/// An unpaid enrollment, one whose course reference is missing or dangling,
/// and a course without price all contribute 0.
pub fn total_revenue(enrollments: &[Enrollment], courses: &[Course]) -> f64 {
    let by_id = index_by_id(courses);

    enrollments
        .iter()
        .filter(|enrollment| enrollment.fields.is_paid())
        .filter_map(|enrollment| extract_record_id(enrollment.fields.kurs.as_ref()))
        .filter_map(|course_id| by_id.get(course_id))
        .map(|course| course.fields.preis.unwrap_or(0.0))
        .fold(0.0, |total, price| total + price)
}

/// Number of enrollments referencing `course_id`, paid or not
pub fn enrollment_count_for(enrollments: &[Enrollment], course_id: &str) -> usize {
    enrollments
        .iter()
        .filter(|enrollment| extract_record_id(enrollment.fields.kurs.as_ref()) == Some(course_id))
        .count()
}

/// Courses ranked by enrollment count, most enrolled first
///
/// Courses without enrollments are dropped and at most
/// [`TOP_COURSES_LIMIT`] entries are kept. Equal counts keep collection order.
pub fn enrollments_per_course(
    courses: &[Course],
    enrollments: &[Enrollment],
) -> Vec<CourseEnrollmentCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for course_id in enrollments
        .iter()
        .filter_map(|enrollment| extract_record_id(enrollment.fields.kurs.as_ref()))
    {
        *counts.entry(course_id).or_default() += 1;
    }

    let mut ranked: Vec<CourseEnrollmentCount> = courses
        .iter()
        .filter_map(|course| {
            let count = counts.get(course.record_id.as_str()).copied().unwrap_or(0);
            (count > 0).then(|| CourseEnrollmentCount {
                name: course_label(course),
                count,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(TOP_COURSES_LIMIT);
    ranked
}

/// Share of paid enrollments in percent, rounded to the nearest integer
///
/// `None` when there are no enrollments.
pub fn payment_rate(counts: &PaymentCounts) -> Option<u32> {
    if counts.total == 0 {
        return None;
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let rate = (counts.paid as f64 / counts.total as f64 * 100.0).round() as u32;
    Some(rate)
}

/// Chart label of a course
pub fn course_label(course: &Course) -> String {
    let title = course.fields.titel.as_deref().unwrap_or(UNKNOWN_TITLE);
    truncate_chars(title, LABEL_MAX_CHARS)
}

/// Courses by identifier; the first record wins on duplicate identifiers
fn index_by_id(courses: &[Course]) -> HashMap<&str, &Course> {
    let mut by_id = HashMap::with_capacity(courses.len());
    for course in courses {
        by_id.entry(course.record_id.as_str()).or_insert(course);
    }
    by_id
}
