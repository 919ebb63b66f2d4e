//! Overview view model assembled from a snapshot

use chrono::NaiveDateTime;
use kurs_core::record_ref::resolve;
use kurs_core::{Collection, Course, RecordId, Snapshot};
use serde::Serialize;

use crate::aggregate::{
    CourseEnrollmentCount, PaymentCounts, active_courses, enrollment_count_for,
    enrollments_per_course, payment_counts, payment_rate, total_revenue, upcoming_courses,
};

/// Everything the overview page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    /// Headline figures
    pub headline: Headline,
    /// One tile per collection, in fixed order
    pub kpis: Vec<KpiTile>,
    /// Next courses to start
    pub upcoming: Vec<UpcomingCourse>,
    /// Bar chart data, most enrolled first
    pub enrollments_per_course: Vec<CourseEnrollmentCount>,
    /// Payment status panel
    pub payments: PaymentPanel,
    /// Reference time the figures were derived for
    pub generated_at: NaiveDateTime,
}

/// Headline figures of the overview
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Headline {
    /// Courses running right now
    pub active_courses: usize,
    /// Listed upcoming courses
    pub upcoming_courses: usize,
    /// Revenue over paid enrollments
    pub total_revenue: f64,
}

/// Size of one collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiTile {
    /// Counted collection
    pub collection: Collection,
    /// Tile label
    pub label: &'static str,
    /// Number of records
    pub value: usize,
}

/// One entry of the upcoming course list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingCourse {
    /// 1-based position in the list
    pub rank: usize,
    /// Course identifier
    pub record_id: RecordId,
    /// Course title
    pub title: Option<String>,
    /// Start date as sent by the service
    pub start_date: Option<String>,
    /// Name of the resolved instructor
    pub instructor: Option<String>,
    /// Enrollments referencing the course
    pub enrollment_count: usize,
}

/// Paid versus unpaid enrollments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentPanel {
    /// Paid enrollments
    pub paid: usize,
    /// Unpaid enrollments
    pub unpaid: usize,
    /// All enrollments
    pub total: usize,
    /// Paid share in percent; absent without enrollments
    pub rate: Option<u32>,
}

impl From<PaymentCounts> for PaymentPanel {
    fn from(counts: PaymentCounts) -> Self {
        Self {
            paid: counts.paid,
            unpaid: counts.unpaid,
            total: counts.total,
            rate: payment_rate(&counts),
        }
    }
}

impl Overview {
    /// Derive the overview of `snapshot` as seen at `now`
    #[must_use]
    pub fn derive(snapshot: &Snapshot, now: NaiveDateTime) -> Self {
        let active = active_courses(&snapshot.courses, now);
        let upcoming: Vec<UpcomingCourse> = upcoming_courses(&snapshot.courses, now)
            .into_iter()
            .enumerate()
            .map(|(index, course)| upcoming_entry(snapshot, index + 1, course))
            .collect();

        let kpis = Collection::ALL
            .into_iter()
            .map(|collection| KpiTile {
                collection,
                label: collection.label(),
                value: snapshot.count(collection),
            })
            .collect();

        Self {
            headline: Headline {
                active_courses: active.len(),
                upcoming_courses: upcoming.len(),
                total_revenue: total_revenue(&snapshot.enrollments, &snapshot.courses),
            },
            kpis,
            upcoming,
            enrollments_per_course: enrollments_per_course(
                &snapshot.courses,
                &snapshot.enrollments,
            ),
            payments: payment_counts(&snapshot.enrollments).into(),
            generated_at: now,
        }
    }

    /// Overview of an empty snapshot, served when fetching fails
    #[must_use]
    pub fn empty(now: NaiveDateTime) -> Self {
        Self::derive(&Snapshot::default(), now)
    }
}

fn upcoming_entry(snapshot: &Snapshot, rank: usize, course: &Course) -> UpcomingCourse {
    let instructor = resolve(&snapshot.instructors, course.fields.dozent.as_ref())
        .and_then(|instructor| instructor.fields.name.clone());

    UpcomingCourse {
        rank,
        record_id: course.record_id.clone(),
        title: course.fields.titel.clone(),
        start_date: course.fields.startdatum.clone(),
        instructor,
        enrollment_count: enrollment_count_for(&snapshot.enrollments, &course.record_id),
    }
}
