//! Shared fixtures for API integration tests

#![allow(dead_code, clippy::unwrap_used)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use kurs_api::{AppState, build_router};
use kurs_client::{DataSource, MockDataSource};
use kurs_core::types::{CourseFields, EnrollmentFields, InstructorFields, RoomFields};
use kurs_core::{Config, Record, RecordRef, Snapshot};
use std::sync::Arc;
use tower::ServiceExt;

/// Small but complete data set: one running course, one far-future course
pub fn sample_snapshot() -> Snapshot {
    Snapshot {
        instructors: vec![Record::new("d1", InstructorFields {
            name: Some("Clara Weber".to_string()),
            ..InstructorFields::default()
        })],
        rooms: vec![Record::new("r1", RoomFields {
            raumname: Some("Atelier".to_string()),
            ..RoomFields::default()
        })],
        courses: vec![
            Record::new("c1", CourseFields {
                titel: Some("Aquarell".to_string()),
                startdatum: Some("2000-01-01".to_string()),
                enddatum: Some("2999-12-31".to_string()),
                preis: Some(100.0),
                ..CourseFields::default()
            }),
            Record::new("c2", CourseFields {
                titel: Some("Töpfern".to_string()),
                startdatum: Some("2998-03-01".to_string()),
                preis: Some(80.0),
                dozent: Some(RecordRef::from("https://host/rest/apps/d/records/d1")),
                ..CourseFields::default()
            }),
        ],
        enrollments: vec![
            enrollment("e1", "c1", true),
            enrollment("e2", "c1", false),
            enrollment("e3", "c2", true),
        ],
        ..Snapshot::default()
    }
}

/// Enrollment referencing a course by plain id
pub fn enrollment(id: &str, course: &str, paid: bool) -> kurs_core::Enrollment {
    Record::new(id, EnrollmentFields {
        kurs: Some(RecordRef::from(course)),
        bezahlt: Some(paid),
        ..EnrollmentFields::default()
    })
}

/// Router over an arbitrary source
pub fn router_with(source: impl DataSource + 'static) -> Router {
    build_router(Arc::new(AppState::with_source(
        Config::default(),
        Arc::new(source),
    )))
}

/// Router over the sample snapshot
pub fn sample_router() -> Router {
    router_with(MockDataSource::new(sample_snapshot()))
}

/// Issue a GET and return status and body
pub async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

/// Issue a GET and parse the JSON body
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(router, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}
