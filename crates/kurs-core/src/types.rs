//! Record types of the course-management data service

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::record_ref::RecordRef;
use crate::utils::parse_iso_datetime;

/// Opaque record identifier, unique within its collection
pub type RecordId = String;

/// The five record collections shown on the overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Dozenten
    Instructors,
    /// Teilnehmer
    Participants,
    /// Räume
    Rooms,
    /// Kurse
    Courses,
    /// Anmeldungen
    Enrollments,
}

impl Collection {
    /// All collections, in overview order
    pub const ALL: [Self; 5] = [
        Self::Instructors,
        Self::Participants,
        Self::Rooms,
        Self::Courses,
        Self::Enrollments,
    ];

    /// Display label of the collection's KPI tile
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Instructors => "Dozenten",
            Self::Participants => "Teilnehmer",
            Self::Rooms => "Räume",
            Self::Courses => "Kurse gesamt",
            Self::Enrollments => "Anmeldungen",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Instructors => write!(f, "dozenten"),
            Self::Participants => write!(f, "teilnehmer"),
            Self::Rooms => write!(f, "raeume"),
            Self::Courses => write!(f, "kurse"),
            Self::Enrollments => write!(f, "anmeldungen"),
        }
    }
}

/// A record as delivered by the data service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "F: Deserialize<'de> + Default"))]
pub struct Record<F> {
    /// Record identifier
    #[serde(default)]
    pub record_id: RecordId,

    /// Creation timestamp as sent by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub createdat: Option<String>,

    /// Last update timestamp as sent by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updatedat: Option<String>,

    /// Collection specific fields
    #[serde(default)]
    pub fields: F,
}

impl<F> Record<F> {
    /// Create a record with the given identifier and fields
    pub fn new(record_id: impl Into<RecordId>, fields: F) -> Self {
        Self {
            record_id: record_id.into(),
            createdat: None,
            updatedat: None,
            fields,
        }
    }
}

/// Fields of an instructor record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructorFields {
    /// Full name
    #[serde(default)]
    pub name: Option<String>,
    /// E-mail address
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number
    #[serde(default)]
    pub telefon: Option<String>,
    /// Subject area
    #[serde(default)]
    pub fachgebiet: Option<String>,
}

/// Fields of a participant record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantFields {
    /// Full name
    #[serde(default)]
    pub name: Option<String>,
    /// E-mail address
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number
    #[serde(default)]
    pub telefon: Option<String>,
    /// Date of birth
    #[serde(default)]
    pub geburtsdatum: Option<String>,
}

/// Fields of a room record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomFields {
    /// Room name
    #[serde(default)]
    pub raumname: Option<String>,
    /// Building
    #[serde(default)]
    pub gebaeude: Option<String>,
    /// Seat capacity; the service may send whole numbers as floats
    #[serde(default)]
    pub kapazitaet: Option<f64>,
}

/// Fields of a course record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseFields {
    /// Course title
    #[serde(default)]
    pub titel: Option<String>,
    /// Description
    #[serde(default)]
    pub beschreibung: Option<String>,
    /// First day, ISO-8601
    #[serde(default)]
    pub startdatum: Option<String>,
    /// Last day, ISO-8601
    #[serde(default)]
    pub enddatum: Option<String>,
    /// Maximum number of participants; the service may send whole numbers as floats
    #[serde(default)]
    pub max_teilnehmer: Option<f64>,
    /// Price in euros
    #[serde(default)]
    pub preis: Option<f64>,
    /// Reference to the instructor
    #[serde(default)]
    pub dozent: Option<RecordRef>,
    /// Reference to the room
    #[serde(default)]
    pub raum: Option<RecordRef>,
}

impl CourseFields {
    /// Parsed start date
    ///
    /// Unparseable values count as absent, so such a course is neither active
    /// nor upcoming. Browser date comparisons would instead treat an invalid
    /// date as never before or after anything, which makes the course active.
    #[must_use]
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        self.startdatum.as_deref().and_then(parse_iso_datetime)
    }

    /// Parsed end date; unparseable values count as absent, see [`Self::starts_at`]
    #[must_use]
    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        self.enddatum.as_deref().and_then(parse_iso_datetime)
    }
}

/// Fields of an enrollment record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentFields {
    /// Reference to the participant
    #[serde(default)]
    pub teilnehmer: Option<RecordRef>,
    /// Reference to the course
    #[serde(default)]
    pub kurs: Option<RecordRef>,
    /// Enrollment date
    #[serde(default)]
    pub anmeldedatum: Option<String>,
    /// Paid flag
    #[serde(default)]
    pub bezahlt: Option<bool>,
}

impl EnrollmentFields {
    /// Whether the enrollment has been paid; absent means unpaid
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.bezahlt.unwrap_or(false)
    }
}

/// Instructor record
pub type Instructor = Record<InstructorFields>;
/// Participant record
pub type Participant = Record<ParticipantFields>;
/// Room record
pub type Room = Record<RoomFields>;
/// Course record
pub type Course = Record<CourseFields>;
/// Enrollment record
pub type Enrollment = Record<EnrollmentFields>;

/// The five collections fetched together for one overview
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Instructors
    pub instructors: Vec<Instructor>,
    /// Participants
    pub participants: Vec<Participant>,
    /// Rooms
    pub rooms: Vec<Room>,
    /// Courses
    pub courses: Vec<Course>,
    /// Enrollments
    pub enrollments: Vec<Enrollment>,
}

impl Snapshot {
    /// Number of records held for a collection
    #[must_use]
    pub fn count(&self, collection: Collection) -> usize {
        match collection {
            Collection::Instructors => self.instructors.len(),
            Collection::Participants => self.participants.len(),
            Collection::Rooms => self.rooms.len(),
            Collection::Courses => self.courses.len(),
            Collection::Enrollments => self.enrollments.len(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_course_deserialization_with_url_reference() {
        let json = r#"{
            "record_id": "c1",
            "createdat": "2024-01-01T10:00:00",
            "fields": {
                "titel": "Python Grundlagen",
                "startdatum": "2024-03-01",
                "enddatum": "2024-03-31",
                "preis": 249.5,
                "dozent": "https://my.living-apps.de/rest/apps/abc/records/d7"
            }
        }"#;

        let course: Course = serde_json::from_str(json).unwrap();

        assert_eq!(course.record_id, "c1");
        assert_eq!(course.fields.titel.as_deref(), Some("Python Grundlagen"));
        assert_eq!(course.fields.preis, Some(249.5));
        assert_eq!(
            course.fields.dozent.as_ref().and_then(RecordRef::record_id),
            Some("d7")
        );
        assert!(course.fields.raum.is_none());
        assert!(course.updatedat.is_none());
    }

    #[test]
    fn test_enrollment_null_fields() {
        let json = r#"{"record_id": "e1", "fields": {"kurs": null, "bezahlt": null}}"#;
        let enrollment: Enrollment = serde_json::from_str(json).unwrap();

        assert!(enrollment.fields.kurs.is_none());
        assert!(!enrollment.fields.is_paid());
    }

    #[test]
    fn test_record_without_fields_uses_defaults() {
        let room: Room = serde_json::from_str(r#"{"record_id": "r1"}"#).unwrap();
        assert_eq!(room, Record::new("r1", RoomFields::default()));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"record_id": "d1", "fields": {"name": "Anna", "foto": "x.png"}}"#;
        let instructor: Instructor = serde_json::from_str(json).unwrap();
        assert_eq!(instructor.fields.name.as_deref(), Some("Anna"));
    }

    #[test]
    fn test_course_dates() {
        let fields = CourseFields {
            startdatum: Some("2024-05-01".to_string()),
            enddatum: Some("kein Datum".to_string()),
            ..CourseFields::default()
        };

        assert_eq!(
            fields.starts_at().unwrap().to_string(),
            "2024-05-01 00:00:00"
        );
        assert!(fields.ends_at().is_none());
    }

    #[test]
    fn test_collection_labels_and_names() {
        let labels: Vec<&str> = Collection::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Dozenten", "Teilnehmer", "Räume", "Kurse gesamt", "Anmeldungen"]
        );
        assert_eq!(Collection::Rooms.to_string(), "raeume");
        assert_eq!(
            serde_json::to_string(&Collection::Enrollments).unwrap(),
            "\"enrollments\""
        );
    }

    #[test]
    fn test_snapshot_counts() {
        let snapshot = Snapshot {
            rooms: vec![Record::new("r1", RoomFields::default())],
            courses: vec![
                Record::new("c1", CourseFields::default()),
                Record::new("c2", CourseFields::default()),
            ],
            ..Snapshot::default()
        };

        assert_eq!(snapshot.count(Collection::Instructors), 0);
        assert_eq!(snapshot.count(Collection::Rooms), 1);
        assert_eq!(snapshot.count(Collection::Courses), 2);
    }
}
