//! Domain-focused tests for project records and statuses.

use crate::project::domain::{
    ParseProjectIdError, ParseProjectStatusError, ProjectId, ProjectRecord, ProjectSnapshot,
    ProjectStatus,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
#[case("active", ProjectStatus::Active)]
#[case("  Finished ", ProjectStatus::Finished)]
#[case("ACTIVE", ProjectStatus::Active)]
fn status_parses_case_insensitively(#[case] text: &str, #[case] expected: ProjectStatus) {
    assert_eq!(ProjectStatus::try_from(text), Ok(expected));
}

#[rstest]
fn status_rejects_unknown_text() {
    assert_eq!(
        ProjectStatus::try_from("archived"),
        Err(ParseProjectStatusError("archived".to_owned()))
    );
}

#[rstest]
fn status_round_trips_through_text() {
    for status in ProjectStatus::ALL {
        assert_eq!(ProjectStatus::try_from(status.as_str()), Ok(status));
        assert_eq!(status.to_string(), status.as_str());
    }
}

#[rstest]
fn project_id_parses_its_display_form() {
    let id = ProjectId::new();
    assert_eq!(id.to_string().parse::<ProjectId>(), Ok(id));
}

#[rstest]
fn project_id_rejects_legacy_fractional_ids() {
    assert_eq!(
        "0.5130872".parse::<ProjectId>(),
        Err(ParseProjectIdError("0.5130872".to_owned()))
    );
}

#[rstest]
fn new_record_is_active_with_matching_timestamps(clock: DefaultClock) {
    let record = ProjectRecord::new(
        "Build API".to_owned(),
        "Design and implement REST endpoints".to_owned(),
        3,
        &clock,
    );

    assert_eq!(record.status(), ProjectStatus::Active);
    assert_eq!(record.title(), "Build API");
    assert_eq!(record.people(), 3);
    assert_eq!(record.created_at(), record.updated_at());
}

#[rstest]
fn records_get_distinct_ids(clock: DefaultClock) {
    let first = ProjectRecord::new("A".to_owned(), "first one".to_owned(), 1, &clock);
    let second = ProjectRecord::new("A".to_owned(), "first one".to_owned(), 1, &clock);
    assert_ne!(first.id(), second.id());
}

#[rstest]
fn set_status_reports_previous_status_once(clock: DefaultClock) {
    let mut record = ProjectRecord::new("Docs".to_owned(), "Write the guide".to_owned(), 2, &clock);

    assert_eq!(
        record.set_status(ProjectStatus::Finished, &clock),
        Some(ProjectStatus::Active)
    );
    assert_eq!(record.set_status(ProjectStatus::Finished, &clock), None);
    assert!(record.updated_at() >= record.created_at());
}

#[rstest]
fn snapshot_filters_by_status_in_order(clock: DefaultClock) {
    let mut records: Vec<ProjectRecord> = ["one", "two", "three"]
        .into_iter()
        .map(|title| ProjectRecord::new(title.to_owned(), "description".to_owned(), 1, &clock))
        .collect();
    if let Some(second) = records.get_mut(1) {
        second.set_status(ProjectStatus::Finished, &clock);
    }
    let snapshot = ProjectSnapshot::from_records(&records);

    let active: Vec<&str> = snapshot
        .with_status(ProjectStatus::Active)
        .map(ProjectRecord::title)
        .collect();
    let finished: Vec<&str> = snapshot
        .with_status(ProjectStatus::Finished)
        .map(ProjectRecord::title)
        .collect();

    assert_eq!(active, ["one", "three"]);
    assert_eq!(finished, ["two"]);
}

#[rstest]
fn snapshot_is_independent_of_its_source(clock: DefaultClock) {
    let mut records = vec![ProjectRecord::new(
        "Ship".to_owned(),
        "Ship the release".to_owned(),
        4,
        &clock,
    )];
    let snapshot = ProjectSnapshot::from_records(&records);

    records.clear();

    assert_eq!(snapshot.len(), 1);
}

#[rstest]
fn snapshot_serializes_as_a_list(clock: DefaultClock) -> eyre::Result<()> {
    let record = ProjectRecord::new("Ship".to_owned(), "Ship the release".to_owned(), 4, &clock);
    let snapshot = ProjectSnapshot::from_records(std::slice::from_ref(&record));

    let json = serde_json::to_value(&snapshot)?;

    eyre::ensure!(json.as_array().map(Vec::len) == Some(1));
    eyre::ensure!(json.pointer("/0/status") == Some(&serde_json::json!("active")));
    eyre::ensure!(json.pointer("/0/people") == Some(&serde_json::json!(4)));
    Ok(())
}
