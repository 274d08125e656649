//! Then steps for project board BDD scenarios.

use super::world::{BoardWorld, parse_status};
use project_board::project::services::{MoveOutcome, ProjectField, ProjectInputError};
use rstest_bdd_macros::then;

#[then("the store count is {count:usize}")]
fn store_count_is(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.board.store().len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} projects, found {actual}"));
    }
    Ok(())
}

#[then("the observer snapshot count is {count:usize}")]
fn observer_count_is(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.observer.count();
    if actual != count {
        return Err(eyre::eyre!("expected {count} snapshots, observer saw {actual}"));
    }
    Ok(())
}

#[then(r#"the {list} list shows "{title}""#)]
fn list_shows(world: &BoardWorld, list: String, title: String) -> Result<(), eyre::Report> {
    let status = parse_status(&list)?;
    let view = world.board.list(status);
    let titles = view.renderer().titles();
    if titles != [title.as_str()] {
        return Err(eyre::eyre!("expected the {list} list to show {title}, got {titles:?}"));
    }
    Ok(())
}

#[then("the {list} list is empty")]
fn list_is_empty(world: &BoardWorld, list: String) -> Result<(), eyre::Report> {
    let status = parse_status(&list)?;
    let view = world.board.list(status);
    if !view.renderer().cards.is_empty() {
        return Err(eyre::eyre!(
            "expected the {list} list to be empty, got {:?}",
            view.renderer().titles()
        ));
    }
    Ok(())
}

#[then(r#"the card reads "{label}""#)]
fn card_reads(world: &BoardWorld, label: String) -> Result<(), eyre::Report> {
    let record = world
        .last_record
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
    let view = world.board.list(record.status());
    let found = view
        .renderer()
        .cards
        .iter()
        .find(|card| card.id == record.id())
        .ok_or_else(|| eyre::eyre!("no card rendered for {}", record.id()))?;
    if found.assigned != label {
        return Err(eyre::eyre!("expected card label {label}, got {}", found.assigned));
    }
    Ok(())
}

#[then("the submission is refused on the {field} field")]
fn refused_on_field(world: &BoardWorld, field: String) -> Result<(), eyre::Report> {
    let expected = match field.as_str() {
        "title" => ProjectField::Title,
        "description" => ProjectField::Description,
        "people" => ProjectField::People,
        other => return Err(eyre::eyre!("unknown field in scenario: {other}")),
    };
    match &world.last_submit {
        Some(Err(ProjectInputError::Invalid(failure))) if failure.has_field(expected) => Ok(()),
        other => Err(eyre::eyre!(
            "expected a violation on {field}, got {other:?}"
        )),
    }
}

#[then("the submission is refused as not a whole number")]
fn refused_as_not_whole(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_submit {
        Some(Err(ProjectInputError::NotAWholeNumber(_))) => Ok(()),
        other => Err(eyre::eyre!("expected a NotAWholeNumber error, got {other:?}")),
    }
}

#[then("the drop leaves the project unchanged")]
fn drop_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_drop {
        Some(Ok(MoveOutcome::Unchanged)) => Ok(()),
        other => Err(eyre::eyre!("expected an unchanged outcome, got {other:?}")),
    }
}

#[then("the drop reports an unknown project")]
fn drop_not_found(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_drop {
        Some(Ok(MoveOutcome::NotFound)) => Ok(()),
        other => Err(eyre::eyre!("expected a not-found outcome, got {other:?}")),
    }
}
