//! When steps for project board BDD scenarios.

use super::world::{BoardWorld, parse_status};
use eyre::WrapErr;
use project_board::project::domain::{ProjectId, ProjectRecord, ProjectStatus};
use rstest_bdd_macros::when;

#[when(
    r#"the form is submitted with title "{title}", description "{description}" and people "{people}""#
)]
fn submit_form(world: &mut BoardWorld, title: String, description: String, people: String) {
    world.board.form_mut().fill(title, description, people);
    let result = world.board.submit_form();
    if let Ok(record) = &result {
        world.last_record = Some(record.clone());
    }
    world.last_submit = Some(result);
}

#[when("the project is dragged onto the {list} list")]
fn drag_project(world: &mut BoardWorld, list: String) -> Result<(), eyre::Report> {
    let status = parse_status(&list)?;
    let id = world
        .last_record
        .as_ref()
        .map(ProjectRecord::id)
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
    drop_id(world, id, status)
}

#[when("a stale project id is dropped onto the {list} list")]
fn drop_stale(world: &mut BoardWorld, list: String) -> Result<(), eyre::Report> {
    let status = parse_status(&list)?;
    drop_id(world, ProjectId::new(), status)
}

fn drop_id(
    world: &mut BoardWorld,
    id: ProjectId,
    status: ProjectStatus,
) -> Result<(), eyre::Report> {
    world.board.begin_drag(id).wrap_err("begin drag")?;
    if !world.board.drag_over(status) {
        return Err(eyre::eyre!("the {status} list refused the payload"));
    }
    world.last_drop = Some(world.board.drop_on(status));
    Ok(())
}
