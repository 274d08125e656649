//! Given steps for project board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty project board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if !world.board.store().is_empty() {
        return Err(eyre::eyre!("scenario world should start empty"));
    }
    Ok(())
}

#[given(r#"a board with project "{title}""#)]
fn board_with_project(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    world
        .board
        .form_mut()
        .fill(title, "Design and implement REST endpoints", "3");
    let record = world
        .board
        .submit_form()
        .wrap_err("create project for scenario setup")?;
    world.last_record = Some(record);
    Ok(())
}
