//! Runs a scripted session against a project board and logs what happens.
//!
//! Usage:
//!
//! ```text
//! RUST_LOG=project_board=debug project-board
//! ```
//!
//! When `PROJECT_BOARD_CONSTRAINTS` names a JSON file, the board validates
//! form input against it instead of the built-in limits:
//!
//! ```json
//! {
//!   "people": { "required": true, "min_value": 1, "max_value": 10 }
//! }
//! ```

use project_board::{
    board::ProjectBoard,
    drag::DragError,
    project::{
        adapters::LoggingListener,
        domain::{ProjectId, ProjectStatus},
        services::{ProjectInputError, ProjectStore},
    },
    validation::{ConfigError, ProjectConstraints},
    view::RecordingRenderer,
};
use std::env;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const CONSTRAINTS_ENV: &str = "PROJECT_BOARD_CONSTRAINTS";

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that end the demo session.
#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] ProjectInputError),
    #[error(transparent)]
    Drag(#[from] DragError),
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    run().map_err(Into::into)
}

fn init_tracing() {
    let filter = EnvFilter::new(
        env::var("RUST_LOG").unwrap_or_else(|_| "project_board=debug".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_constraints() -> Result<ProjectConstraints, ConfigError> {
    env::var(CONSTRAINTS_ENV).map_or_else(
        |_| Ok(ProjectConstraints::default()),
        |path| {
            info!(path = %path, "loading project constraints");
            ProjectConstraints::from_json_file(path)
        },
    )
}

fn run() -> Result<(), DemoError> {
    let constraints = load_constraints()?;
    let mut board = ProjectBoard::with_parts(
        ProjectStore::new(),
        constraints,
        RecordingRenderer::new(),
        RecordingRenderer::new(),
    );
    board.add_listener(LoggingListener);

    board.form_mut().fill("Build API", "Design and implement REST endpoints", "3");
    let record = board.submit_form()?;

    board.form_mut().fill("", "short", "6");
    if let Err(err) = board.submit_form() {
        warn!(error = %err, "second project refused");
    }

    board.begin_drag(record.id())?;
    board.drag_over(ProjectStatus::Finished);
    let outcome = board.drop_on(ProjectStatus::Finished)?;
    info!(?outcome, "first drag finished");

    board.begin_drag(ProjectId::new())?;
    board.drag_over(ProjectStatus::Active);
    let stale = board.drop_on(ProjectStatus::Active)?;
    info!(outcome = ?stale, "stale drag finished");

    for status in ProjectStatus::ALL {
        let list = board.list(status);
        info!(
            heading = %list.heading(),
            cards = ?list.renderer().cards,
            "final list"
        );
    }
    Ok(())
}
