//! Shared world state for project board BDD scenarios.

use project_board::{
    board::ProjectBoard,
    drag::DragError,
    project::{
        adapters::RecordingListener,
        domain::{ProjectRecord, ProjectStatus},
        services::{MoveOutcome, ProjectInputError},
    },
    view::RecordingRenderer,
};
use rstest::fixture;

/// Board type used by the BDD world.
pub type TestBoard = ProjectBoard<RecordingRenderer>;

/// Scenario world for project board behaviour tests.
pub struct BoardWorld {
    pub board: TestBoard,
    pub observer: RecordingListener,
    pub last_record: Option<ProjectRecord>,
    pub last_submit: Option<Result<ProjectRecord, ProjectInputError>>,
    pub last_drop: Option<Result<MoveOutcome, DragError>>,
}

impl BoardWorld {
    /// Creates a world around an empty board with one extra observer.
    #[must_use]
    pub fn new() -> Self {
        let mut board = ProjectBoard::new(RecordingRenderer::new(), RecordingRenderer::new());
        let observer = RecordingListener::new();
        board.add_listener(observer.clone());
        Self {
            board,
            observer,
            last_record: None,
            last_submit: None,
            last_drop: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a list name used in feature files.
pub fn parse_status(name: &str) -> Result<ProjectStatus, eyre::Report> {
    ProjectStatus::try_from(name).map_err(|err| eyre::eyre!("invalid list in scenario: {err}"))
}
