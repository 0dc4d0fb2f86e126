use crate::engine::actions::{Action, ActionKind, Notice};
use crate::model::session::SessionResult;

pub enum EngineCommand {
    Run(Action),
}

#[derive(Debug)]
pub enum EngineResponse {
    ActionStarted(ActionKind),

    ActionFinished {
        session: SessionResult,
        notice: Option<Notice>,
    },
}
