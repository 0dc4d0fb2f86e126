use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use crate::engine::actions::apply_action;
use crate::engine::llm_client::TextGenerator;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::session::SessionResult;

/// Owns the session and the generator; runs commands one at a time.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    generator: Box<dyn TextGenerator>,
    session: SessionResult,
}

impl Engine {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        generator: Box<dyn TextGenerator>,
    ) -> Self {
        Self {
            rx,
            tx,
            generator,
            session: SessionResult::default(),
        }
    }

    /// Starts the engine on its own thread and returns the UI's ends of the channels.
    pub fn spawn(
        generator: Box<dyn TextGenerator>,
    ) -> (Sender<EngineCommand>, Receiver<EngineResponse>, JoinHandle<()>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        let handle = std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, generator);
            engine.run();
        });

        (cmd_tx, resp_rx, handle)
    }

    /// Returns once every command sender is dropped.
    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::Run(action) => {
                    let kind = action.kind();
                    let _ = self.tx.send(EngineResponse::ActionStarted(kind));

                    let session = std::mem::take(&mut self.session);
                    let outcome = apply_action(session, action, self.generator.as_ref());
                    self.session = outcome.session;

                    tracing::debug!(?kind, has_story = self.session.has_story(), "action finished");

                    let _ = self.tx.send(EngineResponse::ActionFinished {
                        session: self.session.clone(),
                        notice: outcome.notice,
                    });
                }
            }
        }

        tracing::debug!("engine stopped");
    }
}
