//! Application state and dependency wiring.

use std::sync::Arc;

use scamguard_domain::{ScenarioPool, TriggerLexicon};

use crate::infrastructure::ports::{ClassifierPort, SessionStore};
use crate::use_cases::analysis::AnalyzeMessage;
use crate::use_cases::game::GameOps;

/// Use cases wired with their dependencies
pub struct UseCases {
    pub analysis: Arc<AnalyzeMessage>,
    pub game: Arc<GameOps>,
}

/// Shared application state
pub struct App {
    pub use_cases: UseCases,
}

impl App {
    pub fn new(classifier: Arc<dyn ClassifierPort>, sessions: Arc<dyn SessionStore>) -> Self {
        let analysis = Arc::new(AnalyzeMessage::new(classifier, TriggerLexicon::default()));
        let game = Arc::new(GameOps::new(sessions, Arc::new(ScenarioPool::builtin())));

        Self {
            use_cases: UseCases { analysis, game },
        }
    }
}
