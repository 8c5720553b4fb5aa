use std::sync::{Arc, Mutex, PoisonError};

use hub_core::model::{ModalPolicy, TopicId};
use services::{PracticeService, RosterService};

pub trait UiApp: Send + Sync {
    fn modal_policy(&self) -> ModalPolicy;
    fn open_on_launch(&self) -> Option<TopicId>;

    fn practice(&self) -> Arc<PracticeService>;
    fn roster(&self) -> Arc<RosterService>;
}

#[derive(Clone)]
pub struct AppContext {
    modal_policy: ModalPolicy,
    open_on_launch_once: Arc<Mutex<Option<TopicId>>>,

    practice: Arc<PracticeService>,
    roster: Arc<RosterService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            modal_policy: app.modal_policy(),
            open_on_launch_once: Arc::new(Mutex::new(app.open_on_launch())),
            practice: app.practice(),
            roster: app.roster(),
        }
    }

    #[must_use]
    pub fn modal_policy(&self) -> ModalPolicy {
        self.modal_policy
    }

    /// The launch topic, handed out once. Later calls return `None`.
    #[must_use]
    pub fn take_open_on_launch(&self) -> Option<TopicId> {
        self.open_on_launch_once
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }

    #[must_use]
    pub fn roster(&self) -> Arc<RosterService> {
        Arc::clone(&self.roster)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
