use std::sync::Arc;

use crate::practice_service::PracticeService;
use crate::roster_service::RosterService;
use crate::Clock;

/// Assembles the app-facing services.
#[derive(Clone)]
pub struct AppServices {
    practice: Arc<PracticeService>,
    roster: Arc<RosterService>,
}

impl AppServices {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            practice: Arc::new(PracticeService::new(clock)),
            roster: Arc::new(RosterService::new()),
        }
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
