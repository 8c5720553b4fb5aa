mod hub;
mod lesson;
mod modal;
mod practice;
mod state;
mod topics;

pub use hub::{HubView, TopicDialog};
pub use lesson::{LessonPanel, SectionList, SectionPanel, SectionView, TabStrip};
pub use modal::{LearnMode, ModalFrame, ModeSwitch};
pub use practice::PracticePanel;
pub use state::{RosterIntent, RosterState, ShellIntent, TopicIntent, TopicState};
pub use topics::VideoPanel;

#[cfg(test)]
mod intent_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
