use std::collections::BTreeSet;

use hub_core::model::{ModalPolicy, TopicId};

/// Which topic modals are open.
///
/// Under [`ModalPolicy::Exclusive`] opening a modal closes the others, so at
/// most one is open at a time. [`ModalPolicy::Permissive`] lets them stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellState {
    policy: ModalPolicy,
    open: BTreeSet<TopicId>,
}

impl ShellState {
    #[must_use]
    pub fn new(policy: ModalPolicy) -> Self {
        Self {
            policy,
            open: BTreeSet::new(),
        }
    }

    /// Open a topic's modal. Topics without content are ignored and
    /// `false` is returned.
    pub fn open(&mut self, topic: TopicId) -> bool {
        if !topic.has_content() {
            return false;
        }
        if self.policy == ModalPolicy::Exclusive {
            self.open.clear();
        }
        self.open.insert(topic);
        true
    }

    pub fn close(&mut self, topic: TopicId) {
        self.open.remove(&topic);
    }

    #[must_use]
    pub fn is_open(&self, topic: TopicId) -> bool {
        self.open.contains(&topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusive_policy_keeps_one_modal_open() {
        let mut shell = ShellState::new(ModalPolicy::Exclusive);
        assert!(shell.open(TopicId::BasicConcepts));
        assert!(shell.open(TopicId::Debugging));

        assert!(!shell.is_open(TopicId::BasicConcepts));
        assert!(shell.is_open(TopicId::Debugging));
    }

    #[test]
    fn permissive_policy_stacks_modals() {
        let mut shell = ShellState::new(ModalPolicy::Permissive);
        shell.open(TopicId::BasicConcepts);
        shell.open(TopicId::Debugging);
        shell.close(TopicId::BasicConcepts);

        assert!(shell.is_open(TopicId::Debugging));
        assert!(!shell.is_open(TopicId::BasicConcepts));
    }

    #[test]
    fn placeholders_never_open() {
        let mut shell = ShellState::new(ModalPolicy::Permissive);
        assert!(!shell.open(TopicId::Projects));
        assert!(!shell.open(TopicId::PracticeExercises));
        assert_eq!(shell, ShellState::new(ModalPolicy::Permissive));
    }

    #[test]
    fn closing_a_closed_modal_is_a_no_op() {
        let mut shell = ShellState::new(ModalPolicy::default());
        shell.close(TopicId::WindowsForms);
        assert_eq!(shell, ShellState::new(ModalPolicy::Exclusive));
    }
}
