use std::rc::Rc;

use yew::functional::Reducible;

/// The page-level loading overlay flag.
///
/// Starts closed (loading). A ready signal moves it to `Releasing`; the
/// delayed release then opens it. Any other signal is ignored, and a
/// released gate never closes again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingGate {
    #[default]
    Loading,
    Releasing,
    Released,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateAction {
    Ready,
    Release,
}

impl LoadingGate {
    pub fn is_loading(&self) -> bool {
        *self != LoadingGate::Released
    }
}

impl Reducible for LoadingGate {
    type Action = GateAction;

    fn reduce(self: Rc<Self>, action: GateAction) -> Rc<Self> {
        match (*self, action) {
            (LoadingGate::Loading, GateAction::Ready) => Rc::new(LoadingGate::Releasing),
            (LoadingGate::Releasing, GateAction::Release) => Rc::new(LoadingGate::Released),
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        assert!(LoadingGate::default().is_loading());
    }

    #[test]
    fn release_needs_a_ready_signal() {
        let gate = Rc::new(LoadingGate::default());
        let next = gate.clone().reduce(GateAction::Release);
        assert!(Rc::ptr_eq(&gate, &next));
        assert!(next.is_loading());
    }

    #[test]
    fn ready_then_release_opens() {
        let gate = Rc::new(LoadingGate::default());
        let gate = gate.reduce(GateAction::Ready);
        assert_eq!(*gate, LoadingGate::Releasing);
        assert!(gate.is_loading());

        let gate = gate.reduce(GateAction::Release);
        assert_eq!(*gate, LoadingGate::Released);
        assert!(!gate.is_loading());
    }

    #[test]
    fn opens_exactly_once() {
        let mut gate = Rc::new(LoadingGate::default());
        gate = gate.reduce(GateAction::Ready);
        let releasing = gate.clone();
        gate = gate.reduce(GateAction::Ready);
        assert!(Rc::ptr_eq(&releasing, &gate));

        gate = gate.reduce(GateAction::Release);
        let released = gate.clone();
        for action in [GateAction::Ready, GateAction::Release, GateAction::Ready] {
            gate = gate.reduce(action);
            assert!(Rc::ptr_eq(&released, &gate));
        }
        assert!(!gate.is_loading());
    }
}
