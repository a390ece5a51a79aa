//! Per-target one-shot flags for visibility-triggered effects.
//!
//! A tracked target fires exactly once, even when the observer reports it
//! again (batched entries, a callback queued before unobserve).

#[derive(Debug)]
pub struct OneShot<T> {
    targets: Vec<T>,
    fired: Vec<bool>,
}

impl<T: PartialEq> OneShot<T> {
    pub fn new(targets: Vec<T>) -> Self {
        let fired = vec![false; targets.len()];
        Self { targets, fired }
    }

    /// Returns `true` the first time a tracked `target` is fired.
    pub fn fire(&mut self, target: &T) -> bool {
        let Some(idx) = self.targets.iter().position(|t| t == target) else {
            return false;
        };
        if self.fired[idx] {
            return false;
        }
        self.fired[idx] = true;
        true
    }

    pub fn remaining(&self) -> usize {
        self.fired.iter().filter(|f| !**f).count()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_target() {
        let mut shots = OneShot::new(vec!["a", "b"]);
        assert!(shots.fire(&"a"));
        assert!(!shots.fire(&"a"));
        assert_eq!(shots.remaining(), 1);
        assert!(shots.fire(&"b"));
    }

    #[test]
    fn untracked_targets_never_fire() {
        let mut shots = OneShot::new(vec![1, 2]);
        assert!(!shots.fire(&3));
        assert_eq!(shots.remaining(), 2);
    }

    #[test]
    fn exhausted_after_every_target() {
        let mut shots = OneShot::new(vec![1, 2, 3]);
        for n in [3, 1, 3, 2, 1] {
            shots.fire(&n);
        }
        assert!(shots.is_exhausted());
    }

    #[test]
    fn empty_tracker_is_exhausted() {
        let shots: OneShot<u8> = OneShot::new(Vec::new());
        assert!(shots.is_exhausted());
        assert_eq!(shots.remaining(), 0);
    }
}
