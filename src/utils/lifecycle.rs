//! Timed lifecycles for elements that the page creates and later removes.

/// One scheduled change for a created element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<P> {
    /// Move into a visual phase.
    Enter(P),
    /// Take the element off the page.
    Remove,
}

/// Phase changes plus a single removal, all measured from creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lifecycle<P> {
    phases: Vec<(u32, P)>,
    removal_ms: u32,
}

impl<P: Copy> Lifecycle<P> {
    /// Phases due at or after `removal_ms` would never be seen and are dropped.
    pub fn new(phases: &[(u32, P)], removal_ms: u32) -> Self {
        let mut phases: Vec<(u32, P)> = phases
            .iter()
            .copied()
            .filter(|(after_ms, _)| *after_ms < removal_ms)
            .collect();
        phases.sort_by_key(|(after_ms, _)| *after_ms);
        Self { phases, removal_ms }
    }

    /// An element with no visual phases, only a removal.
    pub fn removed_after(removal_ms: u32) -> Self {
        Self {
            phases: Vec::new(),
            removal_ms,
        }
    }

    pub fn removal_ms(&self) -> u32 {
        self.removal_ms
    }

    pub fn phases(&self) -> &[(u32, P)] {
        &self.phases
    }

    /// Every timed step in order. The last one is always the only [`Step::Remove`].
    pub fn steps(&self) -> Vec<(u32, Step<P>)> {
        self.phases
            .iter()
            .map(|&(after_ms, phase)| (after_ms, Step::Enter(phase)))
            .chain(std::iter::once((self.removal_ms, Step::Remove)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_end_with_one_removal() {
        let lifecycle = Lifecycle::new(&[(300, 'b'), (10, 'a')], 500);
        assert_eq!(
            lifecycle.steps(),
            vec![(10, Step::Enter('a')), (300, Step::Enter('b')), (500, Step::Remove)]
        );
    }

    #[test]
    fn phases_after_removal_are_dropped() {
        let lifecycle = Lifecycle::new(&[(10, 'a'), (500, 'b'), (900, 'c')], 500);
        assert_eq!(lifecycle.phases(), &[(10, 'a')]);
        assert_eq!(lifecycle.steps().last(), Some(&(500, Step::Remove)));
    }

    #[test]
    fn bare_removal() {
        let lifecycle = Lifecycle::<()>::removed_after(42);
        assert_eq!(lifecycle.steps(), vec![(42, Step::Remove)]);
    }
}
