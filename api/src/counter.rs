/// Click count shown to the player.
///
/// Incremented locally once a click is submitted successfully, then overwritten by the
/// authoritative value on every poll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptimisticCounter {
    value: u64,
    confirmed: u64,
}

impl OptimisticCounter {
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Last value reported by the cluster.
    pub fn confirmed(&self) -> u64 {
        self.confirmed
    }

    /// Local increments not yet reflected by a poll.
    pub fn pending(&self) -> u64 {
        self.value.saturating_sub(self.confirmed)
    }

    pub fn record_click(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    /// Adopts the authoritative count. Returns the local value it replaced when they differed.
    pub fn reconcile(&mut self, authoritative: u64) -> Option<u64> {
        let previous = self.value;
        self.value = authoritative;
        self.confirmed = authoritative;
        (previous != authoritative).then_some(previous)
    }
}
