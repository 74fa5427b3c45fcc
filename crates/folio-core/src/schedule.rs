use fnv::FnvHashMap;

/// Pending one-shot actions keyed by particle id.
///
/// Each key holds at most one deadline; scheduling an already pending key
/// keeps the earlier deadline. Deadlines are in milliseconds on the same
/// clock the owner passes to [`RespawnSchedule::fire_due`].
#[derive(Clone, Debug, Default)]
pub struct RespawnSchedule {
    pending: FnvHashMap<u32, f64>,
}

impl RespawnSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if `id` already had a pending deadline.
    pub fn schedule(&mut self, id: u32, due_ms: f64) -> bool {
        match self.pending.entry(id) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(e) => {
                e.insert(due_ms);
                true
            }
        }
    }

    pub fn cancel(&mut self, id: u32) -> bool {
        self.pending.remove(&id).is_some()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn due_at(&self, id: u32) -> Option<f64> {
        self.pending.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove every entry whose deadline is `<= now_ms`, calling `fire` once
    /// per removed id. Returns how many fired.
    pub fn fire_due<F>(&mut self, now_ms: f64, mut fire: F) -> usize
    where
        F: FnMut(u32),
    {
        if self.pending.is_empty() {
            return 0;
        }
        let mut fired = 0;
        self.pending.retain(|&id, &mut due| {
            if due <= now_ms {
                fire(id);
                fired += 1;
                false
            } else {
                true
            }
        });
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_schedule_for_same_id_is_rejected() {
        let mut s = RespawnSchedule::new();
        assert!(s.schedule(3, 100.0));
        assert!(!s.schedule(3, 50.0));
        assert_eq!(s.due_at(3), Some(100.0));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn fires_only_due_entries_once() {
        let mut s = RespawnSchedule::new();
        s.schedule(1, 10.0);
        s.schedule(2, 20.0);
        let mut seen = Vec::new();
        assert_eq!(s.fire_due(10.0, |id| seen.push(id)), 1);
        assert_eq!(seen, vec![1]);
        assert_eq!(s.fire_due(10.0, |id| seen.push(id)), 0);
        assert_eq!(s.fire_due(25.0, |id| seen.push(id)), 1);
        assert_eq!(seen, vec![1, 2]);
        assert!(s.is_empty());
    }

    #[test]
    fn cancel_and_clear_drop_pending_entries() {
        let mut s = RespawnSchedule::new();
        s.schedule(1, 10.0);
        s.schedule(2, 10.0);
        assert!(s.cancel(1));
        assert!(!s.cancel(1));
        s.clear();
        assert_eq!(s.fire_due(1e9, |_| panic!("cleared entry fired")), 0);
    }
}
