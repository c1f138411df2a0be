use std::sync::Arc;

/// Controller-owned registry of pending-list flush callbacks.
///
/// Leaf inputs that stage a draft row (a half-typed ticket tier, an unadded
/// tag) register a closure on mount and deregister with the returned handle
/// on unmount. The submit coordinator runs every registered closure before
/// validating, force-committing drafts the user never confirmed with the
/// input's own add control.
#[derive(Clone)]
pub struct FlushRegistry<T> {
    next_id: u64,
    entries: Vec<(u64, Arc<dyn Fn(&mut T) + Send + Sync>)>,
}

impl<T> FlushRegistry<T> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }

    /// Register a flush closure; keep the id to deregister on unmount.
    pub fn register(&mut self, flush: impl Fn(&mut T) + Send + Sync + 'static) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, Arc::new(flush)));
        id
    }

    pub fn unregister(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    /// Invoke every registered closure in registration order.
    pub fn run(&self, draft: &mut T) {
        for (_, flush) in &self.entries {
            flush(draft);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_in_registration_order() {
        let mut registry: FlushRegistry<Vec<&'static str>> = FlushRegistry::new();
        registry.register(|v| v.push("first"));
        registry.register(|v| v.push("second"));

        let mut target = Vec::new();
        registry.run(&mut target);
        assert_eq!(target, vec!["first", "second"]);
    }

    #[test]
    fn unregistered_closures_are_not_invoked() {
        let mut registry: FlushRegistry<u32> = FlushRegistry::new();
        let keep = registry.register(|n| *n += 1);
        let drop = registry.register(|n| *n += 10);
        registry.unregister(drop);

        let mut count = 0;
        registry.run(&mut count);
        assert_eq!(count, 1);

        registry.unregister(keep);
        assert!(registry.is_empty());
    }

    #[test]
    fn clear_drops_everything() {
        let mut registry: FlushRegistry<u32> = FlushRegistry::new();
        registry.register(|n| *n += 1);
        registry.register(|n| *n += 1);
        registry.clear();

        let mut count = 0;
        registry.run(&mut count);
        assert_eq!(count, 0);
    }
}
