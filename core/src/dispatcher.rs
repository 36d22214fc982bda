use crate::{Entry, Hook, Result};
use log::warn;
use std::sync::Arc;

/// Dispatcher is the main struct used to fan entries out to hooks.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    hooks: Vec<Arc<dyn Hook>>,
}

impl Dispatcher {
    /// Create a new dispatcher without any hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook.
    pub fn with_hook(mut self, hook: impl Hook) -> Self {
        self.add_hook(hook);
        self
    }

    /// Register a hook.
    pub fn add_hook(&mut self, hook: impl Hook) {
        self.hooks.push(Arc::new(hook));
    }

    /// Register a hook that is shared with other owners.
    pub fn add_shared_hook(&mut self, hook: Arc<dyn Hook>) {
        self.hooks.push(hook);
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Check if no hook is registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Fire the entry on every hook registered for its level.
    ///
    /// Hooks are fired in registration order. The first failing hook stops
    /// the dispatch and its error is returned.
    pub async fn fire(&self, entry: &Entry) -> Result<()> {
        for hook in self.hooks.iter() {
            if !hook.levels().contains(&entry.level) {
                continue;
            }

            if let Err(err) = hook.fire(entry).await {
                warn!("hook {hook:?} failed to fire entry: {err}");
                return Err(err);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Level};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingHook {
        levels: Vec<Level>,
        fired: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl Hook for CountingHook {
        fn levels(&self) -> &[Level] {
            &self.levels
        }

        async fn fire(&self, _: &Entry) -> Result<()> {
            self.fired.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::remote_rejected("no walruses allowed"));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_fire_filters_by_level() {
        let _ = env_logger::builder().is_test(true).try_init();

        let errors = Arc::new(AtomicUsize::new(0));
        let infos = Arc::new(AtomicUsize::new(0));
        let dispatcher = Dispatcher::new()
            .with_hook(CountingHook {
                levels: vec![Level::Error, Level::Fatal, Level::Panic],
                fired: errors.clone(),
                fail: false,
            })
            .with_hook(CountingHook {
                levels: vec![Level::Info],
                fired: infos.clone(),
                fail: false,
            });
        assert_eq!(dispatcher.len(), 2);

        dispatcher
            .fire(&Entry::new(Level::Error, "A walrus appears"))
            .await
            .unwrap();
        dispatcher
            .fire(&Entry::new(Level::Debug, "nothing to see"))
            .await
            .unwrap();

        assert_eq!(errors.load(Ordering::SeqCst), 1);
        assert_eq!(infos.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fire_stops_at_first_error() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let dispatcher = Dispatcher::new()
            .with_hook(CountingHook {
                levels: vec![Level::Error],
                fired: first.clone(),
                fail: true,
            })
            .with_hook(CountingHook {
                levels: vec![Level::Error],
                fired: second.clone(),
                fail: false,
            });

        let err = dispatcher
            .fire(&Entry::new(Level::Error, "A walrus appears"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "no walruses allowed");
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_shared_hook_across_dispatchers() {
        let fired = Arc::new(AtomicUsize::new(0));
        let hook: Arc<dyn Hook> = Arc::new(CountingHook {
            levels: vec![Level::Error],
            fired: fired.clone(),
            fail: false,
        });

        let mut first = Dispatcher::new();
        assert!(first.is_empty());
        first.add_shared_hook(hook.clone());
        let mut second = Dispatcher::new();
        second.add_shared_hook(hook);
        assert!(!first.is_empty());
        assert_eq!(second.len(), 1);

        let entry = Entry::new(Level::Error, "A walrus appears");
        first.fire(&entry).await.unwrap();
        second.fire(&entry).await.unwrap();

        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}
