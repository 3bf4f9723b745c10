use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Cancellation token tied to a component's lifetime.
///
/// Clones share state. Once [`end`](Self::end) is called, guarded futures discard their output.
/// Single-threaded, like the wasm event loop it runs on.
#[derive(Clone, Debug)]
pub struct Lifetime {
    alive: Rc<Cell<bool>>,
}

impl Lifetime {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    pub fn end(&self) {
        self.alive.set(false);
    }

    /// Awaits `future`, yielding its output only if the lifetime is still alive.
    pub async fn guard<F: Future>(&self, future: F) -> Option<F::Output> {
        if !self.is_alive() {
            return None;
        }
        let output = future.await;
        if self.is_alive() {
            Some(output)
        } else {
            tracing::debug!("Discarding result that arrived after teardown");
            None
        }
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_guard_passes_while_alive() {
        let lifetime = Lifetime::new();
        assert_eq!(lifetime.guard(async { 7 }).await, Some(7));
    }

    #[tokio::test]
    async fn test_guard_discards_after_end() {
        let lifetime = Lifetime::new();
        let clone = lifetime.clone();
        let result = lifetime
            .guard(async move {
                clone.end();
                7
            })
            .await;
        assert_eq!(result, None);
        assert!(!lifetime.is_alive());
        assert_eq!(lifetime.guard(async { 1 }).await, None);
    }
}
