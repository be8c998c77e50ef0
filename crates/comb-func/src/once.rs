//! Call-once capture: compute on the first call, replay the stored
//! result on every later call.

/// A function that runs at most once.
pub struct Once<T, F> {
    f: Option<F>,
    result: Option<T>,
}

impl<T, F> Once<T, F>
where
    T: Clone,
    F: FnOnce() -> T,
{
    pub fn new(f: F) -> Self {
        Self {
            f: Some(f),
            result: None,
        }
    }

    /// First call computes and stores; later calls replay the stored
    /// value.
    pub fn call(&mut self) -> T {
        if let Some(f) = self.f.take() {
            self.result = Some(f());
        }
        match &self.result {
            Some(v) => v.clone(),
            // f was Some until the first call stored a result
            None => unreachable!("Once holds either the closure or its result"),
        }
    }

    /// True once the wrapped closure has run.
    pub fn done(&self) -> bool {
        self.result.is_some()
    }
}

/// Wrap a closure so it runs at most once.
pub fn once<T, F>(f: F) -> Once<T, F>
where
    T: Clone,
    F: FnOnce() -> T,
{
    Once::new(f)
}
