//! Debug tracing: wrap a function so every call logs
//! `name(args) -> result`.
//!
//! The sink is any `FnMut(&str)`; the default writes to stderr. Tests
//! hand in a closure that collects lines into a `Vec`.

use std::fmt::Debug;

/// A traced function. Each `call` renders the argument and result
/// with `Debug` and hands the formatted line to the sink.
pub struct Trace<F, S> {
    f: F,
    name: String,
    sink: S,
}

impl<F, S> Trace<F, S> {
    /// Wrap `f` under a display name with a custom sink.
    pub fn with_sink(name: impl Into<String>, f: F, sink: S) -> Self {
        Self {
            f,
            name: name.into(),
            sink,
        }
    }

    /// Apply the wrapped function, logging the call.
    pub fn call<A, R>(&mut self, arg: A) -> R
    where
        A: Debug,
        R: Debug,
        F: FnMut(A) -> R,
        S: FnMut(&str),
    {
        let rendered_arg = format!("{arg:?}");
        let result = (self.f)(arg);
        let line = format!("{}({rendered_arg}) -> {result:?}", self.name);
        (self.sink)(&line);
        result
    }
}

fn stderr_sink(line: &str) {
    eprintln!("{line}");
}

/// Trace calls to stderr.
pub fn trace<F>(name: impl Into<String>, f: F) -> Trace<F, fn(&str)> {
    Trace::with_sink(name, f, stderr_sink as fn(&str))
}

/// Trace calls into a caller-supplied sink.
pub fn trace_with<F, S>(name: impl Into<String>, f: F, sink: S) -> Trace<F, S>
where
    S: FnMut(&str),
{
    Trace::with_sink(name, f, sink)
}
