//! Optional timing hook for instrumenting hot paths.
//!
//! Callers that want profiling install a [`TimingHook`]; without one the
//! measured spans only go to the `log` facade at debug level.

use std::sync::Arc;

use web_time::{Duration, Instant};

/// Receives `(label, elapsed)` for each measured span.
pub type TimingHook = Arc<dyn Fn(&'static str, Duration) + Send + Sync>;

/// Run `f`, reporting its wall time under `label`.
pub fn timed<T>(
    label: &'static str,
    hook: Option<&TimingHook>,
    f: impl FnOnce() -> T,
) -> T {
    let start = Instant::now();
    let out = f();
    let elapsed = start.elapsed();
    log::debug!("{label}: {:.3} ms", elapsed.as_secs_f64() * 1000.0);
    if let Some(hook) = hook {
        hook(label, elapsed);
    }
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn hook_sees_label_once() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let hook: TimingHook =
            Arc::new(move |label: &'static str, _elapsed: Duration| {
                sink.lock().unwrap().push(label);
            });

        let value = timed("work", Some(&hook), || 6 * 7);

        assert_eq!(value, 42);
        assert_eq!(*seen.lock().unwrap(), vec!["work"]);
    }

    #[test]
    fn runs_without_a_hook() {
        assert_eq!(timed("work", None, || "done"), "done");
    }
}
