//! Span timing for the search hot path.
//!
//! Built only with `--features instrumentation`. Functions marked with
//! `#[cfg_attr(feature = "instrumentation", instrument(skip_all))]` open a span per call;
//! the layer below counts the calls and sums the time spent inside each span.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use once_cell::sync::Lazy;
use thread_local::ThreadLocal;
use tracing::span;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// (calls, total nanoseconds) per span name. Each search thread owns one map, so the
/// mutex is only contended when the statistics are read.
type TimingBuckets = HashMap<&'static str, (u64, u64)>;

static THREAD_TIMING_DATA: Lazy<ThreadLocal<Mutex<TimingBuckets>>> = Lazy::new(ThreadLocal::new);

struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let Some(start) = span.extensions_mut().remove::<Instant>() else {
            return;
        };

        let cell = THREAD_TIMING_DATA.get_or(|| Mutex::new(HashMap::new()));
        let mut data = cell.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = data.entry(span.name()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += start.elapsed().as_nanos() as u64;
    }
}

/// Installs the timing layer as the global subscriber.
///
/// With `RUST_LOG` unset or `off` only timings are collected; otherwise span events are
/// also printed, filtered by `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "off".to_string());

    let result = if env_filter == "off" || env_filter.is_empty() {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("trace"))
            .with(TimingLayer);
        tracing::subscriber::set_global_default(subscriber)
    } else {
        use tracing_subscriber::fmt;

        let fmt_layer = fmt::layer().with_target(false).with_level(false).compact();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(TimingLayer)
            .with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)
    };

    if let Err(error) = result {
        eprintln!("instrumentation disabled: {}", error);
    }
}

/// Call count and total time for one span name, summed over all threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanTiming {
    pub name: &'static str,
    pub calls: u64,
    pub total_nanos: u64,
}

/// Every span seen so far, most expensive first.
pub fn timing_statistics() -> Vec<SpanTiming> {
    let mut aggregated: TimingBuckets = HashMap::new();

    for thread_data in THREAD_TIMING_DATA.iter() {
        let data = thread_data.lock().unwrap_or_else(PoisonError::into_inner);
        for (name, (calls, nanos)) in data.iter() {
            let entry = aggregated.entry(*name).or_insert((0, 0));
            entry.0 += calls;
            entry.1 += nanos;
        }
    }

    let mut entries: Vec<SpanTiming> = aggregated
        .into_iter()
        .map(|(name, (calls, total_nanos))| SpanTiming {
            name,
            calls,
            total_nanos,
        })
        .collect();
    entries.sort_by_key(|timing| std::cmp::Reverse(timing.total_nanos));
    entries
}

/// Prints the collected timings to stderr.
pub fn print_timing_statistics() {
    let entries = timing_statistics();

    if entries.is_empty() {
        eprintln!("\nNo timing data collected.");
        return;
    }

    eprintln!("\n{:=<72}", "");
    eprintln!("Span timings (sorted by total time)");
    eprintln!("{:=<72}", "");
    eprintln!(
        "{:<32} {:>12} {:>12} {:>12}",
        "Span", "Calls", "Total (ms)", "Avg (µs)"
    );
    eprintln!("{:-<72}", "");

    let mut grand_total_nanos = 0u64;
    for timing in entries.iter().filter(|timing| timing.calls > 0) {
        grand_total_nanos += timing.total_nanos;
        eprintln!(
            "{:<32} {:>12} {:>12.2} {:>12.2}",
            timing.name,
            timing.calls,
            timing.total_nanos as f64 / 1_000_000.0,
            timing.total_nanos as f64 / timing.calls as f64 / 1_000.0
        );
    }

    eprintln!("{:-<72}", "");
    eprintln!(
        "Total instrumented time: {:.2} ms\n",
        grand_total_nanos as f64 / 1_000_000.0
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_layer_counts_span_entries() {
        let subscriber = tracing_subscriber::registry().with(TimingLayer);

        tracing::subscriber::with_default(subscriber, || {
            for _ in 0..3 {
                let span = tracing::info_span!("timed_section");
                let _guard = span.enter();
            }
        });

        let timing = timing_statistics()
            .into_iter()
            .find(|timing| timing.name == "timed_section")
            .expect("span should be recorded");
        assert_eq!(timing.calls, 3);
    }
}
