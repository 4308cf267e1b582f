// 🔎 Monitor - serial batch runner
// Walks the watched registry identifiers one at a time, in input order,
// pausing between requests to respect the registry's rate limits. The
// pause is throttling courtesy, not correctness: detection itself is pure.

use crate::detector::{CapitalChangeDetector, ChangeEvent};
use crate::fetch::ExtractFetcher;
use crate::window::DateWindow;
use std::thread;
use std::time::Duration;

/// Monitor - fetch + detect across a list of companies
///
/// One bad extract (unavailable, malformed, structurally empty) never
/// halts the batch; it just contributes no events.
pub struct Monitor<'a> {
    fetcher: &'a dyn ExtractFetcher,
    detector: CapitalChangeDetector,
    call_delay: Duration,
}

impl<'a> Monitor<'a> {
    pub fn new(fetcher: &'a dyn ExtractFetcher, call_delay: Duration) -> Self {
        Monitor {
            fetcher,
            detector: CapitalChangeDetector::new(),
            call_delay,
        }
    }

    /// Analyze every company and concatenate the detected events.
    /// Companies keep input order; each company's events keep detector
    /// order (most recent first).
    pub fn run(&self, registry_ids: &[String], window: &DateWindow) -> Vec<ChangeEvent> {
        let total = registry_ids.len();
        let mut events = Vec::new();

        for (i, registry_id) in registry_ids.iter().enumerate() {
            println!("🔎 Checking company {}/{} (KRS: {})...", i + 1, total, registry_id);

            match self.fetcher.fetch(registry_id) {
                Ok(Some(extract)) => {
                    let found = self.detector.detect(&extract, window);
                    if let Some(first) = found.first() {
                        println!("   -> ⭐ CAPITAL CHANGE found for {}!", first.company_name);
                    }
                    events.extend(found);
                }
                Ok(None) => {
                    println!("   -> ⚠️  Extract unavailable, skipping.");
                }
                Err(err) => {
                    println!("   -> ⚠️  Fetch failed ({:#}), skipping.", err);
                }
            }

            // No pause after the last company
            if i + 1 < total && !self.call_delay.is_zero() {
                thread::sleep(self.call_delay);
            }
        }

        events
    }
}

// ============================================================================
// TESTS
// ============================================================================
