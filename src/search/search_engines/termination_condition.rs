use crate::search::search_engines::SearchResult;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Number of expansions between two memory samples when a memory limit is set.
const MEMORY_SAMPLE_INTERVAL: usize = 4096;

/// Optional budgets for a single search. A search without limits runs until
/// it finds the goal or runs out of states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub time_limit: Option<Duration>,
    pub memory_limit_mb: Option<usize>,
    pub max_expansions: Option<usize>,
}

#[derive(Debug)]
pub struct TerminationCondition {
    limits: SearchLimits,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(limits: SearchLimits) -> Self {
        info!(
            time_limit = limits.time_limit.map(|d| d.as_secs_f64()),
            memory_limit_mb = limits.memory_limit_mb,
            max_expansions = limits.max_expansions,
        );
        Self {
            limits,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn sample_memory(&mut self) -> Option<usize> {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        memory_usage
    }

    pub fn log(&mut self) {
        let memory_usage = self.sample_memory();
        let time_elapsed = self.start_time.elapsed();
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = time_elapsed.as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        let time_elapsed = self.start_time.elapsed();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = time_elapsed.as_secs_f64(),
        );
    }

    /// Checks the limits before the next expansion, given the number of nodes
    /// expanded so far.
    pub fn should_terminate(&mut self, expanded_nodes: usize) -> Option<SearchResult> {
        if let Some(max_expansions) = self.limits.max_expansions {
            if expanded_nodes >= max_expansions {
                return Some(SearchResult::ExpansionLimitExceeded);
            }
        }
        if let Some(time_limit) = self.limits.time_limit {
            if self.start_time.elapsed() >= time_limit {
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.limits.memory_limit_mb {
            if expanded_nodes % MEMORY_SAMPLE_INTERVAL == 0 {
                self.sample_memory();
            }
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > memory_limit_mb {
                    return Some(SearchResult::MemoryLimitExceeded);
                }
            }
        }
        None
    }
}
