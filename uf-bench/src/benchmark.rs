//! Repeat-and-time harness with untimed setup and check phases.
//!
//! Each repetition takes a fresh value from the supplier, passes it through
//! `pre` (clock stopped), times `run`, then hands the result to `post`
//! (clock stopped). Only `run` contributes to the reported mean.

use std::time::{Duration, Instant};

type Pre<'a, T> = Box<dyn FnMut(T) -> T + 'a>;
type Run<'a, T> = Box<dyn FnMut(&mut T) + 'a>;
type Post<'a, T> = Box<dyn FnMut(&T) -> Result<(), String> + 'a>;

#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    #[error("{description}: post-run check failed on repetition {repetition}: {reason}")]
    CheckFailed {
        description: String,
        repetition: usize,
        reason: String,
    },
    #[error("pair {position} names site {index}, outside 0..{len}")]
    InvalidPair {
        position: usize,
        index: usize,
        len: usize,
    },
    #[error("{base} sites doubled {doublings} times overflows usize")]
    SizeOverflow { base: usize, doublings: u32 },
}

pub struct Benchmark<'a, T> {
    description: String,
    pre: Option<Pre<'a, T>>,
    run: Run<'a, T>,
    post: Option<Post<'a, T>>,
}

/// Warm-up repetitions for `m` timed ones: at least 2, at most 10.
pub fn warmup_runs(m: usize) -> usize {
    (m / 10).clamp(2, 10)
}

impl<'a, T> Benchmark<'a, T> {
    pub fn new(description: impl Into<String>, run: impl FnMut(&mut T) + 'a) -> Self {
        Self {
            description: description.into(),
            pre: None,
            run: Box::new(run),
            post: None,
        }
    }

    pub fn with_pre(mut self, pre: impl FnMut(T) -> T + 'a) -> Self {
        self.pre = Some(Box::new(pre));
        self
    }

    pub fn with_post(mut self, post: impl FnMut(&T) -> Result<(), String> + 'a) -> Self {
        self.post = Some(Box::new(post));
        self
    }

    /// Runs the warm-up, then `m` timed repetitions, and returns the mean
    /// milliseconds per timed `run`.
    pub fn run_from_supplier(
        &mut self,
        mut supplier: impl FnMut() -> T,
        m: usize,
    ) -> Result<f64, BenchmarkError> {
        tracing::info!(description = %self.description, runs = m, "begin run");

        let warmup = warmup_runs(m);
        self.repeat(&mut supplier, warmup, false)?;

        let elapsed = self.repeat(&mut supplier, m, true)?;
        let mean = if m == 0 {
            0.0
        } else {
            elapsed.as_secs_f64() * 1000.0 / m as f64
        };
        tracing::info!(description = %self.description, mean_ms = mean, "end run");
        Ok(mean)
    }

    fn repeat(
        &mut self,
        supplier: &mut impl FnMut() -> T,
        times: usize,
        check: bool,
    ) -> Result<Duration, BenchmarkError> {
        let mut elapsed = Duration::ZERO;
        for repetition in 0..times {
            let mut value = supplier();
            if let Some(pre) = self.pre.as_mut() {
                value = pre(value);
            }

            let start = Instant::now();
            (self.run)(&mut value);
            elapsed += start.elapsed();

            if !check {
                continue;
            }
            if let Some(post) = self.post.as_mut() {
                post(&value).map_err(|reason| BenchmarkError::CheckFailed {
                    description: self.description.clone(),
                    repetition,
                    reason,
                })?;
            }
        }
        Ok(elapsed)
    }
}
