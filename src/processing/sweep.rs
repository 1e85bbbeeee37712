//! Full polar sweep of one error model

use crate::algorithms::ErrorModel;
use crate::core::{GridConfig, RegionResult, ANGULAR_STEPS};
use crate::processing::grid::GridSampler;
use crate::processing::tracer::{trace_ray, RayTrace, RegionTracer};
use crate::validation::error::{PlanningError, PlanningResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Execution options for a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepOptions {
    /// Trace rays on the rayon pool (ignored without the `parallel` feature)
    pub parallel: bool,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Cooperative cancellation flag, checked before each ray
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Shared counter of completed rays
#[derive(Debug, Clone, Default)]
pub struct SweepProgress(Arc<AtomicUsize>);

impl SweepProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completed_rays(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    /// Completed fraction in `[0, 1]`
    pub fn fraction(&self) -> f64 {
        self.completed_rays() as f64 / ANGULAR_STEPS as f64
    }

    fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }

    fn advance(&self) -> usize {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// One sweep of the polar grid through an error model
pub struct Sweep<'a> {
    model: &'a dyn ErrorModel,
    sampler: GridSampler,
    options: SweepOptions,
    cancellation: CancellationToken,
    progress: SweepProgress,
}

impl<'a> Sweep<'a> {
    pub fn new(model: &'a dyn ErrorModel, grid: GridConfig) -> Self {
        Self {
            model,
            sampler: GridSampler::new(grid, model.frame()),
            options: SweepOptions::default(),
            cancellation: CancellationToken::new(),
            progress: SweepProgress::new(),
        }
    }

    pub fn with_options(mut self, options: SweepOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn with_progress(mut self, progress: SweepProgress) -> Self {
        self.progress = progress;
        self
    }

    /// Classify and trace a single ray
    pub fn trace(&self, angle_index: usize) -> RayTrace {
        let samples: Vec<_> = self.sampler.ray(angle_index).collect();
        let accepted: Vec<bool> = samples.iter().map(|&m| self.model.classify(m)).collect();
        trace_ray(&samples, &accepted)
    }

    fn trace_checked(&self, angle_index: usize) -> PlanningResult<RayTrace> {
        if self.cancellation.is_cancelled() {
            return Err(PlanningError::Cancelled {
                completed_rays: self.progress.completed_rays(),
                total_rays: ANGULAR_STEPS,
            });
        }
        let trace = self.trace(angle_index);
        self.progress.advance();
        Ok(trace)
    }

    /// Run every ray and assemble the region
    pub fn run(&self) -> PlanningResult<RegionResult> {
        let start = Instant::now();
        let grid = self.sampler.grid();
        debug!(
            "{} sweep: {} rays x {} steps at {} spacing",
            self.model.method(),
            ANGULAR_STEPS,
            grid.steps,
            grid.spacing
        );
        self.progress.reset();

        let traces = self.collect_traces()?;

        let mut tracer = RegionTracer::new();
        for trace in traces {
            tracer.absorb(trace);
        }
        let result = tracer.finish(self.model.method(), self.model.station_markers());

        info!(
            "{} sweep finished in {:.1} ms: {} interior, {} outline points",
            self.model.method(),
            start.elapsed().as_secs_f64() * 1000.0,
            result.interior.len(),
            result.outline.len()
        );
        Ok(result)
    }

    #[cfg(feature = "parallel")]
    fn collect_traces(&self) -> PlanningResult<Vec<RayTrace>> {
        let indices = self.sampler.angle_indices();
        if self.options.parallel {
            // Indexed collect keeps traces in angle order
            indices
                .into_par_iter()
                .map(|j| self.trace_checked(j))
                .collect()
        } else {
            indices.map(|j| self.trace_checked(j)).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn collect_traces(&self) -> PlanningResult<Vec<RayTrace>> {
        self.sampler
            .angle_indices()
            .map(|j| self.trace_checked(j))
            .collect()
    }
}
