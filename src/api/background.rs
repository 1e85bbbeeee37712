//! Background sweeps for interactive front ends
//!
//! A sweep is moved to a worker thread so the caller can keep its surface
//! responsive, poll progress and cancel a sweep that is no longer wanted.

use crate::api::blocking::CoveragePlanner;
use crate::api::types::{SweepRequest, SweepStatus};
use crate::core::{Method, RegionResult};
use crate::processing::{CancellationToken, SweepProgress};
use crate::validation::{PlanningError, PlanningResult};
use log::debug;
use std::thread::{self, JoinHandle};

/// Handle to a sweep running on a worker thread
pub struct BackgroundSweep {
    method: Method,
    cancellation: CancellationToken,
    progress: SweepProgress,
    worker: JoinHandle<PlanningResult<RegionResult>>,
}

impl BackgroundSweep {
    /// Start computing `request` on a new worker thread
    pub fn spawn(planner: CoveragePlanner, request: SweepRequest) -> PlanningResult<Self> {
        Self::spawn_with_cancellation(planner, request, CancellationToken::new())
    }

    /// Start a sweep that stops when `cancellation` is triggered.
    ///
    /// The token may be shared with other sweeps to cancel them together.
    pub fn spawn_with_cancellation(
        planner: CoveragePlanner,
        request: SweepRequest,
        cancellation: CancellationToken,
    ) -> PlanningResult<Self> {
        let method = request.method();
        let progress = SweepProgress::new();

        let worker = {
            let cancellation = cancellation.clone();
            let progress = progress.clone();
            thread::Builder::new()
                .name(format!("sweep-{}", method))
                .spawn(move || planner.compute_with(method, &request, cancellation, progress))
                .map_err(|e| PlanningError::WorkerFailed(e.to_string()))?
        };
        debug!("started background {} sweep", method);

        Ok(Self {
            method,
            cancellation,
            progress,
            worker,
        })
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn progress(&self) -> &SweepProgress {
        &self.progress
    }

    pub fn status(&self) -> SweepStatus {
        if self.worker.is_finished() {
            SweepStatus::Finished
        } else if self.cancellation.is_cancelled() {
            SweepStatus::Cancelling
        } else {
            SweepStatus::Running(self.progress.fraction())
        }
    }

    /// Ask the worker to stop at the next ray boundary
    pub fn cancel(&self) {
        debug!("cancelling background {} sweep", self.method);
        self.cancellation.cancel();
    }

    /// Wait for the worker and take its result
    pub fn join(self) -> PlanningResult<RegionResult> {
        let method = self.method;
        self.worker
            .join()
            .map_err(|_| PlanningError::WorkerFailed(format!("{} sweep worker panicked", method)))?
    }
}
