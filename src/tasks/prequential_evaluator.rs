use crate::evaluation::{LearningCurve, PerformanceEvaluator, PerformanceEvaluatorExt, Snapshot};
use crate::regressors::Regressor;
use crate::streams::Stream;
use log::{debug, info};
use std::io::{Error, ErrorKind};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::Instant;

/// Test-then-train evaluation of a regressor over a stream.
///
/// Every instance is first scored, then used for training. A snapshot of
/// the evaluator is recorded every `sample_frequency` instances and once
/// more when the run ends.
pub struct PrequentialEvaluator {
    learner: Box<dyn Regressor>,
    stream: Box<dyn Stream>,
    evaluator: Box<dyn PerformanceEvaluator>,

    curve: LearningCurve,

    max_instances: Option<u64>,
    max_seconds: Option<u64>,
    sample_frequency: u64,

    processed: u64,
    start_time: Instant,

    progress_tx: Option<Sender<Snapshot>>,
}

impl PrequentialEvaluator {
    pub fn new(
        mut learner: Box<dyn Regressor>,
        stream: Box<dyn Stream>,
        evaluator: Box<dyn PerformanceEvaluator>,
        max_instances: Option<u64>,
        max_seconds: Option<u64>,
        sample_frequency: u64,
    ) -> Result<Self, Error> {
        if sample_frequency == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "sample_frequency must be > 0",
            ));
        }

        learner.set_model_context(Arc::clone(stream.header()));

        Ok(Self {
            learner,
            stream,
            evaluator,
            curve: LearningCurve::default(),
            max_instances,
            max_seconds,
            sample_frequency,
            processed: 0,
            start_time: Instant::now(),
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<Snapshot>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn run(&mut self) -> Result<(), Error> {
        self.start_time = Instant::now();
        info!(
            "prequential evaluation started on '{}'",
            self.stream.header().relation_name()
        );

        while self.stream.has_more_instances() {
            if self.max_instances.is_some_and(|n| self.processed >= n) {
                break;
            }
            if self
                .max_seconds
                .is_some_and(|s| self.start_time.elapsed().as_secs() >= s)
            {
                break;
            }
            let Some(instance) = self.stream.next_instance() else {
                break;
            };
            self.processed += 1;

            let prediction = self
                .learner
                .get_vote_for_instance(instance.as_ref())
                .map_err(Error::other)?;
            self.evaluator.add_result(instance.as_ref(), prediction);
            self.learner
                .train_on_instance(instance.as_ref())
                .map_err(Error::other)?;

            if self.processed % self.sample_frequency == 0 {
                self.push_snapshot();
            }
        }

        self.push_snapshot();
        info!("prequential evaluation finished after {} instances", self.processed);
        Ok(())
    }

    pub fn curve(&self) -> &LearningCurve {
        &self.curve
    }

    pub fn learner(&self) -> &dyn Regressor {
        self.learner.as_ref()
    }

    fn push_snapshot(&mut self) {
        let snapshot = Snapshot {
            instances_seen: self.processed,
            mae: self.evaluator.metric("mae").unwrap_or(f64::NAN),
            rmse: self.evaluator.metric("rmse").unwrap_or(f64::NAN),
            seconds: self.start_time.elapsed().as_secs_f64(),
        };
        debug!("{snapshot}");

        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(snapshot);
        }
        self.curve.push(snapshot);
    }
}
