//! Stub processor implementations for exercising the job service.

use std::time::Duration;

use async_trait::async_trait;
use mca_domain::{AnalysisReport, Job, JobProcessor, SharedJob, TestReport};

/// Completes every job immediately with an empty passing test report.
#[derive(Debug)]
pub struct InstantProcessor;

#[async_trait]
impl JobProcessor for InstantProcessor {
    async fn process(&self, job: &SharedJob) {
        job.update(|j| {
            j.mark_running();
            j.complete(AnalysisReport::Test(TestReport {
                passed: 1,
                failed: 0,
                error: None,
            }));
        });
    }
}

/// Fails every job with a fixed message.
#[derive(Debug)]
pub struct FailingProcessor;

#[async_trait]
impl JobProcessor for FailingProcessor {
    async fn process(&self, job: &SharedJob) {
        job.update(|j| {
            j.mark_running();
            j.fail("simulated analyzer failure");
        });
    }
}

/// Panics mid-processing, after marking the job running.
#[derive(Debug)]
pub struct PanickingProcessor;

#[async_trait]
impl JobProcessor for PanickingProcessor {
    async fn process(&self, job: &SharedJob) {
        job.update(Job::mark_running);
        panic!("stub processor blew up");
    }
}

/// Violates the processor contract by returning without finalizing.
#[derive(Debug)]
pub struct NonFinalizingProcessor;

#[async_trait]
impl JobProcessor for NonFinalizingProcessor {
    async fn process(&self, job: &SharedJob) {
        job.update(Job::mark_running);
    }
}

/// Sleeps before completing, so callers can observe the running state.
#[derive(Debug)]
pub struct SlowProcessor(pub Duration);

#[async_trait]
impl JobProcessor for SlowProcessor {
    async fn process(&self, job: &SharedJob) {
        job.update(Job::mark_running);
        tokio::time::sleep(self.0).await;
        job.update(|j| {
            j.complete(AnalysisReport::Test(TestReport {
                passed: 0,
                failed: 0,
                error: None,
            }));
        });
    }
}
