//! Background fetch worker
//!
//! Runs a [`RepositorySource`] on its own thread inside a current-thread tokio
//! runtime and hands the outcome back over a channel the frame loop polls.
//! If the receiving side is gone by the time the fetch resolves, the outcome
//! is dropped instead of being applied.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info};

use super::ProjectItem;
use super::github::{FetchError, RepositorySource};

pub type FetchOutcome = Result<Vec<ProjectItem>, FetchError>;

/// Receiving end of a spawned fetch
pub struct FetchHandle {
    rx: Receiver<FetchOutcome>,
    finished: bool,
}

impl FetchHandle {
    /// Non-blocking check for the outcome; yields it at most once
    ///
    /// A worker that died without reporting counts as a failed fetch.
    pub fn poll(&mut self) -> Option<FetchOutcome> {
        if self.finished {
            return None;
        }
        match self.rx.try_recv() {
            Ok(outcome) => {
                self.finished = true;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.finished = true;
                Some(Err(FetchError::WorkerGone))
            }
        }
    }
}

/// Start fetching from `source` on a background thread
pub fn spawn_fetch(source: Arc<dyn RepositorySource>) -> FetchHandle {
    // Detached: the worker ends on its own once the fetch resolves
    let (handle, _worker) = spawn_worker(source);
    handle
}

/// Spawn the worker; its join handle yields whether the outcome was delivered
fn spawn_worker(source: Arc<dyn RepositorySource>) -> (FetchHandle, Option<JoinHandle<bool>>) {
    let (tx, rx) = mpsc::channel();

    let spawned = thread::Builder::new()
        .name("repo-fetch".to_string())
        .spawn(move || {
            let outcome = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime.block_on(source.fetch()),
                Err(err) => {
                    error!(error = %err, "Failed to build fetch runtime");
                    Err(FetchError::Runtime(err))
                }
            };

            let delivered = tx.send(outcome).is_ok();
            if !delivered {
                debug!("Portfolio view gone, discarding fetch result");
            }
            delivered
        });

    let worker = match spawned {
        Ok(worker) => {
            info!("Repository fetch started");
            Some(worker)
        }
        // The sender was dropped with the closure, so poll() reports WorkerGone
        Err(err) => {
            error!(error = %err, "Failed to spawn fetch thread");
            None
        }
    };

    (FetchHandle { rx, finished: false }, worker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::seed::seed_projects;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::Mutex;
    use std::time::Duration;

    struct FixedSource(Vec<ProjectItem>);

    #[async_trait]
    impl RepositorySource for FixedSource {
        async fn fetch(&self) -> Result<Vec<ProjectItem>, FetchError> {
            Ok(self.0.clone())
        }
    }

    struct RejectingSource;

    #[async_trait]
    impl RepositorySource for RejectingSource {
        async fn fetch(&self) -> Result<Vec<ProjectItem>, FetchError> {
            Err(FetchError::Status(StatusCode::FORBIDDEN))
        }
    }

    struct PanickingSource;

    #[async_trait]
    impl RepositorySource for PanickingSource {
        async fn fetch(&self) -> Result<Vec<ProjectItem>, FetchError> {
            panic!("source blew up");
        }
    }

    /// Holds the fetch until the test releases it
    struct GatedSource {
        gate: Mutex<mpsc::Receiver<()>>,
    }

    #[async_trait]
    impl RepositorySource for GatedSource {
        async fn fetch(&self) -> Result<Vec<ProjectItem>, FetchError> {
            self.gate.lock().unwrap().recv().unwrap();
            Ok(seed_projects())
        }
    }

    fn spawn_and_join(source: Arc<dyn RepositorySource>) -> (FetchHandle, thread::Result<bool>) {
        let (handle, worker) = spawn_worker(source);
        let joined = worker.expect("worker thread spawned").join();
        (handle, joined)
    }

    #[test]
    fn test_successful_fetch_is_delivered_once() {
        let (mut handle, delivered) = spawn_and_join(Arc::new(FixedSource(seed_projects())));
        assert!(delivered.unwrap());

        let projects = handle.poll().unwrap().unwrap();
        assert_eq!(projects.len(), 3);
        assert!(handle.poll().is_none());
    }

    #[test]
    fn test_rejected_fetch_is_delivered_as_error() {
        let (mut handle, _) = spawn_and_join(Arc::new(RejectingSource));
        assert!(matches!(
            handle.poll(),
            Some(Err(FetchError::Status(code))) if code == StatusCode::FORBIDDEN
        ));
    }

    #[test]
    fn test_dead_worker_reports_failure() {
        let (mut handle, joined) = spawn_and_join(Arc::new(PanickingSource));
        assert!(joined.is_err());
        assert!(matches!(handle.poll(), Some(Err(FetchError::WorkerGone))));
        assert!(handle.poll().is_none());
    }

    #[test]
    fn test_outcome_after_teardown_is_discarded() {
        let (release, gate) = mpsc::channel();
        let (handle, worker) = spawn_worker(Arc::new(GatedSource { gate: Mutex::new(gate) }));

        // View goes away while the fetch is still in flight
        drop(handle);
        release.send(()).unwrap();

        let delivered = worker.expect("worker thread spawned").join().unwrap();
        assert!(!delivered);
    }

    #[test]
    fn test_spawn_fetch_delivers_outcome() {
        let handle = spawn_fetch(Arc::new(FixedSource(seed_projects())));
        let outcome = handle.rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome.unwrap().len(), 3);
    }
}
