//! Single-writer actor for SQLite.
//!
//! SQLite allows many readers but only one writer at a time. Rather than
//! letting pooled connections race for the write lock, every mutation is
//! funneled through one dedicated task that owns the write side. Jobs are
//! closures executed in order, each inside its own IMMEDIATE transaction,
//! so callers get serialized, atomic writes without holding locks.

use std::any::Any;

use diesel::sqlite::SqliteConnection;
use tokio::sync::{mpsc, oneshot};

use crate::errors::StorageError;
use visadesk_core::db::DbPool;
use visadesk_core::errors::{Error, Result};

type JobResult = Result<Box<dyn Any + Send>>;
type Job = Box<dyn FnOnce(&mut SqliteConnection) -> JobResult + Send>;

/// Cloneable handle for submitting write jobs to the actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(Job, oneshot::Sender<JobResult>)>,
}

impl WriteHandle {
    /// Runs `f` on the writer connection inside a transaction and returns
    /// its result.
    ///
    /// The result crosses the channel type-erased; the actor task owns the
    /// channel for the lifetime of the process, so a closed channel means
    /// the runtime is shutting down.
    pub async fn exec<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
    {
        let (done_tx, done_rx) = oneshot::channel::<JobResult>();
        let job: Job = Box::new(move |conn| f(conn).map(|v| Box::new(v) as Box<dyn Any + Send>));

        self.tx
            .send((job, done_tx))
            .await
            .expect("write actor has terminated");

        let boxed = done_rx.await.expect("write actor dropped the result")?;
        Ok(*boxed
            .downcast::<T>()
            .expect("write job returned an unexpected type"))
    }
}

/// Spawns the writer task on the current Tokio runtime.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(Job, oneshot::Sender<JobResult>)>(1024);

    tokio::spawn(async move {
        while let Some((job, done)) = rx.recv().await {
            let result = run_job(&pool, job);
            // The caller may have gone away; dropping the result is fine.
            let _ = done.send(result);
        }
    });

    WriteHandle { tx }
}

fn run_job(pool: &DbPool, job: Job) -> JobResult {
    let mut conn = pool.get().map_err(StorageError::from)?;

    // The job's own error is stashed aside so the caller sees the original
    // failure (a unique violation, a rejected transition) rather than a
    // generic rollback error.
    let mut failure: Option<Error> = None;
    let result = conn
        .immediate_transaction::<Box<dyn Any + Send>, diesel::result::Error, _>(|tx_conn| {
            job(tx_conn).map_err(|e| {
                failure = Some(e);
                diesel::result::Error::RollbackTransaction
            })
        });

    result.map_err(|e| match failure.take() {
        Some(inner) => inner,
        None => StorageError::from(e).into(),
    })
}
