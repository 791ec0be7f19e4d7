//! Text typer that runs the dispatcher on a blocking thread

use async_trait::async_trait;

use crate::application::dispatcher::{dispatch, DispatchError, DispatchReport};
use crate::application::ports::{InjectionError, TextTyper, TypeRequest};

use super::factory::{open_backend, Backend};

/// Types text with one backend, off the async runtime
#[derive(Debug, Clone, Copy)]
pub struct BlockingTyper {
    backend: Backend,
}

impl BlockingTyper {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }
}

#[async_trait]
impl TextTyper for BlockingTyper {
    async fn type_text(&self, request: TypeRequest) -> Result<DispatchReport, DispatchError> {
        let backend = self.backend;

        // Input injection and pacing block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let (table, mut sink) =
                open_backend(backend).map_err(|source| DispatchError { typed: 0, source })?;
            dispatch(&table, &mut sink, &request.text, &request.layout, request.delay)
        })
        .await
        .map_err(|e| DispatchError {
            typed: 0,
            source: InjectionError::Unavailable(format!("Task join error: {}", e)),
        })?
    }
}
