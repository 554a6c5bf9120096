//! Background frame loading.
//!
//! Runs a [`FrameSource`] on its own thread so the host's render loop keeps
//! turning (and can show a loading indicator) while the sequence is fetched.
//! The single result is handed back through a triple buffer.

use super::FrameSource;
use crate::error::CloudscopeError;
use crate::frame::Frame;

type LoadResult = Option<Result<Vec<Frame>, String>>;

/// Progress of a [`FrameLoader`].
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// The source is still working.
    Loading,
    /// Frames arrived. Returned exactly once.
    Ready(Vec<Frame>),
    /// The source failed. Returned exactly once; playback must not start.
    Failed(String),
    /// The result has already been handed out.
    Finished,
}

/// Owns the background thread running a one-shot frame fetch.
pub struct FrameLoader {
    result: triple_buffer::Output<LoadResult>,
    thread: Option<std::thread::JoinHandle<()>>,
    finished: bool,
}

impl FrameLoader {
    /// Start fetching from `source` on a background thread.
    ///
    /// # Errors
    ///
    /// [`CloudscopeError::ThreadSpawn`] if the thread cannot be created.
    pub fn spawn<S>(source: S) -> Result<Self, CloudscopeError>
    where
        S: FrameSource + Send + 'static,
    {
        let (mut input, output) = triple_buffer::triple_buffer(&None);

        let thread = std::thread::Builder::new()
            .name("frame-loader".into())
            .spawn(move || {
                log::info!("Loading frames from {}", source.describe());
                let outcome = source.fetch().map_err(|e| e.to_string());
                if let Err(e) = &outcome {
                    log::error!("Error fetching frames: {e}");
                }
                input.write(Some(outcome));
            })
            .map_err(CloudscopeError::ThreadSpawn)?;

        Ok(Self {
            result: output,
            thread: Some(thread),
            finished: false,
        })
    }

    /// Non-blocking check for the fetch result.
    pub fn poll(&mut self) -> LoadState {
        if self.finished {
            return LoadState::Finished;
        }
        let _ = self.result.update();
        match self.result.output_buffer_mut().take() {
            None => LoadState::Loading,
            Some(outcome) => {
                self.finished = true;
                self.join();
                match outcome {
                    Ok(frames) => LoadState::Ready(frames),
                    Err(msg) => LoadState::Failed(msg),
                }
            }
        }
    }

    /// Block until the fetch completes.
    ///
    /// # Errors
    ///
    /// [`CloudscopeError::Fetch`] if the source failed or the result was
    /// already taken by [`poll`](Self::poll).
    pub fn wait(mut self) -> Result<Vec<Frame>, CloudscopeError> {
        self.join();
        match self.poll() {
            LoadState::Ready(frames) => Ok(frames),
            LoadState::Failed(msg) => Err(CloudscopeError::Fetch(msg)),
            LoadState::Loading => Err(CloudscopeError::Fetch(
                "loader thread exited without a result".into(),
            )),
            LoadState::Finished => Err(CloudscopeError::Fetch(
                "load result was already consumed".into(),
            )),
        }
    }

    fn join(&mut self) {
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                log::error!("frame loader thread panicked");
            }
        }
    }
}

impl Drop for FrameLoader {
    fn drop(&mut self) {
        self.join();
    }
}
