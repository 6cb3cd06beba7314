//! Background image fetching for lazily loaded slides.
//!
//! File reads and EXIF parsing run on a worker thread; results come back over
//! an `mpsc` channel and are turned into textures on the main thread.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};

use crate::texture_loader::{ImageBytes, LoadError, read_image};

#[derive(Debug)]
pub enum FetchCommand {
    Fetch { slide: usize, path: PathBuf },
    Shutdown,
}

#[derive(Debug)]
pub struct Fetched {
    pub slide: usize,
    pub path: PathBuf,
    pub result: Result<ImageBytes, LoadError>,
}

pub struct FetchWorker {
    commands: Sender<FetchCommand>,
    results: Receiver<Fetched>,
    handle: Option<JoinHandle<()>>,
    alive: bool,
}

impl FetchWorker {
    pub fn spawn() -> Result<Self> {
        let (commands, command_rx) = mpsc::channel();
        let (result_tx, results) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("image-fetch".into())
            .spawn(move || run(command_rx, result_tx))
            .context("failed to spawn image fetch worker")?;
        Ok(Self { commands, results, handle: Some(handle), alive: true })
    }

    pub fn request(&self, slide: usize, path: PathBuf) {
        tracing::debug!(slide, path = %path.display(), "fetch requested");
        if self.commands.send(FetchCommand::Fetch { slide, path }).is_err() {
            tracing::warn!(slide, "image fetch worker is gone");
        }
    }

    /// Everything that finished since the last call, without blocking.
    /// Once the worker thread is gone nothing more will ever arrive, and
    /// `is_alive` turns false.
    pub fn completed(&mut self) -> Vec<Fetched> {
        let mut done = Vec::new();
        loop {
            match self.results.try_recv() {
                Ok(fetched) => done.push(fetched),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.alive {
                        tracing::warn!("image fetch worker stopped, pending slides will not load");
                        self.alive = false;
                    }
                    break;
                }
            }
        }
        done
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Stops the worker thread and waits for it.
    pub fn shutdown(&mut self) {
        let _ = self.commands.send(FetchCommand::Shutdown);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("image fetch worker panicked");
            }
        }
    }
}

impl Drop for FetchWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run(commands: Receiver<FetchCommand>, results: Sender<Fetched>) {
    while let Ok(command) = commands.recv() {
        match command {
            FetchCommand::Fetch { slide, path } => {
                let result = read_image(&path);
                if results.send(Fetched { slide, path, result }).is_err() {
                    break;
                }
            }
            FetchCommand::Shutdown => break,
        }
    }
}
