//! Client for the spacenavd AF_UNIX event protocol. This is the source
//! collaborator of the translation session: it owns the daemon connection
//! and hands decoded events to the session loop.

use std::collections::VecDeque;
use std::env;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;

use crate::input::event::{ButtonTransition, EventKind, MotionSample, SourceEvent};

/// Default location of the spacenavd socket.
pub const DEFAULT_SOCKET_PATH: &str = "/var/run/spnav.sock";
/// Environment variable overriding [DEFAULT_SOCKET_PATH].
pub const SOCKET_PATH_ENV: &str = "SPNAV_SOCKET";

/// Every wire event is a fixed frame of eight host-endian i32 words.
pub(crate) const FRAME_SIZE: usize = 32;
const FRAME_WORDS: usize = FRAME_SIZE / 4;

const EVENT_MOTION: i32 = 0;
const EVENT_BUTTON_PRESS: i32 = 1;
const EVENT_BUTTON_RELEASE: i32 = 2;

/// Possible errors for the source connection.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to connect to the space navigator daemon: {0}")]
    Connect(io::Error),
    #[error("the space navigator daemon closed the connection")]
    Disconnected,
    #[error("error reading from the space navigator daemon: {0}")]
    Io(#[from] io::Error),
}

/// Connection to the spacenavd daemon.
#[derive(Debug)]
pub struct SpacenavSource {
    stream: UnixStream,
    /// Events decoded but not yet consumed, in arrival order. Refilled by
    /// [flush_pending](Self::flush_pending) with the events it retains.
    pending: VecDeque<SourceEvent>,
    /// Trailing bytes of an incomplete frame from a non-blocking drain.
    partial: Vec<u8>,
}

impl SpacenavSource {
    /// Returns the socket path to connect to, honoring the environment
    /// override.
    pub fn socket_path() -> PathBuf {
        env::var_os(SOCKET_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOCKET_PATH))
    }

    pub async fn connect(path: &Path) -> Result<SpacenavSource, SourceError> {
        let stream = UnixStream::connect(path)
            .await
            .map_err(SourceError::Connect)?;
        Ok(SpacenavSource {
            stream,
            pending: VecDeque::new(),
            partial: Vec::new(),
        })
    }

    /// Blocks until the next source event arrives. Events retained by an
    /// earlier flush are drained first.
    pub async fn next_event(&mut self) -> Result<SourceEvent, SourceError> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(event);
            }
            let frame = self.read_frame().await?;
            if let Some(event) = decode_frame(&frame) {
                return Ok(event);
            }
            // Unknown frame type: already logged, keep waiting.
        }
    }

    /// Discards every queued event of the given kind without blocking.
    /// Events of the other kind stay queued in arrival order. Returns the
    /// number of events discarded.
    pub async fn flush_pending(&mut self, kind: EventKind) -> Result<usize, SourceError> {
        self.drain_socket()?;
        let before = self.pending.len();
        self.pending.retain(|event| event.kind() != kind);
        Ok(before - self.pending.len())
    }

    /// Shuts the connection down. Part of session teardown; errors here
    /// are logged rather than surfaced since the session is ending anyway.
    pub async fn close(&mut self) {
        if let Err(err) = self.stream.shutdown().await {
            log::debug!("error shutting down the source socket: {err}");
        }
    }

    async fn read_frame(&mut self) -> Result<[u8; FRAME_SIZE], SourceError> {
        let mut frame = [0u8; FRAME_SIZE];
        // A previous drain may have left the head of this frame behind.
        let have = self.partial.len();
        frame[..have].copy_from_slice(&self.partial);
        self.partial.clear();

        match self.stream.read_exact(&mut frame[have..]).await {
            Ok(_) => Ok(frame),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                Err(SourceError::Disconnected)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Reads everything currently available on the socket and queues the
    /// decoded events. Never blocks; an incomplete trailing frame is kept
    /// for the next read.
    fn drain_socket(&mut self) -> Result<(), SourceError> {
        let mut buf = [0u8; 8 * FRAME_SIZE];
        loop {
            match self.stream.try_read(&mut buf) {
                // EOF: stop draining and let the next blocking read report
                // the closure.
                Ok(0) => return Ok(()),
                Ok(n) => {
                    self.partial.extend_from_slice(&buf[..n]);
                    while self.partial.len() >= FRAME_SIZE {
                        let mut frame = [0u8; FRAME_SIZE];
                        frame.copy_from_slice(&self.partial[..FRAME_SIZE]);
                        self.partial.drain(..FRAME_SIZE);
                        if let Some(event) = decode_frame(&frame) {
                            self.pending.push_back(event);
                        }
                    }
                }
                Err(err) if err.kind() == io::ErrorKind::WouldBlock => return Ok(()),
                Err(err) => return Err(err.into()),
            }
        }
    }
}

/// Decodes one wire frame. Returns [None] for frame types this client does
/// not understand, which are skipped rather than treated as errors.
pub(crate) fn decode_frame(frame: &[u8; FRAME_SIZE]) -> Option<SourceEvent> {
    let mut words = [0i32; FRAME_WORDS];
    for (word, chunk) in words.iter_mut().zip(frame.chunks_exact(4)) {
        *word = i32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    match words[0] {
        // Word 7 of a motion frame is the period since the previous event;
        // translation has no use for it.
        EVENT_MOTION => Some(SourceEvent::Motion(MotionSample {
            x: words[1],
            y: words[2],
            z: words[3],
            rx: words[4],
            ry: words[5],
            rz: words[6],
        })),
        EVENT_BUTTON_PRESS | EVENT_BUTTON_RELEASE => Some(SourceEvent::Button(ButtonTransition {
            index: words[1],
            pressed: words[0] == EVENT_BUTTON_PRESS,
        })),
        other => {
            log::warn!("skipping unknown spacenav event type {other}");
            None
        }
    }
}
