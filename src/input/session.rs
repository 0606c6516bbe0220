//! The translation session. Owns the source connection, the virtual
//! device, and the per-session translator state, and drives the
//! read → translate → emit → synchronize loop until termination.

use thiserror::Error;

use crate::config::DeviceProfile;
use crate::input::event::SourceEvent;
use crate::input::source::spacenav::{SourceError, SpacenavSource};
use crate::input::target::uinput::{TargetError, UinputDevice};
use crate::input::translator::{ButtonTranslator, MotionTranslator};

/// Possible errors while the session is running.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Target(#[from] TargetError),
}

/// A running translation session. Created once the profile is selected and
/// both collaborators are open; consumed by [run](Self::run), which tears
/// both down on every exit path.
pub struct Session {
    source: SpacenavSource,
    target: UinputDevice,
    motion: MotionTranslator,
    buttons: ButtonTranslator,
}

impl Session {
    pub fn new(
        profile: &'static DeviceProfile,
        source: SpacenavSource,
        target: UinputDevice,
    ) -> Session {
        Session {
            source,
            target,
            motion: MotionTranslator::new(profile),
            buttons: ButtonTranslator::new(profile),
        }
    }

    /// Runs the event loop until the source closes, an interrupt arrives,
    /// or a collaborator fails. The interrupt future is polled in the same
    /// task as the event wait, so all session state stays on one execution
    /// context.
    pub async fn run(mut self) -> Result<(), SessionError> {
        let interrupt = tokio::signal::ctrl_c();
        tokio::pin!(interrupt);

        let result = loop {
            tokio::select! {
                _ = &mut interrupt => {
                    log::info!("interrupt received, terminating session");
                    break Ok(());
                }
                event = self.source.next_event() => match event {
                    Ok(event) => {
                        if let Err(err) = self.process(event).await {
                            break Err(err);
                        }
                    }
                    Err(SourceError::Disconnected) => {
                        log::info!("source connection closed, terminating session");
                        break Ok(());
                    }
                    Err(err) => break Err(err.into()),
                },
            }
        };

        self.shutdown().await;
        result
    }

    /// Handles one source event: translate, write the translated batch in
    /// order, frame it with exactly one synchronization report, then drop
    /// whatever same-kind events queued up while we were busy.
    async fn process(&mut self, event: SourceEvent) -> Result<(), SessionError> {
        match &event {
            SourceEvent::Motion(sample) => {
                log::trace!("motion sample: {sample:?}");
                let translated = self.motion.translate(sample);
                self.target.emit(&translated)?;
            }
            SourceEvent::Button(transition) => {
                log::trace!("button transition: {transition:?}");
                if let Some(translated) = self.buttons.translate(transition) {
                    self.target.emit(&[translated])?;
                }
            }
        }
        self.target.sync()?;

        let discarded = self.source.flush_pending(event.kind()).await?;
        if discarded > 0 {
            log::trace!("discarded {discarded} stale {:?} events", event.kind());
        }
        Ok(())
    }

    /// Releases both collaborators. Runs on every termination trigger,
    /// including an interrupt that lands mid-batch.
    async fn shutdown(mut self) {
        self.target.destroy();
        self.source.close().await;
        log::info!("session closed");
    }
}
