//! Clock sync service

use std::time::Duration;

use tracing::debug;

use super::source::TimeSource;
use crate::api::AdminApi;
use crate::error::Result;
use crate::model::ClockState;

/// Elapsed judging time given the last server reading and the local time
/// passed since that reading
#[inline]
pub fn corrected_elapsed(last_server_time: Duration, since_sync: Duration, running: bool) -> Duration {
    if running {
        last_server_time + since_sync
    } else {
        last_server_time
    }
}

/// Whole milliseconds, saturating at `u64::MAX`
#[inline]
pub fn saturating_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// `HH:MM:SS`, hours not wrapped
pub fn format_clock(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

/// Local view of the server clock
#[derive(Debug, Clone)]
pub struct ClockSync<S: TimeSource> {
    source: S,
    last_server_time: Duration,
    synced_at: Duration,
    running: bool,
}

impl<S: TimeSource> ClockSync<S> {
    /// Paused at zero
    pub fn new(source: S) -> Self {
        let synced_at = source.now();
        Self {
            source,
            last_server_time: Duration::ZERO,
            synced_at,
            running: false,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current_elapsed(&self) -> Duration {
        let since_sync = self.source.now().saturating_sub(self.synced_at);
        corrected_elapsed(self.last_server_time, since_sync, self.running)
    }

    /// Adopt a server reading
    pub fn sync(&mut self, state: ClockState) {
        self.last_server_time = Duration::from_millis(state.time);
        self.synced_at = self.source.now();
        self.running = state.running;
    }

    pub fn start(&mut self) {
        if !self.running {
            self.rebase();
            self.running = true;
        }
    }

    pub fn pause(&mut self) {
        if self.running {
            self.rebase();
            self.running = false;
        }
    }

    pub fn reset(&mut self) {
        self.last_server_time = Duration::ZERO;
        self.synced_at = self.source.now();
        self.running = false;
    }

    /// Fold local progress into the base so the running flag can change
    fn rebase(&mut self) {
        self.last_server_time = self.current_elapsed();
        self.synced_at = self.source.now();
    }

    /// Fetch the server clock and adopt it
    pub async fn poll<A>(&mut self, api: &A) -> Result<Duration>
    where
        A: AdminApi + ?Sized,
    {
        let state = api.clock().await?;
        let local = self.current_elapsed();
        self.sync(state);
        debug!(
            server_ms = state.time,
            local_ms = saturating_millis(local),
            running = state.running,
            "clock synced"
        );
        Ok(self.current_elapsed())
    }

    /// Pause on the server, then locally
    pub async fn pause_remote<A>(&mut self, api: &A) -> Result<()>
    where
        A: AdminApi + ?Sized,
    {
        api.pause_clock().await?;
        self.pause();
        Ok(())
    }

    /// Unpause on the server, then locally
    pub async fn start_remote<A>(&mut self, api: &A) -> Result<()>
    where
        A: AdminApi + ?Sized,
    {
        api.unpause_clock().await?;
        self.start();
        Ok(())
    }

    pub async fn reset_remote<A>(&mut self, api: &A) -> Result<()>
    where
        A: AdminApi + ?Sized,
    {
        api.reset_clock().await?;
        self.reset();
        Ok(())
    }
}
