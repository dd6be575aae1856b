//! Loading screen sequence: progress, stage labels and rotating tips.
//!
//! Progress advances by a random step in `[1.5, 5.5)` per tick and saturates at
//! 100. Reaching 100 produces exactly one [`LoadingEvent::Ready`] and ends the
//! sequence.

use futures::Stream;
use futures::stream::{self, StreamExt};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior};

/// Progress tick period.
pub const TICK: Duration = Duration::from_millis(60);
/// Tip rotation period.
pub const TIP_EVERY: Duration = Duration::from_secs(3);

const STEP_MIN: f64 = 1.5;
const STEP_MAX: f64 = 5.5;
const COMPLETE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Stage {
    #[serde(rename = "Initializing Connection")]
    InitializingConnection,
    #[serde(rename = "Loading Server Data")]
    LoadingServerData,
    #[serde(rename = "Syncing Assets")]
    SyncingAssets,
    #[serde(rename = "Preparing Interface")]
    PreparingInterface,
    #[serde(rename = "Final Checks")]
    FinalChecks,
    #[serde(rename = "Ready to Launch")]
    ReadyToLaunch,
}

impl Stage {
    pub fn from_progress(progress: f64) -> Self {
        match progress {
            p if p < 20.0 => Self::InitializingConnection,
            p if p < 40.0 => Self::LoadingServerData,
            p if p < 60.0 => Self::SyncingAssets,
            p if p < 80.0 => Self::PreparingInterface,
            p if p < 95.0 => Self::FinalChecks,
            _ => Self::ReadyToLaunch,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InitializingConnection => "Initializing Connection",
            Self::LoadingServerData => "Loading Server Data",
            Self::SyncingAssets => "Syncing Assets",
            Self::PreparingInterface => "Preparing Interface",
            Self::FinalChecks => "Final Checks",
            Self::ReadyToLaunch => "Ready to Launch",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LoadingEvent {
    Progress { progress: f64, stage: Stage },
    Tip { index: usize, text: String },
    Ready,
}

impl LoadingEvent {
    /// SSE event name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Progress { .. } => "progress",
            Self::Tip { .. } => "tip",
            Self::Ready => "ready",
        }
    }
}

/// Random-walk progress towards 100.
#[derive(Debug, Clone)]
pub struct LoadingSequence<R = StdRng> {
    progress: f64,
    finished: bool,
    rng: R,
}

impl LoadingSequence<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }
}

impl Default for LoadingSequence<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> LoadingSequence<R> {
    pub const fn with_rng(rng: R) -> Self {
        Self { progress: 0.0, finished: false, rng }
    }

    pub const fn progress(&self) -> f64 {
        self.progress
    }

    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one tick. Returns `None` once [`LoadingEvent::Ready`] has been emitted.
    pub fn step(&mut self) -> Option<LoadingEvent> {
        if self.finished {
            return None;
        }
        if self.progress >= COMPLETE {
            self.finished = true;
            return Some(LoadingEvent::Ready);
        }

        let increment = self.rng.random_range(STEP_MIN..STEP_MAX);
        self.progress = (self.progress + increment).min(COMPLETE);
        Some(LoadingEvent::Progress {
            progress: self.progress,
            stage: Stage::from_progress(self.progress),
        })
    }
}

/// Round-robin over the server's loading tips.
#[derive(Debug, Clone, Default)]
pub struct TipRotation {
    tips: Vec<String>,
    current: usize,
}

impl TipRotation {
    pub const fn new(tips: Vec<String>) -> Self {
        Self { tips, current: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    pub fn current(&self) -> Option<(usize, &str)> {
        self.tips.get(self.current).map(|tip| (self.current, tip.as_str()))
    }

    /// Moves to the next tip, wrapping around. No-op without tips.
    pub fn advance(&mut self) -> Option<(usize, &str)> {
        if self.tips.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.tips.len();
        self.current()
    }

    fn current_event(&self) -> Option<LoadingEvent> {
        self.current().map(|(index, text)| LoadingEvent::Tip { index, text: text.to_owned() })
    }
}

struct Driver<R> {
    sequence: LoadingSequence<R>,
    tips: TipRotation,
    tick: Interval,
    tip: Interval,
}

/// The full loading sequence at the standard cadence.
pub fn loading_stream(tips: Vec<String>) -> impl Stream<Item = LoadingEvent> + Send {
    loading_stream_with(LoadingSequence::new(), tips, TICK, TIP_EVERY)
}

/// Loading sequence with an explicit generator and cadence.
///
/// The first tip (if any) is emitted up front. The stream ends right after the
/// ready event; dropping it earlier stops both timers.
pub fn loading_stream_with<R>(
    sequence: LoadingSequence<R>,
    tips: Vec<String>,
    tick_every: Duration,
    tip_every: Duration,
) -> impl Stream<Item = LoadingEvent> + Send
where
    R: Rng + Send + 'static,
{
    let tips = TipRotation::new(tips);
    let first = tips.current_event();

    let mut tick = tokio::time::interval(tick_every);
    tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut tip = tokio::time::interval_at(Instant::now() + tip_every, tip_every);
    tip.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let driver = Driver { sequence, tips, tick, tip };

    let rest = stream::unfold(driver, |mut d| async move {
        let rotate = !d.tips.is_empty();
        tokio::select! {
            _ = d.tick.tick() => {
                let event = d.sequence.step()?;
                Some((event, d))
            },
            _ = d.tip.tick(), if rotate => {
                d.tips.advance();
                let event = d.tips.current_event()?;
                Some((event, d))
            },
        }
    });

    stream::iter(first).chain(rest)
}
