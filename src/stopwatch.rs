//! Stopwatch state machine for Bubble Tea applications.
//!
//! The stopwatch counts elapsed time by adding a fixed interval to its
//! counter on every tick while it is running. It has two states, stopped
//! (the initial state) and running, and three operations: start, pause and
//! reset. Like every component in this crate it follows the Elm
//! Architecture: the control methods return commands that deliver a
//! message back to [`Model::update`], which applies the transition.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_stopwatch::stopwatch::{new, new_with_interval};
//! use std::time::Duration;
//!
//! // 10ms ticks, stopped at 00:00:00
//! let stopwatch = new();
//! assert!(!stopwatch.running());
//! assert_eq!(stopwatch.view(), "00:00:00");
//!
//! // Coarser ticks for a slower display
//! let coarse = new_with_interval(Duration::from_millis(100));
//! assert_eq!(coarse.interval(), Duration::from_millis(100));
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
//! use bubbletea_stopwatch::stopwatch;
//! use crossterm::event::KeyCode;
//!
//! struct App {
//!     stopwatch: stopwatch::Model,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let stopwatch = stopwatch::new();
//!         let cmd = stopwatch.start();
//!         (Self { stopwatch }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(key) = msg.downcast_ref::<KeyMsg>() {
//!             match key.key {
//!                 KeyCode::Char(' ') => return Some(self.stopwatch.toggle()),
//!                 KeyCode::Char('r') => return Some(self.stopwatch.reset()),
//!                 _ => {}
//!             }
//!         }
//!         self.stopwatch.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Elapsed: {}", self.stopwatch.view())
//!     }
//! }
//! ```
//!
//! # Tick Chains
//!
//! Only one tick is ever in flight. Each tick schedules the next one, and
//! each tick carries the stopwatch's current `tag`. Starting, pausing and
//! resetting bump the tag, so a tick scheduled before the transition
//! arrives stale and is dropped, which ends the chain. Dropping the model
//! (or quitting the program) ends it the same way: nothing routes the
//! pending tick back to a live stopwatch.

use crate::clock::{self, Reading};
use crate::options::{Options, DEFAULT_INTERVAL};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use log::{debug, trace};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Ticks count whole milliseconds; anything shorter would never advance.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Starts or pauses the stopwatch with the matching id.
///
/// Produced by [`Model::start`], [`Model::stop`] and [`Model::toggle`].
/// An id of `0` addresses every stopwatch.
#[derive(Debug, Clone)]
pub struct StartStopMsg {
    /// The stopwatch this message targets.
    pub id: i64,
    running: bool,
}

impl StartStopMsg {
    /// Whether the target should be running after this message.
    pub fn running(&self) -> bool {
        self.running
    }
}

/// Clears the elapsed time of the stopwatch with the matching id and stops it.
#[derive(Debug, Clone)]
pub struct ResetMsg {
    /// The stopwatch this message targets.
    pub id: i64,
}

/// One periodic tick of a running stopwatch.
///
/// Ticks are only honoured when both the id and the chain tag match the
/// receiving stopwatch and it is still running.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The stopwatch that scheduled this tick.
    pub id: i64,
    tag: i64,
}

/// A stopwatch counting elapsed milliseconds in fixed ticks.
///
/// # Examples
///
/// ```rust
/// use bubbletea_stopwatch::stopwatch::Model;
///
/// let stopwatch = Model::new();
/// assert_eq!(stopwatch.elapsed_ms(), 0);
/// assert!(!stopwatch.running());
/// assert!(!stopwatch.show_hours());
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    elapsed_ms: u64,
    running: bool,
    // Latched on the first tick that reaches one hour; only reset clears it.
    show_hours: bool,
    interval: Duration,
    id: i64,
    tag: i64,
}

/// Creates a stopped stopwatch ticking every 10ms.
pub fn new() -> Model {
    new_with_interval(DEFAULT_INTERVAL)
}

/// Creates a stopped stopwatch with a custom tick interval.
///
/// Each tick adds `interval`, truncated to whole milliseconds, to the
/// elapsed time. Intervals below 1ms are raised to 1ms.
pub fn new_with_interval(interval: Duration) -> Model {
    Model {
        elapsed_ms: 0,
        running: false,
        show_hours: false,
        interval: interval.max(MIN_INTERVAL),
        id: next_id(),
        tag: 0,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Creates a stopped stopwatch ticking every 10ms.
    pub fn new() -> Self {
        new()
    }

    /// Creates a stopwatch from shared options.
    ///
    /// When `start_running` is set the model is already running and
    /// [`Model::init`] returns the first tick.
    pub fn from_options(options: &Options) -> Self {
        let mut model = new_with_interval(options.interval);
        if options.start_running {
            model.running = true;
            model.tag += 1;
        }
        model
    }

    /// Unique identifier of this stopwatch.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Elapsed time in milliseconds since the last reset.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Elapsed time since the last reset.
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }

    /// Whether the stopwatch is accumulating time.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Whether the face should show the hours group.
    pub fn show_hours(&self) -> bool {
        self.show_hours
    }

    /// Time added per tick.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The elapsed time split into clock fields.
    pub fn reading(&self) -> Reading {
        Reading::from_millis(self.elapsed_ms)
    }

    /// Returns a command that starts the stopwatch.
    pub fn start(&self) -> Cmd {
        self.start_stop(true)
    }

    /// Returns a command that pauses the stopwatch, keeping the elapsed time.
    pub fn stop(&self) -> Cmd {
        self.start_stop(false)
    }

    /// Returns a command that starts a stopped stopwatch or pauses a
    /// running one.
    pub fn toggle(&self) -> Cmd {
        self.start_stop(!self.running)
    }

    /// Returns a command that stops the stopwatch and clears elapsed time.
    pub fn reset(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(ResetMsg { id }) as Msg
        })
    }

    /// The first tick when the stopwatch was created running.
    pub fn init(&self) -> Option<Cmd> {
        if self.running {
            Some(self.tick())
        } else {
            None
        }
    }

    /// Applies start/stop, reset and tick messages addressed to this
    /// stopwatch. Returns the next tick while the chain continues.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(start_stop) = msg.downcast_ref::<StartStopMsg>() {
            if start_stop.id != 0 && start_stop.id != self.id {
                return None;
            }
            return self.set_running(start_stop.running);
        }

        if let Some(reset) = msg.downcast_ref::<ResetMsg>() {
            if reset.id != 0 && reset.id != self.id {
                return None;
            }
            self.clear();
            return None;
        }

        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            if !self.running || tick.id != self.id {
                return None;
            }

            // A tick from an earlier chain; the current chain has its own.
            if tick.tag != self.tag {
                trace!(
                    "stopwatch {}: dropping stale tick (tag {} != {})",
                    self.id,
                    tick.tag,
                    self.tag
                );
                return None;
            }

            self.advance();
            self.tag += 1;
            return Some(self.tick());
        }

        None
    }

    /// Plain text of the visible digit groups, `mm:ss:cc` or `hh:mm:ss:cc`.
    pub fn view(&self) -> String {
        self.reading().format(self.show_hours)
    }

    fn set_running(&mut self, running: bool) -> Option<Cmd> {
        if running == self.running {
            return None;
        }

        self.running = running;
        self.tag += 1;

        if running {
            debug!("stopwatch {}: started at {}ms", self.id, self.elapsed_ms);
            Some(self.tick())
        } else {
            debug!("stopwatch {}: paused at {}ms", self.id, self.elapsed_ms);
            None
        }
    }

    fn clear(&mut self) {
        debug!("stopwatch {}: reset from {}ms", self.id, self.elapsed_ms);
        self.elapsed_ms = 0;
        self.running = false;
        self.show_hours = false;
        self.tag += 1;
    }

    fn advance(&mut self) {
        let step = u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX);
        self.elapsed_ms = self.elapsed_ms.saturating_add(step);

        if !self.show_hours && self.elapsed_ms >= clock::MS_PER_HOUR {
            debug!("stopwatch {}: passed one hour, showing hours", self.id);
            self.show_hours = true;
        }
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.interval, move |_| {
            Box::new(TickMsg { id, tag }) as Msg
        })
    }

    fn start_stop(&self, running: bool) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(StartStopMsg { id, running }) as Msg
        })
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = new();
        let cmd = model.set_running(true);
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn start_msg(model: &Model) -> Msg {
        Box::new(StartStopMsg {
            id: model.id(),
            running: true,
        })
    }

    pub(crate) fn stop_msg(model: &Model) -> Msg {
        Box::new(StartStopMsg {
            id: model.id(),
            running: false,
        })
    }

    pub(crate) fn reset_msg(model: &Model) -> Msg {
        Box::new(ResetMsg { id: model.id() })
    }

    pub(crate) fn current_tick(model: &Model) -> Msg {
        Box::new(TickMsg {
            id: model.id(),
            tag: model.tag,
        })
    }

    pub(crate) fn set_elapsed(model: &mut Model, elapsed_ms: u64) {
        model.elapsed_ms = elapsed_ms;
    }

    pub(crate) fn run_ticks(model: &mut Model, count: usize) {
        for _ in 0..count {
            let msg = current_tick(model);
            model.update(msg);
        }
    }

    #[test]
    fn test_new_is_stopped_at_zero() {
        let stopwatch = new();
        assert_eq!(stopwatch.elapsed_ms(), 0);
        assert_eq!(stopwatch.elapsed(), Duration::ZERO);
        assert!(!stopwatch.running());
        assert!(!stopwatch.show_hours());
        assert_eq!(stopwatch.interval(), Duration::from_millis(10));
        assert!(stopwatch.init().is_none());
    }

    #[test]
    fn test_unique_ids() {
        let a = new();
        let b = new();
        assert!(a.id() > 0);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_from_options_running() {
        let options = Options::default()
            .with_interval(Duration::from_millis(25))
            .with_start_running(true);
        let mut stopwatch = Model::from_options(&options);
        assert!(stopwatch.running());
        assert!(stopwatch.init().is_some());

        run_ticks(&mut stopwatch, 4);
        assert_eq!(stopwatch.elapsed_ms(), 100);
    }

    #[test]
    fn test_start_schedules_tick() {
        let mut stopwatch = new();
        let msg = start_msg(&stopwatch);
        let cmd = stopwatch.update(msg);
        assert!(cmd.is_some());
        assert!(stopwatch.running());
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut stopwatch = new();
        let msg = start_msg(&stopwatch);
        stopwatch.update(msg);
        let tag = stopwatch.tag;

        let msg = start_msg(&stopwatch);
        assert!(stopwatch.update(msg).is_none());
        assert_eq!(stopwatch.tag, tag);
    }

    #[test]
    fn test_start_then_pause_keeps_elapsed() {
        let mut stopwatch = new();
        stopwatch.elapsed_ms = 4_200;

        let msg = start_msg(&stopwatch);
        stopwatch.update(msg);
        let msg = stop_msg(&stopwatch);
        assert!(stopwatch.update(msg).is_none());

        assert!(!stopwatch.running());
        assert_eq!(stopwatch.elapsed_ms(), 4_200);
    }

    #[test]
    fn test_hundred_ticks_is_one_second() {
        let mut stopwatch = new();
        let msg = start_msg(&stopwatch);
        stopwatch.update(msg);

        run_ticks(&mut stopwatch, 100);

        assert_eq!(stopwatch.elapsed_ms(), 1_000);
        assert_eq!(stopwatch.reading().to_string(), "00:00:01:00");
        assert_eq!(stopwatch.view(), "00:01:00");
        assert!(!stopwatch.show_hours());
    }

    #[test]
    fn test_tick_returns_next_tick() {
        let mut stopwatch = new();
        let msg = start_msg(&stopwatch);
        stopwatch.update(msg);

        let msg = current_tick(&stopwatch);
        assert!(stopwatch.update(msg).is_some());
        assert_eq!(stopwatch.elapsed_ms(), 10);
    }

    #[test]
    fn test_paused_ignores_ticks() {
        let mut stopwatch = new();
        let msg = start_msg(&stopwatch);
        stopwatch.update(msg);
        run_ticks(&mut stopwatch, 3);

        let pending = current_tick(&stopwatch);
        let msg = stop_msg(&stopwatch);
        stopwatch.update(msg);

        assert!(stopwatch.update(pending).is_none());
        assert_eq!(stopwatch.elapsed_ms(), 30);
    }

    #[test]
    fn test_stale_tick_after_restart_dropped() {
        let mut stopwatch = new();
        let msg = start_msg(&stopwatch);
        stopwatch.update(msg);
        let stale = current_tick(&stopwatch);

        let msg = stop_msg(&stopwatch);
        stopwatch.update(msg);
        let msg = start_msg(&stopwatch);
        stopwatch.update(msg);

        // Only the tick from the new chain counts.
        assert!(stopwatch.update(stale).is_none());
        assert_eq!(stopwatch.elapsed_ms(), 0);

        run_ticks(&mut stopwatch, 1);
        assert_eq!(stopwatch.elapsed_ms(), 10);
    }

    #[test]
    fn test_foreign_messages_ignored() {
        let mut stopwatch = new();
        let other = new();

        let msg = start_msg(&other);
        assert!(stopwatch.update(msg).is_none());
        assert!(!stopwatch.running());

        let msg = start_msg(&stopwatch);
        stopwatch.update(msg);

        let foreign_tick: Msg = Box::new(TickMsg {
            id: other.id(),
            tag: stopwatch.tag,
        });
        assert!(stopwatch.update(foreign_tick).is_none());
        assert_eq!(stopwatch.elapsed_ms(), 0);

        let msg = reset_msg(&other);
        stopwatch.elapsed_ms = 500;
        stopwatch.update(msg);
        assert_eq!(stopwatch.elapsed_ms(), 500);
    }

    #[test]
    fn test_broadcast_start_stop() {
        let mut stopwatch = new();
        let msg: Msg = Box::new(StartStopMsg {
            id: 0,
            running: true,
        });
        assert!(stopwatch.update(msg).is_some());
        assert!(stopwatch.running());
    }

    #[test]
    fn test_reset_from_running() {
        let mut stopwatch = new();
        let msg = start_msg(&stopwatch);
        stopwatch.update(msg);
        run_ticks(&mut stopwatch, 42);
        let pending = current_tick(&stopwatch);

        let msg = reset_msg(&stopwatch);
        assert!(stopwatch.update(msg).is_none());

        assert_eq!(stopwatch.elapsed_ms(), 0);
        assert!(!stopwatch.running());
        assert!(stopwatch.update(pending).is_none());
        assert_eq!(stopwatch.elapsed_ms(), 0);
    }

    #[test]
    fn test_reset_from_stopped() {
        let mut stopwatch = new();
        stopwatch.elapsed_ms = 12_345;
        let msg = reset_msg(&stopwatch);
        stopwatch.update(msg);
        assert_eq!(stopwatch.elapsed_ms(), 0);
        assert!(!stopwatch.running());
    }

    #[test]
    fn test_show_hours_latches_at_one_hour() {
        let mut stopwatch = new();
        stopwatch.elapsed_ms = clock::MS_PER_HOUR - 20;
        let msg = start_msg(&stopwatch);
        stopwatch.update(msg);

        run_ticks(&mut stopwatch, 1);
        assert!(!stopwatch.show_hours());
        assert_eq!(stopwatch.view(), "59:59:99");

        run_ticks(&mut stopwatch, 1);
        assert!(stopwatch.show_hours());
        assert_eq!(stopwatch.view(), "01:00:00:00");

        let msg = stop_msg(&stopwatch);
        stopwatch.update(msg);
        assert!(stopwatch.show_hours());
    }

    #[test]
    fn test_reset_clears_show_hours() {
        let mut stopwatch = new();
        stopwatch.elapsed_ms = clock::MS_PER_HOUR;
        let msg = start_msg(&stopwatch);
        stopwatch.update(msg);
        run_ticks(&mut stopwatch, 1);
        assert!(stopwatch.show_hours());

        let msg = reset_msg(&stopwatch);
        stopwatch.update(msg);
        assert!(!stopwatch.show_hours());
        assert_eq!(stopwatch.view(), "00:00:00");
    }

    #[test]
    fn test_custom_interval_step() {
        let mut stopwatch = new_with_interval(Duration::from_millis(250));
        let msg = start_msg(&stopwatch);
        stopwatch.update(msg);
        run_ticks(&mut stopwatch, 4);
        assert_eq!(stopwatch.elapsed_ms(), 1_000);
    }

    #[test]
    fn test_sub_millisecond_interval_raised() {
        let stopwatch = new_with_interval(Duration::ZERO);
        assert_eq!(stopwatch.interval(), Duration::from_millis(1));

        let options = Options::default()
            .with_interval(Duration::from_micros(500))
            .with_start_running(true);
        let mut stopwatch = Model::from_options(&options);
        assert_eq!(stopwatch.interval(), Duration::from_millis(1));

        run_ticks(&mut stopwatch, 1_000);
        assert!(stopwatch.running());
        assert_eq!(stopwatch.elapsed_ms(), 1_000);
    }

    #[test]
    fn test_command_constructors() {
        let stopwatch = new();
        let _start = stopwatch.start();
        let _stop = stopwatch.stop();
        let _toggle = stopwatch.toggle();
        let _reset = stopwatch.reset();
    }

    #[test]
    fn test_bubbletea_init_runs() {
        let (model, cmd) = <Model as BubbleTeaModel>::init();
        assert!(model.running());
        assert!(cmd.is_some());
    }
}
