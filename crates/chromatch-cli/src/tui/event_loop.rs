use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

/// Events delivered to the application.
#[derive(Debug)]
pub(super) enum TuiEvent {
    /// Application logic update timing (based on the tick interval).
    Tick,
    /// Screen render timing (after any state change).
    Render,
    /// Terminal events such as key input, mouse, and resize.
    Crossterm(event::Event),
}

/// Tick scheduling and dirty-flag rendering over crossterm event polling.
///
/// Ticks fire at a fixed interval when one is set. A render fires once after
/// every tick or terminal event; idle frames are never redrawn.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    last_tick: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(super) fn new() -> Self {
        Self {
            tick_interval: None,
            last_tick: Instant::now(),
            // Initial render is required on startup
            dirty: true,
        }
    }

    /// Sets the tick interval. Pass `None` to disable tick events.
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
    }

    /// Returns the next event.
    ///
    /// Blocks until the next tick is due, a render is pending, or a terminal
    /// event arrives.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= interval
            {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            // Wait for a terminal event, but no longer than until the next
            // tick is due. Without a tick interval, block indefinitely.
            if let Some(timeout) = self.next_tick_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(TuiEvent::Crossterm(event::read()?));
        }
    }

    fn next_tick_timeout(&self, now: Instant) -> Option<Duration> {
        self.tick_interval
            .map(|interval| (self.last_tick + interval).saturating_duration_since(now))
    }
}
