//! The alarm clock core: one context, one update per loop iteration.
//!
//! [`AlarmClock::step`] runs the stages in a fixed order, all with the same
//! timestamp:
//!
//! 1. debounce the raw samples
//! 2. evaluate the hold trackers
//! 3. evaluate the UI state machine
//! 4. advance the wall clock
//! 5. advance the blink and scan timers
//!
//! Later stages read flags written by earlier ones in the same iteration
//! (`processed`, fired holds), so the order must not change.
//!
//! The core does no I/O. The caller feeds in analog samples, gets back a
//! [`Tick`] describing what happened, and hands it to [`AlarmClock::drive`]
//! to update the outputs.

use heapless::Vec;

use crate::board::OutputBank;
use crate::clock::{Clock, ClockTime};
use crate::config::{BUTTON_COUNT, INITIAL_ALARM, INITIAL_TIME};
use crate::display::{DisplayScan, Frame, ScanPosition};
use crate::input::{Button, Debouncer, Gesture, HoldDetector, Level};
use crate::lights::LightLevels;
use crate::ui::{Transition, UiMachine, UiState};
use crate::Millis;

/// Upper bound on events per iteration: a press or release per button,
/// three holds, one transition and one alarm edit.
pub const MAX_EVENTS: usize = BUTTON_COUNT + 3 + 2;

/// Something observable that happened during one iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Debounced press.
    Pressed(Button),
    /// Debounced release.
    Released(Button),
    /// A long-press gesture fired.
    Held(Gesture),
    /// The UI changed state.
    StateChanged(Transition),
    /// The alarm value was edited.
    AlarmSet(ClockTime),
}

/// Outcome of one [`AlarmClock::step`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tick {
    /// Events in the order they occurred.
    pub events: Vec<Event, MAX_EVENTS>,
    /// Display position to show for the next scan interval, if the scan
    /// advanced this iteration.
    pub scan: Option<ScanPosition>,
}

/// Read-only view consumed by rendering and the light policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub state: UiState,
    pub time: ClockTime,
    pub alarm: ClockTime,
    pub blink_on: bool,
}

impl Snapshot {
    /// The clock minutes equal the alarm minutes.
    pub fn alarm_minute_reached(&self) -> bool {
        self.time.same_minute(&self.alarm)
    }

    /// Value shown on the digits: the alarm while editing it, the clock
    /// otherwise.
    pub fn shown_time(&self) -> ClockTime {
        if self.state.is_setting() {
            self.alarm
        } else {
            self.time
        }
    }
}

/// All state of the alarm clock.
#[derive(Clone, Debug)]
pub struct AlarmClock {
    buttons: Debouncer,
    holds: HoldDetector,
    ui: UiMachine,
    clock: Clock,
    alarm: ClockTime,
    scan: DisplayScan,
}

impl AlarmClock {
    /// Start at `time` with the alarm at `alarm`, showing time.
    pub const fn new(time: ClockTime, alarm: ClockTime) -> Self {
        Self {
            buttons: Debouncer::new(),
            holds: HoldDetector::new(),
            ui: UiMachine::new(),
            clock: Clock::new(time),
            alarm,
            scan: DisplayScan::new(),
        }
    }

    /// Run one iteration with raw analog button samples taken at `now`.
    ///
    /// Samples are in [`Button::ALL`] order.
    pub fn step(&mut self, now: Millis, intensities: [u16; BUTTON_COUNT]) -> Tick {
        self.step_levels(now, intensities.map(Level::from_intensity))
    }

    /// Same as [`step`](Self::step) with already thresholded samples.
    pub fn step_levels(&mut self, now: Millis, readings: [Level; BUTTON_COUNT]) -> Tick {
        let mut tick = Tick::default();

        // 1. Debounce
        let changes = self.buttons.update(readings, now);
        for (button, change) in Button::ALL.into_iter().zip(changes) {
            match change {
                Some(Level::Pressed) => push(&mut tick, Event::Pressed(button)),
                Some(Level::Released) => push(&mut tick, Event::Released(button)),
                None => {}
            }
        }

        // 2. Holds
        let holds = self.holds.update(&self.buttons, now);
        if holds.a {
            self.buttons.mark_processed(Button::A);
        }
        for gesture in [Gesture::HoldA, Gesture::HoldBC, Gesture::HoldABC] {
            if holds.fired(gesture) {
                push(&mut tick, Event::Held(gesture));
            }
        }

        // 3. UI
        let alarm_before = self.alarm;
        let transition = self.ui.step(
            &mut self.buttons,
            &holds,
            self.clock.time(),
            &mut self.alarm,
        );
        if self.alarm != alarm_before {
            push(&mut tick, Event::AlarmSet(self.alarm));
        }
        if let Some(transition) = transition {
            push(&mut tick, Event::StateChanged(transition));
        }

        // 4. Clock
        self.clock.poll(now);

        // 5. Blink and scan
        self.scan.poll_blink(now);
        tick.scan = self.scan.poll_scan(now);

        tick
    }

    /// Update the outputs after a step.
    ///
    /// Lights are refreshed every iteration; the display only changes when
    /// the scan advanced.
    pub fn drive<B: OutputBank>(&self, tick: &Tick, bank: &mut B) {
        let snapshot = self.snapshot();
        if let Some(position) = tick.scan {
            Frame::render(&snapshot, position).apply(bank);
        }
        LightLevels::for_snapshot(&snapshot).apply(bank);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.ui.state(),
            time: self.clock.time(),
            alarm: self.alarm,
            blink_on: self.scan.blink_on(),
        }
    }

    pub fn state(&self) -> UiState {
        self.ui.state()
    }

    pub fn time(&self) -> ClockTime {
        self.clock.time()
    }

    pub fn alarm(&self) -> ClockTime {
        self.alarm
    }

    pub fn buttons(&self) -> &Debouncer {
        &self.buttons
    }

    pub fn holds(&self) -> &HoldDetector {
        &self.holds
    }
}

impl Default for AlarmClock {
    /// Power-on state from [`crate::config`].
    fn default() -> Self {
        Self::new(INITIAL_TIME, INITIAL_ALARM)
    }
}

fn push(tick: &mut Tick, event: Event) {
    let pushed = tick.events.push(event);
    debug_assert!(pushed.is_ok(), "MAX_EVENTS too small for one iteration");
}
