//! alarmclock - three-button alarm clock firmware for the nRF52840.
//!
//! A single polling loop samples the three buttons through the SAADC,
//! feeds the samples to the core [`AlarmClock`] and drives the multiplexed
//! 7-segment display and the indicator lights from the result.
//!
//! ## Architecture
//!
//! ```text
//!  SAADC (AIN0..2) ──► AlarmClock::step ──► Tick ──► defmt log
//!                                   │
//!                                   └──► AlarmClock::drive ──► GPIO
//! ```
//!
//! The loop never blocks on anything but the ADC conversion, which keeps
//! each display position lit for close to the 3 ms scan interval.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Level, Output, OutputDrive, Pin};
use embassy_nrf::saadc::{self, ChannelConfig, Saadc};
use embassy_nrf::{bind_interrupts, Peripheral};
use embassy_time::{Instant, Timer};
use embedded_hal::digital::{OutputPin, PinState};
use {defmt_rtt as _, panic_probe as _};

use alarmclock::board::{OutputBank, OutputLine};
use alarmclock::config::BUTTON_COUNT;
use alarmclock::{AlarmClock, Event};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
});

/// Every GPIO output of the board, indexed by [`OutputLine`].
struct Pins<'d> {
    segments: [Output<'d>; 7],
    digits: [Output<'d>; 4],
    decimal_point: Output<'d>,
    lights: [Output<'d>; 3],
}

impl OutputBank for Pins<'_> {
    fn set(&mut self, line: OutputLine, high: bool) {
        let pin = match line {
            OutputLine::Segment(s) => &mut self.segments[s.index()],
            OutputLine::Digit(d) => &mut self.digits[d.index()],
            OutputLine::DecimalPoint => &mut self.decimal_point,
            OutputLine::Light(l) => &mut self.lights[l.index()],
        };
        // GPIO writes on the nRF are infallible.
        let _ = pin.set_state(PinState::from(high));
    }
}

/// Push-pull output starting low.
fn output<'d>(pin: impl Peripheral<P = impl Pin> + 'd) -> Output<'d> {
    Output::new(pin, Level::Low, OutputDrive::Standard)
}

/// Digit select, starting released (high).
fn digit_select<'d>(pin: impl Peripheral<P = impl Pin> + 'd) -> Output<'d> {
    Output::new(pin, Level::High, OutputDrive::Standard)
}

/// Main application entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("alarmclock starting...");

    let p = embassy_nrf::init(Default::default());

    let mut pins = Pins {
        segments: [
            output(p.P0_11),
            output(p.P0_12),
            output(p.P0_13),
            output(p.P0_14),
            output(p.P0_15),
            output(p.P0_16),
            output(p.P0_17),
        ],
        digits: [
            digit_select(p.P0_19),
            digit_select(p.P0_20),
            digit_select(p.P0_21),
            digit_select(p.P0_22),
        ],
        decimal_point: output(p.P0_23),
        lights: [output(p.P0_24), output(p.P0_25), output(p.P0_26)],
    };
    info!("Display and lights initialised");

    // Buttons A, B, C on AIN0..AIN2, 12-bit single-ended.
    let mut adc_config = saadc::Config::default();
    adc_config.resolution = saadc::Resolution::_12BIT;
    let channels = [
        ChannelConfig::single_ended(p.P0_02),
        ChannelConfig::single_ended(p.P0_03),
        ChannelConfig::single_ended(p.P0_04),
    ];
    let mut adc = Saadc::new(p.SAADC, Irqs, adc_config, channels);
    adc.calibrate().await;
    info!("SAADC calibrated");

    let mut clock = AlarmClock::default();
    let mut samples = [0i16; BUTTON_COUNT];
    info!("Clock {}, alarm {}", clock.time(), clock.alarm());

    loop {
        adc.sample(&mut samples).await;
        let now = Instant::now().as_millis();

        // Single-ended readings can dip slightly below zero near ground.
        let intensities = samples.map(|s| s.max(0) as u16);
        let tick = clock.step(now, intensities);

        for event in &tick.events {
            log_event(event);
        }
        clock.drive(&tick, &mut pins);

        // Let the ADC settle before the next conversion.
        Timer::after_micros(100).await;
    }
}

fn log_event(event: &Event) {
    match event {
        Event::Pressed(button) => info!("Button {} pressed!", button.number()),
        Event::Released(button) => info!("Button {} released!", button.number()),
        Event::Held(gesture) => info!("Hold: {}", gesture),
        Event::StateChanged(t) => info!("UI: {} -> {}", t.from, t.to),
        Event::AlarmSet(alarm) => {
            info!("Alarm set to {=u8}:{=u8}", alarm.minutes(), alarm.seconds())
        }
    }
}
