//! Instrument cluster simulator for desktop.
//!
//! Runs the cluster core against an SDL window: keyboard keys stand in
//! for the panel buttons, a background thread stands in for the wireless
//! RPM sender, and the wall clock feeds the banner date/time.
//!
//! # Controls
//!
//! | Key | Channel |
//! |-----|---------|
//! | W / Up | throttle (hold; double-tap toggles demo mode) |
//! | S / Down | brake (hold) |
//! | E | gear up |
//! | Q | gear down (hold 2 s to request provisioning) |
//! | A | left turn signal |
//! | D | right turn signal |
//! | H | horn (hold) |
//! | R | start the wireless RPM feed |
//! | V | toggle the event log overlay |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod overlay;
mod popup;
mod timing;

use std::thread;
use std::time::Instant;

use chrono::Local;
use cluster_common::cluster::InputSnapshot;
use cluster_common::colors::BLACK;
use cluster_common::config::{ClusterConfig, SCREEN_HEIGHT, SCREEN_WIDTH};
use cluster_common::geometry::Geometry;
use cluster_common::render::compose_frame;
use cluster_common::{ClusterState, RpmMailbox};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::overlay::draw_log_overlay;
use crate::popup::{Popup, draw_popup};
use crate::timing::{CLOCK_REFRESH, FEED_PERIOD, FRAME_TIME};

/// Mailbox shared with the RPM feed thread. A static keeps the feed
/// thread free of lifetime plumbing; the cluster reads it every tick.
static RPM_LINK: RpmMailbox = RpmMailbox::new();

/// Key levels currently held down. The cluster core debounces and
/// edge-detects these itself, so this only tracks raw levels.
#[derive(Default)]
struct HeldKeys {
    throttle: bool,
    brake: bool,
    gear_up: bool,
    gear_down: bool,
    turn_left: bool,
    turn_right: bool,
    horn: bool,
}

impl HeldKeys {
    fn set(
        &mut self,
        keycode: Keycode,
        pressed: bool,
    ) {
        match keycode {
            Keycode::W | Keycode::Up => self.throttle = pressed,
            Keycode::S | Keycode::Down => self.brake = pressed,
            Keycode::E => self.gear_up = pressed,
            Keycode::Q => self.gear_down = pressed,
            Keycode::A => self.turn_left = pressed,
            Keycode::D => self.turn_right = pressed,
            Keycode::H => self.horn = pressed,
            _ => {}
        }
    }

    const fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            throttle: self.throttle,
            brake: self.brake,
            gear_up: self.gear_up,
            gear_down: self.gear_down,
            turn_left: self.turn_left,
            turn_right: self.turn_right,
            horn: self.horn,
        }
    }
}

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Cupra Cluster Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let geometry = Geometry::new();
    let mut cluster = ClusterState::new(ClusterConfig::new());

    let start = Instant::now();
    let mut held = HeldKeys::default();
    let mut active_popup: Option<Popup> = None;
    let mut show_log = false;
    let mut feed_started = false;
    let mut last_clock: Option<Instant> = None;

    loop {
        let frame_start = Instant::now();
        let now_ms = start.elapsed().as_millis() as u64;

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    held.set(keycode, true);
                    match keycode {
                        Keycode::R if !feed_started => {
                            feed_started = true;
                            spawn_rpm_feed(start);
                            println!("RPM FEED STARTED");
                        }
                        Keycode::V => show_log = !show_log,
                        _ => {}
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => {
                    held.set(keycode, false);
                }
                _ => {}
            }
        }

        // Banner clock strings, at most once per second.
        if last_clock.is_none_or(|at| at.elapsed() >= CLOCK_REFRESH) {
            let now = Local::now();
            let date = now.format("%a %d %b").to_string();
            let time = now.format("%H:%M:%S").to_string();
            cluster.set_clock(&date, &time);
            last_clock = Some(Instant::now());
        }

        let log_before = log_total(&cluster);
        let events = cluster.tick(&held.snapshot(), &RPM_LINK, now_ms);

        // Mirror new log lines to stdout.
        let log = cluster.log();
        let added = log_total(&cluster) - log_before;
        for line in log.iter().skip(log.len().saturating_sub(added)) {
            println!("{line}");
        }

        if events.provisioning_requested {
            active_popup = Some(Popup::Provisioning(Instant::now()));
        } else if events.link_established {
            active_popup = Some(Popup::Link(Instant::now()));
        } else if let Some(on) = events.demo_toggled {
            active_popup = Some(Popup::Demo(Instant::now(), on));
        }

        // Check popup expiration
        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
        }

        compose_frame(&mut display, &cluster, &geometry);
        if let Some(ref popup) = active_popup {
            draw_popup(&mut display, popup);
        }
        if show_log {
            draw_log_overlay(&mut display, cluster.log());
        }

        window.update(&display);

        let pre_sleep = frame_start.elapsed();
        if pre_sleep < FRAME_TIME {
            thread::sleep(FRAME_TIME - pre_sleep);
        }
    }
}

/// Lines ever pushed to the event log, including ones the ring dropped.
fn log_total(cluster: &ClusterState) -> usize {
    cluster.log().dropped() as usize + cluster.log().len()
}

/// Stand-in for the wireless RPM sender: publishes a little-endian
/// two-byte frame through the mailbox at the feed cadence, timestamped
/// with the same clock the main loop ticks on.
fn spawn_rpm_feed(start: Instant) {
    thread::spawn(move || {
        let mut t = 0.0f32;
        loop {
            let rpm = fake_rpm(t);
            let now_ms = start.elapsed().as_millis() as u64;
            RPM_LINK.ingest_frame(&rpm.to_le_bytes(), now_ms);

            t += FEED_PERIOD.as_secs_f32();
            thread::sleep(FEED_PERIOD);
        }
    });
}

/// Synthetic engine sweep between idle and just past the redline.
fn fake_rpm(t: f32) -> u16 {
    let normalized = (t * 0.35).sin().mul_add(0.5, 0.5);
    (900.0 + normalized * 5900.0) as u16
}
