//! Cluster state and the per-tick update.
//!
//! [`ClusterState`] owns every piece of dashboard state; [`ClusterState::tick`]
//! advances all of it in one fixed order per tick:
//!
//! 1. poll inputs, run gesture detectors, mutate gear and signals
//! 2. read the remote RPM mailbox
//! 3. advance the continuous state (needle filters, gear dot, fuel and
//!    coolant models, banner scroll)
//! 4. recompute the output contract
//!
//! Nothing in here blocks and nothing can fail; all values are clamped on
//! every mutation path. Rendering happens separately, reading this state
//! through the accessors.

use core::fmt::Write;

use embedded_graphics::geometry::Point;
use heapless::String;

use crate::animate::{
    AnimatedDot2d,
    DialValue,
    Jitter,
    local_rpm_step,
    remote_rpm_step,
    speed_step,
};
use crate::banner::BannerState;
use crate::button::{ButtonChannel, Edge};
use crate::config::{
    ClusterConfig,
    GEAR_MAX_SPEED,
    GEAR_NODE_SPACING,
    GEAR_NODE_X0,
    GEAR_ROW_Y,
    RPM_ANGLE_MAX,
    SPEED_MAX,
};
use crate::gear::GearState;
use crate::gesture::{ClickSequenceDetector, DemoMode, LongPressDetector};
use crate::outputs::{OutputState, TurnSignals, blink_phase_on};
use crate::profiling::DebugLog;
use crate::remote::RpmMailbox;

/// Fixed seed for the demo jitter stream; replays are deterministic.
const JITTER_SEED: u64 = 0x00DA_5EED;

// Fuel drains with distance covered, in percent per tick per km/h.
const FUEL_START_PCT: f32 = 100.0;
const FUEL_DRAIN_PER_KMH: f32 = 0.00002;

// Coolant warms first-order toward an rpm-dependent target.
const COOLANT_START_C: f32 = 40.0;
const COOLANT_MIN_C: f32 = 40.0;
const COOLANT_MAX_C: f32 = 130.0;
const COOLANT_IDLE_TARGET_C: f32 = 70.0;
const COOLANT_RPM_GAIN: f32 = 0.5;
const COOLANT_ALPHA: f32 = 0.002;

/// Screen position of a gear ladder node.
pub const fn gear_node_point(ordinal: usize) -> Point {
    Point::new(GEAR_NODE_X0 + GEAR_NODE_SPACING * ordinal as i32, GEAR_ROW_Y)
}

// =============================================================================
// Tick Interface
// =============================================================================

/// Raw input levels for one tick, true = pressed. The platform converts
/// its active-low pin reads before filling this in.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputSnapshot {
    pub throttle: bool,
    pub brake: bool,
    pub gear_up: bool,
    pub gear_down: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub horn: bool,
}

/// Discrete things a tick did, for the platform to mirror (popups,
/// stdout). Continuous state is read through the accessors instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickEvents {
    pub gear_changed: bool,
    pub demo_toggled: Option<bool>,
    pub provisioning_requested: bool,
    pub link_established: bool,
}

struct Buttons {
    throttle: ButtonChannel,
    brake: ButtonChannel,
    gear_up: ButtonChannel,
    gear_down: ButtonChannel,
    turn_left: ButtonChannel,
    turn_right: ButtonChannel,
    horn: ButtonChannel,
}

impl Buttons {
    const fn new(debounce_ms: u64) -> Self {
        Self {
            throttle: ButtonChannel::new(debounce_ms),
            brake: ButtonChannel::new(debounce_ms),
            gear_up: ButtonChannel::new(debounce_ms),
            gear_down: ButtonChannel::new(debounce_ms),
            turn_left: ButtonChannel::new(debounce_ms),
            turn_right: ButtonChannel::new(debounce_ms),
            horn: ButtonChannel::new(debounce_ms),
        }
    }
}

/// Fuel level and coolant temperature behind the mini-gauge needles.
struct AuxGauges {
    fuel_pct: f32,
    coolant_c: f32,
}

impl AuxGauges {
    const fn new() -> Self {
        Self {
            fuel_pct: FUEL_START_PCT,
            coolant_c: COOLANT_START_C,
        }
    }

    fn step(
        &mut self,
        speed: f32,
        rpm_angle: f32,
    ) {
        self.fuel_pct = (self.fuel_pct - speed * FUEL_DRAIN_PER_KMH).max(0.0);

        let target = (COOLANT_IDLE_TARGET_C + rpm_angle * COOLANT_RPM_GAIN).min(COOLANT_MAX_C);
        self.coolant_c += (target - self.coolant_c) * COOLANT_ALPHA;
        self.coolant_c = self.coolant_c.clamp(COOLANT_MIN_C, COOLANT_MAX_C);
    }
}

// =============================================================================
// Cluster State
// =============================================================================

pub struct ClusterState {
    cfg: ClusterConfig,
    buttons: Buttons,
    double_click: ClickSequenceDetector,
    long_press: LongPressDetector,
    demo: DemoMode,
    gear: GearState,
    rpm: DialValue,
    speed: DialValue,
    dot: AnimatedDot2d,
    jitter: Jitter,
    banner: BannerState,
    signals: TurnSignals,
    aux: AuxGauges,
    outputs: OutputState,
    link_up: bool,
    log: DebugLog,
}

impl ClusterState {
    pub fn new(cfg: ClusterConfig) -> Self {
        let start = gear_node_point(GearState::new().ordinal());
        Self {
            buttons: Buttons::new(cfg.debounce_window_ms),
            double_click: ClickSequenceDetector::new(cfg.double_click_max_gap_ms),
            long_press: LongPressDetector::new(cfg.long_press_threshold_ms),
            demo: DemoMode::new(cfg.demo_min_hold_ms),
            gear: GearState::new(),
            rpm: DialValue::new(RPM_ANGLE_MAX),
            speed: DialValue::new(SPEED_MAX),
            dot: AnimatedDot2d::new(start.x as f32, start.y as f32),
            jitter: Jitter::new(JITTER_SEED, cfg.jitter_period_ms),
            banner: BannerState::new(cfg.vehicle_name),
            signals: TurnSignals::new(),
            aux: AuxGauges::new(),
            outputs: OutputState::default(),
            link_up: false,
            log: DebugLog::new(),
            cfg,
        }
    }

    /// Advance everything by one tick.
    pub fn tick(
        &mut self,
        input: &InputSnapshot,
        link: &RpmMailbox,
        now_ms: u64,
    ) -> TickEvents {
        let mut events = TickEvents::default();

        // --- Inputs and gestures ---
        let throttle_edge = self.buttons.throttle.poll(input.throttle, now_ms);
        self.buttons.brake.poll(input.brake, now_ms);
        let gear_up_edge = self.buttons.gear_up.poll(input.gear_up, now_ms);
        let gear_down_edge = self.buttons.gear_down.poll(input.gear_down, now_ms);
        let turn_left_edge = self.buttons.turn_left.poll(input.turn_left, now_ms);
        let turn_right_edge = self.buttons.turn_right.poll(input.turn_right, now_ms);
        self.buttons.horn.poll(input.horn, now_ms);

        if self.double_click.poll(matches!(throttle_edge, Some(Edge::Release)), now_ms)
            && let Some(active) = self.demo.on_double_click(now_ms)
        {
            events.demo_toggled = Some(active);
            self.log.push(if active { "DEMO MODE ON" } else { "DEMO MODE OFF" });
        }

        if self.long_press.poll(
            matches!(gear_down_edge, Some(Edge::Press)),
            self.buttons.gear_down.is_pressed(),
            now_ms,
        ) {
            events.provisioning_requested = true;
            self.log.push("PROVISIONING REQUESTED");
        }

        // --- Gear ---
        let mut gear_changed = false;
        if matches!(gear_up_edge, Some(Edge::Press)) {
            gear_changed |= self.gear.cycle_sequential();
        }
        if matches!(gear_down_edge, Some(Edge::Press)) {
            gear_changed |= self.gear.retreat();
        }
        if gear_changed {
            // Shift lag: one-shot speed drop on every gear change.
            self.speed.nudge(-self.cfg.shift_speed_drop);
            events.gear_changed = true;

            let mut line: String<16> = String::new();
            write!(line, "GEAR {}", self.gear.label()).ok();
            self.log.push(&line);
        }

        if matches!(turn_left_edge, Some(Edge::Press)) {
            let on = self.signals.toggle_left();
            self.log.push(if on { "TURN LEFT ON" } else { "TURN LEFT OFF" });
        }
        if matches!(turn_right_edge, Some(Edge::Press)) {
            let on = self.signals.toggle_right();
            self.log.push(if on { "TURN RIGHT ON" } else { "TURN RIGHT OFF" });
        }

        // --- Remote ingest read ---
        let sample = link.latest();
        if !self.link_up && sample.is_some() {
            self.link_up = true;
            events.link_established = true;
            self.log.push("RPM LINK UP");
        }

        // --- Continuous state ---
        let throttle_held = self.buttons.throttle.is_pressed();
        let brake_held = self.buttons.brake.is_pressed();

        let perturbation = if self.demo.is_active() {
            self.jitter.try_perturb(now_ms)
        } else {
            None
        };

        // The mailbox is sticky: one sample ever moves the needle to the
        // remote path for good. On a jitter tick the jitter is the only
        // RPM mutation.
        match (perturbation, sample) {
            (Some((_, rpm_delta)), _) => self.rpm.nudge(rpm_delta),
            (None, Some(sample)) => remote_rpm_step(&mut self.rpm, sample.rpm),
            (None, None) => local_rpm_step(&mut self.rpm, throttle_held, self.gear.ordinal()),
        }

        speed_step(
            &mut self.speed,
            throttle_held,
            brake_held,
            self.gear.ordinal(),
            GEAR_MAX_SPEED[self.gear.ordinal()],
        );
        if let Some((speed_delta, _)) = perturbation {
            self.speed.nudge(speed_delta);
        }

        let node = gear_node_point(self.gear.ordinal());
        self.dot.update(node.x as f32, node.y as f32);

        self.aux.step(self.speed.get(), self.rpm.get());
        self.banner.advance(self.cfg.banner_scroll_step_px);

        // --- Outputs ---
        let phase = blink_phase_on(now_ms, self.cfg.blinker_period_ms);
        self.outputs = OutputState {
            left_lamp: self.signals.left() && phase,
            right_lamp: self.signals.right() && phase,
            horn: self.buttons.horn.is_pressed(),
            backlight_duty: self.cfg.backlight_duty,
            headlight_duty: self.cfg.headlight_duty,
        };

        events
    }

    /// Feed fresh clock strings into the banner. Call at most once per
    /// second; pass the placeholders if the platform has no time source.
    pub fn set_clock(
        &mut self,
        date: &str,
        time: &str,
    ) {
        self.banner.set_clock(date, time);
    }

    // --- Accessors for the frame composer and the platform ---

    #[inline]
    pub fn rpm(&self) -> f32 { self.rpm.get() }

    #[inline]
    pub fn speed(&self) -> f32 { self.speed.get() }

    #[inline]
    pub const fn gear(&self) -> &GearState { &self.gear }

    #[inline]
    pub const fn dot_position(&self) -> (f32, f32) { self.dot.position() }

    #[inline]
    pub const fn demo_active(&self) -> bool { self.demo.is_active() }

    #[inline]
    pub const fn banner(&self) -> &BannerState { &self.banner }

    #[inline]
    pub const fn outputs(&self) -> OutputState { self.outputs }

    #[inline]
    pub const fn link_up(&self) -> bool { self.link_up }

    #[inline]
    pub const fn log(&self) -> &DebugLog { &self.log }

    /// Fuel level as a fraction of a full tank.
    pub fn fuel_fraction(&self) -> f32 { self.aux.fuel_pct / FUEL_START_PCT }

    /// Coolant temperature as a fraction of the gauge span.
    pub fn coolant_fraction(&self) -> f32 {
        (self.aux.coolant_c - COOLANT_MIN_C) / (COOLANT_MAX_C - COOLANT_MIN_C)
    }
}

// =============================================================================
// Tests
// =============================================================================
