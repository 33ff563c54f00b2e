//! Animated value model: the filters that move needles and the gear dot.
//!
//! Everything here advances exactly once per tick and is pure arithmetic,
//! so it all runs against the host test harness. The rates below are in
//! dial units per tick at the fixed 20 ms cadence.
//!
//! - Speed and the local RPM fallback are bounded ramps gated by the
//!   throttle/brake levels and the selected gear.
//! - The remote RPM path is a first-order approach filter toward the last
//!   received sample (time constant about four ticks).
//! - The gear dot is a damped spring: stable, converges, never snaps.
//! - Demo mode injects small bounded perturbations at a throttled rate.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

// =============================================================================
// Filter Constants
// =============================================================================

/// Fraction of the remaining distance the RPM needle covers per tick
/// while following the remote feed.
const RPM_FILTER_ALPHA: f32 = 0.25;

/// Local-simulation rev rate at gear ordinal 0, dial units per tick.
/// Each higher ordinal revs slower by [`REV_RATE_PER_GEAR`].
const REV_RATE_BASE: f32 = 1.0;
const REV_RATE_PER_GEAR: f32 = 0.1;

/// Local-simulation rev decay while the throttle is released.
const REV_FALL_RATE: f32 = 3.0;

/// Throttle acceleration at gear ordinal 0, km/h per tick, reduced per
/// ordinal by [`ACCEL_PER_GEAR`].
const ACCEL_BASE: f32 = 2.0;
const ACCEL_PER_GEAR: f32 = 0.24;

/// Coasting decay with no pedal input.
const COAST_DECAY: f32 = 1.0;

/// Braking decay, and the speed floor below which braking stops acting.
const BRAKE_DECAY: f32 = 4.0;
const BRAKE_MIN_SPEED: f32 = 4.0;

/// Spring and damping factors of the gear dot filter.
const DOT_SPRING: f32 = 0.25;
const DOT_DAMPING: f32 = 0.30;

/// Largest single perturbation demo mode applies, per axis.
const SPEED_JITTER_SPAN: f32 = 2.0;
const RPM_JITTER_SPAN: f32 = 1.0;

// =============================================================================
// Dial Value
// =============================================================================

/// A bounded continuous dial value. Every mutation path clamps, so the
/// stored value can never leave `0.0..=max` no matter which filter or
/// perturbation touched it.
pub struct DialValue {
    value: f32,
    max: f32,
}

impl DialValue {
    pub const fn new(max: f32) -> Self { Self { value: 0.0, max } }

    #[inline]
    pub const fn get(&self) -> f32 { self.value }

    #[inline]
    pub const fn max(&self) -> f32 { self.max }

    /// Add `delta` (may be negative), clamped to the declared range.
    pub fn nudge(
        &mut self,
        delta: f32,
    ) {
        self.value = (self.value + delta).clamp(0.0, self.max);
    }

    /// Add `delta`, clamped to `0.0..=cap.min(max)`. Used for per-gear
    /// speed ceilings below full scale.
    pub fn nudge_capped(
        &mut self,
        delta: f32,
        cap: f32,
    ) {
        self.value = (self.value + delta).clamp(0.0, cap.min(self.max));
    }

    /// First-order approach: cover `alpha` of the distance toward
    /// `target` (itself clamped to the dial range).
    pub fn approach(
        &mut self,
        target: f32,
        alpha: f32,
    ) {
        let target = target.clamp(0.0, self.max);
        self.value += (target - self.value) * alpha;
    }
}

// =============================================================================
// Per-Tick Steps
// =============================================================================

/// Advance the RPM needle toward the latest remote sample. `raw_rpm` is
/// the wire value in rpm; the dial runs in units of 100 rpm.
pub fn remote_rpm_step(
    rpm: &mut DialValue,
    raw_rpm: u16,
) {
    rpm.approach(f32::from(raw_rpm) / 100.0, RPM_FILTER_ALPHA);
}

/// Advance the RPM needle from pedal input alone. Active only until the
/// first remote sample ever arrives.
pub fn local_rpm_step(
    rpm: &mut DialValue,
    throttle: bool,
    gear_ordinal: usize,
) {
    if throttle {
        rpm.nudge(REV_RATE_BASE - REV_RATE_PER_GEAR * gear_ordinal as f32);
    } else {
        rpm.nudge(-REV_FALL_RATE);
    }
}

/// Advance the speed value. Braking wins over everything while the speed
/// is above its floor; throttle accelerates toward the per-gear cap;
/// otherwise the vehicle coasts down to zero.
pub fn speed_step(
    speed: &mut DialValue,
    throttle: bool,
    brake: bool,
    gear_ordinal: usize,
    gear_cap: f32,
) {
    if brake && speed.get() > BRAKE_MIN_SPEED {
        speed.nudge(-BRAKE_DECAY);
    } else if throttle {
        if speed.get() < gear_cap.min(speed.max()) {
            speed.nudge_capped(ACCEL_BASE - ACCEL_PER_GEAR * gear_ordinal as f32, gear_cap);
        }
    } else {
        speed.nudge(-COAST_DECAY);
    }
}

// =============================================================================
// Gear Dot
// =============================================================================

/// Second-order filter driving the gear-indicator dot. Position and
/// velocity persist for the process lifetime; only the target moves.
pub struct AnimatedDot2d {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
}

impl AnimatedDot2d {
    pub const fn new(
        x: f32,
        y: f32,
    ) -> Self {
        Self { x, y, vx: 0.0, vy: 0.0 }
    }

    /// One integration step toward `(tx, ty)`.
    pub fn update(
        &mut self,
        tx: f32,
        ty: f32,
    ) {
        let ax = (tx - self.x) * DOT_SPRING - self.vx * DOT_DAMPING;
        let ay = (ty - self.y) * DOT_SPRING - self.vy * DOT_DAMPING;
        self.vx += ax;
        self.vy += ay;
        self.x += self.vx;
        self.y += self.vy;
    }

    #[inline]
    pub const fn position(&self) -> (f32, f32) { (self.x, self.y) }
}

// =============================================================================
// Demo Jitter
// =============================================================================

/// Bounded random perturbations for demo mode, throttled to the
/// configured period. Seeded once so replays are deterministic.
pub struct Jitter {
    rng: SmallRng,
    last_ms: u64,
    period_ms: u64,
}

impl Jitter {
    pub fn new(
        seed: u64,
        period_ms: u64,
    ) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            last_ms: 0,
            period_ms,
        }
    }

    /// Returns `(speed delta, rpm delta)` when the period has elapsed,
    /// `None` otherwise. The caller applies the deltas through the
    /// clamping mutators.
    pub fn try_perturb(
        &mut self,
        now_ms: u64,
    ) -> Option<(f32, f32)> {
        if now_ms.saturating_sub(self.last_ms) < self.period_ms {
            return None;
        }
        self.last_ms = now_ms;

        Some((
            self.rng.random_range(-SPEED_JITTER_SPAN..=SPEED_JITTER_SPAN),
            self.rng.random_range(-RPM_JITTER_SPAN..=RPM_JITTER_SPAN),
        ))
    }
}

// =============================================================================
// Tests
// =============================================================================
