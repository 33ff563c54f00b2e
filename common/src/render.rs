//! Frame composition: the full draw pass for one tick.
//!
//! Later elements paint over earlier ones, so the order below is part of
//! the layout: faces first, then needles over the scales, pivot caps over
//! the needle bases, text layers last. The whole pass runs every tick;
//! values animate continuously, so nothing is worth dirty-tracking.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::cluster::ClusterState;
use crate::colors::{BLACK, GRAY, ORANGE, WHITE};
use crate::config::{RPM_ANGLE_MAX, RPM_REDLINE, SPEED_MAX};
use crate::geometry::Geometry;
use crate::styles::{LABEL_FONT, TINY_FONT};
use crate::widgets::{
    draw_aux_gauge,
    draw_banner,
    draw_dial_face,
    draw_gear_box,
    draw_mode_text,
    draw_needle,
    draw_pivot,
    draw_turn_arrows,
};

/// Draw one complete frame of the cluster.
pub fn compose_frame<D>(
    display: &mut D,
    cluster: &ClusterState,
    geometry: &Geometry,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    draw_dial_face(display, &geometry.tach, RPM_ANGLE_MAX, Some(RPM_REDLINE), LABEL_FONT);
    draw_dial_face(display, &geometry.speed, SPEED_MAX, None, TINY_FONT);
    draw_aux_gauge(
        display,
        &geometry.aux,
        cluster.fuel_fraction(),
        cluster.coolant_fraction(),
    );
    draw_gear_box(display, cluster.gear(), cluster.dot_position());

    draw_needle(display, &geometry.tach, cluster.rpm(), RPM_ANGLE_MAX, ORANGE);
    draw_needle(display, &geometry.speed, cluster.speed(), SPEED_MAX, WHITE);
    draw_pivot(display, &geometry.tach, GRAY);
    draw_pivot(display, &geometry.speed, GRAY);

    draw_banner(display, cluster.banner());
    draw_mode_text(display, cluster.demo_active());

    let outputs = cluster.outputs();
    draw_turn_arrows(display, outputs.left_lamp, outputs.right_lamp);
}

// =============================================================================
// Tests
// =============================================================================
