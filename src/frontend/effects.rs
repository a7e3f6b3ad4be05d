//! Geometry for the decorative background effects. Everything here is pure so
//! the shapes can be produced during server rendering as well.

use std::f64::consts::TAU;
use std::fmt::Write as _;

/// Radial gradient centred on the pointer, used by glowing cards and buttons.
pub fn glow_gradient(x: f64, y: f64, radius: f64, rgba: &str) -> String {
    format!("radial-gradient({radius:.0}px circle at {x:.0}px {y:.0}px, {rgba}, transparent 80%)")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    pub width: f64,
    pub height: f64,
    /// Resting height of the wave line, measured from the top.
    pub baseline: f64,
    pub amplitude: f64,
    /// Full periods across the width.
    pub frequency: f64,
    pub phase: f64,
    pub segments: usize,
}

impl Default for Wave {
    fn default() -> Self {
        Self {
            width: 1440.0,
            height: 320.0,
            baseline: 160.0,
            amplitude: 40.0,
            frequency: 1.5,
            phase: 0.0,
            segments: 48,
        }
    }
}

impl Wave {
    pub fn y_at(&self, x: f64) -> f64 {
        let t = if self.width > 0.0 { x / self.width } else { 0.0 };
        self.baseline + self.amplitude * (TAU * self.frequency * t + self.phase).sin()
    }

    /// Closed SVG path: the sine line, then down to the bottom edge and back.
    pub fn path(&self) -> String {
        let segments = self.segments.max(1);
        let step = self.width / segments as f64;
        let mut d = format!("M0,{:.1}", self.y_at(0.0));

        for i in 1..=segments {
            let x = step * i as f64;
            let _ = write!(d, " L{:.1},{:.1}", x, self.y_at(x));
        }

        let _ = write!(d, " L{:.1},{:.1} L0,{:.1} Z", self.width, self.height, self.height);
        d
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position in percent of the container.
    pub left: f64,
    /// Vertical position in percent of the container.
    pub top: f64,
    pub size: f64,
    pub delay: f64,
    pub duration: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; \
             animation-delay: {:.2}s; animation-duration: {:.2}s; opacity: {:.2};",
            self.left, self.top, self.size, self.size, self.delay, self.duration, self.opacity
        )
    }
}

/// Fractional part of `i * φ` offset by `seed`: evenly spread and identical on
/// server and client, so hydration sees the same markup.
fn spread(i: usize, seed: f64) -> f64 {
    const GOLDEN: f64 = 0.618_033_988_749_895;
    (seed + i as f64 * GOLDEN).fract()
}

pub fn particles(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| Particle {
            left: spread(i, 0.13) * 100.0,
            top: spread(i, 0.57) * 100.0,
            size: 2.0 + spread(i, 0.29) * 4.0,
            delay: spread(i, 0.71) * 8.0,
            duration: 10.0 + spread(i, 0.43) * 12.0,
            opacity: 0.2 + spread(i, 0.91) * 0.5,
        })
        .collect()
}

/// Vertical offset for a parallax layer at `depth` (0 = fixed, 1 = scrolls).
pub fn parallax_offset(scroll_y: f64, depth: f64) -> f64 {
    scroll_y * depth.clamp(0.0, 1.0)
}
