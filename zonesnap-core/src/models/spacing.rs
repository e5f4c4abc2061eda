//! Gap/spacing correction applied when mapping percentage zones to pixels.
use super::{Rect, Zone};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Tolerance when comparing percentage edges against each other or against
/// the monitor's 0% / 100% boundary.
pub(crate) const EDGE_EPSILON: f64 = 0.001;

/// How gaps between zones are carved out of the monitor rectangle.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpacingPolicy {
    /// One gap of this many pixels at every zone edge, internal and
    /// external alike. Zones shrink so that zones plus gaps exactly fill
    /// the monitor.
    Uniform(i32),
    /// Half-gap insets on internal edges only, no inset at the monitor
    /// border. The first value is the gap between vertically adjacent
    /// zones, the second the gap between side-by-side zones.
    HalfGap(i32, i32),
}

impl Default for SpacingPolicy {
    fn default() -> Self {
        Self::HalfGap(0, 0)
    }
}

/// Every zone is inset by `gap` on all four sides and the whole grid is
/// rescaled so the union of zones and gaps covers the monitor exactly. The
/// distinct percentage edges on each axis form the grid lines; each line
/// owns one gap of the monitor dimension.
pub(crate) fn apply_uniform(zones: &mut [Zone], monitor: Rect, gap: i32) {
    let gap = f64::from(gap);
    let v_lines = grid_lines(zones.iter().flat_map(|z| [z.x, z.x + z.width]));
    let h_lines = grid_lines(zones.iter().flat_map(|z| [z.y, z.y + z.height]));
    let usable_w = monitor.w - gap * v_lines.len() as f64;
    let usable_h = monitor.h - gap * h_lines.len() as f64;

    let map_x =
        |edge: f64| monitor.x + edge * usable_w + gap * (1 + lines_before(&v_lines, edge)) as f64;
    let map_y =
        |edge: f64| monitor.y + edge * usable_h + gap * (1 + lines_before(&h_lines, edge)) as f64;

    for zone in zones {
        let left = map_x(zone.x);
        let top = map_y(zone.y);
        let right = map_x(zone.x + zone.width) - gap;
        let bottom = map_y(zone.y + zone.height) - gap;
        zone.pixel = Rect::new(left, top, right - left, bottom - top);
    }
}

/// Each internal side is inset by half the configured spacing so adjacent
/// zones end up exactly one spacing apart; sides on the monitor border keep
/// zero inset.
pub(crate) fn apply_half_gap(zones: &mut [Zone], monitor: Rect, spacing_h: i32, spacing_v: i32) {
    let half_x = f64::from(spacing_v) / 2.0;
    let half_y = f64::from(spacing_h) / 2.0;

    for zone in zones {
        let left = if zone.x > EDGE_EPSILON { half_x } else { 0.0 };
        let right = if zone.x + zone.width < 1.0 - EDGE_EPSILON {
            half_x
        } else {
            0.0
        };
        let top = if zone.y > EDGE_EPSILON { half_y } else { 0.0 };
        let bottom = if zone.y + zone.height < 1.0 - EDGE_EPSILON {
            half_y
        } else {
            0.0
        };

        zone.pixel = Rect::new(
            monitor.x + zone.x * monitor.w + left,
            monitor.y + zone.y * monitor.h + top,
            zone.width * monitor.w - left - right,
            zone.height * monitor.h - top - bottom,
        );
    }
}

/// Distinct percentage edges on one axis, in ascending order.
fn grid_lines(edges: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut lines: Vec<f64> = edges.collect();
    lines.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    lines.dedup_by(|a, b| (*a - *b).abs() < EDGE_EPSILON);
    lines
}

fn lines_before(lines: &[f64], edge: f64) -> usize {
    lines.iter().filter(|line| **line < edge - EDGE_EPSILON).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(n: usize) -> Vec<Zone> {
        let width = 1.0 / n as f64;
        (0..n)
            .map(|c| Zone::new(&format!("Column {}", c + 1), c, c as f64 * width, 0.0, width, 1.0))
            .collect()
    }

    #[test]
    fn uniform_single_zone_gets_gap_on_all_sides() {
        let mut zones = vec![Zone::new("Full", 0, 0.0, 0.0, 1.0, 1.0)];
        apply_uniform(&mut zones, Rect::new(0.0, 0.0, 1920.0, 1080.0), 10);
        assert_eq!(zones[0].pixel, Rect::new(10.0, 10.0, 1900.0, 1060.0));
    }

    #[test]
    fn uniform_columns_fill_monitor_exactly() {
        let mut zones = columns(2);
        apply_uniform(&mut zones, Rect::new(100.0, 50.0, 1000.0, 500.0), 10);

        // Three vertical grid lines own one 10px gap each.
        assert!((zones[0].pixel.w - 485.0).abs() < 1e-9);
        assert!((zones[1].pixel.w - 485.0).abs() < 1e-9);
        assert!((zones[0].pixel.x - 110.0).abs() < 1e-9);
        // Gap between the two columns is exactly one gap wide.
        let inner = zones[1].pixel.x - (zones[0].pixel.x + zones[0].pixel.w);
        assert!((inner - 10.0).abs() < 1e-9);
        // Flush against the right edge minus the outer gap.
        assert!((zones[1].pixel.x + zones[1].pixel.w - 1090.0).abs() < 1e-9);
    }

    #[test]
    fn uniform_zero_gap_is_exact_scaling() {
        let mut zones = columns(4);
        apply_uniform(&mut zones, Rect::new(0.0, 0.0, 1600.0, 900.0), 0);
        for (i, zone) in zones.iter().enumerate() {
            assert!((zone.pixel.x - 400.0 * i as f64).abs() < 1e-9);
            assert!((zone.pixel.w - 400.0).abs() < 1e-9);
            assert!((zone.pixel.h - 900.0).abs() < 1e-9);
        }
    }

    #[test]
    fn half_gap_columns_keep_outer_edges_flush() {
        let mut zones = columns(2);
        apply_half_gap(&mut zones, Rect::new(0.0, 0.0, 1000.0, 500.0), 0, 8);

        assert_eq!(zones[0].pixel, Rect::new(0.0, 0.0, 496.0, 500.0));
        assert_eq!(zones[1].pixel, Rect::new(504.0, 0.0, 496.0, 500.0));
        // Exactly one full gap between them.
        assert!((zones[1].pixel.x - (zones[0].pixel.x + zones[0].pixel.w) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn half_gap_insets_internal_sides_only() {
        // 2x2 grid: each cell has exactly two internal sides.
        let mut zones = vec![
            Zone::new("a", 0, 0.0, 0.0, 0.5, 0.5),
            Zone::new("b", 1, 0.5, 0.0, 0.5, 0.5),
            Zone::new("c", 2, 0.0, 0.5, 0.5, 0.5),
            Zone::new("d", 3, 0.5, 0.5, 0.5, 0.5),
        ];
        apply_half_gap(&mut zones, Rect::new(0.0, 0.0, 800.0, 600.0), 6, 10);

        assert_eq!(zones[0].pixel, Rect::new(0.0, 0.0, 395.0, 297.0));
        assert_eq!(zones[3].pixel, Rect::new(405.0, 303.0, 395.0, 297.0));
    }
}
