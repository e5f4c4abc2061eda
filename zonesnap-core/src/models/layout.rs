//! A layout: an ordered set of zones plus metadata, and the queries that
//! turn it into pixel rectangles and back into zone indices.
use super::spacing::{self, SpacingPolicy};
use super::{Rect, Zone};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Layout {
    /// Unique key within the owning layout set.
    pub name: String,
    /// Optional activation hotkey, e.g. `"SUPER+CTRL+1"`. Carried as
    /// metadata only; binding it is the host's concern.
    pub hotkey: Option<String>,
    pub spacing: SpacingPolicy,
    /// Template this layout was generated from, if any.
    pub template: Option<String>,
    pub columns: usize,
    pub rows: usize,
    pub zones: Vec<Zone>,
}

impl Layout {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }

    /// Recompute every zone's pixel rect for the given monitor rectangle,
    /// applying this layout's spacing policy. Must be re-run whenever the
    /// monitor geometry, the spacing or the zone set changes.
    pub fn compute_pixel_rects(&mut self, monitor: Rect) {
        match self.spacing {
            SpacingPolicy::Uniform(gap) => spacing::apply_uniform(&mut self.zones, monitor, gap),
            SpacingPolicy::HalfGap(h, v) => {
                spacing::apply_half_gap(&mut self.zones, monitor, h, v);
            }
        }
    }

    /// Indices of all zones whose pixel rect contains the point, in
    /// declaration order.
    #[must_use]
    pub fn zones_at_point(&self, px: f64, py: f64) -> Vec<usize> {
        self.zones
            .iter()
            .enumerate()
            .filter(|(_, zone)| zone.contains_point(px, py))
            .map(|(i, _)| i)
            .collect()
    }

    /// The zone with the smallest pixel area under the point. Overlapping
    /// zones (a full-bleed "main" under smaller sub-zones) resolve to the
    /// most specific region; ties go to the first in declaration order.
    #[must_use]
    pub fn smallest_zone_at(&self, px: f64, py: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, zone) in self.zones.iter().enumerate() {
            if zone.contains_point(px, py) {
                let area = zone.area();
                if best.map_or(true, |(_, best_area)| area < best_area) {
                    best = Some((i, area));
                }
            }
        }
        best.map(|(i, _)| i)
    }

    /// Every index in `[min(start, end), max(start, end)]` that addresses a
    /// zone. A linear ordinal range, not a spatial one: the indices are
    /// selected regardless of where the zones sit on screen.
    #[must_use]
    pub fn zone_range(&self, start: usize, end: usize) -> Vec<usize> {
        let lo = start.min(end);
        let hi = start.max(end);
        (lo..=hi).filter(|i| *i < self.zones.len()).collect()
    }

    /// Minimal pixel rect covering all the given zones. Out-of-range
    /// indices are skipped; an empty selection yields the zero rect.
    #[must_use]
    pub fn union_box(&self, indices: &[usize]) -> Rect {
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        for zone in indices.iter().filter_map(|i| self.zones.get(*i)) {
            let (min_x, min_y, max_x, max_y) = bounds.unwrap_or((
                f64::INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
            ));
            bounds = Some((
                min_x.min(zone.pixel.x),
                min_y.min(zone.pixel.y),
                max_x.max(zone.pixel.x + zone.pixel.w),
                max_y.max(zone.pixel.y + zone.pixel.h),
            ));
        }
        match bounds {
            Some((min_x, min_y, max_x, max_y)) => {
                Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
            }
            None => Rect::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONITOR: Rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);

    fn overlapping_layout() -> Layout {
        let mut layout = Layout::new("overlap");
        layout.zones = vec![
            Zone::new("Main", 0, 0.0, 0.0, 1.0, 1.0),
            Zone::new("Inner", 1, 0.25, 0.25, 0.5, 0.5),
        ];
        layout.compute_pixel_rects(MONITOR);
        layout
    }

    fn quarters() -> Layout {
        let mut layout = Layout::new("quarters");
        layout.zones = (0..4)
            .map(|i| Zone::new(&format!("q{i}"), i, 0.25 * i as f64, 0.0, 0.25, 1.0))
            .collect();
        layout.compute_pixel_rects(MONITOR);
        layout
    }

    #[test]
    fn zero_spacing_is_exact_percentage_scaling() {
        let mut layout = Layout::new("exact");
        layout.zones = vec![Zone::new("z", 0, 0.2, 0.1, 0.3, 0.4)];
        layout.compute_pixel_rects(Rect::new(50.0, 60.0, 2000.0, 1000.0));

        let pixel = layout.zones[0].pixel;
        assert!((pixel.x - (50.0 + 0.2 * 2000.0)).abs() < f64::EPSILON);
        assert!((pixel.y - (60.0 + 0.1 * 1000.0)).abs() < f64::EPSILON);
        assert!((pixel.w - 0.3 * 2000.0).abs() < f64::EPSILON);
        assert!((pixel.h - 0.4 * 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn smallest_zone_wins_over_full_bleed() {
        let layout = overlapping_layout();
        assert_eq!(layout.zones_at_point(500.0, 500.0), vec![0, 1]);
        assert_eq!(layout.smallest_zone_at(500.0, 500.0), Some(1));
        assert_eq!(layout.smallest_zone_at(100.0, 100.0), Some(0));
        assert_eq!(layout.smallest_zone_at(-5.0, 500.0), None);
    }

    #[test]
    fn zone_range_is_direction_independent() {
        let layout = quarters();
        assert_eq!(layout.zone_range(1, 3), vec![1, 2, 3]);
        assert_eq!(layout.zone_range(3, 1), vec![1, 2, 3]);
        assert_eq!(layout.zone_range(2, 2), vec![2]);
        // Clamped to the zone count.
        assert_eq!(layout.zone_range(2, 9), vec![2, 3]);
    }

    #[test]
    fn union_box_covers_selection_and_skips_bad_indices() {
        let layout = quarters();
        let rect = layout.union_box(&[1, 2, 17]);
        assert_eq!(rect, Rect::new(250.0, 0.0, 500.0, 1000.0));
        assert_eq!(layout.union_box(&[]), Rect::ZERO);
        assert_eq!(layout.union_box(&[42]), Rect::ZERO);
    }
}
