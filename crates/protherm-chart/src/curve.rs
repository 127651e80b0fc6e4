// File: crates/protherm-chart/src/curve.rs
// Summary: Zero-order-hold polygon for a weekly program, plus the seed point used to fill it.

use crate::program::Program;
use crate::scale::PlotScale;

/// Closed staircase polygon in pixel coordinates.
///
/// The outline starts at the plot's lower-left corner, steps through every set-point
/// (vertical jump at each change, flat hold in between), runs to the right edge at the
/// last value and returns along the baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct StepCurve {
    pub points: Vec<(f32, f32)>,
    /// Pixel strictly inside the area under the curve; `None` when that area is empty.
    pub fill_seed: Option<(f32, f32)>,
    /// Outline of the area connected to `fill_seed`: from the first rise off the baseline
    /// until the curve comes back down to it (or the right edge).
    pub fill_region: Vec<(f32, f32)>,
}

impl StepCurve {
    pub fn build(program: &Program, scale: &PlotScale) -> Self {
        let (left, right, bottom) = (scale.left(), scale.right(), scale.bottom());
        let floor = scale.y.vmin;

        let mut points = Vec::with_capacity(program.len() * 2 + 4);
        let mut fill_seed = None;
        let mut fill_region = Vec::new();
        let mut filling = false;
        points.push((left, bottom));

        let mut prev_y = bottom;
        for (at, value) in program.points() {
            let (x, y) = scale.to_px(at.seconds() as f64, value.unwrap_or(floor));
            points.push((x, prev_y));
            points.push((x, y));
            // a row at or below `bottom - 1` leaves no interior pixel above the baseline
            let above = y < bottom - 1.0;
            if filling {
                fill_region.push((x, prev_y));
                if above {
                    fill_region.push((x, y));
                } else {
                    fill_region.push((x, bottom));
                    filling = false;
                }
            } else if fill_seed.is_none() && above && x < right - 1.0 {
                fill_seed = Some((x + 1.0, bottom - 1.0));
                fill_region.push((x, bottom));
                fill_region.push((x, y));
                filling = true;
            }
            prev_y = y;
        }
        if filling {
            fill_region.push((right, prev_y));
            fill_region.push((right, bottom));
        }

        points.push((right, prev_y));
        points.push((right, bottom));
        points.push((left, bottom));
        Self { points, fill_seed, fill_region }
    }

    /// The polygon encloses area (something to fill).
    pub fn has_fill(&self) -> bool { self.fill_seed.is_some() }

    /// Outline as a Skia path shifted by `(dx, dy)`, closed back to the first point.
    pub fn to_path(&self, offset: (f32, f32)) -> skia_safe::Path {
        closed_path(&self.points, offset)
    }

    /// The seed's connected area as a closed path; empty when there is nothing to fill.
    pub fn fill_path(&self, offset: (f32, f32)) -> skia_safe::Path {
        closed_path(&self.fill_region, offset)
    }
}

fn closed_path(points: &[(f32, f32)], (dx, dy): (f32, f32)) -> skia_safe::Path {
    let mut path = skia_safe::Path::new();
    if let Some((&(x0, y0), rest)) = points.split_first() {
        path.move_to((x0 + dx, y0 + dy));
        for &(x, y) in rest {
            path.line_to((x + dx, y + dy));
        }
        path.close();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;
    use crate::config::ChartConfig;
    use crate::geometry::RectI32;

    fn build(text: &str) -> (StepCurve, PlotScale) {
        let cfg = ChartConfig::default();
        let program = Program::parse_str(text);
        let plot = RectI32::inset(cfg.width, cfg.height, &cfg.insets());
        let scale = PlotScale::new(plot, &Axis::week(&cfg), &Axis::temperature(&program, &cfg));
        (StepCurve::build(&program, &scale), scale)
    }

    #[test]
    fn empty_program_is_flat_baseline() {
        let (c, _) = build("");
        assert_eq!(c.points, vec![(80.0, 320.0), (1552.0, 320.0), (1552.0, 320.0), (80.0, 320.0)]);
        assert_eq!(c.fill_seed, None);
        assert!(c.fill_region.is_empty());
        assert!(c.points.iter().all(|&(_, y)| y == 320.0));
    }

    #[test]
    fn single_week_start_point_is_flat_line() {
        // range 15..20, 18 degrees sits at row 157
        let (c, _) = build("0 00:00 18.0\n");
        assert_eq!(
            c.points,
            vec![(80.0, 320.0), (80.0, 320.0), (80.0, 157.0), (1552.0, 157.0), (1552.0, 320.0), (80.0, 320.0)]
        );
        assert_eq!(c.fill_seed, Some((81.0, 319.0)));
        assert_eq!(c.fill_region, vec![(80.0, 320.0), (80.0, 157.0), (1552.0, 157.0), (1552.0, 320.0)]);
    }

    #[test]
    fn placeholder_starts_at_range_floor_then_steps() {
        // range floor(16-3)=13 .. floor(20+2)=22
        let (c, s) = build("0 08:00 20.0\n0 20:00 16.0\n");
        let x8 = s.x.to_px(8.0 * 3600.0);
        let x20 = s.x.to_px(20.0 * 3600.0);
        let y20 = s.y.to_px(20.0);
        let y16 = s.y.to_px(16.0);
        assert_eq!(
            c.points,
            vec![
                (80.0, 320.0),
                (80.0, 320.0), (80.0, 320.0), // placeholder pinned to the floor
                (x8, 320.0), (x8, y20),
                (x20, y20), (x20, y16),
                (1552.0, y16),
                (1552.0, 320.0),
                (80.0, 320.0),
            ]
        );
        assert_eq!(c.fill_seed, Some((x8 + 1.0, 319.0)));
        assert_eq!(
            c.fill_region,
            vec![(x8, 320.0), (x8, y20), (x20, y20), (x20, y16), (1552.0, y16), (1552.0, 320.0)]
        );
    }

    #[test]
    fn polygon_is_closed_on_the_baseline() {
        let (c, s) = build("1 06:00 21\n3 22:30 17.5\n5 12:00 19\n");
        assert_eq!(c.points.first(), c.points.last());
        let n = c.points.len();
        assert_eq!(c.points[n - 2], (s.right(), s.bottom()));
        // consecutive vertices differ only in one coordinate: a staircase, no slopes
        for w in c.points.windows(2) {
            assert!(w[0].0 == w[1].0 || w[0].1 == w[1].1, "sloped segment {:?}", w);
        }
    }

    #[test]
    fn program_at_range_floor_has_no_fill() {
        let cfg = ChartConfig { y_autorange: false, ..Default::default() };
        let program = Program::parse_str("0 00:00 12.0\n");
        let plot = RectI32::inset(cfg.width, cfg.height, &cfg.insets());
        let scale = PlotScale::new(plot, &Axis::week(&cfg), &Axis::temperature(&program, &cfg));
        assert!(!StepCurve::build(&program, &scale).has_fill());
    }

    fn build_fixed(text: &str) -> (StepCurve, PlotScale) {
        let cfg = ChartConfig { y_autorange: false, ..Default::default() };
        let program = Program::parse_str(text);
        let plot = RectI32::inset(cfg.width, cfg.height, &cfg.insets());
        let scale = PlotScale::new(plot, &Axis::week(&cfg), &Axis::temperature(&program, &cfg));
        (StepCurve::build(&program, &scale), scale)
    }

    #[test]
    fn fill_region_stops_where_the_curve_touches_the_floor() {
        let (c, s) = build_fixed("0 00:00 18
2 00:00 12
4 00:00 18
");
        let x2 = s.x.to_px(2.0 * 86_400.0);
        let y18 = s.y.to_px(18.0);
        assert_eq!(c.fill_region, vec![(80.0, 320.0), (80.0, y18), (x2, y18), (x2, 320.0)]);
    }

    #[test]
    fn fill_region_ends_at_a_set_point_below_the_range() {
        let (c, s) = build_fixed("0 00:00 18
3 00:00 5
");
        let x3 = s.x.to_px(3.0 * 86_400.0);
        assert_eq!(c.fill_region.last(), Some(&(x3, 320.0)));
        assert!(c.fill_region.iter().all(|&(_, y)| y <= 320.0));

        let (below, _) = build_fixed("0 00:00 5
");
        assert!(!below.has_fill());
        assert!(below.fill_region.is_empty());
    }
}
