use serde::{Deserialize, Serialize};

use crate::error::{RulerError, RulerResult};

/// Upper bound of ticks produced for one span. Guards against degenerate
/// steps that would otherwise allocate unbounded tick lists.
pub const MAX_VISIBLE_TICKS: usize = 100_000;

/// Ticks and grid lines are never placed closer than this, whatever the
/// configured minimum spacing.
pub const MIN_LINE_SPACING_PX: f64 = 2.0;

/// Largest slot index that converts to `f64` and back without rounding.
const MAX_EXACT_INDEX: f64 = 9_007_199_254_740_992.0;
const DENSITY_MAX_DECADES: usize = 24;
const COINCIDENCE_EPSILON: f64 = 1e-9;

/// One tick slot of an evenly spaced sequence anchored at an origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPosition {
    /// Signed slot number; `0` is the origin.
    pub index: i64,
    pub position_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickKind {
    Major,
    Minor,
}

/// How major tick labels present coordinates left of / above the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelSign {
    /// Distance from origin on both sides (`50` on either side of `0`).
    #[default]
    Absolute,
    /// Signed logical coordinate (`-50`, `0`, `50`).
    Signed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub kind: TickKind,
    pub position_px: f64,
    pub logical_value: f64,
    /// Present for major ticks only.
    pub label: Option<String>,
}

/// Tick placement input for one ruler axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerTickSpec {
    /// Pixel position of logical `0` along the ruler.
    pub origin_px: f64,
    /// Pixels per logical unit.
    pub scale: f64,
    /// Logical distance between labelled ticks.
    pub major_step: f64,
    /// Logical distance between unlabelled ticks.
    pub minor_step: f64,
    pub min_major_spacing_px: f64,
    pub label_sign: LabelSign,
}

impl RulerTickSpec {
    pub fn validate(self) -> RulerResult<()> {
        if !self.origin_px.is_finite() {
            return Err(RulerError::InvalidData(
                "tick origin must be finite".to_owned(),
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RulerError::InvalidData(
                "tick scale must be finite and > 0".to_owned(),
            ));
        }
        if !self.major_step.is_finite() || self.major_step <= 0.0 {
            return Err(RulerError::InvalidData(
                "major tick step must be finite and > 0".to_owned(),
            ));
        }
        if !self.minor_step.is_finite() || self.minor_step <= 0.0 {
            return Err(RulerError::InvalidData(
                "minor tick step must be finite and > 0".to_owned(),
            ));
        }
        if self.minor_step > self.major_step {
            return Err(RulerError::InvalidData(
                "minor tick step must be <= major tick step".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Returns every tick slot `origin_px + k * step_px` inside `[start_px, end_px)`.
///
/// The first slot is found with a single division, so the cost depends on the
/// number of visible ticks only, not on how far the origin was panned away.
pub fn visible_ticks(
    origin_px: f64,
    step_px: f64,
    start_px: f64,
    end_px: f64,
) -> RulerResult<Vec<TickPosition>> {
    if !origin_px.is_finite() || !start_px.is_finite() || !end_px.is_finite() {
        return Err(RulerError::InvalidData(
            "tick span and origin must be finite".to_owned(),
        ));
    }
    if !step_px.is_finite() || step_px <= 0.0 {
        return Err(RulerError::InvalidData(
            "tick step must be finite and > 0".to_owned(),
        ));
    }
    if end_px <= start_px {
        return Ok(Vec::new());
    }

    let first = ((start_px - origin_px) / step_px).ceil();
    let last = ((end_px - origin_px) / step_px).ceil() - 1.0;
    if last < first {
        return Ok(Vec::new());
    }
    if first.abs() > MAX_EXACT_INDEX || last.abs() > MAX_EXACT_INDEX {
        return Err(RulerError::InvalidData(format!(
            "tick origin {origin_px}px is too far from the span for step {step_px}px"
        )));
    }
    if last - first + 1.0 > MAX_VISIBLE_TICKS as f64 {
        return Err(RulerError::InvalidData(format!(
            "tick step {step_px}px yields more than {MAX_VISIBLE_TICKS} ticks"
        )));
    }

    let ticks = (first as i64..=last as i64)
        .map(|index| TickPosition {
            index,
            position_px: origin_px + index as f64 * step_px,
        })
        .filter(|tick| tick.position_px >= start_px && tick.position_px < end_px)
        .collect();
    Ok(ticks)
}

/// Smallest 1-2-5 multiplier that spreads `step_px` to at least `min_spacing_px`.
///
/// Returns `1.0` when the step is already wide enough or when either input is
/// not a positive finite number.
#[must_use]
pub fn density_multiplier(step_px: f64, min_spacing_px: f64) -> f64 {
    if !step_px.is_finite()
        || step_px <= 0.0
        || !min_spacing_px.is_finite()
        || min_spacing_px <= 0.0
        || step_px >= min_spacing_px
    {
        return 1.0;
    }

    let mut decade = 1.0;
    for _ in 0..DENSITY_MAX_DECADES {
        for mantissa in [1.0, 2.0, 5.0] {
            let multiplier = mantissa * decade;
            if step_px * multiplier >= min_spacing_px {
                return multiplier;
            }
        }
        decade *= 10.0;
    }
    decade
}

/// Major and minor ruler ticks inside `[start_px, end_px)`, ordered by position.
///
/// A minor tick that coincides with a major tick is dropped. Minor ticks are
/// left out entirely when they would be closer than `MIN_LINE_SPACING_PX`.
pub fn ruler_ticks(spec: RulerTickSpec, start_px: f64, end_px: f64) -> RulerResult<Vec<AxisTick>> {
    spec.validate()?;

    let multiplier = density_multiplier(
        spec.major_step * spec.scale,
        spec.min_major_spacing_px.max(MIN_LINE_SPACING_PX),
    );
    let major_step = spec.major_step * multiplier;
    let minor_step = spec.minor_step * multiplier;
    let minor_step_px = minor_step * spec.scale;

    let majors = visible_ticks(spec.origin_px, major_step * spec.scale, start_px, end_px)?;
    let minors = if minor_step_px < MIN_LINE_SPACING_PX {
        Vec::new()
    } else {
        visible_ticks(spec.origin_px, minor_step_px, start_px, end_px)?
    };

    let mut ticks = Vec::with_capacity(majors.len() + minors.len());
    for tick in majors {
        let logical_value = tick.index as f64 * major_step;
        ticks.push(AxisTick {
            kind: TickKind::Major,
            position_px: tick.position_px,
            logical_value,
            label: Some(format_tick_label(logical_value, spec.label_sign)),
        });
    }
    for tick in minors {
        let logical_value = tick.index as f64 * minor_step;
        let ratio = logical_value / major_step;
        if (ratio - ratio.round()).abs() <= COINCIDENCE_EPSILON {
            continue;
        }
        ticks.push(AxisTick {
            kind: TickKind::Minor,
            position_px: tick.position_px,
            logical_value,
            label: None,
        });
    }

    ticks.sort_by(|left, right| left.position_px.total_cmp(&right.position_px));
    Ok(ticks)
}

/// Grid line positions inside `[start_px, end_px)` for a logical `grid_step`.
pub fn grid_lines(
    origin_px: f64,
    scale: f64,
    grid_step: f64,
    min_spacing_px: f64,
    start_px: f64,
    end_px: f64,
) -> RulerResult<Vec<f64>> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(RulerError::InvalidData(
            "grid scale must be finite and > 0".to_owned(),
        ));
    }
    if !grid_step.is_finite() || grid_step <= 0.0 {
        return Err(RulerError::InvalidData(
            "grid step must be finite and > 0".to_owned(),
        ));
    }

    let min_spacing_px = min_spacing_px.max(MIN_LINE_SPACING_PX);
    let step_px = grid_step * scale * density_multiplier(grid_step * scale, min_spacing_px);
    let positions = visible_ticks(origin_px, step_px, start_px, end_px)?
        .into_iter()
        .map(|tick| tick.position_px)
        .collect();
    Ok(positions)
}

/// Formats a major tick coordinate: integers without decimals, otherwise at
/// most two decimals with trailing zeros trimmed.
#[must_use]
pub fn format_tick_label(value: f64, sign: LabelSign) -> String {
    let shown = match sign {
        LabelSign::Absolute => value.abs(),
        LabelSign::Signed => value,
    };
    let rounded = (shown * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    if (rounded - rounded.round()).abs() <= COINCIDENCE_EPSILON {
        return format!("{}", rounded.round() as i64);
    }

    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

#[cfg(test)]
mod tests {
    use super::{
        LabelSign, MAX_VISIBLE_TICKS, RulerTickSpec, TickKind, density_multiplier,
        format_tick_label, grid_lines, ruler_ticks, visible_ticks,
    };
    use crate::error::RulerError;

    fn spec(origin_px: f64, scale: f64) -> RulerTickSpec {
        RulerTickSpec {
            origin_px,
            scale,
            major_step: 50.0,
            minor_step: 10.0,
            min_major_spacing_px: 30.0,
            label_sign: LabelSign::Absolute,
        }
    }

    #[test]
    fn emits_origin_once_and_both_directions() {
        let ticks = visible_ticks(100.0, 50.0, 0.0, 300.0).expect("ticks");
        let positions: Vec<f64> = ticks.iter().map(|tick| tick.position_px).collect();
        assert_eq!(positions, vec![0.0, 50.0, 100.0, 150.0, 200.0, 250.0]);
        assert_eq!(ticks.iter().filter(|tick| tick.index == 0).count(), 1);
    }

    #[test]
    fn end_of_span_is_exclusive() {
        let ticks = visible_ticks(0.0, 10.0, 0.0, 30.0).expect("ticks");
        assert_eq!(ticks.len(), 3);
    }

    #[test]
    fn far_pan_only_yields_visible_slots() {
        let ticks = visible_ticks(-1.0e9, 10.0, 0.0, 100.0).expect("ticks");
        assert_eq!(ticks.len(), 10);
        assert_eq!(ticks[0].index, 100_000_000);
    }

    #[test]
    fn rejects_zero_step() {
        assert!(visible_ticks(0.0, 0.0, 0.0, 100.0).is_err());
    }

    #[test]
    fn rejects_spans_above_tick_cap() {
        let err = visible_ticks(0.0, 0.001, 0.0, 1_000.0).expect_err("too many ticks");
        assert!(matches!(err, RulerError::InvalidData(_)));
        let at_cap = visible_ticks(0.0, 1.0, 0.0, MAX_VISIBLE_TICKS as f64).expect("at cap");
        assert_eq!(at_cap.len(), MAX_VISIBLE_TICKS);
    }

    #[test]
    fn rejects_slot_indices_beyond_integer_precision() {
        let err = visible_ticks(-1.0e21, 1.0, 0.0, 100.0).expect_err("index overflow");
        assert!(matches!(err, RulerError::InvalidData(_)));
    }

    #[test]
    fn dense_minor_steps_are_left_out() {
        let dense = RulerTickSpec {
            minor_step: 0.01,
            ..spec(0.0, 1.0)
        };
        let ticks = ruler_ticks(dense, 0.0, 1_920.0).expect("ticks");
        assert!(ticks.iter().all(|tick| tick.kind == TickKind::Major));
        assert_eq!(ticks.len(), 39);
    }

    #[test]
    fn zero_min_spacing_still_bounds_tick_count() {
        let crowded = RulerTickSpec {
            major_step: 0.001,
            minor_step: 0.001,
            min_major_spacing_px: 0.0,
            ..spec(0.0, 1.0)
        };
        let ticks = ruler_ticks(crowded, 0.0, 1_920.0).expect("ticks");
        assert!(ticks.len() <= 960);
        assert!(
            grid_lines(0.0, 1.0, 0.001, 0.0, 0.0, 1_920.0)
                .expect("grid")
                .len()
                <= 960
        );
    }

    #[test]
    fn minor_ticks_skip_major_positions() {
        let ticks = ruler_ticks(spec(20.0, 1.0), 0.0, 120.0).expect("ticks");
        let majors: Vec<f64> = ticks
            .iter()
            .filter(|tick| tick.kind == TickKind::Major)
            .map(|tick| tick.position_px)
            .collect();
        assert_eq!(majors, vec![20.0, 70.0]);
        assert!(
            ticks
                .iter()
                .filter(|tick| tick.kind == TickKind::Minor)
                .all(|tick| !majors.contains(&tick.position_px))
        );
        assert_eq!(ticks.len(), 12);
    }

    #[test]
    fn labels_use_distance_from_origin_by_default() {
        let ticks = ruler_ticks(spec(120.0, 1.0), 0.0, 200.0).expect("ticks");
        let labels: Vec<&str> = ticks
            .iter()
            .filter_map(|tick| tick.label.as_deref())
            .collect();
        assert_eq!(labels, vec!["100", "50", "0", "50"]);
    }

    #[test]
    fn density_follows_one_two_five_sequence() {
        assert_eq!(density_multiplier(50.0, 30.0), 1.0);
        assert_eq!(density_multiplier(20.0, 30.0), 2.0);
        assert_eq!(density_multiplier(10.0, 30.0), 5.0);
        assert_eq!(density_multiplier(5.0, 30.0), 10.0);
        assert_eq!(density_multiplier(0.5, 30.0), 100.0);
    }

    #[test]
    fn zoomed_out_ruler_widens_logical_steps() {
        let ticks = ruler_ticks(spec(0.0, 0.25), 0.0, 200.0).expect("ticks");
        let labels: Vec<&str> = ticks
            .iter()
            .filter_map(|tick| tick.label.as_deref())
            .collect();
        assert_eq!(labels, vec!["0", "250", "500", "750"]);
    }

    #[test]
    fn label_formatting() {
        assert_eq!(format_tick_label(-0.0, LabelSign::Signed), "0");
        assert_eq!(format_tick_label(-50.0, LabelSign::Signed), "-50");
        assert_eq!(format_tick_label(-50.0, LabelSign::Absolute), "50");
        assert_eq!(format_tick_label(12.5, LabelSign::Signed), "12.5");
        assert_eq!(format_tick_label(0.333_333, LabelSign::Signed), "0.33");
    }
}
