use crate::core::Viewport;
use crate::error::{RulerError, RulerResult};

use super::{GridConfig, RulerGeometry, RulerWidgetConfig};

pub(super) fn validate_widget_config(config: &RulerWidgetConfig) -> RulerResult<()> {
    validate_geometry(config.geometry)?;
    validate_widget_viewport(config.viewport, config.geometry)?;
    validate_grid_config(config.grid)?;
    config.zoom_limits.validate()?;
    config.initial_view.validate()?;
    if !config.zoom_limits.contains(config.initial_view.scale) {
        return Err(RulerError::InvalidConfig(format!(
            "initial scale {} is outside zoom limits [{}, {}]",
            config.initial_view.scale,
            config.zoom_limits.min_scale,
            config.zoom_limits.max_scale
        )));
    }
    config.style.validate()
}

/// The container must leave at least one pixel of content next to the rulers.
pub(super) fn validate_widget_viewport(
    viewport: Viewport,
    geometry: RulerGeometry,
) -> RulerResult<()> {
    if !viewport.is_valid()
        || f64::from(viewport.width) <= geometry.thickness_px
        || f64::from(viewport.height) <= geometry.thickness_px
    {
        return Err(RulerError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}

pub(super) fn validate_geometry(geometry: RulerGeometry) -> RulerResult<()> {
    if !geometry.thickness_px.is_finite() || geometry.thickness_px < 1.0 {
        return Err(RulerError::InvalidConfig(
            "ruler thickness must be finite and >= 1".to_owned(),
        ));
    }
    if !geometry.major_step.is_finite() || geometry.major_step <= 0.0 {
        return Err(RulerError::InvalidConfig(
            "major step must be finite and > 0".to_owned(),
        ));
    }
    if !geometry.minor_step.is_finite()
        || geometry.minor_step <= 0.0
        || geometry.minor_step > geometry.major_step
    {
        return Err(RulerError::InvalidConfig(
            "minor step must be finite, > 0 and <= major step".to_owned(),
        ));
    }
    if !geometry.minor_tick_length_px.is_finite()
        || geometry.minor_tick_length_px <= 0.0
        || geometry.minor_tick_length_px > geometry.thickness_px
    {
        return Err(RulerError::InvalidConfig(
            "minor tick length must be finite, > 0 and <= ruler thickness".to_owned(),
        ));
    }
    for (name, value) in [
        ("min major spacing", geometry.min_major_spacing_px),
        ("label offset", geometry.label_offset_px),
        ("label baseline", geometry.label_baseline_px),
        ("vertical label x", geometry.vertical_label_x_px),
        ("vertical label gap", geometry.vertical_label_gap_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(RulerError::InvalidConfig(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }
    Ok(())
}

pub(super) fn validate_grid_config(grid: GridConfig) -> RulerResult<()> {
    if !grid.step.is_finite() || grid.step <= 0.0 {
        return Err(RulerError::InvalidConfig(
            "grid step must be finite and > 0".to_owned(),
        ));
    }
    if !grid.min_spacing_px.is_finite() || grid.min_spacing_px < 0.0 {
        return Err(RulerError::InvalidConfig(
            "grid min spacing must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}
