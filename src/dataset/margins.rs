//! Closed-form solve for the three chart margin factors.
//!
//! Each factor expresses a vertical margin as a fraction of the temperature
//! data spread. The margins must occupy fixed pixel budgets (icon sprite row,
//! label clearance, separation from the precipitation bars) no matter how the
//! container is sized, which couples them: enlarging one margin shrinks the
//! pixels available per value unit for the others. With `h` the container
//! height and `p_i` the pixel budget of factor `f_i`, the constraints form a
//! linear system
//!
//! ```text
//! f_i * h = p_i * (1 + f_top + f_below + f_sep)      for i in {top, below, sep}
//! ```
//!
//! Summing the three equations gives `T = P / (h - P)` for the factor sum `T`
//! and pixel sum `P`, and substituting back yields `f_i = p_i / (h - P)`
//! directly. No iteration; each factor is clamped to be non-negative.

/// Inputs to the margin solve, all in pixels except the flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginInputs {
    pub container_height: f64,
    pub font_size: f64,
    pub icon_size: f64,
    pub label_offset: f64,
    /// Whether a precipitation or pressure series shares the chart, which
    /// widens the separation budget.
    pub show_secondary_axis: bool,
    /// Scales the separation budget per dataset kind (hourly bars are
    /// narrower than daily ones).
    pub series_kind_factor: f64,
}

/// The three solved factors, each a fraction of the temperature spread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginFactors {
    /// Label headroom above the icon row (or above the maximum when icons
    /// are hidden).
    pub icon_top: f64,
    /// Gap between the maximum temperature and the icon sprite row.
    pub icon_below: f64,
    /// Margin below the minimum temperature, keeping labels and
    /// precipitation bars clear of the temperature lines.
    pub separation: f64,
}

/// Solves the three-equation system described in the module docs.
///
/// Degenerate containers (height not exceeding the summed pixel budgets)
/// yield all-zero factors rather than negative or unbounded ones.
pub fn solve_margin_factors(inputs: &MarginInputs) -> MarginFactors {
    let p_top = inputs.label_offset + inputs.font_size;
    let p_below = inputs.icon_size + inputs.label_offset;
    let base_sep = inputs.font_size + inputs.label_offset;
    let p_sep = if inputs.show_secondary_axis {
        base_sep * (1.0 + inputs.series_kind_factor)
    } else {
        base_sep
    };

    let budget = p_top + p_below + p_sep;
    let denom = inputs.container_height - budget;
    if denom <= 0.0 {
        return MarginFactors {
            icon_top: 0.0,
            icon_below: 0.0,
            separation: 0.0,
        };
    }

    MarginFactors {
        icon_top: (p_top / denom).max(0.0),
        icon_below: (p_below / denom).max(0.0),
        separation: (p_sep / denom).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(height: f64, secondary: bool) -> MarginInputs {
        MarginInputs {
            container_height: height,
            font_size: 16.0,
            icon_size: 50.0,
            label_offset: 4.0,
            show_secondary_axis: secondary,
            series_kind_factor: 1.0,
        }
    }

    #[test]
    fn factors_satisfy_the_linear_system() {
        let input = inputs(300.0, true);
        let f = solve_margin_factors(&input);
        let total = 1.0 + f.icon_top + f.icon_below + f.separation;
        // f_i * h == p_i * (1 + sum) for every factor.
        assert!((f.icon_top * 300.0 - 20.0 * total).abs() < 1e-9);
        assert!((f.icon_below * 300.0 - 54.0 * total).abs() < 1e-9);
        assert!((f.separation * 300.0 - 40.0 * total).abs() < 1e-9);
    }

    #[test]
    fn secondary_axis_widens_separation_only() {
        let without = solve_margin_factors(&inputs(300.0, false));
        let with = solve_margin_factors(&inputs(300.0, true));
        assert!(with.separation > without.separation);
        // The pixel budget ratios are preserved, so the other two factors
        // also grow slightly; they must never shrink below zero.
        assert!(with.icon_top > 0.0 && with.icon_below > 0.0);
    }

    #[test]
    fn taller_containers_need_smaller_factors() {
        let short = solve_margin_factors(&inputs(200.0, false));
        let tall = solve_margin_factors(&inputs(800.0, false));
        assert!(tall.icon_top < short.icon_top);
        assert!(tall.icon_below < short.icon_below);
        assert!(tall.separation < short.separation);
    }

    #[test]
    fn degenerate_height_clamps_to_zero() {
        let f = solve_margin_factors(&inputs(60.0, true));
        assert_eq!(f.icon_top, 0.0);
        assert_eq!(f.icon_below, 0.0);
        assert_eq!(f.separation, 0.0);
    }

    #[test]
    fn factors_are_always_non_negative() {
        for h in [1.0, 100.0, 114.0, 115.0, 1000.0] {
            let f = solve_margin_factors(&inputs(h, true));
            assert!(f.icon_top >= 0.0 && f.icon_below >= 0.0 && f.separation >= 0.0);
        }
    }
}
