use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::f64::consts::PI;
use std::fmt;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Denominators tried, in this order, when rendering an angle as a fraction of π.
pub const PI_DENOMINATORS: [i64; 7] = [1, 2, 3, 4, 6, 8, 12];

/// Largest accepted distance between the angle and a candidate fraction, in units of π.
pub const PI_TOLERANCE: f64 = 0.02;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum CoordinateMode {
    #[default]
    #[strum(to_string = "polar", serialize = "p")]
    Polar,
    #[strum(to_string = "cartesian", serialize = "c", serialize = "xy")]
    Cartesian,
}

impl CoordinateMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Polar => Self::Cartesian,
            Self::Cartesian => Self::Polar,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum AngleNotation {
    #[default]
    #[strum(to_string = "degrees", serialize = "deg", serialize = "d")]
    Degrees,
    #[strum(
        to_string = "pi",
        serialize = "π",
        serialize = "pifraction",
        serialize = "pi-fraction"
    )]
    PiFraction,
}

impl AngleNotation {
    pub fn toggled(self) -> Self {
        match self {
            Self::Degrees => Self::PiFraction,
            Self::PiFraction => Self::Degrees,
        }
    }
}

/// Cursor position minus a reference origin, with `dy` growing upward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Displacement {
    pub dx: f64,
    pub dy: f64,
}

impl Displacement {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn is_finite(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }

    pub fn radius(&self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// Angle in radians, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        // negative zeros would land atan2 on the -π branch
        let dx = if self.dx == 0.0 { 0.0 } else { self.dx };
        let dy = if self.dy == 0.0 { 0.0 } else { self.dy };
        dy.atan2(dx)
    }
}

/// An angle expressed in units of π.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PiExpr {
    Fraction { numerator: i64, denominator: i64 },
    Multiple(f64),
}

impl PiExpr {
    /// Picks the first denominator in [`PI_DENOMINATORS`] whose nearest fraction lies within
    /// [`PI_TOLERANCE`]. The search order decides, not the size of the error, so `π/4` wins over
    /// `2π/8` and simple fractions win over tighter complicated ones. Falls back to a decimal
    /// multiple of π.
    pub fn approximate(radians: f64) -> Self {
        let fraction = radians / PI;

        PI_DENOMINATORS
            .iter()
            .find_map(|&denominator| {
                let numerator = (fraction * denominator as f64).round();
                ((fraction - numerator / denominator as f64).abs() < PI_TOLERANCE).then_some(
                    Self::Fraction {
                        numerator: numerator as i64,
                        denominator,
                    },
                )
            })
            .unwrap_or(Self::Multiple(fraction))
    }

    /// Value in units of π.
    pub fn value(&self) -> f64 {
        match *self {
            Self::Fraction {
                numerator,
                denominator,
            } => numerator as f64 / denominator as f64,
            Self::Multiple(fraction) => fraction,
        }
    }
}

impl fmt::Display for PiExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Fraction { numerator: 0, .. } => write!(f, "0"),
            Self::Fraction {
                numerator: 1,
                denominator: 1,
            } => write!(f, "π"),
            Self::Fraction {
                numerator,
                denominator: 1,
            } => write!(f, "{numerator}π"),
            Self::Fraction {
                numerator: 1,
                denominator,
            } => write!(f, "π/{denominator}"),
            Self::Fraction {
                numerator,
                denominator,
            } => write!(f, "{numerator}π/{denominator}"),
            Self::Multiple(fraction) => write!(f, "{fraction:.2}π"),
        }
    }
}

/// Title shown when there is no sample to render.
pub fn placeholder(mode: CoordinateMode) -> &'static str {
    match mode {
        CoordinateMode::Polar => "(r, θ)",
        CoordinateMode::Cartesian => "(x, y)",
    }
}

/// Renders a displacement for the status label. `notation` only applies in polar mode.
/// Non-finite input renders the mode's placeholder.
pub fn format(
    displacement: Displacement,
    mode: CoordinateMode,
    notation: AngleNotation,
) -> String {
    if !displacement.is_finite() {
        return placeholder(mode).to_string();
    }

    match mode {
        CoordinateMode::Cartesian => format!(
            "({:.0}, {:.0})",
            round_to_whole(displacement.dx),
            round_to_whole(displacement.dy)
        ),
        CoordinateMode::Polar => {
            let r = round_to_whole(displacement.radius());
            let theta = displacement.angle();
            match notation {
                AngleNotation::Degrees => {
                    format!("({r:.0}, {:.1}°)", round_to_tenths(theta.to_degrees()))
                }
                AngleNotation::PiFraction => format!("({r:.0}, {})", PiExpr::approximate(theta)),
            }
        }
    }
}

// half away from zero, never -0
fn round_to_whole(value: f64) -> f64 {
    positive_zero(value.round())
}

fn round_to_tenths(value: f64) -> f64 {
    positive_zero((value * 10.0).round() / 10.0)
}

fn positive_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn polar_pi(dx: f64, dy: f64) -> String {
        format(
            Displacement::new(dx, dy),
            CoordinateMode::Polar,
            AngleNotation::PiFraction,
        )
    }

    fn polar_deg(dx: f64, dy: f64) -> String {
        format(
            Displacement::new(dx, dy),
            CoordinateMode::Polar,
            AngleNotation::Degrees,
        )
    }

    fn cartesian(dx: f64, dy: f64) -> String {
        format(
            Displacement::new(dx, dy),
            CoordinateMode::Cartesian,
            AngleNotation::Degrees,
        )
    }

    fn at_angle(radius: f64, fraction_of_pi: f64) -> (f64, f64) {
        let theta = fraction_of_pi * PI;
        (radius * theta.cos(), radius * theta.sin())
    }

    /// Reads back an exact π expression such as `-2π/3`, `π` or `0`.
    fn parse_pi_expr(s: &str) -> Option<f64> {
        if s == "0" {
            return Some(0.0);
        }
        let (head, tail) = s.split_once('π')?;
        let numerator = match head {
            "" => 1.0,
            n => n.parse::<f64>().ok()?,
        };
        let denominator = match tail {
            "" => 1.0,
            t => t.strip_prefix('/')?.parse::<f64>().ok()?,
        };
        Some(numerator / denominator)
    }

    #[test]
    fn test_cartesian_rounds_half_away_from_zero() {
        assert_eq!(cartesian(2.5, -2.5), "(3, -3)");
        assert_eq!(cartesian(10.4, 7.6), "(10, 8)");
        assert_eq!(cartesian(-0.4, 0.4), "(0, 0)");
        assert_eq!(cartesian(-640.0, 360.0), "(-640, 360)");
    }

    #[test]
    fn test_magnitudes_beyond_i64_render_exactly() {
        assert_eq!(
            cartesian(1e20, -3e19),
            "(100000000000000000000, -30000000000000000000)"
        );
        assert_eq!(polar_pi(1e20, 0.0), "(100000000000000000000, 0)");
        assert_eq!(polar_deg(0.0, -1e20), "(100000000000000000000, -90.0°)");
    }

    #[test]
    fn test_cartesian_ignores_notation() {
        let d = Displacement::new(12.2, -3.7);
        assert_eq!(
            format(d, CoordinateMode::Cartesian, AngleNotation::PiFraction),
            format(d, CoordinateMode::Cartesian, AngleNotation::Degrees),
        );
    }

    #[test]
    fn test_origin() {
        assert_eq!(polar_deg(0.0, 0.0), "(0, 0.0°)");
        assert_eq!(polar_pi(0.0, 0.0), "(0, 0)");
        assert_eq!(polar_pi(-0.0, -0.0), "(0, 0)");
        assert_eq!(cartesian(0.0, 0.0), "(0, 0)");
    }

    #[test]
    fn test_degrees() {
        assert_eq!(polar_deg(3.0, 4.0), "(5, 53.1°)");
        assert_eq!(polar_deg(0.0, 10.0), "(10, 90.0°)");
        assert_eq!(polar_deg(-10.0, 0.0), "(10, 180.0°)");
        assert_eq!(polar_deg(-10.0, -0.0), "(10, 180.0°)");
        assert_eq!(polar_deg(0.0, -10.0), "(10, -90.0°)");
        assert_eq!(polar_deg(1000.0, -0.1), "(1000, 0.0°)");
    }

    #[test]
    fn test_degrees_always_one_decimal() {
        for i in 0..720 {
            let (dx, dy) = at_angle(250.0, -1.0 + i as f64 / 360.0 + 0.0013);
            let out = polar_deg(dx, dy);
            let angle = out
                .strip_suffix("°)")
                .and_then(|s| s.split_once(", "))
                .map(|(_, a)| a)
                .unwrap();
            let (_, decimals) = angle.split_once('.').unwrap();
            assert_eq!(decimals.len(), 1, "{out}");
            assert_ne!(angle, "-0.0");
        }
    }

    #[test]
    fn test_common_angles_as_pi() {
        assert_eq!(polar_pi(100.0, 100.0), "(141, π/4)");
        assert_eq!(polar_pi(0.0, 1.0), "(1, π/2)");
        assert_eq!(polar_pi(-1.0, 0.0), "(1, π)");
        assert_eq!(polar_pi(5.0, 0.0), "(5, 0)");

        let cases = vec![
            (1.0 / 3.0, "π/3"),
            (2.0 / 3.0, "2π/3"),
            (-2.0 / 3.0, "-2π/3"),
            (-0.5, "-1π/2"),
            (-0.75, "-3π/4"),
            (1.0 / 6.0, "π/6"),
            (5.0 / 6.0, "5π/6"),
            (1.0 / 8.0, "π/8"),
            (3.0 / 8.0, "3π/8"),
            (1.0 / 12.0, "π/12"),
            (-11.0 / 12.0, "-11π/12"),
        ];

        for (fraction, expected) in cases {
            let (dx, dy) = at_angle(300.0, fraction);
            assert_eq!(polar_pi(dx, dy), format!("(300, {expected})"));
        }
    }

    #[test]
    fn test_pi_fallback_to_decimal() {
        let (dx, dy) = at_angle(200.0, 0.3);
        assert_eq!(polar_pi(dx, dy), "(200, 0.30π)");

        let (dx, dy) = at_angle(200.0, -0.44);
        assert_eq!(polar_pi(dx, dy), "(200, -0.44π)");
    }

    #[test]
    fn test_pi_near_miss_within_tolerance() {
        assert_eq!(PiExpr::approximate(0.26 * PI).to_string(), "π/4");
        assert_eq!(PiExpr::approximate(0.985 * PI).to_string(), "π");
        assert_eq!(PiExpr::approximate(0.015 * PI).to_string(), "0");
        assert_eq!(PiExpr::approximate(0.28 * PI).to_string(), "0.28π");
    }

    #[test]
    fn test_first_denominator_wins() {
        // 0.26 is also within tolerance of 2/8 and 3/12
        assert_eq!(
            PiExpr::approximate(0.26 * PI),
            PiExpr::Fraction {
                numerator: 1,
                denominator: 4
            }
        );
        // 1/2 is also 3/6, 4/8 and 6/12
        assert_eq!(
            PiExpr::approximate(0.49 * PI),
            PiExpr::Fraction {
                numerator: 1,
                denominator: 2
            }
        );
        // 0 fits every denominator; d = 1 is tried first
        assert_eq!(
            PiExpr::approximate(-0.01 * PI),
            PiExpr::Fraction {
                numerator: 0,
                denominator: 1
            }
        );
    }

    #[test]
    fn test_exact_pi_expressions_read_back_within_tolerance() {
        for i in 0..2000 {
            let fraction = -0.9995 + i as f64 * 0.001;
            let expr = PiExpr::approximate(fraction * PI);
            if let PiExpr::Fraction { .. } = expr {
                let rendered = expr.to_string();
                let value = parse_pi_expr(&rendered).unwrap();
                assert!((value - expr.value()).abs() < 1e-12);
                assert!(
                    (value - fraction).abs() < PI_TOLERANCE,
                    "{fraction} rendered as {rendered}"
                );
            }
        }
    }

    #[test]
    fn test_non_finite_renders_placeholder() {
        assert_eq!(polar_deg(f64::NAN, 1.0), "(r, θ)");
        assert_eq!(polar_pi(1.0, f64::INFINITY), "(r, θ)");
        assert_eq!(cartesian(f64::NEG_INFINITY, 0.0), "(x, y)");
    }

    #[test]
    fn test_mode_parsing() {
        let cases = vec![
            ("polar", CoordinateMode::Polar),
            ("Polar", CoordinateMode::Polar),
            ("P", CoordinateMode::Polar),
            ("cartesian", CoordinateMode::Cartesian),
            ("XY", CoordinateMode::Cartesian),
        ];
        for (s, expected) in cases {
            assert_eq!(s.parse::<CoordinateMode>().unwrap(), expected);
        }
        assert!("spherical".parse::<CoordinateMode>().is_err());
    }

    #[test]
    fn test_notation_parsing() {
        let cases = vec![
            ("degrees", AngleNotation::Degrees),
            ("DEG", AngleNotation::Degrees),
            ("pi", AngleNotation::PiFraction),
            ("π", AngleNotation::PiFraction),
            ("Pi-Fraction", AngleNotation::PiFraction),
        ];
        for (s, expected) in cases {
            assert_eq!(s.parse::<AngleNotation>().unwrap(), expected);
        }
    }

    #[test]
    fn test_enum_serde() {
        let mode: CoordinateMode = serde_json::from_str("\"Cartesian\"").unwrap();
        assert_eq!(mode, CoordinateMode::Cartesian);
        assert_eq!(
            serde_json::to_string(&AngleNotation::PiFraction).unwrap(),
            "\"pi\""
        );
    }

    #[test]
    fn test_modes_and_notations_parse_their_own_display_form() {
        for mode in CoordinateMode::iter() {
            assert_eq!(mode.to_string().parse::<CoordinateMode>().unwrap(), mode);
        }
        for notation in AngleNotation::iter() {
            assert_eq!(
                notation.to_string().parse::<AngleNotation>().unwrap(),
                notation
            );
        }
    }

    #[test]
    fn test_toggles() {
        assert_eq!(CoordinateMode::Polar.toggled(), CoordinateMode::Cartesian);
        assert_eq!(CoordinateMode::Cartesian.toggled(), CoordinateMode::Polar);
        assert_eq!(AngleNotation::Degrees.toggled(), AngleNotation::PiFraction);
        assert_eq!(AngleNotation::PiFraction.toggled(), AngleNotation::Degrees);
    }
}
