//! Vapor-pressure correlations: family and form selection, and the numeric
//! evaluation of the three correlation forms of Reid, Prausnitz and Poling,
//! The Properties of Gases and Liquids, 4th edition.
use crate::errors::{PropertyError, PropertyResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available vapor-pressure correlation families.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrelationFamily {
    #[default]
    Prausnitz4th,
}

impl CorrelationFamily {
    const ALL: [CorrelationFamily; 1] = [CorrelationFamily::Prausnitz4th];

    fn available() -> String {
        Self::ALL.map(|f| f.to_string()).join(", ")
    }
}

impl fmt::Display for CorrelationFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrelationFamily::Prausnitz4th => write!(f, "Prausnitz4th"),
        }
    }
}

impl FromStr for CorrelationFamily {
    type Err = PropertyError;

    fn from_str(s: &str) -> PropertyResult<Self> {
        match s {
            "Prausnitz4th" => Ok(CorrelationFamily::Prausnitz4th),
            _ => Err(PropertyError::UnsupportedCorrelation(
                s.to_string(),
                Self::available(),
            )),
        }
    }
}

/// The requested correlation: a family and an optional form number.
///
/// A form of `None` means auto-select, which only succeeds if the store
/// holds exactly one form for the component.
#[derive(Clone, Copy, Debug)]
pub struct CorrelationConfig {
    pub family: CorrelationFamily,
    pub form: Option<u32>,
}

impl CorrelationConfig {
    pub fn new(family: CorrelationFamily, form: Option<u32>) -> Self {
        Self { family, form }
    }
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self::new(CorrelationFamily::Prausnitz4th, None)
    }
}

/// The three correlation forms of the Prausnitz 4th edition family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VaporPressureForm {
    /// Form 1: polynomial in the reduced temperature, subcritical only.
    ReducedPolynomial,
    /// Form 2: implicit equation, solved numerically.
    Implicit,
    /// Form 3: simple exponential (Antoine shape).
    Exponential,
}

impl TryFrom<u32> for VaporPressureForm {
    type Error = PropertyError;

    fn try_from(form: u32) -> PropertyResult<Self> {
        match form {
            1 => Ok(VaporPressureForm::ReducedPolynomial),
            2 => Ok(VaporPressureForm::Implicit),
            3 => Ok(VaporPressureForm::Exponential),
            _ => Err(PropertyError::InvalidForm(form, vec![1, 2, 3])),
        }
    }
}

/// Coefficients and validity range of one correlation form.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct VaporPressureParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    /// lower bound of the validated temperature range in Kelvin
    pub tmin: f64,
    /// upper bound of the validated temperature range in Kelvin
    pub tmax: f64,
}

/// Pick the correlation form to use from the forms the store holds.
///
/// An explicitly requested form has to be among the available ones. Without
/// a request, a single available form is taken as the default; several
/// available forms are a deliberate refusal to guess.
pub fn resolve_form(available: &[u32], requested: Option<u32>) -> PropertyResult<u32> {
    if available.is_empty() {
        return Err(PropertyError::MissingParameters(
            "No correlation forms stored for this component.".to_string(),
        ));
    }
    match requested {
        Some(form) if available.contains(&form) => Ok(form),
        Some(form) => Err(PropertyError::InvalidForm(form, available.to_vec())),
        None if available.len() == 1 => Ok(available[0]),
        None => Err(PropertyError::AmbiguousForm(available.to_vec())),
    }
}

/// Options for the Newton iteration of the implicit form 2.
#[derive(Clone, Copy, Debug)]
pub struct ImplicitSolveOptions {
    pub initial_guess: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for ImplicitSolveOptions {
    fn default() -> Self {
        Self {
            initial_guess: 101325.0,
            tolerance: 1e-10,
            max_iterations: 200,
        }
    }
}

/// Saturation pressure in bar at temperature `t` (K).
///
/// `tc` and `pc` are only used by form 1; `options` only by form 2.
pub fn saturation_pressure(
    form: VaporPressureForm,
    parameters: &VaporPressureParameters,
    t: f64,
    tc: f64,
    pc: f64,
    options: ImplicitSolveOptions,
) -> PropertyResult<f64> {
    let VaporPressureParameters { a, b, c, d, .. } = *parameters;
    match form {
        VaporPressureForm::ReducedPolynomial => {
            if t >= tc {
                return Err(PropertyError::Supercritical(t, tc));
            }
            let x = 1.0 - t / tc;
            Ok(pc * ((a * x + b * x.powf(1.5) + c * x.powi(3) + d * x.powi(6)) / (1.0 - x)).exp())
        }
        VaporPressureForm::Implicit => solve_implicit(a, b, c, d, t, options),
        VaporPressureForm::Exponential => Ok((a - b / (t + c)).exp()),
    }
}

// Newton iteration on the residual of form 2,
//   f(p) = a - b/t + c ln(t) + d p / t^2 - ln(p)
// with f'(p) = d / t^2 - 1/p.
fn solve_implicit(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    t: f64,
    options: ImplicitSolveOptions,
) -> PropertyResult<f64> {
    let residual = |p: f64| a - b / t + c * t.ln() + d * p / t.powi(2) - p.ln();

    let mut p = options.initial_guess;
    for _ in 0..options.max_iterations {
        if p <= 0.0 || !p.is_finite() {
            break;
        }
        let f = residual(p);
        if f.abs() < options.tolerance {
            return Ok(p);
        }
        let df = d / t.powi(2) - 1.0 / p;
        let delta = f / df;
        // fall back to a damped step if a full Newton step leaves the domain
        p = if p - delta > 0.0 { p - delta } else { 0.5 * p };
    }
    Err(PropertyError::NotConverged(
        "implicit vapor pressure iteration".into(),
    ))
}
