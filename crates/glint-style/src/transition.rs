//! CSS Transitions
//!
//! Transition values for the placeholder/main-image crossfade.

use std::time::Duration;

use crate::properties::PropertyId;

/// Easing/timing function for transitions
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum TimingFunction {
    /// Linear interpolation
    #[default]
    Linear,
    /// Ease (default CSS)
    Ease,
    /// Cubic bezier curve
    CubicBezier(f32, f32, f32, f32),
}

impl TimingFunction {
    /// Evaluate the timing function at progress t (0.0 to 1.0)
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(*x1, *y1, *x2, *y2, t),
        }
    }

    /// CSS keyword or function for the timing
    pub fn to_css_string(&self) -> String {
        match self {
            Self::Linear => "linear".to_string(),
            Self::Ease => "ease".to_string(),
            Self::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1},{y1},{x2},{y2})")
            }
        }
    }
}

/// CSS Transition definition
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Property being transitioned
    pub property: PropertyId,
    /// Duration
    pub duration: Duration,
    /// Timing function
    pub timing: TimingFunction,
}

impl Transition {
    pub fn new(property: PropertyId, duration: Duration, timing: TimingFunction) -> Self {
        Self {
            property,
            duration,
            timing,
        }
    }

    /// Linear transition over a millisecond duration
    pub fn linear_ms(property: PropertyId, millis: u64) -> Self {
        Self::new(property, Duration::from_millis(millis), TimingFunction::Linear)
    }

    /// CSS shorthand, e.g. `opacity 250ms linear`
    pub fn to_css_string(&self) -> String {
        format!(
            "{} {}ms {}",
            self.property.name(),
            self.duration.as_millis(),
            self.timing.to_css_string()
        )
    }
}

/// Cubic bezier evaluation
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    // Newton-Raphson to find the curve parameter for x, then sample y
    let mut guess = t;
    for _ in 0..8 {
        let x = bezier_sample(x1, x2, guess);
        let dx = bezier_derivative(x1, x2, guess);
        if dx.abs() < 1e-6 {
            break;
        }
        guess -= (x - t) / dx;
        guess = guess.clamp(0.0, 1.0);
    }
    bezier_sample(y1, y2, guess)
}

fn bezier_sample(p1: f32, p2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * p1 + 3.0 * mt * t2 * p2 + t3
}

fn bezier_derivative(p1: f32, p2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t2 * (1.0 - p2)
}
