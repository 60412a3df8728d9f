//! # Geometry
//!
//! Closed-form area/perimeter for plane shapes and volume/surface area for
//! solids. Dimensions are unitless; results are in the same unit (squared
//! or cubed).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::geometry::{Shape2D, Solid};
//!
//! let triangle = Shape2D::Triangle { a: 3.0, b: 4.0, c: 5.0 };
//! assert!((triangle.area().unwrap() - 6.0).abs() < 1e-12);
//!
//! let cube = Solid::Cube { side: 2.0 };
//! assert_eq!(cube.volume().unwrap(), 8.0);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};

/// A plane figure.
///
/// ## JSON Example
///
/// ```json
/// { "shape": "rectangle", "width": 4.0, "height": 2.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape2D {
    Circle { radius: f64 },
    Square { side: f64 },
    Rectangle { width: f64, height: f64 },
    /// Given by its three side lengths
    Triangle { a: f64, b: f64, c: f64 },
    /// Parallel sides `a` and `b`, legs `c` and `d`; the legs must fit `height`
    Trapezoid { a: f64, b: f64, c: f64, d: f64, height: f64 },
    /// Semi-axes
    Ellipse { semi_major: f64, semi_minor: f64 },
    Parallelogram { base: f64, side: f64, height: f64 },
}

impl Shape2D {
    pub fn name(&self) -> &'static str {
        match self {
            Shape2D::Circle { .. } => "circle",
            Shape2D::Square { .. } => "square",
            Shape2D::Rectangle { .. } => "rectangle",
            Shape2D::Triangle { .. } => "triangle",
            Shape2D::Trapezoid { .. } => "trapezoid",
            Shape2D::Ellipse { .. } => "ellipse",
            Shape2D::Parallelogram { .. } => "parallelogram",
        }
    }

    /// Check every dimension is positive and a triangle's sides can close.
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            Shape2D::Circle { radius } => {
                require_positive("radius", radius)?;
            }
            Shape2D::Square { side } => {
                require_positive("side", side)?;
            }
            Shape2D::Rectangle { width, height } => {
                require_positive("width", width)?;
                require_positive("height", height)?;
            }
            Shape2D::Triangle { a, b, c } => {
                require_positive("a", a)?;
                require_positive("b", b)?;
                require_positive("c", c)?;
                if a + b <= c || a + c <= b || b + c <= a {
                    return Err(CalcError::domain(
                        "triangle",
                        "each side must be shorter than the sum of the other two",
                    ));
                }
            }
            Shape2D::Trapezoid { a, b, c, d, height } => {
                for (field, v) in [("a", a), ("b", b), ("c", c), ("d", d), ("height", height)] {
                    require_positive(field, v)?;
                }
                if height > c || height > d {
                    return Err(CalcError::domain("trapezoid", "height cannot exceed a leg"));
                }
                // Horizontal runs of the legs must close the gap |a - b|,
                // leaning apart (p + q) or the same way (|p - q|)
                let p = (c * c - height * height).sqrt();
                let q = (d * d - height * height).sqrt();
                let gap = (a - b).abs();
                let tolerance = 1e-9 * a.max(b).max(c).max(d);
                if (p + q - gap).abs() > tolerance && ((p - q).abs() - gap).abs() > tolerance {
                    return Err(CalcError::domain(
                        "trapezoid",
                        "legs at this height cannot span the difference of the parallel sides",
                    ));
                }
            }
            Shape2D::Ellipse { semi_major, semi_minor } => {
                require_positive("semi_major", semi_major)?;
                require_positive("semi_minor", semi_minor)?;
            }
            Shape2D::Parallelogram { base, side, height } => {
                require_positive("base", base)?;
                require_positive("side", side)?;
                require_positive("height", height)?;
                if height > side {
                    return Err(CalcError::domain("parallelogram", "height cannot exceed the slanted side"));
                }
            }
        }
        Ok(())
    }

    pub fn area(&self) -> CalcResult<f64> {
        self.validate()?;
        Ok(match *self {
            Shape2D::Circle { radius } => PI * radius * radius,
            Shape2D::Square { side } => side * side,
            Shape2D::Rectangle { width, height } => width * height,
            Shape2D::Triangle { a, b, c } => {
                // Heron
                let s = (a + b + c) / 2.0;
                (s * (s - a) * (s - b) * (s - c)).sqrt()
            }
            Shape2D::Trapezoid { a, b, height, .. } => (a + b) / 2.0 * height,
            Shape2D::Ellipse { semi_major, semi_minor } => PI * semi_major * semi_minor,
            Shape2D::Parallelogram { base, height, .. } => base * height,
        })
    }

    pub fn perimeter(&self) -> CalcResult<f64> {
        self.validate()?;
        Ok(match *self {
            Shape2D::Circle { radius } => 2.0 * PI * radius,
            Shape2D::Square { side } => 4.0 * side,
            Shape2D::Rectangle { width, height } => 2.0 * (width + height),
            Shape2D::Triangle { a, b, c } => a + b + c,
            Shape2D::Trapezoid { a, b, c, d, .. } => a + b + c + d,
            Shape2D::Ellipse { semi_major: a, semi_minor: b } => {
                // Ramanujan's second approximation
                let h = ((a - b) / (a + b)).powi(2);
                PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
            }
            Shape2D::Parallelogram { base, side, .. } => 2.0 * (base + side),
        })
    }
}

/// A three-dimensional body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "solid", rename_all = "snake_case")]
pub enum Solid {
    Sphere { radius: f64 },
    Cube { side: f64 },
    Cuboid { length: f64, width: f64, height: f64 },
    Cylinder { radius: f64, height: f64 },
    Cone { radius: f64, height: f64 },
    /// Square base of side `base`, apex above the centre
    SquarePyramid { base: f64, height: f64 },
}

impl Solid {
    pub fn name(&self) -> &'static str {
        match self {
            Solid::Sphere { .. } => "sphere",
            Solid::Cube { .. } => "cube",
            Solid::Cuboid { .. } => "cuboid",
            Solid::Cylinder { .. } => "cylinder",
            Solid::Cone { .. } => "cone",
            Solid::SquarePyramid { .. } => "square pyramid",
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        let dims: Vec<(&str, f64)> = match *self {
            Solid::Sphere { radius } => vec![("radius", radius)],
            Solid::Cube { side } => vec![("side", side)],
            Solid::Cuboid { length, width, height } => {
                vec![("length", length), ("width", width), ("height", height)]
            }
            Solid::Cylinder { radius, height } | Solid::Cone { radius, height } => {
                vec![("radius", radius), ("height", height)]
            }
            Solid::SquarePyramid { base, height } => vec![("base", base), ("height", height)],
        };
        for (field, v) in dims {
            require_positive(field, v)?;
        }
        Ok(())
    }

    pub fn volume(&self) -> CalcResult<f64> {
        self.validate()?;
        Ok(match *self {
            Solid::Sphere { radius } => 4.0 / 3.0 * PI * radius.powi(3),
            Solid::Cube { side } => side.powi(3),
            Solid::Cuboid { length, width, height } => length * width * height,
            Solid::Cylinder { radius, height } => PI * radius * radius * height,
            Solid::Cone { radius, height } => PI * radius * radius * height / 3.0,
            Solid::SquarePyramid { base, height } => base * base * height / 3.0,
        })
    }

    pub fn surface_area(&self) -> CalcResult<f64> {
        self.validate()?;
        Ok(match *self {
            Solid::Sphere { radius } => 4.0 * PI * radius * radius,
            Solid::Cube { side } => 6.0 * side * side,
            Solid::Cuboid { length, width, height } => {
                2.0 * (length * width + length * height + width * height)
            }
            Solid::Cylinder { radius, height } => 2.0 * PI * radius * (radius + height),
            Solid::Cone { radius, height } => {
                let slant = radius.hypot(height);
                PI * radius * (radius + slant)
            }
            Solid::SquarePyramid { base, height } => {
                let slant = (base / 2.0).hypot(height);
                base * base + 2.0 * base * slant
            }
        })
    }
}

/// Input for a geometry calculation: one plane shape or one solid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeometryInput {
    Shape(Shape2D),
    Solid(Solid),
}

/// Measures of a shape or solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeometryResult {
    Plane { name: String, area: f64, perimeter: f64 },
    Solid { name: String, volume: f64, surface_area: f64 },
}

pub fn calculate(input: &GeometryInput) -> CalcResult<GeometryResult> {
    match input {
        GeometryInput::Shape(shape) => Ok(GeometryResult::Plane {
            name: shape.name().to_string(),
            area: shape.area()?,
            perimeter: shape.perimeter()?,
        }),
        GeometryInput::Solid(solid) => Ok(GeometryResult::Solid {
            name: solid.name().to_string(),
            volume: solid.volume()?,
            surface_area: solid.surface_area()?,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle() {
        let c = Shape2D::Circle { radius: 1.0 };
        assert!((c.area().unwrap() - PI).abs() < 1e-12);
        assert!((c.perimeter().unwrap() - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_heron_right_triangle() {
        let t = Shape2D::Triangle { a: 3.0, b: 4.0, c: 5.0 };
        assert!((t.area().unwrap() - 6.0).abs() < 1e-12);
        assert_eq!(t.perimeter().unwrap(), 12.0);
    }

    #[test]
    fn test_impossible_triangle() {
        let t = Shape2D::Triangle { a: 1.0, b: 2.0, c: 3.0 };
        assert_eq!(t.area().unwrap_err().error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_ellipse_reduces_to_circle() {
        let e = Shape2D::Ellipse { semi_major: 2.0, semi_minor: 2.0 };
        assert!((e.perimeter().unwrap() - 4.0 * PI).abs() < 1e-12);
        // a=5, b=3: reference perimeter 25.52699...
        let e = Shape2D::Ellipse { semi_major: 5.0, semi_minor: 3.0 };
        assert!((e.perimeter().unwrap() - 25.527).abs() < 1e-3);
    }

    #[test]
    fn test_trapezoid_and_parallelogram() {
        let t = Shape2D::Trapezoid { a: 7.0, b: 4.0, c: 2.5, d: 2.5, height: 2.0 };
        assert_eq!(t.area().unwrap(), 11.0);
        assert_eq!(t.perimeter().unwrap(), 16.0);

        // Right trapezoid: one vertical leg
        let t = Shape2D::Trapezoid { a: 7.0, b: 4.0, c: 5.0, d: 4.0, height: 4.0 };
        assert_eq!(t.area().unwrap(), 22.0);

        let p = Shape2D::Parallelogram { base: 5.0, side: 3.0, height: 2.0 };
        assert_eq!(p.area().unwrap(), 10.0);
        assert_eq!(p.perimeter().unwrap(), 16.0);
    }

    #[test]
    fn test_trapezoid_legs_must_close() {
        let t = Shape2D::Trapezoid { a: 10.0, b: 1.0, c: 1.0, d: 1.0, height: 1.0 };
        assert_eq!(t.area().unwrap_err().error_code(), "DOMAIN_ERROR");

        let t = Shape2D::Trapezoid { a: 6.0, b: 4.0, c: 2.5, d: 2.5, height: 2.0 };
        assert!(t.validate().is_err());

        // Both legs leaning the same way: runs 3 and 1 leave a gap of 2
        let t = Shape2D::Trapezoid { a: 6.0, b: 4.0, c: 5.0, d: 17f64.sqrt(), height: 4.0 };
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_solids() {
        let s = Solid::Sphere { radius: 3.0 };
        assert!((s.volume().unwrap() - 36.0 * PI).abs() < 1e-9);
        assert!((s.surface_area().unwrap() - 36.0 * PI).abs() < 1e-9);

        let cone = Solid::Cone { radius: 3.0, height: 4.0 };
        assert!((cone.volume().unwrap() - 12.0 * PI).abs() < 1e-9);
        assert!((cone.surface_area().unwrap() - 24.0 * PI).abs() < 1e-9);

        let pyramid = Solid::SquarePyramid { base: 6.0, height: 4.0 };
        assert_eq!(pyramid.volume().unwrap(), 48.0);
        assert_eq!(pyramid.surface_area().unwrap(), 96.0);

        let box_ = Solid::Cuboid { length: 2.0, width: 3.0, height: 4.0 };
        assert_eq!(box_.surface_area().unwrap(), 52.0);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(Shape2D::Square { side: 0.0 }.area().is_err());
        assert!(Solid::Cylinder { radius: 1.0, height: -1.0 }.volume().is_err());
    }

    #[test]
    fn test_input_json() {
        let input: GeometryInput =
            serde_json::from_str(r#"{"shape":"rectangle","width":4.0,"height":2.5}"#).unwrap();
        match calculate(&input).unwrap() {
            GeometryResult::Plane { area, perimeter, .. } => {
                assert_eq!(area, 10.0);
                assert_eq!(perimeter, 13.0);
            }
            other => panic!("unexpected {:?}", other),
        }

        let input: GeometryInput = serde_json::from_str(r#"{"solid":"cube","side":2.0}"#).unwrap();
        assert!(matches!(calculate(&input).unwrap(), GeometryResult::Solid { volume, .. } if volume == 8.0));
    }
}
