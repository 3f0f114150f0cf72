use core::fmt;
use core::ops;
use std::borrow::Cow;

#[cfg(feature = "bytemuck")]
use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::point::Point2D;
use crate::scalar;

/// Mutable 2D vector.
///
/// Methods that change the vector take `&mut self` and hand back
/// `&mut Self` so calls can be chained:
///
/// ```
/// use canvas_math::Vector2;
///
/// let mut v = Vector2::new(3.0, 4.0);
/// v.mul_scalar(2.0).translate(1.0, 0.0).normalize();
/// ```
///
/// The operator impls (`+`, `-`, `*`, `/`, unary `-`) are the pure
/// counterparts and always produce a new value.
///
/// Nothing here validates its input. Dividing by zero, scaling a zero
/// vector to a magnitude and similar degenerate cases follow IEEE-754 and
/// yield `inf` or `NaN`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(Pod, Zeroable))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

/// Optional components for [`Vector2::create`].
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct PartialVector2 {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// Slice did not hold exactly two components.
    Length { found: usize },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::Length { found } => {
                write!(f, "expected 2 components, found {}", found)
            }
        }
    }
}

impl std::error::Error for VectorError {}

// Every use of an associated const is a fresh copy, so the named
// directions can never alias each other or a caller's vector.
impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    pub const UP: Vector2 = Vector2 { x: 0.0, y: -1.0 };
    pub const DOWN: Vector2 = Vector2 { x: 0.0, y: 1.0 };
    pub const LEFT: Vector2 = Vector2 { x: -1.0, y: 0.0 };
    pub const RIGHT: Vector2 = Vector2 { x: 1.0, y: 0.0 };
}

// Zero, NaN and missing all count as "not given".
#[inline]
fn given(v: Option<f64>) -> bool {
    matches!(v, Some(v) if v != 0.0 && !v.is_nan())
}

// Rounds half away from zero, like `f64::round`. The `{:e}` formatter
// rounds ties to even, so the exact expansion is cut by hand instead.
// 800 fractional digits hold every f64 exactly.
fn round_significant(value: f64, digits: usize) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let digits = digits.clamp(1, 100);

    let exact = format!("{:.800e}", value.abs());
    let (mantissa, exp) = match exact.split_once('e') {
        Some(parts) => parts,
        None => return value,
    };
    let mut exp: i32 = match exp.parse() {
        Ok(exp) => exp,
        Err(_) => return value,
    };

    let mut kept: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0').collect();
    let round_up = kept.get(digits).map_or(false, |&d| d >= 5);
    kept.truncate(digits);

    if round_up {
        let mut i = kept.len();
        loop {
            if i == 0 {
                // all nines carried out: 99 -> 100, one more decade
                kept.insert(0, 1);
                kept.pop();
                exp += 1;
                break;
            }
            i -= 1;
            if kept[i] == 9 {
                kept[i] = 0;
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let significand: String = kept.iter().map(|&d| char::from(b'0' + d)).collect();
    let rounded: f64 = match format!("{}e{}", significand, exp - (digits as i32 - 1)).parse() {
        Ok(rounded) => rounded,
        Err(_) => return value,
    };
    rounded.copysign(value)
}

impl Vector2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    /// Builds a vector from optionally present components.
    ///
    /// FIXME: when both `x` and `y` are given the `y` component is dropped
    /// and the result is `(x, 0)`. Existing callers depend on this, so it
    /// stays until they are audited.
    pub fn create(opt: PartialVector2) -> Self {
        match (given(opt.x), given(opt.y)) {
            (false, false) => Self::ZERO,
            (true, true) => Self::new(opt.x.unwrap_or(0.0), 0.0),
            (false, true) => Self::new(0.0, opt.y.unwrap_or(0.0)),
            (true, false) => Self::new(opt.x.unwrap_or(0.0), opt.y.unwrap_or(0.0)),
        }
    }

    #[inline]
    pub fn from_point(point: Point2D) -> Self {
        Self { x: point.x, y: point.y }
    }

    #[inline]
    pub fn from_vector(other: Vector2) -> Self {
        Self { x: other.x, y: other.y }
    }

    #[inline]
    pub fn to_point(self) -> Point2D {
        Point2D { x: self.x, y: self.y }
    }

    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    #[cfg(feature = "bytemuck")]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Flattens a run of vectors into `[x0, y0, x1, y1, ...]` without copying.
    #[cfg(feature = "bytemuck")]
    #[inline]
    pub fn cast_slice(vectors: &[Vector2]) -> &[f64] {
        bytemuck::cast_slice(vectors)
    }

    #[inline]
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline]
    pub fn set_from(&mut self, other: Vector2) -> &mut Self {
        self.set(other.x, other.y)
    }

    #[inline]
    pub fn add_vec(&mut self, other: Vector2) -> &mut Self {
        *self += other;
        self
    }

    #[inline]
    pub fn sub_vec(&mut self, other: Vector2) -> &mut Self {
        *self -= other;
        self
    }

    #[inline]
    pub fn mul_vec(&mut self, other: Vector2) -> &mut Self {
        *self *= other;
        self
    }

    #[inline]
    pub fn div_vec(&mut self, other: Vector2) -> &mut Self {
        *self /= other;
        self
    }

    #[inline]
    pub fn add_scalar(&mut self, n: f64) -> &mut Self {
        *self += n;
        self
    }

    #[inline]
    pub fn sub_scalar(&mut self, n: f64) -> &mut Self {
        *self -= n;
        self
    }

    #[inline]
    pub fn mul_scalar(&mut self, n: f64) -> &mut Self {
        *self *= n;
        self
    }

    #[inline]
    pub fn div_scalar(&mut self, n: f64) -> &mut Self {
        *self /= n;
        self
    }

    /// Same as [`Vector2::mul_vec`].
    #[inline]
    pub fn scale(&mut self, factors: Vector2) -> &mut Self {
        self.mul_vec(factors)
    }

    /// Rounds both components to the nearest integer, ties away from zero.
    #[inline]
    pub fn round(&mut self) -> &mut Self {
        self.set(self.x.round(), self.y.round())
    }

    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        *self = -*self;
        self
    }

    /// Same as [`Vector2::negate`].
    #[inline]
    pub fn reflect(&mut self) -> &mut Self {
        self.negate()
    }

    #[inline]
    pub fn abs(&mut self) -> &mut Self {
        self.set(self.x.abs(), self.y.abs())
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.squared_magnitude().sqrt()
    }

    #[inline]
    pub fn squared_magnitude(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Scales to unit length. A zero vector is left untouched.
    pub fn normalize(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        if magnitude > 0.0 {
            self.div_scalar(magnitude);
        }
        self
    }

    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Rescales to length `m`. A zero vector becomes `NaN`, check
    /// [`Vector2::is_zero`] first where that matters.
    pub fn scale_to_magnitude(&mut self, m: f64) -> &mut Self {
        let k = m / self.magnitude();
        self.mul_scalar(k)
    }

    #[inline]
    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns `x1 * x2 - y1 * y2`.
    ///
    /// FIXME: this is not the 2D cross product (`x1 * y2 - y1 * x2`, see
    /// [`Vector2::angle_between`]). Kept as is until callers are checked.
    #[inline]
    pub fn cross(self, other: Vector2) -> f64 {
        self.x * other.x - self.y * other.y
    }

    /// Signed angle in radians from `self` to `other`, in `(-π, π]`.
    #[inline]
    pub fn angle_between(self, other: Vector2) -> f64 {
        (self.x * other.y - self.y * other.x).atan2(self.x * other.x + self.y * other.y)
    }

    /// Heading in radians from the point `self` to the point `other`.
    #[inline]
    pub fn angle_to(self, other: Vector2) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Heading of the vector itself, in radians.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn angle_deg(self) -> f64 {
        scalar::rad_to_deg(self.angle())
    }

    #[inline]
    pub fn distance(self, other: Vector2) -> f64 {
        self.squared_distance(other).sqrt()
    }

    #[inline]
    pub fn squared_distance(self, other: Vector2) -> f64 {
        (other - self).squared_magnitude()
    }

    /// Exact comparison, same as `==`.
    #[inline]
    pub fn is_equal(self, other: Vector2) -> bool {
        self.x == other.x && self.y == other.y
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Returns `(x, -y)` as a new vector.
    ///
    /// FIXME: that is a mirror across the x axis, not a perpendicular.
    /// Callers rely on the current output.
    #[inline]
    pub fn perpendicular(self) -> Vector2 {
        let mut out = Vector2::ZERO;
        self.perpendicular_into(&mut out);
        out
    }

    /// Writes [`Vector2::perpendicular`] into `dest` and returns it.
    #[inline]
    pub fn perpendicular_into(self, dest: &mut Vector2) -> &mut Vector2 {
        dest.set(self.x, -self.y)
    }

    /// Unit vector pointing from `self` towards `other`, written over
    /// `other` itself.
    ///
    /// Note that this overwrites the argument. Use
    /// [`Vector2::get_normal_into`] to keep `other` intact.
    #[inline]
    pub fn get_normal<'a>(&self, other: &'a mut Vector2) -> &'a mut Vector2 {
        let target = *other;
        self.get_normal_into(target, other)
    }

    pub fn get_normal_into<'a>(&self, other: Vector2, dest: &'a mut Vector2) -> &'a mut Vector2 {
        dest.set(other.x - self.x, other.y - self.y).normalize()
    }

    /// Steps from `current` towards `target` by at most `max_distance`.
    ///
    /// Once the target is within reach (or already there) the target itself
    /// is returned borrowed, otherwise a new position is produced. A
    /// negative `max_distance` moves away from the target.
    pub fn move_toward<'a>(current: &Vector2, target: &'a Vector2, max_distance: f64) -> Cow<'a, Vector2> {
        let delta = *target - *current;
        let sq_distance = delta.squared_magnitude();

        if sq_distance == 0.0 || (max_distance >= 0.0 && sq_distance <= max_distance * max_distance) {
            return Cow::Borrowed(target);
        }

        let distance = sq_distance.sqrt();
        Cow::Owned(*current + delta / distance * max_distance)
    }

    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.set(self.x + dx, self.y + dy)
    }

    #[inline]
    pub fn translate_x(&mut self, dx: f64) -> &mut Self {
        self.x += dx;
        self
    }

    #[inline]
    pub fn translate_y(&mut self, dy: f64) -> &mut Self {
        self.y += dy;
        self
    }

    /// Clamps each component into `[min, max]` with [`scalar::clamp`].
    #[inline]
    pub fn clamp(&mut self, min: f64, max: f64) -> &mut Self {
        self.set(scalar::clamp(self.x, min, max), scalar::clamp(self.y, min, max))
    }

    #[inline]
    pub fn clamp_min(&mut self, m: f64) -> &mut Self {
        if self.x < m {
            self.x = m;
        }
        if self.y < m {
            self.y = m;
        }
        self
    }

    #[inline]
    pub fn clamp_max(&mut self, m: f64) -> &mut Self {
        if self.x > m {
            self.x = m;
        }
        if self.y > m {
            self.y = m;
        }
        self
    }

    /// Rotates about the origin by `degrees`.
    #[inline]
    pub fn rotate(&mut self, degrees: f64) -> &mut Self {
        self.rotate_around(degrees, Vector2::ZERO)
    }

    /// Rotates about `center` by `degrees`. Positive angles turn from +x
    /// towards +y, which is clockwise on a y-down canvas. A NaN center
    /// component counts as 0.
    pub fn rotate_around(&mut self, degrees: f64, center: Vector2) -> &mut Self {
        let (sin, cos) = scalar::deg_to_rad(degrees).sin_cos();
        let center = Vector2 {
            x: if center.x.is_nan() { 0.0 } else { center.x },
            y: if center.y.is_nan() { 0.0 } else { center.y },
        };
        let x = self.x - center.x;
        let y = self.y - center.y;

        self.set(x * cos - y * sin + center.x, x * sin + y * cos + center.y)
    }

    /// Rounds both components to `p` significant digits (not decimal
    /// places). `p` is clamped to `1..=100`.
    #[inline]
    pub fn to_precision(&mut self, p: usize) -> &mut Self {
        self.set(round_significant(self.x, p), round_significant(self.y, p))
    }

    #[inline]
    pub fn lerp(self, to: Vector2, t: f64) -> Vector2 {
        Vector2 {
            x: scalar::lerp(self.x, to.x, t),
            y: scalar::lerp(self.y, to.y, t),
        }
    }

    #[inline]
    pub fn min(a: Vector2, b: Vector2) -> Vector2 {
        Vector2 { x: a.x.min(b.x), y: a.y.min(b.y) }
    }

    #[inline]
    pub fn max(a: Vector2, b: Vector2) -> Vector2 {
        Vector2 { x: a.x.max(b.x), y: a.y.max(b.y) }
    }

    /// Computes `(x.x * (x·z - y·z), y.y * (x·z - y·z))`.
    ///
    /// FIXME: this matches no triple product identity, the usual
    /// `y * (x·z) - x * (y·z)` was probably intended. Output is kept
    /// stable for existing callers.
    #[inline]
    pub fn triple_dot_product(x: Vector2, y: Vector2, z: Vector2) -> Vector2 {
        let mut out = Vector2::ZERO;
        Vector2::triple_dot_product_into(x, y, z, &mut out);
        out
    }

    pub fn triple_dot_product_into(x: Vector2, y: Vector2, z: Vector2, dest: &mut Vector2) -> &mut Vector2 {
        let xz = x.dot(z);
        let yz = y.dot(z);

        dest.set(x.x * xz - x.x * yz, y.y * xz - y.y * yz)
    }
}

/// `Vector2(x,y)`. A precision (`{:.2}`) is applied to both components.
impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match f.precision() {
            Some(prec) => write!(f, "Vector2({:.prec$},{:.prec$})", self.x, self.y, prec = prec),
            None => write!(f, "Vector2({},{})", self.x, self.y),
        }
    }
}

impl From<Point2D> for Vector2 {
    fn from(point: Point2D) -> Self {
        Vector2::from_point(point)
    }
}

impl From<Vector2> for Point2D {
    fn from(v: Vector2) -> Self {
        v.to_point()
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2 { x, y }
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2 { x, y }
    }
}

impl TryFrom<&[f64]> for Vector2 {
    type Error = VectorError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        match *value {
            [x, y] => Ok(Vector2 { x, y }),
            _ => Err(VectorError::Length { found: value.len() }),
        }
    }
}

macro_rules! binary_op_impl {
    ($trait: ident, $func: ident, $assign_trait: ident, $assign_func: ident, $op: tt, $assign_op: tt) => {
        impl ops::$trait for Vector2 {
            type Output = Vector2;

            #[inline]
            fn $func(self, rhs: Vector2) -> Vector2 {
                Vector2 { x: self.x $op rhs.x, y: self.y $op rhs.y }
            }
        }

        impl ops::$trait<f64> for Vector2 {
            type Output = Vector2;

            #[inline]
            fn $func(self, rhs: f64) -> Vector2 {
                Vector2 { x: self.x $op rhs, y: self.y $op rhs }
            }
        }

        impl ops::$trait<Vector2> for f64 {
            type Output = Vector2;

            #[inline]
            fn $func(self, rhs: Vector2) -> Vector2 {
                Vector2 { x: self $op rhs.x, y: self $op rhs.y }
            }
        }

        impl ops::$assign_trait for Vector2 {
            #[inline]
            fn $assign_func(&mut self, rhs: Vector2) {
                self.x $assign_op rhs.x;
                self.y $assign_op rhs.y;
            }
        }

        impl ops::$assign_trait<f64> for Vector2 {
            #[inline]
            fn $assign_func(&mut self, rhs: f64) {
                self.x $assign_op rhs;
                self.y $assign_op rhs;
            }
        }
    }
}

binary_op_impl!(Add, add, AddAssign, add_assign, +, +=);
binary_op_impl!(Sub, sub, SubAssign, sub_assign, -, -=);
binary_op_impl!(Mul, mul, MulAssign, mul_assign, *, *=);
binary_op_impl!(Div, div, DivAssign, div_assign, /, /=);

impl ops::Neg for Vector2 {
    type Output = Vector2;

    #[inline]
    fn neg(self) -> Vector2 {
        Vector2 { x: -self.x, y: -self.y }
    }
}
