use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::errors::GeometryError;

const DELTA: f64 = 1e-9;

/// A point in scene space. Same representation as [`Vector3`].
pub type Point3 = Vector3;

/// Red, green and blue intensities, nominally in `[0, 1]`. Same representation as [`Vector3`].
pub type Color = Vector3;

#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub const fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x
        )
    }

    /// Returns the vector scaled to length 1. Fails for a zero vector instead of
    /// producing NaN components.
    pub fn unit_vector(&self) -> Result<Self, GeometryError> {
        let length = self.length();
        if length == 0.0 {
            return Err(GeometryError::ZeroLengthVector);
        }

        Ok(self / length)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

pub fn dot(u: &Vector3, v: &Vector3) -> f64 {
    u.dot(v)
}

pub fn cross(u: &Vector3, v: &Vector3) -> Vector3 {
    u.cross(v)
}

pub fn unit_vector(v: &Vector3) -> Result<Vector3, GeometryError> {
    v.unit_vector()
}

impl PartialEq for Vector3 {

    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < DELTA &&
            (self.y - other.y).abs() < DELTA &&
            (self.z - other.z).abs() < DELTA
    }
}

impl fmt::Display for Vector3 {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

impl Index<usize> for Vector3 {

    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            other => panic!("Vector3 index out of range: {}", other),
        }
    }
}

impl IndexMut<usize> for Vector3 {

    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            other => panic!("Vector3 index out of range: {}", other),
        }
    }
}

impl Neg for Vector3 {

    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Neg for &Vector3 {

    type Output = Vector3;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl AddAssign for Vector3 {

    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl MulAssign<f64> for Vector3 {

    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl DivAssign<f64> for Vector3 {

    fn div_assign(&mut self, rhs: f64) {
        *self *= 1.0 / rhs;
    }
}

impl Add for Vector3 {

    type Output = Vector3;

    fn add(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Add for &Vector3 {

    type Output = Vector3;

    fn add(self, rhs: Self) -> Self::Output {
        *self + *rhs
    }
}

impl Sub for Vector3 {

    type Output = Vector3;

    fn sub(self, rhs: Self) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub for &Vector3 {

    type Output = Vector3;

    fn sub(self, rhs: Self) -> Vector3 {
        *self - *rhs
    }
}

// component-wise
impl Mul for Vector3 {

    type Output = Vector3;

    fn mul(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f64> for Vector3 {

    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<f64> for &Vector3 {

    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        *self * rhs
    }
}

impl Mul<Vector3> for f64 {

    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs * self
    }
}

impl Mul<&Vector3> for f64 {

    type Output = Vector3;

    fn mul(self, rhs: &Vector3) -> Self::Output {
        *rhs * self
    }
}

impl Div<f64> for Vector3 {

    type Output = Vector3;

    fn div(self, rhs: f64) -> Self::Output {
        (1.0 / rhs) * self
    }
}

impl Div<f64> for &Vector3 {

    type Output = Vector3;

    fn div(self, rhs: f64) -> Self::Output {
        *self / rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Vector3> {
        vec![
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-0.5, 4.25, 0.0),
            Vector3::new(2.6, -3.0, 2.0),
            Vector3::new(1e-3, 7.0, -11.5),
        ]
    }

    #[test]
    fn test_zero_and_components() {
        let zero = Vector3::zero();
        assert_eq!((zero.x, zero.y, zero.z), (0.0, 0.0, 0.0));

        let v = Vector3::new(1.5, -2.0, 3.0);
        assert_eq!((v[0], v[1], v[2]), (1.5, -2.0, 3.0));
    }

    #[test]
    fn test_index_mut() {
        let mut v = Vector3::zero();
        v[0] = 1.0;
        v[2] = -4.0;
        assert_eq!(v, Vector3::new(1.0, 0.0, -4.0));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let v = Vector3::one();
        let _ = v[3];
    }

    #[test]
    fn test_negation() {
        assert_eq!(-Vector3::new(1.0, -2.0, 0.5), Vector3::new(-1.0, 2.0, -0.5));
    }

    #[test]
    fn test_in_place_operations() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v += Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));

        v *= 2.0;
        assert_eq!(v, Vector3::new(4.0, 6.0, 8.0));

        v /= 4.0;
        assert_eq!(v, Vector3::new(1.0, 1.5, 2.0));
    }

    #[test]
    fn test_length() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_eq!(v.length_squared(), 49.0);
        assert_eq!(v.length(), 7.0);
    }

    #[test]
    fn test_binary_operators() {
        let u = Vector3::new(1.0, 2.0, 3.0);
        let v = Vector3::new(4.0, -5.0, 6.0);

        assert_eq!(u + v, Vector3::new(5.0, -3.0, 9.0));
        assert_eq!(u - v, Vector3::new(-3.0, 7.0, -3.0));
        assert_eq!(u * v, Vector3::new(4.0, -10.0, 18.0));
        assert_eq!(2.0 * u, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(u * 2.0, 2.0 * u);
        assert_eq!(v / 2.0, Vector3::new(2.0, -2.5, 3.0));
        assert_eq!(&u + &v, u + v);
        assert_eq!(&u - &v, u - v);
    }

    #[test]
    fn test_addition_is_commutative() {
        for v in samples() {
            for w in samples() {
                assert_eq!(v + w, w + v);
                assert_eq!(dot(&v, &w), dot(&w, &v));
            }
        }
    }

    #[test]
    fn test_cross_product_is_anti_commutative() {
        for v in samples() {
            for w in samples() {
                assert_eq!(cross(&v, &w), -cross(&w, &v));
            }
        }
    }

    #[test]
    fn test_cross_product_is_right_handed() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(
            Vector3::new(1.0, 2.0, 3.0).cross(&Vector3::new(4.0, 5.0, 6.0)),
            Vector3::new(-3.0, 6.0, -3.0)
        );
    }

    #[test]
    fn test_unit_vector_has_unit_length() {
        for v in samples() {
            let unit = unit_vector(&v).unwrap();
            assert!((unit.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unit_vector_is_idempotent() {
        for v in samples() {
            let unit = unit_vector(&v).unwrap();
            assert_eq!(unit_vector(&unit).unwrap(), unit);
        }
    }

    #[test]
    fn test_unit_vector_of_zero_fails() {
        assert_eq!(Vector3::zero().unit_vector(), Err(GeometryError::ZeroLengthVector));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1.0, -2.5, 0.0).to_string(), "1 -2.5 0");
    }
}
