//! Hand landmark types.
//!
//! A detected hand is exactly 21 points in normalized frame coordinates:
//! x and y in [0, 1] with y growing downward, z a relative depth.

use crate::{
    constants::{HAND_LANDMARK_VALUES, NUM_HAND_LANDMARKS},
    Error, Result,
};
use std::ops::{Index, Sub};

/// One normalized 3D landmark
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point3 {
    /// Horizontal position, 0 = left edge of the frame
    pub x: f32,
    /// Vertical position, 0 = top edge of the frame
    pub y: f32,
    /// Depth relative to the wrist
    pub z: f32,
}

impl Point3 {
    /// Create a point
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance in all three axes
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        let d = *self - *other;
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }

    /// True if every component is finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Sub for Point3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// The 21 landmarks of a single hand, indexed by joint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks {
    points: [Point3; NUM_HAND_LANDMARKS],
}

impl HandLandmarks {
    /// Wrap an array of points
    #[must_use]
    pub const fn new(points: [Point3; NUM_HAND_LANDMARKS]) -> Self {
        Self { points }
    }

    /// Parse from a flat `[x0, y0, z0, x1, ...]` slice of exactly 63 values
    ///
    /// # Errors
    ///
    /// Returns an error if the slice length is wrong or any value is not finite
    pub fn from_flat(values: &[f32]) -> Result<Self> {
        if values.len() != HAND_LANDMARK_VALUES {
            return Err(Error::InvalidInput(format!(
                "Expected {HAND_LANDMARK_VALUES} landmark values, got {}",
                values.len()
            )));
        }

        let mut points = [Point3::default(); NUM_HAND_LANDMARKS];
        for (point, chunk) in points.iter_mut().zip(values.chunks_exact(3)) {
            *point = Point3::new(chunk[0], chunk[1], chunk[2]);
            if !point.is_finite() {
                return Err(Error::InvalidInput(format!("Non-finite landmark value in {chunk:?}")));
            }
        }

        Ok(Self { points })
    }

    /// All points in joint order
    #[must_use]
    pub const fn points(&self) -> &[Point3; NUM_HAND_LANDMARKS] {
        &self.points
    }

    /// Mutable access for building test and synthetic hands
    pub fn points_mut(&mut self) -> &mut [Point3; NUM_HAND_LANDMARKS] {
        &mut self.points
    }
}

impl Default for HandLandmarks {
    fn default() -> Self {
        Self::new([Point3::default(); NUM_HAND_LANDMARKS])
    }
}

impl Index<usize> for HandLandmarks {
    type Output = Point3;

    fn index(&self, joint: usize) -> &Point3 {
        &self.points[joint]
    }
}
