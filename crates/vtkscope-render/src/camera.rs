//! Orbit camera driven by drag input.
//!
//! The camera is a plain value. Input handlers produce a new camera from the
//! old one (`orbited`, `panned`, `zoomed`) and the matrices are derived from
//! the spherical parameters each time they are requested, so no matrix is
//! ever updated in place.

use std::f32::consts::PI;

use glam::{Mat4, Vec3};

/// Smallest polar angle from the up axis, keeping `look_at` well defined.
const POLE_EPSILON: f32 = 0.01;
const MIN_RADIUS: f32 = 0.1;

/// A turntable camera orbiting a target point, with +Y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera looks at.
    pub target: Vec3,
    /// Distance from the target.
    pub radius: f32,
    /// Azimuth around the up axis, in radians. Zero looks down -Z.
    pub theta: f32,
    /// Polar angle from the up axis, in radians.
    pub phi: f32,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl OrbitCamera {
    /// Creates a camera three units in front of the origin.
    #[must_use]
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            radius: 3.0,
            theta: 0.0,
            phi: PI / 2.0,
            fov: std::f32::consts::FRAC_PI_4, // 45 degrees
            aspect_ratio,
            near: 0.01,
            far: 1000.0,
        }
    }

    /// Creates a camera that fits the given bounding box in view.
    #[must_use]
    pub fn framing(min: Vec3, max: Vec3, aspect_ratio: f32) -> Self {
        let size = (max - min).length();
        Self {
            target: (min + max) * 0.5,
            radius: (size * 1.5).max(MIN_RADIUS),
            near: (size * 0.001).max(0.001),
            far: (size * 100.0).max(1.0),
            ..Self::new(aspect_ratio)
        }
    }

    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.target
            + self.radius
                * Vec3::new(
                    self.phi.sin() * self.theta.sin(),
                    self.phi.cos(),
                    self.phi.sin() * self.theta.cos(),
                )
    }

    /// Returns the camera's forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position()).normalize()
    }

    /// Returns the camera's right direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Returns the camera's up direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Returns the camera rotated around the target by a drag delta in radians.
    #[must_use]
    pub fn orbited(&self, delta_x: f32, delta_y: f32) -> Self {
        Self {
            theta: (self.theta - delta_x).rem_euclid(2.0 * PI),
            phi: (self.phi - delta_y).clamp(POLE_EPSILON, PI - POLE_EPSILON),
            ..*self
        }
    }

    /// Returns the camera with target and position shifted in the view plane.
    #[must_use]
    pub fn panned(&self, delta_x: f32, delta_y: f32) -> Self {
        Self {
            target: self.target + self.right() * delta_x + self.up() * delta_y,
            ..*self
        }
    }

    /// Returns the camera moved toward (positive) or away from the target.
    #[must_use]
    pub fn zoomed(&self, delta: f32) -> Self {
        Self {
            radius: (self.radius - delta).max(MIN_RADIUS),
            ..*self
        }
    }

    /// Returns the camera with a new aspect ratio, e.g. after a resize.
    #[must_use]
    pub fn with_aspect_ratio(&self, aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio,
            ..*self
        }
    }

    /// Returns the camera with a new field of view, clamped to a sane range.
    #[must_use]
    pub fn with_fov(&self, fov: f32) -> Self {
        Self {
            fov: fov.clamp(0.1, PI - 0.1),
            ..*self
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}
