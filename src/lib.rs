//! Rotations: rotation representations built around Z-Y'-X'' Euler angles
//!
//! This crate provides the yaw-pitch-roll Euler angle rotation
//! [`EulerAnglesZyx`](rotations::EulerAnglesZyx) together with the
//! representations it converts from: axis-angle, rotation vector, unit
//! quaternion, rotation matrix and X-Y'-Z'' Euler angles. All types are generic
//! over the scalar precision (`f32` or `f64`).

pub mod constants;
pub mod errors;
pub mod numeric;
pub mod rotations;

// Re-export commonly used types
pub use errors::{Result, RotationError};
pub use numeric::Scalar;
pub use rotations::{
    AngleAxis, AnyRotation, EulerAnglesXyz, EulerAnglesYpr, EulerAnglesZyx, Rotation,
    RotationKind, RotationMatrix, RotationQuaternion, RotationVector,
};
