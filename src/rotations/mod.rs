//! # Rotation Representations
//!
//! Every representation implements [`Rotation`], which exposes the unit
//! quaternion as the common hub and the tagged [`AnyRotation`] view used for
//! dispatch. Conversions into [`EulerAnglesZyx`] are plain `From` impls; the
//! destination precision is chosen independently of the source precision.
//!
//! Active and passive aliases (`...D`/`...F` and `...PD`/`...PF`) name the
//! same types. They document the caller's interpretation and have no
//! numerical effect.

pub mod angle_axis;
pub mod any;
pub mod euler_xyz;
pub mod euler_zyx;
pub mod matrix;
pub mod quaternion;
pub mod rotation_vector;

pub use angle_axis::{AngleAxis, AngleAxisD, AngleAxisF};
pub use any::{AnyRotation, RotationKind};
pub use euler_xyz::{EulerAnglesXyz, EulerAnglesXyzD, EulerAnglesXyzF};
pub use euler_zyx::{
    EulerAnglesYpr, EulerAnglesYprD, EulerAnglesYprF, EulerAnglesYprPD, EulerAnglesYprPF,
    EulerAnglesZyx, EulerAnglesZyxD, EulerAnglesZyxF, EulerAnglesZyxPD, EulerAnglesZyxPF,
};
pub use matrix::{RotationMatrix, RotationMatrixD, RotationMatrixF};
pub use quaternion::{RotationQuaternion, RotationQuaternionD, RotationQuaternionF};
pub use rotation_vector::{RotationVector, RotationVectorD, RotationVectorF};

use crate::numeric::Scalar;

/// Common interface of all rotation representations
pub trait Rotation<T: Scalar>: Copy {
    /// Which representation this is
    fn kind(&self) -> RotationKind;

    /// Tagged view of the underlying representation, used for dispatch
    fn as_any(&self) -> AnyRotation<T>;

    /// The same rotation as a unit quaternion
    fn to_quaternion(&self) -> RotationQuaternion<T>;

    /// The same rotation as a rotation matrix
    fn to_rotation_matrix(&self) -> RotationMatrix<T> {
        self.to_quaternion().to_rotation_matrix()
    }

    /// Whether `other` denotes the same rotation up to an angle of `tolerance` radians
    ///
    /// Compares rotations rather than parameters, so `(π, 0, 0)` and
    /// `(-π, 0, 0)` Euler angles are near each other, as are `q` and `-q`.
    fn is_near<R: Rotation<T>>(&self, other: &R, tolerance: T) -> bool {
        self.to_quaternion().angle_to(&other.to_quaternion()) <= tolerance
    }
}
