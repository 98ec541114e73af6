//! Tagged view over every rotation representation
//!
//! [`AnyRotation`] lets callers hold "some rotation" without generics and
//! convert it with a single `match`, which is how the converter framework
//! dispatches on the source representation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    AngleAxis, EulerAnglesXyz, EulerAnglesZyx, Rotation, RotationMatrix, RotationQuaternion,
    RotationVector,
};
use crate::numeric::Scalar;

/// Names the representation behind a rotation value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationKind {
    AngleAxis,
    RotationVector,
    RotationQuaternion,
    RotationMatrix,
    EulerAnglesXyz,
    EulerAnglesZyx,
}

impl fmt::Display for RotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotationKind::AngleAxis => "angle-axis",
            RotationKind::RotationVector => "rotation vector",
            RotationKind::RotationQuaternion => "rotation quaternion",
            RotationKind::RotationMatrix => "rotation matrix",
            RotationKind::EulerAnglesXyz => "Euler angles XYZ",
            RotationKind::EulerAnglesZyx => "Euler angles ZYX",
        };
        f.write_str(name)
    }
}

/// A rotation in any of the supported representations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnyRotation<T: Scalar> {
    AngleAxis(AngleAxis<T>),
    RotationVector(RotationVector<T>),
    RotationQuaternion(RotationQuaternion<T>),
    RotationMatrix(RotationMatrix<T>),
    EulerAnglesXyz(EulerAnglesXyz<T>),
    EulerAnglesZyx(EulerAnglesZyx<T>),
}

impl<T: Scalar> Rotation<T> for AnyRotation<T> {
    fn kind(&self) -> RotationKind {
        match self {
            AnyRotation::AngleAxis(_) => RotationKind::AngleAxis,
            AnyRotation::RotationVector(_) => RotationKind::RotationVector,
            AnyRotation::RotationQuaternion(_) => RotationKind::RotationQuaternion,
            AnyRotation::RotationMatrix(_) => RotationKind::RotationMatrix,
            AnyRotation::EulerAnglesXyz(_) => RotationKind::EulerAnglesXyz,
            AnyRotation::EulerAnglesZyx(_) => RotationKind::EulerAnglesZyx,
        }
    }

    fn as_any(&self) -> AnyRotation<T> {
        *self
    }

    fn to_quaternion(&self) -> RotationQuaternion<T> {
        match self {
            AnyRotation::AngleAxis(r) => r.to_quaternion(),
            AnyRotation::RotationVector(r) => r.to_quaternion(),
            AnyRotation::RotationQuaternion(r) => r.to_quaternion(),
            AnyRotation::RotationMatrix(r) => r.to_quaternion(),
            AnyRotation::EulerAnglesXyz(r) => r.to_quaternion(),
            AnyRotation::EulerAnglesZyx(r) => r.to_quaternion(),
        }
    }

    fn to_rotation_matrix(&self) -> RotationMatrix<T> {
        match self {
            AnyRotation::RotationMatrix(r) => *r,
            AnyRotation::EulerAnglesZyx(r) => r.to_rotation_matrix(),
            other => other.to_quaternion().to_rotation_matrix(),
        }
    }
}

macro_rules! impl_from_representation {
    ($($variant:ident),* $(,)?) => {
        $(
            impl<T: Scalar> From<$variant<T>> for AnyRotation<T> {
                fn from(rotation: $variant<T>) -> Self {
                    AnyRotation::$variant(rotation)
                }
            }
        )*
    };
}

impl_from_representation!(
    AngleAxis,
    RotationVector,
    RotationQuaternion,
    RotationMatrix,
    EulerAnglesXyz,
    EulerAnglesZyx,
);
