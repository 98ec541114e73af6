//! Constants module for rotation calculations

/// Pitch tolerance in radians used by [`EulerAnglesZyx::unique`]
///
/// Pitch values within this distance of ±π/2 are treated as exactly singular
/// (gimbal lock). Changing it changes the canonical form of near-singular
/// rotations.
///
/// [`EulerAnglesZyx::unique`]: crate::rotations::EulerAnglesZyx::unique
pub const UNIQUE_TOLERANCE: f64 = 1e-3;

/// Largest entry of `R^T R - I` accepted by [`RotationMatrix::try_new`]
///
/// [`RotationMatrix::try_new`]: crate::rotations::RotationMatrix::try_new
pub const ORTHONORMALITY_TOLERANCE: f64 = 1e-4;

/// Debug-build bound on `R^T R - I` for matrices entering Euler extraction
pub const EXTRACTION_ORTHONORMALITY_TOLERANCE: f64 = 1e-2;
