//! Quaternion encoding of per-vertex tangent frames

use crate::core_types::Vec3;
use nalgebra::{Matrix3, Rotation3, UnitQuaternion, Vector3};

/// Smallest `w` kept after packing, one step of a signed 16-bit SNORM
const W_BIAS: f32 = 1.0 / 32767.0;

/// Encode a tangent frame as a unit quaternion `[x, y, z, w]`.
///
/// The bitangent is rebuilt as `normal × tangent` so the basis is a proper
/// rotation. `w` is kept strictly positive (at least one SNORM16 step) so its
/// sign can carry handedness: when the input frame is reflected, i.e.
/// `(normal × tangent) · bitangent < 0`, the whole quaternion is negated.
pub fn pack_tangent_frame(tangent: Vec3, bitangent: Vec3, normal: Vec3) -> [f32; 4] {
    let rebuilt = normal.cross(tangent);
    let basis = Matrix3::from_columns(&[
        Vector3::from(tangent),
        Vector3::from(rebuilt),
        Vector3::from(normal),
    ]);
    let q = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(basis));
    let mut coords = q.into_inner().coords;

    if coords.w < 0.0 {
        coords = -coords;
    }

    if coords.w < W_BIAS {
        let factor = (1.0 - W_BIAS * W_BIAS).sqrt();
        coords.x *= factor;
        coords.y *= factor;
        coords.z *= factor;
        coords.w = W_BIAS;
    }

    if rebuilt.dot(bitangent) < 0.0 {
        coords = -coords;
    }

    [coords.x, coords.y, coords.z, coords.w]
}
