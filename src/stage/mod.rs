pub(crate) mod dispatch;

use cgmath::{Vector3, Vector4};

/// Per-vertex input attributes, as bound by the host for one draw call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct VertexAttributes {
    pub(crate) position: Vector3<f32>,
    pub(crate) color: Vector4<f32>,
}

/// What the rasterizer receives for one vertex: a homogeneous clip-space
/// position and the color it will interpolate across the primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct VertexOutput {
    pub(crate) clip_position: Vector4<f32>,
    pub(crate) color: Vector4<f32>,
}

/// Maps one vertex to clip space. No view or projection is applied, so the
/// position is promoted with w = 1.0 and the color is forwarded untouched.
/// Out-of-range color components are not clamped.
pub(crate) fn process(vertex: VertexAttributes) -> VertexOutput {
    VertexOutput {
        clip_position: vertex.position.extend(1.0),
        color: vertex.color,
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{vec3, vec4};

    use super::*;

    #[test]
    fn promotes_position_with_unit_w() {
        let out = process(VertexAttributes {
            position: vec3(1.0, 2.0, 3.0),
            color: vec4(0.0, 1.0, 0.0, 0.5),
        });

        assert_eq!(out.clip_position, vec4(1.0, 2.0, 3.0, 1.0));
        assert_eq!(out.color, vec4(0.0, 1.0, 0.0, 0.5));
    }

    #[test]
    fn origin_maps_to_clip_origin() {
        let out = process(VertexAttributes {
            position: vec3(0.0, 0.0, 0.0),
            color: vec4(1.0, 0.0, 0.0, 1.0),
        });

        assert_eq!(out.clip_position, vec4(0.0, 0.0, 0.0, 1.0));
        assert_eq!(out.color, vec4(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn negative_components_survive_promotion() {
        let out = process(VertexAttributes {
            position: vec3(-1.0, -1.0, 0.5),
            color: vec4(0.0, 0.0, 1.0, 1.0),
        });

        assert_eq!(out.clip_position, vec4(-1.0, -1.0, 0.5, 1.0));
        assert_eq!(out.color, vec4(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn color_is_not_clamped() {
        let out = process(VertexAttributes {
            position: vec3(0.0, 0.0, 0.0),
            color: vec4(2.5, -0.25, 100.0, 1.5),
        });

        assert_eq!(out.color, vec4(2.5, -0.25, 100.0, 1.5));
    }

    #[test]
    fn repeated_invocation_is_bit_identical() {
        let vertex = VertexAttributes {
            position: vec3(0.1, -0.7, 0.3),
            color: vec4(0.9, 0.2, 0.4, 1.0),
        };

        let first = process(vertex);
        let second = process(vertex);

        assert_eq!(first.clip_position, second.clip_position);
        assert_eq!(first.color, second.color);
    }
}
