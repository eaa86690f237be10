use cgmath::{vec3, vec4};

use crate::stage;

/// Wire format of one vertex as uploaded to the GPU. Field order matches the
/// attribute layout below: slot 0 position, slot 1 color.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(super) struct Vertex {
    pub(super) position: [f32; 3],
    pub(super) color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

    pub(super) fn description<'a>() -> wgpu::VertexBufferLayout<'a> {
        use std::mem;

        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    pub(super) fn attributes(&self) -> stage::VertexAttributes {
        stage::VertexAttributes {
            position: vec3(self.position[0], self.position[1], self.position[2]),
            color: vec4(self.color[0], self.color[1], self.color[2], self.color[3]),
        }
    }
}

pub(super) const DEFAULT_VERTICES: &[Vertex] = &[
    Vertex { position: [ 0.0, -0.5, 0.0], color: [1f32, 0f32, 0f32, 1f32] },
    Vertex { position: [ 0.5,  0.5, 0.0], color: [0f32, 1f32, 0f32, 1f32] },
    Vertex { position: [-0.5,  0.5, 0.0], color: [0f32, 0f32, 1f32, 1f32] }
];

pub(super) const DEFAULT_INDICES: &[u16] = &[0, 1, 2];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_stride_covers_both_attributes() {
        let layout = Vertex::description();

        assert_eq!(layout.array_stride, 28);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 12);
    }

    #[test]
    fn wire_vertex_converts_losslessly() {
        let vertex = Vertex {
            position: [0.25, -0.75, 0.5],
            color: [0.1, 0.2, 0.3, 0.4],
        };

        let attributes = vertex.attributes();

        assert_eq!(attributes.position, cgmath::vec3(0.25, -0.75, 0.5));
        assert_eq!(attributes.color, cgmath::vec4(0.1, 0.2, 0.3, 0.4));
    }
}
