use rayon::prelude::*;

use super::{VertexAttributes, VertexOutput};

/// Runs the stage over every vertex of a draw call. Invocations are
/// independent, so rayon may execute them in any order; results land at the
/// same index as their input.
pub(crate) fn process_all(vertices: &[VertexAttributes]) -> Vec<VertexOutput> {
    vertices
        .par_iter()
        .copied()
        .map(super::process)
        .collect()
}

/// Fixed-function consumer of assembled primitives. The stage itself never
/// interpolates; whatever sits behind this trait does.
pub(crate) trait PrimitiveConsumer {
    fn triangle(&mut self, vertices: [VertexOutput; 3]);
}

/// Walks the index list three entries at a time and hands each triangle to
/// the consumer. A trailing partial triple is ignored.
pub(crate) fn assemble<C: PrimitiveConsumer>(
    outputs: &[VertexOutput],
    indices: &[u16],
    consumer: &mut C,
) {
    for triple in indices.chunks_exact(3) {
        consumer.triangle([
            outputs[triple[0] as usize],
            outputs[triple[1] as usize],
            outputs[triple[2] as usize],
        ]);
    }
}

/// Clip-space bounding box over every vertex fed through it. The facade uses
/// this as a preflight: geometry entirely outside the clip volume renders as
/// nothing, which is worth a warning in the log.
pub(crate) struct ClipExtent {
    pub(crate) min: [f32; 3],
    pub(crate) max: [f32; 3],
}

impl Default for ClipExtent {
    fn default() -> Self {
        Self {
            min: [f32::INFINITY; 3],
            max: [f32::NEG_INFINITY; 3],
        }
    }
}

impl ClipExtent {
    pub(crate) fn outside_clip_volume(&self) -> bool {
        // w is fixed at 1.0 upstream, so the volume is the unit cube in x/y
        // and [0, 1] in z under wgpu conventions.
        self.min[0] > 1.0 || self.max[0] < -1.0
            || self.min[1] > 1.0 || self.max[1] < -1.0
            || self.min[2] > 1.0 || self.max[2] < 0.0
    }
}

impl PrimitiveConsumer for ClipExtent {
    fn triangle(&mut self, vertices: [VertexOutput; 3]) {
        for vertex in vertices {
            let p = vertex.clip_position;
            for (axis, component) in [p.x, p.y, p.z].into_iter().enumerate() {
                self.min[axis] = self.min[axis].min(component);
                self.max[axis] = self.max[axis].max(component);
            }
        }
    }
}
