mod state;
mod vertex;

use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder
};

use crate::stage;
use crate::stage::dispatch;

/// Runs the draw-call geometry through the CPU rendition of the vertex stage
/// and inspects where it lands in clip space. Bad attribute data never errors
/// at stage level; it just renders wrong, so the host warns ahead of time.
fn preflight(vertices: &[vertex::Vertex], indices: &[u16]) {
    let attributes = vertices
        .iter()
        .map(vertex::Vertex::attributes)
        .collect::<Vec<stage::VertexAttributes>>();

    let outputs = dispatch::process_all(&attributes);
    for (index, output) in outputs.iter().enumerate() {
        log::debug!(
            "vertex {}: clip position {:?}, color {:?}",
            index,
            output.clip_position,
            output.color
        );
    }

    let mut extent = dispatch::ClipExtent::default();
    dispatch::assemble(&outputs, indices, &mut extent);

    if extent.outside_clip_volume() {
        log::warn!(
            "geometry lies entirely outside the clip volume (x {:?}..{:?}, y {:?}..{:?}, z {:?}..{:?}); nothing will be drawn",
            extent.min[0], extent.max[0],
            extent.min[1], extent.max[1],
            extent.min[2], extent.max[2]
        );
    }
}

pub(crate) async fn run() {
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new().build(&event_loop).unwrap();

    preflight(vertex::DEFAULT_VERTICES, vertex::DEFAULT_INDICES);

    let mut state = state::State::new(&window).await;

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                match state.render() {
                    Ok(..) => {  },
                    Err(wgpu::SurfaceError::Lost) => state.redraw(),
                    Err(wgpu::SurfaceError::OutOfMemory) => *control_flow = ControlFlow::Exit,
                    Err(e) => log::error!("{:?}", e)
                }
            },
            Event::MainEventsCleared => {
                window.request_redraw();
            },
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => if !state.input(event) {
                match event {
                    // Handle close behavior
                    WindowEvent::CloseRequested | WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                state: ElementState::Pressed,
                                virtual_keycode: Some(VirtualKeyCode::Escape),
                                ..
                            },
                        ..
                    } => *control_flow = ControlFlow::Exit,

                    // Resizing
                    WindowEvent::Resized(physical_size) => {
                        state.resize(*physical_size)
                    },

                    // Adjust inner size
                    WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                        state.resize(**new_inner_size)
                    },
                    _ => {}
                }
            },
            _ => {}
        }
    });
}
