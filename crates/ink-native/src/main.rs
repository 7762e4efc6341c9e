use std::path::PathBuf;

use winit::{
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod assets;
mod input;
mod render;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Asset paths: glyph atlas first, mask second; the control panel that
    // would supply these lives outside this binary.
    let mut args = std::env::args().skip(1);
    let atlas_path = PathBuf::from(
        args.next()
            .unwrap_or_else(|| "assets/glyph-atlas.png".into()),
    );
    let mask_path = PathBuf::from(args.next().unwrap_or_else(|| "assets/mask.png".into()));

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("inkflow")
        .build(&event_loop)?;

    let mut pipeline =
        pollster::block_on(render::Pipeline::new(&window, &atlas_path, &mask_path))?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => pipeline.resize(size.width, size.height),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                pipeline.set_scale_factor(scale_factor)
            }
            WindowEvent::CursorMoved { position, .. } => {
                let uv = input::cursor_to_normalized(
                    position.x,
                    position.y,
                    pipeline.width(),
                    pipeline.height(),
                );
                pipeline.pointer.set_position(uv);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    pipeline.pointer.set_pressed(state == ElementState::Pressed);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::KeyL) => {
                            pipeline.controls.light_mode = !pipeline.controls.light_mode;
                        }
                        PhysicalKey::Code(KeyCode::KeyR) => {
                            pipeline.reinitialize(ink_core::DEFAULT_ACCENT)
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        },
        Event::AboutToWait => match pipeline.render() {
            Ok(_) => pipeline.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost) => {
                let size = pipeline.window.inner_size();
                pipeline.resize(size.width, size.height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
            Err(e) => log::error!("render error: {:?}", e),
        },
        _ => {}
    })?;

    Ok(())
}
