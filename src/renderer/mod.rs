//! wgpu drawing of the demo scenes.
//!
//! [`SceneRenderer`] owns every GPU resource for a window: the cube vertex
//! buffer, per-instance buffers for cubes and lamps, the camera and lighting
//! uniforms, the depth attachment and three pipelines sharing one shader.

pub(crate) mod pipeline_util;

use wgpu::util::DeviceExt;

use crate::camera::CameraUniform;
use crate::engine::Frame;
use crate::gpu::instance_buffer::InstanceBuffer;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::DepthTexture;
use crate::gpu::uniform::UniformBinding;
use crate::scene::lights::{LightingUniform, MAX_POINT_LIGHTS};
use crate::scene::mesh::{self, CUBE_VERTEX_COUNT};
use crate::scene::{DemoKind, InstanceRaw, CUBE_POSITIONS};

const SCENE_SHADER: &str = include_str!("shaders/scene.wgsl");

/// Draws one [`Frame`] per call into the context's surface.
pub struct SceneRenderer {
    unlit_pipeline: wgpu::RenderPipeline,
    phong_pipeline: wgpu::RenderPipeline,
    lamp_pipeline: wgpu::RenderPipeline,
    cube_vertices: wgpu::Buffer,
    cube_instances: InstanceBuffer<InstanceRaw>,
    lamp_instances: InstanceBuffer<InstanceRaw>,
    camera: UniformBinding<CameraUniform>,
    lighting: UniformBinding<LightingUniform>,
    depth: DepthTexture,
}

impl SceneRenderer {
    /// Compile the shader and allocate every buffer for `context`.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let device = &context.device;

        let camera = UniformBinding::new(
            device,
            "Camera",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            CameraUniform::new(),
        );
        let lighting = UniformBinding::new(
            device,
            "Lighting",
            wgpu::ShaderStages::FRAGMENT,
            LightingUniform::default(),
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_SHADER.into()),
        });
        let layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[&camera.layout, &lighting.layout],
                push_constant_ranges: &[],
            });
        let format = context.format();
        let pipeline = |label: &str, entry: &str| {
            pipeline_util::create_scene_pipeline(
                device, label, &shader, entry, format, &layout,
            )
        };

        let cube_vertices =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cube Vertex Buffer"),
                contents: bytemuck::cast_slice(&mesh::unit_cube()),
                usage: wgpu::BufferUsages::VERTEX,
            });

        Self {
            unlit_pipeline: pipeline("Unlit Cube Pipeline", "fs_unlit"),
            phong_pipeline: pipeline("Phong Cube Pipeline", "fs_phong"),
            lamp_pipeline: pipeline("Lamp Pipeline", "fs_lamp"),
            cube_vertices,
            cube_instances: InstanceBuffer::new(
                device,
                "Cube Instance Buffer",
                CUBE_POSITIONS.len(),
            ),
            lamp_instances: InstanceBuffer::new(
                device,
                "Lamp Instance Buffer",
                MAX_POINT_LIGHTS,
            ),
            camera,
            lighting,
            depth: DepthTexture::new(
                device,
                context.config.width,
                context.config.height,
            ),
        }
    }

    /// Recreate the depth attachment after the surface was resized.
    pub fn resize(&mut self, context: &RenderContext) {
        self.depth = DepthTexture::new(
            &context.device,
            context.config.width,
            context.config.height,
        );
    }

    /// Upload `frame` and draw it.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the next surface texture cannot be
    /// acquired; the caller decides whether to reconfigure.
    pub fn render(
        &mut self,
        context: &RenderContext,
        frame: &Frame,
    ) -> Result<(), wgpu::SurfaceError> {
        let device = &context.device;
        let queue = &context.queue;

        self.camera.update(queue, frame.camera);
        self.lighting.update(queue, frame.lighting);
        let _ = self.cube_instances.write(device, queue, &frame.cubes);
        let _ = self.lamp_instances.write(device, queue, &frame.lamps);

        let output = context.get_next_frame()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let [r, g, b] = frame.clear_color.map(f64::from);

        let mut encoder = context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            depth_slice: None,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r,
                                    g,
                                    b,
                                    a: 1.0,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });

            pass.set_bind_group(0, &self.camera.bind_group, &[]);
            pass.set_bind_group(1, &self.lighting.bind_group, &[]);
            pass.set_vertex_buffer(0, self.cube_vertices.slice(..));

            let cube_pipeline = match frame.demo {
                DemoKind::Cubes => &self.unlit_pipeline,
                DemoKind::Lighting => &self.phong_pipeline,
            };
            Self::draw_instances(
                &mut pass,
                cube_pipeline,
                &self.cube_instances,
            );
            Self::draw_instances(
                &mut pass,
                &self.lamp_pipeline,
                &self.lamp_instances,
            );
        }

        context.submit(encoder);
        output.present();
        Ok(())
    }

    fn draw_instances(
        pass: &mut wgpu::RenderPass<'_>,
        pipeline: &wgpu::RenderPipeline,
        instances: &InstanceBuffer<InstanceRaw>,
    ) {
        if instances.is_empty() {
            return;
        }
        pass.set_pipeline(pipeline);
        pass.set_vertex_buffer(1, instances.slice());
        pass.draw(0..CUBE_VERTEX_COUNT as u32, 0..instances.len());
    }
}
