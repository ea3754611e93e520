use std::sync::Arc;

use anyhow::{Context, Result};
use vellum_engine::coords::{CornerRadii, ISize, Rect, Transform, Vec2};
use vellum_engine::draw::DrawOrder;
use vellum_engine::geom::{Path, Shape};
use vellum_engine::logging::{init_logging, LoggingConfig};
use vellum_engine::paint::{Cap, Color, Join, PaintParams, StrokeParams};
use vellum_engine::target::{AlphaType, ColorSpace, ColorType, RenderTarget};
use vellum_engine::{DrawContext, OpaqueRectCuller, RenderPassTask};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let target = Arc::new(RenderTarget::new(
        "studio canvas",
        ISize::new(256, 256),
        wgpu::TextureFormat::Rgba8UnormSrgb,
    ));
    let mut ctx =
        DrawContext::make(Some(target), ColorSpace::Srgb, ColorType::Rgba8888, AlphaType::Premul)
            .context("failed to create draw context")?;

    let mut culler = OpaqueRectCuller::new();
    record_scene(&mut ctx, &mut culler);

    let Some(task) = ctx.snap_render_pass_task(&mut culler) else {
        log::info!("nothing recorded; no task produced");
        return Ok(());
    };
    report(task);
    Ok(())
}

fn record_scene(ctx: &mut DrawContext, culler: &mut OpaqueRectCuller) {
    let full = ctx.target().bounds();
    let mut order = DrawOrder::default();
    let mut next = || {
        order = order.next();
        order
    };

    ctx.clear(Color::from_rgba8(24, 24, 32, 255));

    // Hidden behind the panel recorded right after it.
    ctx.fill_convex_path(
        Transform::IDENTITY,
        Shape::rect(Rect::new(40.0, 40.0, 32.0, 32.0)),
        full,
        next(),
        Some(PaintParams::solid(Color::from_rgba8(255, 0, 0, 255))),
    );
    ctx.fill_convex_path(
        Transform::translate(16.0, 16.0),
        Shape::rect(Rect::new(0.0, 0.0, 224.0, 120.0)),
        full,
        next(),
        Some(PaintParams::solid(Color::from_rgba8(58, 64, 90, 255))),
    );
    ctx.snap_draw_pass(culler);

    let star = Path::polygon(&[
        Vec2::new(128.0, 140.0),
        Vec2::new(150.0, 230.0),
        Vec2::new(80.0, 172.0),
        Vec2::new(176.0, 172.0),
        Vec2::new(106.0, 230.0),
    ]);
    let tilt = Transform::translate(128.0, 185.0)
        * Transform::rotate(0.2)
        * Transform::translate(-128.0, -185.0);
    ctx.stencil_and_fill_path(
        tilt,
        Shape::Path(star),
        full,
        next(),
        Some(PaintParams::solid(Color::from_rgba8(250, 200, 60, 255))),
    );
    ctx.stroke_path(
        Transform::IDENTITY,
        Shape::rounded_rect(Rect::new(16.0, 16.0, 224.0, 120.0), CornerRadii::all(8.0)),
        StrokeParams::new(2.0, 4.0, Join::Round, Cap::Butt),
        Rect::new(0.0, 0.0, 256.0, 140.0),
        next(),
        Some(PaintParams::solid(Color::WHITE)),
    );
}

fn report(task: RenderPassTask) {
    log::info!(
        "task for '{}': {} passes, {} draws, depth/stencil: {}",
        task.target().label(),
        task.passes().len(),
        task.draw_count(),
        task.desc().depth_stencil,
    );
    for (i, pass) in task.into_passes().into_iter().enumerate() {
        log::info!(
            "  pass {i}: {} draws ({} culled), bounds {:?}, {} uniform bytes",
            pass.len(),
            pass.culled_count(),
            pass.bounds(),
            pass.uniform_bytes().len(),
        );
    }
}
