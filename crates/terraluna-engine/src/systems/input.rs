use crate::api::context::SimContext;
use crate::input::queue::InputEvent;
use crate::renderer::handles::SceneHandle;
use crate::systems::viewport;
use crate::systems::zoom::ScrollOutcome;

/// Route one input event to the part of the simulation that owns it.
/// Returns the scroll outcome for wheel events so the caller can schedule
/// the return-to-rest task.
pub fn apply_input<H: SceneHandle>(
    ctx: &mut SimContext,
    event: InputEvent,
    host: &mut H,
) -> Option<ScrollOutcome> {
    match event {
        InputEvent::Wheel { .. } => return Some(ctx.zoom.on_scroll()),
        InputEvent::Resize { width, height } => viewport::resize(ctx, width, height, host),
        InputEvent::PointerDown { x, y } => ctx.controls.pointer_down(x, y),
        InputEvent::PointerMove { x, y } => {
            let (_, height) = ctx.camera.viewport;
            ctx.controls.pointer_move(x, y, height);
        }
        InputEvent::PointerUp { .. } => ctx.controls.pointer_up(),
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::SceneConfig;
    use crate::renderer::handles::recording::RecordingScene;
    use crate::systems::zoom::ZoomPhase;

    fn context() -> SimContext {
        let config = SceneConfig {
            star_count: 8,
            ..SceneConfig::default()
        };
        SimContext::new(config, 800, 600)
    }

    #[test]
    fn wheel_feeds_zoom() {
        let mut ctx = context();
        let mut host = RecordingScene::default();
        let mut last = None;
        for _ in 0..25 {
            last = apply_input(&mut ctx, InputEvent::Wheel { delta_y: -100.0 }, &mut host);
        }
        assert_eq!(last, Some(ScrollOutcome::Stepped));
        assert_eq!(ctx.zoom.distance(), 6.0);
        assert_eq!(ctx.zoom.scroll_count(), 24);
        assert_eq!(ctx.zoom.phase(), ZoomPhase::Zoomed);
    }

    #[test]
    fn resize_goes_to_camera_and_surface() {
        let mut ctx = context();
        let mut host = RecordingScene::default();
        let out = apply_input(&mut ctx, InputEvent::Resize { width: 1000, height: 500 }, &mut host);
        assert_eq!(out, None);
        assert_eq!(ctx.camera.viewport, (1000, 500));
        assert_eq!(host.surface, Some((1000, 500)));
    }

    #[test]
    fn drag_spins_controls() {
        let mut ctx = context();
        let mut host = RecordingScene::default();
        apply_input(&mut ctx, InputEvent::PointerDown { x: 100.0, y: 100.0 }, &mut host);
        apply_input(&mut ctx, InputEvent::PointerMove { x: 160.0, y: 100.0 }, &mut host);
        apply_input(&mut ctx, InputEvent::PointerUp { x: 160.0, y: 100.0 }, &mut host);
        assert!(!ctx.controls.is_dragging());
        assert!(ctx.controls.velocity().0 < 0.0);
    }
}
