use terraluna_engine::{
    apply_input, resize, run_frame,
    FrameBuffer, InputEvent, InputQueue, SceneConfig, SceneDescription, SceneHandle,
    ScrollOutcome, SimContext, TaskStatus, DEFAULT_TEXTURE_BASE,
};

/// Owns the simulation and its frame buffer and drives both tasks from one tick.
///
/// The web crate keeps a single `SceneRunner` in a `thread_local!` and exports
/// free functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// structs holding engine state directly.
pub struct SceneRunner {
    ctx: SimContext,
    input: InputQueue,
    frame: FrameBuffer,
    /// The return-to-rest task, if one has been scheduled.
    return_task: TaskStatus,
    initialized: bool,
}

impl SceneRunner {
    pub fn new(config: SceneConfig, width: u32, height: u32) -> Self {
        Self {
            ctx: SimContext::new(config, width, height),
            input: InputQueue::new(),
            frame: FrameBuffer::new(),
            return_task: TaskStatus::Done,
            initialized: false,
        }
    }

    /// Publish the initial surface, projection and star buffer. Call once
    /// after construction.
    pub fn init(&mut self) {
        let (width, height) = self.ctx.camera.viewport;
        resize(&mut self.ctx, width, height, &mut self.frame);
        self.frame.mark_stars_dirty();
        self.frame.record_star_count(self.ctx.stars.len());
        self.frame.record_zoom(&self.ctx.zoom);
        self.frame.pack();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one display refresh at host time `now_ms`.
    pub fn tick(&mut self, now_ms: f64) {
        if !self.initialized {
            return;
        }

        self.frame.begin_frame();

        for event in self.input.drain() {
            if apply_input(&mut self.ctx, event, &mut self.frame) == Some(ScrollOutcome::ReturnStarted) {
                self.return_task = TaskStatus::Pending;
            }
        }

        if self.return_task == TaskStatus::Pending {
            self.return_task = self.ctx.zoom.tick();
        }

        run_frame(&mut self.ctx, now_ms, &mut self.frame);

        self.frame.record_zoom(&self.ctx.zoom);
        self.frame.end_frame();
        self.frame.pack();
    }

    pub fn is_returning(&self) -> bool {
        self.return_task == TaskStatus::Pending
    }

    pub fn context(&self) -> &SimContext {
        &self.ctx
    }

    // ---- Pointer accessors for host buffer reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.buffer_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame.buffer_len() as u32
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.ctx.stars.buffer_ptr()
    }

    /// Length of the star buffer in floats.
    pub fn stars_len(&self) -> u32 {
        self.ctx.stars.positions().len() as u32
    }

    pub fn star_count(&self) -> u32 {
        self.ctx.stars.len() as u32
    }

    pub fn star_generation(&self) -> u32 {
        self.frame.star_generation()
    }

    pub fn camera_distance(&self) -> f32 {
        self.ctx.zoom.distance()
    }

    pub fn zoom_phase(&self) -> u32 {
        self.ctx.zoom.phase().code()
    }

    pub fn scroll_count(&self) -> u32 {
        self.ctx.zoom.scroll_count()
    }

    /// The declarative scene the host builds its scene graph from.
    pub fn scene_description(&self, texture_base: Option<&str>) -> SceneDescription {
        let base = texture_base.unwrap_or(DEFAULT_TEXTURE_BASE);
        SceneDescription::earth_and_moon(base, self.ctx.zoom.resting_distance())
    }
}
