use kosmos_engine::{
    Game, GameConfig, EngineContext,
    InputEvent, InputQueue, RenderBuffer,
    FixedTimestep, AssetManifest, SpriteRegistry, Rng,
};
use kosmos_engine::systems::render::build_render_buffer;
use kosmos_engine::systems::text::ui_json;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because wasm-bindgen
/// cannot export generic structs directly.
///
/// `Game::init` runs on the first tick, so the host can load the asset
/// manifest and seed the RNG between `game_init` and the first frame.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    /// Handed to the extra fixed steps of a frame so input is seen once.
    idle: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    started: bool,
    /// Flat buffer of sound event IDs for host reads.
    sound_buffer: Vec<u8>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::with_config(&config),
            input: InputQueue::new(),
            idle: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            timestep: FixedTimestep::new(config.fixed_dt),
            sound_buffer: Vec::with_capacity(config.max_sounds),
            game,
            config,
            started: false,
        }
    }

    /// Parse the asset manifest and replace the sprite registry.
    /// A malformed manifest is logged and leaves the previous registry in place.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                self.ctx.sprites = SpriteRegistry::from_manifest(&manifest);
                log::info!(
                    "manifest loaded: {} atlases, {} sprites, {} sounds",
                    manifest.atlases.len(),
                    manifest.sprites.len(),
                    manifest.sounds.len()
                );
            }
            Err(err) => log::error!("failed to parse asset manifest: {}", err),
        }
    }

    /// Reseed the engine RNG (the host passes wall-clock entropy).
    pub fn seed(&mut self, seed: u32) {
        self.ctx.rng = Rng::new(seed as u64);
    }

    fn start(&mut self) {
        self.game.init(&mut self.ctx);
        self.started = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: fixed-step updates and systems, then rebuild host buffers.
    pub fn tick(&mut self, dt: f32) {
        // Cleared before the lazy init so the first scene's sounds and events reach the host.
        self.ctx.clear_frame_data();
        if !self.started {
            self.start();
        }

        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            let input = if step == 0 { &self.input } else { &self.idle };
            self.game.update(&mut self.ctx, input);
            self.ctx.step_systems(self.timestep.dt());
        }

        // Input waits for a frame that actually runs a step.
        if steps > 0 {
            self.input.clear();
        }

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);

        if self.ctx.events.len() > self.config.max_events {
            log::warn!("dropping {} game events", self.ctx.events.len() - self.config.max_events);
            self.ctx.events.truncate(self.config.max_events);
        }

        self.sound_buffer.clear();
        for sound in self.ctx.sounds.iter().take(self.config.max_sounds) {
            match u8::try_from(sound.0) {
                Ok(id) => self.sound_buffer.push(id),
                Err(_) => log::warn!("sound id {} does not fit the sound buffer", sound.0),
            }
        }
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Pointer accessors for host reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    /// Text labels and theme classes as JSON.
    pub fn ui_json(&self) -> String {
        ui_json(self.ctx.scene.iter(), &self.ctx.theme)
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn background_color(&self) -> u32 {
        self.config.background_color
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.config.max_instances as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.config.max_sounds as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }
}
