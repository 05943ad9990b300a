pub mod runner;

pub use runner::GameRunner;

/// Exports a `Game` to the host page through `#[wasm_bindgen]` free functions.
///
/// wasm-bindgen cannot export a generic runner, so the macro keeps one
/// `GameRunner<$game_type>` in a thread local and wraps every call.
/// The calling crate needs `wasm_bindgen::prelude::*` and the engine's
/// `InputEvent` in scope, plus `log`, `console_log` and
/// `console_error_panic_hook` as dependencies.
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use kosmos_engine::*;
///
/// kosmos_web::export_game!(MyGame, "my-game");
/// ```
///
/// Host call order: `game_init`, then `game_load_manifest` and `game_seed`,
/// then `game_tick` once per animation frame. The game itself is
/// initialised on the first tick.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            log::info!("{}: runner ready, waiting for the first tick", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        #[wasm_bindgen]
        pub fn game_seed(seed: u32) {
            with_runner(|r| r.seed(seed));
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        fn push(event: InputEvent) {
            with_runner(|r| r.push_input(event));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            push(InputEvent::PointerDown { x, y });
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            push(InputEvent::PointerUp { x, y });
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            push(InputEvent::PointerMove { x, y });
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            push(InputEvent::KeyDown { key_code });
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            push(InputEvent::KeyUp { key_code });
        }

        #[wasm_bindgen]
        pub fn game_wheel(dy: f32) {
            push(InputEvent::Wheel { dy });
        }

        /// Restart and scene jumps; see the game's `custom` ids.
        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            push(InputEvent::Custom { kind, a, b, c });
        }

        // Buffers and values read by the host after each tick.

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_sound_events_ptr() -> *const u8 {
            with_runner(|r| r.sound_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sound_events_len() -> u32 {
            with_runner(|r| r.sound_events_len())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_ui_json() -> String {
            with_runner(|r| r.ui_json())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        #[wasm_bindgen]
        pub fn get_background_color() -> u32 {
            with_runner(|r| r.background_color())
        }

        // Buffer capacities, read once after init.

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_sounds() -> u32 {
            with_runner(|r| r.max_sounds())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }
    };
}
