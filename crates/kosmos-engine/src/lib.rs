pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod extensions;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, Signal};
pub use api::types::{EntityId, SoundEvent, GameEvent};
pub use assets::manifest::AssetManifest;
pub use assets::registry::SpriteRegistry;
pub use components::animation::{AnimationComponent, AnimationDef};
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::sprite::{SpriteComponent, AtlasId};
pub use components::text::{TextComponent, TextAlign};
pub use core::geometry::Rect;
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use core::timer::{TimerQueue, TimerId};
pub use input::drag::{DragEvent, DragTracker};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use systems::animation::tick_animations;
pub use systems::render::build_render_buffer;
pub use systems::text::{build_ui_frame, ui_json, UiFrame, TextInstance};

// Extensions
pub use extensions::{
    Easing, lerp, lerp_vec2, ease, ease_vec2,
    TweenState, Tween, TweenId, TweenTarget, TweenLoop, TweenFinished,
    Typewriter,
};
