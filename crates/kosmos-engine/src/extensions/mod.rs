// extensions/mod.rs
//
// Optional systems layered on top of Entity/Scene. Games opt in by using
// the instances held in EngineContext.

pub mod easing;
pub mod tween;
pub mod typewriter;

pub use easing::{Easing, lerp, lerp_vec2, ease, ease_vec2};
pub use tween::{TweenState, Tween, TweenId, TweenTarget, TweenLoop, TweenFinished};
pub use typewriter::Typewriter;
