use wasm_bindgen::prelude::*;
use kosmos_engine::*;

pub mod catalog;
pub mod events;
pub mod flow;
pub mod game;
pub mod placement;
pub mod scenes;
pub mod texts;

use game::Ursprung;

kosmos_web::export_game!(Ursprung, "ursprung");
