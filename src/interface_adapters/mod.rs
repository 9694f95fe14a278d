// Interface adapters: serialized scene/world views, static file routes and
// the headless renderer.

pub mod protocol;
pub mod renderer;
pub mod static_files;
pub mod utils;
