pub mod app;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod interaction;
pub mod palette;
pub mod physics;
pub mod ring;

pub use app::*;
pub use config::*;
pub use constants::*;
pub use geometry::*;
pub use interaction::*;
pub use palette::*;
pub use physics::*;
pub use ring::*;

// Fan shader shared by the web and native frontends
pub static FAN_WGSL: &str = include_str!("../shaders/fan.wgsl");
