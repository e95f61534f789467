mod analysis;
mod audio;
mod component;
mod config;
mod error;
mod geometry;
mod graph;
mod history;
mod layout;
mod render;
mod setup;
mod shapes;
mod state;
mod tool;
mod types;

pub use component::SandboxCanvas;
