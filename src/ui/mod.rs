pub mod app;
pub mod components;
pub mod forms;
pub mod selection;
pub mod state;

pub use app::ConsoleApp;
