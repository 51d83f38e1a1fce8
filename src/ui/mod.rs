//! Text-rendered views: the status display and the placeholder screens.

pub mod screens;
pub mod status;

pub use screens::{StaticScreen, TAB_ONE, TAB_TWO};
pub use status::{StatusState, StatusView};

pub trait View {
    fn render(&self) -> String;
}
