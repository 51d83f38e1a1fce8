use super::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticScreen {
    title: &'static str,
}

pub const TAB_ONE: StaticScreen = StaticScreen::new("Tab One");
pub const TAB_TWO: StaticScreen = StaticScreen::new("Tab Two");

impl StaticScreen {
    pub const fn new(title: &'static str) -> Self {
        Self { title }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }
}

impl View for StaticScreen {
    fn render(&self) -> String {
        self.title.to_string()
    }
}
