//! Where the tool controls are presented.
//!
//! Purely presentational: nothing here touches drawing state.

/// Presentation of the tool controls for the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPresentation {
    /// Controls are always visible in a sidebar (wide viewports)
    Sidebar,
    /// Controls live in an overlay opened by an explicit toggle (narrow viewports)
    Overlay { open: bool },
}

/// Overlay menu toggle state, remembered across viewport changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Picks the presentation for a viewport width. Widths at or below the
    /// breakpoint use the overlay.
    pub fn presentation(self, viewport_width: f64, breakpoint: u32) -> MenuPresentation {
        if viewport_width <= breakpoint as f64 {
            MenuPresentation::Overlay { open: self.open }
        } else {
            MenuPresentation::Sidebar
        }
    }
}
