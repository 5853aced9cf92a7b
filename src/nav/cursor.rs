pub const GROW_CLASS: &str = "grow";
pub const INTERACTIVE_SELECTOR: &str = "a, button";

/// Position and size of the custom cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub grow: bool,
}

impl CursorState {
    pub fn moved(self, client_x: f64, client_y: f64) -> Self {
        Self {
            x: client_x,
            y: client_y,
            ..self
        }
    }

    pub fn entered_interactive(self) -> Self {
        Self { grow: true, ..self }
    }

    pub fn left_interactive(self) -> Self {
        Self { grow: false, ..self }
    }

    pub fn left_px(&self) -> String {
        format!("{}px", self.x)
    }

    pub fn top_px(&self) -> String {
        format!("{}px", self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_the_latest_pointer_position() {
        let cursor = CursorState::default().moved(10.0, 20.0).moved(315.0, 42.0);
        assert_eq!(cursor.left_px(), "315px");
        assert_eq!(cursor.top_px(), "42px");
    }

    #[test]
    fn grow_survives_movement_until_leave() {
        let cursor = CursorState::default().entered_interactive().moved(5.0, 5.0);
        assert!(cursor.grow);
        assert!(!cursor.left_interactive().grow);
    }

    #[test]
    fn hovering_between_links_ends_small() {
        let cursor = CursorState::default()
            .entered_interactive()
            .entered_interactive()
            .moved(40.0, 60.0)
            .left_interactive();
        assert!(!cursor.grow);
        assert!(cursor.entered_interactive().grow);
    }
}
