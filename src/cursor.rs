use crate::theme::Theme;

const GLOW_SIZE_PX: u32 = 16;
const GLOW_OPACITY: f64 = 0.4;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorGlow {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

impl CursorGlow {
    pub fn moved(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn entered(&mut self) {
        self.visible = true;
    }

    pub fn left(&mut self) {
        self.visible = false;
    }

    pub fn style(&self, theme: Theme) -> Option<String> {
        if !self.visible {
            return None;
        }
        Some(format!(
            "left: {:.0}px; top: {:.0}px; width: {GLOW_SIZE_PX}px; height: {GLOW_SIZE_PX}px; \
             opacity: {GLOW_OPACITY}; background-color: {}; box-shadow: {};",
            self.x,
            self.y,
            theme.glow_color(),
            theme.glow_shadow(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_pointer_enters() {
        let mut glow = CursorGlow::default();
        glow.moved(10.0, 20.0);
        assert_eq!(glow.style(Theme::Dark), None);

        glow.entered();
        let style = glow.style(Theme::Dark).expect("visible after enter");
        assert!(style.starts_with("left: 10px; top: 20px;"));
        assert!(style.contains("rgba(99, 102, 241, 0.8)"));
    }

    #[test]
    fn leaving_hides_and_keeps_position() {
        let mut glow = CursorGlow::default();
        glow.entered();
        glow.moved(5.0, 6.0);
        glow.left();
        assert!(glow.style(Theme::Light).is_none());

        glow.entered();
        let style = glow.style(Theme::Light).expect("visible again");
        assert!(style.contains("left: 5px"));
        assert!(style.contains("rgba(255, 165, 0, 0.7)"));
    }
}
