use crate::config::{CARD_FADE_MS, HERO_TEXT_FADE_MS, OVERLAY_TRANSITION_MS, PROGRESS_FILL_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOutCubic,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn sample(&self, elapsed_ms: f64) -> f64 {
        let t = self.easing.apply(self.progress(elapsed_ms));
        self.from + (self.to - self.from) * t
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            ..*self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Px,
    Percent,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub opacity: Tween,
    pub offset: Tween,
    pub axis: Axis,
    pub unit: Unit,
}

impl Transition {
    pub fn fade_in(offset: f64, axis: Axis, unit: Unit, duration_ms: f64) -> Self {
        Self {
            opacity: Tween::new(0.0, 1.0, duration_ms, Easing::EaseOutCubic),
            offset: Tween::new(offset, 0.0, duration_ms, Easing::EaseOutCubic),
            axis,
            unit,
        }
    }

    pub fn hero_text() -> Self {
        Self::fade_in(10.0, Axis::Y, Unit::Px, HERO_TEXT_FADE_MS)
    }

    pub fn project_card() -> Self {
        Self::fade_in(20.0, Axis::Y, Unit::Px, CARD_FADE_MS)
    }

    pub fn modal() -> Self {
        Self::fade_in(-10.0, Axis::Y, Unit::Percent, OVERLAY_TRANSITION_MS)
    }

    pub fn toast() -> Self {
        Self::fade_in(100.0, Axis::X, Unit::Percent, OVERLAY_TRANSITION_MS)
    }

    pub fn reversed(&self) -> Self {
        Self {
            opacity: self.opacity.reversed(),
            offset: self.offset.reversed(),
            ..*self
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.opacity.duration_ms.max(self.offset.duration_ms)
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms()
    }

    pub fn style(&self, elapsed_ms: f64) -> String {
        let axis = match self.axis {
            Axis::X => "X",
            Axis::Y => "Y",
        };
        format!(
            "opacity: {:.3}; transform: translate{axis}({:.2}{});",
            self.opacity.sample(elapsed_ms),
            self.offset.sample(elapsed_ms),
            self.unit.suffix(),
        )
    }
}

pub fn progress_fill(percentage: u8) -> Tween {
    Tween::new(0.0, f64::from(percentage.min(100)), PROGRESS_FILL_MS, Easing::EaseOutCubic)
}

pub fn scroll_fade(scroll_y: f64, distance: f64) -> f64 {
    if distance <= 0.0 {
        return 1.0;
    }
    (1.0 - scroll_y / distance).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(3.0), 1.0);
        }
    }

    #[test]
    fn ease_out_front_loads_motion() {
        assert!(Easing::EaseOutCubic.apply(0.5) > Easing::Linear.apply(0.5));
    }

    #[test]
    fn tween_clamps_outside_its_window() {
        let tween = Tween::new(0.0, 80.0, 1_000.0, Easing::Linear);
        assert_eq!(tween.sample(-50.0), 0.0);
        assert_eq!(tween.sample(500.0), 40.0);
        assert_eq!(tween.sample(5_000.0), 80.0);
        assert!(tween.is_done(1_000.0));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let tween = Tween::new(1.0, 0.0, 0.0, Easing::EaseOutCubic);
        assert_eq!(tween.sample(0.0), 0.0);
    }

    #[test]
    fn hero_text_settles_in_place() {
        let transition = Transition::hero_text();
        assert_eq!(transition.style(0.0), "opacity: 0.000; transform: translateY(10.00px);");
        assert_eq!(
            transition.style(HERO_TEXT_FADE_MS),
            "opacity: 1.000; transform: translateY(0.00px);"
        );
    }

    #[test]
    fn reversed_toast_slides_out() {
        let hide = Transition::toast().reversed();
        assert_eq!(hide.style(OVERLAY_TRANSITION_MS), "opacity: 0.000; transform: translateX(100.00%);");
    }

    #[test]
    fn progress_fill_caps_at_full_width() {
        assert_eq!(progress_fill(95).sample(PROGRESS_FILL_MS), 95.0);
        assert_eq!(progress_fill(250).to, 100.0);
    }

    #[test]
    fn scroll_fade_bottoms_out() {
        assert_eq!(scroll_fade(0.0, 600.0), 1.0);
        assert_eq!(scroll_fade(300.0, 600.0), 0.5);
        assert_eq!(scroll_fade(900.0, 600.0), 0.0);
    }
}
