use crate::content::Project;
use crate::gallery::Gallery;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modal {
    project: Option<&'static Project>,
    gallery: Gallery,
}

impl Modal {
    pub fn project(&self) -> Option<&'static Project> {
        self.project
    }

    pub fn is_open(&self) -> bool {
        self.project.is_some()
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Shows `project`, replacing whatever was open. The gallery always starts
    /// over, including when the same project is selected again.
    pub fn open(&mut self, project: &'static Project) {
        self.project = Some(project);
        self.gallery.reset(project);
    }

    pub fn close(&mut self) {
        self.project = None;
    }

    pub fn click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop if self.is_open() => {
                self.close();
                true
            }
            _ => false,
        }
    }

    pub fn next_image(&mut self) {
        self.gallery.next();
    }

    pub fn prev_image(&mut self) {
        self.gallery.prev();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub text: String,
    pub kind: ToastKind,
    pub generation: u64,
}

/// Transient banner. A hidden toast keeps its last message so the exit
/// transition can still render it.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    window_ms: u32,
    message: Option<ToastMessage>,
    visible: bool,
    generations: u64,
}

impl Toast {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            message: None,
            visible: false,
            generations: 0,
        }
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> Option<&ToastMessage> {
        self.message.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generations
    }

    /// Returns the generation the hide timer must hand to [`Toast::expire`].
    pub fn show(&mut self, text: &str, kind: ToastKind) -> Option<u64> {
        if text.trim().is_empty() {
            return None;
        }

        self.generations += 1;
        self.message = Some(ToastMessage {
            text: text.to_string(),
            kind,
            generation: self.generations,
        });
        self.visible = true;
        Some(self.generations)
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn expire(&mut self, generation: u64) -> bool {
        let current = self.message.as_ref().map(|message| message.generation);
        if self.visible && current == Some(generation) {
            self.visible = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TOAST_VISIBLE_MS;
    use crate::content::PORTFOLIO;

    fn project(id: u32) -> &'static Project {
        PORTFOLIO.project(id).expect("project is listed")
    }

    #[test]
    fn opening_another_project_resets_gallery() {
        let mut modal = Modal::default();
        modal.open(project(2));
        modal.next_image();
        modal.next_image();
        assert_eq!(modal.gallery().index(), 2);

        modal.open(project(4));
        assert_eq!(modal.gallery().index(), 0);
        assert_eq!(modal.project().map(|p| p.id), Some(4));

        modal.open(project(2));
        assert_eq!(modal.gallery().index(), 0);
    }

    #[test]
    fn reopening_same_project_resets_gallery() {
        let mut modal = Modal::default();
        modal.open(project(2));
        modal.prev_image();
        modal.open(project(2));
        assert_eq!(modal.gallery().index(), 0);
    }

    #[test]
    fn content_click_keeps_modal_open() {
        let mut modal = Modal::default();
        modal.open(project(1));
        assert!(!modal.click(ClickTarget::Content));
        assert!(modal.is_open());
    }

    #[test]
    fn backdrop_click_closes_modal() {
        let mut modal = Modal::default();
        modal.open(project(1));
        assert!(modal.click(ClickTarget::Backdrop));
        assert!(!modal.is_open());
        assert!(!modal.click(ClickTarget::Backdrop));
    }

    #[test]
    fn gallery_navigation_leaves_carousel_alone() {
        let mut carousel = crate::cycle::Selector::new(PORTFOLIO.projects.len());
        carousel.go_next();
        carousel.go_next();
        carousel.go_next();
        let mut modal = Modal::default();
        modal.open(&PORTFOLIO.projects[carousel.index()]);
        modal.next_image();
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn toast_hides_when_its_timer_fires() {
        let mut toast = Toast::new(TOAST_VISIBLE_MS);
        assert_eq!(toast.window_ms(), 4_000);

        let generation = toast
            .show("Message Sent Successfully!", ToastKind::Success)
            .expect("non-empty message");
        assert!(toast.is_visible());

        assert!(toast.expire(generation));
        assert!(!toast.is_visible());
        assert!(!toast.expire(generation));
        assert_eq!(toast.message().map(|m| m.text.as_str()), Some("Message Sent Successfully!"));
    }

    #[test]
    fn early_dismiss_prevents_late_hide() {
        let mut toast = Toast::new(TOAST_VISIBLE_MS);
        let generation = toast
            .show("Message Sent Successfully!", ToastKind::Success)
            .expect("non-empty message");

        toast.dismiss();
        assert!(!toast.is_visible());
        assert!(!toast.expire(generation));
    }

    #[test]
    fn stale_timer_cannot_hide_newer_toast() {
        let mut toast = Toast::new(TOAST_VISIBLE_MS);
        let first = toast.show("first", ToastKind::Success).expect("shown");
        let second = toast.show("second", ToastKind::Success).expect("shown");

        assert!(!toast.expire(first));
        assert!(toast.is_visible());
        assert!(toast.expire(second));
    }

    #[test]
    fn blank_message_is_refused() {
        let mut toast = Toast::new(TOAST_VISIBLE_MS);
        assert_eq!(toast.show("   ", ToastKind::Success), None);
        assert!(!toast.is_visible());
        assert!(toast.message().is_none());
    }
}
