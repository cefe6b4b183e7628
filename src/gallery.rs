use crate::content::Project;
use crate::cycle::{wrap_next, wrap_prev};

/// Screenshot index inside the project detail view. Independent of the
/// carousel position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gallery {
    index: usize,
    count: usize,
}

impl Gallery {
    pub fn for_project(project: &Project) -> Self {
        Self {
            index: 0,
            count: project.gallery.len(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn next(&mut self) {
        if self.count > 0 {
            self.index = wrap_next(self.index, self.count);
        }
    }

    pub fn prev(&mut self) {
        if self.count > 0 {
            self.index = wrap_prev(self.index, self.count);
        }
    }

    pub fn reset(&mut self, project: &Project) {
        *self = Self::for_project(project);
    }

    pub fn current<'a>(&self, project: &'a Project) -> Option<&'a str> {
        project.gallery.get(self.index).copied()
    }

    pub fn caption(&self, project: &Project) -> String {
        format!("{} Screenshot {}", project.title, self.index + 1)
    }
}
