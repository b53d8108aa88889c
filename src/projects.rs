//! Project selector state

use crate::types::Project;

/// Static project list plus the current selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSelector {
    projects: Vec<Project>,
    selected: Option<usize>,
}

impl ProjectSelector {
    /// Selects the first project, if there is one
    pub fn new(projects: Vec<Project>) -> Self {
        let selected = (!projects.is_empty()).then_some(0);
        Self { projects, selected }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn selected(&self) -> Option<&Project> {
        self.selected.and_then(|i| self.projects.get(i))
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected().map(|p| p.id.as_str())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Select by id. Unknown ids leave the selection alone; returns whether
    /// the selection changed.
    pub fn select(&mut self, id: &str) -> bool {
        match self.projects.iter().position(|p| p.id == id) {
            Some(idx) if Some(idx) != self.selected => {
                self.selected = Some(idx);
                true
            }
            _ => false,
        }
    }

    pub fn cycle_next(&mut self) -> Option<&Project> {
        self.cycle(1)
    }

    pub fn cycle_prev(&mut self) -> Option<&Project> {
        self.cycle(self.projects.len().saturating_sub(1))
    }

    fn cycle(&mut self, step: usize) -> Option<&Project> {
        if self.projects.is_empty() {
            return None;
        }
        let len = self.projects.len();
        let next = match self.selected {
            Some(i) => (i + step) % len,
            None => 0,
        };
        self.selected = Some(next);
        self.projects.get(next)
    }
}
