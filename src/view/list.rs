use crate::error::TaskdeckError;
use crate::models::{Priority, Task, TaskId};

/// In-memory view over the task collection: the full set as last loaded,
/// plus the derived filtered/paginated slice actually displayed.
///
/// The one invariant worth stating: filtering and pagination are always
/// recomputed together, and the page index never survives past the new page
/// count. Every state change that touches `filtered` resets the page to 1.
pub struct TaskListViewModel {
    all_tasks: Vec<Task>,
    filtered: Vec<Task>,
    search_term: String,
    priority_filter: Option<Priority>,
    current_page: usize,
    page_size: usize,
    editing: Option<TaskId>,
    load_seq: u64,
}

impl TaskListViewModel {
    /// `page_size` must be positive; this is a programming contract, not
    /// user input.
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0, "page_size must be positive");
        Self {
            all_tasks: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            priority_filter: None,
            current_page: 1,
            page_size,
            editing: None,
            load_seq: 0,
        }
    }

    /// Replace the full task set with a freshly loaded one. Order is kept
    /// as delivered. The current filter is re-applied and the page resets
    /// to 1.
    pub fn set_all_tasks(&mut self, tasks: Vec<Task>) {
        self.all_tasks = tasks;
        self.refilter();
    }

    /// Tag a load about to start. The returned ticket must be handed back
    /// to [`complete_load`](Self::complete_load).
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.load_seq
    }

    /// Apply a finished load. A completion that is not the most recently
    /// issued one lost the race to a newer load and is discarded; returns
    /// whether the tasks were applied.
    pub fn complete_load(&mut self, ticket: u64, tasks: Vec<Task>) -> bool {
        if ticket != self.load_seq {
            return false;
        }
        self.set_all_tasks(tasks);
        true
    }

    /// Recompute the filtered subsequence: tasks whose title or description
    /// contains `search_term` (case-insensitive; empty term matches all) and
    /// whose priority equals `priority_filter` when one is set. Order is
    /// preserved from the full set; the page resets to 1.
    pub fn apply_filter(&mut self, search_term: &str, priority_filter: Option<Priority>) {
        self.search_term = search_term.to_lowercase();
        self.priority_filter = priority_filter;
        self.refilter();
    }

    fn refilter(&mut self) {
        let term = self.search_term.as_str();
        let priority = self.priority_filter;
        self.filtered = self
            .all_tasks
            .iter()
            .filter(|t| {
                let matches_search = term.is_empty()
                    || t.title.to_lowercase().contains(term)
                    || t.description.to_lowercase().contains(term);
                let matches_priority = priority.map_or(true, |p| t.priority == p);
                matches_search && matches_priority
            })
            .cloned()
            .collect();
        self.current_page = 1;
    }

    /// Number of pages in the filtered view; 0 when nothing matched.
    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    /// Move to `page` (1-based). Out-of-range pages are rejected, not
    /// clamped, so boundary behavior stays observable.
    pub fn set_page(&mut self, page: usize) -> Result<(), TaskdeckError> {
        if page < 1 || page > self.page_count().max(1) {
            return Err(TaskdeckError::invalid_page(page, self.page_count()));
        }
        self.current_page = page;
        Ok(())
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn all_tasks(&self) -> &[Task] {
        &self.all_tasks
    }

    /// The slice of the filtered view on the current page; empty when
    /// nothing matched.
    pub fn current_page_items(&self) -> &[Task] {
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.filtered.len());
        if start >= self.filtered.len() {
            return &[];
        }
        &self.filtered[start..end]
    }

    /// Look up a task for editing. On success the task is remembered as the
    /// edit target and returned for pre-filling the edit form.
    pub fn begin_edit(&mut self, id: &TaskId) -> Result<&Task, TaskdeckError> {
        match self.all_tasks.iter().position(|t| &t.id == id) {
            Some(idx) => {
                self.editing = Some(id.clone());
                Ok(&self.all_tasks[idx])
            }
            None => Err(TaskdeckError::task_not_found(id.as_str())),
        }
    }

    /// Enter create mode (no edit target).
    pub fn begin_create(&mut self) {
        self.editing = None;
    }

    /// The task under edit, resolved fresh from the full set so a reload
    /// mid-edit hands back the latest copy. If the id vanished in a reload,
    /// the edit target is cleared.
    pub fn editing(&mut self) -> Option<&Task> {
        let id = self.editing.clone()?;
        match self.all_tasks.iter().position(|t| t.id == id) {
            Some(idx) => Some(&self.all_tasks[idx]),
            None => {
                self.editing = None;
                None
            }
        }
    }
}
