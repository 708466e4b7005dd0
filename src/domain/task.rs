/// A single checklist item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique within the session
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Ordered checklist, most recently added first
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a task. Whitespace-only text is ignored.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        if text.trim().is_empty() {
            return None;
        }

        self.next_id += 1;
        let id = self.next_id;
        self.tasks.insert(
            0,
            Task {
                id,
                text: text.to_string(),
                completed: false,
            },
        );
        Some(id)
    }

    /// Flip completion of the task with `id`
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Delete the task with `id`
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn id_at(&self, index: usize) -> Option<u64> {
        self.tasks.get(index).map(|t| t.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_prepends_incomplete_task() {
        let mut list = TaskList::new();
        list.add("First");
        let id = list.add("Second").unwrap();

        assert_eq!(list.len(), 2);
        let first = list.iter().next().unwrap();
        assert_eq!(first.id, id);
        assert_eq!(first.text, "Second");
        assert!(!first.completed);
    }

    #[test]
    fn test_add_keeps_text_as_typed() {
        let mut list = TaskList::new();
        let id = list.add("  padded ").unwrap();
        assert_eq!(list.get(id).unwrap().text, "  padded ");
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut list = TaskList::new();
        list.add("Keep");

        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   "), None);
        assert_eq!(list.add("\t\n"), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut list = TaskList::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        list.remove(b);
        let c = list.add("c").unwrap();

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut list = TaskList::new();
        let id = list.add("Write report").unwrap();

        assert!(list.toggle(id));
        assert!(list.get(id).unwrap().completed);
        assert!(list.toggle(id));
        assert!(!list.get(id).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = TaskList::new();
        list.add("Only");
        assert!(!list.toggle(999));
        assert_eq!(list.completed_count(), 0);
    }

    #[test]
    fn test_remove() {
        let mut list = TaskList::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();

        assert!(list.remove(a));
        assert_eq!(list.len(), 1);
        assert_eq!(list.id_at(0), Some(b));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = TaskList::new();
        list.add("a");
        let before: Vec<Task> = list.iter().cloned().collect();

        assert!(!list.remove(42));
        let after: Vec<Task> = list.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_completed_count() {
        let mut list = TaskList::new();
        let a = list.add("a").unwrap();
        list.add("b");
        list.toggle(a);
        assert_eq!(list.completed_count(), 1);
    }
}
