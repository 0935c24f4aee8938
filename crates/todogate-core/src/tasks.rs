use std::collections::HashMap;

use crate::status::Status;

/// A task known by id, from the transcript ledger or an on-disk snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub subject: String,
    pub description: String,
    pub status: Status,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        subject: impl Into<String>,
        description: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            description: description.into(),
            status,
        }
    }

    /// Subject, else description. Empty when the task has neither.
    pub fn subject_or_description(&self) -> &str {
        if self.subject.is_empty() {
            &self.description
        } else {
            &self.subject
        }
    }

    /// Like [`Task::subject_or_description`], but never empty: falls back
    /// to `Task <id>`.
    pub fn display_content(&self) -> String {
        match self.subject_or_description() {
            "" => placeholder_subject(&self.id),
            text => text.to_string(),
        }
    }
}

/// Subject used when nothing better is known about a task.
pub fn placeholder_subject(id: &str) -> String {
    format!("Task {id}")
}

/// Tasks keyed by id, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskMap {
    tasks: Vec<Task>,
    index: HashMap<String, usize>,
}

impl TaskMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.index.get(id).map(|&i| &self.tasks[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Task> {
        let i = *self.index.get(id)?;
        Some(&mut self.tasks[i])
    }

    /// Insert or replace. A replaced task keeps its original position.
    pub fn insert(&mut self, task: Task) {
        match self.index.get(&task.id) {
            Some(&i) => self.tasks[i] = task,
            None => {
                self.index.insert(task.id.clone(), self.tasks.len());
                self.tasks.push(task);
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }
}

impl<'a> IntoIterator for &'a TaskMap {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

impl FromIterator<Task> for TaskMap {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut map = TaskMap::new();
        for task in iter {
            map.insert(task);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_content_falls_back() {
        let mut t = Task::new("3", "subj", "desc", Status::Pending);
        assert_eq!(t.display_content(), "subj");
        t.subject.clear();
        assert_eq!(t.display_content(), "desc");
        t.description.clear();
        assert_eq!(t.display_content(), "Task 3");
        assert_eq!(t.subject_or_description(), "");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let map: TaskMap = ["10", "2", "abc", "1"]
            .into_iter()
            .map(|id| Task::new(id, "", "", Status::Pending))
            .collect();
        let ids: Vec<&str> = map.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["10", "2", "abc", "1"]);
    }

    #[test]
    fn replace_keeps_position() {
        let mut map = TaskMap::new();
        map.insert(Task::new("a", "first", "", Status::Pending));
        map.insert(Task::new("b", "second", "", Status::Pending));
        map.insert(Task::new("a", "again", "", Status::Completed));
        assert_eq!(map.len(), 2);
        assert_eq!(map.iter().next().unwrap().subject, "again");
        assert_eq!(map.get("a").unwrap().status, Status::Completed);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut map = TaskMap::new();
        map.insert(Task::new("1", "x", "", Status::Pending));
        map.get_mut("1").unwrap().status = Status::InProgress;
        assert_eq!(map.get("1").unwrap().status, Status::InProgress);
        assert!(map.get_mut("2").is_none());
    }
}
