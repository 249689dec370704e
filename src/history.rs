//! Address-bar collaborators: where the encoded search state is written.

use std::cell::RefCell;
use std::fmt::{Display, Formatter};

/// Path plus query string, e.g. `/properties?page=2&resultsPerPage=20`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    /// Encoded query string without the leading `?`.
    pub query: String,
}

impl Location {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: query.into(),
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.query.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query)
        }
    }
}

/// Browser-history style navigation.
pub trait History {
    /// Adds a new entry.
    fn push(&self, location: &Location);
    /// Overwrites the current entry.
    fn replace(&self, location: &Location);
}

impl<H: History + ?Sized> History for &H {
    fn push(&self, location: &Location) {
        (**self).push(location)
    }

    fn replace(&self, location: &Location) {
        (**self).replace(location)
    }
}

/// History kept in memory, for hosts without an address bar.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: RefCell<Vec<Location>>,
}

impl MemoryHistory {
    /// History whose only entry is `initial`.
    pub fn starting_at(initial: Location) -> Self {
        Self {
            entries: RefCell::new(vec![initial]),
        }
    }

    pub fn current(&self) -> Option<Location> {
        self.entries.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn entries(&self) -> Vec<Location> {
        self.entries.borrow().clone()
    }
}

impl History for MemoryHistory {
    fn push(&self, location: &Location) {
        self.entries.borrow_mut().push(location.clone());
    }

    fn replace(&self, location: &Location) {
        let mut entries = self.entries.borrow_mut();
        match entries.last_mut() {
            Some(last) => *last = location.clone(),
            None => entries.push(location.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_overwrites_only_the_last_entry() {
        let history = MemoryHistory::starting_at(Location::new("/", ""));
        history.push(&Location::new("/properties", "page=1"));
        history.replace(&Location::new("/properties", "page=2"));

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.current().map(|l| l.to_string()),
            Some("/properties?page=2".to_string())
        );
    }

    #[test]
    fn replace_on_empty_history_adds_an_entry() {
        let history = MemoryHistory::default();
        history.replace(&Location::new("/messages", ""));

        assert_eq!(history.entries(), vec![Location::new("/messages", "")]);
    }
}
