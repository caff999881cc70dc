//! Advising session: the single owner of a course index for one program run.

use crate::domain::{CourseIndex, CourseRecord, InOrder};

/// Owns one [`CourseIndex`].
///
/// Created by whoever drives the program (a CLI command or the menu loop) and
/// passed by reference to the services that fill or query it.
#[derive(Debug, Default)]
pub struct Session {
    index: CourseIndex,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> &CourseIndex {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut CourseIndex {
        &mut self.index
    }

    /// True once at least one course has been loaded.
    pub fn is_loaded(&self) -> bool {
        !self.index.is_empty()
    }

    pub fn lookup(&self, identifier: &str) -> Option<&CourseRecord> {
        self.index.lookup(identifier)
    }

    pub fn courses(&self) -> InOrder<'_> {
        self.index.in_order()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_session_then_nothing_is_loaded() {
        let session = Session::new();
        assert!(!session.is_loaded());
        assert_eq!(session.courses().count(), 0);
        assert!(session.lookup("CS101").is_none());
    }

    #[test]
    fn given_inserted_course_then_session_is_loaded() {
        let mut session = Session::new();
        session
            .index_mut()
            .insert(CourseRecord::new("CS101", "Foundations", vec![]).unwrap());
        assert!(session.is_loaded());
        assert_eq!(session.lookup("CS101").map(|c| c.title()), Some("Foundations"));
    }
}
