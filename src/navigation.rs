//! Top navigation — static entry table plus the hover dropdown state.
//!
//! At most one dropdown is open at a time. Entering an entry that has
//! sub-items opens it; leaving always closes whatever is open. Entries are
//! keyed by their label.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PortalError, PortalResult};

/// Named no-op bound to a sub-item or button that has nowhere to go yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceholderAction(String);

impl PlaceholderAction {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Invoke a placeholder. Does nothing beyond producing the notice shown to
/// the user.
pub fn invoke_placeholder(label: &str, action: Option<&PlaceholderAction>) -> String {
    debug!(
        label,
        action = action.map(PlaceholderAction::name).unwrap_or("none"),
        "placeholder action invoked"
    );
    format!("{label} is not available yet")
}

/// One line in a dropdown. A `path` makes it a link; otherwise it triggers
/// `action` (which may itself be absent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<PlaceholderAction>,
}

impl SubItem {
    pub fn link(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: Some(path.into()),
            action: None,
        }
    }

    pub fn placeholder(label: impl Into<String>, action: &str) -> Self {
        Self {
            label: label.into(),
            path: None,
            action: Some(PlaceholderAction::new(action)),
        }
    }

    pub fn is_link(&self) -> bool {
        self.path.is_some()
    }

    pub fn target(&self) -> NavTarget {
        match &self.path {
            Some(path) => NavTarget::Link(path.clone()),
            None => NavTarget::Action {
                label: self.label.clone(),
                action: self.action.clone(),
            },
        }
    }
}

/// What activating a sub-item resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Link(String),
    Action {
        label: String,
        action: Option<PlaceholderAction>,
    },
}

/// A top-level navigation label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub path: String,
    #[serde(default)]
    pub sub_items: Vec<SubItem>,
}

impl NavEntry {
    pub fn has_sub_items(&self) -> bool {
        !self.sub_items.is_empty()
    }
}

/// Check a navigation table: labels non-empty and unique, paths absolute.
pub fn validate_entries(entries: &[NavEntry]) -> PortalResult<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.label.trim().is_empty() {
            return Err(PortalError::EmptyNavLabel);
        }
        if !seen.insert(entry.label.as_str()) {
            return Err(PortalError::DuplicateNavEntry(entry.label.clone()));
        }
        check_path(&entry.label, &entry.path)?;
        for sub in &entry.sub_items {
            if sub.label.trim().is_empty() {
                return Err(PortalError::EmptyNavLabel);
            }
            if let Some(path) = &sub.path {
                check_path(&format!("{} > {}", entry.label, sub.label), path)?;
            }
        }
    }
    Ok(())
}

fn check_path(owner: &str, path: &str) -> PortalResult<()> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(PortalError::InvalidPath {
            owner: owner.to_string(),
            path: path.to_string(),
        })
    }
}

/// Dropdown navigation controller.
#[derive(Debug, Clone)]
pub struct DropdownNav {
    entries: Vec<NavEntry>,
    open_key: Option<String>,
}

impl DropdownNav {
    pub fn new(entries: Vec<NavEntry>) -> PortalResult<Self> {
        validate_entries(&entries)?;
        Ok(Self {
            entries,
            open_key: None,
        })
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn entry(&self, key: &str) -> Option<&NavEntry> {
        self.entries.iter().find(|e| e.label == key)
    }

    pub fn open_key(&self) -> Option<&str> {
        self.open_key.as_deref()
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.open_key.as_deref() == Some(key)
    }

    pub fn open_entry(&self) -> Option<&NavEntry> {
        self.open_key.as_deref().and_then(|k| self.entry(k))
    }

    /// Pointer entered `key`. Opens its dropdown if it has sub-items.
    pub fn on_enter(&mut self, key: &str) {
        if self.entry(key).is_some_and(NavEntry::has_sub_items) {
            self.open_key = Some(key.to_string());
        }
    }

    /// Pointer left. Closes any open dropdown.
    pub fn on_leave(&mut self) {
        self.open_key = None;
    }

    /// Resolve a click on sub-item `index` of entry `key`.
    pub fn activate(&self, key: &str, index: usize) -> Option<NavTarget> {
        self.entry(key)?.sub_items.get(index).map(SubItem::target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<NavEntry> {
        vec![
            NavEntry {
                label: "Academics".into(),
                path: "/academics".into(),
                sub_items: vec![
                    SubItem::link("Grades", "/academics/grades"),
                    SubItem::link("Classes", "/academics/classes"),
                    SubItem::link("Degree", "/academics/degree"),
                    SubItem {
                        label: "Graduation".into(),
                        path: None,
                        action: None,
                    },
                ],
            },
            NavEntry {
                label: "Registration".into(),
                path: "/registration".into(),
                sub_items: vec![
                    SubItem::placeholder("Register for Classes", "register-for-classes"),
                    SubItem::placeholder("View Schedule", "view-schedule"),
                    SubItem::placeholder("Plan Ahead", "plan-ahead"),
                    SubItem::placeholder("Course Catalog", "course-catalog"),
                    SubItem::placeholder("Registration Timeline", "registration-timeline"),
                ],
            },
            NavEntry {
                label: "Help".into(),
                path: "/help".into(),
                sub_items: vec![],
            },
        ]
    }

    fn nav() -> DropdownNav {
        DropdownNav::new(table()).unwrap()
    }

    #[test]
    fn starts_closed() {
        assert_eq!(nav().open_key(), None);
    }

    #[test]
    fn enter_item_with_sub_items_opens_it() {
        let mut nav = nav();
        nav.on_enter("Academics");
        assert_eq!(nav.open_key(), Some("Academics"));
        assert!(nav.is_open("Academics"));
        assert_eq!(nav.open_entry().unwrap().sub_items.len(), 4);
    }

    #[test]
    fn enter_item_without_sub_items_is_noop() {
        let mut nav = nav();
        nav.on_enter("Help");
        assert_eq!(nav.open_key(), None);

        nav.on_enter("Academics");
        nav.on_enter("Help");
        assert_eq!(nav.open_key(), Some("Academics"));
    }

    #[test]
    fn enter_unknown_item_is_noop() {
        let mut nav = nav();
        nav.on_enter("Nope");
        assert_eq!(nav.open_key(), None);
    }

    #[test]
    fn leave_always_clears() {
        let mut nav = nav();
        nav.on_leave();
        assert_eq!(nav.open_key(), None);
        for key in ["Academics", "Registration"] {
            nav.on_enter(key);
            nav.on_leave();
            assert_eq!(nav.open_key(), None);
        }
    }

    #[test]
    fn academics_registration_scenario() {
        let mut nav = nav();
        nav.on_enter("Academics");
        assert_eq!(nav.open_key(), Some("Academics"));
        nav.on_enter("Registration");
        assert_eq!(nav.open_key(), Some("Registration"));
        nav.on_leave();
        assert_eq!(nav.open_key(), None);
    }

    #[test]
    fn activate_resolves_links_and_actions() {
        let nav = nav();
        assert_eq!(
            nav.activate("Academics", 0),
            Some(NavTarget::Link("/academics/grades".into()))
        );
        assert_eq!(
            nav.activate("Registration", 1),
            Some(NavTarget::Action {
                label: "View Schedule".into(),
                action: Some(PlaceholderAction::new("view-schedule")),
            })
        );
        assert_eq!(
            nav.activate("Academics", 3),
            Some(NavTarget::Action {
                label: "Graduation".into(),
                action: None,
            })
        );
        assert_eq!(nav.activate("Academics", 9), None);
        assert_eq!(nav.activate("Nope", 0), None);
    }

    #[test]
    fn path_wins_over_action() {
        let sub = SubItem {
            label: "Both".into(),
            path: Some("/x".into()),
            action: Some(PlaceholderAction::new("ignored")),
        };
        assert_eq!(sub.target(), NavTarget::Link("/x".into()));
    }

    #[test]
    fn placeholder_notice_names_the_item() {
        let notice = invoke_placeholder("Financial Aid", None);
        assert_eq!(notice, "Financial Aid is not available yet");
    }

    #[test]
    fn rejects_duplicate_labels() {
        let mut entries = table();
        entries.push(entries[0].clone());
        let err = DropdownNav::new(entries).unwrap_err();
        assert!(matches!(err, PortalError::DuplicateNavEntry(l) if l == "Academics"));
    }

    #[test]
    fn rejects_relative_paths() {
        let mut entries = table();
        entries[0].sub_items[0].path = Some("grades".into());
        let err = DropdownNav::new(entries).unwrap_err();
        assert!(matches!(err, PortalError::InvalidPath { path, .. } if path == "grades"));
    }

    #[test]
    fn rejects_empty_label() {
        let mut entries = table();
        entries[1].label = "  ".into();
        assert!(matches!(
            DropdownNav::new(entries).unwrap_err(),
            PortalError::EmptyNavLabel
        ));
    }
}
