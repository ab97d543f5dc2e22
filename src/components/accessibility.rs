//! Accessibility Tree
//!
//! GPUI does not expose an accessibility API, so components describe the
//! structure assistive technology should see as a plain value. Hosts that
//! bridge to a platform accessibility layer walk this tree.

use gpui::SharedString;

/// Role of an accessible node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Container traversed as a single unit that still contains its children
    Group,
    /// Section heading
    Heading,
    /// Decorative separator, skipped by screen readers
    Separator,
    /// Caller supplied content, opaque to the toolkit
    Content,
    /// Activatable control
    Button,
}

/// One node of the accessibility tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessNode {
    pub role: Role,
    pub label: Option<SharedString>,
    pub children: Vec<AccessNode>,
}

impl AccessNode {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            children: Vec::new(),
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn child(mut self, child: AccessNode) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first search for the first node with `role`
    pub fn find(&self, role: Role) -> Option<&AccessNode> {
        if self.role == role {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(role))
    }

    /// Count of nodes with `role` in this subtree
    pub fn count(&self, role: Role) -> usize {
        let own = usize::from(self.role == role);
        own + self.children.iter().map(|child| child.count(role)).sum::<usize>()
    }
}
