// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Tree builder for constructing component hierarchy from content lines.
//!
//! ```text
//! Content Lines → Tree Builder → Component Tree
//! ```
//!
//! The tree builder uses a stack-based algorithm:
//! 1. On BEGIN:X, push a new component onto the stack
//! 2. On property, add to the current component (top of stack)
//! 3. On END:X, pop from stack and add to parent component

use crate::error::IcalError;
use crate::keyword::{KW_BEGIN, KW_END};
use crate::syntax::scanner::ContentLine;

/// A parsed iCalendar component (e.g., VCALENDAR, VEVENT)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Component name, upper-cased (e.g., "VCALENDAR", "VEVENT")
    pub name: String,
    /// Properties in source order
    pub properties: Vec<ContentLine>,
    /// Nested child components
    pub children: Vec<Component>,
    /// Line number of the `BEGIN` line
    pub line: usize,
}

impl Component {
    fn new(name: &str, line: usize) -> Self {
        Self {
            name: name.trim().to_ascii_uppercase(),
            properties: Vec::new(),
            children: Vec::new(),
            line,
        }
    }

    /// First property called `name`, compared case-insensitively.
    #[must_use]
    pub fn find_prop(&self, name: &str) -> Option<&ContentLine> {
        self.properties
            .iter()
            .find(|prop| prop.name.eq_ignore_ascii_case(name))
    }

    /// All properties called `name`, in source order.
    pub fn find_props<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ContentLine> {
        self.properties
            .iter()
            .filter(move |prop| prop.name.eq_ignore_ascii_case(name))
    }

    /// Child components called `name`, in source order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Component> {
        self.children
            .iter()
            .filter(move |child| child.name.eq_ignore_ascii_case(name))
    }
}

/// Build a component tree from scanned content lines.
///
/// ## Errors
///
/// Returns [`IcalError::Syntax`] on the first structural problem: an `END`
/// without a matching `BEGIN`, a `BEGIN` that is never closed, mismatched
/// names, or a property outside of any component.
pub fn build_tree(lines: Vec<ContentLine>) -> Result<Vec<Component>, IcalError> {
    let mut stack: Vec<Component> = Vec::new();
    let mut roots: Vec<Component> = Vec::new();

    for line in lines {
        if line.name == KW_BEGIN {
            stack.push(Component::new(&line.value, line.line));
        } else if line.name == KW_END {
            let Some(component) = stack.pop() else {
                return Err(IcalError::syntax(
                    line.line,
                    format!("END:{} without matching BEGIN", line.value.trim()),
                ));
            };
            if !component.name.eq_ignore_ascii_case(line.value.trim()) {
                return Err(IcalError::syntax(
                    line.line,
                    format!(
                        "expected END:{}, found END:{}",
                        component.name,
                        line.value.trim()
                    ),
                ));
            }

            match stack.last_mut() {
                Some(parent) => parent.children.push(component),
                None => roots.push(component),
            }
        } else if let Some(current) = stack.last_mut() {
            current.properties.push(line);
        } else {
            return Err(IcalError::syntax(
                line.line,
                format!("property {} outside of any component", line.name),
            ));
        }
    }

    if let Some(component) = stack.pop() {
        return Err(IcalError::syntax(
            component.line,
            format!("BEGIN:{} is never closed", component.name),
        ));
    }

    Ok(roots)
}
