// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::IcalError;
use crate::syntax::{Component, build_tree, scan_content_lines};

/// Parse iCalendar source into its root components
///
/// Roots are usually a single `VCALENDAR`, but bare `VEVENT` blocks at the top
/// level are returned as roots as well.
///
/// ## Errors
///
/// Returns the first [`IcalError::Syntax`] found while scanning content lines
/// or matching `BEGIN`/`END` pairs.
///
/// ## Examples
///
/// ```
/// # use icsagenda_ical::parse;
/// let ical_src = "\
/// BEGIN:VCALENDAR\r\n\
/// BEGIN:VEVENT\r\n\
/// SUMMARY:Test Event\r\n\
/// END:VEVENT\r\n\
/// END:VCALENDAR\r\n\
/// ";
/// let roots = parse(ical_src).unwrap();
/// assert_eq!(roots[0].children[0].find_prop("SUMMARY").unwrap().value, "Test Event");
/// ```
///
/// Unbalanced components are rejected:
///
/// ```
/// # use icsagenda_ical::parse;
/// let invalid_ical_src = "\
/// BEGIN:VCALENDAR\r\n\
/// BEGIN:VEVENT\r\n\
/// END:VCALENDAR\r\n\
/// END:VEVENT\r\n\
/// ";
/// assert!(parse(invalid_ical_src).is_err());
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(len = src.len()))]
pub fn parse(src: &str) -> Result<Vec<Component>, IcalError> {
    let lines = scan_content_lines(src)?;
    let roots = build_tree(lines)?;
    tracing::debug!(roots = roots.len(), "parsed iCalendar source");
    Ok(roots)
}
