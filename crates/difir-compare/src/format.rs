// SPDX-License-Identifier: MIT OR Apache-2.0
//! Rendering differences for human consumption.

use std::fmt::Display;

use difir_core::diff::{Difference, Side};

/// Renders one difference record as text.
pub trait DiffFormat<N> {
    /// Produces the rendering of `difference`.
    fn format(&self, difference: &Difference<'_, N>) -> String;
}

/// Two-line rendering: a side description, then `path: value`.
///
/// Absent nodes render with an empty value. The side descriptions can be
/// replaced wholesale for localized or tooling-specific output.
#[derive(Debug, Clone)]
pub struct SimpleDiffFormat {
    /// Description line for [`Side::Left`] records.
    pub left_label: String,
    /// Description line for [`Side::Right`] records.
    pub right_label: String,
}

impl Default for SimpleDiffFormat {
    fn default() -> Self {
        Self {
            left_label: "[+] extra on the left / missing on the right".to_owned(),
            right_label: "[-] missing on the left / extra on the right".to_owned(),
        }
    }
}

impl<N: Display> DiffFormat<N> for SimpleDiffFormat {
    fn format(&self, difference: &Difference<'_, N>) -> String {
        let label = match difference.side() {
            Side::Left => &self.left_label,
            Side::Right => &self.right_label,
        };
        difference.node().map_or_else(
            || format!("{label}\n{}: ", difference.path()),
            |node| format!("{label}\n{}: {node}", difference.path()),
        )
    }
}

/// Formats a whole difference stream, one string per record.
pub fn format_all<'a, N, F, I>(differences: I, format: &'a F) -> impl Iterator<Item = String> + 'a
where
    N: 'a,
    F: DiffFormat<N>,
    I: IntoIterator<Item = Difference<'a, N>>,
    I::IntoIter: 'a,
{
    differences
        .into_iter()
        .map(move |difference| format.format(&difference))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_side_label_path_and_value() {
        let node = 7u8;
        let format = SimpleDiffFormat::default();
        let difference = Difference::new("$.n".to_owned(), Side::Left, Some(&node));
        assert_eq!(
            format.format(&difference),
            "[+] extra on the left / missing on the right\n$.n: 7"
        );
    }

    #[test]
    fn absent_nodes_render_empty() {
        let format = SimpleDiffFormat {
            left_label: "L".to_owned(),
            right_label: "R".to_owned(),
        };
        let difference: Difference<'_, u8> = Difference::new("$[2]".to_owned(), Side::Right, None);
        assert_eq!(format.format(&difference), "R\n$[2]: ");
    }

    #[test]
    fn formats_whole_streams() {
        let node = 1u8;
        let format = SimpleDiffFormat {
            left_label: "L".to_owned(),
            right_label: "R".to_owned(),
        };
        let stream = vec![
            Difference::new("$".to_owned(), Side::Left, Some(&node)),
            Difference::new("$".to_owned(), Side::Right, None),
        ];
        let rendered: Vec<_> = format_all(stream, &format).collect();
        assert_eq!(rendered, vec!["L\n$: 1".to_owned(), "R\n$: ".to_owned()]);
    }
}
