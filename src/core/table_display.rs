// src/core/table_display.rs

use crate::models::ApplicationState;
use colored::Colorize;

/// A minimal column-aligned table. The header is rendered green and
/// underlined, the first column yellow.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given column headers.
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Rows may be shorter or longer than the header.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }

    /// Renders the table to a string. Cells are padded before they are
    /// colored so escape codes never skew the alignment.
    pub fn render(&self, use_colors: bool) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        let header_cells: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| {
                let padded = format!("{:<width$}", header, width = *width);
                if use_colors {
                    padded.green().underline().to_string()
                } else {
                    padded
                }
            })
            .collect();
        out.push_str(header_cells.join("  ").trim_end());
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (cell, width))| {
                    let padded = format!("{:<width$}", cell, width = *width);
                    if use_colors && i == 0 {
                        padded.yellow().to_string()
                    } else {
                        padded
                    }
                })
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }
        out
    }

    /// Prints the table to stdout. An empty table prints nothing.
    pub fn print(&self) {
        if self.is_empty() {
            return;
        }
        let use_colors = colored::control::SHOULD_COLORIZE.should_colorize();
        print!("{}", self.render(use_colors));
    }
}

// Every listing iterates the state's ordered maps, so rows come out sorted by name.

/// Builds the `command list` table.
pub fn commands_table(state: &ApplicationState) -> Table {
    let mut table = Table::new(&["Name", "Command", "Description"]);
    for (name, command) in &state.commands {
        let mut command_line = vec![command.binary_path.clone()];
        command_line.extend(command.arguments.iter().cloned());
        table.add_row(vec![
            name.clone(),
            command_line.join(" "),
            command.description.clone(),
        ]);
    }
    table
}

/// Builds the `config list` table.
pub fn configurations_table(state: &ApplicationState) -> Table {
    let mut table = Table::new(&["Name", "Path", "Description"]);
    for (name, configuration) in &state.configurations {
        table.add_row(vec![
            name.clone(),
            configuration.directory_path.clone(),
            configuration.description.clone(),
        ]);
    }
    table
}

/// Builds the `environment list` table. The active environment is marked `(*)`.
pub fn environments_table(state: &ApplicationState) -> Table {
    let mut table = Table::new(&["Name", "Command", "Config", "Description"]);
    for (name, environment) in &state.environments {
        let label = if *name == state.active_context {
            format!("{} (*)", name)
        } else {
            name.clone()
        };
        table.add_row(vec![
            label,
            environment.command_name.clone(),
            environment.configuration_name.clone(),
            environment.description.clone(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state_manager;

    #[test]
    fn test_render_aligns_columns() {
        let mut table = Table::new(&["Name", "Path"]);
        table.add_row(vec!["default".to_string(), "/home/u/.emacs.d".to_string()]);
        table.add_row(vec!["x".to_string(), "/x".to_string()]);

        let rendered = table.render(false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Name     Path",
                "default  /home/u/.emacs.d",
                "x        /x",
            ]
        );
    }

    #[test]
    fn test_listings_are_sorted_by_name() {
        let mut state = ApplicationState::with_defaults("/cfg");
        state_manager::add_command(&mut state, "zeta", "emacs", Vec::new(), "").unwrap();
        state_manager::add_command(&mut state, "alpha", "emacs", vec!["-nw".to_string()], "")
            .unwrap();

        let rendered = commands_table(&state).render(false);
        let names: Vec<&str> = rendered
            .lines()
            .skip(1)
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(names, vec!["alpha", "default", "zeta"]);
        assert!(rendered.contains("emacs -nw"));
    }

    #[test]
    fn test_active_environment_is_marked() {
        let state = ApplicationState::with_defaults("/cfg");
        let rendered = environments_table(&state).render(false);
        assert!(rendered.contains("default (*)"));
    }

    #[test]
    fn test_empty_namespace_has_no_rows() {
        let state = ApplicationState::default();
        assert!(configurations_table(&state).is_empty());
    }
}
