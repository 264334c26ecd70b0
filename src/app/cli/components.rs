//! Components command implementation.

use std::io;
use std::path::Path;

use clap::Subcommand;

use crate::app::api::{self, ListOptions};
use crate::domain::{AppError, ComponentListing, LocalListing};

const UPDATE_HINT: &str = "Updates are available for some components.";

#[derive(Subcommand)]
pub enum ComponentsCommands {
    /// List catalog components and their installation status
    #[clap(visible_alias = "ls")]
    List {
        /// Include installed and latest version columns
        #[arg(long)]
        show_versions: bool,
        /// Only list installed components without contacting the catalog
        #[arg(long, conflicts_with = "refresh")]
        only_local_state: bool,
        /// Fetch the catalog even when a fresh cached copy exists
        #[arg(long)]
        refresh: bool,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub fn run_components(root: &Path, command: ComponentsCommands) -> Result<(), AppError> {
    match command {
        ComponentsCommands::List { show_versions, only_local_state, refresh, json } => {
            if only_local_state {
                let listing = api::list_local_components_at(root, show_versions)?;
                if json {
                    println!("{}", to_json(&listing)?);
                } else {
                    print!("{}", render_local(&listing));
                }
            } else {
                let listing =
                    api::list_components_at(root, ListOptions { show_versions, refresh })?;
                if json {
                    println!("{}", to_json(&listing)?);
                } else {
                    print!("{}", render_listing(&listing));
                }
            }
            Ok(())
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Io(io::Error::other(e)))
}

fn render_listing(listing: &ComponentListing) -> String {
    let mut header = vec!["Status", "Name", "ID"];
    if listing.show_versions {
        header.extend(["Installed", "Latest"]);
    }
    header.push("Size");

    let rows = listing
        .entries
        .iter()
        .map(|entry| {
            let d = &entry.descriptor;
            let mut row =
                vec![entry.status.label().to_string(), d.display_name.clone(), d.id.to_string()];
            if listing.show_versions {
                row.push(
                    entry
                        .installed_version
                        .as_ref()
                        .map(|v| v.to_string())
                        .unwrap_or_else(|| "-".into()),
                );
                row.push(d.latest_version.to_string());
            }
            row.push(format_size(d.size_bytes));
            row
        })
        .collect::<Vec<_>>();

    let mut out = render_table(&header, &rows);
    if listing.has_updates() {
        out.push('\n');
        out.push_str(UPDATE_HINT);
        out.push('\n');
    }
    out
}

fn render_local(listing: &LocalListing) -> String {
    let mut header = vec!["Name", "ID"];
    if listing.show_versions {
        header.extend(["Installed", "Latest"]);
    }
    header.push("Size");

    let rows = listing
        .entries
        .iter()
        .map(|entry| {
            let mut row = vec![
                entry.display_name.clone().unwrap_or_else(|| "-".into()),
                entry.id.to_string(),
            ];
            if listing.show_versions {
                row.push(entry.installed_version.to_string());
                row.push(
                    entry.latest_version.as_ref().map(|v| v.to_string()).unwrap_or_else(|| "-".into()),
                );
            }
            row.push(entry.size_bytes.map(format_size).unwrap_or_else(|| "-".into()));
            row
        })
        .collect::<Vec<_>>();

    let mut out = render_table(&header, &rows);
    let outdated = listing.entries.iter().any(|e| {
        e.latest_version.as_ref().is_some_and(|latest| *latest != e.installed_version)
    });
    if outdated {
        out.push('\n');
        out.push_str(UPDATE_HINT);
        out.push('\n');
    }
    out
}

/// Left-aligned columns separated by two spaces; the last column is not padded.
fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: Vec<&str>| {
        let last = cells.len().saturating_sub(1);
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i == last {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
            }
        }
        line.push('\n');
        line
    };

    let mut out = format_row(header.to_vec());
    for row in rows {
        out.push_str(&format_row(row.iter().map(String::as_str).collect()));
    }
    out
}

/// Human-readable size in binary units.
fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
