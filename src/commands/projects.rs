use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::commands::print_json;
use crate::error::Result;
use crate::sample::{DEFAULT_PROJECT_ID, sample_projects};

/// A row in the project table
#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Repository")]
    repo: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// List the sample projects
pub fn cmd_projects(output_json: bool) -> Result<()> {
    let projects = sample_projects();

    if output_json {
        return print_json(&projects);
    }

    let rows: Vec<ProjectRow> = projects
        .iter()
        .map(|p| ProjectRow {
            id: if p.id == DEFAULT_PROJECT_ID {
                format!("{} *", p.id)
            } else {
                p.id.clone()
            },
            name: p.name.clone(),
            repo: p.slug(),
            description: p.description.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    println!("\n* selected when the board opens");

    Ok(())
}
