//! Inspect command - show a schema's field-to-column layout.

use colored::Colorize;
use tableschema::{Resolution, Schema};

pub fn run(schema_uri: String, verbose: bool) -> Result<bool, Box<dyn std::error::Error>> {
    let schema = Schema::load_from_json_table(&schema_uri)?;

    println!(
        "{} {}",
        "Schema".cyan().bold(),
        schema.title().unwrap_or(schema.uri()).white()
    );
    if let Some(description) = schema.description() {
        println!("  {}", description);
    }

    let resolution = match schema.resolution() {
        Resolution::ByOrder => "by order",
        Resolution::ByIndex if schema.checks_header_names() => "by index (header names checked)",
        Resolution::ByIndex => "by index",
    };
    println!("  columns resolved {}", resolution);
    println!();

    let resolver = schema.resolver();
    for (position, field) in schema.fields().iter().enumerate() {
        let column = resolver.column_for(position).unwrap_or(position + 1);
        let shadowed = resolver.field_at(column) != Some(position);

        print!("  {:>4}  {:20}", column, field.name());
        if field.is_required() {
            print!(" {}", "required".yellow());
        }
        if shadowed {
            print!(" {}", "(shares column)".red());
        }
        println!();

        if verbose {
            let constraints = serde_json::to_string(field.constraints())?;
            println!("        {}", constraints.dimmed());
            if let Some(title) = field.title() {
                println!("        title: {}", title);
            }
        }
    }

    Ok(true)
}
