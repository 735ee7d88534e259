use color_eyre::Result;
use lightsched_tui::query::{Answer, Query, Report};
use lightsched_tui::{CascadeClient, StatusPoller};

/// Run one query without the UI and print the answer
pub async fn run_headless(
    client: &CascadeClient,
    poller: &StatusPoller,
    query: &Query,
    date_format: &str,
    json: bool,
) -> Result<()> {
    let report = query.run(client, poller, date_format).await?;

    if json {
        render_headless_json(&report)?;
    } else {
        render_headless_text(&report);
    }

    Ok(())
}

fn render_headless_text(report: &Report) {
    println!("\nLightSched");
    println!("==========");
    match &report.stage {
        Some(status) => println!("Stage {}: {}", status.stage, status.description),
        None => println!("Stage unknown"),
    }
    println!();

    match &report.answer {
        Answer::Provinces { names } => print_names("Provinces", names),
        Answer::Municipalities { province, names } => {
            print_names(&format!("Municipalities in {province}"), names);
        }
        Answer::Places {
            municipality,
            names,
        } => print_names(&format!("Places in {municipality}"), names),
        Answer::Schedule {
            province,
            place,
            table,
        } => {
            println!("Schedule for {place}, {province}:");
            if table.is_empty() {
                println!("(no days)");
            }
            for row in table.rows() {
                if row.slots.is_empty() {
                    println!("- {}", row.label);
                } else {
                    println!("- {} | {}", row.label, row.slots.join(" | "));
                }
            }
        }
        Answer::Error(view) => println!("{view}"),
    }
}

fn print_names(heading: &str, names: &[String]) {
    println!("{heading}:");
    if names.is_empty() {
        println!("(none)");
    }
    for name in names {
        println!("- {name}");
    }
}

fn render_headless_json(report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
