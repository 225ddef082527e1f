use ff_app::Screen;
use ff_app::screen::{Header, MenuLine, StatusIndicator, VenueCard};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{TableOptions, render_table};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_value_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a screen. Tables get a per-view layout instead of a key/value dump.
pub fn render_screen(screen: &Screen, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(screen, format);
    }

    let options = table_options();
    let mut sections = vec![status_line(screen.status())];
    match screen {
        Screen::Landing {
            title,
            admin_url,
            demo_accounts,
            ..
        } => {
            sections.push(format!("Welcome to {title}"));
            let rows = demo_accounts
                .iter()
                .map(|card| {
                    vec![
                        card.account_label().to_string(),
                        card.email.to_string(),
                        card.password.to_string(),
                    ]
                })
                .collect::<Vec<_>>();
            sections.push(render_table(&["account", "email", "password"], &rows, options));
            sections.push(format!("Admin panel: {admin_url}"));
        }
        Screen::Browse { header, venues, .. } => {
            sections.push(header_line(header));
            sections.push(String::from("Discover Restaurants"));
            sections.push(venue_table(venues, options));
        }
        Screen::Manage {
            header,
            form,
            my_venues,
            ..
        } => {
            sections.push(header_line(header));
            sections.push(String::from("Add a Restaurant"));
            let rows = [
                ("name", &form.name),
                ("description", &form.description),
                ("address", &form.address),
            ]
            .into_iter()
            .map(|(field, value)| vec![field.to_string(), value.clone()])
            .collect::<Vec<_>>();
            sections.push(render_table(&["field", "value"], &rows, options));
            sections.push(String::from("Your Restaurants"));
            sections.push(venue_table(my_venues, options));
        }
        Screen::VenueDetail {
            header,
            venue,
            entries,
            can_order,
            empty_message,
            ..
        } => {
            sections.push(header_line(header));
            sections.push(format!("{} ({})", venue.name, venue.address));
            if !venue.description.is_empty() {
                sections.push(venue.description.clone());
            }
            match empty_message {
                Some(message) => sections.push((*message).to_string()),
                None => sections.push(menu_table(entries, *can_order, options)),
            }
        }
    }
    Ok(sections.join("\n\n"))
}

/// Print a screen in the requested format.
pub fn output_screen(screen: &Screen, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_screen(screen, format)?);
    Ok(())
}

fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn status_line(status: &StatusIndicator) -> String {
    match &status.error {
        Some(error) => format!("Backend: {} ({error})", status.label),
        None => format!("Backend: {}", status.label),
    }
}

fn header_line(header: &Header) -> String {
    format!("Welcome, {} ({})", header.name, header.role_label)
}

fn venue_table(venues: &[VenueCard], options: TableOptions) -> String {
    if venues.is_empty() {
        return String::from("(no restaurants)");
    }
    let rows = venues
        .iter()
        .map(|venue| {
            vec![
                venue.id.clone(),
                venue.name.clone(),
                venue.address.clone(),
                venue.owner.clone(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["id", "name", "address", "owner"], &rows, options)
}

fn menu_table(entries: &[MenuLine], can_order: bool, options: TableOptions) -> String {
    let rows = entries
        .iter()
        .map(|entry| {
            let mut row = vec![
                entry.name.clone(),
                entry.description.clone(),
                entry.price.clone(),
            ];
            if can_order {
                row.push(String::from("Add to Order"));
            }
            row
        })
        .collect::<Vec<_>>();
    if can_order {
        render_table(&["item", "description", "price", "action"], &rows, options)
    } else {
        render_table(&["item", "description", "price"], &rows, options)
    }
}

fn render_value_table(value: &Value) -> String {
    let options = table_options();
    match value {
        Value::Array(items) => render_array_table(items, options),
        Value::Object(map) => {
            let mut entries = map.iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            render_table(&["key", "value"], &rows, options)
        }
        scalar => render_table(&["value"], &[vec![value_to_cell(scalar)]], options),
    }
}

fn render_array_table(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return render_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    render_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
