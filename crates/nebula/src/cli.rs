//! CLI output for the content, config and preview commands

use anyhow::{Context, Result};
use clap::ValueEnum;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use nebula_core::{Catalog, HeaderFade, NavController, SiteConfig};

/// Section of the catalog to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Nav,
    Models,
    Technology,
    About,
    Testimonials,
}

fn new_table(headers: &[&str], no_color: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(headers.to_vec());
    } else {
        table.set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Yellow))
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// Render one catalog section as a table
pub fn render_section(catalog: &Catalog, section: Section, no_color: bool) -> String {
    let table = match section {
        Section::Nav => {
            let mut t = new_table(&["#", "Label", "Link"], no_color);
            for (i, anchor) in catalog.nav.iter().enumerate() {
                t.add_row(vec![(i + 1).to_string(), anchor.label(), anchor.href()]);
            }
            t
        }
        Section::Models => {
            let mut t = new_table(&["Model", "Description", "Image"], no_color);
            for m in &catalog.models {
                t.add_row(vec![m.name, m.description, m.image]);
            }
            t
        }
        Section::Technology => {
            let mut t = new_table(&["Feature", "Icon", "Description"], no_color);
            for f in &catalog.features {
                t.add_row(vec![
                    f.title.to_string(),
                    format!("{:?}", f.icon).to_lowercase(),
                    f.description.to_string(),
                ]);
            }
            t
        }
        Section::About => {
            let mut t = new_table(&["#", "Point"], no_color);
            for (i, point) in catalog.about.points.iter().enumerate() {
                t.add_row(vec![(i + 1).to_string(), point.to_string()]);
            }
            t
        }
        Section::Testimonials => {
            let mut t = new_table(&["Name", "Role", "Quote"], no_color);
            for r in &catalog.testimonials {
                t.add_row(vec![r.name, r.role, r.quote]);
            }
            t
        }
    };
    table.to_string()
}

/// Whole catalog, or one section, as pretty JSON
pub fn render_json(catalog: &Catalog, section: Option<Section>) -> Result<String> {
    let value = match section {
        None => serde_json::to_value(catalog),
        Some(Section::Nav) => serde_json::to_value(catalog.nav),
        Some(Section::Models) => serde_json::to_value(&catalog.models),
        Some(Section::Technology) => serde_json::to_value(&catalog.features),
        Some(Section::About) => serde_json::to_value(&catalog.about),
        Some(Section::Testimonials) => serde_json::to_value(&catalog.testimonials),
    }
    .context("Failed to serialize content")?;

    serde_json::to_string_pretty(&value).context("Failed to format content")
}

/// Effective configuration as TOML
pub fn render_config(config: &SiteConfig) -> Result<String> {
    config.to_toml().context("Failed to serialize config")
}

/// What the header looks like at a given viewport width and scroll progress
pub fn render_preview(config: &SiteConfig, width: f64, progress: f64) -> String {
    let nav = NavController::mount(config, width);
    let fade = HeaderFade::from_config(config);

    format!(
        "Viewport:     {width}px ({layout}, breakpoint {bp}px)\n\
         Menu open:    {open}\n\
         Progress:     {progress:.3}\n\
         Header:       {color}\n",
        layout = if nav.is_wide(width) { "wide" } else { "narrow" },
        bp = config.breakpoint_px,
        open = nav.menu_open(),
        progress = progress.clamp(0.0, 1.0),
        color = fade.color(progress),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nebula_core::catalog;

    #[test]
    fn test_render_models_table() {
        let out = render_section(&catalog(), Section::Models, true);
        assert!(out.contains("Nova"));
        assert!(out.contains("Quantum"));
        assert!(out.contains("Luxury without limits"));
    }

    #[test]
    fn test_render_nav_table() {
        let out = render_section(&catalog(), Section::Nav, true);
        assert!(out.contains("MODELS"));
        assert!(out.contains("#contact"));
    }

    #[test]
    fn test_render_json_section() {
        let out = render_json(&catalog(), Some(Section::Testimonials)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 3);
        assert_eq!(json[0]["name"], "Alexandra R.");
    }

    #[test]
    fn test_render_json_full() {
        let out = render_json(&catalog(), None).unwrap();
        assert!(out.contains("\"brand\": \"NEBULA MOTORS\""));
    }

    #[test]
    fn test_render_config_defaults() {
        let out = render_config(&SiteConfig::default()).unwrap();
        assert!(out.contains("breakpoint_px = 768"));
        assert!(out.contains("[reveal]"));
    }

    #[test]
    fn test_render_preview() {
        let config = SiteConfig::default();

        let narrow = render_preview(&config, 500.0, 0.1);
        assert!(narrow.contains("narrow"));
        assert!(narrow.contains("Menu open:    false"));
        assert!(narrow.contains("rgba(0, 0, 0, 0.400)"));

        let wide = render_preview(&config, 1024.0, 0.9);
        assert!(wide.contains("Menu open:    true"));
        assert!(wide.contains("rgba(0, 0, 0, 0.800)"));
    }
}
