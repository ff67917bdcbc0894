use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – region and filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Region");
    ui.separator();

    // Clone what we need so we can mutate state inside the loop.
    let regions: Vec<String> = state.config.region_names().map(String::from).collect();
    let current = state.region.clone();
    egui::ComboBox::from_id_salt("region")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for name in &regions {
                if ui.selectable_label(current == *name, name).clicked() {
                    state.select_region(name);
                }
            }
        });

    ui.add_space(8.0);
    ui.heading("Display");
    ui.separator();

    let Some((min_year, max_year)) = state.loaded.as_ref().map(|l| l.year_bounds) else {
        ui.label("No data loaded.");
        return;
    };
    let commodities = state
        .loaded
        .as_ref()
        .map(|l| l.commodities.clone())
        .unwrap_or_default();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Year range ----
            ui.strong("Year range");
            let mut lo = state.year_range.lo;
            let mut hi = state.year_range.hi;
            ui.add(egui::Slider::new(&mut lo, min_year..=max_year).text("from"));
            ui.add(egui::Slider::new(&mut hi, min_year..=max_year).text("to"));
            // Keep the pair ordered: dragging one end past the other moves both.
            if lo > hi {
                if lo != state.year_range.lo {
                    hi = lo;
                } else {
                    lo = hi;
                }
            }
            state.set_year_range(lo, hi);

            ui.checkbox(&mut state.show_table, "Show data table");
            ui.separator();

            // ---- Commodity selection ----
            let header_text = format!("Commodities  ({}/{})", state.selected.len(), commodities.len());
            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("commodities")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_none();
                        }
                    });

                    for commodity in &commodities {
                        let mut checked = state.selected.contains(commodity);
                        if ui.checkbox(&mut checked, commodity).changed() {
                            state.toggle_commodity(commodity);
                        }
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with load summary and errors.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(format!("Staple Food Prices in {}", state.region));

        ui.separator();

        if let Some(loaded) = &state.loaded {
            ui.label(format!(
                "{} rows loaded, {} in range",
                loaded.series.len(),
                state.visible_rows().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Illustration
// ---------------------------------------------------------------------------

/// Show the configured illustration if the file is present.
pub fn illustration(ui: &mut Ui, state: &AppState) {
    let Some(path) = &state.config.illustration else {
        return;
    };
    if !path.exists() {
        return;
    }
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add(
            egui::Image::new(format!("file://{}", path.display()))
                .max_width(ui.available_width())
                .max_height(240.0),
        );
        ui.label(RichText::new("Staple food commodities").small());
    });
    ui.add_space(4.0);
}
