use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Field;
use crate::data::normalize::DATE_FIELD;
use crate::format;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Statistics table
// ---------------------------------------------------------------------------

/// Per-commodity summary for the selected period.
pub fn stats_table(ui: &mut Ui, state: &AppState) {
    ui.heading("Price statistics (selected period)");
    ui.label(
        RichText::new(format!(
            "Change is measured within {}–{}, from the first to the last price in that window.",
            state.year_range.lo, state.year_range.hi
        ))
        .small(),
    );

    if state.stats.is_empty() {
        ui.label("No prices recorded for the selected commodities in this period.");
        return;
    }

    let currency = &state.config.currency;
    let headers = ["Commodity", "Average", "Highest", "Lowest", "Start", "End", "Change (%)"];

    ui.push_id("stats_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(120.0))
            .columns(Column::auto().at_least(90.0), headers.len() - 1)
            .header(ROW_HEIGHT, |mut header| {
                for title in headers {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for stat in &state.stats {
                    body.row(ROW_HEIGHT, |mut row| {
                        let cells = [
                            stat.commodity.clone(),
                            format::currency(currency, stat.mean),
                            format::currency(currency, stat.max),
                            format::currency(currency, stat.min),
                            format::currency(currency, stat.first_value),
                            format::currency(currency, stat.last_value),
                            format::percent_change(stat.percent_change),
                        ];
                        for cell in cells {
                            row.col(|ui| {
                                ui.label(cell);
                            });
                        }
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Raw data table
// ---------------------------------------------------------------------------

/// Column titles of the raw table: the canonical date field, then every field.
fn raw_headers(fields: &[Field]) -> Vec<&str> {
    std::iter::once(DATE_FIELD)
        .chain(fields.iter().map(|f| f.name.as_str()))
        .collect()
}

/// The filtered rows as loaded, date text first.
pub fn raw_table(ui: &mut Ui, state: &AppState) {
    let Some(loaded) = &state.loaded else {
        return;
    };
    let rows = state.visible_rows();
    ui.heading(format!("Full data: {}", state.region));

    let headers = raw_headers(&loaded.series.fields);
    ui.push_id("raw_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(300.0)
            .column(Column::auto().at_least(90.0))
            .columns(Column::auto().at_least(80.0), headers.len() - 1)
            .header(ROW_HEIGHT, |mut header| {
                for title in &headers {
                    header.col(|ui| {
                        ui.strong(*title);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let record = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(&record.raw_date);
                    });
                    for value in &record.values {
                        row.col(|ui| {
                            ui.label(format::table_cell(value));
                        });
                    }
                });
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ColumnKind;

    #[test]
    fn raw_table_date_column_uses_the_canonical_name() {
        // Gorontalo's source column is "Komoditas (Rp)".
        let fields = vec![
            Field { name: "Beras".to_string(), kind: ColumnKind::Numeric },
            Field { name: "Cabai Rawit".to_string(), kind: ColumnKind::Numeric },
        ];
        assert_eq!(raw_headers(&fields), vec!["tahun_raw", "Beras", "Cabai Rawit"]);
    }
}
