use chrono::{Datelike, NaiveDate};
use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::color::ColorMap;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Price trend plot (central panel)
// ---------------------------------------------------------------------------

/// Dates are plotted as days since 0001-01-01.
fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn x_to_label(x: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_default()
}

/// Render one line per selected commodity over the current year window.
pub fn price_plot(ui: &mut Ui, state: &AppState, colors: &ColorMap) {
    ui.heading("Price trend over time");

    let currency = state.config.currency.clone();
    Plot::new("price_plot")
        .legend(Legend::default())
        .height(420.0)
        .x_axis_label("Period")
        .y_axis_label(format!("Price ({currency})"))
        .x_axis_formatter(|mark, _range| x_to_label(mark.value))
        .label_formatter(move |name, value| {
            format!("{name}\n{}\n{currency} {:.0}", x_to_label(value.x), value.y)
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &state.chart {
                let points: PlotPoints = series
                    .points
                    .iter()
                    .map(|&(date, price)| [date_to_x(date), price])
                    .collect();

                let line = Line::new(points)
                    .name(&series.commodity)
                    .color(colors.color_for(&series.commodity))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_labels_round_trip_dates() {
        let date = NaiveDate::from_ymd_opt(2021, 7, 1).unwrap();
        assert_eq!(x_to_label(date_to_x(date)), "Jul 2021");
    }
}
