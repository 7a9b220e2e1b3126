use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, Points, VLine};

use crate::color::Series;
use crate::config::{CHART_FIRST_YEAR, LAST_PROJECTION_YEAR};
use crate::state::AppState;
use crate::trend::trend_line;

// ---------------------------------------------------------------------------
// Sea level plot (central panel)
// ---------------------------------------------------------------------------

/// Render observations and both trend lines in the central panel.
pub fn sea_level_plot(ui: &mut Ui, state: &AppState) {
    let text = state.language.strings();

    if state.is_loading() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(text.loading);
        });
        return;
    }

    if let Some(err) = &state.error {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(
                RichText::new(format!(
                    "{}\n\n{}",
                    text.error_heading(err),
                    text.error_summary(err)
                ))
                .color(Color32::RED)
                .size(16.0),
            );
        });
        return;
    }

    let (Some(dataset), Some(models)) = (&state.dataset, &state.models) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(text.no_data);
        });
        return;
    };

    ui.heading(text.chart_heading);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(text.chart_title).size(18.0).strong());
    });

    // Lines start where the original chart starts them; the recent one at
    // the first year it was fitted on.
    let full_start = CHART_FIRST_YEAR.min(models.full.domain.first_year);
    let full_line = trend_line(&models.full, full_start..=LAST_PROJECTION_YEAR);
    let recent_line = trend_line(
        &models.recent,
        models.recent.domain.first_year..=LAST_PROJECTION_YEAR,
    );

    Plot::new("sea_level_plot")
        .legend(Legend::default())
        .x_axis_label(text.x_axis)
        .y_axis_label(text.y_axis)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(PlotPoints::from(dataset.points()))
                    .name(text.legend_observed)
                    .color(Series::Observed.color().gamma_multiply(0.7))
                    .radius(3.0),
            );

            plot_ui.line(
                Line::new(PlotPoints::from(full_line))
                    .name(text.legend_full(&models.full.domain))
                    .color(Series::FullTrend.color())
                    .style(LineStyle::Dashed { length: 10.0 })
                    .width(1.5),
            );

            plot_ui.line(
                Line::new(PlotPoints::from(recent_line))
                    .name(text.legend_recent(&models.recent.domain))
                    .color(Series::RecentTrend.color())
                    .width(3.0),
            );

            plot_ui.vline(
                VLine::new(state.selected_year as f64)
                    .color(Color32::GRAY)
                    .style(LineStyle::Dotted { spacing: 6.0 }),
            );
        });
}
