use eframe::egui::{self, Color32, Frame, RichText, ScrollArea, Ui};

use crate::color::Series;
use crate::data::model::DataSource;
use crate::i18n::{Language, Strings};
use crate::state::AppState;
use crate::trend::RegressionModel;

// ---------------------------------------------------------------------------
// Left side panel – introduction, models and the simulator
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let text = state.language.strings();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.add_space(4.0);
            ui.heading(RichText::new(text.page_title).strong());
            ui.add_space(4.0);
            ui.label(text.intro);
            ui.label(text.intro_full);
            ui.label(text.intro_recent);
            ui.separator();

            let Some(models) = state.models.clone() else {
                ui.label(RichText::new(text.no_data).color(Color32::GRAY));
                return;
            };

            // ---- Fitted models ----
            ui.strong(text.models_heading);
            model_row(ui, text, text.model_full, &models.full, Series::FullTrend);
            model_row(ui, text, text.model_recent, &models.recent, Series::RecentTrend);
            ui.separator();

            // ---- Simulator ----
            simulator(ui, state);
        });
}

fn model_row(ui: &mut Ui, text: &Strings, name: &str, model: &RegressionModel, series: Series) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new("■").color(series.color()));
        ui.label(format!(
            "{name} ({}, n = {}): {}, R² = {:.3}",
            model.domain,
            model.n_observations,
            text.rate(model.slope),
            model.r_squared()
        ));
    });
}

fn simulator(ui: &mut Ui, state: &mut AppState) {
    let text = state.language.strings();

    ui.strong(text.simulator_heading);
    ui.add_space(4.0);
    ui.label(text.slider_label);

    let mut year = state.selected_year;
    ui.add(egui::Slider::new(&mut year, state.settings.slider_range()).step_by(1.0));
    if year != state.selected_year {
        state.set_selected_year(year);
    }

    let Some(cmp) = state.comparison() else {
        return;
    };

    ui.add_space(8.0);
    ui.label(RichText::new(text.predictions_for(cmp.year)).strong().size(15.0));
    ui.add_space(4.0);

    ui.columns(2, |cols| {
        metric(&mut cols[0], text.metric_full, &text.level(cmp.full.predicted_level), None);
        metric(
            &mut cols[1],
            text.metric_recent,
            &text.level(cmp.recent.predicted_level),
            Some((text.delta(cmp.difference), cmp.difference)),
        );
    });

    ui.add_space(8.0);
    Frame::new()
        .fill(Series::RecentTrend.tint())
        .corner_radius(5.0)
        .inner_margin(8.0)
        .show(ui, |ui: &mut Ui| {
            ui.label(
                RichText::new(text.analysis(cmp.year, cmp.difference)).color(Color32::BLACK),
            );
        });
}

/// Label, large value and an optional delta. A rising sea is bad news,
/// so positive deltas are red.
fn metric(ui: &mut Ui, label: &str, value: &str, delta: Option<(String, f64)>) {
    ui.label(RichText::new(label).size(12.0).color(Color32::GRAY));
    ui.label(RichText::new(value).size(22.0).strong());
    if let Some((caption, difference)) = delta {
        let color = if difference > 0.0 {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::from_rgb(40, 167, 69)
        };
        let arrow = if difference >= 0.0 { "▲" } else { "▼" };
        ui.label(RichText::new(format!("{arrow} {caption}")).color(color));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    let text = state.language.strings();

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button(text.menu_file, |ui: &mut Ui| {
            if ui.button(text.menu_reload).clicked() {
                state.reload();
                ui.close_menu();
            }
            if ui.button(text.menu_open).clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!("{}:", text.language_label));
        for lang in Language::ALL {
            if ui
                .selectable_label(state.language == lang, lang.native_name())
                .clicked()
                && state.language != lang
            {
                state.toggle_language();
            }
        }

        ui.separator();

        if state.is_loading() {
            ui.spinner();
            ui.label(text.loading);
        } else if let Some(err) = &state.error {
            ui.label(
                RichText::new(format!("{}: {}", text.error_prefix, text.error_summary(err)))
                    .color(Color32::RED),
            );
        } else if let Some(ds) = &state.dataset {
            ui.label(text.observations_loaded(ds.len()))
                .on_hover_text(ds.source.to_string());
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title(state.language.strings().menu_open)
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open_source(DataSource::File(path));
    }
}
