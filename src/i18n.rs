use crate::error::DataError;
use crate::trend::fit::FitDomain;

// ---------------------------------------------------------------------------
// Language – explicit display language, passed down to every UI function
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Spanish,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Spanish, Language::English];

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" | "spa" | "spanish" | "español" => Some(Language::Spanish),
            "en" | "eng" | "english" => Some(Language::English),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }

    /// Name of the language in itself, for the toggle.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Spanish => "Español",
            Language::English => "English",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Spanish => Language::English,
            Language::English => Language::Spanish,
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::Spanish => &SPANISH,
            Language::English => &ENGLISH,
        }
    }
}

// ---------------------------------------------------------------------------
// Numbers – shared by every language so projections never differ
// ---------------------------------------------------------------------------

/// Level in inches with two decimals, language independent.
pub fn format_level(inches: f64) -> String {
    format!("{inches:.2}")
}

/// Slope in inches per year with four decimals, language independent.
pub fn format_rate(inches_per_year: f64) -> String {
    format!("{inches_per_year:.4}")
}

// ---------------------------------------------------------------------------
// Strings – one fixed set per language
// ---------------------------------------------------------------------------

pub struct Strings {
    pub window_title: &'static str,
    pub page_title: &'static str,
    pub intro: &'static str,
    pub intro_full: &'static str,
    pub intro_recent: &'static str,
    pub menu_file: &'static str,
    pub menu_reload: &'static str,
    pub menu_open: &'static str,
    pub language_label: &'static str,
    pub loading: &'static str,
    pub load_failed: &'static str,
    pub fit_failed: &'static str,
    pub no_data: &'static str,
    pub models_heading: &'static str,
    pub model_full: &'static str,
    pub model_recent: &'static str,
    pub chart_heading: &'static str,
    pub chart_title: &'static str,
    pub x_axis: &'static str,
    pub y_axis: &'static str,
    pub legend_observed: &'static str,
    pub simulator_heading: &'static str,
    pub slider_label: &'static str,
    pub metric_full: &'static str,
    pub metric_recent: &'static str,
    pub error_prefix: &'static str,
    unit: &'static str,
    rate_unit: &'static str,
    higher: &'static str,
    lower: &'static str,
    observations_loaded: &'static str,
    predictions_for: &'static str,
    legend_full: &'static str,
    legend_recent: &'static str,
    unavailable_from: &'static str,
    insufficient: [&'static str; 2],
    analysis: [&'static str; 4],
}

impl Strings {
    /// `"12.34 inches"`.
    pub fn level(&self, inches: f64) -> String {
        format!("{} {}", format_level(inches), self.unit)
    }

    /// `"0.0630 in/yr"`.
    pub fn rate(&self, inches_per_year: f64) -> String {
        format!("{} {}", format_rate(inches_per_year), self.rate_unit)
    }

    /// Delta caption under the recent metric.
    pub fn delta(&self, difference: f64) -> String {
        let direction = if difference >= 0.0 { self.higher } else { self.lower };
        format!("{} {} {direction}", format_level(difference.abs()), self.unit)
    }

    pub fn observations_loaded(&self, count: usize) -> String {
        format!("{count} {}", self.observations_loaded)
    }

    pub fn predictions_for(&self, year: i32) -> String {
        format!("{} {year}:", self.predictions_for)
    }

    pub fn legend_full(&self, domain: &FitDomain) -> String {
        format!("{} {domain})", self.legend_full)
    }

    pub fn legend_recent(&self, domain: &FitDomain) -> String {
        format!("{} {domain})", self.legend_recent)
    }

    /// Heading for a page error: loading failed, or loading worked and a
    /// model could not be fitted.
    pub fn error_heading(&self, err: &DataError) -> &'static str {
        match err {
            DataError::DataUnavailable { .. } => self.load_failed,
            DataError::InsufficientData { .. } => self.fit_failed,
        }
    }

    /// One-line description of `err` in this language. The loader's reason
    /// chain is kept verbatim.
    pub fn error_summary(&self, err: &DataError) -> String {
        match err {
            DataError::DataUnavailable {
                source_name,
                reason,
            } => format!("{} {source_name}: {reason}", self.unavailable_from),
            DataError::InsufficientData {
                label,
                distinct_years,
            } => {
                let [lead, tail] = self.insufficient;
                format!("{lead} '{label}': {distinct_years} {tail}")
            }
        }
    }

    /// Closing sentence comparing both models at `year`.
    pub fn analysis(&self, year: i32, difference: f64) -> String {
        let [lead, middle, tail, end] = self.analysis;
        let direction = if difference >= 0.0 { self.higher } else { self.lower };
        format!(
            "{lead} {year} {middle} {} {} {direction} {tail} {end}",
            format_level(difference.abs()),
            self.unit
        )
    }
}

static SPANISH: Strings = Strings {
    window_title: "Predicción del Nivel del Mar",
    page_title: "🌊 Simulador de Aumento del Nivel del Mar",
    intro: "Esta herramienta visualiza los datos históricos del aumento del nivel del mar desde 1880 y proyecta las tendencias a futuro. Se muestran dos modelos de predicción:",
    intro_full: "1. Tendencia a Largo Plazo: basada en todos los datos desde 1880.",
    intro_recent: "2. Tendencia Acelerada: basada en los datos más recientes (desde el año 2000), que reflejan un ritmo de aumento más rápido.",
    menu_file: "Archivo",
    menu_reload: "Recargar datos",
    menu_open: "Abrir CSV local…",
    language_label: "Idioma",
    loading: "Cargando datos…",
    load_failed: "No se pudieron cargar los datos",
    fit_failed: "No se pudieron ajustar los modelos",
    no_data: "Sin datos",
    models_heading: "Modelos",
    model_full: "Tendencia histórica",
    model_recent: "Tendencia acelerada",
    chart_heading: "Visualización Histórica y Proyecciones",
    chart_title: "Aumento del Nivel del Mar: Comparación de Tendencias",
    x_axis: "Año",
    y_axis: "Nivel del Mar Ajustado (en pulgadas)",
    legend_observed: "Datos Históricos",
    simulator_heading: "Viaja al Futuro: Simulador Interactivo",
    slider_label: "Selecciona un año futuro para ver la predicción:",
    metric_full: "Predicción (Tendencia Histórica)",
    metric_recent: "Predicción (Tendencia Acelerada Reciente)",
    error_prefix: "Error",
    unit: "pulgadas",
    rate_unit: "pulg/año",
    higher: "más alto",
    lower: "más bajo",
    observations_loaded: "observaciones cargadas",
    predictions_for: "Predicciones para el año",
    legend_full: "Predicción (Tendencia",
    legend_recent: "Predicción (Tendencia Acelerada",
    unavailable_from: "Datos no disponibles desde",
    insufficient: [
        "Datos insuficientes para ajustar",
        "año(s) distinto(s), se necesitan al menos 2",
    ],
    analysis: [
        "Análisis: Basado en la tendencia de las últimas décadas, el nivel del mar en",
        "podría ser",
        "de lo que predeciría el modelo a largo plazo.",
        "Esto subraya la urgencia del problema climático.",
    ],
};

static ENGLISH: Strings = Strings {
    window_title: "Sea Level Prediction",
    page_title: "🌊 Sea Level Rise Simulator",
    intro: "This tool shows the historical rise in sea level since 1880 and projects the trends into the future. Two prediction models are shown:",
    intro_full: "1. Long-term trend: based on all data since 1880.",
    intro_recent: "2. Accelerated trend: based on the most recent data (since 2000), which reflects a faster rate of rise.",
    menu_file: "File",
    menu_reload: "Reload data",
    menu_open: "Open local CSV…",
    language_label: "Language",
    loading: "Loading data…",
    load_failed: "Could not load the data",
    fit_failed: "Could not fit the models",
    no_data: "No data",
    models_heading: "Models",
    model_full: "Historical trend",
    model_recent: "Accelerated trend",
    chart_heading: "Historical Data and Projections",
    chart_title: "Rise in Sea Level: Trend Comparison",
    x_axis: "Year",
    y_axis: "Adjusted Sea Level (inches)",
    legend_observed: "Historical data",
    simulator_heading: "Travel to the Future: Interactive Simulator",
    slider_label: "Pick a future year to see the prediction:",
    metric_full: "Prediction (Historical Trend)",
    metric_recent: "Prediction (Recent Accelerated Trend)",
    error_prefix: "Error",
    unit: "inches",
    rate_unit: "in/yr",
    higher: "higher",
    lower: "lower",
    observations_loaded: "observations loaded",
    predictions_for: "Predictions for the year",
    legend_full: "Prediction (Trend",
    legend_recent: "Prediction (Accelerated Trend",
    unavailable_from: "Data unavailable from",
    insufficient: [
        "Not enough data to fit",
        "distinct year(s), need at least 2",
    ],
    analysis: [
        "Analysis: Based on the trend of recent decades, the sea level in",
        "could be",
        "than the long-term model would predict.",
        "This underlines the urgency of the climate problem.",
    ],
};
