//! SVG chart surfaces for the sales dashboard.
//!
//! The adapters in `domain::sales::report` produce [`ChartSeries`]; these
//! components only draw what they are given, in the order given. An empty
//! series renders an empty plot, not an error.

use leptos::prelude::*;

/// Label/value pairs in server order, ready for a chart surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

const WIDTH: f64 = 420.0;
const HEIGHT: f64 = 260.0;
const MARGIN_LEFT: f64 = 12.0;
const PLOT_WIDTH: f64 = WIDTH - MARGIN_LEFT - 12.0;
const PLOT_HEIGHT: f64 = HEIGHT - 28.0;

/// Vertical bars, one per series entry.
#[component]
pub fn BarChart(#[prop(into)] series: Signal<ChartSeries>) -> impl IntoView {
    let bars = move || {
        let series = series.get();
        let max = series.max_value().max(1.0);
        let count = series.values.len().max(1) as f64;
        let band = PLOT_WIDTH / count;
        let bar_width = (band * 0.7).min(64.0);

        series
            .values
            .iter()
            .zip(series.labels.iter())
            .enumerate()
            .map(|(i, (&value, label))| {
                let height = value / max * (PLOT_HEIGHT - 12.0);
                let x = MARGIN_LEFT + band * i as f64 + (band - bar_width) / 2.0;
                let y = PLOT_HEIGHT - height;
                let center = MARGIN_LEFT + band * (i as f64 + 0.5);
                view! {
                    <rect
                        x=format!("{x:.1}")
                        y=format!("{y:.1}")
                        width=format!("{bar_width:.1}")
                        height=format!("{height:.1}")
                        class="chart__bar"
                    ></rect>
                    <text
                        x=format!("{center:.1}")
                        y=format!("{:.1}", HEIGHT - 8.0)
                        text-anchor="middle"
                        class="chart__label"
                    >
                        {shorten_label(label)}
                    </text>
                }
            })
            .collect_view()
    };

    view! {
        <svg viewBox=format!("0 0 {WIDTH} {HEIGHT}") class="chart chart--bar" role="img">
            <line
                x1=format!("{MARGIN_LEFT}")
                y1=format!("{PLOT_HEIGHT}")
                x2=format!("{:.1}", MARGIN_LEFT + PLOT_WIDTH)
                y2=format!("{PLOT_HEIGHT}")
                class="chart__axis"
            />
            {bars}
        </svg>
    }
}

/// Connected line with point markers, one point per series entry.
#[component]
pub fn LineChart(#[prop(into)] series: Signal<ChartSeries>) -> impl IntoView {
    let points = move || {
        let series = series.get();
        let max = series.max_value().max(1.0);
        let count = series.values.len();
        series
            .values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let (x, y) = point_position(i, count, value, max);
                format!("{x:.1},{y:.1}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    };

    let markers = move || {
        let series = series.get();
        let max = series.max_value().max(1.0);
        let count = series.values.len();
        // Label only a handful of dates so long windows stay readable.
        let label_step = count / 6 + 1;
        series
            .values
            .iter()
            .zip(series.labels.iter())
            .enumerate()
            .map(|(i, (&value, label))| {
                let (x, y) = point_position(i, count, value, max);
                let date_label = (i % label_step == 0).then(|| {
                    view! {
                        <text
                            x=format!("{x:.1}")
                            y=format!("{:.1}", HEIGHT - 8.0)
                            text-anchor="middle"
                            class="chart__label"
                        >
                            {label.clone()}
                        </text>
                    }
                });
                view! {
                    <circle cx=format!("{x:.1}") cy=format!("{y:.1}") r="3" class="chart__point">
                    </circle>
                    {date_label}
                }
            })
            .collect_view()
    };

    view! {
        <svg viewBox=format!("0 0 {WIDTH} {HEIGHT}") class="chart chart--line" role="img">
            <line
                x1=format!("{MARGIN_LEFT}")
                y1=format!("{PLOT_HEIGHT}")
                x2=format!("{:.1}", MARGIN_LEFT + PLOT_WIDTH)
                y2=format!("{PLOT_HEIGHT}")
                class="chart__axis"
            />
            <polyline points=points fill="none" class="chart__line" />
            {markers}
        </svg>
    }
}

fn point_position(index: usize, count: usize, value: f64, max: f64) -> (f64, f64) {
    let x = if count <= 1 {
        MARGIN_LEFT + PLOT_WIDTH / 2.0
    } else {
        MARGIN_LEFT + PLOT_WIDTH * index as f64 / (count - 1) as f64
    };
    let y = PLOT_HEIGHT - value / max * (PLOT_HEIGHT - 12.0);
    (x, y)
}

fn shorten_label(label: &str) -> String {
    const MAX: usize = 12;
    if label.chars().count() <= MAX {
        label.to_string()
    } else {
        let mut short: String = label.chars().take(MAX - 1).collect();
        short.push('…');
        short
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_value_of_empty_series_is_zero() {
        assert_eq!(ChartSeries::default().max_value(), 0.0);
    }

    #[test]
    fn test_shorten_label() {
        assert_eq!(shorten_label("Marble Tile"), "Marble Tile");
        assert_eq!(shorten_label("Premium Ceramic Tile"), "Premium Cer…");
    }

    #[test]
    fn point_positions_span_the_plot() {
        let (first_x, _) = point_position(0, 3, 1.0, 1.0);
        let (last_x, _) = point_position(2, 3, 1.0, 1.0);
        assert_eq!(first_x, MARGIN_LEFT);
        assert_eq!(last_x, MARGIN_LEFT + PLOT_WIDTH);
        // a lone point sits in the middle instead of dividing by zero
        let (lone_x, _) = point_position(0, 1, 1.0, 1.0);
        assert_eq!(lone_x, MARGIN_LEFT + PLOT_WIDTH / 2.0);
    }
}
