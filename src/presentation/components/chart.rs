use leptos::*;

use crate::domain::chart::{ChartLayout, ChartProjectionService, LineChart, PlotArea};

/// SVG line chart with grid, axis labels and a legend.
#[component]
pub fn LineChartView(
    #[prop(into)] chart: Signal<LineChart>,
    #[prop(optional)] area: Option<PlotArea>,
) -> impl IntoView {
    let area = area.unwrap_or_default();

    let plot = move || {
        chart.with(|c| match ChartProjectionService::layout(c, area) {
            Some(layout) => render_plot(c, &layout),
            None => view! { <div class="chart-empty">"No data to display"</div> }.into_view(),
        })
    };

    let legend = move || {
        chart.with(|c| {
            c.series
                .iter()
                .map(|s| {
                    let swatch = format!("background: {}", s.style.color);
                    view! {
                        <span>
                            <span class="legend-swatch" style=swatch></span>
                            {s.name}
                        </span>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="chart">
            {plot}
            <div class="chart-legend">{legend}</div>
        </div>
    }
}

fn render_plot(chart: &LineChart, layout: &ChartLayout) -> View {
    let area = layout.area;
    let view_box = format!("0 0 {} {}", area.width, area.height);

    let grid = layout
        .y_ticks
        .iter()
        .map(|tick| {
            view! {
                <line class="grid-line" x1=area.left() x2=area.right() y1=tick.y y2=tick.y></line>
                <text class="axis-label" x=area.left() - 8.0 y=tick.y + 4.0 text-anchor="end">
                    {tick.label.clone()}
                </text>
            }
        })
        .collect_view();

    let x_labels = layout
        .x_labels
        .iter()
        .map(|&(x, label)| {
            view! {
                <text class="axis-label" x=x y=area.bottom() + 18.0 text-anchor="middle">
                    {label}
                </text>
            }
        })
        .collect_view();

    let lines = chart
        .series
        .iter()
        .zip(&layout.series)
        .map(|(series, projected)| {
            let style = series.style;
            let dots = if style.dots {
                projected
                    .points()
                    .map(|(x, y)| {
                        view! {
                            <circle cx=x cy=y r=4 fill="#fff" stroke=style.color stroke-width=style.width></circle>
                        }
                    })
                    .collect_view()
            } else {
                ().into_view()
            };
            view! {
                <g>
                    <path
                        d=projected.path_data()
                        fill="none"
                        stroke=style.color
                        stroke-width=style.width
                        stroke-dasharray=style.dash
                    ></path>
                    {dots}
                </g>
            }
        })
        .collect_view();

    view! {
        <svg class="line-chart" viewBox=view_box role="img">
            {grid}
            {x_labels}
            {lines}
        </svg>
    }
    .into_view()
}
