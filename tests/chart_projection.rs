use commodity_hub::domain::ai_trading::GOLD_FORECAST;
use commodity_hub::domain::chart::{
    ChartProjectionService, ChartSeries, LineChart, LineStyle, PlotArea, ValueRange, format_tick,
};
use commodity_hub::domain::market_data::HistoryWindow;
use commodity_hub::domain::market_data::catalog::history_window;
use insta::assert_snapshot;
use quickcheck_macros::quickcheck;

fn area() -> PlotArea {
    PlotArea {
        width: 120.0,
        height: 110.0,
        margin_top: 5.0,
        margin_right: 10.0,
        margin_bottom: 5.0,
        margin_left: 10.0,
    }
}

#[test]
fn gaps_split_series_into_segments() {
    let chart = LineChart::new(vec!["a", "b", "c", "d", "e"]).with_series(ChartSeries::new(
        "s",
        LineStyle::solid("#000"),
        vec![Some(0.0), Some(10.0), None, Some(5.0), Some(10.0)],
    ));
    let range = ValueRange::new(0.0, 10.0);
    let projected = ChartProjectionService::project(&chart.series[0], 5, &range, &area());

    assert_eq!(projected.segments.len(), 2);
    assert_snapshot!(projected.path_data(), @"M10.0 105.0 L35.0 5.0 M85.0 55.0 L110.0 5.0");
}

#[test]
fn forecast_chart_has_four_series() {
    let chart = LineChart::from_forecast(&GOLD_FORECAST);
    let names: Vec<&str> = chart.series.iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Actual", "Predicted", "Min Range", "Max Range"]);

    let layout = ChartProjectionService::layout(&chart, PlotArea::default()).unwrap();
    assert_eq!(layout.series[0].points().count(), 1);
    assert_eq!(layout.series[1].points().count(), 8);
    assert_eq!(layout.x_labels.first().map(|(_, l)| *l), Some("Today"));
    assert!(layout.range.min < 2010.75 && layout.range.max > 2085.0);
}

#[test]
fn history_chart_follows_window() {
    let chart = LineChart::from_history(history_window(HistoryWindow::FiveDays));
    assert_eq!(chart.point_count(), 5);
    assert_eq!(chart.series.len(), 4);
    assert!(chart.series.iter().all(|s| s.values.len() == 5));
}

#[test]
fn empty_chart_has_no_layout() {
    assert!(ChartProjectionService::layout(&LineChart::default(), PlotArea::default()).is_none());
}

#[test]
fn flat_values_get_a_visible_range() {
    let range = ValueRange::fit([4.0, 4.0, 4.0], 0.1).unwrap();
    assert_eq!(range, ValueRange::new(3.0, 5.0));
    assert_eq!(range.ticks(3), vec![3.0, 4.0, 5.0]);
}

#[test]
fn single_point_sits_in_the_middle() {
    let area = area();
    assert_eq!(area.x_at(0, 1), 60.0);
    assert_eq!(area.x_at(4, 5), area.right());
}

#[test]
fn tick_labels_shrink_decimals_with_magnitude() {
    assert_eq!(format_tick(2053.2), "2053");
    assert_eq!(format_tick(78.42), "78.4");
    assert_eq!(format_tick(4.05), "4.05");
}

#[quickcheck]
fn projected_points_stay_inside_plot(values: Vec<f64>) -> bool {
    let values: Vec<f64> = values.into_iter().filter(|v| v.is_finite() && v.abs() < 1e9).collect();
    let labels = vec!["x"; values.len()];
    let chart = LineChart::new(labels).with_series(ChartSeries::new(
        "q",
        LineStyle::solid("#000"),
        values.iter().copied().map(Some).collect(),
    ));
    let area = area();
    match ChartProjectionService::layout(&chart, area) {
        None => values.is_empty(),
        Some(layout) => layout.series[0].points().all(|(x, y)| {
            x >= area.left() - 1e-6
                && x <= area.right() + 1e-6
                && y >= area.top() - 1e-6
                && y <= area.bottom() + 1e-6
        }),
    }
}
