//! The daily totals bar chart, rendered with ECharts.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::bar,
};
use maud::{Markup, PreEscaped, html};
use time::Date;

use crate::html::HeadElement;

/// The HTML element ID of the chart container.
pub(super) const DAILY_CHART_ID: &str = "daily-totals-chart";

pub(super) fn daily_totals_chart(daily_totals: &[(Date, f64)]) -> Chart {
    let labels = daily_totals
        .iter()
        .map(|(date, _)| date.day().to_string())
        .collect::<Vec<_>>();
    let values = daily_totals
        .iter()
        .map(|(_, total)| *total)
        .collect::<Vec<_>>();

    Chart::new()
        .title(Title::new().text("Daily Spending").subtext("Last seven days"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(currency_formatter())
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Spent").data(values))
}

pub(super) fn chart_view() -> Markup {
    html!(
        div
            id=(DAILY_CHART_ID)
            class="w-full min-h-[320px] rounded"
        {}
    )
}

/// The script that draws `chart` into the chart container once the page has loaded.
pub(super) fn chart_script(chart: &Chart, dark_mode: bool) -> HeadElement {
    let theme = if dark_mode { "'dark'" } else { "null" };

    HeadElement::ScriptSource(PreEscaped(format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chart = echarts.init(document.getElementById("{DAILY_CHART_ID}"), {theme});
            chart.setOption({chart});
            window.addEventListener('resize', chart.resize);
        }});"#
    )))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-IN', {
              style: 'currency',
              currency: 'INR',
              maximumFractionDigits: 0
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}
