use leptos::*;

use crate::context::use_analytics;
use crate::domain::chart::{ChartSeries, monthly_line_series};
use crate::presentation::components::{ActionBar, CategoryBreakdown, Chart, FilterPanel, MetricSummary};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let analytics = use_analytics();
    let by_month = analytics.revenue_by_month();
    let monthly = Signal::derive(move || ChartSeries::Line(monthly_line_series(&by_month.get())));

    view! {
        <div class="page dashboard">
            <h1>"Sales Overview"</h1>
            <ActionBar/>
            <FilterPanel/>
            <MetricSummary/>
            <section class="panel">
                <Chart series=monthly title="Revenue by Month" axis_labels=("Month", "Revenue")/>
            </section>
            <CategoryBreakdown/>
        </div>
    }
}
