use leptos::*;

use crate::context::use_analytics;
use crate::domain::chart::{ChartSeries, category_bar_series};
use crate::presentation::components::{ActionBar, Chart, FilterPanel};
use crate::time_utils::format_currency;

/// Rows rendered in the table; the CSV export always contains every filtered record
const MAX_TABLE_ROWS: usize = 200;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let analytics = use_analytics();
    let records = analytics.filtered_records();
    let by_category = analytics.revenue_by_category();
    let by_category_bars = Signal::derive(move || ChartSeries::Bar(category_bar_series(&by_category.get())));

    let rows = move || {
        records.with(|records| {
            records
                .iter()
                .rev()
                .take(MAX_TABLE_ROWS)
                .map(|record| {
                    view! {
                        <tr>
                            <td>{record.timestamp.format("%Y-%m-%d %H:%M").to_string()}</td>
                            <td class="numeric">{format_currency(record.revenue.value())}</td>
                            <td>{record.category.to_string()}</td>
                            <td>{record.department.to_string()}</td>
                            <td class="numeric">{record.quantity.value()}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="page reports">
            <h1>"Sales Reports"</h1>
            <ActionBar/>
            <FilterPanel/>
            <section class="panel">
                <Chart series=by_category_bars title="Revenue by Category" height=260 axis_labels=("Category", "Revenue")/>
            </section>
            <section class="panel">
                <p class="muted">
                    {move || {
                        let total = records.with(|r| r.len());
                        format!("Showing {} of {} matching sales, newest first", total.min(MAX_TABLE_ROWS), total)
                    }}
                </p>
                <table class="records">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Revenue"</th>
                            <th>"Category"</th>
                            <th>"Department"</th>
                            <th>"Quantity"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </section>
        </div>
    }
}
