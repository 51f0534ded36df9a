use leptos::html::Canvas;
use leptos::*;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;

use crate::context::use_analytics;
use crate::domain::analytics::{DateRange, FilterUpdate};
use crate::domain::chart::{ChartOptions, ChartSeries, category_pie_slices};
use crate::domain::logging::LogComponent;
use crate::domain::sales::{Category, Department};
use crate::infrastructure::rendering::CanvasRenderer;
use crate::time_utils::{format_currency, to_date_input_value};
use crate::{log_error, log_warn};

const CHART_WIDTH: u32 = 760;

/// Single headline number
#[component]
pub fn MetricCard(#[prop(into)] label: String, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="metric-card">
            <div class="metric-value">{move || value.get()}</div>
            <div class="metric-label">{label}</div>
        </div>
    }
}

/// Total revenue, order count and average order value for the filtered set
#[component]
pub fn MetricSummary() -> impl IntoView {
    let analytics = use_analytics();
    let total = analytics.total_revenue();
    let count = analytics.record_count();
    let average = analytics.average_order_value();

    view! {
        <section class="metrics">
            <MetricCard label="Total Revenue" value=Signal::derive(move || format_currency(total.get()))/>
            <MetricCard label="Orders" value=Signal::derive(move || count.get().to_string())/>
            <MetricCard label="Average Order" value=Signal::derive(move || format_currency(average.get()))/>
        </section>
    }
}

/// Date range, category and department filters
#[component]
pub fn FilterPanel() -> impl IntoView {
    let analytics = use_analytics();
    let filters = analytics.filters();

    let update_bound = move |text: String, is_start: bool| {
        let current = filters.get_untracked().date_range;
        let parsed = if is_start {
            DateRange::parse(Some(&text), None).map(|r| DateRange { start: r.start, ..current })
        } else {
            DateRange::parse(None, Some(&text)).map(|r| DateRange { end: r.end, ..current })
        };
        match parsed {
            Ok(range) => analytics.set_date_range(range),
            Err(e) => {
                log_warn!(LogComponent::Presentation("FilterPanel"), "Ignoring date input: {}", e);
            }
        }
    };

    let toggle_category = move |category: Category, checked: bool| {
        let mut selected = filters.get_untracked().categories;
        if checked {
            selected.insert(category);
        } else {
            selected.remove(&category);
        }
        analytics.update_filters(FilterUpdate::new().categories(selected));
    };

    let toggle_department = move |department: Department, checked: bool| {
        let mut selected = filters.get_untracked().departments;
        if checked {
            selected.insert(department);
        } else {
            selected.remove(&department);
        }
        analytics.update_filters(FilterUpdate::new().departments(selected));
    };

    view! {
        <section class="filter-panel">
            <div class="filter-group">
                <label>"From"
                    <input
                        type="date"
                        prop:value=move || to_date_input_value(filters.with(|f| f.date_range.start))
                        on:change=move |ev| update_bound(event_target_value(&ev), true)
                    />
                </label>
                <label>"To"
                    <input
                        type="date"
                        prop:value=move || to_date_input_value(filters.with(|f| f.date_range.end))
                        on:change=move |ev| update_bound(event_target_value(&ev), false)
                    />
                </label>
            </div>
            <div class="filter-group">
                <span class="filter-title">"Categories"</span>
                <For
                    each=move || analytics.unique_categories().get().to_vec()
                    key=|category| *category
                    children=move |category| {
                        view! {
                            <label class="checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || filters.with(|f| f.categories.contains(&category))
                                    on:change=move |ev| toggle_category(category, event_target_checked(&ev))
                                />
                                {category.to_string()}
                            </label>
                        }
                    }
                />
            </div>
            <div class="filter-group">
                <span class="filter-title">"Departments"</span>
                <For
                    each=move || analytics.unique_departments().get().to_vec()
                    key=|department| *department
                    children=move |department| {
                        view! {
                            <label class="checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || filters.with(|f| f.departments.contains(&department))
                                    on:change=move |ev| toggle_department(department, event_target_checked(&ev))
                                />
                                {department.to_string()}
                            </label>
                        }
                    }
                />
            </div>
            <button class="btn" on:click=move |_| analytics.reset_filters()>"Reset"</button>
        </section>
    }
}

/// Reload and export buttons plus loading / error indicators
#[component]
pub fn ActionBar() -> impl IntoView {
    let analytics = use_analytics();
    let is_loading = analytics.is_loading();
    let error = analytics.error();
    let (export_error, set_export_error) = create_signal::<Option<String>>(None);

    let on_export = move |_| match analytics.export_to_csv() {
        Ok(()) => set_export_error.set(None),
        Err(e) => {
            log_error!(LogComponent::Presentation("ActionBar"), "Export failed: {}", e);
            set_export_error.set(Some(e.to_string()));
        }
    };

    view! {
        <div class="action-bar">
            <button class="btn" disabled=move || is_loading.get() on:click=move |_| spawn_local(analytics.refresh())>
                {move || if is_loading.get() { "Loading..." } else { "Reload data" }}
            </button>
            <button class="btn" on:click=on_export>"Export CSV"</button>
            <Show when=move || error.with(Option::is_some) fallback=|| ()>
                <div class="error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || export_error.with(Option::is_some) fallback=|| ()>
                <div class="error">{move || export_error.get().unwrap_or_default()}</div>
            </Show>
        </div>
    }
}

/// Canvas chart redrawn whenever `series` changes
#[component]
pub fn Chart(
    #[prop(into)] series: Signal<ChartSeries>,
    #[prop(into)] title: String,
    #[prop(default = 300)] height: u32,
    #[prop(optional)] axis_labels: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();
    let base = ChartOptions { height, ..ChartOptions::titled(&title) };
    let options = match axis_labels {
        Some((x, y)) => base.with_axis_labels(x, y),
        None => base,
    };

    create_effect(move |_| {
        let data = series.get();
        if let Some(canvas) = canvas_ref.get() {
            let renderer = CanvasRenderer::new((*canvas).clone(), CHART_WIDTH, options.height);
            if let Err(e) = renderer.render(&data, &options) {
                log_error!(LogComponent::Presentation("Chart"), "Render error: {}", e);
            }
        }
    });

    view! { <canvas class="chart" node_ref=canvas_ref width=CHART_WIDTH height=height/> }
}

/// Per-category share of revenue as horizontal bars
#[component]
pub fn CategoryBreakdown() -> impl IntoView {
    let analytics = use_analytics();
    let by_category = analytics.revenue_by_category();
    let slices = move || category_pie_slices(&by_category.get());
    let pie = Signal::derive(move || ChartSeries::Pie(slices()));

    view! {
        <section class="category-breakdown">
            <h3>"Revenue by Category"</h3>
            <Chart series=pie title="Category share" height=220/>
            {move || {
                let slices = slices();
                if slices.is_empty() {
                    view! { <p class="muted">"No sales match the current filters"</p> }.into_view()
                } else {
                    slices
                        .into_iter()
                        .map(|slice| {
                            view! {
                                <div class="share-row">
                                    <span class="share-label">{slice.label.clone()}</span>
                                    <div class="share-track">
                                        <div class="share-fill" style:width=format!("{:.1}%", slice.share)></div>
                                    </div>
                                    <span class="share-value">
                                        {format!("{} ({:.1}%)", format_currency(slice.value), slice.share)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                }
            }}
        </section>
    }
}

/// Names of every category and department, for the settings page legend
pub fn known_dimensions() -> (Vec<String>, Vec<String>) {
    (
        Category::iter().map(|c| c.to_string()).collect(),
        Department::iter().map(|d| d.to_string()).collect(),
    )
}
