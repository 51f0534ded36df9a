use leptos::*;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;

use crate::context::{use_analytics, use_theme};
use crate::domain::theme::Theme;
use crate::presentation::components::known_dimensions;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let theme = use_theme();
    let analytics = use_analytics();
    let current = theme.theme();
    let is_loading = analytics.is_loading();
    let raw_count = {
        let raw = analytics.raw_records();
        move || raw.with(|records| records.len())
    };
    let (categories, departments) = known_dimensions();

    view! {
        <div class="page settings">
            <h1>"Settings"</h1>
            <section class="panel">
                <h3>"Appearance"</h3>
                {Theme::iter()
                    .map(|option| {
                        view! {
                            <label class="radio">
                                <input
                                    type="radio"
                                    name="theme"
                                    prop:checked=move || current.get() == option
                                    on:change=move |_| theme.set(option)
                                />
                                {match option {
                                    Theme::Light => "Light",
                                    Theme::Dark => "Dark",
                                }}
                            </label>
                        }
                    })
                    .collect_view()}
            </section>
            <section class="panel">
                <h3>"Data"</h3>
                <p class="muted">{move || format!("{} synthetic sales loaded", raw_count())}</p>
                <p class="muted">{format!("Categories: {}", categories.join(", "))}</p>
                <p class="muted">{format!("Departments: {}", departments.join(", "))}</p>
                <button class="btn" disabled=move || is_loading.get() on:click=move |_| spawn_local(analytics.reload())>
                    {move || if is_loading.get() { "Regenerating..." } else { "Regenerate data" }}
                </button>
            </section>
        </div>
    }
}
