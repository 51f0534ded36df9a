use leptos::*;
use leptos_router::*;

use crate::context::{AppContext, use_theme};
use crate::domain::{
    config::DashboardConfig,
    logging::LogComponent,
    routing::{AppRoute, FALLBACK_TITLE, document_title_for_path},
};
use crate::infrastructure::document::set_document_title;
use crate::log_debug;
use crate::presentation::pages::{DashboardPage, ReportsPage, SettingsPage};

/// Root component: creates the session stores and the router
#[component]
pub fn App() -> impl IntoView {
    AppContext::for_browser(DashboardConfig::default()).provide();

    view! {
        <style>{STYLES}</style>
        <Router>
            <TitleGuard/>
            <div class="dashboard-app">
                <NavBar/>
                <main class="content">
                    <Routes>
                        <Route path=AppRoute::Dashboard.path() view=DashboardPage/>
                        <Route path=AppRoute::Reports.path() view=ReportsPage/>
                        <Route path=AppRoute::Settings.path() view=SettingsPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Keeps `document.title` in step with the current route
#[component]
fn TitleGuard() -> impl IntoView {
    let location = use_location();
    create_effect(move |_| {
        let path = location.pathname.get();
        let title = document_title_for_path(&path);
        log_debug!(LogComponent::Presentation("Router"), "Navigated to {} ({})", path, title);
        set_document_title(&title);
    });
}

#[component]
fn NavBar() -> impl IntoView {
    let theme = use_theme();
    let is_dark = theme.is_dark();

    view! {
        <nav class="navbar">
            <span class="brand">"Business Dashboard"</span>
            {AppRoute::all()
                .into_iter()
                .map(|route| {
                    view! {
                        <A href=route.path() class="nav-link">
                            {route.title().unwrap_or(FALLBACK_TITLE)}
                        </A>
                    }
                })
                .collect_view()}
            <button class="btn theme-toggle" on:click=move |_| theme.toggle()>
                {move || if is_dark.get() { "☀️ Light" } else { "🌙 Dark" }}
            </button>
        </nav>
    }
}

const STYLES: &str = r#"
body.theme-light {
    --bg: #f5f7fb;
    --panel: #ffffff;
    --text: #1f2937;
    --muted: #6b7280;
    --accent: #4e79a7;
    --border: #e5e7eb;
}

body.theme-dark {
    --bg: #111827;
    --panel: #1f2937;
    --text: #f3f4f6;
    --muted: #9ca3af;
    --accent: #76b7b2;
    --border: #374151;
}

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    background: var(--bg);
    color: var(--text);
}

.navbar {
    display: flex;
    align-items: center;
    gap: 20px;
    padding: 12px 24px;
    background: var(--panel);
    border-bottom: 1px solid var(--border);
}

.brand { font-weight: 700; margin-right: auto; }
.nav-link { color: var(--text); text-decoration: none; }
.nav-link[aria-current] { color: var(--accent); font-weight: 600; }

.content { padding: 24px; max-width: 1100px; margin: 0 auto; }
.page { display: flex; flex-direction: column; gap: 16px; }

.panel, .filter-panel, .category-breakdown {
    background: var(--panel);
    border: 1px solid var(--border);
    border-radius: 10px;
    padding: 16px;
}

.filter-panel { display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-start; }
.filter-group { display: flex; flex-direction: column; gap: 4px; }
.filter-title { font-weight: 600; }

.metrics { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }
.metric-card {
    background: var(--panel);
    border: 1px solid var(--border);
    border-radius: 10px;
    padding: 16px;
    text-align: center;
}
.metric-value { font-size: 24px; font-weight: 700; color: var(--accent); }
.metric-label { font-size: 12px; color: var(--muted); margin-top: 4px; }

.action-bar { display: flex; gap: 8px; align-items: center; }
.btn {
    background: var(--accent);
    color: white;
    border: none;
    padding: 6px 12px;
    border-radius: 6px;
    cursor: pointer;
}
.btn:disabled { opacity: 0.6; cursor: progress; }
.error { color: #e15759; }
.muted { color: var(--muted); }

.share-row { display: grid; grid-template-columns: 140px 1fr 200px; gap: 8px; align-items: center; margin: 4px 0; }
.share-track { background: var(--border); border-radius: 4px; height: 10px; }
.share-fill { background: var(--accent); border-radius: 4px; height: 10px; }
.share-value { text-align: right; font-family: 'Courier New', monospace; }

.records { width: 100%; border-collapse: collapse; }
.records th, .records td { padding: 6px 8px; border-bottom: 1px solid var(--border); text-align: left; }
.records .numeric { text-align: right; font-family: 'Courier New', monospace; }
"#;
