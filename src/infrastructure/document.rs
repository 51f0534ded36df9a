use crate::domain::errors::AppError;
use crate::domain::logging::LogComponent;
use crate::domain::theme::{Theme, ThemeSurface};
use crate::log_warn;
use strum::IntoEnumIterator;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn document() -> Result<web_sys::Document, AppError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| AppError::BrowserError("Document not available".to_string()))
}

/// Reflects the theme as exactly one `theme-*` class on `<body>`
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyClassSurface;

impl BodyClassSurface {
    fn try_apply(&self, theme: Theme) -> Result<(), AppError> {
        let body = document()?
            .body()
            .ok_or_else(|| AppError::BrowserError("Body not available".to_string()))?;
        let classes = body.class_list();
        for other in Theme::iter().filter(|t| *t != theme) {
            classes
                .remove_1(other.css_class())
                .map_err(|e| AppError::BrowserError(format!("{:?}", e)))?;
        }
        classes.add_1(theme.css_class()).map_err(|e| AppError::BrowserError(format!("{:?}", e)))
    }
}

impl ThemeSurface for BodyClassSurface {
    fn apply_theme(&self, theme: Theme) {
        if let Err(e) = self.try_apply(theme) {
            log_warn!(LogComponent::Infrastructure("Document"), "Could not apply theme {}: {}", theme, e);
        }
    }
}

/// Whether the OS/browser asks for a dark color scheme
pub fn prefers_dark_color_scheme() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn set_document_title(title: &str) {
    match document() {
        Ok(document) => document.set_title(title),
        Err(e) => {
            log_warn!(LogComponent::Infrastructure("Document"), "Could not set title: {}", e);
        }
    }
}
