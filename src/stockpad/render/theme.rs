//! Named terminal styles, applied from templates through the `style` filter.
//!
//! An unknown style name is flagged in the output with [`MISSING_STYLE_INDICATOR`]
//! so template typos show up instead of silently rendering plain text.

use console::{Style, Term};
use minijinja::{Environment, Value};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub static STOCK_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add("name", Style::new().bold())
        .add("id", Style::new().dim())
        .add("price", Style::new().green())
        .add("stock", Style::new().cyan())
        .add("image", Style::new().dim().italic())
        .add("added", Style::new().color256(245).italic())
        .add("action", Style::new().blue())
        .add("empty", Style::new().dim())
        .add("rule", Style::new().dim())
});

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Styled text, or the text behind the missing indicator if `name` is unknown.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

/// Whether stdout can show colors.
pub fn detect_color() -> bool {
    Term::stdout().features().colors_supported()
}

/// An environment with the `style` filter bound to `theme`.
pub fn environment(theme: &Theme, use_color: bool) -> Environment<'static> {
    let mut env = Environment::new();
    let theme = theme.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
    env
}
