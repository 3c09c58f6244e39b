use leptos::{either::Either, prelude::*};
use leptos_meta::Html;
use leptos_router::{components::Outlet, hooks::use_params_map};
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::i18n::Locale;

use super::footer::Footer;
use super::header::Header;
use super::NotFound;

/// Dark/light preference, persisted in localStorage on the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    pub fn class(self) -> &'static str {
        match self {
            ColorScheme::Dark => "theme-dark",
            ColorScheme::Light => "theme-light",
        }
    }

    pub fn toggled(self) -> ColorScheme {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }
}

#[derive(Clone, Copy)]
pub struct SchemeCtx {
    pub scheme: Signal<ColorScheme>,
    pub set: WriteSignal<ColorScheme>,
}

/// The locale of the page being rendered. Defaults to English outside the
/// locale-prefixed routes (e.g. the router-level 404).
pub fn use_locale() -> Signal<Locale> {
    use_context::<Signal<Locale>>().unwrap_or_else(|| Signal::derive(|| Locale::default()))
}

/// Wraps every locale-prefixed route: resolves the `:locale` segment, sets
/// the document language/direction, and renders the page chrome. An unknown
/// locale code is a 404, not a silent fallback.
#[component]
pub fn LocaleLayout() -> impl IntoView {
    let params = use_params_map();
    let locale = Memo::new(move |_| {
        params
            .read()
            .get("locale")
            .and_then(|code| Locale::from_code(&code))
    });
    let current = Signal::derive(move || locale.get().unwrap_or_default());
    provide_context(current);

    #[cfg(feature = "hydrate")]
    let (scheme, set_scheme, _) =
        use_local_storage::<ColorScheme, JsonSerdeWasmCodec>("color-scheme");
    #[cfg(not(feature = "hydrate"))]
    let (scheme, set_scheme) = {
        let (read, write) = signal(ColorScheme::default());
        (Signal::from(read), write)
    };
    provide_context(SchemeCtx {
        scheme,
        set: set_scheme,
    });

    view! {
        <Html
            attr:lang=move || current.get().code()
            attr:dir=move || current.get().dir()
        />
        {move || match locale.get() {
            Some(_) => Either::Left(
                view! {
                    <div class=move || {
                        format!(
                            "min-h-screen flex flex-col bg-background text-foreground {}",
                            scheme.get().class(),
                        )
                    }>
                        <Header />
                        <main class="flex flex-col flex-grow w-full max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                            <Outlet />
                        </main>
                        <Footer />
                    </div>
                },
            ),
            None => Either::Right(view! { <NotFound /> }),
        }}
    }
}
