use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::i18n::{t, Locale};

use super::layout::{use_locale, ColorScheme, SchemeCtx};

/// Swap the locale segment of a path, keeping the rest of the route. Paths
/// without a locale prefix fall back to the target locale's home page.
fn swap_locale(path: &str, target: Locale) -> String {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    match segments.next() {
        Some(first) if Locale::from_code(first).is_some() => {
            let rest: Vec<&str> = segments.collect();
            if rest.is_empty() {
                format!("/{}", target.code())
            } else {
                format!("/{}/{}", target.code(), rest.join("/"))
            }
        }
        _ => format!("/{}", target.code()),
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let locale = use_locale();
    let location = use_location();
    let scheme_ctx = expect_context::<SchemeCtx>();

    let switch_href = move || swap_locale(&location.pathname.get(), locale.get().other());
    let nav_class = "hover:text-accent transition-colors duration-200";

    view! {
        <header class="sticky top-0 z-10 bg-background/80 backdrop-blur border-b border-muted/20">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <a
                    href=move || format!("/{}", locale.get().code())
                    class="text-xl font-bold text-accent"
                >
                    "AN"
                    <span class="text-foreground">"."</span>
                </a>
                <nav class="flex items-center gap-6">
                    <a class=nav_class href=move || format!("/{}", locale.get().code())>
                        {move || t(locale.get(), "nav.home")}
                    </a>
                    <a class=nav_class href=move || format!("/{}/projects", locale.get().code())>
                        {move || t(locale.get(), "nav.projects")}
                    </a>
                    <a class=nav_class href=move || format!("/{}/blog", locale.get().code())>
                        {move || t(locale.get(), "nav.blog")}
                    </a>
                </nav>
                <div class="flex items-center gap-3">
                    <a
                        href=switch_href
                        class="px-3 py-1.5 rounded-md border border-muted/40 text-sm hover:border-accent hover:text-accent transition-colors duration-200"
                    >
                        {move || t(locale.get(), "nav.switch_locale")}
                    </a>
                    <button
                        class="px-3 py-1.5 rounded-md border border-muted/40 text-sm hover:border-accent transition-colors duration-200"
                        aria-label="Toggle color scheme"
                        on:click=move |_| {
                            scheme_ctx.set.set(scheme_ctx.scheme.get_untracked().toggled());
                        }
                    >
                        {move || match scheme_ctx.scheme.get() {
                            ColorScheme::Dark => "☀",
                            ColorScheme::Light => "☾",
                        }}
                    </button>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switcher_keeps_the_rest_of_the_path() {
        assert_eq!(swap_locale("/en/blog/some-post", Locale::Fa), "/fa/blog/some-post");
        assert_eq!(swap_locale("/fa/projects", Locale::En), "/en/projects");
        assert_eq!(swap_locale("/en", Locale::Fa), "/fa");
    }

    #[test]
    fn paths_without_a_locale_go_home() {
        assert_eq!(swap_locale("/", Locale::Fa), "/fa");
        assert_eq!(swap_locale("/weird/path", Locale::En), "/en");
    }
}
