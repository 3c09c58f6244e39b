mod about;
mod blog;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod home;
mod layout;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path, SsrMode};

use crate::i18n::{t, Locale};

use blog::{BlogHome, BlogPage, BlogWrapper};
use home::HomePage;
use layout::{use_locale, LocaleLayout};
use projects::{ProjectPage, ProjectsPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="alternate" type="application/rss+xml" href="/rss.xml" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Arman Nikfar - {title}") />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route
                    path=path!("/")
                    view=|| view! { <Redirect path=format!("/{}", Locale::default().code()) /> }
                />
                <ParentRoute path=path!("/:locale") view=LocaleLayout>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("projects") view=ProjectsPage />
                    <Route path=path!("projects/:slug") view=ProjectPage ssr=SsrMode::Async />
                    <ParentRoute path=path!("blog") view=BlogWrapper>
                        <Route path=path!("") view=BlogHome />
                        <Route path=path!(":slug") view=BlogPage ssr=SsrMode::Async />
                    </ParentRoute>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Not-found view, shared by the router fallback and the slug pages. Emits a
/// real 404 status when rendered on the server.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    let locale = use_locale();
    view! {
        <Title text=move || t(locale.get(), "notfound.title") />
        <div class="flex flex-col items-center justify-center flex-grow py-24 text-center">
            <p class="text-6xl font-bold text-accent mb-4">"404"</p>
            <h1 class="text-2xl font-bold mb-2">{move || t(locale.get(), "notfound.title")}</h1>
            <p class="text-muted mb-8">{move || t(locale.get(), "notfound.body")}</p>
            <a
                href=move || format!("/{}", locale.get().code())
                class="px-6 py-3 rounded-md bg-accent/20 text-accent border border-accent/30 hover:bg-accent/30 transition-colors duration-200"
            >
                {move || t(locale.get(), "notfound.home")}
            </a>
        </div>
    }
}
