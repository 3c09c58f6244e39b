use leptos::{either::Either, html::Input, prelude::*};
use leptos::server_fn::codec::GetUrl;
use leptos_meta::Title;
use leptos_router::{components::Outlet, hooks::use_params_map};

#[cfg(feature = "ssr")]
use crate::blog::{get_meta, get_post};
use crate::blog::{BlogError, Post, PostMeta, GLOBAL_META_CACHE, GLOBAL_POST_CACHE};
use crate::i18n::{t, Locale};

use super::layout::use_locale;
use super::NotFound;

#[component]
pub fn BlogWrapper() -> impl IntoView {
    let locale = use_locale();

    view! {
        <Title text=move || t(locale.get(), "blog.heading") />
        <div class="text-center mb-8 mt-8">
            <h1 class="font-bold text-3xl lg:text-4xl mb-4 section-content">
                <a
                    href=move || format!("/{}/blog", locale.get().code())
                    class="hover:text-accent transition-colors duration-200"
                >
                    {move || t(locale.get(), "blog.heading")}
                </a>
                <a
                    href="/rss.xml"
                    target="_blank"
                    class="relative top-1 ms-4 text-accent hover:text-foreground transition-colors duration-200"
                    aria-label=move || t(locale.get(), "blog.rss")
                >
                    <i class="extra-rss" />
                </a>
            </h1>
            <div class="max-w-2xl mx-auto text-lg font-medium text-muted section-content">
                {move || t(locale.get(), "blog.intro")}
            </div>
        </div>
        <div class="w-full max-w-4xl mx-auto text-start">
            <Outlet />
        </div>
    }
}

#[server(input = GetUrl)]
pub async fn get_meta_server(pattern: String) -> Result<Vec<PostMeta>, ServerFnError> {
    Ok(get_meta(pattern).await)
}

#[component]
pub fn BlogHome() -> impl IntoView {
    let locale = use_locale();
    let (search, set_search) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();
    let posts = Resource::new(move || search.get(), move |search| async move {
        let cache = &*GLOBAL_META_CACHE;
        if let Some(cached) = cache.get(&search) {
            return cached.clone();
        }
        let meta = get_meta_server(search.clone()).await.unwrap_or_default();
        // only cache searches on the browser
        #[cfg(feature = "hydrate")]
        cache.insert(search, meta.clone());
        meta
    });

    view! {
        <div class="mb-6">
            <form
                class="flex flex-col sm:flex-row gap-3 items-start sm:items-center"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let el = if let Some(el) = input_ref.get_untracked() {
                        el
                    } else {
                        return;
                    };
                    set_search.set(el.value());
                }
            >
                <label for="blog_search" class="font-medium text-accent whitespace-nowrap">
                    {move || t(locale.get(), "blog.search_label")}
                </label>
                <div class="flex-grow w-full sm:max-w-md">
                    <input
                        id="blog_search"
                        class="w-full px-4 py-2 rounded-md border border-muted/40 focus:outline-none focus:ring-2 focus:ring-accent focus:border-accent bg-surface text-foreground placeholder-muted transition-all duration-200"
                        node_ref=input_ref
                        placeholder=move || t(locale.get(), "blog.search_placeholder")
                    />
                </div>
                <button
                    type="submit"
                    class="px-4 py-2 bg-accent/20 hover:bg-accent/30 text-accent rounded-md border border-accent/30 transition-all duration-200 whitespace-nowrap"
                >
                    {move || t(locale.get(), "blog.search_button")}
                </button>
            </form>
        </div>
        <Transition fallback=move || {
            view! {
                <div class="space-y-4">
                    <div class="loading-skeleton h-8 rounded"></div>
                    <div class="loading-skeleton h-6 rounded w-3/4"></div>
                    <div class="loading-skeleton h-8 rounded"></div>
                    <div class="loading-skeleton h-6 rounded w-2/3"></div>
                </div>
            }
        }>
            {move || {
                let locale = locale.get();
                Suspend::new(async move {
                    let posts = posts.await;
                    if posts.is_empty() {
                        Either::Left(
                            view! {
                                <p class="text-muted text-center py-8">
                                    {t(locale, "blog.empty")}
                                </p>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <div class="space-y-4 section-content">
                                    {posts
                                        .into_iter()
                                        .map(|post| view! { <PostRow post locale /> })
                                        .collect_view()}
                                </div>
                            },
                        )
                    }
                })
            }}
        </Transition>
    }
}

#[component]
fn PostRow(post: PostMeta, locale: Locale) -> impl IntoView {
    view! {
        <div class="p-4 rounded-md border border-muted/20 hover:border-accent/40 transition-colors duration-200">
            <a class="block" href=format!("/{}/blog/{}", locale.code(), post.slug)>
                <div class="flex flex-wrap items-baseline justify-between gap-2">
                    <span class="text-lg text-accent font-medium">
                        {post.title.get(locale).to_string()}
                    </span>
                    <span class="text-sm text-muted">
                        {format!("{}", post.date.format("%b %e %Y"))}
                    </span>
                </div>
                <p class="mt-1 text-sm text-muted">{post.description.get(locale).to_string()}</p>
                <div class="mt-2 flex flex-wrap items-center gap-2">
                    {post
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="rounded-md px-2 py-1 bg-muted/10 text-sm">
                                    {tag.to_string()}
                                </span>
                            }
                        })
                        .collect_view()}
                    <span class="text-xs text-muted ms-auto">
                        {format!("{} {}", post.reading_time, t(locale, "blog.min_read"))}
                    </span>
                </div>
            </a>
        </div>
    }
}

#[server(input = GetUrl)]
pub async fn get_post_server(slug: String) -> Result<Post, ServerFnError> {
    get_post(slug)
        .await
        .ok_or_else(|| ServerFnError::new(BlogError::NotFound))
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let locale = use_locale();
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();
    let post = Resource::new(slug, move |slug| async {
        // take ownership of slug
        let slug = slug;
        let cache = &*GLOBAL_POST_CACHE;
        if let Some(cached) = cache.get(&slug) {
            return cached
                .clone()
                .ok_or_else(|| ServerFnError::new(BlogError::NotFound));
        }
        let post_data = get_post_server(slug.clone()).await;
        #[cfg(feature = "hydrate")]
        cache.insert(slug, post_data.clone().ok());
        post_data
    });

    view! {
        <Suspense>
            {move || {
                let locale = locale.get();
                Suspend::new(async move {
                    match post.await {
                        Ok(post) => Either::Left(view! { <PostArticle post locale /> }),
                        Err(_) => Either::Right(view! { <NotFound /> }),
                    }
                })
            }}
        </Suspense>
    }
}

#[component]
fn PostArticle(post: Post, locale: Locale) -> impl IntoView {
    view! {
        <Title text=post.meta.title.get(locale).to_string() />
        <div id="blog_content">
            <h1 class="text-3xl font-bold mb-4">{post.meta.title.get(locale).to_string()}</h1>
            <div class="mb-6 p-4 bg-surface rounded-md border border-muted/30">
                <div class="flex flex-wrap items-center gap-4 text-sm">
                    <span class="text-accent font-medium">
                        {t(locale, "blog.by")} " " {post.meta.author.clone()}
                    </span>
                    <span class="text-muted font-medium">
                        {post.meta.date.format("%b %e, %Y").to_string()}
                    </span>
                    <span class="text-muted">
                        {format!("{} {}", post.meta.reading_time, t(locale, "blog.min_read"))}
                    </span>
                    <div class="flex flex-wrap gap-1">
                        {post
                            .meta
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="bg-accent/10 text-accent px-2 py-1 rounded text-xs">
                                        {tag.to_string()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <article class="prose prose-invert max-w-none">
                <div inner_html=post.content></div>
            </article>
        </div>
    }
}
