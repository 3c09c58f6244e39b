use leptos::{either::Either, prelude::*};
use leptos::server_fn::codec::GetUrl;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

#[cfg(feature = "ssr")]
use crate::content::project_by_slug;
use crate::content::{Project, GLOBAL_PROFILE_CACHE};
use crate::i18n::{t, Locale};

use super::home::{profile_resource, PageSkeleton};
use super::layout::use_locale;
use super::NotFound;

#[server(input = GetUrl)]
pub async fn get_project_server(slug: String) -> Result<Project, ServerFnError> {
    project_by_slug(&slug).ok_or_else(|| ServerFnError::new("project not found"))
}

/// Home-page teaser: the first three projects and a link to the full grid.
#[component]
pub fn ProjectsPreview(projects: Vec<Project>) -> impl IntoView {
    let locale = use_locale();
    let teaser: Vec<Project> = projects.into_iter().take(3).collect();

    view! {
        <section class="py-12 section-content">
            <div class="flex items-baseline justify-between mb-8">
                <h2 class="text-2xl font-bold">{move || t(locale.get(), "projects.heading")}</h2>
                <a
                    href=move || format!("/{}/projects", locale.get().code())
                    class="text-sm text-accent hover:underline"
                >
                    {move || t(locale.get(), "projects.all")}
                </a>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {teaser
                    .into_iter()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let locale = use_locale();
    let profile = profile_resource();

    view! {
        <Title text=move || t(locale.get(), "projects.heading") />
        <h1 class="text-3xl font-bold my-8 section-content">
            {move || t(locale.get(), "projects.heading")}
        </h1>
        <Transition fallback=move || view! { <PageSkeleton /> }>
            {move || Suspend::new(async move {
                profile
                    .await
                    .map(|profile| {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 section-content">
                                {profile
                                    .projects
                                    .into_iter()
                                    .map(|project| view! { <ProjectCard project /> })
                                    .collect_view()}
                            </div>
                        }
                    })
            })}
        </Transition>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let locale = use_locale();
    let project = StoredValue::new(project);

    view! {
        <div class="rounded-lg border border-muted/20 bg-surface overflow-hidden hover:border-accent/40 transition-colors duration-200 flex flex-col">
            <img
                src=move || project.read_value().image.clone()
                alt=move || project.read_value().title.get(locale.get()).to_string()
                loading="lazy"
                class="w-full h-40 object-cover bg-muted/10"
            />
            <div class="p-4 flex flex-col gap-2 flex-grow">
                <a
                    href=move || {
                        format!(
                            "/{}/projects/{}",
                            locale.get().code(),
                            project.read_value().slug,
                        )
                    }
                    class="text-lg font-bold hover:text-accent transition-colors duration-200"
                >
                    {move || project.read_value().title.get(locale.get()).to_string()}
                </a>
                <p class="text-sm text-muted flex-grow">
                    {move || project.read_value().description.get(locale.get()).to_string()}
                </p>
                <TagList tags=project.read_value().tags.clone() />
                <ProjectLinks project locale />
            </div>
        </div>
    }
}

#[component]
fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-1.5">
            {tags
                .iter()
                .map(|tag| {
                    view! {
                        <span class="rounded-md px-2 py-0.5 bg-muted/10 text-xs">
                            {tag.to_string()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectLinks(project: StoredValue<Project>, locale: Signal<Locale>) -> impl IntoView {
    view! {
        <div class="flex gap-4 text-sm mt-1">
            {move || {
                project
                    .read_value()
                    .repo
                    .clone()
                    .map(|repo| {
                        view! {
                            <a
                                href=repo
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-accent hover:underline"
                            >
                                {t(locale.get(), "projects.source")}
                            </a>
                        }
                    })
            }}
            {move || {
                project
                    .read_value()
                    .link
                    .clone()
                    .map(|link| {
                        view! {
                            <a
                                href=link
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-accent hover:underline"
                            >
                                {t(locale.get(), "projects.visit")}
                            </a>
                        }
                    })
            }}
        </div>
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let locale = use_locale();
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();
    let project = Resource::new(slug, |slug| async move {
        // the browser may already hold the whole profile
        if let Some(cached) = GLOBAL_PROFILE_CACHE.get("profile.json") {
            if let Some(profile) = cached.clone() {
                return profile
                    .projects
                    .into_iter()
                    .find(|p| p.slug == slug)
                    .ok_or_else(|| ServerFnError::new("project not found"));
            }
        }
        get_project_server(slug).await
    });

    view! {
        <Suspense>
            {move || {
                let locale = locale.get();
                Suspend::new(async move {
                    match project.await {
                        Ok(project) => Either::Left(view! { <ProjectDetail project locale /> }),
                        Err(_) => Either::Right(view! { <NotFound /> }),
                    }
                })
            }}
        </Suspense>
    }
}

#[component]
fn ProjectDetail(project: Project, locale: Locale) -> impl IntoView {
    view! {
        <Title text=project.title.get(locale).to_string() />
        <div class="max-w-3xl mx-auto py-8 section-content">
            <a
                href=format!("/{}/projects", locale.code())
                class="text-sm text-accent hover:underline"
            >
                {t(locale, "projects.back")}
            </a>
            <h1 class="text-3xl font-bold mt-4 mb-2">{project.title.get(locale).to_string()}</h1>
            <p class="text-lg text-muted mb-6">{project.description.get(locale).to_string()}</p>
            <img
                src=project.image.clone()
                alt=project.title.get(locale).to_string()
                class="w-full rounded-lg border border-muted/20 mb-6"
            />
            {project
                .body
                .iter()
                .map(|paragraph| {
                    view! {
                        <p class="text-base mb-4 leading-relaxed">
                            {paragraph.get(locale).to_string()}
                        </p>
                    }
                })
                .collect_view()}
            <TagList tags=project.tags.clone() />
            <div class="flex gap-4 mt-6">
                {project
                    .repo
                    .clone()
                    .map(|repo| {
                        view! {
                            <a
                                href=repo
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 rounded-md border border-muted/40 hover:border-accent hover:text-accent text-sm transition-colors duration-200"
                            >
                                {t(locale, "projects.source")}
                            </a>
                        }
                    })}
                {project
                    .link
                    .clone()
                    .map(|link| {
                        view! {
                            <a
                                href=link
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 rounded-md bg-accent/20 text-accent border border-accent/30 hover:bg-accent/30 text-sm transition-colors duration-200"
                            >
                                {t(locale, "projects.visit")}
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
