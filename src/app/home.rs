use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;
use leptos_meta::Title;

#[cfg(feature = "ssr")]
use crate::content::load_profile;
use crate::content::{Profile, GLOBAL_PROFILE_CACHE};
use crate::i18n::t;

use super::about::AboutSection;
use super::contact::ContactSection;
use super::experience::ExperienceSection;
use super::hero::HeroSection;
use super::layout::use_locale;
use super::projects::ProjectsPreview;

const PROFILE_KEY: &str = "profile.json";

#[server(input = GetUrl)]
pub async fn get_profile_server() -> Result<Profile, ServerFnError> {
    load_profile().ok_or_else(|| ServerFnError::new("site content unavailable"))
}

/// The profile record, fetched once and cached on the browser.
pub(crate) fn profile_resource() -> Resource<Option<Profile>> {
    Resource::new(
        || (),
        |_| async move {
            let cache = &*GLOBAL_PROFILE_CACHE;
            if let Some(cached) = cache.get(PROFILE_KEY) {
                return cached.clone();
            }
            let profile = get_profile_server().await.ok();
            // only cache on the browser; the server keeps its own copy
            #[cfg(feature = "hydrate")]
            cache.insert(PROFILE_KEY.to_string(), profile.clone());
            profile
        },
    )
}

#[component]
pub fn HomePage() -> impl IntoView {
    let locale = use_locale();
    let profile = profile_resource();

    view! {
        <Title text=move || t(locale.get(), "nav.home") />
        <Transition fallback=move || view! { <PageSkeleton /> }>
            {move || Suspend::new(async move {
                profile
                    .await
                    .map(|profile| {
                        view! {
                            <HeroSection profile=profile.clone() />
                            <AboutSection profile=profile.clone() />
                            <ExperienceSection profile=profile.clone() />
                            <ProjectsPreview projects=profile.projects.clone() />
                            <ContactSection profile=profile />
                        }
                    })
            })}
        </Transition>
    }
}

#[component]
pub fn PageSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-4 py-16">
            <div class="loading-skeleton h-12 rounded w-1/2"></div>
            <div class="loading-skeleton h-6 rounded w-3/4"></div>
            <div class="loading-skeleton h-6 rounded w-2/3"></div>
            <div class="loading-skeleton h-64 rounded"></div>
        </div>
    }
}
