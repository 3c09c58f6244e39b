use leptos::{either::Either, prelude::*};

use crate::content::{AboutVariant, Profile};
use crate::i18n::t;

use super::layout::use_locale;

#[component]
pub fn AboutSection(profile: Profile) -> impl IntoView {
    match profile.site.theme.about() {
        AboutVariant::Clean => Either::Left(view! { <AboutClean profile /> }),
        AboutVariant::Cards => Either::Right(view! { <AboutCards profile /> }),
    }
}

#[component]
fn AboutClean(profile: Profile) -> impl IntoView {
    let locale = use_locale();
    let profile = StoredValue::new(profile);

    view! {
        <section class="py-12 section-content">
            <h2 class="text-2xl font-bold mb-8">{move || t(locale.get(), "about.heading")}</h2>
            <div class="flex flex-col lg:flex-row gap-8 lg:gap-12">
                <div class="w-full lg:max-w-2xl">
                    {move || {
                        let locale = locale.get();
                        profile
                            .read_value()
                            .about
                            .iter()
                            .map(|paragraph| {
                                view! {
                                    <p class="text-base mb-4 leading-relaxed">
                                        {paragraph.get(locale).to_string()}
                                    </p>
                                }
                            })
                            .collect_view()
                    }}
                    <Languages profile />
                </div>
                <div class="w-full lg:max-w-2xl">
                    <h3 class="text-xl font-bold mb-4">
                        {move || t(locale.get(), "about.skills")}
                    </h3>
                    <div class="space-y-4">
                        {move || {
                            let locale = locale.get();
                            profile
                                .read_value()
                                .skills
                                .iter()
                                .map(|group| {
                                    view! {
                                        <div>
                                            <h4 class="font-medium mb-1">
                                                {group.label.get(locale).to_string()}
                                            </h4>
                                            <p class="text-sm text-muted">
                                                {group.items.join(", ")}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutCards(profile: Profile) -> impl IntoView {
    let locale = use_locale();
    let profile = StoredValue::new(profile);

    view! {
        <section class="py-12 section-content">
            <h2 class="text-2xl font-bold mb-8">{move || t(locale.get(), "about.heading")}</h2>
            {move || {
                let locale = locale.get();
                profile
                    .read_value()
                    .about
                    .iter()
                    .map(|paragraph| {
                        view! {
                            <p class="text-base mb-4 leading-relaxed max-w-3xl">
                                {paragraph.get(locale).to_string()}
                            </p>
                        }
                    })
                    .collect_view()
            }}
            <h3 class="text-xl font-bold my-6">{move || t(locale.get(), "about.skills")}</h3>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                {move || {
                    let locale = locale.get();
                    profile
                        .read_value()
                        .skills
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="rounded-lg border border-muted/20 bg-surface p-4">
                                    <h4 class="font-medium mb-3">
                                        {group.label.get(locale).to_string()}
                                    </h4>
                                    <div class="flex flex-wrap gap-1.5">
                                        {group
                                            .items
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="rounded-md px-2 py-1 bg-muted/10 text-sm">
                                                        {skill.to_string()}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <Languages profile />
        </section>
    }
}

#[component]
fn Languages(profile: StoredValue<Profile>) -> impl IntoView {
    let locale = use_locale();

    view! {
        <h3 class="text-xl font-bold my-6">{move || t(locale.get(), "about.languages")}</h3>
        <ul class="flex flex-wrap gap-x-8 gap-y-2">
            {move || {
                let locale = locale.get();
                profile
                    .read_value()
                    .languages
                    .iter()
                    .map(|language| {
                        view! {
                            <li class="flex items-center gap-2">
                                <span aria-hidden="true">{language.flag.clone()}</span>
                                <span class="font-medium">
                                    {language.name.get(locale).to_string()}
                                </span>
                                <span class="text-sm text-muted">
                                    {language.level.get(locale).to_string()}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}
