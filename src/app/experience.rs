use leptos::{either::Either, prelude::*};

use crate::content::{ExperienceEntry, ExperienceVariant, Profile};
use crate::i18n::{t, Locale};

use super::layout::use_locale;

#[component]
pub fn ExperienceSection(profile: Profile) -> impl IntoView {
    let variant = profile.site.theme.experience();
    let profile = StoredValue::new(profile);
    let locale = use_locale();

    view! {
        <section class="py-12 section-content">
            <h2 class="text-2xl font-bold mb-8">
                {move || t(locale.get(), "experience.heading")}
            </h2>
            {move || {
                let locale = locale.get();
                let entries = profile.read_value().experience.clone();
                match variant {
                    ExperienceVariant::Timeline => Either::Left(
                        view! {
                            <div class="relative border-s-2 border-muted/30 ms-2">
                                {entries
                                    .into_iter()
                                    .map(|entry| view! { <TimelineEntry entry locale /> })
                                    .collect_view()}
                            </div>
                        },
                    ),
                    ExperienceVariant::Compact => Either::Right(
                        view! {
                            <div class="space-y-8">
                                {entries
                                    .into_iter()
                                    .map(|entry| view! { <CompactEntry entry locale /> })
                                    .collect_view()}
                            </div>
                        },
                    ),
                }
            }}
            <Education profile />
        </section>
    }
}

#[component]
fn TimelineEntry(entry: ExperienceEntry, locale: Locale) -> impl IntoView {
    let marker = if entry.period.is_ongoing() {
        "bg-accent"
    } else {
        "bg-muted"
    };
    view! {
        <div class="relative mb-10 ps-8">
            <span
                class=format!("absolute -start-[7px] top-1.5 h-3 w-3 rounded-full {marker}")
                aria-hidden="true"
            ></span>
            <div class="flex flex-wrap items-baseline justify-between gap-2">
                <h3 class="font-bold">
                    {entry.title.get(locale).to_string()}
                    <span class="text-muted font-normal">
                        " · " {entry.company.get(locale).to_string()}
                    </span>
                </h3>
                <span class="text-sm font-medium text-accent">{entry.period.format(locale)}</span>
            </div>
            <div class="text-sm text-muted mb-2">{entry.location.get(locale).to_string()}</div>
            <ul class="list-disc ps-5 space-y-1">
                {entry
                    .highlights
                    .iter()
                    .map(|line| view! { <li class="leading-relaxed">{line.get(locale).to_string()}</li> })
                    .collect_view()}
            </ul>
            <TechnologyChips technologies=entry.technologies.clone() locale />
        </div>
    }
}

#[component]
fn CompactEntry(entry: ExperienceEntry, locale: Locale) -> impl IntoView {
    view! {
        <div>
            <div class="flex flex-wrap items-baseline justify-between gap-2">
                <h3 class="font-bold">
                    {entry.title.get(locale).to_string()}
                    <span class="text-muted font-normal">
                        " · " {entry.company.get(locale).to_string()}
                        " · " {entry.location.get(locale).to_string()}
                    </span>
                </h3>
                <span class="text-sm font-medium">{entry.period.format(locale)}</span>
            </div>
            {entry
                .highlights
                .iter()
                .map(|line| view! { <p class="mt-1 leading-relaxed">{line.get(locale).to_string()}</p> })
                .collect_view()}
        </div>
    }
}

#[component]
fn TechnologyChips(technologies: Vec<String>, locale: Locale) -> impl IntoView {
    (!technologies.is_empty()).then(|| {
        view! {
            <div class="mt-3 flex flex-wrap items-center gap-1.5">
                <span class="text-xs text-muted">{t(locale, "experience.technologies")} ":"</span>
                {technologies
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="rounded-md px-2 py-0.5 bg-muted/10 text-xs">
                                {tech.to_string()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        }
    })
}

#[component]
fn Education(profile: StoredValue<Profile>) -> impl IntoView {
    let locale = use_locale();

    view! {
        <h2 class="text-2xl font-bold mt-12 mb-8">
            {move || t(locale.get(), "experience.education")}
        </h2>
        <div class="space-y-6">
            {move || {
                let locale = locale.get();
                profile
                    .read_value()
                    .education
                    .iter()
                    .map(|entry| {
                        view! {
                            <div>
                                <div class="flex flex-wrap items-baseline justify-between gap-2">
                                    <h3 class="font-bold">
                                        {entry.degree.get(locale).to_string()}
                                        <span class="text-muted font-normal">
                                            " · " {entry.school.get(locale).to_string()}
                                        </span>
                                    </h3>
                                    <span class="text-sm font-medium">
                                        {entry.period.format(locale)}
                                    </span>
                                </div>
                                <div class="text-sm text-muted">
                                    {entry.location.get(locale).to_string()}
                                </div>
                                {entry
                                    .notes
                                    .iter()
                                    .map(|note| {
                                        view! {
                                            <p class="mt-1 text-sm leading-relaxed">
                                                {note.get(locale).to_string()}
                                            </p>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
