use leptos::{either::EitherOf3, prelude::*};

use crate::content::{HeroVariant, Profile};
use crate::i18n::t;

use super::layout::use_locale;

#[component]
pub fn HeroSection(profile: Profile) -> impl IntoView {
    match profile.site.theme.hero() {
        HeroVariant::Classic => EitherOf3::A(view! { <HeroClassic profile /> }),
        HeroVariant::Minimal => EitherOf3::B(view! { <HeroMinimal profile /> }),
        HeroVariant::Motion => EitherOf3::C(view! { <HeroMotion profile /> }),
    }
}

#[component]
fn HeroClassic(profile: Profile) -> impl IntoView {
    let locale = use_locale();
    let profile = StoredValue::new(profile);

    view! {
        <section class="flex flex-col items-center text-center gap-6 py-24 section-content">
            <p class="text-accent font-medium">{move || t(locale.get(), "hero.greeting")}</p>
            <h1 class="text-4xl lg:text-6xl font-bold">
                {move || profile.read_value().name.get(locale.get()).to_string()}
            </h1>
            <h2 class="text-xl lg:text-2xl text-muted">
                {move || profile.read_value().title.get(locale.get()).to_string()}
            </h2>
            <p class="max-w-2xl text-lg leading-relaxed">
                {move || profile.read_value().tagline.get(locale.get()).to_string()}
            </p>
            <HeroActions />
        </section>
    }
}

#[component]
fn HeroMinimal(profile: Profile) -> impl IntoView {
    let locale = use_locale();
    let profile = StoredValue::new(profile);

    view! {
        <section class="py-16 section-content">
            <h1 class="text-3xl font-bold mb-2">
                {move || profile.read_value().name.get(locale.get()).to_string()}
            </h1>
            <p class="text-lg text-muted mb-6">
                {move || profile.read_value().title.get(locale.get()).to_string()}
            </p>
            <HeroActions />
        </section>
    }
}

/// Classic hero plus decorative motion: drifting gradient blobs behind the
/// text and a pulsing scroll hint. Pure CSS, nothing to hydrate.
#[component]
fn HeroMotion(profile: Profile) -> impl IntoView {
    let locale = use_locale();
    let profile = StoredValue::new(profile);

    view! {
        <section class="relative overflow-hidden flex flex-col items-center text-center gap-6 py-28 section-content">
            <div class="hero-blob bg-accent/30 top-8 start-1/4" aria-hidden="true"></div>
            <div class="hero-blob bg-purple/30 bottom-8 end-1/4 animation-delay-2000" aria-hidden="true"></div>
            <div class="relative flex flex-col items-center gap-6">
                <p class="text-accent font-medium">{move || t(locale.get(), "hero.greeting")}</p>
                <h1 class="text-4xl lg:text-6xl font-bold">
                    {move || profile.read_value().name.get(locale.get()).to_string()}
                </h1>
                <h2 class="text-xl lg:text-2xl text-muted">
                    {move || profile.read_value().title.get(locale.get()).to_string()}
                </h2>
                <p class="max-w-2xl text-lg leading-relaxed">
                    {move || profile.read_value().tagline.get(locale.get()).to_string()}
                </p>
                <HeroActions />
                <p class="text-sm text-muted animate-bounce mt-8">
                    {move || t(locale.get(), "hero.scroll")}
                </p>
            </div>
        </section>
    }
}

#[component]
fn HeroActions() -> impl IntoView {
    let locale = use_locale();

    view! {
        <div class="flex flex-col sm:flex-row gap-4 mt-4">
            <a
                href=move || format!("/{}/projects", locale.get().code())
                class="px-6 py-3 rounded-md bg-accent/20 text-accent border border-accent/30 hover:bg-accent/30 font-medium transition-all duration-200"
            >
                {move || t(locale.get(), "hero.cta_projects")}
            </a>
            <a
                href="#contact"
                class="px-6 py-3 rounded-md border border-muted/40 hover:border-accent hover:text-accent font-medium transition-all duration-200"
            >
                {move || t(locale.get(), "hero.cta_contact")}
            </a>
        </div>
    }
}
