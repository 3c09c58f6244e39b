use leptos::{either::Either, prelude::*};

use crate::content::{ContactVariant, Profile};
use crate::i18n::t;

use super::layout::use_locale;

#[component]
pub fn ContactSection(profile: Profile) -> impl IntoView {
    match profile.site.theme.contact() {
        ContactVariant::Panel => Either::Left(view! { <ContactPanel profile /> }),
        ContactVariant::Split => Either::Right(view! { <ContactSplit profile /> }),
    }
}

#[component]
fn ContactPanel(profile: Profile) -> impl IntoView {
    let locale = use_locale();
    let profile = StoredValue::new(profile);

    view! {
        <section id="contact" class="flex justify-center items-center py-12 section-content">
            <div class="w-full max-w-2xl text-center">
                <h2 class="text-2xl font-bold mb-8">{move || t(locale.get(), "contact.heading")}</h2>
                <div class="bg-surface p-6 rounded-lg border border-muted/30">
                    <p class="mb-6">{move || t(locale.get(), "contact.blurb")}</p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <a
                            href=move || format!("mailto:{}", profile.read_value().contact.email)
                            class="bg-accent/20 hover:bg-accent/30 text-accent px-6 py-3 rounded-md font-medium transition-all duration-200 border border-accent/30"
                        >
                            {move || profile.read_value().contact.email.clone()}
                        </a>
                        <SocialLinks profile />
                    </div>
                    <p class="text-sm text-muted mt-6">
                        {move || t(locale.get(), "contact.location")}
                        ": "
                        {move || {
                            profile.read_value().contact.location.get(locale.get()).to_string()
                        }}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactSplit(profile: Profile) -> impl IntoView {
    let locale = use_locale();
    let profile = StoredValue::new(profile);

    view! {
        <section id="contact" class="py-12 section-content">
            <div class="flex flex-col lg:flex-row gap-8 lg:gap-16">
                <div class="w-full lg:max-w-xl">
                    <h2 class="text-2xl font-bold mb-4">
                        {move || t(locale.get(), "contact.heading")}
                    </h2>
                    <p class="leading-relaxed">{move || t(locale.get(), "contact.blurb")}</p>
                </div>
                <div class="w-full lg:max-w-xl space-y-3">
                    <div>
                        <a
                            href=move || format!("mailto:{}", profile.read_value().contact.email)
                            class="text-accent hover:underline font-medium"
                        >
                            {move || profile.read_value().contact.email.clone()}
                        </a>
                    </div>
                    <div class="text-sm text-muted">
                        {move || t(locale.get(), "contact.location")}
                        ": "
                        {move || {
                            profile.read_value().contact.location.get(locale.get()).to_string()
                        }}
                    </div>
                    <SocialLinks profile />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SocialLinks(profile: StoredValue<Profile>) -> impl IntoView {
    view! {
        <div class="flex gap-3">
            <a
                href=move || profile.read_value().contact.github.clone()
                target="_blank"
                rel="noopener noreferrer"
                class="hover:text-accent text-2xl"
                aria-label="GitHub Profile"
            >
                <i class="devicon-github-plain"></i>
            </a>
            <a
                href=move || profile.read_value().contact.linkedin.clone()
                target="_blank"
                rel="noopener noreferrer"
                class="hover:text-accent text-2xl"
                aria-label="LinkedIn Profile"
            >
                <i class="devicon-linkedin-plain"></i>
            </a>
        </div>
    }
}
