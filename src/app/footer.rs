use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::i18n::t;

use super::layout::use_locale;

#[component]
pub fn Footer() -> impl IntoView {
    let locale = use_locale();
    // stamped by build.rs; parsing can only fail if the build script changes
    let build_year = DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|stamp| stamp.year())
        .unwrap_or(2026);

    view! {
        <footer class="border-t border-muted/20 mt-16">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-8 flex flex-col sm:flex-row items-center justify-between gap-4 text-sm text-muted">
                <div>
                    {format!("© {build_year} Arman Nikfar. ")}
                    {move || t(locale.get(), "footer.rights")}
                </div>
                <div class="flex items-center gap-4">
                    <span>{move || t(locale.get(), "footer.built_with")}</span>
                    <a
                        href="https://github.com/arman-nikfar"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-foreground text-lg"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a
                        href="https://linkedin.com/in/arman-nikfar"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-foreground text-lg"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                </div>
            </div>
        </footer>
    }
}
