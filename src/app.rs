mod about;
mod contact;
mod experience;
mod hero;
mod projects;
pub mod reveal;
mod skills;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{site_content, SiteConfig};

use about::About;
use contact::Contact;
use experience::Experience;
use hero::Hero;
use projects::Projects;
use reveal::{provide_reveal_context, RevealHandle};
use skills::Skills;

// shows everything when scripts never run, since nothing would ever trigger a reveal
const NOSCRIPT_STYLE: &str = ".reveal { opacity: 1 !important; transform: none !important; }";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <noscript>
                    <style>{NOSCRIPT_STYLE}</style>
                </noscript>
                <MetaTags />
            </head>
            <body class="font-sans scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let site = site_content()
        .map(|c| c.site.clone())
        .unwrap_or_else(|e| {
            log::error!("falling back to default reveal timing: {e}");
            SiteConfig::default()
        });
    provide_reveal_context(site);

    view! {
        <Title formatter=|title| format!("Kareem Qasarwah - {title}") />

        <Router>
            <main class="flex flex-col flex-grow justify-center items-center mx-auto w-full max-w-7xl px-4">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let content = match site_content() {
        Ok(content) => content,
        Err(e) => {
            log::error!("couldn't load site content: {e}");
            return Either::Right(view! {
                <Title text="Portfolio" />
                <p class="my-16">"Content is unavailable right now."</p>
            });
        }
    };

    Either::Left(view! {
        <Title text="Portfolio" />
        <Hero profile=&content.profile />
        <About about=&content.profile.about />
        <Experience experience=&content.experience />
        <Projects projects=&content.projects />
        <Skills skills=&content.skills />
        <Contact contact=&content.profile.contact socials=content.profile.socials.as_slice() />
    })
}

/// Heading that opens every scroll-revealed section.
#[component]
fn SectionTitle(reveal: RevealHandle, index: usize, text: &'static str) -> impl IntoView {
    view! {
        <h2 class="reveal text-3xl font-bold text-center mb-12" style=move || reveal.style(index)>
            {text}
        </h2>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <p class="my-16">"Page not found."</p>
        <a href="/" class="text-cyan">
            "Back to the portfolio"
        </a>
    }
}
