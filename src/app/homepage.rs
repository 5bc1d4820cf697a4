use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{Icon, CONTACT_CHANNELS, PROFILE};
use crate::sections::{scroll_to_section, SectionId};

use super::avatar::About;
use super::certifications::Certifications;
use super::contact::{Contact, Footer};
use super::header::{use_active_section, Header};
use super::resume::{Experience, Projects, Skills};
use super::DomLayout;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let active = use_active_section();

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-background">
            <Header active />
            <Hero />
            <About />
            <Skills />
            <Certifications />
            <Projects />
            <Experience />
            <Contact />
            <Footer />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section
            id=SectionId::Home.as_str()
            class="min-h-screen flex items-center justify-center bg-gradient-to-br from-background to-muted/20"
        >
            <div class="container mx-auto px-4 text-center">
                <div class="max-w-4xl mx-auto">
                    <h1 class="text-4xl md:text-6xl font-bold mb-6 bg-gradient-to-r from-primary to-blue-600 bg-clip-text text-transparent">
                        {PROFILE.headline}
                    </h1>
                    <p class="text-xl md:text-2xl text-muted-foreground mb-8">{PROFILE.tagline}</p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                        <button
                            class="btn btn-lg btn-primary"
                            on:click=move |_| scroll_to_section(&DomLayout, SectionId::Projects)
                        >
                            "View My Work"
                        </button>
                        <button
                            class="btn btn-lg btn-outline"
                            on:click=move |_| scroll_to_section(&DomLayout, SectionId::Contact)
                        >
                            "Get In Touch"
                        </button>
                    </div>
                    <div class="flex justify-center space-x-6">
                        {CONTACT_CHANNELS
                            .iter()
                            .rev()
                            .map(|channel| {
                                view! {
                                    <a
                                        href=channel.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=channel.label
                                        class="text-muted-foreground hover:text-primary transition-colors"
                                    >
                                        <i class=format!("{} text-2xl", channel.icon.class())></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <button
                    class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce"
                    aria-label="Scroll to about"
                    on:click=move |_| scroll_to_section(&DomLayout, SectionId::About)
                >
                    <i class=format!("{} text-2xl text-muted-foreground", Icon::ChevronDown.class())></i>
                </button>
            </div>
        </section>
    }
}
