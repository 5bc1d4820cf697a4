use leptos::prelude::*;

use crate::content::{Icon, CONTACT_CHANNELS, CONTACT_EMAIL, PROFILE};
use crate::sections::SectionId;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=SectionId::Contact.as_str() class="py-20 bg-muted/10">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-8">"Let's Work Together"</h2>
                    <p class="text-xl text-muted-foreground mb-12">
                        "Interested in collaborating on data science or cybersecurity projects? I'd love to hear from you."
                    </p>
                    <div class="grid md:grid-cols-3 gap-8 mb-12">
                        {CONTACT_CHANNELS
                            .iter()
                            .map(|channel| {
                                view! {
                                    <div class="card">
                                        <div class="card-content pt-6 text-center">
                                            <i class=format!(
                                                "{} text-3xl text-primary mx-auto mb-4 block",
                                                channel.icon.class(),
                                            )></i>
                                            <h3 class="font-semibold mb-2">{channel.label}</h3>
                                            <a
                                                href=channel.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="text-muted-foreground hover:text-primary"
                                            >
                                                {channel.display}
                                            </a>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <a
                        href=format!("mailto:{CONTACT_EMAIL}")
                        class="btn btn-lg btn-primary bg-gradient-to-r from-primary to-blue-600 hover:from-primary/90 hover:to-blue-600/90"
                    >
                        <i class=format!("{} mr-2", Icon::Mail.class())></i>
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t">
            <div class="container mx-auto px-4 text-center">
                <p class="text-muted-foreground">
                    {format!("© 2024 {}. Built with Rust, Leptos and Tailwind CSS.", PROFILE.name)}
                </p>
            </div>
        </footer>
    }
}
