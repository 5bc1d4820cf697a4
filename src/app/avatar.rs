use leptos::prelude::*;

use crate::content::{Icon, PROFILE};
use crate::sections::SectionId;

#[component]
fn Avatar() -> impl IntoView {
    view! {
        <div class="w-64 h-64 mx-auto bg-gradient-to-br from-primary/20 to-blue-600/20 rounded-full flex items-center justify-center">
            <div class="w-48 h-48 bg-gradient-to-br from-primary to-blue-600 rounded-full flex items-center justify-center">
                <i class=format!("{} text-8xl text-white", Icon::Code.class())></i>
            </div>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str() class="py-20 bg-muted/10">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto">
                    <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">"About Me"</h2>
                    <div class="grid md:grid-cols-2 gap-12 items-center">
                        <div>
                            <Avatar />
                        </div>
                        <div class="space-y-6">
                            {PROFILE
                                .bio
                                .iter()
                                .map(|p| {
                                    view! {
                                        <p class="text-lg text-muted-foreground leading-relaxed">
                                            {*p}
                                        </p>
                                    }
                                })
                                .collect_view()}
                            <div class="flex flex-wrap gap-2">
                                {PROFILE
                                    .focus_tags
                                    .iter()
                                    .map(|tag| view! { <span class="badge badge-secondary">{*tag}</span> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
