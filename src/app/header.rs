use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::PROFILE;
use crate::sections::{next_active_section, scroll_to_section, SectionId, NAV_ITEMS};

use super::DomLayout;

/// Tracks which section is in view. The window scroll listener lives as long
/// as the calling component's owner.
pub fn use_active_section() -> RwSignal<SectionId> {
    let active = RwSignal::new(SectionId::default());
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        let y = scroll_y.get();
        let current = active.get_untracked();
        let next = next_active_section(&DomLayout, current, y);
        if next != current {
            log::debug!("active section {current} -> {next}");
            active.set(next);
        }
    });

    active
}

#[component]
pub fn Header(#[prop(into)] active: Signal<SectionId>) -> impl IntoView {
    view! {
        <nav class="fixed top-0 w-full bg-background/80 backdrop-blur-sm border-b z-50">
            <div class="container mx-auto px-4 py-4">
                <div class="flex justify-between items-center">
                    <div class="font-bold text-xl">{PROFILE.name}</div>
                    <div class="hidden md:flex space-x-6">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let section = item.section;
                                view! {
                                    <button
                                        class=move || {
                                            if active.get() == section {
                                                "text-sm font-medium transition-colors hover:text-primary text-primary"
                                            } else {
                                                "text-sm font-medium transition-colors hover:text-primary text-muted-foreground"
                                            }
                                        }
                                        aria-current=move || (active.get() == section).then_some("true")
                                        on:click=move |_| scroll_to_section(&DomLayout, section)
                                    >
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}
