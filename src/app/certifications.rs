use leptos::{ev, prelude::*};

use crate::certificates::{
    CertModal, Certificate, CertificateId, ModalEvent, CARD_IMAGE_SIZE, CERTIFICATES, CERT_STATS,
    MODAL_IMAGE_SIZE,
};
use crate::placeholder::placeholder_url;
use crate::sections::SectionId;

#[component]
pub fn Certifications() -> impl IntoView {
    let modal = RwSignal::new(CertModal::default());
    let dispatch = move |event: ModalEvent| modal.update(|m| m.handle(event));

    let escape_handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && modal.get_untracked().is_open() {
            dispatch(ModalEvent::EscapePressed);
        }
    });
    on_cleanup(move || escape_handle.remove());

    view! {
        <section id=SectionId::Certifications.as_str() class="py-20 bg-muted/10">
            <div class="container mx-auto px-4">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">"Certifications"</h2>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {CERTIFICATES
                            .iter()
                            .map(|cert| {
                                let id = cert.id;
                                view! {
                                    <CertificateCard
                                        cert
                                        on_select=move || dispatch(ModalEvent::CardClicked(id))
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                    {move || {
                        modal
                            .get()
                            .selected()
                            .map(|id| {
                                view! {
                                    <CertificateModal
                                        id
                                        on_backdrop=move || dispatch(ModalEvent::BackdropClicked)
                                        on_dismiss=move || dispatch(ModalEvent::DismissClicked)
                                        on_body=move || dispatch(ModalEvent::BodyClicked)
                                    />
                                }
                            })
                    }}
                    <CertificationStats />
                </div>
            </div>
        </section>
    }
}

#[component]
fn CertificateCard<F>(cert: &'static Certificate, on_select: F) -> impl IntoView
where
    F: Fn() + Send + Sync + 'static,
{
    let accent = cert.category.accent();
    let (width, height) = CARD_IMAGE_SIZE;
    view! {
        <div
            class=format!(
                "card group hover:shadow-lg transition-all duration-300 border-l-4 {} cursor-pointer",
                accent.border_left(),
            )
            role="button"
            on:click=move |_| on_select()
        >
            <div class="card-header pb-3">
                <div class="flex items-center justify-between">
                    <i class=format!("{} text-4xl {}", cert.icon.class(), accent.text())></i>
                    <span class=format!("badge badge-secondary {}", accent.badge())>
                        {cert.category.label()}
                    </span>
                </div>
                <div class="mt-4 mb-3">
                    <img
                        src=placeholder_url(width, height)
                        alt=cert.image_alt
                        class="w-full h-24 object-cover rounded-md border"
                    />
                </div>
                <h3 class="card-title text-lg">{cert.title}</h3>
                <p class="card-description text-sm">{cert.name}</p>
            </div>
            <div class="card-content pt-0">
                <div class="space-y-2">
                    <div class="flex justify-between items-center">
                        <span class="text-sm font-medium">{cert.issuer}</span>
                        <span class="text-xs text-muted-foreground">{cert.issue_year}</span>
                    </div>
                    <div class="text-xs text-muted-foreground">
                        {format!("Valid until: {}", cert.valid_until_label())}
                    </div>
                    <button class="btn btn-sm btn-outline w-full mt-2 bg-transparent">
                        "View Certificate"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CertificateModal<B, D, C>(
    id: CertificateId,
    on_backdrop: B,
    on_dismiss: D,
    on_body: C,
) -> impl IntoView
where
    B: Fn() + Send + Sync + 'static,
    D: Fn() + Send + Sync + 'static,
    C: Fn() + Send + Sync + 'static,
{
    let (width, height) = MODAL_IMAGE_SIZE;
    let cert = id.certificate();
    view! {
        <div
            class="fixed inset-0 bg-black/50 flex items-center justify-center z-50 p-4"
            on:click=move |_| on_backdrop()
        >
            <div
                class="bg-white rounded-lg max-w-4xl w-full max-h-[90vh] overflow-auto"
                role="dialog"
                aria-modal="true"
                aria-label=id.modal_title()
                on:click=move |ev: ev::MouseEvent| {
                    ev.stop_propagation();
                    on_body();
                }
            >
                <div class="p-6">
                    <div class="flex justify-between items-center mb-4">
                        <h3 class="text-2xl font-bold">"Certificate Details"</h3>
                        <button
                            class="btn btn-sm btn-ghost"
                            aria-label="Close"
                            on:click=move |ev: ev::MouseEvent| {
                                ev.stop_propagation();
                                on_dismiss();
                            }
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="text-center">
                        <img
                            src=placeholder_url(width, height)
                            alt=cert.image_alt
                            class="w-full max-w-2xl mx-auto rounded-lg border shadow-lg"
                        />
                        <div class="mt-6 space-y-2">
                            <p class="text-lg font-semibold">{id.modal_title()}</p>
                            <p class="text-sm text-muted-foreground">
                                {cert.issuer} " • Valid until " {cert.valid_until_label()}
                            </p>
                            <p class="text-muted-foreground">"Click outside to close"</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CertificationStats() -> impl IntoView {
    view! {
        <div class="mt-12 grid grid-cols-2 md:grid-cols-4 gap-6">
            {CERT_STATS
                .iter()
                .map(|stat| {
                    view! {
                        <div class="text-center">
                            <div class=format!("text-3xl font-bold mb-2 {}", stat.accent.text())>
                                {stat.value}
                            </div>
                            <div class="text-sm text-muted-foreground">{stat.label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use std::sync::Arc;

    use hydration_context::SsrSharedContext;

    use super::*;

    fn render_modal(id: CertificateId) -> String {
        let owner = Owner::new_root(Some(Arc::new(SsrSharedContext::new())));
        owner.with(|| {
            view! {
                <CertificateModal
                    id=id
                    on_backdrop=|| ()
                    on_dismiss=|| ()
                    on_body=|| ()
                />
            }
            .to_html()
        })
    }

    #[test]
    fn test_modal_shows_selected_certificate() {
        let html = render_modal(CertificateId::AwsMl);
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("AWS Certified Machine Learning - Specialty"));
        assert!(html.contains("Amazon Web Services"));
        assert!(html.contains("Nov 2025"));
        assert!(html.contains("alt=\"AWS ML Certificate\""));
        assert!(html.contains("/placeholder.svg?height=400"));
        assert!(html.contains("width=600"));
        assert!(html.contains("Click outside to close"));
    }
}
