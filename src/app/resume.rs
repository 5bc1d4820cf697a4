use leptos::{either::Either, prelude::*};

use crate::content::{
    EntryBody, ExperienceEntry, Icon, Project, SkillGroup, EXPERIENCE, PROJECTS, SKILL_GROUPS,
};
use crate::sections::SectionId;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=SectionId::Skills.as_str() class="py-20">
            <div class="container mx-auto px-4">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">
                        "Skills & Expertise"
                    </h2>
                    <div class="grid md:grid-cols-2 gap-8">
                        {SKILL_GROUPS.iter().map(|group| view! { <SkillCard group /> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">
                <h3 class="card-title flex items-center gap-2">
                    <i class=format!("{} text-2xl {}", group.icon.class(), group.accent.text())></i>
                    {group.title}
                </h3>
                <p class="card-description">{group.description}</p>
            </div>
            <div class="card-content space-y-4">
                <div class="grid grid-cols-2 gap-4">
                    {group
                        .highlights
                        .iter()
                        .map(|(icon, label)| {
                            view! {
                                <div class="flex items-center gap-2">
                                    <i class=icon.class()></i>
                                    <span class="text-sm">{*label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <hr class="separator" />
                {group
                    .meters
                    .iter()
                    .map(|meter| {
                        view! {
                            <div class="space-y-2">
                                <div class="flex justify-between text-sm">
                                    <span>{meter.label}</span>
                                    <span class="text-muted-foreground">{format!("{}%", meter.percent)}</span>
                                </div>
                                <div class="w-full bg-muted rounded-full h-2">
                                    <div
                                        class=format!("{} h-2 rounded-full", group.accent.bar())
                                        style=format!("width: {}%", meter.percent)
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=SectionId::Projects.as_str() class="py-20 bg-muted/10">
            <div class="container mx-auto px-4">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">
                        "Featured Projects"
                    </h2>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="card group hover:shadow-lg transition-shadow">
            <div class="card-header">
                <div class="flex items-center justify-between">
                    <i class=format!("{} text-3xl {}", project.icon.class(), project.accent.text())></i>
                    <i class=format!(
                        "{} text-muted-foreground group-hover:text-primary transition-colors",
                        Icon::ExternalLink.class(),
                    )></i>
                </div>
                <h3 class="card-title">{project.title}</h3>
                <p class="card-description">{project.summary}</p>
            </div>
            <div class="card-content">
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .stack
                        .iter()
                        .map(|tech| view! { <span class="badge badge-outline">{*tech}</span> })
                        .collect_view()}
                </div>
                <p class="text-sm text-muted-foreground">{project.detail}</p>
            </div>
        </div>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id=SectionId::Experience.as_str() class="py-20">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto">
                    <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">
                        "Experience & Education"
                    </h2>
                    <div class="space-y-8">
                        {EXPERIENCE.iter().map(|entry| view! { <ExperienceCard entry /> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(entry: &'static ExperienceEntry) -> impl IntoView {
    let body = match entry.body {
        EntryBody::Bullets(items) => Either::Left(view! {
            <ul class="space-y-2 text-muted-foreground">
                {items.iter().map(|item| view! { <li>"• "{*item}</li> }).collect_view()}
            </ul>
        }),
        EntryBody::Paragraph(text) => {
            Either::Right(view! { <p class="text-muted-foreground">{text}</p> })
        }
    };
    view! {
        <div class="card">
            <div class="card-header">
                <div class="flex items-center gap-3">
                    <i class=format!("{} text-2xl {}", entry.icon.class(), entry.accent.text())></i>
                    <div>
                        <h3 class="card-title">{entry.role}</h3>
                        <p class="card-description">{entry.subtitle()}</p>
                    </div>
                </div>
            </div>
            <div class="card-content">{body}</div>
        </div>
    }
}
