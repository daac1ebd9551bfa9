use yew::prelude::*;

use crate::gallery::modal::ProjectModal;
use crate::gallery::state::GalleryItem;

#[derive(Clone, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub gallery: Vec<GalleryItem>,
    pub category: &'static str,
    pub technologies: Vec<&'static str>,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub link: Option<&'static str>,
    pub github: Option<&'static str>,
}

fn image(url: &str) -> GalleryItem {
    GalleryItem::Image { url: url.to_string() }
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "qr-code-generator",
            title: "QR Code Generator",
            description: "Minimalist web app for generating QR codes, with history, \
                toast notifications and a drag-and-drop area.",
            image: "/images/projects/qr-code/cover.png",
            gallery: vec![
                image("/images/projects/qr-code/1.png"),
                image("/images/projects/qr-code/2.png"),
            ],
            category: "websites",
            technologies: vec!["HTML5", "CSS3", "JavaScript", "LocalStorage"],
            challenge: "Build a modern, responsive app with plain web technologies only, \
                including generation history and drag-and-drop upload.",
            solution: "Semantic markup, CSS custom properties for theming, and vanilla \
                JavaScript for the generation logic with LocalStorage-backed history.",
            link: None,
            github: Some("https://github.com/example/qr-code-generator"),
        },
        Project {
            id: "booking-site",
            title: "Country House Booking",
            description: "Booking site for a rental property with image galleries, a \
                reservation calendar and a contact form.",
            image: "/images/projects/booking/cover.png",
            gallery: vec![
                image("/images/projects/booking/1.png"),
                image("/images/projects/booking/2.png"),
                image("/images/projects/booking/3.png"),
                image("/images/projects/booking/4.png"),
            ],
            category: "websites",
            technologies: vec!["Rust", "Yew", "WebAssembly", "Tailwind CSS"],
            challenge: "Make browsing the property feel immediate on mobile, where most \
                visitors arrive, while keeping the reservation flow simple.",
            solution: "A swipeable fullscreen gallery, a lightweight calendar widget and \
                a WhatsApp shortcut for instant contact.",
            link: Some("https://example.com/booking"),
            github: None,
        },
        Project {
            id: "license-bot",
            title: "Discord License Bot",
            description: "Discord bot managing software licenses: free trials, hardware \
                fingerprinting and automated key registration.",
            image: "/images/projects/license-bot/cover.png",
            gallery: vec![GalleryItem::Video { youtube_id: "dQw4w9WgXcQ".to_string() }],
            category: "automation",
            technologies: vec!["Rust", "Serenity", "SQLite"],
            challenge: "Prevent license sharing without punishing legitimate users who \
                upgrade their machines.",
            solution: "Hardware-bound keys with a self-service reset every 7 days, plus \
                a 3-hour trial issued once per fingerprint.",
            link: None,
            github: None,
        },
    ]
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let active_tab = use_state(|| "all");
    let selected_project = use_state(|| None::<Project>);

    let all_projects = projects();
    let filtered: Vec<Project> = all_projects
        .into_iter()
        .filter(|p| *active_tab == "all" || p.category == *active_tab)
        .collect();

    let tab_button = |id: &'static str, label: &str| {
        let active_tab = active_tab.clone();
        let is_active = *active_tab == id;
        let onclick = Callback::from(move |_: MouseEvent| active_tab.set(id));
        html! {
            <button
                class={classes!("tab", is_active.then_some("tab-active"))}
                onclick={onclick}
            >
                {label}
            </button>
        }
    };

    let on_modal_close = {
        let selected_project = selected_project.clone();
        Callback::from(move |_| selected_project.set(None))
    };

    html! {
        <section id="portfolio" class="section portfolio-section">
            <div class="container">
                <h2 class="section-title">{"My Projects"}</h2>
                <p class="section-subtitle">{"A selection of things I have built recently."}</p>

                <div class="tabs">
                    { tab_button("all", "All") }
                    { tab_button("websites", "Websites") }
                    { tab_button("automation", "Automation") }
                </div>

                <div class="project-grid">
                    {
                        filtered.iter().map(|project| {
                            let selected_project = selected_project.clone();
                            let p = project.clone();
                            let on_view = Callback::from(move |_: MouseEvent| {
                                selected_project.set(Some(p.clone()));
                            });
                            html! {
                                <div class="project-card" key={project.id}>
                                    <img src={project.image} alt={project.title} class="project-cover" />
                                    <div class="project-card-body">
                                        <h3>{project.title}</h3>
                                        <p>{project.description}</p>
                                        <button class="view-button" onclick={on_view}>{"View"}</button>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                if let Some(project) = (*selected_project).clone() {
                    <ProjectModal project={project} on_close={on_modal_close} />
                }
            </div>
        </section>
    }
}
