use yew::prelude::*;

struct Service {
    title: &'static str,
    description: &'static str,
}

#[function_component(Services)]
pub fn services() -> Html {
    let services = [
        Service {
            title: "Websites & Landing Pages",
            description: "Responsive, fast-loading sites built with modern tooling.",
        },
        Service {
            title: "Web Applications",
            description: "Interactive apps with real back-ends, from prototype to production.",
        },
        Service {
            title: "Bots & Automation",
            description: "Discord bots, scrapers and glue code that saves you hours.",
        },
    ];
    html! {
        <section id="services" class="section services-section">
            <div class="container">
                <h2 class="section-title">{"Services"}</h2>
                <div class="card-grid">
                    {
                        services.iter().map(|s| html! {
                            <div class="card" key={s.title}>
                                <h3>{s.title}</h3>
                                <p>{s.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
