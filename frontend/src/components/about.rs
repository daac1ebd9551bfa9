use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    let skills = [
        "Rust", "WebAssembly", "TypeScript", "React", "Next.js", "PostgreSQL", "Docker",
    ];
    html! {
        <section id="about" class="section about-section">
            <div class="container">
                <h2 class="section-title">{"About Me"}</h2>
                <p class="section-subtitle">
                    {"Developer with a focus on performant front-ends and small, sharp back-end \
                      services. I like shipping things people actually use."}
                </p>
                <div class="skill-badges">
                    {
                        skills.iter().map(|s| html! {
                            <span class="badge" key={*s}>{*s}</span>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
