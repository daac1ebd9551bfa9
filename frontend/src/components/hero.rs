use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="top" class="hero">
            <div class="container">
                <p class="hero-kicker">{"Full-stack developer"}</p>
                <h1 class="hero-title">{"I build fast, reliable web experiences."}</h1>
                <p class="hero-subtitle">
                    {"From landing pages to automation bots, I turn ideas into working software."}
                </p>
                <a class="cta-button" href="#contact">{"Start a project"}</a>
            </div>
        </section>
    }
}
