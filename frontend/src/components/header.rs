use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="site-header">
            <div class="container header-inner">
                <a class="logo" href="#top">{"dev.folio"}</a>
                <nav class="site-nav">
                    <a href="#about">{"About"}</a>
                    <a href="#services">{"Services"}</a>
                    <a href="#portfolio">{"Projects"}</a>
                    <a href="#testimonials">{"Testimonials"}</a>
                    <a href="#contact">{"Contact"}</a>
                </nav>
            </div>
        </header>
    }
}
