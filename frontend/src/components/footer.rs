use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <p>{"© 2026 dev.folio — built with Rust and Yew."}</p>
            </div>
        </footer>
    }
}
