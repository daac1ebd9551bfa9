use yew::prelude::*;

use crate::components::about::About;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::portfolio::Portfolio;
use crate::components::services::Services;
use crate::components::testimonials::Testimonials;
use crate::contact::form::Contact;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Header />
            <main>
                <Hero />
                <About />
                <Services />
                <Portfolio />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
        </>
    }
}
