use yew::prelude::*;

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let testimonials = [
        Testimonial {
            quote: "Delivered the booking site ahead of schedule and it just works. \
                Our reservations doubled in two months.",
            author: "Marina S.",
            role: "Property owner",
        },
        Testimonial {
            quote: "The license bot removed all the manual key handling. Support tickets \
                about activation basically disappeared.",
            author: "Carlos M.",
            role: "Indie software vendor",
        },
        Testimonial {
            quote: "Clear communication, clean code, no surprises. Exactly what you want \
                from a contractor.",
            author: "Ana P.",
            role: "Agency lead",
        },
    ];
    html! {
        <section id="testimonials" class="section testimonials-section">
            <div class="container">
                <h2 class="section-title">{"Testimonials"}</h2>
                <div class="card-grid">
                    {
                        testimonials.iter().map(|t| html! {
                            <div class="card" key={t.author}>
                                <p class="quote">{format!("\u{201C}{}\u{201D}", t.quote)}</p>
                                <p class="attribution">{t.author}{" — "}{t.role}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
