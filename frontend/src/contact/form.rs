use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use gloo_net::http::Request;
use gloo_console::log;
use crate::config;
use crate::contact::schema::{
    interpret_submit_response, is_submittable, validate_field, validate_message, ContactMessage,
    Field, ValidationState,
};

fn apply_input(
    field: Field,
    value: String,
    message: &UseStateHandle<ContactMessage>,
    validation: &UseStateHandle<ValidationState>,
) {
    let mut msg = (**message).clone();
    msg.set(field, value);
    let mut state = (**validation).clone();
    state.record(field, validate_field(field, msg.get(field)));
    message.set(msg);
    validation.set(state);
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let message = use_state(ContactMessage::default);
    let validation = use_state(ValidationState::default);
    let is_submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let oninput_for = |field: Field| {
        let message = message.clone();
        let validation = validation.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            apply_input(field, value, &message, &validation);
        })
    };

    let onblur_for = |field: Field| {
        let message = message.clone();
        let validation = validation.clone();
        Callback::from(move |_: FocusEvent| {
            let mut state = (*validation).clone();
            state.record(field, validate_field(field, message.get(field)));
            validation.set(state);
        })
    };

    let oninput_message = {
        let message = message.clone();
        let validation = validation.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            apply_input(Field::Message, value, &message, &validation);
        })
    };

    let onsubmit = {
        let message = message.clone();
        let validation = validation.clone();
        let is_submitting = is_submitting.clone();
        let error_setter = error.clone();
        let success_setter = success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Defensive re-check: the button is disabled while invalid, but
            // never trust the UI alone.
            if let Err(errors) = validate_message(&message) {
                let mut state = (*validation).clone();
                state.record_all(errors);
                validation.set(state);
                error_setter.set(Some("Please correct the errors in the form".to_string()));
                return;
            }

            is_submitting.set(true);
            error_setter.set(None);

            let payload = (*message).clone();
            let message = message.clone();
            let validation = validation.clone();
            let is_submitting = is_submitting.clone();
            let error_setter = error_setter.clone();
            let success_setter = success_setter.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match Request::post(&format!("{}/api/contact", config::get_backend_url()))
                    .json(&payload)
                    .expect("contact payload serializes")
                    .send()
                    .await
                {
                    Ok(response) => {
                        let status = response.status();
                        let body = response.text().await.unwrap_or_default();
                        interpret_submit_response(status, &body)
                    }
                    Err(e) => {
                        log!("Network request failed:", e.to_string());
                        Err("Could not reach the server. Please try again later.".to_string())
                    }
                };

                match result {
                    Ok(()) => {
                        message.set(ContactMessage::default());
                        validation.set(ValidationState::default());
                        error_setter.set(None);
                        success_setter.set(Some(
                            "Message sent! Thanks for reaching out, I will reply soon.".to_string(),
                        ));
                        let success_setter = success_setter.clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            gloo_timers::future::TimeoutFuture::new(4_000).await;
                            success_setter.set(None);
                        });
                    }
                    Err(e) => {
                        error_setter.set(Some(e));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let field_error = |field: Field| -> Html {
        match validation.visible_error(field) {
            Some(err) => html! { <p class="field-error">{err}</p> },
            None => html! {},
        }
    };

    let submit_disabled = *is_submitting || !is_submittable(&message);

    html! {
        <section id="contact" class="section contact-section">
            <div class="container">
                <h2 class="section-title">{"Get in Touch"}</h2>
                <p class="section-subtitle">{"Have a project in mind? Send me a message."}</p>

                if let Some(msg) = (*success).clone() {
                    <div class="banner banner-success">{msg}</div>
                }
                if let Some(msg) = (*error).clone() {
                    <div class="banner banner-error">{msg}</div>
                }

                <form class="contact-form" onsubmit={onsubmit}>
                    <div class="form-row">
                        <div class="form-field">
                            <label for="name">{"Name"}</label>
                            <input
                                id="name"
                                type="text"
                                placeholder="Your name"
                                value={message.name.clone()}
                                oninput={oninput_for(Field::Name)}
                                onblur={onblur_for(Field::Name)}
                            />
                            { field_error(Field::Name) }
                        </div>
                        <div class="form-field">
                            <label for="email">{"Email"}</label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                value={message.email.clone()}
                                oninput={oninput_for(Field::Email)}
                                onblur={onblur_for(Field::Email)}
                            />
                            { field_error(Field::Email) }
                        </div>
                    </div>
                    <div class="form-field">
                        <label for="subject">{"Subject"}</label>
                        <input
                            id="subject"
                            type="text"
                            placeholder="What is this about?"
                            value={message.subject.clone()}
                            oninput={oninput_for(Field::Subject)}
                            onblur={onblur_for(Field::Subject)}
                        />
                        { field_error(Field::Subject) }
                    </div>
                    <div class="form-field">
                        <label for="message">{"Message"}</label>
                        <textarea
                            id="message"
                            rows="6"
                            placeholder="Tell me about your project..."
                            value={message.message.clone()}
                            oninput={oninput_message}
                            onblur={onblur_for(Field::Message)}
                        />
                        { field_error(Field::Message) }
                    </div>
                    <button type="submit" class="submit-button" disabled={submit_disabled}>
                        { if *is_submitting { "Sending..." } else { "Send Message" } }
                    </button>
                </form>
            </div>
        </section>
    }
}
