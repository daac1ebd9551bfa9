use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::TouchEvent;

use crate::components::portfolio::Project;
use crate::gallery::state::{GalleryItem, GalleryView, SlideDirection, Swipe, TouchTracker};
use crate::gallery::viewport;

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: Project,
    pub on_close: Callback<()>,
}

pub enum GalleryAction {
    Navigate(Swipe),
    ClearSlide,
    ToggleFullscreen,
    ExitFullscreen,
    Pinch(f64),
    PlayVideo,
}

// Timer callbacks and window listeners outlive the render they were created
// in, so all mutation goes through the reducer against the current state.
impl Reducible for GalleryView {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: GalleryAction) -> Rc<Self> {
        let mut view = (*self).clone();
        match action {
            GalleryAction::Navigate(Swipe::Next) => view.next(),
            GalleryAction::Navigate(Swipe::Previous) => view.previous(),
            GalleryAction::ClearSlide => view.clear_slide_direction(),
            GalleryAction::ToggleFullscreen => {
                view.toggle_fullscreen();
            }
            GalleryAction::ExitFullscreen => view.exit_fullscreen(),
            GalleryAction::Pinch(delta) => view.pinch_by(delta),
            GalleryAction::PlayVideo => view.play_video(),
        }
        Rc::new(view)
    }
}

fn touch_points(e: &TouchEvent) -> Vec<(i32, i32)> {
    let touches = e.touches();
    (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| (t.client_x(), t.client_y()))
        .collect()
}

fn navigate(view: &UseReducerHandle<GalleryView>, swipe: Swipe) {
    view.dispatch(GalleryAction::Navigate(swipe));
    // One-shot timer: the slide class only lives for the transition.
    let view = view.clone();
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(500).await;
        view.dispatch(GalleryAction::ClearSlide);
    });
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let view = use_reducer({
        let gallery = props.project.gallery.clone();
        move || GalleryView::new(gallery)
    });
    let tracker = use_mut_ref(TouchTracker::default);

    // Escape exits fullscreen first, then closes the modal. Re-registered
    // whenever the fullscreen flag changes so the listener sees the current
    // flag; removed on teardown.
    {
        let view = view.clone();
        let on_close = props.on_close.clone();
        let is_fullscreen = view.is_fullscreen();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new({
                        move |e: web_sys::KeyboardEvent| {
                            if e.key() == "Escape" {
                                if is_fullscreen {
                                    viewport::exit_immersive();
                                    view.dispatch(GalleryAction::ExitFullscreen);
                                } else {
                                    on_close.emit(());
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            is_fullscreen,
        );
    }

    // Whatever closed the modal, the viewport must come back.
    use_effect_with_deps(
        |_| {
            || {
                viewport::exit_immersive();
            }
        },
        (),
    );

    let on_next = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| navigate(&view, Swipe::Next))
    };
    let on_prev = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| navigate(&view, Swipe::Previous))
    };

    let ontouchstart = {
        let tracker = tracker.clone();
        Callback::from(move |e: TouchEvent| {
            tracker.borrow_mut().touch_start(&touch_points(&e));
        })
    };
    let ontouchmove = {
        let tracker = tracker.clone();
        let view = view.clone();
        Callback::from(move |e: TouchEvent| {
            match touch_points(&e).as_slice() {
                [(x, _)] => {
                    if view.len() > 1 {
                        if let Some(swipe) = tracker.borrow_mut().drag_to(*x) {
                            navigate(&view, swipe);
                        }
                    }
                }
                [a, b] => {
                    if let Some(delta) = tracker.borrow_mut().pinch_to(*a, *b) {
                        view.dispatch(GalleryAction::Pinch(delta));
                    }
                }
                _ => {}
            }
        })
    };
    let ontouchend = {
        let tracker = tracker.clone();
        Callback::from(move |_: TouchEvent| tracker.borrow_mut().touch_end())
    };

    let on_toggle_fullscreen = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            if view.is_fullscreen() {
                viewport::exit_immersive();
            } else {
                viewport::enter_immersive();
            }
            view.dispatch(GalleryAction::ToggleFullscreen);
        })
    };

    let on_play_video = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.dispatch(GalleryAction::PlayVideo))
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    let fullscreen = view.is_fullscreen();
    let slide_class = match view.slide_direction() {
        SlideDirection::Forward => Some("slide-forward"),
        SlideDirection::Backward => Some("slide-backward"),
        SlideDirection::None => None,
    };

    let media = match view.current() {
        GalleryItem::Image { url } => html! {
            <img
                src={url.clone()}
                alt={format!("{} - screenshot", props.project.title)}
                class={classes!("gallery-image", slide_class)}
                style={format!("transform: scale({:.2});", view.zoom())}
            />
        },
        GalleryItem::Video { youtube_id } => {
            if view.is_video_playing() {
                html! {
                    <iframe
                        src={format!("https://www.youtube.com/embed/{}?rel=0", youtube_id)}
                        class="gallery-video"
                        allow="accelerometer; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen=true
                    />
                }
            } else {
                html! {
                    <div class="video-thumbnail" onclick={on_play_video}>
                        <img
                            src={format!("https://i.ytimg.com/vi/{}/maxresdefault.jpg", youtube_id)}
                            alt={format!("{} - video thumbnail", props.project.title)}
                            class="gallery-image"
                        />
                        <div class="play-overlay">
                            <svg viewBox="0 0 24 24" fill="currentColor">
                                <path d="M8 5v14l11-7z"/>
                            </svg>
                        </div>
                    </div>
                }
            }
        }
    };

    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div
                class={classes!("modal-content", fullscreen.then_some("modal-fullscreen"))}
                onclick={stop_propagation}
            >
                if !fullscreen {
                    <div class="modal-header">
                        <h2>{props.project.title}</h2>
                        <button class="modal-close" onclick={on_close_click}>{"✕"}</button>
                    </div>
                }

                <div
                    class="gallery-area"
                    ontouchstart={ontouchstart}
                    ontouchmove={ontouchmove}
                    ontouchend={ontouchend}
                >
                    <button class="fullscreen-toggle" onclick={on_toggle_fullscreen}>
                        { if fullscreen { "⤡" } else { "⤢" } }
                    </button>

                    { media }

                    if view.len() > 1 {
                        <button class="gallery-nav gallery-prev" onclick={on_prev}>{"‹"}</button>
                        <button class="gallery-nav gallery-next" onclick={on_next}>{"›"}</button>
                        <div class="gallery-dots">
                            {
                                (0..view.len()).map(|i| {
                                    let active = i == view.index();
                                    html! {
                                        <span class={classes!("dot", active.then_some("dot-active"))} key={i} />
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    }
                </div>

                if !fullscreen {
                    <div class="modal-details">
                        <div>
                            <h3>{"Description"}</h3>
                            <p>{props.project.description}</p>
                            <h3>{"Challenge"}</h3>
                            <p>{props.project.challenge}</p>
                            <h3>{"Solution"}</h3>
                            <p>{props.project.solution}</p>
                        </div>
                        <div>
                            <h3>{"Technologies"}</h3>
                            <div class="tech-badges">
                                {
                                    props.project.technologies.iter().map(|tech| html! {
                                        <span class="badge" key={*tech}>{*tech}</span>
                                    }).collect::<Html>()
                                }
                            </div>
                            if props.project.github.is_some() || props.project.link.is_some() {
                                <h3>{"Links"}</h3>
                                if let Some(github) = props.project.github {
                                    <a class="project-link" href={github} target="_blank">{"View Code"}</a>
                                }
                                if let Some(link) = props.project.link {
                                    <a class="project-link" href={link} target="_blank">{"Live Demo"}</a>
                                }
                            }
                        </div>
                    </div>
                }
            </div>
        </div>
    }
}
