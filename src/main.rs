use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod tracking;
mod components {
    pub mod faq;
    pub mod tracking_widget;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#why-us", "Why Us"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

#[function_component(Nav)]
fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 50);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">{"SwiftShip"}</a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>
                            {*label}
                        </a>
                    }).collect::<Html>() }
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        background: rgba(255, 255, 255, 0.7);
                        backdrop-filter: blur(8px);
                        box-shadow: 0 2px 8px rgba(0, 0, 0, 0.04);
                        transition: background 0.2s, box-shadow 0.2s;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
                    }
                    .nav-content {
                        max-width: 1080px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #003a8f;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        color: #1e293b;
                        text-decoration: none;
                        font-weight: 500;
                    }
                    .nav-link:hover {
                        color: #003a8f;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #1e293b;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-links {
                            display: none;
                        }
                        .nav-links.mobile-menu-open {
                            display: flex;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            background: #fff;
                            padding: 1rem 1.5rem;
                            box-shadow: 0 8px 20px rgba(0, 0, 0, 0.08);
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
