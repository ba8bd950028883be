use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub index: usize,
    pub question: String,
    pub open: bool,
    /// Emits this item's index; the section holding the open-item state
    /// decides what opens and closes, so expanding one entry collapses
    /// whichever was open before.
    pub on_toggle: Callback<usize>,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            if props.open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}
