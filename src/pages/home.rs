use crate::components::faq::FaqItem;
use crate::components::tracking_widget::TrackingWidget;
use chrono::{Datelike, Utc};
use yew::prelude::*;

struct Service {
    title: &'static str,
    description: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Express Parcel",
        description: "Same-day pickup and time-bound delivery across 400+ cities.",
    },
    Service {
        title: "Surface Cargo",
        description: "Economical road freight for bulk consignments, door to door.",
    },
    Service {
        title: "International",
        description: "Customs-cleared air shipping to 190 destinations worldwide.",
    },
];

const FEATURES: &[&str] = &[
    "Live shipment tracking down to the last mile",
    "Doorstep pickup scheduled at your convenience",
    "Tamper-proof packaging for fragile consignments",
    "Dedicated support desk on WhatsApp and phone",
];

const FAQS: &[(&str, &str)] = &[
    (
        "How do I track my shipment?",
        "Enter the tracking ID from your booking receipt in the box above and \
         press Track. The latest checkpoint, location and time appear instantly.",
    ),
    (
        "What if my tracking ID shows no status?",
        "New bookings can take up to a few hours to appear in the courier \
         network. If nothing shows after 24 hours, contact our support desk \
         with your booking receipt.",
    ),
    (
        "Do you pick up from home?",
        "Yes. Schedule a pickup on WhatsApp and a courier partner will collect \
         the parcel from your doorstep, usually within the same business day.",
    ),
    (
        "Which areas do you serve?",
        "Express parcel covers 400+ cities with our own fleet; surface cargo \
         and international shipping reach virtually any pincode through \
         partner networks.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    let open_faq = use_state(|| None::<usize>);

    let on_faq_toggle = {
        let open_faq = open_faq.clone();
        Callback::from(move |index: usize| {
            if *open_faq == Some(index) {
                open_faq.set(None);
            } else {
                open_faq.set(Some(index));
            }
        })
    };

    let year = Utc::now().year();

    html! {
        <div class="landing">
            <section id="home" class="hero">
                <h1>{"Ship anywhere. Track everywhere."}</h1>
                <p class="hero-subtitle">
                    {"Courier, cargo and international shipping with doorstep \
                      pickup, plus live tracking for every consignment."}
                </p>
                <TrackingWidget />
            </section>

            <section id="services" class="services">
                <h2>{"Our Services"}</h2>
                <div class="service-grid">
                    { SERVICES.iter().map(|service| html! {
                        <div class="service-card">
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </div>
                    }).collect::<Html>() }
                </div>
            </section>

            <section id="why-us" class="features">
                <h2>{"Why Ship With Us"}</h2>
                <ul class="feature-list">
                    { FEATURES.iter().map(|feature| html! {
                        <li class="feature-item">{*feature}</li>
                    }).collect::<Html>() }
                </ul>
            </section>

            <section id="faq" class="faq-section">
                <h2>{"Frequently Asked Questions"}</h2>
                { FAQS.iter().enumerate().map(|(index, (question, answer))| html! {
                    <FaqItem
                        {index}
                        question={question.to_string()}
                        open={*open_faq == Some(index)}
                        on_toggle={on_faq_toggle.clone()}
                    >
                        <p>{*answer}</p>
                    </FaqItem>
                }).collect::<Html>() }
            </section>

            <footer id="contact" class="footer">
                <p>
                    {"Questions? Reach us on "}
                    <a href="https://wa.me/919876543210">{"WhatsApp"}</a>
                    {" or call the support desk."}
                </p>
                <p class="copyright">{format!("© {} SwiftShip Logistics", year)}</p>
            </footer>

            <style>
                {r#"
                    .landing {
                        color: #1e293b;
                        background: #f8fafc;
                    }
                    .landing section {
                        padding: 5rem 1.5rem;
                        max-width: 1080px;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .hero {
                        padding-top: 9rem;
                    }
                    .hero h1 {
                        font-size: 2.75rem;
                        color: #003a8f;
                        margin-bottom: 1rem;
                    }
                    .hero-subtitle {
                        font-size: 1.15rem;
                        color: #475569;
                        max-width: 640px;
                        margin: 0 auto 2.5rem;
                    }
                    .service-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                        margin-top: 2rem;
                    }
                    .service-card {
                        background: #fff;
                        border-radius: 16px;
                        padding: 2rem 1.5rem;
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
                        text-align: left;
                    }
                    .service-card h3 {
                        color: #003a8f;
                        margin-bottom: 0.5rem;
                    }
                    .feature-list {
                        list-style: none;
                        padding: 0;
                        max-width: 640px;
                        margin: 2rem auto 0;
                        text-align: left;
                    }
                    .feature-item {
                        background: #fff;
                        border-radius: 10px;
                        padding: 1rem 1.25rem;
                        margin-bottom: 0.75rem;
                        box-shadow: 0 2px 10px rgba(0, 0, 0, 0.04);
                    }
                    .faq-section {
                        max-width: 720px;
                    }
                    .faq-item {
                        background: #fff;
                        border-radius: 10px;
                        margin-top: 0.75rem;
                        text-align: left;
                        overflow: hidden;
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        background: none;
                        border: none;
                        padding: 1.1rem 1.25rem;
                        font-size: 1rem;
                        font-weight: 600;
                        color: #1e293b;
                        cursor: pointer;
                    }
                    .faq-item.open .toggle-icon {
                        color: #003a8f;
                    }
                    .faq-answer {
                        padding: 0 1.25rem 1.1rem;
                        color: #475569;
                    }
                    .footer {
                        padding: 3rem 1.5rem;
                        text-align: center;
                        background: #0f172a;
                        color: #cbd5e1;
                    }
                    .footer a {
                        color: #7eb2ff;
                    }
                    .copyright {
                        margin-top: 0.75rem;
                        font-size: 0.85rem;
                        color: #64748b;
                    }
                "#}
            </style>
        </div>
    }
}
