use chrono::Datelike;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::content::{slugify, FOOTER_SOCIALS, FUTURE_TECH};
use crate::forms::{validate_email, FormError};
use crate::viewport::SectionId;

#[function_component]
pub fn NewsletterForm() -> Html {
    let email = use_state(String::new);
    let outcome = use_state(|| None::<Result<String, FormError>>);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    // Nothing is sent; a valid address is only acknowledged.
    let onsubmit = {
        let email = email.clone();
        let outcome = outcome.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_email(&email) {
                Ok(address) => {
                    log::info!("newsletter signup accepted locally");
                    outcome.set(Some(Ok(address.to_string())));
                    email.set(String::new());
                }
                Err(err) => outcome.set(Some(Err(err))),
            }
        })
    };

    html! {
        <form class="newsletter-form" onsubmit={onsubmit}>
            <input
                type="email"
                placeholder="Your email address"
                value={(*email).clone()}
                oninput={oninput}
            />
            <button type="submit">{"Subscribe →"}</button>
            {
                match &*outcome {
                    Some(Ok(address)) => html! {
                        <p class="form-success">{format!("Thanks! {} is on the list.", address)}</p>
                    },
                    Some(Err(err)) => html! { <p class="form-error">{err.to_string()}</p> },
                    None => html! {},
                }
            }
        </form>
    }
}

#[function_component]
pub fn Footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #030712;
                    color: #fff;
                    padding: 4rem 0;
                    position: relative;
                    overflow: hidden;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 2fr;
                    gap: 3rem;
                }
                .footer-grid h3 {
                    font-size: 1.1rem;
                    margin-bottom: 1.25rem;
                    background: linear-gradient(90deg, #f59e0b, #0ea5e9);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .footer-grid ul { list-style: none; padding: 0; margin: 0; }
                .footer-grid li { margin-bottom: 0.6rem; }
                .footer-grid a { color: #9ca3af; text-decoration: none; transition: color 0.2s ease; }
                .footer-grid a:hover { color: #f59e0b; }
                .footer-blurb { color: #9ca3af; line-height: 1.6; margin: 1rem 0; }
                .footer-socials { display: flex; gap: 0.75rem; }
                .footer-socials a {
                    border: 1px solid #1f2937;
                    padding: 0.4rem 0.6rem;
                    font-size: 0.8rem;
                    text-transform: capitalize;
                }
                .newsletter-form { display: flex; flex-direction: column; gap: 0.75rem; }
                .newsletter-form input {
                    background: rgba(31, 41, 55, 0.5);
                    border: 1px solid #374151;
                    color: #fff;
                    padding: 0.75rem 1rem;
                }
                .newsletter-form button {
                    background: linear-gradient(90deg, #f59e0b, #d97706);
                    color: #fff;
                    border: none;
                    padding: 0.75rem 1rem;
                    cursor: pointer;
                }
                .form-success { color: #34d399; font-size: 0.9rem; }
                .form-error { color: #f87171; font-size: 0.9rem; }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    padding: 1.5rem 1.5rem 0;
                    border-top: 1px solid #1f2937;
                    color: #6b7280;
                    font-size: 0.85rem;
                }
                @media (max-width: 900px) {
                    .footer-grid { grid-template-columns: 1fr 1fr; }
                }
                @media (max-width: 600px) {
                    .footer-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <span class="gradient-text footer-mark">{"SES"}</span>
                    <p class="footer-blurb">
                        {"Empowering the next generation of engineers through innovation, \
                          collaboration, and future-focused technologies at Jomo Kenyatta \
                          University of Agriculture and Technology."}
                    </p>
                    <div class="footer-socials">
                        { for FOOTER_SOCIALS.iter().map(|name| html! {
                            <a href={format!("#{}", name)} aria-label={format!("Follow us on {}", name)}>
                                { *name }
                            </a>
                        }) }
                    </div>
                </div>

                <div>
                    <h3>{"Navigation"}</h3>
                    <ul>
                        { for SectionId::NAV.into_iter().map(|section| html! {
                            <li><a href={section.href()}>{ section.label() }</a></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h3>{"Future Tech"}</h3>
                    <ul>
                        { for FUTURE_TECH.iter().map(|program| html! {
                            <li><a href={format!("#{}", slugify(program))}>{ *program }</a></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h3>{"Stay Connected"}</h3>
                    <p class="footer-blurb">
                        {"Subscribe to our newsletter for the latest innovations, events, and engineering breakthroughs."}
                    </p>
                    <NewsletterForm />
                </div>
            </div>
            <p class="footer-bottom">
                {format!("© {} Society of Engineering Students, JKUAT. All rights reserved.", year)}
            </p>
        </footer>
    }
}
