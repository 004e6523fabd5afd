use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::page_section::PageSection;
use crate::components::reveal::Reveal;
use crate::content::{CONTACT_CHANNELS, CONTACT_SOCIALS};
use crate::forms::{ContactForm, FormError, Subject};
use crate::viewport::SectionId;

#[derive(Clone, PartialEq)]
enum Status {
    Editing,
    Invalid(FormError),
    Acknowledged,
}

#[function_component]
pub fn ContactFormPanel() -> Html {
    let form = use_state(ContactForm::default);
    let status = use_state(|| Status::Editing);

    let update = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };

    let on_name = {
        let update = update(|f, v| f.name = v);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let update = update(|f, v| f.email = v);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_subject = {
        let update = update(|f, v| f.subject = Subject::from_value(&v));
        Callback::from(move |e: Event| update(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_message = {
        let update = update(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    // Submission stays in the browser: validate and acknowledge.
    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(()) => {
                    log::info!("contact form completed ({:?})", form.subject);
                    form.set(ContactForm::default());
                    status.set(Status::Acknowledged);
                }
                Err(err) => status.set(Status::Invalid(err)),
            }
        })
    };

    let subject_value = form.subject.map(Subject::value).unwrap_or("");

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class="field">
                <label for="name">{"Your Name"}</label>
                <input type="text" id="name" placeholder="Enter your name" value={form.name.clone()} oninput={on_name} />
            </div>
            <div class="field">
                <label for="email">{"Email Address"}</label>
                <input type="email" id="email" placeholder="Enter your email" value={form.email.clone()} oninput={on_email} />
            </div>
            <div class="field">
                <label for="subject">{"Subject"}</label>
                <select id="subject" onchange={on_subject}>
                    <option value="" selected={subject_value.is_empty()}>{"Select a subject"}</option>
                    { for Subject::ALL.into_iter().map(|subject| html! {
                        <option value={subject.value()} selected={subject.value() == subject_value}>
                            { subject.label() }
                        </option>
                    }) }
                </select>
            </div>
            <div class="field">
                <label for="message">{"Message"}</label>
                <textarea id="message" rows="5" placeholder="Your message..." value={form.message.clone()} oninput={on_message} />
            </div>
            <button type="submit" class="primary-button wide">{"Send Message →"}</button>
            {
                match &*status {
                    Status::Editing => html! {},
                    Status::Invalid(err) => html! { <p class="form-error">{ err.to_string() }</p> },
                    Status::Acknowledged => html! {
                        <p class="form-success">{"Thanks for reaching out. We'll be in touch soon."}</p>
                    },
                }
            }
        </form>
    }
}

#[function_component]
pub fn Contact() -> Html {
    html! {
        <PageSection section={SectionId::Contact} class="tinted">
            <div class="container two-column">
                <Reveal id="contact-info">
                    <p class="eyebrow">{"CONTACT US"}</p>
                    <h2>{"Get in Touch"}</h2>
                    <p class="lede">
                        {"Have questions about the Society of Engineering Students or interested in collaborating on a project? \
                          Our team is ready to answer your queries and explore innovative partnerships."}
                    </p>
                    <div class="channel-list">
                        { for CONTACT_CHANNELS.iter().map(|channel| html! {
                            <div class="channel">
                                <h3>{ channel.title }</h3>
                                <p class={classes!(channel.monospace.then_some("mono"))}>
                                    { for channel.lines.iter().map(|line| html! { <>{ *line }<br /></> }) }
                                </p>
                            </div>
                        }) }
                    </div>
                    <div class="tag-row">
                        { for CONTACT_SOCIALS.iter().map(|social| html! {
                            <a href={format!("#{}", social)} aria-label={format!("Follow us on {}", social)} class="tag">
                                { *social }
                            </a>
                        }) }
                    </div>
                </Reveal>
                <Reveal id="contact-form" delay_ms={300}>
                    <ContactFormPanel />
                </Reveal>
            </div>
        </PageSection>
    }
}
