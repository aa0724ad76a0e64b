use gloo_timers::future::TimeoutFuture;
use log::warn;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::browser;
use crate::components::notification::{Notifier, Severity};
use crate::config;
use crate::consultation::flow::{ContactFlow, SubmitOutcome};
use crate::consultation::message::SERVICES;
use crate::consultation::request::{ConsultationRequest, Field};
use crate::i18n::context::I18n;
use crate::i18n::translations::TranslationKey;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub i18n: I18n,
    pub notifier: Notifier,
}

pub enum ContactFormMsg {
    Update(Field, String),
    Submit,
    Deliver,
}

pub struct ContactForm {
    request: ConsultationRequest,
    flow: ContactFlow,
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            request: ConsultationRequest::default(),
            flow: ContactFlow::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Update(field, value) => {
                self.request.set(field, value);
                true
            }
            ContactFormMsg::Submit => match self.flow.submit(&self.request) {
                SubmitOutcome::Accepted => {
                    ctx.link().send_future(async {
                        TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                        ContactFormMsg::Deliver
                    });
                    true
                }
                SubmitOutcome::Rejected(errors) => {
                    ctx.props().notifier.show(errors.joined(), Severity::Error);
                    false
                }
                SubmitOutcome::Busy => false,
            },
            ContactFormMsg::Deliver => {
                let Some(link) = self.flow.complete() else {
                    return false;
                };
                if let Err(e) = browser::open_external(&link) {
                    warn!("{}", e);
                }
                self.request = ConsultationRequest::default();
                let props = ctx.props();
                props.notifier.show(props.i18n.t(TranslationKey::FormSuccess), Severity::Success);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let i18n = &ctx.props().i18n;
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let submitting = self.flow.is_submitting();

        html! {
            <form id="consultation-form" class="contact-form" novalidate={true} onsubmit={onsubmit}>
                { self.input(ctx, Field::Name, "text", TranslationKey::ContactFormName, &self.request.name) }
                { self.input(ctx, Field::Email, "email", TranslationKey::ContactFormEmail, &self.request.email) }
                { self.input(ctx, Field::Phone, "tel", TranslationKey::ContactFormPhone, &self.request.phone) }
                { self.input(ctx, Field::BirthDate, "date", TranslationKey::ContactFormBirthDate, &self.request.birth_date) }

                <div class="form-group">
                    <label for="service" data-translate={TranslationKey::ContactFormService.attr()}>
                        { i18n.t(TranslationKey::ContactFormService) }
                    </label>
                    <select
                        id="service"
                        name="service"
                        disabled={submitting}
                        onchange={ctx.link().callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            ContactFormMsg::Update(Field::Service, select.value())
                        })}
                    >
                        <option value="" selected={self.request.service.is_empty()}>
                            { i18n.t(TranslationKey::ContactFormServicePlaceholder) }
                        </option>
                        { for SERVICES.iter().map(|(code, name)| html! {
                            <option value={*code} selected={self.request.service == *code}>{ *name }</option>
                        }) }
                    </select>
                </div>

                <div class="form-group">
                    <label for="message" data-translate={TranslationKey::ContactFormMessage.attr()}>
                        { i18n.t(TranslationKey::ContactFormMessage) }
                    </label>
                    <textarea
                        id="message"
                        name="message"
                        rows="4"
                        disabled={submitting}
                        value={self.request.message.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            ContactFormMsg::Update(Field::Message, area.value())
                        })}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={submitting}>
                    if submitting {
                        <span class="loading"></span>
                        { " " }
                        { i18n.t(TranslationKey::FormSending) }
                    } else {
                        <span data-translate={TranslationKey::ContactFormBtn.attr()}>
                            { i18n.t(TranslationKey::ContactFormBtn) }
                        </span>
                    }
                </button>
            </form>
        }
    }
}

impl ContactForm {
    fn input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        kind: &'static str,
        label: TranslationKey,
        value: &str,
    ) -> Html {
        let id = label.attr();
        html! {
            <div class="form-group">
                <label for={id} data-translate={label.attr()}>{ ctx.props().i18n.t(label) }</label>
                <input
                    id={id}
                    type={kind}
                    value={value.to_string()}
                    disabled={self.flow.is_submitting()}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        ContactFormMsg::Update(field, input.value())
                    })}
                />
            </div>
        }
    }
}
