use chrono::NaiveDate;
use contracts::shared::validation::{ValidationContext, ValidationErrors};
use contracts::system::support::SupportMessageDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::field_error::FieldError;
use crate::shared::date_utils;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::remote::{use_remote, RemoteApi};

/// Validate and send; an invalid form never reaches the network.
pub async fn submit_message<R: RemoteApi + ?Sized>(
    remote: &R,
    dto: &SupportMessageDto,
    today: NaiveDate,
) -> AppResult<()> {
    let dto = SupportMessageDto {
        email: dto.email.trim().to_string(),
        message: dto.message.trim().to_string(),
    };
    dto.validate(&ValidationContext::new(today))?;

    log::info!("Sending support message from {}", dto.email);
    remote.send_support_message(&dto).await.map_err(|e| {
        log::error!("Support message failed: {}", e);
        e
    })
}

#[component]
pub fn SupportPage() -> impl IntoView {
    let notifications = use_notifications();
    let remote = StoredValue::new(use_remote());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(None::<ValidationErrors>);
    let sending = RwSignal::new(false);

    let field_error = move |field: &'static str| {
        Signal::derive(move || {
            errors.with(|e| e.as_ref().and_then(|e| e.for_field(field)).map(str::to_string))
        })
    };

    let submit = move || {
        let dto = SupportMessageDto {
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let remote = remote.get_value();
        sending.set(true);
        spawn_local(async move {
            match submit_message(&remote, &dto, date_utils::today()).await {
                Ok(()) => {
                    errors.set(None);
                    email.set(String::new());
                    message.set(String::new());
                    notifications.success("Сообщение успешно отправлено!");
                }
                Err(AppError::Validation(e)) => errors.set(Some(e)),
                Err(e) => notifications.error(&e),
            }
            sending.set(false);
        });
    };

    view! {
        <PageFrame page_id="support--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("help-circle")}
                    <h1 class="page__title">"Поддержка"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="support-form">
                    <p>"Опишите проблему, и мы ответим на указанный email."</p>

                    <div class="form__group">
                        <Label>"Email *"</Label>
                        <Input value=email placeholder="you@example.com" />
                        <FieldError message=field_error("email") />
                    </div>

                    <div class="form__group">
                        <Label>"Сообщение *"</Label>
                        <Textarea value=message placeholder="Текст обращения" />
                        <FieldError message=field_error("message") />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| submit()
                        disabled=Signal::derive(move || sending.get())
                    >
                        {icon("send")}
                        {move || if sending.get() { " Отправка..." } else { " Отправить" }}
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}
