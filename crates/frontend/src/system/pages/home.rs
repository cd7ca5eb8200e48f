use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
pub fn HomePage() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <PageFrame page_id="home--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("home")}
                    <h1 class="page__title">"Добро пожаловать"</h1>
                </div>
            </div>
            <div class="page__content">
                <p>
                    "Панель администратора гостиничной сети: отели, номера и их удобства. "
                    "Отели можно фильтровать по городу, категории, дате доступности и названию; "
                    "номера отеля открываются в отдельной вкладке."
                </p>
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| tabs_store.open_tab("a001_hotel", "Отели")
                    >
                        {icon("building")}
                        " Перейти к отелям"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| tabs_store.open_tab("support", "Поддержка")
                    >
                        {icon("help-circle")}
                        " Поддержка"
                    </Button>
                </Flex>
            </div>
        </PageFrame>
    }
}
