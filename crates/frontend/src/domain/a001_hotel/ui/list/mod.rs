pub mod state;

use contracts::domain::a001_hotel::aggregate::Hotel;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use crate::domain::a001_hotel::filter::HotelFilter;
use crate::domain::a001_hotel::store::Reconciliation;
use crate::domain::a001_hotel::sync::SyncController;
use crate::domain::a001_hotel::ui::card::HotelCard;
use crate::domain::a001_hotel::ui::details::HotelDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::room_tab_key;
use crate::shared::components::date_input::DateInput;
use crate::shared::icons::icon;
use crate::shared::mutation::EntityKey;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote::use_remote;

const NAMES_DATALIST_ID: &str = "a001-hotel-names";

/// What the modal is open for
#[derive(Clone, Debug, PartialEq)]
enum HotelFormTarget {
    Create,
    Edit(Hotel),
}

#[component]
pub fn HotelList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications = use_notifications();
    let remote = StoredValue::new(use_remote());
    let state = create_state();
    let (is_filter_expanded, set_is_filter_expanded) = signal(true);
    let modal = RwSignal::new(None::<HotelFormTarget>);

    // Raw filter inputs; the predicate in `state.filter` is derived from them
    let city_input = RwSignal::new(String::new());
    let category_input = RwSignal::new(String::new());
    let date_input = RwSignal::new(String::new());
    let name_input = RwSignal::new(String::new());

    let clear_inputs = move || {
        city_input.set(String::new());
        category_input.set(String::new());
        date_input.set(String::new());
        name_input.set(String::new());
    };

    Effect::new(move || {
        let filter = HotelFilter::from_inputs(
            &city_input.get(),
            &category_input.get(),
            &date_input.get(),
            &name_input.get(),
        );
        untrack(move || state.update(|s| s.filter = filter));
    });

    let load_items = move || {
        state.update(|s| s.is_loading = true);
        let sync = SyncController::new(remote.get_value());
        spawn_local(async move {
            match sync.load().await {
                Ok(change) => state.update(|s| s.apply(change)),
                Err(e) => {
                    state.update(|s| s.load_failed(e.to_string()));
                    notifications.error(&e);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            log::debug!("Loading hotels...");
            load_items();
        }
    });

    let on_saved = Callback::new(move |change: Reconciliation| {
        if change.resets_filters() {
            clear_inputs();
        }
        state.update(|s| s.apply(change));
        modal.set(None);
    });

    let on_delete = Callback::new(move |hotel: Hotel| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Удалить отель \"{}\"?", hotel.display_name()))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let key = EntityKey::Hotel(hotel.id.clone());
        let mut started = Ok(());
        state.update(|s| started = s.mutations.begin(key.clone()));
        if let Err(e) = started {
            notifications.error(&e);
            return;
        }

        let sync = SyncController::new(remote.get_value());
        spawn_local(async move {
            let result = sync.delete_hotel(&hotel.id).await;
            state.update(|s| s.mutations.finish(key, &result));
            match result {
                Ok(change) => {
                    state.update(|s| s.apply(change));
                    notifications.success("Отель удалён");
                }
                Err(e) => notifications.error(&e),
            }
        });
    });

    let on_edit = Callback::new(move |hotel: Hotel| modal.set(Some(HotelFormTarget::Edit(hotel))));

    let on_open_rooms = Callback::new(move |hotel: Hotel| {
        tabs_store.open_tab(
            &room_tab_key(hotel.id.as_str()),
            &format!("Номера: {}", hotel.name),
        );
    });

    let reset_filters = move || {
        clear_inputs();
        state.update(|s| s.filter.reset());
    };

    let facets = Memo::new(move |_| state.with(|s| s.facets()));
    let visible = Memo::new(move |_| state.with(|s| s.filtered()));
    let active_filters_count = Signal::derive(move || state.with(|s| s.filter.active_count()));
    let loading = Signal::derive(move || state.with(|s| s.is_loading));

    view! {
        <PageFrame page_id="a001_hotel--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("building")}
                    <h1 class="page__title">"Отели"</h1>
                    <Badge>
                        {move || format!(
                            "{} / {}",
                            visible.with(|v| v.len()),
                            state.with(|s| s.store.len()),
                        )}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| modal.set(Some(HotelFormTarget::Create))
                    >
                        {icon("plus")}
                        " Добавить отель"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_items()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div
                            class="filter-panel-header__left"
                            on:click=move |_| set_is_filter_expanded.update(|e| *e = !*e)
                        >
                            {icon("filter")}
                            <span class="filter-panel__title">"Фильтры"</span>
                            {move || {
                                let count = active_filters_count.get();
                                (count > 0).then(|| view! { <span class="filter-panel__badge">{count}</span> })
                            }}
                        </div>
                        <div class="filter-panel-header__right">
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| reset_filters()
                                disabled=Signal::derive(move || active_filters_count.get() == 0)
                            >
                                {icon("x")}
                                " Сбросить"
                            </Button>
                        </div>
                    </div>

                    <Show when=move || is_filter_expanded.get()>
                        <div class="filter-panel-content">
                            <Flex gap=FlexGap::Medium align=FlexAlign::End>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Город"</Label>
                                    <Select value=city_input>
                                        <option value="">"Все города"</option>
                                        <For
                                            each=move || facets.get().cities
                                            key=|c| c.clone()
                                            children=|c| view! { <option value=c.clone()>{c.clone()}</option> }
                                        />
                                    </Select>
                                </Flex>

                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Категория"</Label>
                                    <Select value=category_input>
                                        <option value="">"Все категории"</option>
                                        <For
                                            each=move || facets.get().categories
                                            key=|c| c.clone()
                                            children=|c| view! { <option value=c.clone()>{c.clone()}</option> }
                                        />
                                    </Select>
                                </Flex>

                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Доступен до"</Label>
                                    <DateInput value=date_input />
                                </Flex>

                                <div style="flex: 1; max-width: 320px;">
                                    <Flex vertical=true gap=FlexGap::Small>
                                        <Label>"Название"</Label>
                                        <input
                                            type="text"
                                            class="input"
                                            list=NAMES_DATALIST_ID
                                            placeholder="Поиск по названию..."
                                            prop:value=move || name_input.get()
                                            on:input=move |ev| name_input.set(event_target_value(&ev))
                                        />
                                        <datalist id=NAMES_DATALIST_ID>
                                            {move || facets.get().names.into_iter()
                                                .map(|n| view! { <option value=n /> })
                                                .collect_view()}
                                        </datalist>
                                    </Flex>
                                </div>
                            </Flex>
                        </div>
                    </Show>
                </div>

                {move || state.with(|s| s.error.clone()).map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <Show
                    when=move || state.with(|s| s.is_loaded) || !loading.get()
                    fallback=|| view! { <div class="page__loading"><Spinner /></div> }
                >
                    <Show
                        when=move || !visible.with(|v| v.is_empty())
                        fallback=move || {
                            let text = if state.with(|s| s.store.is_empty()) {
                                "Отелей пока нет"
                            } else {
                                "Нет отелей, подходящих под фильтры"
                            };
                            view! { <div class="page__empty">{text}</div> }
                        }
                    >
                        <div class="hotel-grid">
                            {move || visible.get().into_iter().map(|hotel| {
                                let key = EntityKey::Hotel(hotel.id.clone());
                                let pending = Signal::derive(move || {
                                    state.with(|s| s.mutations.is_pending(&key))
                                });
                                view! {
                                    <HotelCard
                                        hotel=hotel
                                        pending=pending
                                        on_edit=on_edit
                                        on_delete=on_delete
                                        on_open_rooms=on_open_rooms
                                    />
                                }
                            }).collect_view()}
                        </div>
                    </Show>
                </Show>
            </div>

            {move || modal.get().map(|target| {
                let hotel = match target {
                    HotelFormTarget::Create => None,
                    HotelFormTarget::Edit(h) => Some(h),
                };
                view! {
                    <HotelDetails
                        hotel=hotel
                        state=state
                        on_saved=on_saved
                        on_close=Callback::new(move |_| modal.set(None))
                    />
                }
            })}
        </PageFrame>
    }
}
