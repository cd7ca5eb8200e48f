pub mod state;

use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::a002_room::aggregate::{Room, RoomType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use crate::domain::a001_hotel::store::Reconciliation;
use crate::domain::a001_hotel::sync::SyncController;
use crate::domain::a002_room::filter::parse_price_bound;
use crate::domain::a002_room::ui::details::RoomDetails;
use crate::domain::a003_facility::catalog::use_facility_catalog;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::room_tab_key;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::remote::use_remote;

#[derive(Clone, Debug, PartialEq)]
enum RoomFormTarget {
    Create,
    Edit(Room),
}

/// Rooms of one hotel; opened as tab `a002_room_{hotel_id}`
#[component]
pub fn RoomPage(hotel_id: String) -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications = use_notifications();
    let catalog = use_facility_catalog();
    let remote = StoredValue::new(use_remote());
    let hotel_id = HotelId::new(hotel_id);
    let tab_key = room_tab_key(hotel_id.as_str());
    let state = create_state(hotel_id.clone());
    let hotel_id = StoredValue::new(hotel_id);
    let modal = RwSignal::new(None::<RoomFormTarget>);

    let type_input = RwSignal::new(String::new());
    let min_price_input = RwSignal::new(String::new());
    let max_price_input = RwSignal::new(String::new());
    let number_input = RwSignal::new(String::new());

    Effect::new(move || {
        let room_type = RoomType::from_code(&type_input.get());
        let min_price = parse_price_bound(&min_price_input.get());
        let max_price = parse_price_bound(&max_price_input.get());
        let number_query = number_input.get();
        untrack(move || {
            state.update(|s| {
                s.filter.room_type = room_type;
                s.filter.min_price = min_price;
                s.filter.max_price = max_price;
                s.filter.number_query = number_query;
            })
        });
    });

    let load_items = move || {
        state.update(|s| s.is_loading = true);
        let sync = SyncController::new(remote.get_value());
        let id = hotel_id.get_value();
        spawn_local(async move {
            match sync.load_hotel_rooms(&id).await {
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
            log::debug!("Loading rooms of hotel {}", hotel_id.get_value());
            load_items();
            catalog.ensure_loaded(remote.get_value());
        }
    });

    // Заголовок вкладки: название отеля после загрузки
    let title_set = StoredValue::new(false);
    Effect::new(move |_| {
        if title_set.get_value() {
            return;
        }
        if let Some(name) = state.with(|s| s.hotel().map(|h| h.name.clone())) {
            title_set.set_value(true);
            tabs_store.update_tab_title(&tab_key, &format!("Номера: {}", name));
        }
    });

    let on_done = Callback::new(move |change: Reconciliation| {
        state.update(|s| s.apply(change));
        modal.set(None);
    });

    let reset_filters = move || {
        type_input.set(String::new());
        min_price_input.set(String::new());
        max_price_input.set(String::new());
        number_input.set(String::new());
        state.update(|s| s.filter.reset());
    };

    let toggle_sort = move |field: &'static str| state.update(|s| s.toggle_sort(field));

    let visible = Memo::new(move |_| state.with(|s| s.visible()));
    let type_facet = Memo::new(move |_| state.with(|s| s.room_type_facet()));
    let loading = Signal::derive(move || state.with(|s| s.is_loading));
    let filters_active = Signal::derive(move || state.with(|s| !s.filter.is_empty()));

    let sort_header = move |field: &'static str, label: &'static str| {
        view! {
            <TableHeaderCell>
                <div
                    class="table__sortable-header"
                    style="cursor: pointer;"
                    on:click=move |_| toggle_sort(field)
                >
                    {label}
                    <span class=move || state.with(|s| get_sort_class(&s.sort_field, field))>
                        {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
                    </span>
                </div>
            </TableHeaderCell>
        }
    };

    view! {
        <PageFrame page_id="a002_room--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("bed")}
                    <h1 class="page__title">
                        {move || state.with(|s| s.hotel().map(|h| h.name.clone()))
                            .unwrap_or_else(|| "Номера".to_string())}
                    </h1>
                    <Badge>{move || state.with(|s| s.rooms().len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| modal.set(Some(RoomFormTarget::Create))
                        disabled=Signal::derive(move || !state.with(|s| s.is_loaded))
                    >
                        {icon("plus")}
                        " Добавить комнату"
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
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Medium align=FlexAlign::End>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Тип"</Label>
                                <Select value=type_input>
                                    <option value="">"Все типы"</option>
                                    {move || type_facet.get().into_iter().map(|t| view! {
                                        <option value=t.code()>{t.label()}</option>
                                    }).collect_view()}
                                </Select>
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Цена от"</Label>
                                <Input value=min_price_input placeholder="0" />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Цена до"</Label>
                                <Input value=max_price_input placeholder="∞" />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Номер"</Label>
                                <Input value=number_input placeholder="101" />
                            </Flex>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| reset_filters()
                                disabled=Signal::derive(move || !filters_active.get())
                            >
                                {icon("x")}
                                " Сбросить фильтры"
                            </Button>
                        </Flex>
                    </div>
                </div>

                {move || state.with(|s| s.error.clone()).map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {sort_header("room_number", "Номер")}
                                {sort_header("type", "Тип")}
                                {sort_header("price", "Цена, ₽")}
                                <TableHeaderCell>"Удобства"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || visible.get().into_iter().map(|room| {
                                let facilities = room
                                    .facilities
                                    .iter()
                                    .map(|f| f.name.as_str())
                                    .collect::<Vec<_>>()
                                    .join(", ");
                                let row = StoredValue::new(room.clone());
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a
                                                    href="#"
                                                    class="table__link"
                                                    on:click=move |e| {
                                                        e.prevent_default();
                                                        modal.set(Some(RoomFormTarget::Edit(row.get_value())));
                                                    }
                                                >
                                                    {room.room_number.clone()}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{room.room_type.label()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format!("{:.2}", room.price)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{facilities}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || state.with(|s| s.is_loaded) && visible.with(|v| v.is_empty())>
                    <div class="page__empty">
                        {move || if filters_active.get() {
                            "Нет комнат, подходящих под фильтры"
                        } else {
                            "В этом отеле пока нет комнат"
                        }}
                    </div>
                </Show>
            </div>

            {move || modal.get().map(|target| {
                let room = match target {
                    RoomFormTarget::Create => None,
                    RoomFormTarget::Edit(r) => Some(r),
                };
                view! {
                    <RoomDetails
                        hotel_id=hotel_id.get_value()
                        room=room
                        state=state
                        on_done=on_done
                        on_close=Callback::new(move |_| modal.set(None))
                    />
                }
            })}
        </PageFrame>
    }
}
