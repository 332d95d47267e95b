use crate::app::use_auth;
use crate::components::atoms::{
    Badge, Button, Card, CardContent, CardHeader, RadioGroup, Select, Switch,
};
use crate::components::organisms::NewItemDialog;
use crate::core::dashboard::{
    DashboardItem, DashboardState, SortOrder, StatusFilter, fetch_items, visible_items,
};
use crate::core::store::AppStore;
use crate::core::styles::{BadgeVariant, ButtonSize, ButtonVariant};
use crate::services::timer::TimerDelay;
use gloo::console;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

/// Card grid of dashboard items with filter, sort, and density controls.
#[function_component(DashboardList)]
pub(crate) fn dashboard_list() -> Html {
    let auth = use_auth();
    let state = use_selector(|store: &AppStore| store.dashboard.clone());
    let filter = use_state_eq(StatusFilter::default);
    let order = use_state_eq(SortOrder::default);
    let compact = use_state_eq(|| false);
    let dialog_open = use_state_eq(|| false);

    {
        let latency = auth.config.mock_latency();
        use_effect_with_deps(
            move |_| {
                let dispatch = Dispatch::<AppStore>::new();
                dispatch.reduce_mut(|store| store.dashboard = DashboardState::Loading);
                yew::platform::spawn_local(async move {
                    let result = fetch_items(&TimerDelay, latency).await;
                    if let Err(err) = &result {
                        console::error!("dashboard load failed", err.to_string());
                    }
                    dispatch.reduce_mut(move |store| {
                        store.dashboard = DashboardState::from_result(result);
                    });
                });
                || ()
            },
            (),
        );
    }

    let items = match &*state {
        DashboardState::Loading => {
            return html! {
                <div class="flex justify-center items-center h-64">
                    <div class="text-muted-foreground">{"Loading..."}</div>
                </div>
            };
        }
        DashboardState::Failed(message) => {
            return html! {
                <div class="flex justify-center items-center h-64">
                    <div class="text-destructive">{message.clone()}</div>
                </div>
            };
        }
        DashboardState::Ready(items) => visible_items(items, *filter, *order),
    };

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |value: String| {
            if let Some(next) = StatusFilter::from_value(&value) {
                filter.set(next);
            }
        })
    };
    let on_order = {
        let order = order.clone();
        Callback::from(move |value: String| {
            if let Some(next) = SortOrder::from_value(&value) {
                order.set(next);
            }
        })
    };
    let on_compact = {
        let compact = compact.clone();
        Callback::from(move |checked: bool| compact.set(checked))
    };
    let open_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_: MouseEvent| dialog_open.set(true))
    };
    let on_dialog_change = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |open: bool| dialog_open.set(open))
    };

    let cards = items
        .iter()
        .map(|item| item_card(item, *compact))
        .collect::<Html>();

    html! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold text-foreground">{"Dashboard"}</h2>
                <Button onclick={open_dialog}>{"Add New Item"}</Button>
            </div>
            <div class="flex flex-wrap items-center gap-6">
                <Select
                    class="w-48"
                    items={StatusFilter::choices()}
                    value={AttrValue::from(filter.as_value())}
                    on_value_change={on_filter}
                />
                <RadioGroup
                    class="grid-flow-col"
                    name="dashboard-sort"
                    items={SortOrder::choices()}
                    value={AttrValue::from(order.as_value())}
                    on_value_change={on_order}
                />
                <Switch label="Compact view" checked={*compact} on_checked_change={on_compact} />
            </div>
            if items.is_empty() {
                <p class="text-muted-foreground">{"No items match the current filter."}</p>
            }
            <div class="grid gap-4">
                {cards}
            </div>
            <NewItemDialog open={*dialog_open} on_open_change={on_dialog_change} />
        </div>
    }
}

fn item_card(item: &DashboardItem, compact: bool) -> Html {
    let on_edit = {
        let id = item.id.clone();
        Callback::from(move |_: MouseEvent| console::log!("edit item", id.clone()))
    };

    html! {
        <Card key={item.id.clone()}>
            <CardHeader class="flex-row justify-between items-start space-y-0">
                <h3 class="text-lg font-medium text-foreground">{item.title.clone()}</h3>
                <div class="flex items-center space-x-2">
                    <Badge variant={BadgeVariant::Outline} class={classes!("border-transparent", item.status.badge_class())}>
                        {item.status.as_str()}
                    </Badge>
                    <Button variant={ButtonVariant::Outline} size={ButtonSize::Sm} onclick={on_edit}>
                        {"Edit"}
                    </Button>
                </div>
            </CardHeader>
            <CardContent>
                if !compact {
                    <p class="text-muted-foreground mb-3">{item.description.clone()}</p>
                }
                <p class="text-sm text-muted-foreground">{item.created_caption()}</p>
            </CardContent>
        </Card>
    }
}
