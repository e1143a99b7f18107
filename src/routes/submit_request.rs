//! Submit-request form. The product dropdown drives which fields are visible
//! and what availability notice appears; typing a message preselects a tag
//! until the user picks one themselves.

use crate::app_lib::{AppError, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::Role;
use crate::features::inventory::availability::{
    NEW_PRODUCT_VALUE, NoticeKind, ProductSelection, availability_notice, shows_new_product_fields,
    shows_quantity,
};
use crate::features::inventory::client as inventory_client;
use crate::features::requests::client as requests_client;
use crate::features::requests::tagging::{role_tags, suggest_tag};
use crate::features::requests::types::NewRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

fn alert_kind(kind: NoticeKind) -> AlertKind {
    match kind {
        NoticeKind::Info => AlertKind::Info,
        NoticeKind::Success => AlertKind::Success,
        NoticeKind::Warning => AlertKind::Warning,
        NoticeKind::Danger => AlertKind::Error,
    }
}

#[component]
pub fn SubmitRequestPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let inventory =
        LocalResource::new(move || async move { inventory_client::fetch_inventory().await });

    let (message, set_message) = signal(String::new());
    let (tag, set_tag) = signal(String::new());
    let (tag_touched, set_tag_touched) = signal(false);
    let (product, set_product) = signal(String::new());
    let (quantity, set_quantity) = signal("1".to_string());
    let (new_product_name, set_new_product_name) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let role = move || {
        auth.session
            .get()
            .map(|session| session.role)
            .unwrap_or(Role::SalesExecutive)
    };

    let selection = move || {
        let value = product.get();
        if value.is_empty() {
            ProductSelection::Unselected
        } else if value == NEW_PRODUCT_VALUE {
            ProductSelection::NewProduct
        } else {
            match inventory.get() {
                Some(Ok(items)) => items
                    .iter()
                    .find(|item| item.item_name == value)
                    .map(|item| ProductSelection::Existing(item.status))
                    .unwrap_or(ProductSelection::Unselected),
                _ => ProductSelection::Unselected,
            }
        }
    };

    let submit_action = Action::new_local(move |input: &NewRequest| {
        let input = input.clone();
        async move { requests_client::submit_request(&input).await }
    });

    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => navigate("/", Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let message_value = message.get_untracked().trim().to_string();
        if message_value.is_empty() {
            set_error.set(Some(AppError::Config("A message is required.".to_string())));
            return;
        }
        let product_value = product.get_untracked();
        if product_value.is_empty() {
            set_error.set(Some(AppError::Config("Select a product.".to_string())));
            return;
        }
        let new_product = if product_value == NEW_PRODUCT_VALUE {
            let name = new_product_name.get_untracked().trim().to_string();
            if name.is_empty() {
                set_error.set(Some(AppError::Config(
                    "Name the new product you are requesting.".to_string(),
                )));
                return;
            }
            Some(name)
        } else {
            None
        };
        let tag_value = {
            let chosen = tag.get_untracked();
            if chosen.is_empty() {
                suggest_tag(role(), &message_value).to_string()
            } else {
                chosen
            }
        };

        submit_action.dispatch(NewRequest {
            message: message_value,
            tag: tag_value,
            product: product_value,
            quantity: quantity.get_untracked().trim().parse().unwrap_or(1),
            new_product_name: new_product,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-xl mx-auto space-y-5" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Submit Request"
                </h1>

                <div>
                    <label class=Theme::LABEL for="message">
                        "Message"
                    </label>
                    <textarea
                        id="message"
                        class=Theme::INPUT
                        rows="3"
                        placeholder="What do you need?"
                        required
                        on:input=move |event| {
                            let value = event_target_value(&event);
                            if !tag_touched.get_untracked() {
                                set_tag.set(suggest_tag(role(), &value).to_string());
                            }
                            set_message.set(value);
                        }
                    ></textarea>
                </div>

                <div>
                    <label class=Theme::LABEL for="tag">
                        "Tag"
                    </label>
                    <select
                        id="tag"
                        class=Theme::INPUT
                        prop:value=move || {
                            let chosen = tag.get();
                            if chosen.is_empty() {
                                suggest_tag(role(), &message.get()).to_string()
                            } else {
                                chosen
                            }
                        }
                        on:change=move |event| {
                            set_tag_touched.set(true);
                            set_tag.set(event_target_value(&event));
                        }
                    >
                        {move || {
                            role_tags(role())
                                .into_iter()
                                .map(|option| view! { <option value=option>{option}</option> })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div>
                    <label class=Theme::LABEL for="product">
                        "Product"
                    </label>
                    <select
                        id="product"
                        class=Theme::INPUT
                        prop:value=move || product.get()
                        on:change=move |event| set_product.set(event_target_value(&event))
                    >
                        <option value="">"-- Select a product --"</option>
                        <option value=NEW_PRODUCT_VALUE>"Request a new product"</option>
                        {move || {
                            inventory
                                .get()
                                .and_then(Result::ok)
                                .map(|items| {
                                    items
                                        .into_iter()
                                        .map(|item| {
                                            let label = format!("{} ({})", item.item_name, item.status);
                                            view! {
                                                <option value=item.item_name.clone()>{label}</option>
                                            }
                                        })
                                        .collect_view()
                                })
                        }}
                    </select>
                </div>

                {move || {
                    availability_notice(selection())
                        .map(|notice| {
                            view! {
                                <Alert
                                    kind=alert_kind(notice.kind)
                                    message=notice.message.to_string()
                                />
                            }
                        })
                }}

                <Show when=move || shows_new_product_fields(selection())>
                    <div>
                        <label class=Theme::LABEL for="new-product-name">
                            "New product name"
                        </label>
                        <input
                            id="new-product-name"
                            type="text"
                            class=Theme::INPUT
                            placeholder="Product E"
                            on:input=move |event| set_new_product_name.set(event_target_value(&event))
                        />
                    </div>
                </Show>

                <Show when=move || shows_quantity(selection())>
                    <div>
                        <label class=Theme::LABEL for="quantity">
                            "Quantity"
                        </label>
                        <input
                            id="quantity"
                            type="number"
                            min="1"
                            class=Theme::INPUT
                            prop:value=move || quantity.get()
                            on:input=move |event| set_quantity.set(event_target_value(&event))
                        />
                    </div>
                </Show>

                <Button button_type="submit" disabled=submit_action.pending()>
                    "Submit"
                </Button>
                {move || {
                    submit_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=err.to_string() />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}
