//! Dashboard: the caller's requests behind status tabs and a live search box,
//! plus the current inventory. Filtering never refetches; the tabs and the
//! search box only narrow what is already on the page.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Spinner, StatusBadge};
use crate::features::auth::state::use_auth;
use crate::features::inventory::client as inventory_client;
use crate::features::requests::client as requests_client;
use crate::features::requests::filter::{FILTER_ALL, STATUS_TABS, visible_requests};
use crate::features::requests::types::SupplyRequest;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let requests = LocalResource::new(move || async move { requests_client::fetch_requests().await });
    let inventory =
        LocalResource::new(move || async move { inventory_client::fetch_inventory().await });
    let (active_filter, set_active_filter) = signal(FILTER_ALL.to_string());
    let (query, set_query) = signal(String::new());

    let heading = move || {
        auth.session
            .get()
            .map(|session| format!("{} · {}", session.username, session.role))
            .unwrap_or_else(|| "Dashboard".to_string())
    };

    view! {
        <AppShell>
            <div class="space-y-8">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        {heading}
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Track your supply requests and current stock."
                    </p>
                </div>

                <div class="space-y-4">
                    <div class="flex flex-wrap items-center justify-between gap-4">
                        <div class="flex gap-1 border-b border-gray-200 dark:border-gray-700">
                            {STATUS_TABS
                                .into_iter()
                                .map(|(label, filter)| {
                                    view! {
                                        <button
                                            type="button"
                                            class=move || {
                                                if active_filter.get() == filter {
                                                    Theme::TAB_ACTIVE
                                                } else {
                                                    Theme::TAB_INACTIVE
                                                }
                                            }
                                            on:click=move |_| set_active_filter.set(filter.to_string())
                                        >
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <input
                            type="search"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 p-2.5 w-full sm:w-64 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                            placeholder="Search requests"
                            on:input=move |event| set_query.set(event_target_value(&event))
                        />
                    </div>

                    <div class="overflow-x-auto bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                            <thead class="bg-gray-50 dark:bg-gray-900/50">
                                <tr>
                                    <th scope="col" class=Theme::TH>"Message"</th>
                                    <th scope="col" class=Theme::TH>"Tag"</th>
                                    <th scope="col" class=Theme::TH>"Status"</th>
                                    <th scope="col" class=Theme::TH>"Submitted"</th>
                                    <th scope="col" class=Theme::TH>"Vendor"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                {move || match requests.get() {
                                    None => {
                                        view! {
                                            <tr>
                                                <td colspan="5" class="px-6 py-12 text-center">
                                                    <Spinner />
                                                </td>
                                            </tr>
                                        }
                                            .into_any()
                                    }
                                    Some(Err(err)) => {
                                        view! {
                                            <tr>
                                                <td colspan="5" class="px-6 py-4">
                                                    <Alert kind=AlertKind::Error message=err.to_string() />
                                                </td>
                                            </tr>
                                        }
                                            .into_any()
                                    }
                                    Some(Ok(list)) => {
                                        let rows: Vec<SupplyRequest> = visible_requests(
                                                &list,
                                                &active_filter.get(),
                                                &query.get(),
                                            )
                                            .into_iter()
                                            .cloned()
                                            .collect();
                                        if rows.is_empty() {
                                            view! {
                                                <tr>
                                                    <td colspan="5" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                                        "No requests match."
                                                    </td>
                                                </tr>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <For
                                                    each=move || rows.clone()
                                                    key=|request| request.id
                                                    children=|request| {
                                                        view! {
                                                            <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                                <td class=Theme::TD>{request.message}</td>
                                                                <td class=Theme::TD>{request.tag}</td>
                                                                <td class=Theme::TD>
                                                                    <StatusBadge status=request.status />
                                                                </td>
                                                                <td class=Theme::TD>{request.submitted_time}</td>
                                                                <td class=Theme::TD>
                                                                    {request.vendor_name.unwrap_or_else(|| "-".to_string())}
                                                                </td>
                                                            </tr>
                                                        }
                                                    }
                                                />
                                            }
                                                .into_any()
                                        }
                                    }
                                }}
                            </tbody>
                        </table>
                    </div>
                </div>

                <div class="space-y-4">
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                        "Inventory"
                    </h2>
                    <div class="overflow-x-auto bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                            <thead class="bg-gray-50 dark:bg-gray-900/50">
                                <tr>
                                    <th scope="col" class=Theme::TH>"Item"</th>
                                    <th scope="col" class=Theme::TH>"Quantity"</th>
                                    <th scope="col" class=Theme::TH>"Status"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                {move || match inventory.get() {
                                    None => {
                                        view! {
                                            <tr>
                                                <td colspan="3" class="px-6 py-12 text-center">
                                                    <Spinner />
                                                </td>
                                            </tr>
                                        }
                                            .into_any()
                                    }
                                    Some(Err(err)) => {
                                        view! {
                                            <tr>
                                                <td colspan="3" class="px-6 py-4">
                                                    <Alert kind=AlertKind::Error message=err.to_string() />
                                                </td>
                                            </tr>
                                        }
                                            .into_any()
                                    }
                                    Some(Ok(items)) => {
                                        view! {
                                            <For
                                                each=move || items.clone()
                                                key=|item| item.id
                                                children=|item| {
                                                    view! {
                                                        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                            <td class=Theme::TD>{item.item_name}</td>
                                                            <td class=Theme::TD>{item.quantity}</td>
                                                            <td class=Theme::TD>
                                                                <StatusBadge status=item.status.to_string() />
                                                            </td>
                                                        </tr>
                                                    }
                                                }
                                            />
                                        }
                                            .into_any()
                                    }
                                }}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
