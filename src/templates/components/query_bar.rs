use crate::store::{Filter, ListingStore, SortKey};
use crate::templates::components::listing_card;
use maud::{html, Markup};

/// What the results region shows: the query session plus labels.
pub struct ResultsVm<'a> {
    pub store: &'a ListingStore,
}

fn filter_label<'a>(filter: &'a Filter, all_label: &'a str) -> &'a str {
    match filter {
        Filter::All => all_label,
        Filter::Only(value) => value,
    }
}

fn filter_select(
    name: &str,
    label: &str,
    all_label: &str,
    options: &[Filter],
    current: &Filter,
) -> Markup {
    html! {
        label class="query-field" {
            span { (label) }
            select name=(name) {
                @for option in options {
                    option value=(option.as_str()) selected[option == current] {
                        (filter_label(option, all_label))
                    }
                }
            }
        }
    }
}

/// Filter controls, sort control and the listing grid, swapped as one fragment.
///
/// The filter form never forwards `sort`, so every filter change comes back
/// with the default order; the sort form forwards both filters.
pub fn results(vm: &ResultsVm) -> Markup {
    let store = vm.store;
    let options = store.options();
    let unit_type = store.unit_type_filter();
    let status = store.status_filter();
    let shown = store.displayed_indices().len();

    html! {
        section id="results" {
            div class="query-bar" {
                form
                    class="filters"
                    action="/"
                    method="get"
                    hx-get="/listings"
                    hx-target="#results"
                    hx-swap="outerHTML"
                    hx-trigger="change"
                {
                    (filter_select("unit_type", "户型", "全部户型", &options.unit_types, unit_type))
                    (filter_select("status", "销售状态", "全部状态", &options.statuses, status))
                }

                form
                    class="sort"
                    action="/"
                    method="get"
                    hx-get="/listings"
                    hx-target="#results"
                    hx-swap="outerHTML"
                    hx-trigger="change"
                {
                    input type="hidden" name="unit_type" value=(unit_type.as_str());
                    input type="hidden" name="status" value=(status.as_str());
                    label class="query-field" {
                        span { "排序" }
                        select name="sort" {
                            @for key in SortKey::ALL {
                                option value=(key.as_str()) selected[key == store.sort_key()] {
                                    (key.label())
                                }
                            }
                        }
                    }
                }
            }

            p class="result-count" { "共 " strong { (shown) } " 个楼盘" }

            @if shown == 0 {
                p class="empty" { "暂无楼盘数据" }
            } @else {
                div class="listing-grid" {
                    @for (index, listing) in store.displayed() {
                        (listing_card(index, listing, unit_type))
                    }
                }
            }
        }
    }
}
