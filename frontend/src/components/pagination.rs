use leptos::*;

pub const MAX_PAGE_BUTTONS: usize = 5;

/// Which pagination controls to show for a given page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current: usize,
    pub pages: Vec<usize>,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Up to five buttons starting two before the current page. Not shifted back near the end.
pub fn page_window(page_index: usize, total_pages: usize) -> PageWindow {
    if total_pages == 0 {
        return PageWindow {
            current: page_index,
            pages: Vec::new(),
            has_prev: page_index > 0,
            has_next: false,
        };
    }
    let start = page_index.saturating_sub(MAX_PAGE_BUTTONS / 2);
    let end = (total_pages - 1).min(start + MAX_PAGE_BUTTONS - 1);
    PageWindow {
        current: page_index,
        pages: (start..=end).collect(),
        has_prev: page_index > 0,
        has_next: page_index + 1 < total_pages,
    }
}

#[component]
pub fn Pagination(
    #[prop(into)] page_index: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    on_page: Callback<usize>,
) -> impl IntoView {
    let window = create_memo(move |_| page_window(page_index.get(), total_pages.get()));
    let button_class = "px-3 py-1 border border-slate-300 rounded text-slate-600 hover:bg-slate-50";

    view! {
        <div class="flex items-center gap-1">
            <Show when=move || window.with(|w| w.has_prev)>
                <button
                    class=button_class
                    on:click=move |_| on_page.call(window.with_untracked(|w| w.current - 1))
                >
                    "이전"
                </button>
            </Show>
            <For
                each=move || window.get().pages
                key=|page| *page
                children=move |page| {
                    let is_current = move || window.with(|w| w.current == page);
                    view! {
                        <Show
                            when=is_current
                            fallback=move || view! {
                                <button class=button_class on:click=move |_| on_page.call(page)>
                                    {page + 1}
                                </button>
                            }
                        >
                            <span class="px-3 py-1 font-bold bg-blue-500 text-white rounded">{page + 1}</span>
                        </Show>
                    }
                }
            />
            <Show when=move || window.with(|w| w.has_next)>
                <button
                    class=button_class
                    on:click=move |_| on_page.call(window.with_untracked(|w| w.current + 1))
                >
                    "다음"
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_no_previous() {
        let window = page_window(0, 10);
        assert_eq!(window.pages, vec![0, 1, 2, 3, 4]);
        assert!(!window.has_prev);
        assert!(window.has_next);
    }

    #[test]
    fn window_centres_on_current_page() {
        let window = page_window(5, 10);
        assert_eq!(window.pages, vec![3, 4, 5, 6, 7]);
        assert!(window.has_prev && window.has_next);
    }

    #[test]
    fn window_is_clipped_at_last_page() {
        let window = page_window(9, 10);
        assert_eq!(window.pages, vec![7, 8, 9]);
        assert!(!window.has_next);
    }

    #[test]
    fn single_page_shows_one_button() {
        let window = page_window(0, 1);
        assert_eq!(window.pages, vec![0]);
        assert!(!window.has_prev && !window.has_next);
    }

    #[test]
    fn no_pages_shows_nothing() {
        let window = page_window(0, 0);
        assert!(window.pages.is_empty());
        assert!(!window.has_prev && !window.has_next);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_prev_next_and_current_marker() {
        let html = render_to_string(move || {
            view! {
                <Pagination
                    page_index=Signal::derive(|| 2)
                    total_pages=Signal::derive(|| 6)
                    on_page=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("이전"));
        assert!(html.contains("다음"));
        assert!(html.contains("bg-blue-500"));
    }
}
