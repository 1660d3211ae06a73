//! The header and bottom tab bar shared by every page.

use maud::{Markup, html};

use crate::endpoints;

/// The pages reachable from the navigation bar, in display order.
const NAV_LINKS: [(&str, &str); 4] = [
    (endpoints::NEW_EXPENSE_VIEW, "Add Expense"),
    (endpoints::EXPENSES_VIEW, "Expenses"),
    (endpoints::REPORT_VIEW, "Report"),
    (endpoints::SETTINGS_VIEW, "Settings"),
];

/// Where a link is drawn: the header on wide screens or the tab bar on narrow ones.
#[derive(Clone, Copy)]
enum Placement {
    Header,
    TabBar,
}

impl Placement {
    fn link_style(self, is_current: bool) -> &'static str {
        match (self, is_current) {
            (Placement::Header, true) => {
                "px-3 py-2 rounded-md text-blue-700 font-semibold dark:text-blue-400"
            }
            (Placement::Header, false) => {
                "px-3 py-2 rounded-md text-gray-700 hover:text-blue-700 \
                dark:text-gray-300 dark:hover:text-blue-400"
            }
            (Placement::TabBar, true) => {
                "flex justify-center rounded-lg px-2 py-2 bg-blue-50 text-blue-700 \
                dark:bg-blue-900/30 dark:text-blue-200"
            }
            (Placement::TabBar, false) => {
                "flex justify-center rounded-lg px-2 py-2 text-gray-600 \
                hover:text-blue-700 dark:text-gray-300 dark:hover:text-blue-200"
            }
        }
    }
}

/// The navigation links with the link for `active_endpoint` highlighted.
pub struct NavBar<'a> {
    active_endpoint: &'a str,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// A link is marked as the current page only when its URL is exactly
    /// `active_endpoint`.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        NavBar { active_endpoint }
    }

    fn links(&self, placement: Placement) -> Markup {
        html!(
            @for (url, title) in NAV_LINKS {
                @let is_current = url == self.active_endpoint;
                li class="min-w-0" {
                    a
                        href=(url)
                        class=(placement.link_style(is_current))
                        aria-current=[is_current.then_some("page")]
                    { (title) }
                }
            }
        )
    }

    pub fn into_html(self) -> Markup {
        html!(
            header class="bg-white shadow-sm dark:bg-gray-900"
            {
                div class="max-w-screen-xl mx-auto flex items-center justify-between p-4"
                {
                    a
                        href=(endpoints::ROOT)
                        class="text-xl font-semibold text-gray-900 dark:text-white"
                    { "Smart Expense Tracker" }

                    nav class="hidden lg:block" aria-label="Primary"
                    {
                        ul class="flex gap-4 text-sm" { (self.links(Placement::Header)) }
                    }
                }
            }

            nav
                class="fixed inset-x-0 bottom-0 z-40 border-t border-gray-200 bg-white/95
                dark:border-gray-700 dark:bg-gray-900/95 lg:hidden"
                aria-label="Tabs"
            {
                ul class="grid grid-cols-4 gap-2 px-4 py-3 text-xs font-semibold"
                {
                    (self.links(Placement::TabBar))
                }
            }
        )
    }
}
