//! Shared UI themes and Tailwind class constants to ensure visual consistency
//! across the application.

pub struct Theme;

impl Theme {
    /// Standard text input used across forms.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

    /// Standard form label.
    pub const LABEL: &'static str =
        "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    /// Table header cell.
    pub const TH: &'static str =
        "px-4 py-3 text-left text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider";

    /// Table body cell.
    pub const TD: &'static str = "px-4 py-3 text-sm text-gray-700 dark:text-gray-300";

    /// Status filter tab, selected state.
    pub const TAB_ACTIVE: &'static str =
        "px-4 py-2 text-sm font-medium rounded-t-lg text-blue-600 bg-blue-50 dark:bg-blue-900 dark:text-blue-400";

    /// Status filter tab, unselected state.
    pub const TAB_INACTIVE: &'static str = "px-4 py-2 text-sm font-medium rounded-t-lg text-gray-600 dark:text-gray-300 hover:bg-gray-50 dark:hover:bg-gray-800 hover:text-gray-900 dark:hover:text-white";
}
