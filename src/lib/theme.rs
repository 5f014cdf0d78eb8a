//! Shared Tailwind class constants to keep tables and cards visually
//! consistent across console routes.

pub struct Theme;

impl Theme {
    /// Card container used by console list views.
    pub const CARD: &'static str = "overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg";

    /// Table header cell.
    pub const TH: &'static str = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";

    /// Table body cell.
    pub const TD: &'static str = "px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400";

    /// Emphasized table body cell (first column).
    pub const TD_PRIMARY: &'static str = "px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white";

    /// Standard text input.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";

    /// Form field label.
    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    /// Inline link inside tables and lists.
    pub const LINK: &'static str = "text-blue-600 hover:text-blue-800 dark:text-blue-400 dark:hover:text-blue-300";
}
