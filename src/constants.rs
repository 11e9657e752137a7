// DOM hooks the front-end binds to. Kept free of web-sys so host tests can
// include this file directly.

// Backdrop
pub const BACKDROP_CANVAS_ID: &str = "bg-canvas";

// Theme toggle
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const MOBILE_THEME_TOGGLE_ID: &str = "mobileThemeToggle";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const DARK_THEME_VALUE: &str = "dark";

// Page chrome
pub const PROGRESS_BAR_ID: &str = "progress-bar";
pub const COPYRIGHT_YEAR_ID: &str = "copyright-year";
pub const MOBILE_MENU_ID: &str = "mobileMenu";
pub const BURGER_ICON_SELECTOR: &str = ".acl-burger-btn i";
pub const MENU_OPEN_ICON: &str = "fa-times";
pub const MENU_CLOSED_ICON: &str = "fa-bars";

// Effects
pub const TILT_CARD_SELECTOR: &str = ".tilt-card";
pub const NAV_SECTION_SELECTOR: &str = ".acl-section, #home";
pub const NAV_LINK_SELECTOR: &str = ".acl-nav-link";
pub const ACTIVE_CLASS: &str = "active";
pub const REVEAL_SECTION_SELECTOR: &str = ".acl-section";
pub const VISIBLE_CLASS: &str = "visible";

// Stats count-up
pub const STATS_SECTION_SELECTOR: &str = ".acl-quick-stats";
pub const COUNTER_SELECTOR: &str = ".count";
pub const COUNTER_TARGET_ATTRIBUTE: &str = "data-target";

// Popups
pub const POPUP_SHOWN_DISPLAY: &str = "flex";
pub const POPUP_HIDDEN_DISPLAY: &str = "none";
