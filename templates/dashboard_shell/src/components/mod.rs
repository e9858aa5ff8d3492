pub mod app_bar;
pub mod content;
pub mod help_drawer;
pub mod nav_drawer;

pub use app_bar::{draw_app_bar, AppBarModel, AppBarProps};
pub use content::{contain, draw_content, ContentModel};
pub use help_drawer::{draw_help_panel, HelpModel};
pub use nav_drawer::{
    draw_navigation, BrandProps, NavItem, NavSection, NavigationModel, UserBadge,
};
