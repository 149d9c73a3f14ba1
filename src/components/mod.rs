pub mod alert_modal;
pub mod search_bar;
pub mod stat_grid;
pub mod weather_body;
pub mod weather_panel;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use alert_modal::{ALERT_ICON, AlertModal, AlertModalProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use stat_grid::{StatCell, StatGrid, StatGridProps, stat_cells};
pub use weather_body::{WeatherBody, WeatherBodyProps};
pub use weather_panel::{WeatherPanel, WeatherPanelProps};
