// Synthetic market domain
pub mod stock_params;
pub mod trading_calendar;
pub mod types;
