pub mod use_scroll_monitor;
